use super::VendorExtension;

/// Empty element identified by its type name and attributes, e.g.
/// `<kactus2:adHocVisible portName="clk" x="10" y="20"/>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kactus2Placeholder {
    pub type_name: String,
    pub attributes: Vec<(String, String)>,
}

impl Kactus2Placeholder {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, keeping its original position when it already exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }
}

/// Element holding a single text value, e.g. `<kactus2:version>3.0.0</kactus2:version>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kactus2Value {
    pub type_name: String,
    pub value: String,
}

impl Kactus2Value {
    pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// Named container of extensions, e.g. `kactus2:columnLayout`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kactus2Group {
    pub type_name: String,
    pub items: Vec<VendorExtension>,
}

impl Kactus2Group {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: VendorExtension) -> Self {
        self.items.push(item);
        self
    }

    pub fn items_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a VendorExtension> + 'a {
        self.items
            .iter()
            .filter(move |item| item.type_name() == type_name)
    }
}
