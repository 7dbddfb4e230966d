//! Vendor/Library/Name/Version identifiers.

use std::fmt;

/// Kind of document a VLNV points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VlnvType {
    #[default]
    Invalid,
    Design,
    Component,
    DesignConfiguration,
    BusDefinition,
    AbstractionDefinition,
}

/// Four-part identifier naming an IP-XACT document.
///
/// Equality compares the four parts only; the type tag is metadata.
#[derive(Debug, Clone, Default, Eq)]
pub struct Vlnv {
    pub vlnv_type: VlnvType,
    pub vendor: String,
    pub library: String,
    pub name: String,
    pub version: String,
}

impl Vlnv {
    pub fn new(
        vlnv_type: VlnvType,
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vlnv_type,
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Builder: replace the type tag.
    pub fn with_type(mut self, vlnv_type: VlnvType) -> Self {
        self.vlnv_type = vlnv_type;
        self
    }

    /// All four parts are set.
    pub fn is_valid(&self) -> bool {
        !self.vendor.is_empty()
            && !self.library.is_empty()
            && !self.name.is_empty()
            && !self.version.is_empty()
    }

    /// None of the four parts are set.
    pub fn is_empty(&self) -> bool {
        self.vendor.is_empty()
            && self.library.is_empty()
            && self.name.is_empty()
            && self.version.is_empty()
    }
}

impl PartialEq for Vlnv {
    fn eq(&self, other: &Self) -> bool {
        self.vendor == other.vendor
            && self.library == other.library
            && self.name == other.name
            && self.version == other.version
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.vendor, self.library, self.name, self.version)
    }
}

/// Override of a configurable element on a referenced component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurableElementValue {
    pub reference_id: String,
    pub value: String,
}

impl ConfigurableElementValue {
    pub fn new(value: impl Into<String>, reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            value: value.into(),
        }
    }
}

/// A component reference carrying configurable element values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurableVlnvReference {
    pub vlnv: Vlnv,
    pub configurable_element_values: Vec<ConfigurableElementValue>,
}

impl ConfigurableVlnvReference {
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv,
            configurable_element_values: Vec::new(),
        }
    }

    /// Builder: append a configurable element value.
    pub fn with_element_value(mut self, value: ConfigurableElementValue) -> Self {
        self.configurable_element_values.push(value);
        self
    }

    pub fn has_configurable_element_value(&self, reference_id: &str) -> bool {
        self.configurable_element_values
            .iter()
            .any(|element| element.reference_id == reference_id)
    }

    /// Value of the first element referencing `reference_id`, empty if none.
    pub fn single_configurable_element_value(&self, reference_id: &str) -> String {
        self.configurable_element_values
            .iter()
            .find(|element| element.reference_id == reference_id)
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }
}
