/// Name, display name and descriptions shared by most design elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameGroup {
    pub name: String,
    /// Human-readable label; `name` stays the identifier.
    pub display_name: String,
    /// Only written for 2022 documents.
    pub short_description: String,
    pub description: String,
}

impl NameGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
