/// Design-level parameter (`ipxact:parameter`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    /// `parameterId` attribute.
    pub parameter_id: String,
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(
        parameter_id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            parameter_id: parameter_id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Design-level assertion (`ipxact:assertion`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assertion {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Boolean expression that must hold.
    pub assert: String,
}

impl Assertion {
    pub fn new(name: impl Into<String>, assert: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assert: assert.into(),
            ..Self::default()
        }
    }
}
