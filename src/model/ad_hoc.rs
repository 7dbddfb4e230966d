use super::{NameGroup, Point};
use crate::extension::VendorExtensions;

/// Bit range and discrete indices selecting part of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartSelect {
    /// `ipxact:range/ipxact:left` expression.
    pub left_range: String,
    /// `ipxact:range/ipxact:right` expression.
    pub right_range: String,
    /// `ipxact:indices/ipxact:index` expressions, in order.
    pub indices: Vec<String>,
}

impl PartSelect {
    pub fn new(left_range: impl Into<String>, right_range: impl Into<String>) -> Self {
        Self {
            left_range: left_range.into(),
            right_range: right_range.into(),
            indices: Vec::new(),
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.indices.push(index.into());
        self
    }

    /// Whether either range bound is set.
    pub fn has_range(&self) -> bool {
        !self.left_range.is_empty() || !self.right_range.is_empty()
    }
}

/// Reference to a port of an instance (internal) or of the enclosing component (external).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortReference {
    pub port_ref: String,
    /// Owning component instance; empty for external references.
    pub component_ref: String,
    /// Presence expression; empty means always present.
    pub is_present: String,
    /// Absent means the whole port is referenced.
    pub part_select: Option<PartSelect>,
    /// 2022 sub-port slicing.
    pub sub_port_references: Vec<PortReference>,
}

impl PortReference {
    /// Reference to a port of the enclosing component.
    pub fn external(port_ref: impl Into<String>) -> Self {
        Self {
            port_ref: port_ref.into(),
            ..Self::default()
        }
    }

    /// Reference to a port of a component instance.
    pub fn internal(port_ref: impl Into<String>, component_ref: impl Into<String>) -> Self {
        Self {
            port_ref: port_ref.into(),
            component_ref: component_ref.into(),
            ..Self::default()
        }
    }

    pub fn with_part_select(mut self, part_select: PartSelect) -> Self {
        self.part_select = Some(part_select);
        self
    }

    pub fn with_sub_port(mut self, sub_port: PortReference) -> Self {
        self.sub_port_references.push(sub_port);
        self
    }
}

/// Direct port-to-port connection without a bus abstraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdHocConnection {
    pub name_group: NameGroup,
    /// Presence expression; empty means always present.
    pub is_present: String,
    /// Constant driven onto the connected ports instead of a wire.
    pub tied_value: String,
    /// Ports of component instances.
    pub internal_port_references: Vec<PortReference>,
    /// Ports of the design's own component.
    pub external_port_references: Vec<PortReference>,
    /// Drawn as off-page connectors (`kactus2:offPage`).
    pub off_page: bool,
    /// Diagram route (`kactus2:route`).
    pub route: Vec<Point>,
    /// Extensions other than off-page and route.
    pub vendor_extensions: VendorExtensions,
}

impl AdHocConnection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn with_tied_value(mut self, tied_value: impl Into<String>) -> Self {
        self.tied_value = tied_value.into();
        self
    }

    pub fn with_internal_port(mut self, port: PortReference) -> Self {
        self.internal_port_references.push(port);
        self
    }

    pub fn with_external_port(mut self, port: PortReference) -> Self {
        self.external_port_references.push(port);
        self
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}
