//! Typed Kactus2 extensions stored on the design itself.

use indexmap::IndexMap;

use super::tag;
use crate::model::{NameGroup, Point};
use crate::vlnv::Vlnv;

// ============================================================================
// IMPLEMENTATION
// ============================================================================

/// Domain a design describes, stored as `kactus2:kts_implementation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Implementation {
    #[default]
    Hw,
    Sw,
    System,
}

impl Implementation {
    pub fn as_str(self) -> &'static str {
        match self {
            Implementation::Hw => "HW",
            Implementation::Sw => "SW",
            Implementation::System => "SYS",
        }
    }

    /// Unrecognized values read as [`Implementation::Hw`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "SW" => Implementation::Sw,
            "SYS" => Implementation::System,
            _ => Implementation::Hw,
        }
    }
}

// ============================================================================
// COLUMN LAYOUT
// ============================================================================

/// What a diagram column holds. Serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnContentType {
    Io,
    Buses,
    #[default]
    Components,
    Custom,
}

impl ColumnContentType {
    pub fn code(self) -> u8 {
        match self {
            ColumnContentType::Io => 0,
            ColumnContentType::Buses => 1,
            ColumnContentType::Components => 2,
            ColumnContentType::Custom => 3,
        }
    }

    /// Unknown codes map to [`ColumnContentType::Custom`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => ColumnContentType::Io,
            "1" => ColumnContentType::Buses,
            "2" => ColumnContentType::Components,
            _ => ColumnContentType::Custom,
        }
    }
}

/// Default and minimum column width in the diagram.
pub const DEFAULT_COLUMN_WIDTH: u32 = 259;

/// One `kactus2:column` of the diagram layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDesc {
    pub name: String,
    pub content_type: ColumnContentType,
    pub allowed_items: u32,
    pub min_width: u32,
    pub width: u32,
    pub x: i32,
}

impl ColumnDesc {
    pub fn new(name: impl Into<String>, content_type: ColumnContentType) -> Self {
        Self {
            name: name.into(),
            content_type,
            allowed_items: 0,
            min_width: DEFAULT_COLUMN_WIDTH,
            width: DEFAULT_COLUMN_WIDTH,
            x: 0,
        }
    }

    pub fn with_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }
}

// ============================================================================
// ROUTES
// ============================================================================

/// Stored diagram route of a named connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRoute {
    /// Name of the routed connection (`kactus2:connRef`).
    pub name: String,
    pub off_page: bool,
    pub route: Vec<Point>,
}

impl ConnectionRoute {
    pub fn new(name: impl Into<String>, route: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            off_page: false,
            route,
        }
    }
}

// ============================================================================
// SW INSTANCES
// ============================================================================

/// Software component instance placed on a system design.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwInstance {
    /// `name` holds the instance name.
    pub name_group: NameGroup,
    pub component_ref: Vlnv,
    pub file_set_ref: String,
    /// HW instance this instance is mapped to.
    pub mapping: String,
    pub position: Option<Point>,
    pub imported: bool,
    pub import_ref: String,
    pub draft: bool,
    pub property_values: IndexMap<String, String>,
    pub api_interface_positions: IndexMap<String, Point>,
    pub com_interface_positions: IndexMap<String, Point>,
}

impl SwInstance {
    pub fn new(instance_name: impl Into<String>, component_ref: Vlnv) -> Self {
        Self {
            name_group: NameGroup::new(instance_name),
            component_ref,
            ..Self::default()
        }
    }

    pub fn instance_name(&self) -> &str {
        &self.name_group.name
    }
}

// ============================================================================
// API / COM CONNECTIONS
// ============================================================================

/// Kind of software interface a connection joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwInterfaceKind {
    Api,
    Com,
}

impl SwInterfaceKind {
    pub fn group_tag(self) -> &'static str {
        match self {
            SwInterfaceKind::Api => tag::API_CONNECTIONS,
            SwInterfaceKind::Com => tag::COM_CONNECTIONS,
        }
    }

    pub fn connection_tag(self) -> &'static str {
        match self {
            SwInterfaceKind::Api => tag::API_CONNECTION,
            SwInterfaceKind::Com => tag::COM_CONNECTION,
        }
    }

    pub fn active_tag(self) -> &'static str {
        match self {
            SwInterfaceKind::Api => "kactus2:activeApiInterface",
            SwInterfaceKind::Com => "kactus2:activeComInterface",
        }
    }

    pub fn hier_tag(self) -> &'static str {
        match self {
            SwInterfaceKind::Api => "kactus2:hierApiInterface",
            SwInterfaceKind::Com => "kactus2:hierComInterface",
        }
    }

    /// Attribute naming the referenced interface.
    pub fn ref_attribute(self) -> &'static str {
        match self {
            SwInterfaceKind::Api => "apiRef",
            SwInterfaceKind::Com => "comRef",
        }
    }
}

/// Endpoint of an API/COM connection. Hierarchical endpoints have no component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwInterfaceRef {
    pub component_ref: String,
    pub interface_ref: String,
}

impl SwInterfaceRef {
    pub fn active(component_ref: impl Into<String>, interface_ref: impl Into<String>) -> Self {
        Self {
            component_ref: component_ref.into(),
            interface_ref: interface_ref.into(),
        }
    }

    pub fn hierarchical(interface_ref: impl Into<String>) -> Self {
        Self {
            component_ref: String::new(),
            interface_ref: interface_ref.into(),
        }
    }
}

/// API or COM connection between software interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwInterconnection {
    pub kind: SwInterfaceKind,
    pub name_group: NameGroup,
    pub active_interfaces: Vec<SwInterfaceRef>,
    pub hier_interfaces: Vec<SwInterfaceRef>,
}

impl SwInterconnection {
    pub fn new(kind: SwInterfaceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name_group: NameGroup::new(name),
            active_interfaces: Vec::new(),
            hier_interfaces: Vec::new(),
        }
    }

    pub fn with_active(mut self, endpoint: SwInterfaceRef) -> Self {
        self.active_interfaces.push(endpoint);
        self
    }

    pub fn with_hier(mut self, endpoint: SwInterfaceRef) -> Self {
        self.hier_interfaces.push(endpoint);
        self
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

// ============================================================================
// INTERFACE GRAPHICS AND NOTES
// ============================================================================

/// Placement of a hierarchical interface symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceGraphicsData {
    pub name: String,
    pub position: Point,
    pub direction: Point,
}

impl InterfaceGraphicsData {
    pub fn new(name: impl Into<String>, position: Point, direction: Point) -> Self {
        Self {
            name: name.into(),
            position,
            direction,
        }
    }
}

/// Free-text sticky note on the diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub position: Point,
    pub content: String,
    pub timestamp: String,
}

impl Note {
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            timestamp: String::new(),
        }
    }
}
