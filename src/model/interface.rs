//! Connection endpoints.
//!
//! Endpoint equality and ordering only look at the reference fields, compared
//! case-insensitively: bus reference first, then component reference.
//! Descriptions, presence and extensions do not take part.

use std::cmp::Ordering;

use super::Point;
use crate::extension::VendorExtensions;

/// Fields shared by every endpoint kind for comparison purposes.
pub trait InterfaceRef {
    /// Referenced component instance, empty for hierarchical endpoints.
    fn component_ref(&self) -> &str;
    /// Referenced bus interface.
    fn bus_ref(&self) -> &str;

    /// Whether this endpoint points at `bus_ref` on `component_ref` (exact match).
    fn references(&self, component_ref: &str, bus_ref: &str) -> bool {
        self.component_ref() == component_ref && self.bus_ref() == bus_ref
    }
}

/// Compare two strings ignoring case.
pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}

fn cmp_refs(a: &impl InterfaceRef, b: &impl InterfaceRef) -> Ordering {
    cmp_ignore_case(a.bus_ref(), b.bus_ref())
        .then_with(|| cmp_ignore_case(a.component_ref(), b.component_ref()))
}

macro_rules! impl_ref_ordering {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                cmp_refs(self, other) == Ordering::Equal
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                cmp_refs(self, other)
            }
        }
    };
}

// ============================================================================
// HIERARCHICAL INTERFACE
// ============================================================================

/// Endpoint bound to a bus interface of the enclosing component.
#[derive(Debug, Clone, Default)]
pub struct HierInterface {
    /// Bus interface of the design's own component.
    pub bus_ref: String,
    pub is_present: String,
    pub description: String,
    /// Diagram route, stored as a `kactus2:route` vendor extension.
    pub route: Vec<Point>,
    pub vendor_extensions: VendorExtensions,
}

impl HierInterface {
    pub fn new(bus_ref: impl Into<String>) -> Self {
        Self {
            bus_ref: bus_ref.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_route(mut self, route: Vec<Point>) -> Self {
        self.route = route;
        self
    }
}

impl InterfaceRef for HierInterface {
    fn component_ref(&self) -> &str {
        ""
    }

    fn bus_ref(&self) -> &str {
        &self.bus_ref
    }
}

impl_ref_ordering!(HierInterface);

// ============================================================================
// ACTIVE INTERFACE
// ============================================================================

/// Endpoint bound to a bus interface of a component instance.
#[derive(Debug, Clone, Default)]
pub struct ActiveInterface {
    /// Instance name of the connected component.
    pub component_ref: String,
    /// Bus interface on that instance.
    pub bus_ref: String,
    /// Presence expression; empty means always present.
    pub is_present: String,
    pub description: String,
    /// Logical ports left out of the connection.
    pub exclude_ports: Vec<String>,
    /// Diagram route, stored as a `kactus2:route` vendor extension.
    pub route: Vec<Point>,
    pub vendor_extensions: VendorExtensions,
}

impl ActiveInterface {
    pub fn new(component_ref: impl Into<String>, bus_ref: impl Into<String>) -> Self {
        Self {
            component_ref: component_ref.into(),
            bus_ref: bus_ref.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_exclude_port(mut self, port: impl Into<String>) -> Self {
        self.exclude_ports.push(port.into());
        self
    }
}

impl InterfaceRef for ActiveInterface {
    fn component_ref(&self) -> &str {
        &self.component_ref
    }

    fn bus_ref(&self) -> &str {
        &self.bus_ref
    }
}

impl_ref_ordering!(ActiveInterface);

// ============================================================================
// MONITOR INTERFACE
// ============================================================================

/// Endpoint observing a bus interface of a component instance.
#[derive(Debug, Clone, Default)]
pub struct MonitorInterface {
    pub component_ref: String,
    pub bus_ref: String,
    /// Hierarchical path to the monitored instance, optional.
    pub path: String,
    pub is_present: String,
    pub description: String,
    pub vendor_extensions: VendorExtensions,
}

impl MonitorInterface {
    pub fn new(component_ref: impl Into<String>, bus_ref: impl Into<String>) -> Self {
        Self {
            component_ref: component_ref.into(),
            bus_ref: bus_ref.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl InterfaceRef for MonitorInterface {
    fn component_ref(&self) -> &str {
        &self.component_ref
    }

    fn bus_ref(&self) -> &str {
        &self.bus_ref
    }
}

impl_ref_ordering!(MonitorInterface);
