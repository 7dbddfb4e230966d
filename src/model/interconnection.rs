use super::{ActiveInterface, HierInterface, InterfaceRef, MonitorInterface, NameGroup};
use crate::extension::VendorExtensions;

/// Bus-level link between a start interface and any number of further endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interconnection {
    pub name_group: NameGroup,
    /// Presence expression; empty means always present.
    pub is_present: String,
    /// First `ipxact:activeInterface` of the connection.
    pub start_interface: ActiveInterface,
    /// Endpoints after the start interface.
    pub active_interfaces: Vec<ActiveInterface>,
    pub hier_interfaces: Vec<HierInterface>,
    /// Stored as a `kactus2:offPage` vendor extension.
    pub off_page: bool,
    /// Extensions other than off-page.
    pub vendor_extensions: VendorExtensions,
}

impl Interconnection {
    pub fn new(name: impl Into<String>, start_interface: ActiveInterface) -> Self {
        Self {
            name_group: NameGroup::new(name),
            start_interface,
            ..Self::default()
        }
    }

    pub fn with_name_group(mut self, name_group: NameGroup) -> Self {
        self.name_group = name_group;
        self
    }

    pub fn with_active_interface(mut self, interface: ActiveInterface) -> Self {
        self.active_interfaces.push(interface);
        self
    }

    pub fn with_hier_interface(mut self, interface: HierInterface) -> Self {
        self.hier_interfaces.push(interface);
        self
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    /// Whether the start or any active interface references `bus_ref` on `component_ref`.
    pub fn has_interface_referencing_component(&self, component_ref: &str, bus_ref: &str) -> bool {
        std::iter::once(&self.start_interface)
            .chain(&self.active_interfaces)
            .any(|interface| interface.references(component_ref, bus_ref))
    }
}

/// Link between a monitored active interface and its observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorInterconnection {
    pub name_group: NameGroup,
    pub is_present: String,
    /// The interface being observed.
    pub monitored_active_interface: MonitorInterface,
    /// Monitor ports attached to it.
    pub monitor_interfaces: Vec<MonitorInterface>,
}

impl MonitorInterconnection {
    pub fn new(name: impl Into<String>, monitored_active_interface: MonitorInterface) -> Self {
        Self {
            name_group: NameGroup::new(name),
            monitored_active_interface,
            ..Self::default()
        }
    }

    pub fn with_monitor_interface(mut self, interface: MonitorInterface) -> Self {
        self.monitor_interfaces.push(interface);
        self
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}
