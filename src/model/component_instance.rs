//! Placed component instances.
//!
//! Besides the standard `ipxact:componentInstance` content, an instance
//! carries Kactus2 diagram data (position, port positions, SW properties)
//! that is serialized as vendor extensions.

use indexmap::IndexMap;
use uuid::Uuid;

use super::{NameGroup, Point};
use crate::extension::VendorExtensions;
use crate::vlnv::ConfigurableVlnvReference;

/// Create a fresh instance identifier.
pub fn generate_uuid() -> String {
    format!("{{{}}}", Uuid::new_v4())
}

/// Link from an instance's power domain to a domain of the enclosing design (2022).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerDomainLink {
    /// Power domain of the containing design.
    pub external_reference: String,
    /// Power domains of the instantiated component bound to it.
    pub internal_references: Vec<String>,
}

impl PowerDomainLink {
    pub fn new(external_reference: impl Into<String>) -> Self {
        Self {
            external_reference: external_reference.into(),
            internal_references: Vec::new(),
        }
    }

    pub fn with_internal_reference(mut self, reference: impl Into<String>) -> Self {
        self.internal_references.push(reference.into());
        self
    }
}

/// One placed instance of a referenced component.
///
/// The UUID is never empty: it is generated on construction and whenever an
/// empty value is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    /// `name` holds the instance name.
    pub name_group: NameGroup,
    /// Presence expression; empty means always present.
    pub is_present: String,
    pub component_ref: ConfigurableVlnvReference,
    /// Written for 2022 documents only.
    pub power_domain_links: Vec<PowerDomainLink>,
    /// Diagram position; `None` when never placed.
    pub position: Option<Point>,
    /// Created by importing another design.
    pub imported: bool,
    /// Source of the import; may be empty even when imported.
    pub import_ref: String,
    /// Keyed by bus interface name.
    pub bus_interface_positions: IndexMap<String, Point>,
    /// Keyed by port name.
    pub ad_hoc_port_positions: IndexMap<String, Point>,
    pub api_interface_positions: IndexMap<String, Point>,
    pub com_interface_positions: IndexMap<String, Point>,
    pub property_values: IndexMap<String, String>,
    /// Placeholder without a packaged component.
    pub draft: bool,
    uuid: String,
    /// Extensions not recognized as Kactus2 instance data.
    pub vendor_extensions: VendorExtensions,
}

impl Default for ComponentInstance {
    fn default() -> Self {
        Self::new("", ConfigurableVlnvReference::default())
    }
}

impl ComponentInstance {
    pub fn new(instance_name: impl Into<String>, component_ref: ConfigurableVlnvReference) -> Self {
        Self {
            name_group: NameGroup::new(instance_name),
            is_present: String::new(),
            component_ref,
            power_domain_links: Vec::new(),
            position: None,
            imported: false,
            import_ref: String::new(),
            bus_interface_positions: IndexMap::new(),
            ad_hoc_port_positions: IndexMap::new(),
            api_interface_positions: IndexMap::new(),
            com_interface_positions: IndexMap::new(),
            property_values: IndexMap::new(),
            draft: false,
            uuid: generate_uuid(),
            vendor_extensions: VendorExtensions::default(),
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.set_uuid(uuid);
        self
    }

    pub fn instance_name(&self) -> &str {
        &self.name_group.name
    }

    pub fn set_instance_name(&mut self, name: impl Into<String>) {
        self.name_group.name = name.into();
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Assign the UUID; an empty value generates a new one.
    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        let uuid = uuid.into();
        self.uuid = if uuid.is_empty() { generate_uuid() } else { uuid };
    }

    /// Mark the instance as imported from `import_ref` (may be empty).
    pub fn set_imported(&mut self, import_ref: impl Into<String>) {
        self.imported = true;
        self.import_ref = import_ref.into();
    }

    /// Ports shown as ad-hoc visible on this instance.
    pub fn port_ad_hoc_visibilities(&self) -> IndexMap<String, bool> {
        self.ad_hoc_port_positions
            .keys()
            .map(|port| (port.clone(), true))
            .collect()
    }

    pub fn update_bus_interface_position(&mut self, bus_ref: impl Into<String>, position: Point) {
        self.bus_interface_positions.insert(bus_ref.into(), position);
    }

    pub fn update_ad_hoc_port_position(&mut self, port: impl Into<String>, position: Point) {
        self.ad_hoc_port_positions.insert(port.into(), position);
    }

    pub fn remove_bus_interface_position(&mut self, bus_ref: &str) -> Option<Point> {
        self.bus_interface_positions.shift_remove(bus_ref)
    }

    pub fn remove_ad_hoc_port_position(&mut self, port: &str) -> Option<Point> {
        self.ad_hoc_port_positions.shift_remove(port)
    }
}
