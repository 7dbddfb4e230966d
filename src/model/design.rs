use indexmap::IndexMap;

use super::interface::eq_ignore_case;
use super::{
    AdHocConnection, Assertion, ComponentInstance, Interconnection, MonitorInterconnection,
    Parameter, Point,
};
use crate::extension::{
    ColumnDesc, ConnectionRoute, Implementation, InterfaceGraphicsData, Kactus2Placeholder,
    Kactus2Value, Note, SwInstance, SwInterconnection, SwInterfaceKind, VendorExtension,
    VendorExtensions, tag,
};
use crate::revision::Revision;
use crate::vlnv::{Vlnv, VlnvType};

/// Root aggregate of an IP-XACT design document.
///
/// Collections are reached through `x()` / `x_mut()` / `set_x()` triples; the
/// `_mut` accessors hand out the owned `Vec` for in-place editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Design {
    vlnv: Vlnv,
    revision: Revision,
    display_name: String,
    short_description: String,
    description: String,
    top_comments: Vec<String>,
    processing_instructions: Vec<(String, String)>,
    component_instances: Vec<ComponentInstance>,
    interconnections: Vec<Interconnection>,
    monitor_interconnections: Vec<MonitorInterconnection>,
    ad_hoc_connections: Vec<AdHocConnection>,
    parameters: Vec<Parameter>,
    assertions: Vec<Assertion>,
    vendor_extensions: VendorExtensions,
}

impl Design {
    /// Create an empty design. The VLNV is retagged as a design.
    pub fn new(vlnv: Vlnv, revision: Revision) -> Self {
        Self {
            vlnv: vlnv.with_type(VlnvType::Design),
            revision,
            ..Self::default()
        }
    }

    // ── Document identity ──────────────────────────────────────────────

    pub fn vlnv(&self) -> &Vlnv {
        &self.vlnv
    }

    /// Replace the VLNV; the type tag is always [`VlnvType::Design`].
    pub fn set_vlnv(&mut self, vlnv: Vlnv) {
        self.vlnv = vlnv.with_type(VlnvType::Design);
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn set_revision(&mut self, revision: Revision) {
        self.revision = revision;
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn set_short_description(&mut self, short_description: impl Into<String>) {
        self.short_description = short_description.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn top_comments(&self) -> &[String] {
        &self.top_comments
    }

    pub fn set_top_comments(&mut self, comments: Vec<String>) {
        self.top_comments = comments;
    }

    pub fn add_top_comment(&mut self, comment: impl Into<String>) {
        self.top_comments.push(comment.into());
    }

    /// Processing instructions written before the root as `(target, data)`.
    pub fn processing_instructions(&self) -> &[(String, String)] {
        &self.processing_instructions
    }

    pub fn add_processing_instruction(
        &mut self,
        target: impl Into<String>,
        data: impl Into<String>,
    ) {
        self.processing_instructions.push((target.into(), data.into()));
    }

    /// Kactus2 version that last wrote the document (`kactus2:version`).
    pub fn version(&self) -> &str {
        self.vendor_extensions
            .find(tag::VERSION)
            .and_then(VendorExtension::as_value)
            .map(|value| value.value.as_str())
            .unwrap_or_default()
    }

    /// Update the `kactus2:version` extension in place, or append it.
    pub fn set_version(&mut self, version: impl Into<String>) {
        let version = version.into();
        match self.vendor_extensions.find_mut(tag::VERSION) {
            Some(VendorExtension::Value(value)) => value.value = version,
            _ => self
                .vendor_extensions
                .push(VendorExtension::Value(Kactus2Value::new(tag::VERSION, version))),
        }
    }

    /// Domain of the design, [`Implementation::Hw`] when not recorded.
    pub fn implementation(&self) -> Implementation {
        self.vendor_extensions
            .grouped(tag::KTS_ATTRIBUTES, tag::KTS_IMPLEMENTATION)
            .find_map(VendorExtension::as_value)
            .map(|value| Implementation::parse(&value.value))
            .unwrap_or_default()
    }

    /// Record the domain in `kactus2:kts_attributes`, keeping other attributes there.
    pub fn set_implementation(&mut self, implementation: Implementation) {
        let value = Kactus2Value::new(tag::KTS_IMPLEMENTATION, implementation.as_str());
        let existing = self
            .vendor_extensions
            .find_group_mut(tag::KTS_ATTRIBUTES)
            .and_then(|group| {
                group
                    .items
                    .iter_mut()
                    .find(|item| item.type_name() == tag::KTS_IMPLEMENTATION)
            });
        match existing {
            Some(item) => *item = VendorExtension::Value(value),
            None => self
                .vendor_extensions
                .add_to_group(tag::KTS_ATTRIBUTES, VendorExtension::Value(value)),
        }
    }

    // ── Owned collections ──────────────────────────────────────────────

    pub fn component_instances(&self) -> &[ComponentInstance] {
        &self.component_instances
    }

    pub fn component_instances_mut(&mut self) -> &mut Vec<ComponentInstance> {
        &mut self.component_instances
    }

    pub fn set_component_instances(&mut self, instances: Vec<ComponentInstance>) {
        self.component_instances = instances;
    }

    pub fn interconnections(&self) -> &[Interconnection] {
        &self.interconnections
    }

    pub fn interconnections_mut(&mut self) -> &mut Vec<Interconnection> {
        &mut self.interconnections
    }

    pub fn set_interconnections(&mut self, interconnections: Vec<Interconnection>) {
        self.interconnections = interconnections;
    }

    pub fn monitor_interconnections(&self) -> &[MonitorInterconnection] {
        &self.monitor_interconnections
    }

    pub fn monitor_interconnections_mut(&mut self) -> &mut Vec<MonitorInterconnection> {
        &mut self.monitor_interconnections
    }

    pub fn set_monitor_interconnections(&mut self, interconnections: Vec<MonitorInterconnection>) {
        self.monitor_interconnections = interconnections;
    }

    pub fn ad_hoc_connections(&self) -> &[AdHocConnection] {
        &self.ad_hoc_connections
    }

    pub fn ad_hoc_connections_mut(&mut self) -> &mut Vec<AdHocConnection> {
        &mut self.ad_hoc_connections
    }

    pub fn set_ad_hoc_connections(&mut self, connections: Vec<AdHocConnection>) {
        self.ad_hoc_connections = connections;
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        &mut self.parameters
    }

    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    pub fn assertions_mut(&mut self) -> &mut Vec<Assertion> {
        &mut self.assertions
    }

    pub fn vendor_extensions(&self) -> &VendorExtensions {
        &self.vendor_extensions
    }

    pub fn vendor_extensions_mut(&mut self) -> &mut VendorExtensions {
        &mut self.vendor_extensions
    }

    // ── Instance queries ───────────────────────────────────────────────

    /// Instance with exactly this name.
    pub fn find_component_instance(&self, instance_name: &str) -> Option<&ComponentInstance> {
        self.component_instances
            .iter()
            .find(|instance| instance.instance_name() == instance_name)
    }

    pub fn find_component_instance_mut(
        &mut self,
        instance_name: &str,
    ) -> Option<&mut ComponentInstance> {
        self.component_instances
            .iter_mut()
            .find(|instance| instance.instance_name() == instance_name)
    }

    fn find_hw_instance(&self, instance_name: &str) -> Option<&ComponentInstance> {
        self.component_instances
            .iter()
            .find(|instance| eq_ignore_case(instance.instance_name(), instance_name))
    }

    /// Whether an instance with this name exists, ignoring case.
    pub fn contains_hw_instance(&self, instance_name: &str) -> bool {
        self.find_hw_instance(instance_name).is_some()
    }

    /// Whether any interconnection's start or active interfaces reference the pair.
    pub fn has_interconnection(&self, instance_name: &str, interface_name: &str) -> bool {
        self.interconnections
            .iter()
            .any(|connection| {
                connection.has_interface_referencing_component(instance_name, interface_name)
            })
    }

    /// Component VLNV of the named instance, or an empty VLNV if unknown.
    pub fn hw_component_vlnv(&self, instance_name: &str) -> Vlnv {
        self.find_hw_instance(instance_name)
            .map(|instance| instance.component_ref.vlnv.clone())
            .unwrap_or_default()
    }

    pub fn hw_instance_description(&self, instance_name: &str) -> String {
        self.find_hw_instance(instance_name)
            .map(|instance| instance.name_group.description.clone())
            .unwrap_or_default()
    }

    pub fn has_conf_element_value(&self, instance_name: &str, element_name: &str) -> bool {
        self.find_hw_instance(instance_name)
            .is_some_and(|instance| {
                instance
                    .component_ref
                    .has_configurable_element_value(element_name)
            })
    }

    /// Configurable element value of the named instance, empty when missing.
    pub fn conf_element_value(&self, instance_name: &str, element_name: &str) -> String {
        self.find_hw_instance(instance_name)
            .map(|instance| instance.component_ref.single_configurable_element_value(element_name))
            .unwrap_or_default()
    }

    /// Every valid component VLNV referenced by HW or SW instances, without duplicates.
    pub fn dependent_vlnvs(&self) -> Vec<Vlnv> {
        let hw = self
            .component_instances
            .iter()
            .map(|instance| &instance.component_ref.vlnv);
        let sw = self
            .sw_instances()
            .into_iter()
            .map(|instance| &instance.component_ref);

        let mut dependencies: Vec<Vlnv> = Vec::new();
        for vlnv in hw.chain(sw) {
            if vlnv.is_valid() && !dependencies.contains(vlnv) {
                dependencies.push(vlnv.clone());
            }
        }
        dependencies
    }

    /// Component VLNVs of all non-draft HW and SW instances, in instance order.
    pub fn components(&self) -> Vec<Vlnv> {
        let hw = self
            .component_instances
            .iter()
            .filter(|instance| !instance.draft)
            .map(|instance| instance.component_ref.vlnv.clone());
        let sw = self
            .sw_instances()
            .into_iter()
            .filter(|instance| !instance.draft)
            .map(|instance| instance.component_ref.clone());
        hw.chain(sw).collect()
    }

    // ── Column layout ──────────────────────────────────────────────────

    pub fn columns(&self) -> Vec<&ColumnDesc> {
        self.vendor_extensions
            .grouped(tag::COLUMN_LAYOUT, tag::COLUMN)
            .filter_map(VendorExtension::as_column)
            .collect()
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDesc>) {
        self.vendor_extensions.replace_group(
            tag::COLUMN_LAYOUT,
            columns.into_iter().map(VendorExtension::Column).collect(),
        );
    }

    pub fn add_column(&mut self, column: ColumnDesc) {
        self.vendor_extensions
            .add_to_group(tag::COLUMN_LAYOUT, VendorExtension::Column(column));
    }

    /// Remove the first column with this name. Removing the last column deletes
    /// `kactus2:columnLayout`.
    pub fn remove_column(&mut self, name: &str) -> Option<ColumnDesc> {
        let group = self.vendor_extensions.find_group_mut(tag::COLUMN_LAYOUT)?;
        let index = group
            .items
            .iter()
            .position(|item| item.as_column().is_some_and(|column| column.name == name))?;
        let removed = group.items.remove(index);
        if group.items.is_empty() {
            self.vendor_extensions.remove_type(tag::COLUMN_LAYOUT);
        }
        match removed {
            VendorExtension::Column(column) => Some(column),
            _ => None,
        }
    }

    // ── Routes ─────────────────────────────────────────────────────────

    pub fn routes(&self) -> Vec<&ConnectionRoute> {
        self.vendor_extensions
            .grouped(tag::ROUTES, tag::ROUTE)
            .filter_map(VendorExtension::as_route)
            .collect()
    }

    pub fn add_route(&mut self, route: ConnectionRoute) {
        self.vendor_extensions
            .add_to_group(tag::ROUTES, VendorExtension::Route(route));
    }

    /// Remove the route of the named connection. Removing the last route
    /// removes the `kactus2:routes` group.
    pub fn remove_route(&mut self, connection_name: &str) -> Option<ConnectionRoute> {
        let group = self.vendor_extensions.find_group_mut(tag::ROUTES)?;
        let index = group
            .items
            .iter()
            .position(|item| item.as_route().is_some_and(|route| route.name == connection_name))?;
        let removed = group.items.remove(index);
        if group.items.is_empty() {
            self.vendor_extensions.remove_type(tag::ROUTES);
        }

        match removed {
            VendorExtension::Route(route) => Some(route),
            _ => None,
        }
    }

    // ── SW instances and connections ───────────────────────────────────

    pub fn sw_instances(&self) -> Vec<&SwInstance> {
        self.vendor_extensions
            .grouped(tag::SW_INSTANCES, tag::SW_INSTANCE)
            .filter_map(VendorExtension::as_sw_instance)
            .collect()
    }

    pub fn set_sw_instances(&mut self, instances: Vec<SwInstance>) {
        self.vendor_extensions.replace_group(
            tag::SW_INSTANCES,
            instances.into_iter().map(VendorExtension::SwInstance).collect(),
        );
    }

    fn sw_connections(&self, kind: SwInterfaceKind) -> Vec<&SwInterconnection> {
        self.vendor_extensions
            .grouped(kind.group_tag(), kind.connection_tag())
            .filter_map(VendorExtension::as_sw_connection)
            .collect()
    }

    fn set_sw_connections(&mut self, kind: SwInterfaceKind, connections: Vec<SwInterconnection>) {
        self.vendor_extensions.replace_group(
            kind.group_tag(),
            connections
                .into_iter()
                .map(|mut connection| {
                    connection.kind = kind;
                    VendorExtension::SwConnection(connection)
                })
                .collect(),
        );
    }

    pub fn api_connections(&self) -> Vec<&SwInterconnection> {
        self.sw_connections(SwInterfaceKind::Api)
    }

    pub fn set_api_connections(&mut self, connections: Vec<SwInterconnection>) {
        self.set_sw_connections(SwInterfaceKind::Api, connections);
    }

    pub fn com_connections(&self) -> Vec<&SwInterconnection> {
        self.sw_connections(SwInterfaceKind::Com)
    }

    pub fn set_com_connections(&mut self, connections: Vec<SwInterconnection>) {
        self.set_sw_connections(SwInterfaceKind::Com, connections);
    }

    // ── Ad-hoc port visibility ─────────────────────────────────────────

    fn ad_hoc_placeholders(&self) -> impl Iterator<Item = &Kactus2Placeholder> {
        self.vendor_extensions
            .grouped(tag::AD_HOC_VISIBILITIES, tag::AD_HOC_VISIBLE)
            .filter_map(VendorExtension::as_placeholder)
    }

    /// Top-level ports shown as ad-hoc visible.
    pub fn port_ad_hoc_visibilities(&self) -> IndexMap<String, bool> {
        self.ad_hoc_placeholders()
            .map(|port| (port.attribute("portName").unwrap_or_default().to_string(), true))
            .collect()
    }

    /// Stored positions of ad-hoc visible top-level ports.
    pub fn ad_hoc_port_positions(&self) -> IndexMap<String, Point> {
        self.ad_hoc_placeholders()
            .map(|port| {
                let name = port.attribute("portName").unwrap_or_default().to_string();
                let position = Point::parse(
                    port.attribute("x").unwrap_or_default(),
                    port.attribute("y").unwrap_or_default(),
                );
                (name, position)
            })
            .collect()
    }

    /// Replace the visible port set. Visible ports keep any stored position;
    /// ports mapped to `false` are dropped.
    pub fn set_port_ad_hoc_visibilities(&mut self, visibilities: &IndexMap<String, bool>) {
        let positions: IndexMap<String, Point> = self
            .ad_hoc_placeholders()
            .filter(|port| port.attribute("x").is_some() && port.attribute("y").is_some())
            .map(|port| {
                let name = port.attribute("portName").unwrap_or_default().to_string();
                let position = Point::parse(
                    port.attribute("x").unwrap_or_default(),
                    port.attribute("y").unwrap_or_default(),
                );
                (name, position)
            })
            .collect();

        let items = visibilities
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(port, _)| {
                let mut placeholder =
                    Kactus2Placeholder::new(tag::AD_HOC_VISIBLE).with_attribute("portName", port);
                if let Some(position) = positions.get(port) {
                    placeholder.set_attribute("x", position.x.to_string());
                    placeholder.set_attribute("y", position.y.to_string());
                }
                VendorExtension::Placeholder(placeholder)
            })
            .collect();

        self.vendor_extensions.replace_group(tag::AD_HOC_VISIBILITIES, items);
    }

    /// Replace the visible port set with positioned ports.
    pub fn set_ad_hoc_port_positions(&mut self, positions: &IndexMap<String, Point>) {
        let items = positions
            .iter()
            .map(|(port, position)| {
                VendorExtension::Placeholder(
                    Kactus2Placeholder::new(tag::AD_HOC_VISIBLE)
                        .with_attribute("portName", port)
                        .with_attribute("x", position.x.to_string())
                        .with_attribute("y", position.y.to_string()),
                )
            })
            .collect();

        self.vendor_extensions.replace_group(tag::AD_HOC_VISIBILITIES, items);
    }

    // ── Interface graphics and notes ───────────────────────────────────

    pub fn interface_graphics(&self) -> Vec<&InterfaceGraphicsData> {
        self.vendor_extensions
            .iter()
            .filter_map(VendorExtension::as_interface_graphics)
            .collect()
    }

    pub fn add_interface_graphics(&mut self, graphics: InterfaceGraphicsData) {
        self.vendor_extensions
            .push(VendorExtension::InterfaceGraphics(graphics));
    }

    /// Remove the graphics entry of the named interface.
    pub fn remove_interface_graphics(&mut self, name: &str) -> Option<InterfaceGraphicsData> {
        let index = self.vendor_extensions.iter().position(|extension| {
            extension
                .as_interface_graphics()
                .is_some_and(|graphics| graphics.name == name)
        })?;
        match self.vendor_extensions.remove(index) {
            VendorExtension::InterfaceGraphics(graphics) => Some(graphics),
            _ => None,
        }
    }

    pub fn notes(&self) -> Vec<&Note> {
        self.vendor_extensions
            .iter()
            .filter_map(VendorExtension::as_note)
            .collect()
    }

    pub fn add_note(&mut self, note: Note) {
        self.vendor_extensions.push(VendorExtension::Note(note));
    }
}
