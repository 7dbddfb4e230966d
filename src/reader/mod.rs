//! Design reader: [`XmlDocument`] → [`Design`].
//!
//! Reading never fails once the document is parsed. Missing elements and
//! attributes produce empty strings, empty collections or `false`; unknown
//! vendor extensions are kept as opaque XML.
//!
//! ```text
//! ipxact:design
//!   ├── vendor/library/name/version ─▶ Design::vlnv (type = Design)
//!   ├── componentInstances ──────────▶ instance::parse_component_instance
//!   ├── interconnections ────────────▶ interconnection::parse_*
//!   ├── adHocConnections ────────────▶ ad_hoc::parse_ad_hoc_connection
//!   ├── parameters / assertions
//!   └── vendorExtensions ────────────▶ extensions::parse_design_extensions
//! ```

mod ad_hoc;
mod extensions;
mod instance;
mod interconnection;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::extension::{VendorExtension, VendorExtensions, tag};
use crate::model::{Assertion, Design, NameGroup, Parameter, Point};
use crate::revision::Revision;
use crate::vlnv::{Vlnv, VlnvType};
use crate::xml::{XmlDocument, XmlElement};

/// Builds [`Design`] values from parsed XML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignReader;

impl DesignReader {
    pub fn new() -> Self {
        Self
    }

    /// Build a design from a parsed document. The revision is detected from
    /// the root's namespace declarations.
    pub fn create_design_from(&self, document: &XmlDocument) -> Design {
        let root = &document.root;
        let revision = Revision::detect(root);
        debug!(?revision, "reading design");

        let mut design = Design::new(parse_vlnv(root, VlnvType::Design), revision);
        design.set_top_comments(document.comments.clone());
        for (target, data) in &document.processing_instructions {
            design.add_processing_instruction(target.clone(), data.clone());
        }

        design.set_display_name(root.child_text("ipxact:displayName"));
        design.set_short_description(root.child_text("ipxact:shortDescription"));
        design.set_description(root.child_text("ipxact:description"));

        if let Some(instances) = root.child("ipxact:componentInstances") {
            let parsed = instances
                .children_named("ipxact:componentInstance")
                .map(|element| instance::parse_component_instance(element, revision));
            design.component_instances_mut().extend(parsed);
        }

        if let Some(interconnections) = root.child("ipxact:interconnections") {
            for element in interconnections.child_elements() {
                match element.name.as_str() {
                    "ipxact:interconnection" => design
                        .interconnections_mut()
                        .push(interconnection::parse_interconnection(element, revision)),
                    "ipxact:monitorInterconnection" => design
                        .monitor_interconnections_mut()
                        .push(interconnection::parse_monitor_interconnection(element, revision)),
                    _ => {}
                }
            }
        }

        if let Some(connections) = root.child("ipxact:adHocConnections") {
            let parsed = connections
                .children_named("ipxact:adHocConnection")
                .map(|element| ad_hoc::parse_ad_hoc_connection(element, revision));
            design.ad_hoc_connections_mut().extend(parsed);
        }

        if let Some(parameters) = root.child("ipxact:parameters") {
            let parsed = parameters.children_named("ipxact:parameter").map(parse_parameter);
            design.parameters_mut().extend(parsed);
        }

        if let Some(assertions) = root.child("ipxact:assertions") {
            let parsed = assertions.children_named("ipxact:assertion").map(parse_assertion);
            design.assertions_mut().extend(parsed);
        }

        if let Some(extensions) = root.child("ipxact:vendorExtensions") {
            extensions::parse_design_extensions(extensions, design.vendor_extensions_mut());
        }

        trace!(
            instances = design.component_instances().len(),
            interconnections = design.interconnections().len(),
            monitor_interconnections = design.monitor_interconnections().len(),
            ad_hoc_connections = design.ad_hoc_connections().len(),
            extensions = design.vendor_extensions().len(),
            "design read"
        );

        design
    }
}

// ============================================================================
// SHARED PARSING HELPERS
// ============================================================================

/// Read VLNV parts from `ipxact:vendor`.. child elements.
fn parse_vlnv(element: &XmlElement, vlnv_type: VlnvType) -> Vlnv {
    Vlnv::new(
        vlnv_type,
        element.child_text("ipxact:vendor"),
        element.child_text("ipxact:library"),
        element.child_text("ipxact:name"),
        element.child_text("ipxact:version"),
    )
}

/// Read VLNV parts from `vendor`/`library`/`name`/`version` attributes.
fn parse_vlnv_attributes(element: &XmlElement, vlnv_type: VlnvType) -> Vlnv {
    let attribute = |name: &str| element.attribute(name).unwrap_or_default().to_string();
    Vlnv::new(
        vlnv_type,
        attribute("vendor"),
        attribute("library"),
        attribute("name"),
        attribute("version"),
    )
}

/// Name group whose name lives in `name_tag` (e.g. `ipxact:name`, `ipxact:instanceName`).
fn parse_name_group(element: &XmlElement, prefix: &str, name_tag: &str) -> NameGroup {
    let text = |local: &str| element.child_text(&format!("{prefix}:{local}"));
    NameGroup {
        name: text(name_tag),
        display_name: text("displayName"),
        short_description: text("shortDescription"),
        description: text("description"),
    }
}

fn parse_point(element: &XmlElement) -> Point {
    Point::parse(
        element.attribute("x").unwrap_or_default(),
        element.attribute("y").unwrap_or_default(),
    )
}

/// Read every `kactus2:position` child in order.
fn parse_route(element: &XmlElement) -> Vec<Point> {
    element.children_named(tag::POSITION).map(parse_point).collect()
}

/// Read a group of positioned items keyed by `ref_attribute`.
///
/// Shared by bus, ad-hoc, API and COM interface position groups.
fn parse_position_group(
    group: &XmlElement,
    item_tag: &str,
    ref_attribute: &str,
) -> IndexMap<String, Point> {
    group
        .children_named(item_tag)
        .map(|item| {
            let reference = item.attribute(ref_attribute).unwrap_or_default().to_string();
            (reference, parse_point(item))
        })
        .collect()
}

/// Read `kactus2:propertyValue` items; attributes may carry the `kactus2:` prefix.
fn parse_property_values(group: &XmlElement) -> IndexMap<String, String> {
    group
        .children_named(tag::PROPERTY_VALUE)
        .map(|item| {
            let attribute = |name: &str| {
                item.attribute(name)
                    .or_else(|| item.attribute(&format!("kactus2:{name}")))
                    .unwrap_or_default()
                    .to_string()
            };
            (attribute("name"), attribute("value"))
        })
        .collect()
}

/// Collect the children of an `ipxact:vendorExtensions` element as opaque extensions.
fn generic_extensions<'a>(elements: impl Iterator<Item = &'a XmlElement>) -> VendorExtensions {
    elements
        .map(|element| {
            debug!(extension = %element.name, "preserving unknown vendor extension");
            VendorExtension::Generic(element.clone())
        })
        .collect()
}

fn parse_parameter(element: &XmlElement) -> Parameter {
    Parameter {
        parameter_id: element.attribute("parameterId").unwrap_or_default().to_string(),
        name: element.child_text("ipxact:name"),
        value: element.child_text("ipxact:value"),
    }
}

fn parse_assertion(element: &XmlElement) -> Assertion {
    Assertion {
        name: element.child_text("ipxact:name"),
        display_name: element.child_text("ipxact:displayName"),
        description: element.child_text("ipxact:description"),
        assert: element.child_text("ipxact:assert"),
    }
}
