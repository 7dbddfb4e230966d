use tracing::debug;

use super::{
    parse_name_group, parse_point, parse_position_group, parse_property_values, parse_route,
    parse_vlnv_attributes,
};
use crate::extension::{
    ColumnContentType, ColumnDesc, ConnectionRoute, DEFAULT_COLUMN_WIDTH, InterfaceGraphicsData,
    Kactus2Group, Kactus2Placeholder, Kactus2Value, Note, SwInstance, SwInterconnection,
    SwInterfaceKind, SwInterfaceRef, VendorExtension, VendorExtensions, tag,
};
use crate::model::Point;
use crate::vlnv::VlnvType;
use crate::xml::XmlElement;

/// Read the design-level `ipxact:vendorExtensions`, appending to `extensions`.
///
/// Children of a legacy `kactus2:extensions` wrapper are read as if they
/// were direct children.
pub(super) fn parse_design_extensions(element: &XmlElement, extensions: &mut VendorExtensions) {
    for child in element.child_elements() {
        if child.name == tag::EXTENSIONS {
            debug!("flattening legacy kactus2:extensions wrapper");
            parse_design_extensions(child, extensions);
        } else {
            extensions.push(parse_design_extension(child));
        }
    }
}

fn parse_design_extension(element: &XmlElement) -> VendorExtension {
    match element.name.as_str() {
        tag::VERSION => VendorExtension::Value(Kactus2Value::new(tag::VERSION, element.text())),
        tag::KTS_ATTRIBUTES => parse_group(element, tag::KTS_IMPLEMENTATION, |implementation| {
            let value = implementation.text();
            VendorExtension::Value(Kactus2Value::new(tag::KTS_IMPLEMENTATION, value))
        }),
        tag::COLUMN_LAYOUT => parse_group(element, tag::COLUMN, |column| {
            VendorExtension::Column(parse_column(column))
        }),
        tag::ROUTES => parse_group(element, tag::ROUTE, |route| {
            VendorExtension::Route(parse_connection_route(route))
        }),
        tag::SW_INSTANCES => parse_group(element, tag::SW_INSTANCE, |instance| {
            VendorExtension::SwInstance(parse_sw_instance(instance))
        }),
        tag::AD_HOC_VISIBILITIES => parse_group(element, tag::AD_HOC_VISIBLE, |port| {
            VendorExtension::Placeholder(parse_placeholder(port))
        }),
        tag::API_CONNECTIONS => parse_group(element, tag::API_CONNECTION, |connection| {
            VendorExtension::SwConnection(parse_sw_connection(connection, SwInterfaceKind::Api))
        }),
        tag::COM_CONNECTIONS => parse_group(element, tag::COM_CONNECTION, |connection| {
            VendorExtension::SwConnection(parse_sw_connection(connection, SwInterfaceKind::Com))
        }),
        tag::INTERFACE_GRAPHICS => {
            VendorExtension::InterfaceGraphics(parse_interface_graphics(element))
        }
        tag::NOTE => VendorExtension::Note(parse_note(element)),
        _ => {
            debug!(extension = %element.name, "preserving unknown design extension");
            VendorExtension::Generic(element.clone())
        }
    }
}

/// Read a Kactus2 group; items other than `item_tag` are kept as opaque XML.
fn parse_group(
    element: &XmlElement,
    item_tag: &str,
    parse_item: impl Fn(&XmlElement) -> VendorExtension,
) -> VendorExtension {
    let items = element
        .child_elements()
        .map(|item| {
            if item.name == item_tag {
                parse_item(item)
            } else {
                VendorExtension::Generic(item.clone())
            }
        })
        .collect();

    VendorExtension::Group(Kactus2Group {
        type_name: element.name.clone(),
        items,
    })
}

fn parse_placeholder(element: &XmlElement) -> Kactus2Placeholder {
    Kactus2Placeholder {
        type_name: element.name.clone(),
        attributes: element.attributes.clone(),
    }
}

fn parse_column(element: &XmlElement) -> ColumnDesc {
    let number = |name: &str, default: u32| {
        element
            .attribute(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    };

    ColumnDesc {
        name: element.attribute("name").unwrap_or_default().to_string(),
        content_type: ColumnContentType::from_code(element.attribute("contentType").unwrap_or("2")),
        allowed_items: number("allowedItems", 0),
        min_width: number("minWidth", DEFAULT_COLUMN_WIDTH),
        width: number("width", DEFAULT_COLUMN_WIDTH),
        x: Point::parse(element.attribute("x").unwrap_or_default(), "0").x,
    }
}

fn parse_connection_route(element: &XmlElement) -> ConnectionRoute {
    let attribute = |name: &str| {
        element
            .attribute(&format!("kactus2:{name}"))
            .or_else(|| element.attribute(name))
    };

    ConnectionRoute {
        name: attribute("connRef").unwrap_or_default().to_string(),
        off_page: attribute("offPage").is_some_and(|value| value == "true"),
        route: parse_route(element),
    }
}

fn parse_sw_instance(element: &XmlElement) -> SwInstance {
    let mut instance = SwInstance {
        name_group: parse_name_group(element, "kactus2", "instanceName"),
        file_set_ref: element.child_text("kactus2:fileSetRef"),
        ..SwInstance::default()
    };

    if let Some(component_ref) = element.child("kactus2:componentRef") {
        instance.component_ref = parse_vlnv_attributes(component_ref, VlnvType::Component);
    }
    if let Some(mapping) = element.child("kactus2:mapping") {
        instance.mapping = mapping.attribute("hwRef").unwrap_or_default().to_string();
    }
    instance.position = element.child(tag::POSITION).map(parse_point);
    if let Some(imported) = element.child(tag::IMPORTED) {
        instance.imported = true;
        instance.import_ref = imported.attribute("importRef").unwrap_or_default().to_string();
    }
    instance.draft = element.child(tag::DRAFT).is_some();

    if let Some(values) = element.child(tag::PROPERTY_VALUES) {
        instance.property_values = parse_property_values(values);
    }
    if let Some(positions) = element.child(tag::API_INTERFACE_POSITIONS) {
        instance.api_interface_positions =
            parse_position_group(positions, tag::API_INTERFACE_POSITION, "apiRef");
    }
    if let Some(positions) = element.child(tag::COM_INTERFACE_POSITIONS) {
        instance.com_interface_positions =
            parse_position_group(positions, tag::COM_INTERFACE_POSITION, "comRef");
    }

    instance
}

fn parse_sw_connection(element: &XmlElement, kind: SwInterfaceKind) -> SwInterconnection {
    let interface_ref = |endpoint: &XmlElement| {
        endpoint
            .attribute(kind.ref_attribute())
            .unwrap_or_default()
            .to_string()
    };

    SwInterconnection {
        kind,
        name_group: parse_name_group(element, "ipxact", "name"),
        active_interfaces: element
            .children_named(kind.active_tag())
            .map(|endpoint| {
                SwInterfaceRef::active(
                    endpoint.attribute("componentRef").unwrap_or_default(),
                    interface_ref(endpoint),
                )
            })
            .collect(),
        hier_interfaces: element
            .children_named(kind.hier_tag())
            .map(|endpoint| SwInterfaceRef::hierarchical(interface_ref(endpoint)))
            .collect(),
    }
}

fn parse_interface_graphics(element: &XmlElement) -> InterfaceGraphicsData {
    InterfaceGraphicsData {
        name: element.child_text("kactus2:name"),
        position: element.child(tag::POSITION).map(parse_point).unwrap_or_default(),
        direction: element.child(tag::DIRECTION).map(parse_point).unwrap_or_default(),
    }
}

fn parse_note(element: &XmlElement) -> Note {
    Note {
        position: element.child(tag::POSITION).map(parse_point).unwrap_or_default(),
        content: element.child_text("kactus2:content"),
        timestamp: element.child_text("kactus2:timestamp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlDocument;

    fn parse(xml: &str) -> VendorExtensions {
        let document = XmlDocument::parse(xml.as_bytes()).unwrap();
        let mut extensions = VendorExtensions::new();
        parse_design_extensions(&document.root, &mut extensions);
        extensions
    }

    #[test]
    fn test_version_and_generic() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:version>3.0.0</kactus2:version>
                <testExtension testExtensionAttribute="extension">testValue</testExtension>
            </ipxact:vendorExtensions>"#,
        );

        assert_eq!(extensions.len(), 2);
        assert_eq!(
            extensions[0].as_value().map(|value| value.value.as_str()),
            Some("3.0.0")
        );
        assert_eq!(extensions[1].type_name(), "testExtension");
    }

    #[test]
    fn test_kts_attributes() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:kts_attributes>
                    <kactus2:kts_implementation>SW</kactus2:kts_implementation>
                    <kactus2:kts_firmness>Fixed</kactus2:kts_firmness>
                </kactus2:kts_attributes>
            </ipxact:vendorExtensions>"#,
        );

        let group = extensions.find_group(tag::KTS_ATTRIBUTES).unwrap();
        assert_eq!(
            group.items[0],
            VendorExtension::Value(Kactus2Value::new(tag::KTS_IMPLEMENTATION, "SW"))
        );
        assert!(matches!(
            &group.items[1],
            VendorExtension::Generic(element) if element.name == "kactus2:kts_firmness"
        ));
    }

    #[test]
    fn test_legacy_wrapper_is_flattened() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:extensions>
                    <kactus2:version>2.0</kactus2:version>
                    <kactus2:note>
                        <kactus2:position x="5" y="6"/>
                        <kactus2:content>hello</kactus2:content>
                        <kactus2:timestamp>today</kactus2:timestamp>
                    </kactus2:note>
                </kactus2:extensions>
            </ipxact:vendorExtensions>"#,
        );

        assert_eq!(extensions.len(), 2);
        assert!(extensions.find(tag::EXTENSIONS).is_none());
        let note = extensions[1].as_note().unwrap();
        assert_eq!(note.position, Point::new(5, 6));
        assert_eq!(note.content, "hello");
        assert_eq!(note.timestamp, "today");
    }

    #[test]
    fn test_columns_and_routes() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:columnLayout>
                    <kactus2:column name="IO" contentType="0" allowedItems="1" minWidth="119" width="119" x="0"/>
                    <kactus2:column name="Components" contentType="2" allowedItems="2" minWidth="259" width="300" x="119"/>
                </kactus2:columnLayout>
                <kactus2:routes>
                    <kactus2:route kactus2:connRef="cpu_bus" kactus2:offPage="true">
                        <kactus2:position x="1" y="2"/>
                    </kactus2:route>
                    <kactus2:route connRef="legacy">
                        <kactus2:position x="3" y="4"/>
                    </kactus2:route>
                </kactus2:routes>
            </ipxact:vendorExtensions>"#,
        );

        let columns: Vec<_> = extensions
            .grouped(tag::COLUMN_LAYOUT, tag::COLUMN)
            .filter_map(VendorExtension::as_column)
            .collect();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].content_type, ColumnContentType::Io);
        assert_eq!(columns[1].width, 300);
        assert_eq!(columns[1].x, 119);

        let routes: Vec<_> = extensions
            .grouped(tag::ROUTES, tag::ROUTE)
            .filter_map(VendorExtension::as_route)
            .collect();
        assert_eq!(routes[0].name, "cpu_bus");
        assert!(routes[0].off_page);
        assert_eq!(routes[1].name, "legacy");
        assert!(!routes[1].off_page);
        assert_eq!(routes[1].route, vec![Point::new(3, 4)]);
    }

    #[test]
    fn test_sw_instances_and_connections() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:swInstances>
                    <kactus2:swInstance>
                        <kactus2:instanceName>driver</kactus2:instanceName>
                        <kactus2:componentRef vendor="tut.fi" library="sw" name="Driver" version="1.0"/>
                        <kactus2:fileSetRef>sources</kactus2:fileSetRef>
                        <kactus2:mapping hwRef="cpu0"/>
                        <kactus2:position x="10" y="10"/>
                        <kactus2:draft/>
                    </kactus2:swInstance>
                </kactus2:swInstances>
                <kactus2:comConnections>
                    <kactus2:comConnection>
                        <ipxact:name>link</ipxact:name>
                        <kactus2:activeComInterface componentRef="driver" comRef="tx"/>
                        <kactus2:hierComInterface comRef="out"/>
                    </kactus2:comConnection>
                </kactus2:comConnections>
            </ipxact:vendorExtensions>"#,
        );

        let instance = extensions
            .grouped(tag::SW_INSTANCES, tag::SW_INSTANCE)
            .find_map(VendorExtension::as_sw_instance)
            .unwrap();
        assert_eq!(instance.instance_name(), "driver");
        assert_eq!(instance.component_ref.name, "Driver");
        assert_eq!(instance.component_ref.vlnv_type, VlnvType::Component);
        assert_eq!(instance.file_set_ref, "sources");
        assert_eq!(instance.mapping, "cpu0");
        assert_eq!(instance.position, Some(Point::new(10, 10)));
        assert!(instance.draft);
        assert!(!instance.imported);

        let connection = extensions
            .grouped(tag::COM_CONNECTIONS, tag::COM_CONNECTION)
            .find_map(VendorExtension::as_sw_connection)
            .unwrap();
        assert_eq!(connection.kind, SwInterfaceKind::Com);
        assert_eq!(connection.name(), "link");
        assert_eq!(connection.active_interfaces, vec![SwInterfaceRef::active("driver", "tx")]);
        assert_eq!(connection.hier_interfaces, vec![SwInterfaceRef::hierarchical("out")]);
    }

    #[test]
    fn test_unexpected_group_item_is_kept() {
        let extensions = parse(
            r#"<ipxact:vendorExtensions>
                <kactus2:adHocVisibilities>
                    <kactus2:adHocVisible portName="clk" x="1" y="2"/>
                    <acme:other/>
                </kactus2:adHocVisibilities>
            </ipxact:vendorExtensions>"#,
        );

        let group = extensions.find_group(tag::AD_HOC_VISIBILITIES).unwrap();
        assert_eq!(group.items.len(), 2);
        assert_eq!(
            group.items[0].as_placeholder().and_then(|port| port.attribute("portName")),
            Some("clk")
        );
        assert!(matches!(group.items[1], VendorExtension::Generic(_)));
    }
}
