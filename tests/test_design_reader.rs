#![allow(clippy::unwrap_used)]

use ipxact::extension::{
    ColumnContentType, Implementation, SwInterfaceKind, SwInterfaceRef, VendorExtension, tag,
};
use ipxact::xml::XmlDocument;
use ipxact::{Design, DesignReader, PartSelect, Point, Revision, VlnvType};
use rstest::rstest;

const NAMESPACES_2014: &str = r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014" xmlns:kactus2="http://kactus2.cs.tut.fi" xsi:schemaLocation="http://www.accellera.org/XMLSchema/IPXACT/1685-2014/ http://www.accellera.org/XMLSchema/IPXACT/1685-2014/index.xsd""#;

const NAMESPACES_2022: &str = r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022" xmlns:kactus2="http://kactus2.cs.tut.fi" xsi:schemaLocation="http://www.accellera.org/XMLSchema/IPXACT/1685-2022/ http://www.accellera.org/XMLSchema/IPXACT/1685-2022/index.xsd""#;

fn read(xml: &str) -> Design {
    let document = XmlDocument::parse(xml.as_bytes()).unwrap();
    DesignReader::new().create_design_from(&document)
}

fn document(namespaces: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<!--Created by Kactus2-->
<ipxact:design {namespaces}>
    <ipxact:vendor>TUT</ipxact:vendor>
    <ipxact:library>TestLibrary</ipxact:library>
    <ipxact:name>TestDesign</ipxact:name>
    <ipxact:version>0.1</ipxact:version>
{body}
</ipxact:design>"#
    )
}

#[test]
fn test_read_document_identity() {
    let design = read(&document(
        NAMESPACES_2014,
        "<ipxact:description>A design</ipxact:description>",
    ));

    assert_eq!(design.revision(), Revision::Std14);
    assert_eq!(design.vlnv().vlnv_type, VlnvType::Design);
    assert_eq!(design.vlnv().to_string(), "TUT:TestLibrary:TestDesign:0.1");
    assert_eq!(design.description(), "A design");
    assert_eq!(design.top_comments(), ["Created by Kactus2".to_string()]);
    assert!(design.component_instances().is_empty());
    assert!(design.vendor_extensions().is_empty());
}

#[test]
fn test_read_2022_top_level_name_group() {
    let design = read(&document(
        NAMESPACES_2022,
        r#"<ipxact:displayName>Display</ipxact:displayName>
           <ipxact:shortDescription>Short</ipxact:shortDescription>
           <ipxact:description>Long</ipxact:description>"#,
    ));

    assert_eq!(design.revision(), Revision::Std22);
    assert_eq!(design.display_name(), "Display");
    assert_eq!(design.short_description(), "Short");
    assert_eq!(design.description(), "Long");
}

#[test]
fn test_read_component_instances() {
    let design = read(&document(
        NAMESPACES_2014,
        r#"<ipxact:componentInstances>
            <ipxact:componentInstance>
                <ipxact:instanceName>cpu0</ipxact:instanceName>
                <ipxact:description>Main processor</ipxact:description>
                <ipxact:componentRef vendor="TUT" library="ip" name="Cpu" version="1.0">
                    <ipxact:configurableElementValues>
                        <ipxact:configurableElementValue referenceId="DATA_WIDTH">32</ipxact:configurableElementValue>
                    </ipxact:configurableElementValues>
                </ipxact:componentRef>
                <ipxact:vendorExtensions>
                    <kactus2:position x="100" y="50"/>
                    <kactus2:uuid>{0b4f7a33-7e8e-4ac2-9d1f-9a5b3c2e1f00}</kactus2:uuid>
                </ipxact:vendorExtensions>
            </ipxact:componentInstance>
            <ipxact:componentInstance>
                <ipxact:instanceName>mem0</ipxact:instanceName>
                <ipxact:componentRef vendor="TUT" library="ip" name="Memory" version="2.0"/>
            </ipxact:componentInstance>
        </ipxact:componentInstances>"#,
    ));

    assert_eq!(design.component_instances().len(), 2);

    let cpu = design.find_component_instance("cpu0").unwrap();
    assert_eq!(cpu.position, Some(Point::new(100, 50)));
    assert_eq!(cpu.uuid(), "{0b4f7a33-7e8e-4ac2-9d1f-9a5b3c2e1f00}");
    assert_eq!(design.hw_instance_description("CPU0"), "Main processor");
    assert_eq!(design.conf_element_value("cpu0", "DATA_WIDTH"), "32");

    let mem = design.find_component_instance("mem0").unwrap();
    assert_eq!(mem.position, None);
    assert!(!mem.uuid().is_empty());
    assert_eq!(design.hw_component_vlnv("mem0").name, "Memory");
}

#[rstest]
#[case(NAMESPACES_2014, "componentRef")]
#[case(NAMESPACES_2022, "componentInstanceRef")]
fn test_read_interconnections(#[case] namespaces: &str, #[case] attribute: &str) {
    let body = format!(
        r#"<ipxact:interconnections>
            <ipxact:interconnection>
                <ipxact:name>cpu_to_mem</ipxact:name>
                <ipxact:activeInterface {attribute}="cpu0" busRef="master"/>
                <ipxact:activeInterface {attribute}="mem0" busRef="slave">
                    <ipxact:vendorExtensions>
                        <kactus2:route>
                            <kactus2:position x="1" y="2"/>
                        </kactus2:route>
                    </ipxact:vendorExtensions>
                </ipxact:activeInterface>
                <ipxact:vendorExtensions>
                    <kactus2:offPage/>
                </ipxact:vendorExtensions>
            </ipxact:interconnection>
            <ipxact:monitorInterconnection>
                <ipxact:name>monitor</ipxact:name>
                <ipxact:monitoredActiveInterface {attribute}="cpu0" busRef="master" path="/top"/>
                <ipxact:monitorInterface {attribute}="probe" busRef="mon"/>
            </ipxact:monitorInterconnection>
        </ipxact:interconnections>"#
    );
    let design = read(&document(namespaces, &body));

    let interconnection = &design.interconnections()[0];
    assert_eq!(interconnection.name(), "cpu_to_mem");
    assert_eq!(interconnection.start_interface.component_ref, "cpu0");
    assert_eq!(interconnection.active_interfaces.len(), 1);
    assert_eq!(interconnection.active_interfaces[0].route, vec![Point::new(1, 2)]);
    assert!(interconnection.off_page);
    assert!(design.has_interconnection("mem0", "slave"));

    let monitor = &design.monitor_interconnections()[0];
    assert_eq!(monitor.monitored_active_interface.component_ref, "cpu0");
    assert_eq!(monitor.monitored_active_interface.path, "/top");
    assert_eq!(monitor.monitor_interfaces[0].component_ref, "probe");
}

#[test]
fn test_read_ad_hoc_connections() {
    let design = read(&document(
        NAMESPACES_2014,
        r#"<ipxact:adHocConnections>
            <ipxact:adHocConnection>
                <ipxact:name>clk</ipxact:name>
                <ipxact:tiedValue>1</ipxact:tiedValue>
                <ipxact:portReferences>
                    <ipxact:internalPortReference componentRef="cpu0" portRef="clk">
                        <ipxact:partSelect>
                            <ipxact:range>
                                <ipxact:left>0</ipxact:left>
                                <ipxact:right>0</ipxact:right>
                            </ipxact:range>
                        </ipxact:partSelect>
                    </ipxact:internalPortReference>
                    <ipxact:externalPortReference portRef="clk_in"/>
                </ipxact:portReferences>
            </ipxact:adHocConnection>
        </ipxact:adHocConnections>"#,
    ));

    let connection = &design.ad_hoc_connections()[0];
    assert_eq!(connection.name(), "clk");
    assert_eq!(connection.tied_value, "1");
    assert_eq!(connection.internal_port_references[0].component_ref, "cpu0");
    assert_eq!(connection.internal_port_references[0].part_select, Some(PartSelect::new("0", "0")));
    assert_eq!(connection.external_port_references[0].port_ref, "clk_in");
    assert_eq!(connection.external_port_references[0].part_select, None);
}

#[test]
fn test_read_version_and_generic_extension() {
    let design = read(&document(
        NAMESPACES_2014,
        r#"<ipxact:vendorExtensions>
            <kactus2:version>3.0.0</kactus2:version>
            <testExtension testExtensionAttribute="extension">testValue</testExtension>
        </ipxact:vendorExtensions>"#,
    ));

    assert_eq!(design.vendor_extensions().len(), 2);
    assert_eq!(design.version(), "3.0.0");
    assert!(matches!(
        &design.vendor_extensions()[1],
        VendorExtension::Generic(element) if element.name == "testExtension"
            && element.attribute("testExtensionAttribute") == Some("extension")
            && element.text() == "testValue"
    ));
}

#[rstest]
#[case("HW", Implementation::Hw)]
#[case("SW", Implementation::Sw)]
#[case("SYS", Implementation::System)]
#[case("unknown", Implementation::Hw)]
fn test_read_design_implementation(#[case] value: &str, #[case] expected: Implementation) {
    let design = read(&document(
        NAMESPACES_2022,
        &format!(
            r#"<ipxact:vendorExtensions>
            <kactus2:kts_attributes>
                <kactus2:kts_implementation>{value}</kactus2:kts_implementation>
            </kactus2:kts_attributes>
        </ipxact:vendorExtensions>"#
        ),
    ));

    assert_eq!(design.implementation(), expected);
    assert!(matches!(
        &design.vendor_extensions()[0],
        VendorExtension::Group(group) if group.type_name == tag::KTS_ATTRIBUTES
    ));
}

#[test]
fn test_read_kactus2_design_extensions() {
    let design = read(&document(
        NAMESPACES_2014,
        r#"<ipxact:vendorExtensions>
            <kactus2:columnLayout>
                <kactus2:column name="IO" contentType="0" allowedItems="1" minWidth="119" width="119" x="0"/>
                <kactus2:column name="Components" contentType="2" allowedItems="2" minWidth="259" width="259" x="119"/>
            </kactus2:columnLayout>
            <kactus2:routes>
                <kactus2:route kactus2:connRef="cpu_to_mem" kactus2:offPage="false">
                    <kactus2:position x="10" y="20"/>
                    <kactus2:position x="30" y="20"/>
                </kactus2:route>
            </kactus2:routes>
            <kactus2:adHocVisibilities>
                <kactus2:adHocVisible portName="clk_in" x="5" y="6"/>
            </kactus2:adHocVisibilities>
            <kactus2:swInstances>
                <kactus2:swInstance>
                    <kactus2:instanceName>driver</kactus2:instanceName>
                    <kactus2:componentRef vendor="TUT" library="sw" name="Driver" version="1.0"/>
                    <kactus2:mapping hwRef="cpu0"/>
                </kactus2:swInstance>
            </kactus2:swInstances>
            <kactus2:apiConnections>
                <kactus2:apiConnection>
                    <ipxact:name>calls</ipxact:name>
                    <kactus2:activeApiInterface componentRef="driver" apiRef="api"/>
                    <kactus2:hierApiInterface apiRef="top_api"/>
                </kactus2:apiConnection>
            </kactus2:apiConnections>
            <kactus2:interfaceGraphics>
                <kactus2:name>top_api</kactus2:name>
                <kactus2:position x="1" y="1"/>
                <kactus2:direction x="-1" y="0"/>
            </kactus2:interfaceGraphics>
        </ipxact:vendorExtensions>"#,
    ));

    let columns = design.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].content_type, ColumnContentType::Io);
    assert_eq!(columns[0].width, 119);

    let routes = design.routes();
    assert_eq!(routes[0].name, "cpu_to_mem");
    assert_eq!(routes[0].route.len(), 2);

    assert_eq!(design.ad_hoc_port_positions().get("clk_in"), Some(&Point::new(5, 6)));
    assert_eq!(design.port_ad_hoc_visibilities().get("clk_in"), Some(&true));

    let sw_instances = design.sw_instances();
    assert_eq!(sw_instances[0].instance_name(), "driver");
    assert_eq!(sw_instances[0].mapping, "cpu0");

    let api = design.api_connections();
    assert_eq!(api[0].kind, SwInterfaceKind::Api);
    assert_eq!(api[0].active_interfaces, vec![SwInterfaceRef::active("driver", "api")]);
    assert!(design.com_connections().is_empty());

    let graphics = design.interface_graphics();
    assert_eq!(graphics[0].direction, Point::new(-1, 0));

    assert!(design.vendor_extensions().find_group(tag::SW_INSTANCES).is_some());
}

#[test]
fn test_legacy_extensions_wrapper() {
    let design = read(&document(
        NAMESPACES_2014,
        r#"<ipxact:vendorExtensions>
            <kactus2:extensions>
                <kactus2:version>2.8</kactus2:version>
            </kactus2:extensions>
        </ipxact:vendorExtensions>"#,
    ));

    assert_eq!(design.version(), "2.8");
    assert_eq!(design.vendor_extensions().len(), 1);
}

#[test]
fn test_missing_elements_produce_defaults() {
    let design = read(
        r#"<ipxact:design>
            <ipxact:componentInstances><ipxact:componentInstance/></ipxact:componentInstances>
        </ipxact:design>"#,
    );

    assert_eq!(design.revision(), Revision::Std14);
    assert!(design.vlnv().is_empty());
    let instance = &design.component_instances()[0];
    assert_eq!(instance.instance_name(), "");
    assert!(instance.component_ref.vlnv.is_empty());
    assert!(!instance.uuid().is_empty());
    assert_eq!(design.implementation(), Implementation::Hw);
}
