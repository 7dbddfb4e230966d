#![allow(clippy::unwrap_used)]

use indexmap::IndexMap;
use ipxact::extension::{
    ColumnContentType, ColumnDesc, ConnectionRoute, Implementation, InterfaceGraphicsData, Note,
    SwInstance, SwInterconnection, SwInterfaceKind, SwInterfaceRef, VendorExtension,
};
use ipxact::model::{Assertion, NameGroup, Parameter, PowerDomainLink};
use ipxact::vlnv::ConfigurableElementValue;
use ipxact::xml::{XmlDocument, XmlElement};
use ipxact::{
    ActiveInterface, AdHocConnection, ComponentInstance, ConfigurableVlnvReference, Design,
    DesignReader, DesignWriter, HierInterface, Interconnection, MonitorInterconnection,
    MonitorInterface, PartSelect, Point, PortReference, Revision, Vlnv, VlnvType,
};
use rstest::rstest;

fn component(name: &str) -> ConfigurableVlnvReference {
    ConfigurableVlnvReference::new(Vlnv::new(VlnvType::Component, "TUT", "ip", name, "1.0"))
}

fn read(bytes: &[u8]) -> Design {
    DesignReader::new().create_design_from(&XmlDocument::parse(bytes).unwrap())
}

/// A design touching every serialized element kind.
fn full_design(revision: Revision) -> Design {
    let vlnv = Vlnv::new(VlnvType::Design, "TUT", "soc", "top.design", "1.0");
    let mut design = Design::new(vlnv, revision);
    design.add_top_comment("Generated");
    design.set_display_name("Top");
    design.set_short_description("SoC top");
    design.set_description("Top level & friends");

    let mut cpu = ComponentInstance::new(
        "cpu0",
        component("Cpu").with_element_value(ConfigurableElementValue::new("32", "DATA_WIDTH")),
    )
    .with_position(Point::new(100, 50));
    cpu.name_group = NameGroup::new("cpu0").with_display_name("CPU").with_description("Main core");
    cpu.is_present = "1".to_string();
    cpu.power_domain_links
        .push(PowerDomainLink::new("always_on").with_internal_reference("core"));
    cpu.update_bus_interface_position("master", Point::new(10, 0));
    cpu.update_ad_hoc_port_position("irq", Point::new(0, 30));
    cpu.api_interface_positions.insert("api".to_string(), Point::new(1, 1));
    cpu.com_interface_positions.insert("com".to_string(), Point::new(2, 2));
    cpu.property_values.insert("freq".to_string(), "100".to_string());
    cpu.set_imported("source");
    cpu.vendor_extensions
        .push(VendorExtension::Generic(XmlElement::new("acme:note").with_text("kept")));

    let mut mem =
        ComponentInstance::new("mem0", component("Memory")).with_position(Point::new(300, 50));
    mem.draft = true;

    design.set_component_instances(vec![cpu, mem]);

    let mut bus = Interconnection::new("cpu_to_mem", ActiveInterface::new("cpu0", "master"))
        .with_active_interface(
            ActiveInterface::new("mem0", "slave")
                .with_description("memory")
                .with_exclude_port("irq"),
        )
        .with_hier_interface(
            HierInterface::new("ext").with_route(vec![Point::new(0, 0), Point::new(0, 10)]),
        );
    bus.off_page = true;
    design.interconnections_mut().push(bus);

    let mut monitored = MonitorInterface::new("cpu0", "master").with_path("/top");
    monitored.description = "watched".to_string();
    monitored.is_present = "1".to_string();
    design.monitor_interconnections_mut().push(
        MonitorInterconnection::new("monitor", monitored)
            .with_monitor_interface(MonitorInterface::new("probe", "mon")),
    );

    let mut wire = AdHocConnection::new("irq_wire")
        .with_tied_value("0")
        .with_internal_port(
            PortReference::internal("irq", "cpu0")
                .with_part_select(PartSelect::new("3", "0").with_index("1"))
                .with_sub_port(
                    PortReference::external("low").with_part_select(PartSelect::new("1", "0")),
                ),
        )
        .with_external_port(PortReference::external("irq_out"));
    wire.off_page = true;
    wire.route = vec![Point::new(5, 5), Point::new(5, 15)];
    design.ad_hoc_connections_mut().push(wire);

    design.parameters_mut().push(Parameter::new("p1", "width", "8"));
    design.assertions_mut().push(Assertion::new("positive", "width > 0"));

    design.set_version("3.0.0");
    design.set_implementation(Implementation::Sw);
    design.add_column(ColumnDesc::new("IO", ColumnContentType::Io));
    design.add_column(ColumnDesc::new("Components", ColumnContentType::Components).with_x(259));
    design.add_route(ConnectionRoute::new("cpu_to_mem", vec![Point::new(1, 2), Point::new(3, 2)]));

    let mut positions = IndexMap::new();
    positions.insert("irq_out".to_string(), Point::new(7, 8));
    design.set_ad_hoc_port_positions(&positions);

    let mut driver = SwInstance::new(
        "driver",
        Vlnv::new(VlnvType::Component, "TUT", "sw", "Driver", "1.0"),
    );
    driver.mapping = "cpu0".to_string();
    driver.position = Some(Point::new(20, 20));
    driver.property_values.insert("stack".to_string(), "4k".to_string());
    design.set_sw_instances(vec![driver]);
    design.set_api_connections(vec![
        SwInterconnection::new(SwInterfaceKind::Api, "calls")
            .with_active(SwInterfaceRef::active("driver", "api"))
            .with_hier(SwInterfaceRef::hierarchical("top_api")),
    ]);
    design.set_com_connections(vec![
        SwInterconnection::new(SwInterfaceKind::Com, "messages")
            .with_active(SwInterfaceRef::active("driver", "tx")),
    ]);
    design.add_interface_graphics(InterfaceGraphicsData::new(
        "top_api",
        Point::new(1, 1),
        Point::new(-1, 0),
    ));
    let mut note = Note::new(Point::new(9, 9), "check timing");
    note.timestamp = "2024-01-01".to_string();
    design.add_note(note);
    design.vendor_extensions_mut().push(VendorExtension::Generic(
        XmlElement::new("acme:custom")
            .with_attribute("a", "1")
            .with_child(XmlElement::new("acme:inner").with_text("x")),
    ));

    design
}

#[rstest]
#[case(Revision::Std14)]
#[case(Revision::Std22)]
fn test_write_read_write_is_byte_stable(#[case] revision: Revision) {
    let writer = DesignWriter::new();
    let first = writer.write(&full_design(revision)).unwrap();
    let second = writer.write(&read(&first)).unwrap();
    assert_eq!(
        String::from_utf8(first).unwrap(),
        String::from_utf8(second).unwrap()
    );
}

#[rstest]
#[case(Revision::Std14)]
#[case(Revision::Std22)]
fn test_round_trip_preserves_content(#[case] revision: Revision) {
    let original = full_design(revision);
    let copy = read(&DesignWriter::new().write(&original).unwrap());

    assert_eq!(copy.revision(), revision);
    assert_eq!(copy.vlnv(), original.vlnv());
    assert_eq!(copy.description(), "Top level & friends");
    assert_eq!(copy.top_comments(), original.top_comments());
    let mut expected = original.component_instances().to_vec();
    if revision == Revision::Std14 {
        for instance in &mut expected {
            instance.power_domain_links.clear();
        }
    }
    assert_eq!(copy.component_instances(), expected.as_slice());
    assert_eq!(copy.ad_hoc_connections().len(), 1);
    assert_eq!(copy.parameters(), original.parameters());
    assert_eq!(copy.assertions(), original.assertions());
    assert_eq!(copy.vendor_extensions(), original.vendor_extensions());
    assert_eq!(copy.version(), "3.0.0");
    assert_eq!(copy.implementation(), Implementation::Sw);
}

#[test]
fn test_revision_specific_content_on_2014() {
    let copy = read(&DesignWriter::new().write(&full_design(Revision::Std14)).unwrap());

    assert_eq!(copy.display_name(), "");
    assert_eq!(copy.short_description(), "");
    let cpu = copy.find_component_instance("cpu0").unwrap();
    assert!(cpu.power_domain_links.is_empty());
    let port = &copy.ad_hoc_connections()[0].internal_port_references[0];
    assert!(port.sub_port_references.is_empty());
    assert_eq!(port.part_select, Some(PartSelect::new("3", "0").with_index("1")));
}

#[test]
fn test_revision_specific_content_on_2022() {
    let original = full_design(Revision::Std22);
    let copy = read(&DesignWriter::new().write(&original).unwrap());

    assert_eq!(copy.display_name(), "Top");
    assert_eq!(copy.short_description(), "SoC top");
    let port = &copy.ad_hoc_connections()[0].internal_port_references[0];
    assert_eq!(port, &original.ad_hoc_connections()[0].internal_port_references[0]);
    assert_eq!(port.sub_port_references[0].port_ref, "low");
}

#[rstest]
#[case(Implementation::Hw, "HW")]
#[case(Implementation::Sw, "SW")]
#[case(Implementation::System, "SYS")]
fn test_implementation_round_trip(#[case] implementation: Implementation, #[case] text: &str) {
    let mut design = full_design(Revision::Std22);
    design.set_implementation(implementation);

    let output = DesignWriter::new().write(&design).unwrap();
    let xml = String::from_utf8(output.clone()).unwrap();
    assert!(xml.contains(&format!(
        "<kactus2:kts_attributes>\n\
         \t\t\t<kactus2:kts_implementation>{text}</kactus2:kts_implementation>"
    )));
    assert_eq!(read(&output).implementation(), implementation);
}

#[test]
fn test_interconnection_details_survive() {
    let copy = read(&DesignWriter::new().write(&full_design(Revision::Std22)).unwrap());

    let bus = &copy.interconnections()[0];
    assert!(bus.off_page);
    assert_eq!(bus.start_interface.component_ref, "cpu0");
    let slave = &bus.active_interfaces[0];
    assert_eq!(slave.description, "memory");
    assert_eq!(slave.exclude_ports, vec!["irq".to_string()]);
    assert_eq!(bus.hier_interfaces[0].route, vec![Point::new(0, 0), Point::new(0, 10)]);

    let monitor = &copy.monitor_interconnections()[0];
    assert_eq!(monitor.monitored_active_interface.description, "watched");
    assert_eq!(monitor.monitored_active_interface.is_present, "1");
    assert_eq!(monitor.monitor_interfaces[0].bus_ref, "mon");

    let wire = &copy.ad_hoc_connections()[0];
    assert!(wire.off_page);
    assert_eq!(wire.route, vec![Point::new(5, 5), Point::new(5, 15)]);
    assert_eq!(wire.tied_value, "0");
}

#[test]
fn test_cpu_memory_clock_scenario() {
    let vlnv = Vlnv::new(VlnvType::Design, "TUT", "soc", "small.design", "1.0");
    let mut design = Design::new(vlnv, Revision::Std14);
    design.set_component_instances(vec![
        ComponentInstance::new("cpu0", component("Cpu")),
        ComponentInstance::new("mem0", component("Memory")),
    ]);
    design.interconnections_mut().push(
        Interconnection::new("cpu_to_mem", ActiveInterface::new("cpu0", "master"))
            .with_active_interface(ActiveInterface::new("mem0", "slave")),
    );
    design.ad_hoc_connections_mut().push(
        AdHocConnection::new("clk")
            .with_internal_port(PortReference::internal("clk", "cpu0"))
            .with_internal_port(PortReference::internal("clk", "mem0"))
            .with_external_port(PortReference::external("clk")),
    );

    let copy = read(&DesignWriter::new().write(&design).unwrap());

    assert!(copy.contains_hw_instance("CPU0"));
    assert!(copy.has_interconnection("cpu0", "master"));
    assert!(copy.has_interconnection("mem0", "slave"));
    assert!(!copy.has_interconnection("mem0", "master"));
    assert_eq!(copy.dependent_vlnvs().len(), 2);

    let clk = &copy.ad_hoc_connections()[0];
    let instances: Vec<_> = clk
        .internal_port_references
        .iter()
        .map(|port| port.component_ref.as_str())
        .collect();
    assert_eq!(instances, vec!["cpu0", "mem0"]);
    assert_eq!(clk.external_port_references[0].port_ref, "clk");

    for instance in design.component_instances() {
        let name = instance.instance_name();
        assert_eq!(copy.find_component_instance(name).unwrap().uuid(), instance.uuid());
    }
}
