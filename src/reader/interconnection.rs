use super::{generic_extensions, parse_name_group, parse_route};
use crate::extension::{VendorExtension, VendorExtensions, tag};
use crate::model::{
    ActiveInterface, HierInterface, Interconnection, MonitorInterconnection, MonitorInterface,
    Point,
};
use crate::revision::Revision;
use crate::xml::XmlElement;

pub(super) fn parse_interconnection(element: &XmlElement, revision: Revision) -> Interconnection {
    let mut interconnection = Interconnection {
        name_group: parse_name_group(element, "ipxact", "name"),
        is_present: element.child_text("ipxact:isPresent"),
        ..Interconnection::default()
    };

    let mut active_interfaces = element
        .children_named("ipxact:activeInterface")
        .map(|interface| parse_active_interface(interface, revision));
    if let Some(start) = active_interfaces.next() {
        interconnection.start_interface = start;
    }
    interconnection.active_interfaces = active_interfaces.collect();

    interconnection.hier_interfaces = element
        .children_named("ipxact:hierInterface")
        .map(parse_hier_interface)
        .collect();

    if let Some(extensions) = element.child("ipxact:vendorExtensions") {
        interconnection.off_page = extensions.child(tag::OFF_PAGE).is_some();
        interconnection.vendor_extensions = generic_extensions(
            extensions
                .child_elements()
                .filter(|child| child.name != tag::OFF_PAGE),
        );
    }

    interconnection
}

pub(super) fn parse_monitor_interconnection(
    element: &XmlElement,
    revision: Revision,
) -> MonitorInterconnection {
    MonitorInterconnection {
        name_group: parse_name_group(element, "ipxact", "name"),
        is_present: element.child_text("ipxact:isPresent"),
        monitored_active_interface: element
            .child("ipxact:monitoredActiveInterface")
            .map(|interface| parse_monitor_interface(interface, revision))
            .unwrap_or_default(),
        monitor_interfaces: element
            .children_named("ipxact:monitorInterface")
            .map(|interface| parse_monitor_interface(interface, revision))
            .collect(),
    }
}

fn parse_active_interface(element: &XmlElement, revision: Revision) -> ActiveInterface {
    let (route, vendor_extensions) = parse_interface_extensions(element);
    ActiveInterface {
        component_ref: revision.component_ref(element).to_string(),
        bus_ref: element.attribute("busRef").unwrap_or_default().to_string(),
        is_present: element.child_text("ipxact:isPresent"),
        description: element.child_text("ipxact:description"),
        exclude_ports: element
            .child("ipxact:excludePorts")
            .map(|ports| ports.children_named("ipxact:excludePort").map(XmlElement::text).collect())
            .unwrap_or_default(),
        route,
        vendor_extensions,
    }
}

fn parse_hier_interface(element: &XmlElement) -> HierInterface {
    let (route, vendor_extensions) = parse_interface_extensions(element);
    HierInterface {
        bus_ref: element.attribute("busRef").unwrap_or_default().to_string(),
        is_present: element.child_text("ipxact:isPresent"),
        description: element.child_text("ipxact:description"),
        route,
        vendor_extensions,
    }
}

fn parse_monitor_interface(element: &XmlElement, revision: Revision) -> MonitorInterface {
    MonitorInterface {
        component_ref: revision.component_ref(element).to_string(),
        bus_ref: element.attribute("busRef").unwrap_or_default().to_string(),
        path: element.attribute("path").unwrap_or_default().to_string(),
        is_present: element.child_text("ipxact:isPresent"),
        description: element.child_text("ipxact:description"),
        vendor_extensions: element
            .child("ipxact:vendorExtensions")
            .map(|extensions| generic_extensions(extensions.child_elements()))
            .unwrap_or_default(),
    }
}

/// Split interface extensions into the `kactus2:route` points and everything else.
fn parse_interface_extensions(element: &XmlElement) -> (Vec<Point>, VendorExtensions) {
    let mut route = Vec::new();
    let mut others = VendorExtensions::new();

    if let Some(extensions) = element.child("ipxact:vendorExtensions") {
        for extension in extensions.child_elements() {
            if extension.name == tag::ROUTE {
                route = parse_route(extension);
            } else {
                others.push(VendorExtension::Generic(extension.clone()));
            }
        }
    }

    (route, others)
}
