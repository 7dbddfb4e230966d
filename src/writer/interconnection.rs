use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use super::{
    emit, empty, end, extensions, optional_text_element, start, text_element, write_name_group,
    write_route,
};
use crate::error::Result;
use crate::extension::{VendorExtensions, tag};
use crate::model::{
    ActiveInterface, HierInterface, Interconnection, MonitorInterconnection, MonitorInterface,
    Point,
};
use crate::revision::Revision;

/// Interconnections first, then monitor interconnections, under one wrapper.
pub(super) fn write_interconnections<W: Write>(
    writer: &mut Writer<W>,
    interconnections: &[Interconnection],
    monitor_interconnections: &[MonitorInterconnection],
    revision: Revision,
) -> Result<()> {
    if interconnections.is_empty() && monitor_interconnections.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:interconnections"))?;
    for interconnection in interconnections {
        write_interconnection(writer, interconnection, revision)?;
    }
    for interconnection in monitor_interconnections {
        write_monitor_interconnection(writer, interconnection, revision)?;
    }
    end(writer, "ipxact:interconnections")
}

fn write_interconnection<W: Write>(
    writer: &mut Writer<W>,
    interconnection: &Interconnection,
    revision: Revision,
) -> Result<()> {
    start(writer, BytesStart::new("ipxact:interconnection"))?;
    write_name_group(
        writer,
        "ipxact",
        "name",
        &interconnection.name_group,
        revision.table().supports_short_description,
    )?;
    optional_text_element(writer, "ipxact:isPresent", &interconnection.is_present)?;

    write_active_interface(writer, &interconnection.start_interface, revision)?;
    for interface in &interconnection.active_interfaces {
        write_active_interface(writer, interface, revision)?;
    }
    for interface in &interconnection.hier_interfaces {
        write_hier_interface(writer, interface)?;
    }

    if interconnection.off_page || !interconnection.vendor_extensions.is_empty() {
        start(writer, BytesStart::new("ipxact:vendorExtensions"))?;
        if interconnection.off_page {
            empty(writer, BytesStart::new(tag::OFF_PAGE))?;
        }
        for extension in &interconnection.vendor_extensions {
            extensions::write_extension(writer, extension)?;
        }
        end(writer, "ipxact:vendorExtensions")?;
    }

    end(writer, "ipxact:interconnection")
}

fn write_active_interface<W: Write>(
    writer: &mut Writer<W>,
    interface: &ActiveInterface,
    revision: Revision,
) -> Result<()> {
    let mut element = BytesStart::new("ipxact:activeInterface");
    element.push_attribute((
        revision.table().component_ref_attribute,
        interface.component_ref.as_str(),
    ));
    element.push_attribute(("busRef", interface.bus_ref.as_str()));

    let has_children = !interface.is_present.is_empty()
        || !interface.description.is_empty()
        || !interface.exclude_ports.is_empty()
        || !interface.route.is_empty()
        || !interface.vendor_extensions.is_empty();
    if !has_children {
        return empty(writer, element);
    }

    start(writer, element)?;
    optional_text_element(writer, "ipxact:isPresent", &interface.is_present)?;
    optional_text_element(writer, "ipxact:description", &interface.description)?;
    if !interface.exclude_ports.is_empty() {
        start(writer, BytesStart::new("ipxact:excludePorts"))?;
        for port in &interface.exclude_ports {
            text_element(writer, "ipxact:excludePort", port)?;
        }
        end(writer, "ipxact:excludePorts")?;
    }
    write_interface_extensions(writer, &interface.route, &interface.vendor_extensions)?;
    end(writer, "ipxact:activeInterface")
}

fn write_hier_interface<W: Write>(writer: &mut Writer<W>, interface: &HierInterface) -> Result<()> {
    let mut element = BytesStart::new("ipxact:hierInterface");
    element.push_attribute(("busRef", interface.bus_ref.as_str()));

    let has_children = !interface.is_present.is_empty()
        || !interface.description.is_empty()
        || !interface.route.is_empty()
        || !interface.vendor_extensions.is_empty();
    if !has_children {
        return empty(writer, element);
    }

    start(writer, element)?;
    optional_text_element(writer, "ipxact:isPresent", &interface.is_present)?;
    optional_text_element(writer, "ipxact:description", &interface.description)?;
    write_interface_extensions(writer, &interface.route, &interface.vendor_extensions)?;
    end(writer, "ipxact:hierInterface")
}

/// Route of the interface end point, then any other extensions.
fn write_interface_extensions<W: Write>(
    writer: &mut Writer<W>,
    route: &[Point],
    vendor_extensions: &VendorExtensions,
) -> Result<()> {
    if route.is_empty() && vendor_extensions.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:vendorExtensions"))?;
    if !route.is_empty() {
        write_route(writer, BytesStart::new(tag::ROUTE), route)?;
    }
    for extension in vendor_extensions {
        extensions::write_extension(writer, extension)?;
    }
    end(writer, "ipxact:vendorExtensions")
}

fn write_monitor_interconnection<W: Write>(
    writer: &mut Writer<W>,
    interconnection: &MonitorInterconnection,
    revision: Revision,
) -> Result<()> {
    start(writer, BytesStart::new("ipxact:monitorInterconnection"))?;
    write_name_group(
        writer,
        "ipxact",
        "name",
        &interconnection.name_group,
        revision.table().supports_short_description,
    )?;
    optional_text_element(writer, "ipxact:isPresent", &interconnection.is_present)?;

    write_monitor_interface(
        writer,
        "ipxact:monitoredActiveInterface",
        &interconnection.monitored_active_interface,
        revision,
    )?;
    for interface in &interconnection.monitor_interfaces {
        write_monitor_interface(writer, "ipxact:monitorInterface", interface, revision)?;
    }

    end(writer, "ipxact:monitorInterconnection")
}

fn write_monitor_interface<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    interface: &MonitorInterface,
    revision: Revision,
) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute((
        revision.table().component_ref_attribute,
        interface.component_ref.as_str(),
    ));
    element.push_attribute(("busRef", interface.bus_ref.as_str()));
    if !interface.path.is_empty() {
        element.push_attribute(("path", interface.path.as_str()));
    }

    let has_children = !interface.description.is_empty()
        || !interface.vendor_extensions.is_empty()
        || !interface.is_present.is_empty();
    if !has_children {
        return empty(writer, element);
    }

    let closing = element.to_end().into_owned();
    start(writer, element)?;
    optional_text_element(writer, "ipxact:description", &interface.description)?;
    super::write_vendor_extensions(writer, &interface.vendor_extensions)?;
    optional_text_element(writer, "ipxact:isPresent", &interface.is_present)?;
    emit(writer, Event::End(closing))
}
