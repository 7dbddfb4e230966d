use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use super::{
    emit, empty, end, extensions, optional_text_element, start, text_element, write_name_group,
    write_route,
};
use crate::error::Result;
use crate::extension::tag;
use crate::model::{AdHocConnection, PartSelect, PortReference};
use crate::revision::Revision;

pub(super) fn write_ad_hoc_connections<W: Write>(
    writer: &mut Writer<W>,
    connections: &[AdHocConnection],
    revision: Revision,
) -> Result<()> {
    if connections.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:adHocConnections"))?;
    for connection in connections {
        write_ad_hoc_connection(writer, connection, revision)?;
    }
    end(writer, "ipxact:adHocConnections")
}

fn write_ad_hoc_connection<W: Write>(
    writer: &mut Writer<W>,
    connection: &AdHocConnection,
    revision: Revision,
) -> Result<()> {
    start(writer, BytesStart::new("ipxact:adHocConnection"))?;
    write_name_group(
        writer,
        "ipxact",
        "name",
        &connection.name_group,
        revision.table().supports_short_description,
    )?;
    optional_text_element(writer, "ipxact:isPresent", &connection.is_present)?;
    optional_text_element(writer, "ipxact:tiedValue", &connection.tied_value)?;

    if !connection.internal_port_references.is_empty()
        || !connection.external_port_references.is_empty()
    {
        start(writer, BytesStart::new("ipxact:portReferences"))?;
        for port in &connection.internal_port_references {
            let mut element = BytesStart::new("ipxact:internalPortReference");
            element.push_attribute((
                revision.table().component_ref_attribute,
                port.component_ref.as_str(),
            ));
            element.push_attribute(("portRef", port.port_ref.as_str()));
            write_port_reference(writer, element, port, revision)?;
        }
        for port in &connection.external_port_references {
            let mut element = BytesStart::new("ipxact:externalPortReference");
            element.push_attribute(("portRef", port.port_ref.as_str()));
            write_port_reference(writer, element, port, revision)?;
        }
        end(writer, "ipxact:portReferences")?;
    }

    let has_extensions = connection.off_page
        || !connection.route.is_empty()
        || !connection.vendor_extensions.is_empty();
    if has_extensions {
        start(writer, BytesStart::new("ipxact:vendorExtensions"))?;
        if connection.off_page {
            empty(writer, BytesStart::new(tag::OFF_PAGE))?;
        }
        if !connection.route.is_empty() {
            write_route(writer, BytesStart::new(tag::ROUTE), &connection.route)?;
        }
        for extension in &connection.vendor_extensions {
            extensions::write_extension(writer, extension)?;
        }
        end(writer, "ipxact:vendorExtensions")?;
    }

    end(writer, "ipxact:adHocConnection")
}

/// Body of a port reference. `element` already carries the reference attributes.
fn write_port_reference<W: Write>(
    writer: &mut Writer<W>,
    element: BytesStart<'_>,
    port: &PortReference,
    revision: Revision,
) -> Result<()> {
    let write_sub_ports =
        revision.table().supports_sub_ports && !port.sub_port_references.is_empty();
    let has_children = !port.is_present.is_empty() || port.part_select.is_some() || write_sub_ports;
    if !has_children {
        return empty(writer, element);
    }

    let closing = element.to_end().into_owned();
    start(writer, element)?;
    optional_text_element(writer, "ipxact:isPresent", &port.is_present)?;
    if write_sub_ports {
        for sub_port in &port.sub_port_references {
            let mut element = BytesStart::new("ipxact:subPortReference");
            element.push_attribute(("subPortRef", sub_port.port_ref.as_str()));
            write_port_reference(writer, element, sub_port, revision)?;
        }
    }
    if let Some(part_select) = &port.part_select {
        write_part_select(writer, part_select)?;
    }
    emit(writer, Event::End(closing))
}

fn write_part_select<W: Write>(writer: &mut Writer<W>, part_select: &PartSelect) -> Result<()> {
    if !part_select.has_range() && part_select.indices.is_empty() {
        return empty(writer, BytesStart::new("ipxact:partSelect"));
    }

    start(writer, BytesStart::new("ipxact:partSelect"))?;
    if part_select.has_range() {
        start(writer, BytesStart::new("ipxact:range"))?;
        text_element(writer, "ipxact:left", &part_select.left_range)?;
        text_element(writer, "ipxact:right", &part_select.right_range)?;
        end(writer, "ipxact:range")?;
    }
    if !part_select.indices.is_empty() {
        start(writer, BytesStart::new("ipxact:indices"))?;
        for index in &part_select.indices {
            text_element(writer, "ipxact:index", index)?;
        }
        end(writer, "ipxact:indices")?;
    }
    end(writer, "ipxact:partSelect")
}
