use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::BytesStart;

use super::{
    empty, end, optional_text_element, push_vlnv_attributes, start, text_element,
    write_name_group, write_point, write_position_group, write_property_values, write_route,
};
use crate::error::Result;
use crate::extension::{
    ColumnDesc, ConnectionRoute, InterfaceGraphicsData, Kactus2Group, Kactus2Placeholder, Note,
    SwInstance, SwInterconnection, VendorExtension, tag,
};
use crate::xml::write_element;

/// Write one vendor extension as its own element.
pub(super) fn write_extension<W: Write>(
    writer: &mut Writer<W>,
    extension: &VendorExtension,
) -> Result<()> {
    match extension {
        VendorExtension::Generic(element) => write_element(writer, element),
        VendorExtension::Placeholder(placeholder) => write_placeholder(writer, placeholder),
        VendorExtension::Value(value) => text_element(writer, &value.type_name, &value.value),
        VendorExtension::Group(group) => write_group(writer, group),
        VendorExtension::Column(column) => write_column(writer, column),
        VendorExtension::Route(route) => write_connection_route(writer, route),
        VendorExtension::SwInstance(instance) => write_sw_instance(writer, instance),
        VendorExtension::SwConnection(connection) => write_sw_connection(writer, connection),
        VendorExtension::InterfaceGraphics(graphics) => write_interface_graphics(writer, graphics),
        VendorExtension::Note(note) => write_note(writer, note),
    }
}

fn write_placeholder<W: Write>(
    writer: &mut Writer<W>,
    placeholder: &Kactus2Placeholder,
) -> Result<()> {
    let mut element = BytesStart::new(placeholder.type_name.as_str());
    for (name, value) in &placeholder.attributes {
        element.push_attribute((name.as_str(), value.as_str()));
    }
    empty(writer, element)
}

fn write_group<W: Write>(writer: &mut Writer<W>, group: &Kactus2Group) -> Result<()> {
    if group.items.is_empty() {
        return empty(writer, BytesStart::new(group.type_name.as_str()));
    }

    start(writer, BytesStart::new(group.type_name.as_str()))?;
    for item in &group.items {
        write_extension(writer, item)?;
    }
    end(writer, &group.type_name)
}

fn write_column<W: Write>(writer: &mut Writer<W>, column: &ColumnDesc) -> Result<()> {
    let mut element = BytesStart::new(tag::COLUMN);
    element.push_attribute(("name", column.name.as_str()));
    element.push_attribute(("contentType", column.content_type.code().to_string().as_str()));
    element.push_attribute(("allowedItems", column.allowed_items.to_string().as_str()));
    element.push_attribute(("minWidth", column.min_width.to_string().as_str()));
    element.push_attribute(("width", column.width.to_string().as_str()));
    element.push_attribute(("x", column.x.to_string().as_str()));
    empty(writer, element)
}

fn write_connection_route<W: Write>(writer: &mut Writer<W>, route: &ConnectionRoute) -> Result<()> {
    let mut element = BytesStart::new(tag::ROUTE);
    element.push_attribute(("kactus2:connRef", route.name.as_str()));
    element.push_attribute(("kactus2:offPage", if route.off_page { "true" } else { "false" }));
    write_route(writer, element, &route.route)
}

fn write_sw_instance<W: Write>(writer: &mut Writer<W>, instance: &SwInstance) -> Result<()> {
    start(writer, BytesStart::new(tag::SW_INSTANCE))?;
    write_name_group(writer, "kactus2", "instanceName", &instance.name_group, true)?;

    if !instance.component_ref.is_empty() {
        let mut element = BytesStart::new("kactus2:componentRef");
        push_vlnv_attributes(&mut element, &instance.component_ref);
        empty(writer, element)?;
    }
    optional_text_element(writer, "kactus2:fileSetRef", &instance.file_set_ref)?;
    if !instance.mapping.is_empty() {
        let mut element = BytesStart::new("kactus2:mapping");
        element.push_attribute(("hwRef", instance.mapping.as_str()));
        empty(writer, element)?;
    }
    if let Some(position) = instance.position {
        write_point(writer, tag::POSITION, position)?;
    }
    if instance.imported {
        let mut element = BytesStart::new(tag::IMPORTED);
        if !instance.import_ref.is_empty() {
            element.push_attribute(("importRef", instance.import_ref.as_str()));
        }
        empty(writer, element)?;
    }
    if instance.draft {
        empty(writer, BytesStart::new(tag::DRAFT))?;
    }

    write_property_values(writer, &instance.property_values)?;
    write_position_group(
        writer,
        tag::API_INTERFACE_POSITIONS,
        tag::API_INTERFACE_POSITION,
        "apiRef",
        &instance.api_interface_positions,
    )?;
    write_position_group(
        writer,
        tag::COM_INTERFACE_POSITIONS,
        tag::COM_INTERFACE_POSITION,
        "comRef",
        &instance.com_interface_positions,
    )?;

    end(writer, tag::SW_INSTANCE)
}

fn write_sw_connection<W: Write>(
    writer: &mut Writer<W>,
    connection: &SwInterconnection,
) -> Result<()> {
    let kind = connection.kind;

    start(writer, BytesStart::new(kind.connection_tag()))?;
    write_name_group(writer, "ipxact", "name", &connection.name_group, true)?;
    for endpoint in &connection.active_interfaces {
        let mut element = BytesStart::new(kind.active_tag());
        element.push_attribute(("componentRef", endpoint.component_ref.as_str()));
        element.push_attribute((kind.ref_attribute(), endpoint.interface_ref.as_str()));
        empty(writer, element)?;
    }
    for endpoint in &connection.hier_interfaces {
        let mut element = BytesStart::new(kind.hier_tag());
        element.push_attribute((kind.ref_attribute(), endpoint.interface_ref.as_str()));
        empty(writer, element)?;
    }
    end(writer, kind.connection_tag())
}

fn write_interface_graphics<W: Write>(
    writer: &mut Writer<W>,
    graphics: &InterfaceGraphicsData,
) -> Result<()> {
    start(writer, BytesStart::new(tag::INTERFACE_GRAPHICS))?;
    text_element(writer, "kactus2:name", &graphics.name)?;
    write_point(writer, tag::POSITION, graphics.position)?;
    write_point(writer, tag::DIRECTION, graphics.direction)?;
    end(writer, tag::INTERFACE_GRAPHICS)
}

fn write_note<W: Write>(writer: &mut Writer<W>, note: &Note) -> Result<()> {
    start(writer, BytesStart::new(tag::NOTE))?;
    write_point(writer, tag::POSITION, note.position)?;
    text_element(writer, "kactus2:content", &note.content)?;
    optional_text_element(writer, "kactus2:timestamp", &note.timestamp)?;
    end(writer, tag::NOTE)
}
