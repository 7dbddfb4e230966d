use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::BytesStart;

use super::{
    empty, end, extensions, optional_text_element, start, text_element, text_element_with,
    write_name_group, write_point, write_position_group, write_property_values,
};
use crate::error::Result;
use crate::extension::tag;
use crate::model::{ComponentInstance, PowerDomainLink};
use crate::revision::Revision;
use crate::vlnv::ConfigurableVlnvReference;

pub(super) fn write_component_instances<W: Write>(
    writer: &mut Writer<W>,
    instances: &[ComponentInstance],
    revision: Revision,
) -> Result<()> {
    if instances.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:componentInstances"))?;
    for instance in instances {
        write_component_instance(writer, instance, revision)?;
    }
    end(writer, "ipxact:componentInstances")
}

fn write_component_instance<W: Write>(
    writer: &mut Writer<W>,
    instance: &ComponentInstance,
    revision: Revision,
) -> Result<()> {
    let table = revision.table();

    start(writer, BytesStart::new("ipxact:componentInstance"))?;
    write_name_group(
        writer,
        "ipxact",
        "instanceName",
        &instance.name_group,
        table.supports_short_description,
    )?;
    optional_text_element(writer, "ipxact:isPresent", &instance.is_present)?;
    write_component_ref(writer, &instance.component_ref)?;

    if table.supports_power_domains && !instance.power_domain_links.is_empty() {
        start(writer, BytesStart::new("ipxact:powerDomainLinks"))?;
        for link in &instance.power_domain_links {
            write_power_domain_link(writer, link)?;
        }
        end(writer, "ipxact:powerDomainLinks")?;
    }

    write_instance_extensions(writer, instance)?;
    end(writer, "ipxact:componentInstance")
}

fn write_component_ref<W: Write>(
    writer: &mut Writer<W>,
    reference: &ConfigurableVlnvReference,
) -> Result<()> {
    let mut element = BytesStart::new("ipxact:componentRef");
    super::push_vlnv_attributes(&mut element, &reference.vlnv);

    if reference.configurable_element_values.is_empty() {
        return empty(writer, element);
    }

    start(writer, element)?;
    start(writer, BytesStart::new("ipxact:configurableElementValues"))?;
    for value in &reference.configurable_element_values {
        let mut element = BytesStart::new("ipxact:configurableElementValue");
        element.push_attribute(("referenceId", value.reference_id.as_str()));
        text_element_with(writer, element, &value.value)?;
    }
    end(writer, "ipxact:configurableElementValues")?;
    end(writer, "ipxact:componentRef")
}

fn write_power_domain_link<W: Write>(writer: &mut Writer<W>, link: &PowerDomainLink) -> Result<()> {
    start(writer, BytesStart::new("ipxact:powerDomainLink"))?;
    text_element(writer, "ipxact:externalPowerDomainReference", &link.external_reference)?;
    for reference in &link.internal_references {
        text_element(writer, "ipxact:internalPowerDomainReference", reference)?;
    }
    end(writer, "ipxact:powerDomainLink")
}

/// Kactus2 instance data. Always written since every instance has a UUID.
fn write_instance_extensions<W: Write>(
    writer: &mut Writer<W>,
    instance: &ComponentInstance,
) -> Result<()> {
    start(writer, BytesStart::new("ipxact:vendorExtensions"))?;

    if let Some(position) = instance.position {
        write_point(writer, tag::POSITION, position)?;
    }
    text_element(writer, tag::UUID, instance.uuid())?;

    if instance.imported {
        let mut element = BytesStart::new(tag::IMPORTED);
        if !instance.import_ref.is_empty() {
            element.push_attribute(("importRef", instance.import_ref.as_str()));
        }
        empty(writer, element)?;
    }

    write_position_group(
        writer,
        tag::PORT_POSITIONS,
        tag::PORT_POSITION,
        "busRef",
        &instance.bus_interface_positions,
    )?;
    write_position_group(
        writer,
        tag::AD_HOC_VISIBILITIES,
        tag::AD_HOC_VISIBLE,
        "portName",
        &instance.ad_hoc_port_positions,
    )?;
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
    write_property_values(writer, &instance.property_values)?;

    if instance.draft {
        empty(writer, BytesStart::new(tag::DRAFT))?;
    }

    for extension in &instance.vendor_extensions {
        extensions::write_extension(writer, extension)?;
    }

    end(writer, "ipxact:vendorExtensions")
}
