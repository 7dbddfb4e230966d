use tracing::debug;

use super::{
    parse_name_group, parse_point, parse_position_group, parse_property_values,
    parse_vlnv_attributes,
};
use crate::extension::{VendorExtension, tag};
use crate::model::{ComponentInstance, PowerDomainLink};
use crate::revision::Revision;
use crate::vlnv::{ConfigurableElementValue, ConfigurableVlnvReference, VlnvType};
use crate::xml::XmlElement;

pub(super) fn parse_component_instance(
    element: &XmlElement,
    revision: Revision,
) -> ComponentInstance {
    let mut instance = ComponentInstance::new("", parse_component_ref(element));
    instance.name_group = parse_name_group(element, "ipxact", "instanceName");
    instance.is_present = element.child_text("ipxact:isPresent");

    if revision.table().supports_power_domains {
        if let Some(links) = element.child("ipxact:powerDomainLinks") {
            instance.power_domain_links = links
                .children_named("ipxact:powerDomainLink")
                .map(parse_power_domain_link)
                .collect();
        }
    }

    if let Some(extensions) = element.child("ipxact:vendorExtensions") {
        parse_instance_extensions(extensions, &mut instance);
    }

    instance
}

fn parse_component_ref(element: &XmlElement) -> ConfigurableVlnvReference {
    let Some(reference) = element.child("ipxact:componentRef") else {
        return ConfigurableVlnvReference::default();
    };

    let mut component_ref =
        ConfigurableVlnvReference::new(parse_vlnv_attributes(reference, VlnvType::Component));
    if let Some(values) = reference.child("ipxact:configurableElementValues") {
        component_ref.configurable_element_values = values
            .children_named("ipxact:configurableElementValue")
            .map(|value| {
                ConfigurableElementValue::new(
                    value.text(),
                    value.attribute("referenceId").unwrap_or_default(),
                )
            })
            .collect();
    }
    component_ref
}

fn parse_power_domain_link(element: &XmlElement) -> PowerDomainLink {
    PowerDomainLink {
        external_reference: element.child_text("ipxact:externalPowerDomainReference"),
        internal_references: element
            .children_named("ipxact:internalPowerDomainReference")
            .map(XmlElement::text)
            .collect(),
    }
}

fn parse_instance_extensions(extensions: &XmlElement, instance: &mut ComponentInstance) {
    for extension in extensions.child_elements() {
        match extension.name.as_str() {
            tag::POSITION => instance.position = Some(parse_point(extension)),
            tag::UUID => instance.set_uuid(extension.text()),
            tag::IMPORTED => {
                instance.set_imported(extension.attribute("importRef").unwrap_or_default());
            }
            tag::PORT_POSITIONS => {
                instance.bus_interface_positions =
                    parse_position_group(extension, tag::PORT_POSITION, "busRef");
            }
            tag::AD_HOC_VISIBILITIES => {
                instance.ad_hoc_port_positions =
                    parse_position_group(extension, tag::AD_HOC_VISIBLE, "portName");
            }
            tag::API_INTERFACE_POSITIONS => {
                instance.api_interface_positions =
                    parse_position_group(extension, tag::API_INTERFACE_POSITION, "apiRef");
            }
            tag::COM_INTERFACE_POSITIONS => {
                instance.com_interface_positions =
                    parse_position_group(extension, tag::COM_INTERFACE_POSITION, "comRef");
            }
            tag::PROPERTY_VALUES => instance.property_values = parse_property_values(extension),
            tag::DRAFT => instance.draft = true,
            _ => {
                debug!(
                    extension = %extension.name,
                    instance = %instance.instance_name(),
                    "preserving unknown instance extension"
                );
                instance
                    .vendor_extensions
                    .push(VendorExtension::Generic(extension.clone()));
            }
        }
    }
}
