use super::{generic_extensions, parse_name_group, parse_route};
use crate::extension::tag;
use crate::model::{AdHocConnection, PartSelect, PortReference};
use crate::revision::Revision;
use crate::xml::XmlElement;

pub(super) fn parse_ad_hoc_connection(element: &XmlElement, revision: Revision) -> AdHocConnection {
    let mut connection = AdHocConnection {
        name_group: parse_name_group(element, "ipxact", "name"),
        is_present: element.child_text("ipxact:isPresent"),
        tied_value: element.child_text("ipxact:tiedValue"),
        ..AdHocConnection::default()
    };

    if let Some(references) = element.child("ipxact:portReferences") {
        for reference in references.child_elements() {
            match reference.name.as_str() {
                "ipxact:internalPortReference" => {
                    let mut port = parse_port_reference(reference, revision);
                    port.component_ref = revision.component_ref(reference).to_string();
                    connection.internal_port_references.push(port);
                }
                "ipxact:externalPortReference" => {
                    connection
                        .external_port_references
                        .push(parse_port_reference(reference, revision));
                }
                _ => {}
            }
        }
    }

    if let Some(extensions) = element.child("ipxact:vendorExtensions") {
        connection.off_page = extensions.child(tag::OFF_PAGE).is_some();
        if let Some(route) = extensions.child(tag::ROUTE) {
            connection.route = parse_route(route);
        }
        connection.vendor_extensions = generic_extensions(
            extensions
                .child_elements()
                .filter(|child| child.name != tag::OFF_PAGE && child.name != tag::ROUTE),
        );
    }

    connection
}

fn parse_port_reference(element: &XmlElement, revision: Revision) -> PortReference {
    let port_ref = element
        .attribute("portRef")
        .or_else(|| element.attribute("subPortRef"))
        .unwrap_or_default();

    let mut port = PortReference::external(port_ref);
    port.is_present = element.child_text("ipxact:isPresent");
    port.part_select = element.child("ipxact:partSelect").map(parse_part_select);

    if revision.table().supports_sub_ports {
        port.sub_port_references = element
            .children_named("ipxact:subPortReference")
            .map(|sub_port| parse_port_reference(sub_port, revision))
            .collect();
    }

    port
}

fn parse_part_select(element: &XmlElement) -> PartSelect {
    let mut part_select = PartSelect::default();

    if let Some(range) = element.child("ipxact:range") {
        part_select.left_range = range.child_text("ipxact:left");
        part_select.right_range = range.child_text("ipxact:right");
    }
    if let Some(indices) = element.child("ipxact:indices") {
        part_select.indices = indices
            .children_named("ipxact:index")
            .map(XmlElement::text)
            .collect();
    }

    part_select
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::xml::XmlDocument;

    const AD_HOC: &str = r#"<ipxact:adHocConnection>
        <ipxact:name>adHoc</ipxact:name>
        <ipxact:isPresent>4-3</ipxact:isPresent>
        <ipxact:tiedValue>default</ipxact:tiedValue>
        <ipxact:portReferences>
            <ipxact:internalPortReference componentInstanceRef="cpu0" portRef="data">
                <ipxact:subPortReference subPortRef="low">
                    <ipxact:partSelect>
                        <ipxact:range><ipxact:left>3</ipxact:left><ipxact:right>0</ipxact:right></ipxact:range>
                    </ipxact:partSelect>
                </ipxact:subPortReference>
                <ipxact:partSelect>
                    <ipxact:range><ipxact:left>1</ipxact:left><ipxact:right>11</ipxact:right></ipxact:range>
                    <ipxact:indices>
                        <ipxact:index>8</ipxact:index>
                        <ipxact:index>4+4</ipxact:index>
                    </ipxact:indices>
                </ipxact:partSelect>
            </ipxact:internalPortReference>
            <ipxact:externalPortReference portRef="data_out"/>
        </ipxact:portReferences>
        <ipxact:vendorExtensions>
            <kactus2:offPage/>
            <kactus2:route>
                <kactus2:position x="1" y="1"/>
                <kactus2:position x="4" y="1"/>
            </kactus2:route>
        </ipxact:vendorExtensions>
    </ipxact:adHocConnection>"#;

    fn parse(revision: Revision) -> AdHocConnection {
        let document = XmlDocument::parse(AD_HOC.as_bytes()).unwrap();
        parse_ad_hoc_connection(&document.root, revision)
    }

    #[test]
    fn test_parse_ad_hoc_connection() {
        let connection = parse(Revision::Std22);

        assert_eq!(connection.name(), "adHoc");
        assert_eq!(connection.is_present, "4-3");
        assert_eq!(connection.tied_value, "default");
        assert!(connection.off_page);
        assert_eq!(connection.route, vec![Point::new(1, 1), Point::new(4, 1)]);
        assert!(connection.vendor_extensions.is_empty());

        let internal = &connection.internal_port_references[0];
        assert_eq!(internal.component_ref, "cpu0");
        assert_eq!(internal.port_ref, "data");
        assert_eq!(
            internal.part_select,
            Some(PartSelect::new("1", "11").with_index("8").with_index("4+4"))
        );
        assert_eq!(internal.sub_port_references.len(), 1);
        assert_eq!(internal.sub_port_references[0].port_ref, "low");

        let external = &connection.external_port_references[0];
        assert_eq!(external.port_ref, "data_out");
        assert_eq!(external.component_ref, "");
        assert_eq!(external.part_select, None);
    }

    #[test]
    fn test_sub_ports_ignored_for_2014() {
        let connection = parse(Revision::Std14);
        assert_eq!(connection.internal_port_references[0].component_ref, "cpu0");
        assert!(connection.internal_port_references[0].sub_port_references.is_empty());
    }
}
