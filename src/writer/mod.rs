//! Design writer: [`Design`] → XML bytes.
//!
//! Output is deterministic: the same design always produces the same bytes,
//! so a write → read → write cycle is byte-stable.
//!
//! ```text
//! <?xml version="1.0"?>
//! <!--top comments-->
//! <ipxact:design xmlns:xsi=.. xmlns:ipxact=.. xmlns:kactus2=.. xsi:schemaLocation=..>
//!   vendor / library / name / version
//!   displayName / shortDescription (2022) / description
//!   componentInstances ─▶ instance.rs
//!   interconnections ───▶ interconnection.rs
//!   adHocConnections ───▶ ad_hoc.rs
//!   parameters / assertions
//!   vendorExtensions ───▶ extensions.rs
//! </ipxact:design>
//! ```
//!
//! Wrappers whose collection is empty are omitted.

mod ad_hoc;
mod extensions;
mod instance;
mod interconnection;

use std::io::{Cursor, Write};

use indexmap::IndexMap;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use tracing::{debug, trace};

use crate::error::{DesignError, Result};
use crate::extension::{VendorExtensions, tag};
use crate::model::{Assertion, Design, NameGroup, Parameter, Point};
use crate::revision::{KACTUS2_NAMESPACE, Revision, XSI_NAMESPACE};
use crate::vlnv::Vlnv;

/// Formatting options for [`DesignWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Byte repeated for each indentation level.
    pub indent_char: u8,
    /// Number of `indent_char` per level.
    pub indent_size: usize,
    /// Emit `<?xml version="1.0"?>` before the root.
    pub write_declaration: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_char: b'\t',
            indent_size: 1,
            write_declaration: true,
        }
    }
}

impl WriterOptions {
    pub fn with_indent(mut self, indent_char: u8, indent_size: usize) -> Self {
        self.indent_char = indent_char;
        self.indent_size = indent_size;
        self
    }

    pub fn without_declaration(mut self) -> Self {
        self.write_declaration = false;
        self
    }
}

/// Serializes [`Design`] values as IP-XACT XML of the design's revision.
#[derive(Debug, Clone, Default)]
pub struct DesignWriter {
    options: WriterOptions,
}

impl DesignWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Write the full document: declaration, top comments, processing
    /// instructions and the `ipxact:design` element.
    pub fn write(&self, design: &Design) -> Result<Vec<u8>> {
        let revision = design.revision();
        debug!(?revision, vlnv = %design.vlnv(), "writing design");

        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(
            &mut buffer,
            self.options.indent_char,
            self.options.indent_size,
        );

        if self.options.write_declaration {
            emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
        }
        for comment in design.top_comments() {
            emit(&mut writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?;
        }
        for (target, data) in design.processing_instructions() {
            let content = if data.is_empty() {
                target.clone()
            } else {
                format!("{target} {data}")
            };
            emit(&mut writer, Event::PI(BytesPI::new(content)))?;
        }

        write_design(&mut writer, design, revision)?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        trace!(bytes = output.len(), "design written");
        Ok(output)
    }
}

fn write_design<W: Write>(
    writer: &mut Writer<W>,
    design: &Design,
    revision: Revision,
) -> Result<()> {
    let table = revision.table();

    let mut root = BytesStart::new("ipxact:design");
    root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    root.push_attribute(("xmlns:ipxact", table.namespace_uri));
    root.push_attribute(("xmlns:kactus2", KACTUS2_NAMESPACE));
    root.push_attribute(("xsi:schemaLocation", table.schema_location));
    start(writer, root)?;

    let vlnv = design.vlnv();
    text_element(writer, "ipxact:vendor", &vlnv.vendor)?;
    text_element(writer, "ipxact:library", &vlnv.library)?;
    text_element(writer, "ipxact:name", &vlnv.name)?;
    text_element(writer, "ipxact:version", &vlnv.version)?;

    if table.top_level_name_group {
        optional_text_element(writer, "ipxact:displayName", design.display_name())?;
        optional_text_element(writer, "ipxact:shortDescription", design.short_description())?;
    }
    optional_text_element(writer, "ipxact:description", design.description())?;

    instance::write_component_instances(writer, design.component_instances(), revision)?;
    interconnection::write_interconnections(
        writer,
        design.interconnections(),
        design.monitor_interconnections(),
        revision,
    )?;
    ad_hoc::write_ad_hoc_connections(writer, design.ad_hoc_connections(), revision)?;
    write_parameters(writer, design.parameters())?;
    write_assertions(writer, design.assertions())?;
    write_vendor_extensions(writer, design.vendor_extensions())?;

    end(writer, "ipxact:design")
}

fn write_parameters<W: Write>(writer: &mut Writer<W>, parameters: &[Parameter]) -> Result<()> {
    if parameters.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:parameters"))?;
    for parameter in parameters {
        let mut element = BytesStart::new("ipxact:parameter");
        if !parameter.parameter_id.is_empty() {
            element.push_attribute(("parameterId", parameter.parameter_id.as_str()));
        }
        start(writer, element)?;
        text_element(writer, "ipxact:name", &parameter.name)?;
        text_element(writer, "ipxact:value", &parameter.value)?;
        end(writer, "ipxact:parameter")?;
    }
    end(writer, "ipxact:parameters")
}

fn write_assertions<W: Write>(writer: &mut Writer<W>, assertions: &[Assertion]) -> Result<()> {
    if assertions.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:assertions"))?;
    for assertion in assertions {
        start(writer, BytesStart::new("ipxact:assertion"))?;
        text_element(writer, "ipxact:name", &assertion.name)?;
        optional_text_element(writer, "ipxact:displayName", &assertion.display_name)?;
        optional_text_element(writer, "ipxact:description", &assertion.description)?;
        text_element(writer, "ipxact:assert", &assertion.assert)?;
        end(writer, "ipxact:assertion")?;
    }
    end(writer, "ipxact:assertions")
}

// ============================================================================
// SHARED WRITING HELPERS
// ============================================================================

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DesignError::xml(format!("Write error: {e}")))
}

fn start<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<()> {
    emit(writer, Event::Start(element))
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn empty<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<()> {
    emit(writer, Event::Empty(element))
}

/// `<name attrs>text</name>`, or an empty element when `text` is empty.
fn text_element_with<W: Write>(
    writer: &mut Writer<W>,
    element: BytesStart<'_>,
    text: &str,
) -> Result<()> {
    if text.is_empty() {
        return empty(writer, element);
    }

    let closing = element.to_end().into_owned();
    start(writer, element)?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(closing))
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    text_element_with(writer, BytesStart::new(name), text)
}

/// Like [`text_element`] but skipped entirely when `text` is empty.
fn optional_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    text_element(writer, name, text)
}

/// Name element, then displayName, shortDescription and description when set.
fn write_name_group<W: Write>(
    writer: &mut Writer<W>,
    prefix: &str,
    name_tag: &str,
    group: &NameGroup,
    with_short_description: bool,
) -> Result<()> {
    text_element(writer, &format!("{prefix}:{name_tag}"), &group.name)?;
    optional_text_element(writer, &format!("{prefix}:displayName"), &group.display_name)?;
    if with_short_description {
        optional_text_element(
            writer,
            &format!("{prefix}:shortDescription"),
            &group.short_description,
        )?;
    }
    optional_text_element(writer, &format!("{prefix}:description"), &group.description)
}

fn push_vlnv_attributes(element: &mut BytesStart<'_>, vlnv: &Vlnv) {
    element.push_attribute(("vendor", vlnv.vendor.as_str()));
    element.push_attribute(("library", vlnv.library.as_str()));
    element.push_attribute(("name", vlnv.name.as_str()));
    element.push_attribute(("version", vlnv.version.as_str()));
}

fn write_point<W: Write>(writer: &mut Writer<W>, name: &str, point: Point) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("x", point.x.to_string().as_str()));
    element.push_attribute(("y", point.y.to_string().as_str()));
    empty(writer, element)
}

/// Route element holding one `kactus2:position` per point.
fn write_route<W: Write>(
    writer: &mut Writer<W>,
    element: BytesStart<'_>,
    route: &[Point],
) -> Result<()> {
    if route.is_empty() {
        return empty(writer, element);
    }

    let closing = element.to_end().into_owned();
    start(writer, element)?;
    for point in route {
        write_point(writer, tag::POSITION, *point)?;
    }
    emit(writer, Event::End(closing))
}

/// Group of positioned items keyed by `ref_attribute`, skipped when empty.
fn write_position_group<W: Write>(
    writer: &mut Writer<W>,
    group_tag: &str,
    item_tag: &str,
    ref_attribute: &str,
    positions: &IndexMap<String, Point>,
) -> Result<()> {
    if positions.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new(group_tag))?;
    for (reference, position) in positions {
        let mut element = BytesStart::new(item_tag);
        element.push_attribute((ref_attribute, reference.as_str()));
        element.push_attribute(("x", position.x.to_string().as_str()));
        element.push_attribute(("y", position.y.to_string().as_str()));
        empty(writer, element)?;
    }
    end(writer, group_tag)
}

fn write_property_values<W: Write>(
    writer: &mut Writer<W>,
    values: &IndexMap<String, String>,
) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new(tag::PROPERTY_VALUES))?;
    for (name, value) in values {
        let mut element = BytesStart::new(tag::PROPERTY_VALUE);
        element.push_attribute(("name", name.as_str()));
        element.push_attribute(("value", value.as_str()));
        empty(writer, element)?;
    }
    end(writer, tag::PROPERTY_VALUES)
}

/// `ipxact:vendorExtensions` holding every extension of the bag, skipped when empty.
fn write_vendor_extensions<W: Write>(
    writer: &mut Writer<W>,
    extensions: &VendorExtensions,
) -> Result<()> {
    if extensions.is_empty() {
        return Ok(());
    }

    start(writer, BytesStart::new("ipxact:vendorExtensions"))?;
    for extension in extensions {
        extensions::write_extension(writer, extension)?;
    }
    end(writer, "ipxact:vendorExtensions")
}
