//! Vendor extensions.
//!
//! A vendor-extension bag is an ordered, heterogeneous list. Kactus2 data the
//! crate understands is reconstructed as typed variants; anything else is kept
//! as an opaque [`XmlElement`] and written back unchanged.
//!
//! ```text
//! <ipxact:vendorExtensions>
//!   <kactus2:version>3.0.0</kactus2:version>          → Value
//!   <kactus2:columnLayout>                            → Group
//!     <kactus2:column name="IO" .../>                 →   Column
//!   </kactus2:columnLayout>
//!   <acme:custom a="1">text</acme:custom>             → Generic
//! </ipxact:vendorExtensions>
//! ```

mod design;
mod kactus2;

use std::ops::{Deref, DerefMut};

pub use design::{
    ColumnContentType, ColumnDesc, ConnectionRoute, DEFAULT_COLUMN_WIDTH, Implementation,
    InterfaceGraphicsData, Note, SwInstance, SwInterconnection, SwInterfaceKind, SwInterfaceRef,
};
pub use kactus2::{Kactus2Group, Kactus2Placeholder, Kactus2Value};

use crate::xml::XmlElement;

/// Element names of the Kactus2 extensions.
pub mod tag {
    pub const EXTENSIONS: &str = "kactus2:extensions";
    pub const VERSION: &str = "kactus2:version";
    pub const KTS_ATTRIBUTES: &str = "kactus2:kts_attributes";
    pub const KTS_IMPLEMENTATION: &str = "kactus2:kts_implementation";
    pub const POSITION: &str = "kactus2:position";
    pub const DIRECTION: &str = "kactus2:direction";
    pub const UUID: &str = "kactus2:uuid";
    pub const IMPORTED: &str = "kactus2:imported";
    pub const DRAFT: &str = "kactus2:draft";
    pub const OFF_PAGE: &str = "kactus2:offPage";
    pub const PORT_POSITIONS: &str = "kactus2:portPositions";
    pub const PORT_POSITION: &str = "kactus2:portPosition";
    pub const AD_HOC_VISIBILITIES: &str = "kactus2:adHocVisibilities";
    pub const AD_HOC_VISIBLE: &str = "kactus2:adHocVisible";
    pub const API_INTERFACE_POSITIONS: &str = "kactus2:apiInterfacePositions";
    pub const API_INTERFACE_POSITION: &str = "kactus2:apiInterfacePosition";
    pub const COM_INTERFACE_POSITIONS: &str = "kactus2:comInterfacePositions";
    pub const COM_INTERFACE_POSITION: &str = "kactus2:comInterfacePosition";
    pub const PROPERTY_VALUES: &str = "kactus2:propertyValues";
    pub const PROPERTY_VALUE: &str = "kactus2:propertyValue";
    pub const COLUMN_LAYOUT: &str = "kactus2:columnLayout";
    pub const COLUMN: &str = "kactus2:column";
    pub const ROUTES: &str = "kactus2:routes";
    pub const ROUTE: &str = "kactus2:route";
    pub const SW_INSTANCES: &str = "kactus2:swInstances";
    pub const SW_INSTANCE: &str = "kactus2:swInstance";
    pub const API_CONNECTIONS: &str = "kactus2:apiConnections";
    pub const API_CONNECTION: &str = "kactus2:apiConnection";
    pub const COM_CONNECTIONS: &str = "kactus2:comConnections";
    pub const COM_CONNECTION: &str = "kactus2:comConnection";
    pub const INTERFACE_GRAPHICS: &str = "kactus2:interfaceGraphics";
    pub const NOTE: &str = "kactus2:note";
}

/// One entry of a vendor-extension bag.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorExtension {
    /// Unrecognized extension, kept verbatim.
    Generic(XmlElement),
    /// Empty element carrying only attributes.
    Placeholder(Kactus2Placeholder),
    /// Element with a single text value.
    Value(Kactus2Value),
    /// Named container of further extensions.
    Group(Kactus2Group),
    Column(ColumnDesc),
    Route(ConnectionRoute),
    SwInstance(SwInstance),
    SwConnection(SwInterconnection),
    InterfaceGraphics(InterfaceGraphicsData),
    Note(Note),
}

impl VendorExtension {
    /// Element name this extension is serialized as.
    pub fn type_name(&self) -> &str {
        match self {
            VendorExtension::Generic(element) => &element.name,
            VendorExtension::Placeholder(placeholder) => &placeholder.type_name,
            VendorExtension::Value(value) => &value.type_name,
            VendorExtension::Group(group) => &group.type_name,
            VendorExtension::Column(_) => tag::COLUMN,
            VendorExtension::Route(_) => tag::ROUTE,
            VendorExtension::SwInstance(_) => tag::SW_INSTANCE,
            VendorExtension::SwConnection(connection) => connection.kind.connection_tag(),
            VendorExtension::InterfaceGraphics(_) => tag::INTERFACE_GRAPHICS,
            VendorExtension::Note(_) => tag::NOTE,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Kactus2Placeholder> {
        match self {
            VendorExtension::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Kactus2Value> {
        match self {
            VendorExtension::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Kactus2Group> {
        match self {
            VendorExtension::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnDesc> {
        match self {
            VendorExtension::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn as_route(&self) -> Option<&ConnectionRoute> {
        match self {
            VendorExtension::Route(route) => Some(route),
            _ => None,
        }
    }

    pub fn as_sw_instance(&self) -> Option<&SwInstance> {
        match self {
            VendorExtension::SwInstance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_sw_connection(&self) -> Option<&SwInterconnection> {
        match self {
            VendorExtension::SwConnection(connection) => Some(connection),
            _ => None,
        }
    }

    pub fn as_interface_graphics(&self) -> Option<&InterfaceGraphicsData> {
        match self {
            VendorExtension::InterfaceGraphics(graphics) => Some(graphics),
            _ => None,
        }
    }

    pub fn as_note(&self) -> Option<&Note> {
        match self {
            VendorExtension::Note(note) => Some(note),
            _ => None,
        }
    }
}

/// Ordered vendor-extension bag.
///
/// Dereferences to the underlying `Vec` so callers can push, remove and
/// iterate in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorExtensions(Vec<VendorExtension>);

impl VendorExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// First extension with the given type name.
    pub fn find(&self, type_name: &str) -> Option<&VendorExtension> {
        self.0.iter().find(|extension| extension.type_name() == type_name)
    }

    pub fn find_mut(&mut self, type_name: &str) -> Option<&mut VendorExtension> {
        self.0
            .iter_mut()
            .find(|extension| extension.type_name() == type_name)
    }

    /// First group with the given type name.
    pub fn find_group(&self, type_name: &str) -> Option<&Kactus2Group> {
        self.0.iter().find_map(|extension| match extension {
            VendorExtension::Group(group) if group.type_name == type_name => Some(group),
            _ => None,
        })
    }

    pub fn find_group_mut(&mut self, type_name: &str) -> Option<&mut Kactus2Group> {
        self.0.iter_mut().find_map(|extension| match extension {
            VendorExtension::Group(group) if group.type_name == type_name => Some(group),
            _ => None,
        })
    }

    /// Append `item` to the named group, creating the group at the end if missing.
    pub fn add_to_group(&mut self, group_type: &str, item: VendorExtension) {
        match self.find_group_mut(group_type) {
            Some(group) => group.items.push(item),
            None => {
                let mut group = Kactus2Group::new(group_type);
                group.items.push(item);
                self.0.push(VendorExtension::Group(group));
            }
        }
    }

    /// Items of type `item_type` inside every group named `group_type`.
    pub fn grouped<'a>(
        &'a self,
        group_type: &'a str,
        item_type: &'a str,
    ) -> impl Iterator<Item = &'a VendorExtension> + 'a {
        self.0
            .iter()
            .filter_map(move |extension| match extension {
                VendorExtension::Group(group) if group.type_name == group_type => Some(group),
                _ => None,
            })
            .flat_map(move |group| group.items_of_type(item_type))
    }

    /// Remove the first extension with the given type name.
    pub fn remove_type(&mut self, type_name: &str) -> Option<VendorExtension> {
        let index = self
            .0
            .iter()
            .position(|extension| extension.type_name() == type_name)?;
        Some(self.0.remove(index))
    }

    /// Replace the first group named `group_type` with one holding `items`.
    ///
    /// Nothing is re-added when `items` is empty.
    pub fn replace_group(&mut self, group_type: &str, items: Vec<VendorExtension>) {
        self.remove_type(group_type);
        if !items.is_empty() {
            let mut group = Kactus2Group::new(group_type);
            group.items.extend(items);
            self.0.push(VendorExtension::Group(group));
        }
    }

    pub fn into_inner(self) -> Vec<VendorExtension> {
        self.0
    }
}

impl From<Vec<VendorExtension>> for VendorExtensions {
    fn from(extensions: Vec<VendorExtension>) -> Self {
        Self(extensions)
    }
}

impl FromIterator<VendorExtension> for VendorExtensions {
    fn from_iter<I: IntoIterator<Item = VendorExtension>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for VendorExtensions {
    type Target = Vec<VendorExtension>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VendorExtensions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a VendorExtensions {
    type Item = &'a VendorExtension;
    type IntoIter = std::slice::Iter<'a, VendorExtension>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
