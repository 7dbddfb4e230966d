//! # ipxact-design
//!
//! Object model for IP-XACT design documents with Kactus2 vendor extensions,
//! plus a revision-aware XML reader and writer (IEEE 1685-2014 and 1685-2022).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! format    → DocumentFormat trait, IpxactXml (bytes ⇄ Design, files)
//!   ↓
//! reader    → DesignReader (XmlDocument → Design)
//! writer    → DesignWriter, WriterOptions (Design → XML bytes)
//!   ↓
//! extension → Vendor extensions: typed Kactus2 data and opaque XML
//! model     → Design, ComponentInstance, Interconnection, AdHocConnection, ...
//!   ↓
//! vlnv      → Vlnv, ConfigurableVlnvReference
//! revision  → Revision, RevisionTable
//! xml       → XmlDocument / XmlElement over quick-xml
//! error     → DesignError
//! ```
//!
//! ## Example
//!
//! ```
//! use ipxact::{Design, DesignReader, DesignWriter, Revision, Vlnv, VlnvType};
//! use ipxact::xml::XmlDocument;
//!
//! let vlnv = Vlnv::new(VlnvType::Design, "vendor", "lib", "top.design", "1.0");
//! let design = Design::new(vlnv, Revision::Std22);
//!
//! let bytes = DesignWriter::new().write(&design).unwrap();
//! let document = XmlDocument::parse(&bytes).unwrap();
//! let copy = DesignReader::new().create_design_from(&document);
//! assert_eq!(copy.vlnv(), design.vlnv());
//! assert_eq!(copy.revision(), Revision::Std22);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Error type shared by parsing, reading and writing.
pub mod error;

/// IP-XACT standard revisions and their naming tables.
pub mod revision;

/// XML tree between bytes and the model.
pub mod xml;

/// Vendor/library/name/version identifiers.
pub mod vlnv;

/// Design document model.
pub mod model;

/// Vendor extensions.
pub mod extension;

/// XML → model.
pub mod reader;

/// Model → XML.
pub mod writer;

/// Document formats and file I/O.
pub mod format;

pub use error::{DesignError, Result};
pub use format::{DocumentFormat, IpxactXml};
pub use model::{
    ActiveInterface, AdHocConnection, ComponentInstance, Design, HierInterface, Interconnection,
    MonitorInterconnection, MonitorInterface, PartSelect, Point, PortReference,
};
pub use reader::DesignReader;
pub use revision::Revision;
pub use vlnv::{ConfigurableVlnvReference, Vlnv, VlnvType};
pub use writer::{DesignWriter, WriterOptions};
