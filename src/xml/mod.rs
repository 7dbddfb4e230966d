//! Minimal XML tree used between raw bytes and the design model.
//!
//! ```text
//! bytes ──parse──▶ XmlDocument ──DesignReader──▶ Design
//! ```
//!
//! The tree keeps element order, attribute order, text and comments so that
//! unrecognized vendor extensions can be written back unchanged.

mod dom;

pub use dom::{XmlDocument, XmlElement, XmlNode, write_element};
