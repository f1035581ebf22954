//! The wire element tree and its deterministic text rendering.
//!
//! The transport layer owns XML text parsing and hands this layer a fully
//! built tree; serialization hands a tree back. The writer exists for
//! logs, fixtures, and the command-line tools.

mod element;
mod escape;
mod writer;

pub use element::Element;
pub use writer::{to_xml, to_xml_pretty};
