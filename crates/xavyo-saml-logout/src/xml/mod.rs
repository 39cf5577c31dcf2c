//! XML building blocks shared by message builders and readers

pub mod document;
pub mod node;
pub mod writer;

pub use document::{parse_document, XmlElement};
pub use node::{SamlNamespace, XmlNode};
pub use writer::write_document;
