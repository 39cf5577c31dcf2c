//! Serialize node descriptors under a SAML root element with quick-xml

use super::node::{SamlNamespace, XmlNode};
use crate::error::{SamlError, SamlResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Write a complete document whose root is `namespace:root_name`.
///
/// Attribute nodes land on the root start tag; element nodes become children
/// in the order they are yielded. `nodes` is consumed exactly once.
pub fn write_document<I>(namespace: SamlNamespace, root_name: &str, nodes: I) -> SamlResult<String>
where
    I: IntoIterator<Item = XmlNode>,
{
    let root_qname = namespace.qualified(root_name);
    let mut root = BytesStart::new(root_qname.as_str());
    root.push_attribute(("xmlns:samlp", SamlNamespace::Protocol.uri()));
    root.push_attribute(("xmlns:saml", SamlNamespace::Assertion.uri()));

    let mut children = Vec::new();
    for node in nodes {
        match node {
            XmlNode::Attribute { name, value } => root.push_attribute((name, value.as_str())),
            element @ XmlNode::Element { .. } => children.push(element),
        }
    }

    let mut writer = Writer::new(Vec::new());
    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_event(&mut writer, Event::Start(root))?;
    for child in children {
        write_element(&mut writer, child)?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new(root_qname.as_str())))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| SamlError::InternalError(format!("Serialized XML is not valid UTF-8: {e}")))
}

fn write_element(writer: &mut Writer<Vec<u8>>, node: XmlNode) -> SamlResult<()> {
    let XmlNode::Element {
        namespace,
        local_name,
        attributes,
        text,
    } = node
    else {
        return Ok(());
    };

    let qname = namespace.qualified(local_name);
    let mut start = BytesStart::new(qname.as_str());
    for (name, value) in &attributes {
        start.push_attribute((*name, value.as_str()));
    }

    write_event(writer, Event::Start(start))?;
    write_event(writer, Event::Text(BytesText::new(&text)))?;
    write_event(writer, Event::End(BytesEnd::new(qname.as_str())))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> SamlResult<()> {
    writer
        .write_event(event)
        .map_err(|e| SamlError::InternalError(format!("XML write failed: {e}")))
}
