//! Namespace-aware XML document tree built with quick-xml

use crate::error::{SamlError, SamlResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// A parsed element with its resolved namespace, attributes, text and children.
///
/// Attributes are keyed by local name. Only unprefixed attributes are kept;
/// namespace declarations and namespace-qualified attributes are dropped.
/// Text is kept verbatim, except whitespace-only text on an element that has
/// children, which is formatting between child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub namespace: Option<String>,
    pub local_name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    /// Value of the attribute with the given local name
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether this element has the given namespace URI and local name
    #[must_use]
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }

    /// First direct child with the given namespace URI and local name
    #[must_use]
    pub fn child(&self, namespace: &str, local_name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.is(namespace, local_name))
    }
}

/// Parse an XML document and return its root element.
pub fn parse_document(xml: &str) -> SamlResult<XmlElement> {
    let mut reader = NsReader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| SamlError::InvalidLogoutRequest(format!("XML parse error: {e}")))?;
        let namespace = owned_namespace(ns);

        match event {
            Event::Start(e) => {
                stack.push(element_from(namespace, &e)?);
            }
            Event::Empty(e) => {
                let element = element_from(namespace, &e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    SamlError::InvalidLogoutRequest("Unexpected closing tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| SamlError::InvalidLogoutRequest(format!("Invalid text: {e}")))?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(c) => {
                let raw = c.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&raw))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SamlError::InvalidLogoutRequest(
            "Unexpected end of document".to_string(),
        ));
    }

    root.ok_or_else(|| SamlError::InvalidLogoutRequest("Empty document".to_string()))
}

fn owned_namespace(ns: ResolveResult<'_>) -> Option<String> {
    match ns {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        _ => None,
    }
}

fn element_from(namespace: Option<String>, start: &BytesStart<'_>) -> SamlResult<XmlElement> {
    let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr
            .map_err(|e| SamlError::InvalidLogoutRequest(format!("Invalid attribute: {e}")))?;
        if attr.key.as_namespace_binding().is_some() || attr.key.prefix().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| SamlError::InvalidLogoutRequest(format!("Invalid attribute value: {e}")))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        namespace,
        local_name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    mut element: XmlElement,
) -> SamlResult<()> {
    if !element.children.is_empty() && is_whitespace(&element.text) {
        element.text.clear();
    }
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(SamlError::InvalidLogoutRequest(
                "Multiple root elements".to_string(),
            ))
        }
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> SamlResult<()> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if is_whitespace(text) => Ok(()),
        None => Err(SamlError::InvalidLogoutRequest(
            "Text outside of root element".to_string(),
        )),
    }
}

fn is_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}
