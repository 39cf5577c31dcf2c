//! XML node descriptors produced by message content builders

use crate::saml::{ASSERTION_NAMESPACE, PROTOCOL_NAMESPACE};

/// Namespace a SAML element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamlNamespace {
    Protocol,
    Assertion,
}

impl SamlNamespace {
    #[must_use]
    pub fn uri(self) -> &'static str {
        match self {
            Self::Protocol => PROTOCOL_NAMESPACE,
            Self::Assertion => ASSERTION_NAMESPACE,
        }
    }

    /// Prefix declared for this namespace on the root element
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Protocol => "samlp",
            Self::Assertion => "saml",
        }
    }

    #[must_use]
    pub fn qualified(self, local_name: &str) -> String {
        format!("{}:{}", self.prefix(), local_name)
    }
}

/// A single unit of message content: an attribute on the root element or a
/// child element with text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Attribute {
        name: &'static str,
        value: String,
    },
    Element {
        namespace: SamlNamespace,
        local_name: &'static str,
        attributes: Vec<(&'static str, String)>,
        text: String,
    },
}

impl XmlNode {
    #[must_use]
    pub fn attribute(name: &'static str, value: impl Into<String>) -> Self {
        Self::Attribute {
            name,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn element(
        namespace: SamlNamespace,
        local_name: &'static str,
        text: impl Into<String>,
    ) -> Self {
        Self::Element {
            namespace,
            local_name,
            attributes: Vec::new(),
            text: text.into(),
        }
    }

    /// Add an attribute to an element node. Attribute nodes are returned unchanged.
    #[must_use]
    pub fn with_attribute(mut self, attr_name: &'static str, attr_value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.push((attr_name, attr_value.into()));
        }
        self
    }

    /// Local name of the attribute or element
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attribute { name, .. } => name,
            Self::Element { local_name, .. } => local_name,
        }
    }
}
