//! Type definitions for external reference scanning

use kuchiki::NodeRef;

/// Category a scanned reference belongs to.
///
/// The category records which scan rule produced the reference; it
/// decides how the reference is rewritten (attribute overwrite vs.
/// inline style text substitution) and labels log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Css,
    Js,
    Img,
    Other,
    CssInline,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Css => write!(f, "css"),
            ResourceKind::Js => write!(f, "js"),
            ResourceKind::Img => write!(f, "img"),
            ResourceKind::Other => write!(f, "other"),
            ResourceKind::CssInline => write!(f, "css-inline"),
        }
    }
}

/// How a reference is anchored in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceTarget {
    /// The URL lives in the named attribute of the element.
    Attribute(String),
    /// The URL occurs inside the text of a `<style>` block.
    StyleText,
}

/// One external reference discovered in the document.
///
/// `node` is a cheap handle into the parsed tree (kuchiki nodes are
/// reference-counted), so holding the full reference list while the
/// tree is later mutated is safe. Each reference is consumed exactly
/// once by the rewrite phase.
#[derive(Debug, Clone)]
pub struct ExternalReference {
    pub kind: ResourceKind,
    pub node: NodeRef,
    pub target: ReferenceTarget,
    pub url: String,
}

impl ExternalReference {
    pub(crate) fn attribute(kind: ResourceKind, node: NodeRef, attr: &str, url: String) -> Self {
        Self {
            kind,
            node,
            target: ReferenceTarget::Attribute(attr.to_string()),
            url,
        }
    }

    pub(crate) fn style_text(node: NodeRef, url: String) -> Self {
        Self {
            kind: ResourceKind::CssInline,
            node,
            target: ReferenceTarget::StyleText,
            url,
        }
    }
}
