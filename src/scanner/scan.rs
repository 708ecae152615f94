//! External reference collection.
//!
//! Walks a parsed document for tags whose attributes may hold an
//! external URL, then scans inline `<style>` blocks with regular
//! expressions for `url(...)` and `@import` references. The five rules
//! run in a fixed order and append to one list; that insertion order is
//! the processing order for the whole run.

use anyhow::Result;
use kuchiki::NodeRef;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::types::{ExternalReference, ResourceKind};

lazy_static! {
    // These patterns are hardcoded and syntactically valid; a parse
    // failure here is a compile-time bug in the pattern strings.
    static ref CSS_URL_RE: Regex = Regex::new(r#"url\(["']?(https?://[^"')]+)["']?\)"#)
        .expect("BUG: hardcoded url(...) pattern is invalid");

    static ref CSS_IMPORT_RE: Regex = Regex::new(r#"@import\s+["']?(https?://[^"'\s;]+)"#)
        .expect("BUG: hardcoded @import pattern is invalid");
}

/// Attributes probed on `link`/`object`/`embed` tags, in order.
const OTHER_ATTRS: [&str; 3] = ["href", "data", "src"];

/// Check whether a URL points at an external resource: its parsed form
/// must carry both a scheme and a host. Relative and path-only
/// references fail to parse as absolute URLs and are ignored.
#[must_use]
pub fn is_external_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Collect every reference in `document` believed to point at an
/// external resource.
///
/// Duplicate handling is deliberately uneven and matches the observed
/// behavior this tool reproduces: the stylesheet/script/img rules never
/// de-duplicate, while the catch-all tag rule and the inline style rule
/// skip a URL only when the exact same string was already collected.
/// Query-string variants of one path count as distinct URLs.
pub fn collect_external_references(document: &NodeRef) -> Result<Vec<ExternalReference>> {
    let mut references: Vec<ExternalReference> = Vec::new();

    // Rule 1: stylesheet links.
    for element in select(document, "link[rel=\"stylesheet\"]")? {
        if let Some(href) = attribute(&element, "href") {
            if is_external_url(&href) {
                references.push(ExternalReference::attribute(
                    ResourceKind::Css,
                    element.as_node().clone(),
                    "href",
                    href,
                ));
            }
        }
    }

    // Rule 2: scripts.
    for element in select(document, "script[src]")? {
        if let Some(src) = attribute(&element, "src") {
            if is_external_url(&src) {
                references.push(ExternalReference::attribute(
                    ResourceKind::Js,
                    element.as_node().clone(),
                    "src",
                    src,
                ));
            }
        }
    }

    // Rule 3: images.
    for element in select(document, "img[src]")? {
        if let Some(src) = attribute(&element, "src") {
            if is_external_url(&src) {
                references.push(ExternalReference::attribute(
                    ResourceKind::Img,
                    element.as_node().clone(),
                    "src",
                    src,
                ));
            }
        }
    }

    // Rule 4: remaining link/object/embed references, href/data/src in
    // that order, skipping URLs already collected by any earlier rule.
    for element in select(document, "link, object, embed")? {
        for attr in OTHER_ATTRS {
            if let Some(url) = attribute(&element, attr) {
                if is_external_url(&url) && !references.iter().any(|r| r.url == url) {
                    references.push(ExternalReference::attribute(
                        ResourceKind::Other,
                        element.as_node().clone(),
                        attr,
                        url,
                    ));
                }
            }
        }
    }

    // Rule 5: inline style blocks, url(...) matches first, then @import.
    for element in select(document, "style")? {
        let css = element.as_node().text_contents();
        if css.is_empty() {
            continue;
        }

        let matches = CSS_URL_RE
            .captures_iter(&css)
            .chain(CSS_IMPORT_RE.captures_iter(&css))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()));

        for url in matches {
            if !references.iter().any(|r| r.url == url) {
                references.push(ExternalReference::style_text(
                    element.as_node().clone(),
                    url,
                ));
            }
        }
    }

    Ok(references)
}

fn select(
    document: &NodeRef,
    selector: &str,
) -> Result<Vec<kuchiki::NodeDataRef<kuchiki::ElementData>>> {
    document
        .select(selector)
        .map(|matches| matches.collect())
        .map_err(|()| anyhow::anyhow!("Invalid selector: {selector}"))
}

fn attribute(element: &kuchiki::NodeDataRef<kuchiki::ElementData>, name: &str) -> Option<String> {
    element.attributes.borrow().get(name).map(str::to_string)
}
