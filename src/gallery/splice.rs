//! Text-level document surgery.
//!
//! The placeholder region is located by its marker classes and only its
//! inner content is replaced; every other byte of the document survives.

use regex::Regex;

use super::render::{LIGHTBOX_BEGIN, LIGHTBOX_END};

/// Replaces the content of a document's placeholder region.
pub trait Splicer {
    /// Return `doc` with the region content replaced by `fragment`, or
    /// `None` if the document has no placeholder region.
    fn splice_region(&self, doc: &str, fragment: &str) -> Option<String>;
}

/// Finds the region as
/// `<section class="SECTION" ...> <div class="CONTAINER">` ... `</div> </section>`.
#[derive(Debug, Clone)]
pub struct MarkerSplicer {
    pattern: Regex,
}

impl MarkerSplicer {
    pub fn new(section: &str, container: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r#"(?s)(<section class="{}"[^>]*>\s*<div class="{}">)(.*?)(</div>\s*</section>)"#,
            regex::escape(section),
            regex::escape(container),
        ))?;
        Ok(Self { pattern })
    }
}

impl Splicer for MarkerSplicer {
    fn splice_region(&self, doc: &str, fragment: &str) -> Option<String> {
        let caps = self.pattern.captures(doc)?;
        let inner = caps.get(2)?;

        let mut out = String::with_capacity(doc.len() - inner.len() + fragment.len());
        out.push_str(&doc[..inner.start()]);
        out.push_str(fragment);
        out.push_str(&doc[inner.end()..]);
        Some(out)
    }
}

/// Insert the lightbox `block` right before the first `</body>`.
///
/// A block injected by an earlier run is removed first, so repeated runs
/// produce the same document. Returns `None` when there is no `</body>`.
pub fn inject_lightbox(doc: &str, block: &str) -> Option<String> {
    let doc = strip_lightbox(doc);
    let at = doc.find("</body>")?;

    let mut out = String::with_capacity(doc.len() + block.len());
    out.push_str(&doc[..at]);
    out.push_str(block);
    out.push_str(&doc[at..]);
    Some(out)
}

/// Remove every marked lightbox block, including one trailing newline.
fn strip_lightbox(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut rest = doc;

    while let Some(begin) = rest.find(LIGHTBOX_BEGIN) {
        let Some(end) = rest[begin..].find(LIGHTBOX_END) else {
            break;
        };
        let mut end = begin + end + LIGHTBOX_END.len();
        if rest[end..].starts_with('\n') {
            end += 1;
        }
        out.push_str(&rest[..begin]);
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}
