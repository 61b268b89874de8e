//! Build version display.
//!
//! `version.txt` is written at build time with the commit the page was built
//! from. Every `a#commit` anchor shows it and, when the page declares its
//! source repository through `<link id="source" rel="help">`, links to that
//! commit.

#[cfg(test)]
#[path = "version_test.rs"]
mod version_test;

use crate::error::Error;
use crate::host::{Document, Fetch};

/// Selectors the version display writes to.
#[derive(Clone, Debug)]
pub struct Targets {
    pub commit: String,
    pub source_link: String,
}

/// URL of `version` within the repository at `source`. Surrounding
/// whitespace, such as the trailing newline of `version.txt`, stays out of the
/// URL.
#[must_use]
pub fn commit_href(source: &str, version: &str) -> String {
    format!("{source}/commit/{}", version.trim())
}

/// Fetch the version and write it into the page as is. Resolves to the
/// version text shown.
///
/// # Errors
///
/// Propagates fetch and DOM errors; the page is left untouched when the
/// fetch fails.
pub async fn show<D: Document, F: Fetch>(document: D, fetch: F, url: String, targets: Targets) -> Result<String, Error> {
    let version = fetch.get_text(&url).await?;

    let source = document
        .query_selector(&targets.source_link)?
        .and_then(|link| document.href(&link));
    let href = source.map(|source| commit_href(&source, &version));

    for anchor in document.query_selector_all(&targets.commit)? {
        document.set_text_content(&anchor, &version);
        if let Some(href) = &href {
            document.set_attribute(&anchor, "href", href)?;
        }
    }

    Ok(version)
}
