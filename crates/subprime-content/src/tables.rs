use std::path::Path;

use subprime_types::{
    ContentDocument, Labels, Locale, Meta, Page, PageDocument, SubSelection, SubView,
};

use crate::embedded::embedded_source;
use crate::error::{Error, Result};
use crate::validate::validate;

/// Validated content of one locale
///
/// Pages are stored in navigation order and each page's views in the order
/// of its dimension's options, so lookups by key are direct indexes.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTables {
    document: ContentDocument,
}

impl ContentTables {
    /// Validate a parsed document and normalize its ordering
    pub fn new(mut document: ContentDocument) -> Result<Self> {
        let problems = validate(&document);
        if !problems.is_empty() {
            return Err(Error::Validation(problems));
        }

        document.pages.sort_by_key(|p| p.page.index());
        for page in &mut document.pages {
            page.views.sort_by_key(|v| v.sub.index());
        }

        tracing::debug!(
            locale = %document.locale,
            pages = document.pages.len(),
            "content document accepted"
        );

        Ok(Self { document })
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: ContentDocument = toml::from_str(source)?;
        Self::new(document)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading content document");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Content compiled into the binary
    pub fn embedded(locale: Locale) -> Result<Self> {
        Self::from_toml_str(embedded_source(locale))
    }

    pub fn locale(&self) -> Locale {
        self.document.locale
    }

    pub fn meta(&self) -> &Meta {
        &self.document.meta
    }

    pub fn labels(&self) -> &Labels {
        &self.document.labels
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn page(&self, page: Page) -> &PageDocument {
        &self.document.pages[page.index()]
    }

    /// View of `sub` on `page`; `None` when `sub` is outside the page's dimension
    pub fn view(&self, page: Page, sub: SubSelection) -> Option<&SubView> {
        if page.dimension() != Some(sub.dimension()) {
            return None;
        }
        self.page(page).views.get(sub.index())
    }
}
