use serde::Serialize;
use subprime_types::{Dimension, Locale};

#[derive(Debug, Clone, Serialize)]
pub struct PageListViewModel {
    pub locale: Locale,
    pub pages: Vec<PageListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageListing {
    pub slug: String,
    pub label: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionListing {
    pub slug: String,
    pub label: String,
}
