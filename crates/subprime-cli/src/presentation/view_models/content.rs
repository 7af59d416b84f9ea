use serde::Serialize;
use subprime_types::Locale;

/// Summary of a content document that passed validation
#[derive(Debug, Clone, Serialize)]
pub struct ContentCheckViewModel {
    pub path: String,
    pub locale: Locale,
    pub title: String,
    pub pages: usize,
    pub views: usize,
    pub blocks: usize,
    pub charts: usize,
    pub tables: usize,
}
