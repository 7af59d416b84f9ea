//! Content documents for tests.

use subprime_content::embedded_source;
use subprime_types::Locale;

/// The shipped document of a locale
pub fn embedded_document(locale: Locale) -> String {
    embedded_source(locale).to_string()
}

/// A document whose last page ("Lessons Learned") was cut off.
///
/// It parses, but fails validation: a page of the closed set is missing.
pub fn document_without_last_page(locale: Locale) -> String {
    let source = embedded_source(locale);
    match source.rfind("[[pages]]") {
        Some(idx) => source[..idx].to_string(),
        None => source.to_string(),
    }
}

/// Text that is not a content document at all
pub fn not_a_document() -> String {
    "title = \"half a document\"\n[[pages]\n".to_string()
}
