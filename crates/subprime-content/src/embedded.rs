use subprime_types::Locale;

const EN: &str = include_str!("../content/en.toml");
const PT: &str = include_str!("../content/pt.toml");

/// Raw TOML of the document compiled into the binary for `locale`
pub fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN,
        Locale::Pt => PT,
    }
}
