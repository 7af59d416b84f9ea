use std::fmt;

use crate::presentation::view_models::{ConsoleStyle, ContentCheckViewModel, CreateView};

impl CreateView for ContentCheckViewModel {
    fn create_view<'a>(&'a self, _style: ConsoleStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ContentCheckView { data: self })
    }
}

struct ContentCheckView<'a> {
    data: &'a ContentCheckViewModel,
}

impl<'a> fmt::Display for ContentCheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        writeln!(f, "File: {}", d.path)?;
        writeln!(f, "Locale: {}", d.locale)?;
        writeln!(f, "Title: {}", d.title)?;
        writeln!(
            f,
            "Pages: {}  Views: {}  Blocks: {} ({} charts, {} tables)",
            d.pages, d.views, d.blocks, d.charts, d.tables
        )
    }
}
