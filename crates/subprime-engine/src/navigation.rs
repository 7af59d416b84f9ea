//! Navigation state: the selected page and, on pages that have one, the
//! selected sub-option.
//!
//! Every operation either fully applies or leaves the state untouched.

use serde::Serialize;
use subprime_types::{Dimension, Error, Labels, Page, Result, SubSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<SubSelection>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::at(Page::default())
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State positioned on `page` with its default sub-option
    pub fn at(page: Page) -> Self {
        Self {
            page,
            sub: page.default_sub(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn sub(&self) -> Option<SubSelection> {
        self.sub
    }

    /// Select a page by its localized label or slug.
    ///
    /// Resets the sub-selection to the new page's default.
    pub fn select_page(&mut self, labels: &Labels, label: &str) -> Result<Page> {
        let page = parse_page(labels, label)?;
        self.go_to(page);
        Ok(page)
    }

    /// Select a sub-option of the current page by its localized label or slug
    pub fn select_sub(&mut self, labels: &Labels, label: &str) -> Result<SubSelection> {
        let dimension = self
            .page
            .dimension()
            .ok_or_else(|| Error::no_sub_selector(self.page, label))?;
        let sub = parse_sub(labels, dimension, label)?;
        self.set_sub(sub)?;
        Ok(sub)
    }

    pub fn go_to(&mut self, page: Page) {
        if page != self.page {
            tracing::debug!(from = %self.page, to = %page, "page changed");
        }
        *self = Self::at(page);
    }

    pub fn set_sub(&mut self, sub: SubSelection) -> Result<()> {
        match self.page.dimension() {
            Some(dimension) if dimension == sub.dimension() => {
                tracing::debug!(page = %self.page, sub = %sub, "sub-view changed");
                self.sub = Some(sub);
                Ok(())
            }
            Some(dimension) => Err(Error::invalid_selection(dimension, sub.slug())),
            None => Err(Error::no_sub_selector(self.page, sub.slug())),
        }
    }

    pub fn next_page(&mut self) {
        self.go_to(step(&Page::ALL, self.page.index(), 1));
    }

    pub fn previous_page(&mut self) {
        self.go_to(step(&Page::ALL, self.page.index(), -1));
    }

    /// Advance to the next sub-option, wrapping; no-op on pages without one
    pub fn next_sub(&mut self) {
        self.shift_sub(1);
    }

    pub fn previous_sub(&mut self) {
        self.shift_sub(-1);
    }

    fn shift_sub(&mut self, delta: isize) {
        let Some(current) = self.sub else {
            return;
        };
        let options = SubSelection::options(current.dimension());
        self.sub = Some(step(&options, current.index(), delta));
    }
}

fn step<T: Copy>(items: &[T], index: usize, delta: isize) -> T {
    let len = items.len() as isize;
    let next = (index as isize + delta).rem_euclid(len);
    items[next as usize]
}

/// Page for a localized label, a case-insensitive label, or a slug
pub fn parse_page(labels: &Labels, label: &str) -> Result<Page> {
    let trimmed = label.trim();
    if let Some(page) = labels.page_by_label(trimmed) {
        return Ok(page);
    }
    if let Some(page) = labels
        .options(Dimension::Page)
        .iter()
        .position(|l| l.eq_ignore_ascii_case(trimmed))
        .and_then(|idx| Page::ALL.get(idx).copied())
    {
        return Ok(page);
    }
    trimmed
        .parse::<Page>()
        .map_err(|_| Error::invalid_selection(Dimension::Page, label))
}

/// Sub-option of `dimension` for a localized label or slug
pub fn parse_sub(labels: &Labels, dimension: Dimension, label: &str) -> Result<SubSelection> {
    let trimmed = label.trim();
    if let Some(sub) = labels.sub_by_label(dimension, trimmed) {
        return Ok(sub);
    }
    if let Some(sub) = labels
        .options(dimension)
        .iter()
        .position(|l| l.eq_ignore_ascii_case(trimmed))
        .and_then(|idx| SubSelection::options(dimension).get(idx).copied())
    {
        return Ok(sub);
    }
    SubSelection::from_slug(dimension, trimmed)
        .map_err(|_| Error::invalid_selection(dimension, label))
}
