use serde::Serialize;
use subprime_types::{ContentEntry, Dimension, Locale, Page, SubSelection};

/// Everything needed to draw one page, in either front end
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub locale: Locale,
    pub navigation: NavigationViewModel,
    pub entry: ContentEntry,
    #[serde(skip)]
    pub chrome: ChromeViewModel,
}

impl PageViewModel {
    pub fn page(&self) -> Page {
        self.entry.page
    }

    pub fn sub(&self) -> Option<SubSelection> {
        self.entry.sub
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationViewModel {
    pub prompt: String,
    pub pages: Vec<NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<SubNavViewModel>,
}

impl NavigationViewModel {
    pub fn selected_page(&self) -> Option<&NavItem> {
        self.pages.iter().find(|p| p.selected)
    }

    pub fn selected_sub(&self) -> Option<&NavItem> {
        self.sub.as_ref()?.options.iter().find(|o| o.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub slug: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubNavViewModel {
    pub dimension: Dimension,
    pub prompt: String,
    pub options: Vec<NavItem>,
}

/// Application text around the page: title, sidebar and footer
#[derive(Debug, Clone, Default)]
pub struct ChromeViewModel {
    pub title: String,
    pub icon: String,
    pub intro: String,
    pub navigation_heading: String,
    pub about_heading: String,
    pub about: Vec<String>,
    pub footer: Vec<String>,
}
