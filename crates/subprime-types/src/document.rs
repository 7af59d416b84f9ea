//! Schema of a localized content document.
//!
//! One document holds the complete content of the dashboard in one
//! language. Page content is split into blocks shown before the sub-view
//! (`lead`), per sub-view blocks (`views`) and blocks shown after (`trail`).

use serde::{Deserialize, Serialize};

use crate::content::Block;
use crate::keys::{Dimension, Page, SubSelection};
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub locale: Locale,
    pub meta: Meta,
    pub labels: Labels,
    pub pages: Vec<PageDocument>,
}

impl ContentDocument {
    pub fn page(&self, page: Page) -> Option<&PageDocument> {
        self.pages.iter().find(|p| p.page == page)
    }
}

/// Application chrome: title, sidebar text, footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub window_title: String,
    #[serde(default)]
    pub icon: String,
    pub intro: String,
    pub navigation: String,
    #[serde(default)]
    pub about_heading: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub footer: Vec<String>,
}

/// Localized labels of the closed navigation set, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub pages: Vec<String>,
    pub periods: Vec<String>,
    pub metrics: Vec<String>,
    pub regions: Vec<String>,
    pub tabs: Vec<String>,
    pub prompts: Prompts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompts {
    pub page: String,
    pub period: String,
    pub metric: String,
    pub region: String,
    #[serde(default)]
    pub tab: String,
}

impl Labels {
    pub fn options(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Page => &self.pages,
            Dimension::Period => &self.periods,
            Dimension::Metric => &self.metrics,
            Dimension::Region => &self.regions,
            Dimension::Tab => &self.tabs,
            Dimension::Locale => &[],
        }
    }

    pub fn prompt(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Page => &self.prompts.page,
            Dimension::Period => &self.prompts.period,
            Dimension::Metric => &self.prompts.metric,
            Dimension::Region => &self.prompts.region,
            Dimension::Tab => &self.prompts.tab,
            Dimension::Locale => "",
        }
    }

    /// Display label of a page; falls back to the slug
    pub fn page(&self, page: Page) -> &str {
        self.pages
            .get(page.index())
            .map(String::as_str)
            .unwrap_or(page.slug())
    }

    /// Display label of a sub-option; falls back to the slug
    pub fn sub(&self, sub: SubSelection) -> &str {
        self.options(sub.dimension())
            .get(sub.index())
            .map(String::as_str)
            .unwrap_or(sub.slug())
    }

    pub fn page_by_label(&self, label: &str) -> Option<Page> {
        let idx = self.pages.iter().position(|l| l == label)?;
        Page::ALL.get(idx).copied()
    }

    pub fn sub_by_label(&self, dimension: Dimension, label: &str) -> Option<SubSelection> {
        let idx = self.options(dimension).iter().position(|l| l == label)?;
        SubSelection::options(dimension).get(idx).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub page: Page,
    pub title: String,
    #[serde(default)]
    pub lead: Vec<Block>,
    #[serde(default)]
    pub views: Vec<SubView>,
    #[serde(default)]
    pub trail: Vec<Block>,
}

impl PageDocument {
    pub fn view(&self, sub: SubSelection) -> Option<&SubView> {
        self.views.iter().find(|v| v.sub == sub)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubView {
    pub sub: SubSelection,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Metric;

    fn labels() -> Labels {
        Labels {
            pages: Page::ALL.iter().map(|p| p.slug().to_uppercase()).collect(),
            periods: vec![],
            metrics: vec!["GDP".into(), "Jobs".into(), "Debt".into()],
            regions: vec![],
            tabs: vec![],
            prompts: Prompts {
                page: "Select a section:".into(),
                period: String::new(),
                metric: "Select an impact metric:".into(),
                region: String::new(),
                tab: String::new(),
            },
        }
    }

    #[test]
    fn labels_map_both_ways() {
        let labels = labels();
        assert_eq!(labels.page(Page::GlobalImpact), "GLOBAL-IMPACT");
        assert_eq!(labels.page_by_label("TIMELINE"), Some(Page::Timeline));
        assert_eq!(labels.page_by_label("Nonexistent"), None);
        assert_eq!(
            labels.sub_by_label(Dimension::Metric, "Debt"),
            Some(SubSelection::Metric(Metric::PublicDebt))
        );
        assert_eq!(labels.prompt(Dimension::Metric), "Select an impact metric:");
    }

    #[test]
    fn missing_labels_fall_back_to_slugs() {
        let labels = labels();
        let sub = SubSelection::Period(crate::keys::Period::Peak);
        assert_eq!(labels.sub(sub), "peak");
    }
}
