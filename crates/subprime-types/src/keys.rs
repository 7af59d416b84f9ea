//! Closed navigation key space.
//!
//! Pages and sub-options are identified by stable slugs; the human labels
//! shown to the user live in the localized content document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Selector a label is validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Page,
    Period,
    Metric,
    Region,
    Tab,
    Locale,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Page => "page",
            Dimension::Period => "timeline period",
            Dimension::Metric => "impact metric",
            Dimension::Region => "region",
            Dimension::Tab => "lesson tab",
            Dimension::Locale => "locale",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Introduction,
    Timeline,
    HousingBubble,
    GlobalImpact,
    Securitization,
    RegulatoryResponses,
    LessonsLearned,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Introduction,
        Page::Timeline,
        Page::HousingBubble,
        Page::GlobalImpact,
        Page::Securitization,
        Page::RegulatoryResponses,
        Page::LessonsLearned,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Introduction => "introduction",
            Page::Timeline => "timeline",
            Page::HousingBubble => "housing-bubble",
            Page::GlobalImpact => "global-impact",
            Page::Securitization => "securitization",
            Page::RegulatoryResponses => "regulatory-responses",
            Page::LessonsLearned => "lessons-learned",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Secondary selector of this page, if it has one
    pub fn dimension(self) -> Option<Dimension> {
        match self {
            Page::Timeline => Some(Dimension::Period),
            Page::GlobalImpact => Some(Dimension::Metric),
            Page::RegulatoryResponses => Some(Dimension::Region),
            Page::LessonsLearned => Some(Dimension::Tab),
            Page::Introduction | Page::HousingBubble | Page::Securitization => None,
        }
    }

    pub fn default_sub(self) -> Option<SubSelection> {
        self.dimension()
            .and_then(|d| SubSelection::options(d).first().copied())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| Error::invalid_selection(Dimension::Page, s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    Background,
    EarlyWarning,
    Outbreak,
    Peak,
    GlobalDevelopments,
    PolicyResponses,
    Consequences,
    Legacy,
}

impl Period {
    pub const ALL: [Period; 8] = [
        Period::Background,
        Period::EarlyWarning,
        Period::Outbreak,
        Period::Peak,
        Period::GlobalDevelopments,
        Period::PolicyResponses,
        Period::Consequences,
        Period::Legacy,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Period::Background => "background",
            Period::EarlyWarning => "early-warning",
            Period::Outbreak => "outbreak",
            Period::Peak => "peak",
            Period::GlobalDevelopments => "global-developments",
            Period::PolicyResponses => "policy-responses",
            Period::Consequences => "consequences",
            Period::Legacy => "legacy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    GdpGrowth,
    Unemployment,
    PublicDebt,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::GdpGrowth, Metric::Unemployment, Metric::PublicDebt];

    pub fn slug(self) -> &'static str {
        match self {
            Metric::GdpGrowth => "gdp-growth",
            Metric::Unemployment => "unemployment",
            Metric::PublicDebt => "public-debt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    UnitedStates,
    EuropeanUnion,
    International,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::UnitedStates,
        Region::EuropeanUnion,
        Region::International,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Region::UnitedStates => "united-states",
            Region::EuropeanUnion => "european-union",
            Region::International => "international",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonTab {
    MarketFailures,
    RiskManagement,
    Governance,
    EconomicPerspectives,
    PersistentChallenges,
}

impl LessonTab {
    pub const ALL: [LessonTab; 5] = [
        LessonTab::MarketFailures,
        LessonTab::RiskManagement,
        LessonTab::Governance,
        LessonTab::EconomicPerspectives,
        LessonTab::PersistentChallenges,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            LessonTab::MarketFailures => "market-failures",
            LessonTab::RiskManagement => "risk-management",
            LessonTab::Governance => "governance",
            LessonTab::EconomicPerspectives => "economic-perspectives",
            LessonTab::PersistentChallenges => "persistent-challenges",
        }
    }
}

/// Secondary selection scoped to one page
///
/// Serialized externally tagged, e.g. `{ period = "peak" }` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubSelection {
    Period(Period),
    Metric(Metric),
    Region(Region),
    Tab(LessonTab),
}

impl SubSelection {
    pub fn dimension(self) -> Dimension {
        match self {
            SubSelection::Period(_) => Dimension::Period,
            SubSelection::Metric(_) => Dimension::Metric,
            SubSelection::Region(_) => Dimension::Region,
            SubSelection::Tab(_) => Dimension::Tab,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SubSelection::Period(p) => p.slug(),
            SubSelection::Metric(m) => m.slug(),
            SubSelection::Region(r) => r.slug(),
            SubSelection::Tab(t) => t.slug(),
        }
    }

    /// Options of a sub-selector dimension in display order
    pub fn options(dimension: Dimension) -> Vec<SubSelection> {
        match dimension {
            Dimension::Period => Period::ALL.into_iter().map(SubSelection::Period).collect(),
            Dimension::Metric => Metric::ALL.into_iter().map(SubSelection::Metric).collect(),
            Dimension::Region => Region::ALL.into_iter().map(SubSelection::Region).collect(),
            Dimension::Tab => LessonTab::ALL.into_iter().map(SubSelection::Tab).collect(),
            Dimension::Page | Dimension::Locale => Vec::new(),
        }
    }

    /// Position within its own dimension
    pub fn index(self) -> usize {
        SubSelection::options(self.dimension())
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    pub fn from_slug(dimension: Dimension, slug: &str) -> Result<Self> {
        SubSelection::options(dimension)
            .into_iter()
            .find(|s| s.slug() == slug)
            .ok_or_else(|| Error::invalid_selection(dimension, slug))
    }
}

impl fmt::Display for SubSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
