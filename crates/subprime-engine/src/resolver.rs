use subprime_content::ContentTables;
use subprime_types::{ContentEntry, Error, Page, Result, SubSelection};

use crate::navigation::NavigationState;

/// Resolve the content shown for `page` and an optional sub-option.
///
/// Blocks are composed as the page's lead, then the sub-view (the page's
/// default when `sub` is `None`), then the page's trail.
pub fn resolve(
    tables: &ContentTables,
    page: Page,
    sub: Option<SubSelection>,
) -> Result<ContentEntry> {
    let sub = match (page.dimension(), sub) {
        (Some(dimension), Some(sub)) if sub.dimension() != dimension => {
            return Err(Error::invalid_selection(dimension, sub.slug()));
        }
        (None, Some(sub)) => {
            return Err(Error::no_sub_selector(page, sub.slug()));
        }
        (_, Some(sub)) => Some(sub),
        (_, None) => page.default_sub(),
    };

    let page_doc = tables.page(page);
    let view_blocks = match sub {
        Some(sub) => {
            let view = tables
                .view(page, sub)
                .ok_or_else(|| Error::Content(format!("no view for {}/{}", page, sub)))?;
            view.blocks.as_slice()
        }
        None => &[],
    };

    let blocks = page_doc
        .lead
        .iter()
        .chain(view_blocks)
        .chain(page_doc.trail.iter())
        .cloned()
        .collect();

    tracing::trace!(page = %page, sub = ?sub.map(|s| s.slug()), "resolved content entry");

    Ok(ContentEntry {
        page,
        sub,
        title: page_doc.title.clone(),
        blocks,
    })
}

/// Resolve the entry for a navigation state.
///
/// A state only ever holds a sub-option of its page's dimension, so this
/// lookup cannot be rejected; a table that fails it was not validated.
pub fn resolve_state(tables: &ContentTables, state: &NavigationState) -> Result<ContentEntry> {
    resolve(tables, state.page(), state.sub())
}

#[cfg(test)]
mod tests {
    use super::*;
    use subprime_types::{Block, Dimension, Locale, Metric, Period, Region};

    fn tables() -> ContentTables {
        ContentTables::embedded(Locale::En).unwrap()
    }

    #[test]
    fn composes_lead_view_and_trail() {
        let tables = tables();
        let entry = resolve(
            &tables,
            Page::RegulatoryResponses,
            Some(SubSelection::Region(Region::EuropeanUnion)),
        )
        .unwrap();

        let kinds: Vec<&str> = entry.blocks.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec!["prose", "table", "prose", "chart", "prose", "prose"]
        );
        let table = entry.tables().next().unwrap();
        assert_eq!(
            table.title.as_deref(),
            Some("Main Regulatory Measures in the European Union")
        );
    }

    #[test]
    fn missing_sub_resolves_to_default() {
        let tables = tables();
        let implicit = resolve(&tables, Page::Timeline, None).unwrap();
        let explicit = resolve(
            &tables,
            Page::Timeline,
            Some(SubSelection::Period(Period::Background)),
        )
        .unwrap();
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.sub, Some(SubSelection::Period(Period::Background)));
    }

    #[test]
    fn foreign_sub_is_rejected() {
        let tables = tables();
        let err = resolve(
            &tables,
            Page::Timeline,
            Some(SubSelection::Metric(Metric::GdpGrowth)),
        )
        .unwrap_err();
        assert_eq!(err, Error::invalid_selection(Dimension::Period, "gdp-growth"));

        let err = resolve(
            &tables,
            Page::Securitization,
            Some(SubSelection::Metric(Metric::GdpGrowth)),
        )
        .unwrap_err();
        assert_eq!(err, Error::no_sub_selector(Page::Securitization, "gdp-growth"));
    }
}
