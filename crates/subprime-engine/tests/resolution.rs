use std::collections::HashSet;

use subprime_content::ContentTables;
use subprime_engine::{NavigationState, parse_page, parse_sub, resolve, resolve_state};
use subprime_types::{
    ChartKind, Dimension, Error, Locale, Metric, Page, Period, Rejection, SubSelection,
};

fn english() -> ContentTables {
    ContentTables::embedded(Locale::En).expect("embedded English content should load")
}

fn all_keys() -> Vec<(Page, Option<SubSelection>)> {
    Page::ALL
        .into_iter()
        .flat_map(|page| match page.dimension() {
            Some(dimension) => SubSelection::options(dimension)
                .into_iter()
                .map(|sub| (page, Some(sub)))
                .collect::<Vec<_>>(),
            None => vec![(page, None)],
        })
        .collect()
}

#[test]
fn test_every_page_resolves_to_non_empty_content() {
    let tables = english();
    for page in Page::ALL {
        let entry = resolve(&tables, page, None).expect("default resolution");
        assert_eq!(entry.page, page);
        assert!(!entry.title.is_empty(), "{} has no title", page);
        assert!(!entry.blocks.is_empty(), "{} has no blocks", page);
    }
}

#[test]
fn test_sub_views_are_pairwise_distinct() {
    let tables = english();
    for page in Page::ALL {
        let Some(dimension) = page.dimension() else {
            continue;
        };
        let options = SubSelection::options(dimension);
        let rendered: HashSet<String> = options
            .iter()
            .map(|sub| {
                let entry = resolve(&tables, page, Some(*sub)).expect("sub resolution");
                serde_json::to_string(&entry.blocks).expect("serialize blocks")
            })
            .collect();
        assert_eq!(rendered.len(), options.len(), "{} has duplicate views", page);
    }

    // 7 pages expand to 3 plain pages + 8 + 3 + 3 + 5 keyed views
    assert_eq!(all_keys().len(), 22);
}

#[test]
fn test_resolution_is_idempotent() {
    let tables = english();
    for (page, sub) in all_keys() {
        let first = resolve(&tables, page, sub).expect("first resolution");
        let second = resolve(&tables, page, sub).expect("second resolution");
        assert_eq!(first, second);
    }
}

#[test]
fn test_both_locales_cover_the_same_keys() {
    let en = english();
    let pt = ContentTables::embedded(Locale::Pt).expect("embedded Portuguese content");
    for (page, sub) in all_keys() {
        let a = resolve(&en, page, sub).expect("en");
        let b = resolve(&pt, page, sub).expect("pt");
        assert_eq!(a.blocks.len(), b.blocks.len(), "{} {:?}", page, sub);
        assert_ne!(a.title, b.title, "{} is not translated", page);
    }
}

#[test]
fn test_page_switch_resets_sub_selection() {
    let tables = english();
    let labels = tables.labels();
    let mut state = NavigationState::new();

    state.select_page(labels, "Timeline").expect("select Timeline");
    state
        .select_sub(labels, "Consequences (2010-2015)")
        .expect("select period");
    state.select_page(labels, "Global Impact").expect("select Global Impact");
    assert_eq!(state.sub(), Some(SubSelection::Metric(Metric::GdpGrowth)));

    state.select_page(labels, "Timeline").expect("back to Timeline");
    assert_eq!(state.sub(), Some(SubSelection::Period(Period::Background)));
}

#[test]
fn test_peak_of_the_crisis_scenario() {
    let tables = english();
    let labels = tables.labels();
    let mut state = NavigationState::new();
    state.select_page(labels, "Timeline").expect("select Timeline");
    state
        .select_sub(labels, "Peak of the Crisis (2008)")
        .expect("select Peak");

    let entry = resolve_state(&tables, &state).expect("resolve Peak");
    let events = entry.event_lists().next().expect("event list");
    let first = &events.events[0];
    assert_eq!(first.date, "Sep 2008 (7th)");
    assert!(first.description.contains("Fannie Mae"));
    assert!(first.description.contains("Freddie Mac"));
    assert!(
        events.events.iter().any(|e| e.description.contains("Lehman Brothers")),
        "Peak period should mention Lehman Brothers"
    );
}

#[test]
fn test_gdp_growth_scenario() {
    let tables = english();
    let labels = tables.labels();
    let mut state = NavigationState::new();
    state.select_page(labels, "Global Impact").expect("select Global Impact");
    state.select_sub(labels, "GDP Growth").expect("select GDP Growth");

    let entry = resolve_state(&tables, &state).expect("resolve GDP");
    let chart = entry.charts().next().expect("GDP chart");
    assert_eq!(chart.chart, ChartKind::GroupedBar);
    let countries: Vec<String> = (0..chart.x.len())
        .map(|i| chart.x.label(i).expect("category label"))
        .collect();
    assert_eq!(
        countries,
        vec![
            "USA", "UK", "Japan", "Germany", "France", "Brazil", "China", "India", "Russia"
        ]
    );

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["2007", "2008", "2009"]);
    for series in &chart.series {
        assert_eq!(series.values.len(), 9);
    }
}

#[test]
fn test_select_sub_on_introduction_fails() {
    let tables = english();
    let mut state = NavigationState::new();
    let err = state
        .select_sub(tables.labels(), "GDP Growth")
        .expect_err("Introduction has no sub-selector");
    assert!(matches!(
        err,
        Error::InvalidSelection {
            reason: Rejection::NoSubSelector(Page::Introduction),
            ..
        }
    ));
    assert_eq!(state, NavigationState::new());
}

#[test]
fn test_unknown_page_fails_without_state_change() {
    let tables = english();
    let mut state = NavigationState::at(Page::Securitization);
    let err = state
        .select_page(tables.labels(), "Nonexistent")
        .expect_err("unknown page");
    assert_eq!(err, Error::invalid_selection(Dimension::Page, "Nonexistent"));
    assert_eq!(state.page(), Page::Securitization);
}

#[test]
fn test_portuguese_labels_drive_navigation() {
    let tables = ContentTables::embedded(Locale::Pt).expect("embedded Portuguese content");
    let labels = tables.labels();
    let mut state = NavigationState::new();
    let page = state
        .select_page(labels, labels.page(Page::GlobalImpact))
        .expect("localized page label");
    assert_eq!(page, Page::GlobalImpact);

    let debt = labels.sub(SubSelection::Metric(Metric::PublicDebt)).to_string();
    state.select_sub(labels, &debt).expect("localized metric label");
    assert_eq!(state.sub(), Some(SubSelection::Metric(Metric::PublicDebt)));
}

#[test]
fn test_parsers_accept_labels_and_slugs() {
    let tables = english();
    let labels = tables.labels();
    assert_eq!(parse_page(labels, "Global Impact").expect("label"), Page::GlobalImpact);
    assert_eq!(parse_page(labels, "securitization").expect("slug"), Page::Securitization);
    assert_eq!(
        parse_sub(labels, Dimension::Metric, "gdp-growth").expect("slug"),
        SubSelection::Metric(Metric::GdpGrowth)
    );
    assert!(parse_page(labels, "Nonexistent").is_err());
}
