use anyhow::Result;
use subprime_content::ContentTables;
use subprime_engine::{NavigationState, resolve_state};
use subprime_types::{Page, SubSelection};

use crate::presentation::view_models::{
    ChromeViewModel, Guidance, NavItem, NavigationViewModel, PageViewModel, SubNavViewModel,
};

pub fn present_page(tables: &ContentTables, state: &NavigationState) -> Result<PageViewModel> {
    let entry = resolve_state(tables, state)?;
    let labels = tables.labels();
    let meta = tables.meta();

    let pages = Page::ALL
        .into_iter()
        .map(|page| NavItem {
            slug: page.slug().to_string(),
            label: labels.page(page).to_string(),
            selected: page == state.page(),
        })
        .collect();

    let sub = state.page().dimension().map(|dimension| SubNavViewModel {
        dimension,
        prompt: labels.prompt(dimension).to_string(),
        options: SubSelection::options(dimension)
            .into_iter()
            .map(|sub| NavItem {
                slug: sub.slug().to_string(),
                label: labels.sub(sub).to_string(),
                selected: Some(sub) == state.sub(),
            })
            .collect(),
    });

    Ok(PageViewModel {
        locale: tables.locale(),
        navigation: NavigationViewModel {
            prompt: labels.prompts.page.clone(),
            pages,
            sub,
        },
        entry,
        chrome: ChromeViewModel {
            title: meta.title.clone(),
            icon: meta.icon.clone(),
            intro: meta.intro.clone(),
            navigation_heading: meta.navigation.clone(),
            about_heading: meta.about_heading.clone(),
            about: meta.about.clone(),
            footer: meta.footer.clone(),
        },
    })
}

/// Pointers to the sibling views of a page with a sub-selector
pub fn sub_view_hints(model: &PageViewModel) -> Vec<Guidance> {
    let Some(sub) = &model.navigation.sub else {
        return Vec::new();
    };
    let page = model.page().slug();

    sub.options
        .iter()
        .filter(|o| !o.selected)
        .map(|o| {
            Guidance::new(o.label.clone())
                .with_command(format!("subprime show {} --sub {}", page, o.slug))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use subprime_types::{Locale, Metric};

    #[test]
    fn test_navigation_marks_current_selection() {
        let tables = ContentTables::embedded(Locale::En).unwrap();
        let mut state = NavigationState::at(Page::GlobalImpact);
        state
            .set_sub(SubSelection::Metric(Metric::Unemployment))
            .unwrap();

        let model = present_page(&tables, &state).unwrap();
        assert_eq!(
            model.navigation.selected_page().map(|p| p.label.as_str()),
            Some("Global Impact")
        );
        assert_eq!(
            model.navigation.selected_sub().map(|o| o.label.as_str()),
            Some("Unemployment")
        );
        assert_eq!(
            model.navigation.sub.as_ref().map(|s| s.prompt.as_str()),
            Some("Select an impact metric:")
        );

        let hints = sub_view_hints(&model);
        assert_eq!(hints.len(), 2);
        assert_eq!(
            hints[0].command.as_deref(),
            Some("subprime show global-impact --sub gdp-growth")
        );
    }

    #[test]
    fn test_pages_without_sub_have_no_hints() {
        let tables = ContentTables::embedded(Locale::Pt).unwrap();
        let model = present_page(&tables, &NavigationState::new()).unwrap();
        assert!(model.navigation.sub.is_none());
        assert!(sub_view_hints(&model).is_empty());
        assert_eq!(model.locale, Locale::Pt);
    }
}
