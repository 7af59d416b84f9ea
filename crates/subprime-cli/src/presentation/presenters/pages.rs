use subprime_content::ContentTables;
use subprime_types::{Page, SubSelection};

use crate::presentation::view_models::{OptionListing, PageListViewModel, PageListing};

pub fn present_pages(tables: &ContentTables) -> PageListViewModel {
    let labels = tables.labels();

    let pages = Page::ALL
        .into_iter()
        .map(|page| {
            let dimension = page.dimension();
            let options = dimension
                .map(SubSelection::options)
                .unwrap_or_default()
                .into_iter()
                .map(|sub| OptionListing {
                    slug: sub.slug().to_string(),
                    label: labels.sub(sub).to_string(),
                })
                .collect();

            PageListing {
                slug: page.slug().to_string(),
                label: labels.page(page).to_string(),
                title: tables.page(page).title.clone(),
                dimension,
                options,
            }
        })
        .collect();

    PageListViewModel {
        locale: tables.locale(),
        pages,
    }
}
