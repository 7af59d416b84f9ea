use std::path::Path;

use subprime_content::ContentTables;
use subprime_types::Block;

use crate::presentation::view_models::ContentCheckViewModel;

pub fn present_content_check(path: &Path, tables: &ContentTables) -> ContentCheckViewModel {
    let doc = tables.document();
    let all_blocks = || {
        doc.pages.iter().flat_map(|p| {
            p.lead
                .iter()
                .chain(p.views.iter().flat_map(|v| v.blocks.iter()))
                .chain(p.trail.iter())
        })
    };

    ContentCheckViewModel {
        path: path.display().to_string(),
        locale: tables.locale(),
        title: tables.meta().title.clone(),
        pages: doc.pages.len(),
        views: doc.pages.iter().map(|p| p.views.len()).sum(),
        blocks: all_blocks().count(),
        charts: all_blocks()
            .filter(|b| matches!(b, Block::Chart(_) | Block::Graph(_)))
            .count(),
        tables: all_blocks().filter(|b| matches!(b, Block::Table(_))).count(),
    }
}
