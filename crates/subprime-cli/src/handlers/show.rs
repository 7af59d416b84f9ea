use anyhow::Result;
use subprime_content::ContentTables;
use subprime_engine::NavigationState;

use super::HandlerContext;
use crate::presentation::presenters::{present_page, sub_view_hints};
use crate::presentation::view_models::CommandResultViewModel;

pub fn handle(ctx: &HandlerContext, page: Option<String>, sub: Option<String>) -> Result<()> {
    let tables = ctx.tables()?;
    let labels = tables.labels();

    let mut state = match page.as_deref() {
        Some(label) => {
            let mut state = NavigationState::new();
            state.select_page(labels, label)?;
            state
        }
        None => ctx.start_state(&tables)?,
    };
    if let Some(label) = sub.as_deref() {
        state.select_sub(labels, label)?;
    }

    render_state(ctx, &tables, &state)
}

/// Print the page `state` points at
pub fn render_state(
    ctx: &HandlerContext,
    tables: &ContentTables,
    state: &NavigationState,
) -> Result<()> {
    let model = present_page(tables, state)?;
    let hints = sub_view_hints(&model);
    tracing::debug!(page = %model.page(), blocks = model.entry.blocks.len(), "page resolved");

    ctx.render(CommandResultViewModel::new(model).with_suggestions(hints))
}
