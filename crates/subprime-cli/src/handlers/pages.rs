use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters::present_pages;
use crate::presentation::view_models::CommandResultViewModel;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let tables = ctx.tables()?;
    ctx.render(CommandResultViewModel::new(present_pages(&tables)))
}
