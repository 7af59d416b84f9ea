use anyhow::{Result, anyhow};
use std::path::Path;
use subprime_content::{ContentTables, embedded_source};

use super::HandlerContext;
use crate::presentation::presenters::present_content_check;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::types::OutputFormat;

pub fn check(ctx: &HandlerContext, file: &Path) -> Result<()> {
    let tables =
        ContentTables::from_path(file).map_err(|err| anyhow!("{}: {}", file.display(), err))?;
    tracing::info!(path = %file.display(), "content document is valid");

    let view_model = present_content_check(file, &tables);
    let result = CommandResultViewModel::new(view_model)
        .with_badge(StatusBadge::success("Content document is valid"))
        .with_suggestions(vec![
            Guidance::new("Browse it")
                .with_command(format!("subprime --content {}", file.display())),
        ]);

    ctx.render(result)
}

/// Print the active content document: the external file verbatim, the
/// embedded TOML, or the parsed document as JSON
pub fn dump(ctx: &HandlerContext) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        let tables = ctx.tables()?;
        println!("{}", serde_json::to_string_pretty(tables.document())?);
        return Ok(());
    }

    match &ctx.content_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| anyhow!("{}: {}", path.display(), err))?;
            print!("{}", raw);
        }
        None => print!("{}", embedded_source(ctx.locale)),
    }
    Ok(())
}
