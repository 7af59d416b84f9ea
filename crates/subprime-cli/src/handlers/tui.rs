use anyhow::Result;
use is_terminal::IsTerminal;

use super::HandlerContext;
use super::show::render_state;
use crate::presentation::TuiRenderer;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let tables = ctx.tables()?;
    let state = ctx.start_state(&tables)?;

    // Auto-select TUI mode if stdout is a TTY
    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, printing the start page");
        return render_state(ctx, &tables, &state);
    }

    TuiRenderer::new(tables, state).run()
}
