use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, ConsoleStyle, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    style: ConsoleStyle,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, style: ConsoleStyle) -> Self {
        Self { json_mode, style }
    }

    /// Write a result to any sink; `render` targets stdout
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let color = self.style.color;
        if let Some(badge) = &result.badge {
            if color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.style))?;

        if !result.suggestions.is_empty() {
            let tips = "💡 Tips:";
            if color {
                writeln!(out, "\n{}", tips.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", tips)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        ContentCheckViewModel, Guidance, StatusBadge,
    };
    use subprime_types::Locale;

    fn check() -> CommandResultViewModel<ContentCheckViewModel> {
        CommandResultViewModel::new(ContentCheckViewModel {
            path: "pt.toml".into(),
            locale: Locale::Pt,
            title: "Crise Subprime".into(),
            pages: 7,
            views: 22,
            blocks: 80,
            charts: 7,
            tables: 4,
        })
        .with_badge(StatusBadge::success("Content is valid"))
        .with_suggestions(vec![
            Guidance::new("Browse it").with_command("subprime --content pt.toml"),
        ])
    }

    fn written(renderer: &ConsoleRenderer) -> String {
        let mut out = Vec::new();
        renderer.write_to(&mut out, &check()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = written(&ConsoleRenderer::new(false, ConsoleStyle::default()));
        insta::assert_snapshot!(text, @r"
        ✅ Content is valid

        File: pt.toml
        Locale: pt
        Title: Crise Subprime
        Pages: 7  Views: 22  Blocks: 80 (7 charts, 4 tables)

        💡 Tips:
          • Browse it: subprime --content pt.toml
        ");
    }

    #[test]
    fn test_json_output_is_the_full_view_model() {
        let text = written(&ConsoleRenderer::new(true, ConsoleStyle::default()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["badge"]["level"], "success");
        assert_eq!(value["content"]["views"], 22);
        assert_eq!(value["suggestions"][0]["command"], "subprime --content pt.toml");
    }
}
