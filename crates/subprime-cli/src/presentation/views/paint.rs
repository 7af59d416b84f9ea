use owo_colors::OwoColorize;

use super::layout::{Emphasis, Styled, StyledLine};

/// Turns styled lines into console text, with or without ANSI colours
#[derive(Debug, Clone, Copy)]
pub(crate) struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn line(self, line: &StyledLine) -> String {
        line.iter().map(|s| self.span(s)).collect()
    }

    pub fn span(self, span: &Styled) -> String {
        if !self.color {
            return span.text.clone();
        }

        let text = match span.emphasis {
            Emphasis::Normal => span.text.clone(),
            Emphasis::Strong => span.text.bold().to_string(),
            Emphasis::Muted => span.text.dimmed().to_string(),
            Emphasis::Italic => span.text.italic().to_string(),
        };
        let text = match span.fg {
            Some(c) => text.truecolor(c.r, c.g, c.b).to_string(),
            None => text,
        };
        match span.bg {
            Some(c) => text.on_truecolor(c.r, c.g, c.b).to_string(),
            None => text,
        }
    }

    pub fn title(self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subprime_types::Rgb;

    #[test]
    fn test_plain_painter_drops_styling() {
        let line = vec![
            Styled::strong("Lehman").with_fg(Rgb::new(255, 0, 0)),
            Styled::plain(" fails"),
        ];
        assert_eq!(Painter::new(false).line(&line), "Lehman fails");
    }

    #[test]
    fn test_colour_painter_emits_truecolor() {
        let span = Styled::plain("row").with_bg(Rgb::new(0xFF, 0x9E, 0x80));
        let painted = Painter::new(true).span(&span);
        assert!(painted.contains("48;2;255;158;128"));
        assert!(painted.contains("row"));
    }
}
