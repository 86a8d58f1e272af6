//! TerminalRenderer: flushes a surface to a real terminal.
//!
//! The first draw after entering (or after `invalidate`) repaints the whole
//! screen; subsequent draws diff against the previous frame and rewrite only
//! the changed runs of each row.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::surface::{Glyph, Rgb, Style, Surface};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<Surface>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full repaint (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn draw(&mut self, surface: &Surface) -> Result<()> {
        let full = match &self.prev {
            Some(prev) => prev.width() != surface.width() || prev.height() != surface.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            let mut style: Option<Style> = None;
            for y in 0..surface.height() {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                for x in 0..surface.width() {
                    self.emit(surface.get(x, y).unwrap_or_default(), &mut style)?;
                }
            }
        } else if let Some(prev) = self.prev.take() {
            let mut style: Option<Style> = None;
            for y in 0..surface.height() {
                let mut x = 0;
                while x < surface.width() {
                    if prev.get(x, y) == surface.get(x, y) {
                        x += 1;
                        continue;
                    }
                    // Start of a dirty run; emit until glyphs agree again.
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                    while x < surface.width() && prev.get(x, y) != surface.get(x, y) {
                        self.emit(surface.get(x, y).unwrap_or_default(), &mut style)?;
                        x += 1;
                    }
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.prev = Some(surface.clone());
        Ok(())
    }

    fn emit(&mut self, glyph: Glyph, current: &mut Option<Style>) -> Result<()> {
        if *current != Some(glyph.style) {
            self.apply_style(glyph.style)?;
            *current = Some(glyph.style);
        }
        self.stdout.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself is not unit-testable; exercise the conversion.
    #[test]
    fn rgb_conversion_preserves_channels() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
