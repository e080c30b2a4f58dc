//! Text-art cards with optional ANSI colour.
//!
//! Each card is drawn as its shape repeated `count` times, side by side,
//! centred in a fixed-width cell. The fill character shows the shading.

use super::CardRenderer;
use crate::cards::{Card, Color, Shading, Shape};
use crate::core::config::SET_SIZE;

/// Width of one card cell, in characters.
pub const CARD_WIDTH: usize = 21;

/// Spaces between two card cells.
const CARD_GAP: usize = 2;

const ANSI_RESET: &str = "\u{1b}[0m";

/// Draws cards as multi-line text art.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiRenderer {
    color: bool,
}

impl AsciiRenderer {
    /// Renderer that colours each card with ANSI escapes.
    #[must_use]
    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Renderer without escape codes.
    #[must_use]
    pub fn monochrome() -> Self {
        Self { color: false }
    }

    /// Lines of a single card, each exactly `CARD_WIDTH` visible characters.
    #[must_use]
    pub fn card_lines(&self, card: Card) -> Vec<String> {
        let glyph = shape_glyph(card.shape, fill_char(card.shading));
        let copies = card.count.value();

        glyph
            .iter()
            .map(|row| {
                let raw = vec![row.as_str(); copies].join(" ");
                let line = center(&raw, CARD_WIDTH);
                if self.color {
                    format!("{}{}{}", ansi_color(card.color), line, ANSI_RESET)
                } else {
                    line
                }
            })
            .collect()
    }
}

impl CardRenderer for AsciiRenderer {
    fn render_cards(&self, cards: &[Card]) -> String {
        let rendered: Vec<Vec<String>> = cards.iter().map(|&c| self.card_lines(c)).collect();
        let height = rendered.iter().map(Vec::len).min().unwrap_or(0);
        let gap = " ".repeat(CARD_GAP);

        (0..height)
            .map(|row| {
                rendered
                    .iter()
                    .map(|lines| lines[row].as_str())
                    .collect::<Vec<_>>()
                    .join(gap.as_str())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_board(&self, pool: &[Card]) -> String {
        let gap = " ".repeat(CARD_GAP);
        let mut out = String::from("Board:\n");
        for (row, chunk) in pool.chunks(SET_SIZE).enumerate() {
            out.push_str(&self.render_cards(chunk));
            out.push('\n');

            let labels: Vec<String> = (0..chunk.len())
                .map(|i| center(&(row * SET_SIZE + i + 1).to_string(), CARD_WIDTH))
                .collect();
            out.push_str(labels.join(gap.as_str()).trim_end());
            out.push('\n');
        }
        out
    }
}

fn fill_char(shading: Shading) -> char {
    match shading {
        Shading::Solid => '0',
        Shading::Striped => '-',
        Shading::Outlined => ' ',
    }
}

/// Four rows, five columns.
fn shape_glyph(shape: Shape, s: char) -> [String; 4] {
    match shape {
        Shape::Oval => [
            " .-. ".to_string(),
            format!("({s}{s}{s})"),
            format!("({s}{s}{s})"),
            " `-' ".to_string(),
        ],
        Shape::Squiggle => [
            format!("\\{s}{s}{s}\\"),
            format!("/{s}{s}{s}/"),
            format!("\\{s}{s}{s}\\"),
            format!("/{s}{s}{s}/"),
        ],
        Shape::Diamond => [
            format!(" /{s}\\ "),
            format!("/{s}{s}{s}\\"),
            format!("\\{s}{s}{s}/"),
            format!(" \\{s}/ "),
        ],
    }
}

fn ansi_color(color: Color) -> &'static str {
    match color {
        Color::Red => "\u{1b}[31m",
        Color::Green => "\u{1b}[32m",
        Color::Purple => "\u{1b}[35m",
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
