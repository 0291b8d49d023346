//! Terminal rendering of cards and tables.
//!
//! A card renders as five text lines: a frame and three pip slots. A pip
//! is the shape glyph wrapping the fill glyph, colored by card color.
//! Highlighted cards get a bold yellow frame instead of the normal white
//! one.
//!
//! Pip layout by count, top slot to bottom slot:
//!
//! ```text
//! one:    -  pip  -
//! two:   pip pip  -
//! three: pip pip pip
//! ```
//!
//! This module holds all presentation concerns; the card model knows
//! nothing about glyphs or colors.

use colored::{Color as TermColor, Colorize};

use crate::cards::{Card, Color, Fill, Shape};
use crate::rules::CardSet;
use crate::table::Table;

/// Text lines per rendered card.
pub const CARD_HEIGHT: usize = 5;

fn shape_glyphs(shape: Shape) -> (&'static str, &'static str) {
    match shape {
        Shape::Diamond => ("<", ">"),
        Shape::Oval => ("(", ")"),
        Shape::Wiggle => ("≈", "≈"),
    }
}

fn fill_glyph(fill: Fill) -> &'static str {
    match fill {
        Fill::Empty => " ",
        Fill::Dashed => "/",
        Fill::Filled => "■",
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Green => TermColor::Green,
        Color::Purple => TermColor::Magenta,
        Color::Red => TermColor::Red,
    }
}

/// Render one card as [`CARD_HEIGHT`] lines.
#[must_use]
pub fn render_card(card: &Card, highlight: bool) -> [String; CARD_HEIGHT] {
    let (open, close) = shape_glyphs(card.shape);
    let pip = format!("{open}{}{close}", fill_glyph(card.fill))
        .color(term_color(card.color))
        .to_string();
    let blank = "   ".to_string();

    // Middle slot from one symbol up, top slot from two, bottom at three.
    let count = card.count.value();
    let slots = [
        if count >= 2 { pip.clone() } else { blank.clone() },
        pip.clone(),
        if count == 3 { pip } else { blank },
    ];

    let frame = |text: &str| -> String {
        if highlight {
            text.yellow().bold().to_string()
        } else {
            text.white().to_string()
        }
    };

    [
        frame("+-----+"),
        format!("{}{}{}", frame("| "), slots[0], frame(" |")),
        format!("{}{}{}", frame("| "), slots[1], frame(" |")),
        format!("{}{}{}", frame("| "), slots[2], frame(" |")),
        frame("+-----+"),
    ]
}

/// Render the whole table, highlighting cards for which `highlight`
/// returns true.
///
/// Cards in a row are joined line-wise into one block; rows stack
/// vertically.
#[must_use]
pub fn render_table<F>(table: &Table, highlight: F) -> String
where
    F: Fn(&Card) -> bool,
{
    let mut blocks = Vec::with_capacity(table.rows().len());

    for row in table.rows() {
        let mut lines = vec![String::new(); CARD_HEIGHT];
        for card in row {
            let card_lines = render_card(card, highlight(card));
            for (line, part) in lines.iter_mut().zip(card_lines.iter()) {
                line.push_str(part);
            }
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n")
}

/// Render the table with one set's member cards highlighted.
#[must_use]
pub fn render_with_set(table: &Table, set: &CardSet) -> String {
    render_table(table, |card| set.contains(card))
}
