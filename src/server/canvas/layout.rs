//! Layout primitives shared by the stat card sections.
//!
//! Every primitive draws onto a [`Surface`] and is parameterized only by constants
//! and its arguments, so the same input always yields the same pixels.

use chrono::{DateTime, Utc};
use image::Rgba;
use imageproc::rect::Rect;

use crate::server::{
    canvas::surface::Surface,
    util::{
        date_format::format_footer_date,
        rank::{Rank, NEUTRAL_GRAY},
    },
};

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1080;

/// Gap between a box edge and its content.
pub const SPACING: i32 = 16;

pub const BACKGROUND: Rgba<u8> = NEUTRAL_GRAY;
pub const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
pub const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const BOX_FILL: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
pub const LABEL_COLOR: Rgba<u8> = Rgba([0x44, 0x44, 0x44, 0xff]);
pub const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([0x88, 0x88, 0x88, 0xff]);
pub const FOOTER_FILL: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 0xff]);

const GOLD: Rgba<u8> = Rgba([0xd4, 0xaf, 0x37, 0xff]);
const SILVER: Rgba<u8> = Rgba([0xc0, 0xc0, 0xc0, 0xff]);
const BRONZE: Rgba<u8> = Rgba([0xcd, 0x7f, 0x32, 0xff]);
const TOP_TEN_BLUE: Rgba<u8> = Rgba([0x1e, 0x90, 0xff, 0xff]);
const TOP_HUNDRED_PURPLE: Rgba<u8> = Rgba([0xa3, 0x35, 0xee, 0xff]);

pub const BOX_LABEL_SIZE: f32 = 32.0;
pub const BADGE_TEXT_SIZE: f32 = 32.0;
pub const FOOTER_TEXT_SIZE: f32 = 28.0;
pub const FOOTER_HEIGHT: u32 = 120;

/// Fixed second line of the footer.
pub const ATTRIBUTION: &str = "Generated by the Mathematical Base Defenders statistics bot";

/// Horizontal anchor of a text run relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text to place on the card.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions<'a> {
    pub text: &'a str,
    pub size: f32,
    pub color: Rgba<u8>,
    pub x: i32,
    pub y: i32,
    pub align: Align,
}

/// Writes one line of text, anchored according to `options.align`.
pub fn write_text<S: Surface + ?Sized>(surface: &mut S, options: &TextOptions) {
    let width = surface.text_width(options.text, options.size) as i32;
    let x = match options.align {
        Align::Left => options.x,
        Align::Center => options.x - width / 2,
        Align::Right => options.x - width,
    };

    surface.draw_text(options.text, x, options.y, options.size, options.color);
}

/// Largest size up to `size` at which `text` is at most `max_width` pixels wide.
pub fn fit_text_size<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    size: f32,
    max_width: u32,
) -> f32 {
    let width = surface.text_width(text, size);
    if width <= max_width || width == 0 {
        return size;
    }

    (size * max_width as f32 / width as f32).floor()
}

/// Writes one line of text centered both ways inside `rect`.
pub fn write_text_centered_in<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    text: &str,
    size: f32,
    color: Rgba<u8>,
) {
    let y = rect.top() + (rect.height() as i32 - size as i32) / 2;
    write_text(
        surface,
        &TextOptions {
            text,
            size,
            color,
            x: rect.left() + rect.width() as i32 / 2,
            y,
            align: Align::Center,
        },
    );
}

/// Black or white, whichever reads better on `background`.
pub fn contrasting_text_color(background: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = background.0;
    let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;

    if luminance > 150.0 {
        BLACK
    } else {
        WHITE
    }
}

/// Fills the whole surface with the neutral background color.
pub fn fill_background<S: Surface + ?Sized>(surface: &mut S) {
    let (width, height) = surface.dimensions();
    surface.fill_rect(Rect::at(0, 0).of_size(width, height), BACKGROUND);
}

/// Draws a white content box with its heading in the top-left corner.
pub fn draw_labeled_box<S: Surface + ?Sized>(surface: &mut S, rect: Rect, label: &str) {
    surface.fill_rect(rect, BOX_FILL);
    write_text(
        surface,
        &TextOptions {
            text: label,
            size: BOX_LABEL_SIZE,
            color: LABEL_COLOR,
            x: rect.left() + SPACING,
            y: rect.top() + SPACING / 2,
            align: Align::Left,
        },
    );
}

/// Draws the membership rank badge, or nothing for players without a rank.
///
/// # Returns
/// - `true` - A badge was drawn
/// - `false` - The player has no rank
pub fn draw_rank_badge<S: Surface + ?Sized>(surface: &mut S, rect: Rect, rank: &Rank) -> bool {
    if rank.is_none() {
        return false;
    }

    surface.fill_rect(rect, rank.color);
    write_text_centered_in(
        surface,
        rect,
        rank.title,
        BADGE_TEXT_SIZE,
        contrasting_text_color(rank.color),
    );
    true
}

/// Badge color for a leaderboard position.
///
/// # Returns
/// - `Some(color)` - Gold, silver and bronze for the podium, blue up to 10th place,
///   purple below that
/// - `None` - Position 0 or 100 and beyond gets no badge
pub fn global_rank_color(global_rank: u32) -> Option<Rgba<u8>> {
    match global_rank {
        1 => Some(GOLD),
        2 => Some(SILVER),
        3 => Some(BRONZE),
        4..=10 => Some(TOP_TEN_BLUE),
        11..=99 => Some(TOP_HUNDRED_PURPLE),
        _ => None,
    }
}

/// Draws a `#N` leaderboard position badge if the position earns one.
///
/// # Returns
/// - `true` - A badge was drawn
/// - `false` - The position is outside the top 99
pub fn draw_global_rank_badge<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    global_rank: u32,
) -> bool {
    let Some(color) = global_rank_color(global_rank) else {
        return false;
    };

    surface.fill_rect(rect, color);
    write_text_centered_in(
        surface,
        rect,
        &format!("#{}", global_rank),
        BADGE_TEXT_SIZE,
        contrasting_text_color(color),
    );
    true
}

/// Draws the dark footer strip with the request timestamp and attribution.
pub fn draw_footer<S: Surface + ?Sized>(surface: &mut S, requested_at: &DateTime<Utc>) {
    let (width, height) = surface.dimensions();
    let top = height.saturating_sub(FOOTER_HEIGHT) as i32;
    surface.fill_rect(Rect::at(0, top).of_size(width, FOOTER_HEIGHT), FOOTER_FILL);

    let requested_line = format!("Data requested on {}", format_footer_date(requested_at));
    let center = width as i32 / 2;
    for (i, line) in [requested_line.as_str(), ATTRIBUTION].into_iter().enumerate() {
        write_text(
            surface,
            &TextOptions {
                text: line,
                size: FOOTER_TEXT_SIZE,
                color: WHITE,
                x: center,
                y: top + 2 * SPACING + i as i32 * (FOOTER_TEXT_SIZE as i32 + SPACING),
                align: Align::Center,
            },
        );
    }
}
