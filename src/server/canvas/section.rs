//! Section renderers for the singleplayer and multiplayer panels.

use imageproc::rect::Rect;

use crate::server::{
    canvas::{
        layout::{
            draw_global_rank_badge, draw_labeled_box, fit_text_size, write_text, Align, TextOptions, BLACK,
            LABEL_COLOR, PLACEHOLDER_COLOR, SPACING,
        },
        surface::Surface,
    },
    model::statistics::{Multiplayer, PersonalBest, SingleplayerMode},
    util::{number::add_commas, time_format::format_elapsed},
};

/// Shown in place of statistics for a mode the player never played.
pub const NEVER_PLAYED: &str = "(never played)";

pub const MULTIPLAYER_TITLE: &str = "Multiplayer";

const HEADLINE_SIZE: f32 = 56.0;
const PLACEHOLDER_SIZE: f32 = 40.0;
const ROW_SIZE: f32 = 28.0;

/// Offset of the headline (score or win ratio) from the top of a panel.
const HEADLINE_OFFSET: i32 = 60;
/// Offset of the first label/value row from the top of a panel.
const FIRST_ROW_OFFSET: i32 = 148;
const ROW_HEIGHT: i32 = 48;

const BADGE_WIDTH: u32 = 112;
const BADGE_HEIGHT: u32 = 48;
const BADGE_OFFSET: i32 = 68;

/// Draws a personal best panel for one singleplayer mode.
///
/// An absent score renders the never-played placeholder and nothing else. Otherwise
/// the score is drawn with thousands separators next to the global rank badge when
/// the player is in the top 99, followed by label/value rows for enemies killed,
/// speed in actions per minute and elapsed time. Long scores are shrunk so they never
/// run under the badge.
pub fn draw_singleplayer_panel<S: Surface + ?Sized>(
    surface: &mut S,
    region: Rect,
    mode: SingleplayerMode,
    best: &PersonalBest,
) {
    draw_labeled_box(surface, region, mode.title());

    let Some(score) = best.score else {
        draw_never_played(surface, region);
        return;
    };

    let badge = Rect::at(
        region.right() + 1 - SPACING - BADGE_WIDTH as i32,
        region.top() + BADGE_OFFSET,
    )
    .of_size(BADGE_WIDTH, BADGE_HEIGHT);
    let has_badge = best
        .global_rank
        .is_some_and(|global_rank| draw_global_rank_badge(surface, badge, global_rank));

    // The headline shares its row with the badge and must end before it.
    let reserved = if has_badge {
        BADGE_WIDTH + SPACING as u32
    } else {
        0
    };
    draw_headline(surface, region, &add_commas(score), reserved);

    let rows = [
        ("Enemies Killed", add_commas(best.enemies_killed)),
        ("Speed", format!("{:.3} APM", best.actions_per_minute())),
        ("Time Elapsed", format_elapsed(best.time_in_milliseconds)),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_row(surface, region, i, label, value);
    }
}

/// Draws the multiplayer panel.
///
/// Players without any played games get the never-played placeholder instead of a
/// `0%` or `NaN%` ratio.
pub fn draw_multiplayer_panel<S: Surface + ?Sized>(
    surface: &mut S,
    region: Rect,
    multiplayer: &Multiplayer,
) {
    draw_labeled_box(surface, region, MULTIPLAYER_TITLE);

    let Some(ratio) = multiplayer.win_ratio() else {
        draw_never_played(surface, region);
        return;
    };

    draw_headline(surface, region, &format!("{:.3}%", ratio * 100.0), 0);

    let rows = [
        ("Games Won", add_commas(multiplayer.games_won.unwrap_or(0))),
        ("Games Played", add_commas(multiplayer.games_played.unwrap_or(0))),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        draw_row(surface, region, i, label, value);
    }
}

fn draw_never_played<S: Surface + ?Sized>(surface: &mut S, region: Rect) {
    write_text(
        surface,
        &TextOptions {
            text: NEVER_PLAYED,
            size: PLACEHOLDER_SIZE,
            color: PLACEHOLDER_COLOR,
            x: region.left() + SPACING,
            y: region.top() + HEADLINE_OFFSET,
            align: Align::Left,
        },
    );
}

/// Headline at the top-left of a panel, shrunk to fit left of `reserved_right`
/// pixels at the panel's right edge.
fn draw_headline<S: Surface + ?Sized>(
    surface: &mut S,
    region: Rect,
    text: &str,
    reserved_right: u32,
) {
    let max_width = region
        .width()
        .saturating_sub(2 * SPACING as u32 + reserved_right);
    let size = fit_text_size(surface, text, HEADLINE_SIZE, max_width);

    write_text(
        surface,
        &TextOptions {
            text,
            size,
            color: BLACK,
            x: region.left() + SPACING,
            y: region.top() + HEADLINE_OFFSET,
            align: Align::Left,
        },
    );
}

/// Label flush left, value flush right, on row `index` of the panel.
fn draw_row<S: Surface + ?Sized>(
    surface: &mut S,
    region: Rect,
    index: usize,
    label: &str,
    value: &str,
) {
    let y = region.top() + FIRST_ROW_OFFSET + index as i32 * ROW_HEIGHT;

    write_text(
        surface,
        &TextOptions {
            text: label,
            size: ROW_SIZE,
            color: LABEL_COLOR,
            x: region.left() + SPACING,
            y,
            align: Align::Left,
        },
    );
    write_text(
        surface,
        &TextOptions {
            text: value,
            size: ROW_SIZE,
            color: BLACK,
            x: region.right() + 1 - SPACING,
            y,
            align: Align::Right,
        },
    );
}
