//! User statistics card assembler.
//!
//! A card is drawn in a single sequential pass: background, avatar, rank badge,
//! username, info line, the easy, standard and multiplayer panels and finally the
//! footer. The finished surface is encoded as PNG and written to the output
//! directory. Any failure aborts the whole render.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{imageops::FilterType, RgbaImage};
use imageproc::rect::Rect;

use crate::server::{
    canvas::{
        assets::CardAssets,
        layout::{
            draw_footer, draw_rank_badge, fill_background, write_text, Align, TextOptions,
            BACKGROUND, BLACK, CANVAS_HEIGHT, CANVAS_WIDTH,
        },
        section::{draw_multiplayer_panel, draw_singleplayer_panel},
        surface::{encode_png, RasterSurface, Surface},
    },
    error::render::RenderError,
    model::statistics::{SingleplayerMode, StatisticsRecord},
    util::{
        date_format::format_join_date,
        level::level_of,
        rank::{classify_rank, Rank},
    },
};

const AVATAR_X: i64 = 32;
const AVATAR_Y: i64 = 32;
const AVATAR_SIZE: u32 = 256;

/// Everything right of the avatar starts at this x coordinate.
const HEADER_X: i32 = 320;

const RANK_BADGE_Y: i32 = 32;
const RANK_BADGE_WIDTH: u32 = 256;
const RANK_BADGE_HEIGHT: u32 = 48;

const USERNAME_Y: i32 = 96;
const USERNAME_SIZE: f32 = 64.0;

const INFO_Y: i32 = 184;
const INFO_SIZE: f32 = 28.0;
const INFO_LINE_HEIGHT: i32 = 36;

const PANEL_TOP: i32 = 320;
const PANEL_WIDTH: u32 = 496;
const PANEL_HEIGHT: u32 = 320;
const EASY_PANEL_X: i32 = 32;
const STANDARD_PANEL_X: i32 = 552;

const MULTIPLAYER_PANEL_X: i32 = 32;
const MULTIPLAYER_PANEL_Y: i32 = 664;
const MULTIPLAYER_PANEL_WIDTH: u32 = 1016;
const MULTIPLAYER_PANEL_HEIGHT: u32 = 264;

/// Renders a user's statistics card to a PNG file.
///
/// The avatar is decoded asynchronously, the card is drawn synchronously onto a fresh
/// 1080x1080 surface owned by this call, then encoded and written to
/// `{output_dir}/{username}-{epoch millis}.png`. Concurrent calls share nothing but
/// the read-only assets. The caller owns the returned file and should delete it once
/// delivered.
///
/// # Arguments
/// - `assets` - Font and avatar location registered at startup
/// - `output_dir` - Directory the PNG is written to
/// - `record` - Validated statistics of the player
/// - `requested_at` - Time of the request, shown in the footer and used in the file name
///
/// # Returns
/// - `Ok(PathBuf)` - Path of the written PNG
/// - `Err(RenderError)` - Asset loading, encoding or writing failed
pub async fn render_user_statistics_card(
    assets: &CardAssets,
    output_dir: &Path,
    record: &StatisticsRecord,
    requested_at: DateTime<Utc>,
) -> Result<PathBuf, RenderError> {
    let avatar = assets.load_avatar().await?;

    let mut surface = RasterSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT, &assets.font);
    draw_user_statistics_card(&mut surface, record, &avatar, &requested_at);
    let png = encode_png(&surface.into_image())?;

    let file_path = output_dir.join(card_file_name(&record.username, &requested_at));
    write_card(&file_path, &png).await?;
    tracing::info!("Wrote file to {}", file_path.display());

    Ok(file_path)
}

/// Draws the complete card onto `surface`.
///
/// Layout depends only on constants and the arguments, so two calls with equal
/// input produce identical output.
pub fn draw_user_statistics_card<S: Surface + ?Sized>(
    surface: &mut S,
    record: &StatisticsRecord,
    avatar: &RgbaImage,
    requested_at: &DateTime<Utc>,
) {
    tracing::debug!("Drawing statistics card for {}", record.username);

    fill_background(surface);
    draw_avatar(surface, avatar);

    let rank = classify_rank(&record.membership);
    draw_rank_badge(surface, rank_badge_rect(), &rank);
    draw_username(surface, &record.username, &rank);
    draw_info_line(surface, record);

    let statistics = &record.statistics;
    for (mode, region) in [
        (SingleplayerMode::Easy, easy_panel_rect()),
        (SingleplayerMode::Standard, standard_panel_rect()),
    ] {
        draw_singleplayer_panel(surface, region, mode, statistics.personal_best(mode));
    }
    draw_multiplayer_panel(surface, multiplayer_panel_rect(), &statistics.multiplayer);

    draw_footer(surface, requested_at);
    tracing::debug!("Finished drawing statistics card for {}", record.username);
}

/// Output file name for a card, `{username}-{epoch millis}.png`.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced so a username can never escape
/// the output directory.
pub fn card_file_name(username: &str, requested_at: &DateTime<Utc>) -> String {
    let safe_username: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}-{}.png", safe_username, requested_at.timestamp_millis())
}

/// Writes encoded PNG bytes, creating the output directory if needed.
pub async fn write_card(file_path: &Path, png: &[u8]) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write {
        path: file_path.to_path_buf(),
        source,
    };

    if let Some(dir) = file_path.parent() {
        tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    }
    tokio::fs::write(file_path, png).await.map_err(write_err)
}

fn draw_avatar<S: Surface + ?Sized>(surface: &mut S, avatar: &RgbaImage) {
    if avatar.dimensions() == (AVATAR_SIZE, AVATAR_SIZE) {
        surface.draw_image(avatar, AVATAR_X, AVATAR_Y);
    } else {
        let scaled =
            image::imageops::resize(avatar, AVATAR_SIZE, AVATAR_SIZE, FilterType::Triangle);
        surface.draw_image(&scaled, AVATAR_X, AVATAR_Y);
    }
}

/// Username in the rank color, or black when the rank color would vanish into the
/// background.
fn draw_username<S: Surface + ?Sized>(surface: &mut S, username: &str, rank: &Rank) {
    write_text(
        surface,
        &TextOptions {
            text: username,
            size: USERNAME_SIZE,
            color: username_color(rank),
            x: HEADER_X,
            y: USERNAME_Y,
            align: Align::Left,
        },
    );
}

pub(crate) fn username_color(rank: &Rank) -> image::Rgba<u8> {
    if rank.color == BACKGROUND {
        BLACK
    } else {
        rank.color
    }
}

fn draw_info_line<S: Surface + ?Sized>(surface: &mut S, record: &StatisticsRecord) {
    for (i, line) in info_lines(record).iter().enumerate() {
        write_text(
            surface,
            &TextOptions {
                text: line,
                size: INFO_SIZE,
                color: BLACK,
                x: HEADER_X,
                y: INFO_Y + i as i32 * INFO_LINE_HEIGHT,
                align: Align::Left,
            },
        );
    }
}

/// The two lines below the username: level progress and join date.
pub(crate) fn info_lines(record: &StatisticsRecord) -> [String; 2] {
    let level = level_of(record.statistics.total_experience_points);

    [
        format!(
            "Level {} ({}% to next)",
            level.level,
            level.percent_to_next()
        ),
        format!(
            "Joined on {}.",
            format_join_date(&record.creation_date_and_time)
        ),
    ]
}

pub(crate) fn rank_badge_rect() -> Rect {
    Rect::at(HEADER_X, RANK_BADGE_Y).of_size(RANK_BADGE_WIDTH, RANK_BADGE_HEIGHT)
}

pub(crate) fn easy_panel_rect() -> Rect {
    Rect::at(EASY_PANEL_X, PANEL_TOP).of_size(PANEL_WIDTH, PANEL_HEIGHT)
}

pub(crate) fn standard_panel_rect() -> Rect {
    Rect::at(STANDARD_PANEL_X, PANEL_TOP).of_size(PANEL_WIDTH, PANEL_HEIGHT)
}

pub(crate) fn multiplayer_panel_rect() -> Rect {
    Rect::at(MULTIPLAYER_PANEL_X, MULTIPLAYER_PANEL_Y)
        .of_size(MULTIPLAYER_PANEL_WIDTH, MULTIPLAYER_PANEL_HEIGHT)
}
