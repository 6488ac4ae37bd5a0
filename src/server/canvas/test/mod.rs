use crate::server::{
    canvas::{
        assets::{decode_avatar, read_avatar, CardAssets, DEFAULT_AVATAR_FILE, FONT_FILE},
        layout::{
            draw_footer, draw_global_rank_badge, draw_rank_badge, global_rank_color, BACKGROUND,
            BLACK, CANVAS_HEIGHT, CANVAS_WIDTH, PLACEHOLDER_COLOR, WHITE,
        },
        section::{draw_multiplayer_panel, draw_singleplayer_panel, NEVER_PLAYED},
        surface::{encode_png, Surface},
        user::{
            card_file_name, draw_user_statistics_card, easy_panel_rect, info_lines,
            rank_badge_rect, render_user_statistics_card, username_color, write_card,
        },
    },
    error::render::RenderError,
    model::statistics::{
        Membership, Multiplayer, PersonalBest, SingleplayerMode, Statistics, StatisticsRecord,
    },
    util::rank::{classify_rank, Rank},
};
use chrono::{DateTime, TimeZone, Utc};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use std::path::PathBuf;

mod global_rank_badge;
mod render_card;

/// A single text run captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
struct DrawnText {
    text: String,
    x: i32,
    y: i32,
    size: f32,
    color: Rgba<u8>,
}

/// Surface that rasterizes rectangles and images but only records text.
///
/// Text width is approximated as half the font size per character, which keeps
/// alignment arithmetic checkable without a font file.
struct RecordingSurface {
    canvas: RgbaImage,
    rects: Vec<(Rect, Rgba<u8>)>,
    texts: Vec<DrawnText>,
    images: usize,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            canvas: RgbaImage::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            rects: Vec::new(),
            texts: Vec::new(),
            images: 0,
        }
    }

    fn text(&self, text: &str) -> Option<&DrawnText> {
        self.texts.iter().find(|drawn| drawn.text == text)
    }

    fn has_text(&self, text: &str) -> bool {
        self.text(text).is_some()
    }

    fn has_rect_colored(&self, color: Rgba<u8>) -> bool {
        self.rects.iter().any(|(_, c)| *c == color)
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        draw_filled_rect_mut(&mut self.canvas, rect, color);
        self.rects.push((rect, color));
    }

    fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        image::imageops::overlay(&mut self.canvas, image, x, y);
        self.images += 1;
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>) {
        self.texts.push(DrawnText {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn text_width(&self, text: &str, size: f32) -> u32 {
        (text.chars().count() as f32 * size * 0.5) as u32
    }
}

fn requested_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 17, 5, 9).unwrap()
}

fn avatar() -> RgbaImage {
    RgbaImage::from_pixel(256, 256, Rgba([0x10, 0x20, 0x30, 0xff]))
}

fn played(score: u64) -> PersonalBest {
    PersonalBest {
        score: Some(score),
        time_in_milliseconds: 65_432.0,
        actions_performed: 120,
        enemies_killed: 4_200,
        enemies_created: 5_000,
        global_rank: None,
    }
}

fn record(username: &str) -> StatisticsRecord {
    StatisticsRecord {
        username: username.to_string(),
        creation_date_and_time: Utc.with_ymd_and_hms(2023, 3, 14, 8, 0, 0).unwrap(),
        membership: Membership::default(),
        statistics: Statistics::default(),
    }
}

/// Per-test directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "mbd-stats-bot-{}-{}",
        name,
        std::process::id()
    ))
}
