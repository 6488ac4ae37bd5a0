//! Font and avatar assets used by the stat card.

use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use image::RgbaImage;

use crate::server::error::render::RenderError;

/// Font file expected inside the asset directory.
pub const FONT_FILE: &str = "NotoSans-Regular.ttf";

/// Avatar shown on every card; there are no per-user avatars.
pub const DEFAULT_AVATAR_FILE: &str = "default-avatar.png";

/// Assets registered once at startup and shared by every render.
///
/// The font is parsed eagerly so a broken installation fails at boot instead of on
/// the first `/user` command. The avatar is only located here and is decoded on each
/// render.
#[derive(Clone)]
pub struct CardAssets {
    pub font: FontArc,
    pub avatar_path: PathBuf,
}

impl CardAssets {
    /// Loads the card font and records the avatar path.
    ///
    /// # Arguments
    /// - `asset_dir` - Directory containing the font and the default avatar
    ///
    /// # Returns
    /// - `Ok(CardAssets)` - Font parsed and ready for drawing
    /// - `Err(RenderError::AssetRead)` - Font file could not be read
    /// - `Err(RenderError::InvalidFont)` - Font file is not a valid font
    pub fn load(asset_dir: &Path) -> Result<Self, RenderError> {
        let font_path = asset_dir.join(FONT_FILE);
        let font_bytes = std::fs::read(&font_path).map_err(|source| RenderError::AssetRead {
            path: font_path.clone(),
            source,
        })?;
        let font = FontArc::try_from_vec(font_bytes)
            .map_err(|_| RenderError::InvalidFont { path: font_path })?;

        Ok(Self {
            font,
            avatar_path: asset_dir.join(DEFAULT_AVATAR_FILE),
        })
    }

    /// Reads and decodes the avatar image.
    ///
    /// This is the only suspending step of a render.
    ///
    /// # Returns
    /// - `Ok(RgbaImage)` - Decoded avatar in RGBA
    /// - `Err(RenderError::AssetRead)` - Avatar file could not be read
    /// - `Err(RenderError::AssetDecode)` - Avatar file is not a decodable image
    pub async fn load_avatar(&self) -> Result<RgbaImage, RenderError> {
        read_avatar(&self.avatar_path).await
    }
}

/// Reads and decodes an avatar file.
pub async fn read_avatar(path: &Path) -> Result<RgbaImage, RenderError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| RenderError::AssetRead {
            path: path.to_path_buf(),
            source,
        })?;

    decode_avatar(path, &bytes)
}

/// Decodes avatar bytes, reporting failures against `path`.
pub fn decode_avatar(path: &Path, bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    image::load_from_memory(bytes)
        .map(|avatar| avatar.to_rgba8())
        .map_err(|source| RenderError::AssetDecode {
            path: path.to_path_buf(),
            source,
        })
}
