use super::*;
use crate::server::canvas::layout::FOOTER_FILL;

/// Directory holding the card font, `ASSET_DIR` or the crate's `assets/`.
fn font_dir() -> PathBuf {
    std::env::var("ASSET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

/// Tests a full render through the font-backed raster surface.
///
/// Skipped when the font is not installed, since it is not distributed with the
/// source tree.
///
/// Expected: a 1080x1080 PNG on disk with background, footer and glyph pixels where
/// the layout puts them
#[tokio::test]
async fn renders_card_with_installed_font() {
    let asset_dir = font_dir();
    if !asset_dir.join(FONT_FILE).exists() {
        eprintln!("{} not found in {}, skipping", FONT_FILE, asset_dir.display());
        return;
    }
    let loaded = CardAssets::load(&asset_dir).unwrap();

    let dir = scratch_dir("full-card");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let avatar_path = dir.join(DEFAULT_AVATAR_FILE);
    tokio::fs::write(&avatar_path, encode_png(&avatar()).unwrap())
        .await
        .unwrap();
    let assets = CardAssets {
        font: loaded.font,
        avatar_path,
    };

    let record = record("mathwiz");
    let path = render_user_statistics_card(&assets, &dir, &record, requested_at())
        .await
        .unwrap();

    assert_eq!(path, dir.join(card_file_name("mathwiz", &requested_at())));
    let card = image::open(&path).unwrap().to_rgba8();
    assert_eq!(card.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    assert_eq!(*card.get_pixel(540, 300), BACKGROUND);
    assert_eq!(*card.get_pixel(0, CANVAS_HEIGHT - 1), FOOTER_FILL);
    assert_eq!(*card.get_pixel(100, 100), Rgba([0x10, 0x20, 0x30, 0xff]));

    let username_has_glyphs = (320..600)
        .flat_map(|x| (96..170).map(move |y| (x, y)))
        .any(|(x, y)| *card.get_pixel(x, y) != BACKGROUND);
    assert!(username_has_glyphs);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
