use super::*;

/// Tests the color tiers of leaderboard positions.
///
/// Expected: distinct podium colors, one color for 4 to 10, one for 11 to 99,
/// none for 0 and 100+
#[test]
fn tiers_badge_colors() {
    let gold = global_rank_color(1).unwrap();
    let silver = global_rank_color(2).unwrap();
    let bronze = global_rank_color(3).unwrap();
    assert_ne!(gold, silver);
    assert_ne!(silver, bronze);
    assert_ne!(gold, bronze);

    assert_eq!(global_rank_color(4), global_rank_color(10));
    assert_eq!(global_rank_color(11), global_rank_color(99));
    assert_ne!(global_rank_color(10), global_rank_color(11));

    assert_eq!(global_rank_color(0), None);
    assert_eq!(global_rank_color(100), None);
    assert_eq!(global_rank_color(u32::MAX), None);
}

/// Tests drawing a badge inside the top 99.
///
/// Expected: true, "#42" text
#[test]
fn draws_badge_inside_top_hundred() {
    let mut surface = RecordingSurface::new();

    let drawn = draw_global_rank_badge(&mut surface, Rect::at(0, 0).of_size(112, 48), 42);

    assert!(drawn);
    assert!(surface.has_text("#42"));
}

/// Tests that positions from 100 on are skipped.
///
/// Expected: false, nothing drawn
#[test]
fn skips_badge_from_hundred() {
    let mut surface = RecordingSurface::new();

    let drawn = draw_global_rank_badge(&mut surface, Rect::at(0, 0).of_size(112, 48), 100);

    assert!(!drawn);
    assert!(surface.rects.is_empty());
}
