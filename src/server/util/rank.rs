use image::Rgba;

use crate::server::model::statistics::Membership;

/// Title used when a player holds no membership rank.
pub const NO_RANK_TITLE: &str = "(No Rank)";

const RED: Rgba<u8> = Rgba([0xff, 0x00, 0x00, 0xff]);
const ORANGE: Rgba<u8> = Rgba([0xff, 0x7f, 0x00, 0xff]);
const BLUE: Rgba<u8> = Rgba([0x01, 0xac, 0xff, 0xff]);
const LIGHT_BLUE: Rgba<u8> = Rgba([0x5b, 0xb1, 0xe0, 0xff]);
const GREEN: Rgba<u8> = Rgba([0x26, 0xe0, 0x2c, 0xff]);

/// Neutral gray shared by unranked players and the card background.
pub const NEUTRAL_GRAY: Rgba<u8> = Rgba([0xee, 0xee, 0xee, 0xff]);

/// Presentation rank derived from membership flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub title: &'static str,
    pub color: Rgba<u8>,
}

impl Rank {
    pub const NONE: Rank = Rank {
        title: NO_RANK_TITLE,
        color: NEUTRAL_GRAY,
    };

    /// Whether this is the placeholder rank for players without membership.
    pub fn is_none(&self) -> bool {
        self.title == NO_RANK_TITLE
    }
}

/// Derives the presentation rank from membership flags.
///
/// Flags are tested in priority order Developer, Administrator, Moderator,
/// Contributor, Tester, Donator, and the first set flag wins.
pub fn classify_rank(membership: &Membership) -> Rank {
    let ranks = [
        (membership.is_developer, "Developer", RED),
        (membership.is_administrator, "Administrator", RED),
        (membership.is_moderator, "Moderator", ORANGE),
        (membership.is_contributor, "Contributor", BLUE),
        (membership.is_tester, "Tester", LIGHT_BLUE),
        (membership.is_donator, "Donator", GREEN),
    ];

    ranks
        .into_iter()
        .find(|(held, _, _)| *held)
        .map(|(_, title, color)| Rank { title, color })
        .unwrap_or(Rank::NONE)
}
