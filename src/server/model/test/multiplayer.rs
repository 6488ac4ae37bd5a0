use super::*;
use crate::server::model::statistics::Multiplayer;

/// Tests the win ratio of a player with games.
///
/// Expected: Some(0.4) for 4 wins in 10 games
#[test]
fn computes_win_ratio() {
    let multiplayer = Multiplayer {
        games_played: Some(10),
        games_won: Some(4),
    };

    assert_eq!(multiplayer.win_ratio(), Some(0.4));
}

/// Tests that zero games played has no ratio.
///
/// Expected: None instead of NaN
#[test]
fn zero_games_has_no_ratio() {
    let multiplayer = Multiplayer {
        games_played: Some(0),
        games_won: Some(0),
    };

    assert_eq!(multiplayer.win_ratio(), None);
}

/// Tests that absent games played has no ratio.
///
/// Expected: None
#[test]
fn absent_games_has_no_ratio() {
    assert_eq!(Multiplayer::default().win_ratio(), None);
}

/// Tests that missing wins count as zero when games were played.
///
/// Expected: Some(0.0)
#[test]
fn missing_wins_count_as_zero() -> Result<(), AppError> {
    let mut json = UserJsonFactory::new().multiplayer(5.0, 0.0).build();
    if let Some(multiplayer) = json["statistics"]["multiplayer"].as_object_mut() {
        multiplayer.remove("gamesWon");
    }

    let record = record_from(json)?;

    assert_eq!(record.statistics.multiplayer.games_won, None);
    assert_eq!(record.statistics.multiplayer.win_ratio(), Some(0.0));

    Ok(())
}
