use super::*;

/// Tests fetching a leaderboard.
///
/// Expected: entries in rank order
#[tokio::test]
async fn fetches_leaderboard_rows() -> Result<(), AppError> {
    let base_url = serve_once(
        "200 OK",
        r#"[{"username":"alice","statistics":{"score":9000}}]"#,
    );
    let http_client = reqwest::Client::new();

    let entries = StatsApiService::new(&http_client, &base_url)
        .fetch_leaderboard(SingleplayerMode::Easy)
        .await?;

    assert_eq!(entries, vec![entry("alice", 9000)]);

    Ok(())
}

/// Tests that a missing leaderboard is an error rather than an empty list.
///
/// Expected: Err(AppError::ReqwestErr)
#[tokio::test]
async fn reports_not_found_leaderboard() {
    let base_url = serve_once("404 Not Found", "\"Not Found.\"");
    let http_client = reqwest::Client::new();

    let result = StatsApiService::new(&http_client, &base_url)
        .fetch_leaderboard(SingleplayerMode::Standard)
        .await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}
