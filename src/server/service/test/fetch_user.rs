use super::*;

/// Tests the backend answering an unknown user with 404 and a not-found body.
///
/// Verifies that the status does not turn the reply into a generic error.
///
/// Expected: Ok(None), reported to the user as missing play data
#[tokio::test]
async fn treats_not_found_status_as_absent_user() -> Result<(), AppError> {
    let base_url = serve_once("404 Not Found", "\"Not Found.\"");
    let http_client = reqwest::Client::new();

    let record = StatsApiService::new(&http_client, &base_url)
        .fetch_user("nobody")
        .await?;

    assert!(record.is_none());
    assert!(user_not_found("nobody")
        .user_message()
        .starts_with("Error: Play data for user nobody does not exist."));

    Ok(())
}

/// Tests a 404 whose body is not JSON at all.
///
/// Expected: Ok(None)
#[tokio::test]
async fn treats_not_found_page_as_absent_user() -> Result<(), AppError> {
    let base_url = serve_once("404 Not Found", "<h1>Not Found</h1>");
    let http_client = reqwest::Client::new();

    let record = StatsApiService::new(&http_client, &base_url)
        .fetch_user("nobody")
        .await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests the not-found body sent with a success status.
///
/// Expected: Ok(None)
#[tokio::test]
async fn treats_not_found_body_as_absent_user() -> Result<(), AppError> {
    let base_url = serve_once("200 OK", "\"Not Found.\"");
    let http_client = reqwest::Client::new();

    let record = StatsApiService::new(&http_client, &base_url)
        .fetch_user("nobody")
        .await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests a regular user document.
///
/// Expected: Ok(Some) with the document's username
#[tokio::test]
async fn fetches_existing_user() -> Result<(), AppError> {
    let base_url = serve_once("200 OK", r#"{"username":"mathwiz","statistics":{}}"#);
    let http_client = reqwest::Client::new();

    let record = StatsApiService::new(&http_client, &base_url)
        .fetch_user("mathwiz")
        .await?;

    assert_eq!(record.map(|r| r.username), Some("mathwiz".to_string()));

    Ok(())
}

/// Tests a backend failure.
///
/// Expected: Err(AppError::ReqwestErr), shown to the user as the generic error
#[tokio::test]
async fn reports_server_error() {
    let base_url = serve_once("500 Internal Server Error", "\"boom\"");
    let http_client = reqwest::Client::new();

    let result = StatsApiService::new(&http_client, &base_url)
        .fetch_user("mathwiz")
        .await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}
