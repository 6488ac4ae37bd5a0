use crate::server::{
    error::AppError,
    model::{leaderboard::LeaderboardEntry, statistics::SingleplayerMode},
    service::{
        leaderboard::{format_leaderboard, parse_mode, EMPTY_LEADERBOARD},
        stats_api::{parse_leaderboard_response, parse_user_response, StatsApiService},
        user::{format_user_summary, user_not_found, validate_username},
    },
};
use chrono::{TimeZone, Utc};
use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
};
use test_utils::factory::{
    leaderboard::leaderboard_json,
    user::{user_json, PersonalBestJson, UserJsonFactory},
};

mod fetch_leaderboard;
mod fetch_user;

fn entry(username: &str, score: u64) -> LeaderboardEntry {
    LeaderboardEntry {
        username: username.to_string(),
        score,
    }
}

/// Serves exactly one HTTP response on a local port and returns its base URL.
///
/// The request is read up to the blank line ending its headers, then `status_line`
/// and `body` are sent and the connection is closed.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    base_url
}
