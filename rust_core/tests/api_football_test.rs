//! API-Football Client Tests
//!
//! Runs the real `ApiFootballProvider` against a local HTTP stub on
//! 127.0.0.1, so the full request, status and decode path is exercised
//! without leaving the machine.

use std::sync::Arc;

use chrono::NaiveDate;
use halftime_core::{ApiFootballConfig, ApiFootballProvider, FetchError, FilterPipeline, FixtureDataProvider};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Team whose recent history is served successfully; every other sub-fetch fails.
const HEALTHY_TEAM: u64 = 60;

fn day_fixtures() -> Value {
    let fixtures: Vec<Value> = (1..=6u64)
        .map(|id| {
            json!({
                "fixture": {"id": id},
                "teams": {"home": {"id": id * 10}, "away": {"id": id * 10 + 1}}
            })
        })
        .collect();
    json!({ "response": fixtures })
}

fn healthy_history() -> Value {
    let fixtures: Vec<Value> = (0..4)
        .map(|_| {
            json!({
                "teams": {"home": {"id": HEALTHY_TEAM}, "away": {"id": 999}},
                "score": {"halftime": {"home": 1, "away": 0}}
            })
        })
        .collect();
    json!({ "response": fixtures })
}

async fn respond(mut socket: TcpStream) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    let request = String::from_utf8_lossy(&request);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();

    let (status, body) = if target.starts_with("/fixtures?date=") {
        ("200 OK", day_fixtures().to_string())
    } else if target.contains(&format!("team={HEALTHY_TEAM}")) {
        ("200 OK", healthy_history().to_string())
    } else {
        ("500 Internal Server Error", r#"{"errors":"boom"}"#.to_string())
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

async fn spawn_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(respond(socket));
        }
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_failing_fixtures_do_not_starve_later_ones() {
    let host = spawn_stub().await;
    let provider = ApiFootballProvider::new(ApiFootballConfig::new("test-key").with_host(host)).unwrap();
    let pipeline = FilterPipeline::new(Arc::new(provider))
        .with_max_concurrent(1)
        .with_processing_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());

    let results = pipeline.get_filtered_fixtures("2026-10-17", 4).await.unwrap();
    assert_eq!(results.len(), 6);

    // Fixtures 1-5 issued fifteen failing requests before fixture 6 ran.
    let healthy = &results[0];
    assert_eq!(healthy.record.id.to_string(), "6");
    assert_eq!(healthy.record.home.indicator.ht_goal_pct, 1.0);
    assert_eq!(healthy.score(), 100.0);
    assert!(healthy.passes());

    assert!(results[1..].iter().all(|r| r.score() == 0.0 && !r.passes()));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let host = spawn_stub().await;
    let provider = ApiFootballProvider::new(ApiFootballConfig::new("test-key").with_host(host)).unwrap();

    let err = provider.statistics_for_fixture(1).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}
