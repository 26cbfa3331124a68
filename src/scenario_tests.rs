use super::*;
use crate::api::VoiceOverClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn keyword_match_is_case_insensitive() {
    assert!(keywords_match("Show More options", &["show more"]));
    assert!(keywords_match("SHOW MORE", &["show more"]));
    assert!(!keywords_match("show less", &["show more"]));
}

#[test]
fn keyword_match_requires_every_keyword() {
    assert!(keywords_match("Upload a file, button", &["upload", "file"]));
    assert!(keywords_match("drag FILE here to UPLOAD", &["upload", "file"]));
    assert!(!keywords_match("Upload photo, button", &["upload", "file"]));
}

#[test]
fn keyword_match_fires_on_substrings_not_whole_words() {
    assert!(keywords_match("uploading files", &["upload", "file"]));
    assert!(keywords_match("hero banner, image", &[", image"]));
}

#[tokio::test]
async fn seek_gives_up_after_the_attempt_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voiceover/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "currentItem": "Toolbar"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/voiceover/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(5)
        .mount(&server)
        .await;

    let uri = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let client = VoiceOverClient::new(&uri).unwrap();
        seek_focus(&client, &["show more"], 5, Duration::ZERO)
    })
    .await
    .unwrap();

    assert_eq!(outcome, SeekOutcome::Exhausted);
    server.verify().await;
}

#[tokio::test]
async fn seek_reports_the_matching_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voiceover/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "currentItem": "Show more, button"})),
        )
        .mount(&server)
        .await;
    // A match on the first poll never advances focus.
    Mock::given(method("POST"))
        .and(path("/voiceover/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let client = VoiceOverClient::new(&uri).unwrap();
        seek_focus(&client, &["show more"], 5, Duration::ZERO)
    })
    .await
    .unwrap();

    assert_eq!(outcome, SeekOutcome::Found("Show more, button".to_string()));
    server.verify().await;
}

#[tokio::test]
async fn seek_stops_when_the_focus_poll_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/voiceover/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "no cursor"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/voiceover/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let client = VoiceOverClient::new(&uri).unwrap();
        seek_focus(&client, &["upload", "file"], 5, Duration::ZERO)
    })
    .await
    .unwrap();

    assert_eq!(outcome, SeekOutcome::Failed("no cursor".to_string()));
    server.verify().await;
}

#[tokio::test]
async fn walkthrough_stops_when_the_reader_cannot_start() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"voiceOverRunning": false})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/voiceover/start"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "error": "VoiceOver not supported"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // A failed start must abort the script before the app is ever opened.
    Mock::given(method("POST"))
        .and(path("/system/open-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = VoiceOverClient::new(&uri).unwrap();
        run_walkthrough(&client);
    })
    .await
    .unwrap();

    server.verify().await;
}

#[tokio::test]
async fn walkthrough_stops_when_the_health_check_fails() {
    let server = MockServer::start().await;
    // No /health mock mounted: the poll comes back as a plain 404 page.
    Mock::given(method("POST"))
        .and(path("/voiceover/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = VoiceOverClient::new(&uri).unwrap();
        run_walkthrough(&client);
    })
    .await
    .unwrap();

    server.verify().await;
}
