mod common;

use book_digger::book::{Book, SearchResult, NO_AUTHOR};
use book_digger::provider::api::google::{fetch, Client};
use book_digger::provider::error::{FetchError, ParseError};
use common::{Reply, closed_base_url, serve_once, serve_silently};
use std::time::{Duration, Instant};

#[test]
fn fetch_parses_ok_response() {
    let server = serve_once(Reply::ok(
        r#"{"totalItems":23,"items":[{"volumeInfo":{"title":"Dog Care","authors":["J. Smith"]}}]}"#,
    ));

    let result = fetch(&server.base_url, "dogs", 0).unwrap();

    assert_eq!(
        result,
        SearchResult::new(23, vec![Book::new("Dog Care".to_owned(), "J. Smith".to_owned(), None)])
    );
    assert_eq!(server.request_lines(), vec!["GET /volumes?q=dogs&startIndex=0 HTTP/1.1".to_owned()]);
}

#[test]
fn fetch_encodes_query_and_start_index() {
    let server = serve_once(Reply::ok(r#"{"totalItems":0}"#));

    let result = fetch(&server.base_url, "harry potter & co", 30).unwrap();

    assert!(result.is_empty());
    assert_eq!(
        server.request_lines(),
        vec!["GET /volumes?q=harry%20potter%20%26%20co&startIndex=30 HTTP/1.1".to_owned()]
    );
}

#[test]
fn fetch_with_zero_total_is_empty_success() {
    let server = serve_once(Reply::ok(r#"{"kind":"books#volumes","totalItems":0}"#));

    let result = fetch(&server.base_url, "zzzzqqq", 0).unwrap();

    assert_eq!(result, SearchResult::empty());
}

#[test]
fn fetch_title_only_item_uses_defaults() {
    let server = serve_once(Reply::ok(r#"{"totalItems":1,"items":[{"volumeInfo":{"title":"Bare"}}]}"#));

    let result = fetch(&server.base_url, "bare", 0).unwrap();

    assert_eq!(result.books()[0].author(), NO_AUTHOR);
    assert_eq!(result.books()[0].thumbnail_url(), None);
}

#[test]
fn fetch_malformed_body_is_invalid_response() {
    let server = serve_once(Reply::ok("not json"));

    let err = fetch(&server.base_url, "", 0).unwrap_err();

    assert!(matches!(err, FetchError::InvalidResponse(ParseError::Malformed(_))));
    assert_eq!(server.request_lines(), vec!["GET /volumes?q=&startIndex=0 HTTP/1.1".to_owned()]);
}

#[test]
fn fetch_item_without_title_is_invalid_response() {
    let server = serve_once(Reply::ok(r#"{"totalItems":5,"items":[{"volumeInfo":{"authors":["X"]}}]}"#));

    let err = fetch(&server.base_url, "x", 0).unwrap_err();

    assert!(matches!(err, FetchError::InvalidResponse(ParseError::InvalidItem { index: 0, .. })));
}

#[test]
fn fetch_non_ok_status_skips_parsing() {
    let server = serve_once(Reply::status(
        "404 Not Found",
        r#"{"totalItems":3,"items":[{"volumeInfo":{"title":"Hidden"}}]}"#,
    ));

    let err = fetch(&server.base_url, "dogs", 0).unwrap_err();

    assert_eq!(err, FetchError::HttpStatus(404));
}

#[test]
fn fetch_server_error_status_is_reported() {
    let server = serve_once(Reply::status("503 Service Unavailable", "not json either"));

    let err = fetch(&server.base_url, "dogs", 10).unwrap_err();

    assert_eq!(err, FetchError::HttpStatus(503));
}

#[test]
fn fetch_refused_connection_is_network_error() {
    let err = fetch(&closed_base_url(), "dogs", 0).unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[test]
fn fetch_read_timeout_is_network_error() {
    let server = serve_silently(Duration::from_secs(3));
    let client = Client::new(server.base_url.clone())
        .with_timeouts(Duration::from_millis(500), Duration::from_millis(300));

    let started = Instant::now();
    let err = client.fetch("slow", 0).unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn fetch_connect_timeout_is_bounded() {
    // 라우팅되지 않는 주소라 연결이 지연되거나 즉시 실패한다.
    let client = Client::new("http://10.255.255.1:81/volumes?q=")
        .with_timeouts(Duration::from_millis(300), Duration::from_millis(300));

    let started = Instant::now();
    let err = client.fetch("dogs", 0).unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn fetch_invalid_base_url_is_rejected() {
    let err = fetch("not a url?q=", "dogs", 0).unwrap_err();

    assert!(matches!(err, FetchError::InvalidUrl(_)));
}
