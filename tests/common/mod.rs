#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use moviebot::catalog::CatalogClient;
use moviebot::dialog::IntentEvent;
use moviebot::CatalogConfig;
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";
pub const FIRST_ID: u64 = 100;

pub fn raw_event(intent: &str, source: &str, category: Option<&str>) -> Value {
    json!({
        "currentIntent": {
            "name": intent,
            "slots": { "category": category },
            "confirmationStatus": "None"
        },
        "invocationSource": source,
        "sessionAttributes": null,
        "userId": "user-1",
        "inputTranscript": "show me movies"
    })
}

pub fn event(intent: &str, source: &str, category: Option<&str>) -> IntentEvent {
    serde_json::from_value(raw_event(intent, source, category)).unwrap()
}

pub fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(API_KEY).with_base_url(server.base_url()))
}

/// `count` movies with ids FIRST_ID.. and whole-number ratings.
pub fn listing(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("Movie {}", i),
                "id": FIRST_ID + i as u64,
                "poster_path": format!("/poster{}.jpg", i),
                "vote_average": 7.0,
                "overview": "ignored"
            })
        })
        .collect();
    json!({ "page": 1, "results": results, "total_pages": 1 })
}

pub async fn mock_listing<'a>(server: &'a MockServer, path: &str, body: Value) -> Mock<'a> {
    let path = path.to_string();
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path(path)
                .query_param("api_key", API_KEY)
                .query_param("page", "1");
            then.status(200).json_body(body);
        })
        .await
}

/// Provider lookup for one movie that has a US entry.
pub async fn mock_provider(server: &MockServer, id: u64) -> Mock<'_> {
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path(format!("/movie/{}/watch/providers", id))
                .query_param("api_key", API_KEY);
            then.status(200).json_body(json!({
                "id": id,
                "results": {
                    "US": { "link": format!("https://watch.example/{}", id) },
                    "GB": { "link": format!("https://watch.example/gb/{}", id) }
                }
            }));
        })
        .await
}

pub async fn mock_providers(server: &MockServer, count: usize) -> Vec<Mock<'_>> {
    let mut mocks = Vec::with_capacity(count);
    for i in 0..count {
        mocks.push(mock_provider(server, FIRST_ID + i as u64).await);
    }
    mocks
}
