mod common;

use common::*;
use httpmock::prelude::*;
use moviebot::dialog::{DialogAction, FulfillmentState};
use moviebot::fulfillment::WELCOME_GREETING;
use moviebot::{FulfillmentHandler, HandlerError, InvocationContext};
use serde_json::json;

fn handler(server: &MockServer) -> FulfillmentHandler {
    FulfillmentHandler::new(client(server))
}

#[tokio::test]
async fn test_welcome_ignores_phase_and_slots() {
    let server = MockServer::start_async().await;
    let handler = handler(&server);

    for (source, category) in [
        ("DialogCodeHook", None),
        ("FulfillmentCodeHook", Some("2")),
        ("DialogCodeHook", Some("garbage")),
    ] {
        let response = handler.dispatch(&event("Welcome", source, category)).await.unwrap();
        match response.dialog_action {
            DialogAction::Close {
                fulfillment_state,
                message,
                response_card,
            } => {
                assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
                assert_eq!(message.content, WELCOME_GREETING);
                let card = response_card.expect("suggestion card");
                assert_eq!(card.generic_attachments[0].title, "I can help you with:");
                assert_eq!(card.generic_attachments[0].sub_title, "choose an option");
                assert_eq!(card.buttons().len(), 1);
                assert_eq!(card.buttons()[0].text, "Recommending Movies");
                assert_eq!(card.buttons()[0].value, "suggest movies");
            }
            other => panic!("Expected Close, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_unknown_intent_is_an_error() {
    let server = MockServer::start_async().await;

    let err = handler(&server)
        .dispatch(&event("OrderPizza", "DialogCodeHook", None))
        .await
        .unwrap_err();

    match &err {
        HandlerError::UnsupportedIntent { name } => assert_eq!(name, "OrderPizza"),
        other => panic!("Expected UnsupportedIntent, got {:?}", other),
    }
    assert_eq!(err.kind(), "UnsupportedIntent");
    assert_eq!(err.to_string(), "Intent with name OrderPizza not supported");
}

#[tokio::test]
async fn test_intent_names_match_exactly() {
    let server = MockServer::start_async().await;
    let handler = handler(&server);

    for name in ["welcome", "recommendmovie", "RecommendMovie ", ""] {
        let result = handler.dispatch(&event(name, "DialogCodeHook", Some("1"))).await;
        assert!(
            matches!(result, Err(HandlerError::UnsupportedIntent { .. })),
            "{:?} should not route",
            name
        );
    }
}

#[tokio::test]
async fn test_handle_full_round_trip() {
    let server = MockServer::start_async().await;
    let _listing = mock_listing(&server, "/trending/movie/day", listing(2)).await;
    let _providers = mock_providers(&server, 2).await;

    let response = handler(&server)
        .handle(
            raw_event("RecommendMovie", "FulfillmentCodeHook", Some("4")),
            &InvocationContext::default(),
        )
        .await
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["sessionAttributes"], json!({}));
    assert_eq!(value["dialogAction"]["type"], "Close");
    assert_eq!(value["dialogAction"]["fulfillmentState"], "Fulfilled");
    assert_eq!(
        value["dialogAction"]["message"]["content"],
        "The movies trending today are:"
    );
    assert_eq!(
        value["dialogAction"]["responseCard"]["genericAttachments"][1],
        json!({
            "title": "Movie 1",
            "subTitle": "Rating: 7.0",
            "imageUrl": "https://image.tmdb.org/t/p/original/poster1.jpg",
            "attachmentLinkUrl": format!("https://watch.example/{}", FIRST_ID + 1)
        })
    );
}

#[tokio::test]
async fn test_handle_echoes_session_attributes() {
    let server = MockServer::start_async().await;
    let raw = json!({
        "currentIntent": { "name": "RecommendMovie", "slots": { "category": "1" } },
        "invocationSource": "DialogCodeHook",
        "sessionAttributes": { "visits": "3" }
    });

    let response = handler(&server)
        .handle(raw, &InvocationContext { request_id: Some("req-1".into()) })
        .await
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["sessionAttributes"], json!({ "visits": "3" }));
    assert_eq!(
        value["dialogAction"],
        json!({ "type": "Delegate", "slots": { "category": "1" } })
    );
}

#[tokio::test]
async fn test_handle_missing_session_and_slots() {
    let server = MockServer::start_async().await;
    let raw = json!({
        "currentIntent": { "name": "RecommendMovie", "slots": null },
        "invocationSource": "DialogCodeHook"
    });

    let response = handler(&server)
        .handle(raw, &InvocationContext::default())
        .await
        .unwrap();

    assert!(response.session_attributes.is_empty());
    match response.dialog_action {
        DialogAction::ElicitSlot { slots, slot_to_elicit, .. } => {
            assert_eq!(slot_to_elicit, "category");
            assert_eq!(slots.get("category"), Some(&None));
        }
        other => panic!("Expected ElicitSlot, got {:?}", other),
    }
}

#[tokio::test]
async fn test_handle_rejects_malformed_event() {
    let server = MockServer::start_async().await;
    let handler = handler(&server);

    let bad_source = json!({
        "currentIntent": { "name": "Welcome", "slots": {} },
        "invocationSource": "SomethingElse"
    });
    let err = handler
        .handle(bad_source, &InvocationContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HandlerError::InvalidEvent(_)), "got {:?}", err);

    let err = handler
        .handle(json!({ "invocationSource": "DialogCodeHook" }), &InvocationContext::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "InvalidEvent");
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let server = MockServer::start_async().await;
    let _listing = server
        .mock_async(|when, then| {
            when.method(GET).path("/movie/now_playing");
            then.status(500);
        })
        .await;

    let err = handler(&server)
        .dispatch(&event("RecommendMovie", "FulfillmentCodeHook", Some("3")))
        .await
        .unwrap_err();

    assert!(matches!(err, HandlerError::UpstreamUnavailable(_)), "got {:?}", err);
    assert_eq!(err.kind(), "UpstreamUnavailable");
}

#[tokio::test]
async fn test_log_context_fields_are_decoded() {
    let server = MockServer::start_async().await;
    let raw = json!({
        "currentIntent": {
            "name": "Welcome",
            "slots": {},
            "confirmationStatus": "Confirmed"
        },
        "invocationSource": "FulfillmentCodeHook",
        "userId": "user-42",
        "inputTranscript": "hi there"
    });

    let event: moviebot::dialog::IntentEvent = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(event.user_id.as_deref(), Some("user-42"));
    assert_eq!(event.input_transcript.as_deref(), Some("hi there"));
    assert_eq!(event.current_intent.confirmation_status.as_deref(), Some("Confirmed"));

    let response = handler(&server)
        .handle(raw, &InvocationContext::default())
        .await
        .unwrap();
    assert!(matches!(response.dialog_action, DialogAction::Close { .. }));
}
