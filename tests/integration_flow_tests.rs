// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! End-to-end tests for the question/answer flow against a mock backend.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use askline::backend::BackendClient;
use askline::chat::{ChatController, Sender, Submission, ERROR_MESSAGE};

async fn controller_for(server: &MockServer) -> ChatController {
    ChatController::new(BackendClient::new(server.uri()).unwrap())
}

#[tokio::test]
async fn test_question_and_answer_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .and(body_json(json!({"query": "life?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "42",
            "confidence": 0.99,
            "suggestions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_query("life?").await;

    let messages = controller.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "life?");
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].text, "42");
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_eq!(messages[1].confidence, Some(0.99));
}

#[tokio::test]
async fn test_user_message_appended_even_when_backend_down() {
    // Port 9 is the discard port; connections are refused.
    let mut controller = ChatController::new(BackendClient::new("http://127.0.0.1:9").unwrap());
    controller.send_query("anyone there?").await;

    let messages = controller.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "anyone there?");
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].text, ERROR_MESSAGE);
    assert_eq!(messages[1].sender, Sender::Bot);
}

#[tokio::test]
async fn test_server_error_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_query("boom").await;

    let last = controller.transcript().messages().last().unwrap();
    assert_eq!(last.text, ERROR_MESSAGE);
}

#[tokio::test]
async fn test_malformed_body_renders_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_query("hello").await;

    let last = controller.transcript().messages().last().unwrap();
    assert_eq!(last.text, ERROR_MESSAGE);
}

#[tokio::test]
async fn test_suggestion_activation_issues_new_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .and(body_json(json!({"query": "pasword"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Did you mean:",
            "confidence": 0.4,
            "suggestions": [
                ["How do I reset my password?", "Use the reset link.", 0.55],
                ["tell me more", null, 0.3]
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .and(body_json(json!({"query": "How do I reset my password?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Use the reset link.",
            "suggestions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_query("pasword").await;

    let suggestions = controller.transcript().active_suggestions();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].label, "How do I reset my password?");

    // Activating the suggestion submits its label as the next query.
    let request = match controller.activate_suggestion(0) {
        Submission::Dispatched(request) => request,
        other => panic!("expected dispatch, got {:?}", other),
    };
    let outcome = controller.client().get_answer(&request.query).await;
    controller.complete(request.seq, outcome);

    let messages = controller.transcript().messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[2].text, "How do I reset my password?");
    assert_eq!(messages[2].sender, Sender::User);
    assert_eq!(messages[3].text, "Use the reset link.");
    // The earlier suggestion list is superseded by the plain answer.
    assert!(controller.transcript().active_suggestions().is_empty());
}

#[tokio::test]
async fn test_empty_input_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "nope"})))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.send_query("").await;
    controller.send_query("   ").await;

    assert!(controller.transcript().is_empty());
}

#[tokio::test]
async fn test_queued_submissions_answered_in_order() {
    let server = MockServer::start().await;
    for (q, a) in [("one", "a1"), ("two", "a2"), ("three", "a3")] {
        Mock::given(method("POST"))
            .and(path("/get_answer"))
            .and(body_json(json!({"query": q})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": a})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut controller = controller_for(&server).await;
    let first = match controller.submit("one") {
        Submission::Dispatched(request) => request,
        other => panic!("expected dispatch, got {:?}", other),
    };
    assert_eq!(controller.submit("two"), Submission::Queued { position: 1 });
    assert_eq!(controller.submit("three"), Submission::Queued { position: 2 });

    // Drive the queue to completion one request at a time.
    let mut next = Some(first);
    while let Some(request) = next {
        let outcome = controller.client().get_answer(&request.query).await;
        next = controller.complete(request.seq, outcome);
    }

    let bot_texts: Vec<&str> = controller
        .transcript()
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::Bot)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(bot_texts, vec!["a1", "a2", "a3"]);
}

#[tokio::test]
async fn test_failure_does_not_stall_the_queue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .and(body_json(json!({"query": "bad"})))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get_answer"))
        .and(body_json(json!({"query": "good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server).await;
    controller.submit("bad");
    controller.submit("good");
    controller.send_query("").await; // no-op

    // Drive manually: the failed request still dispatches the queued one.
    let mut next = controller.complete(0, Err(askline::error::BackendError::Status { status: 500 }));
    while let Some(request) = next.take() {
        let outcome = controller.client().get_answer(&request.query).await;
        next = controller.complete(request.seq, outcome);
    }

    let bot_texts: Vec<&str> = controller
        .transcript()
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::Bot)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(bot_texts, vec![ERROR_MESSAGE, "ok"]);
}
