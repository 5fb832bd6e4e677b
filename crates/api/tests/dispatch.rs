//! Tests for the dispatcher: envelope choice, status handling and the
//! JSON fallback. These drive [`BufferedResponse`] directly, no router.

use std::fmt;

use assert_matches::assert_matches;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use restwrap_api::dispatch::{send, send_json, Responder};
use restwrap_api::serializer::JsonSerializer;
use restwrap_api::writer::BufferedResponse;
use restwrap_core::{CoreError, EmitError};
use serde_json::json;

#[derive(Debug)]
struct LookupError(&'static str);

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn body(writer: &BufferedResponse) -> &str {
    std::str::from_utf8(writer.body().expect("body written")).unwrap()
}

// ---------------------------------------------------------------------------
// Success path
// ---------------------------------------------------------------------------

#[test]
fn success_without_cursor_is_exact_envelope() {
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, json!({"id": 1}), "", None, 200).unwrap();

    assert_eq!(writer.status(), Some(StatusCode::OK));
    assert_eq!(body(&writer), r#"{"success":true,"result":{"id":1}}"#);
    assert_eq!(
        writer.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn success_with_cursor_includes_next() {
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, vec![1, 2], "abc", None, 200).unwrap();

    let text = body(&writer);
    assert!(text.contains(r#""result":[1,2]"#), "body was {text}");
    assert!(text.contains(r#""next":"abc""#), "body was {text}");
}

#[test]
fn success_status_is_not_modified() {
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, "made", "", None, 201).unwrap();
    assert_eq!(writer.status(), Some(StatusCode::CREATED));

    // Even a 4xx hint is trusted on the success path.
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, "odd but allowed", "", None, 418).unwrap();
    assert_eq!(writer.status(), Some(StatusCode::IM_A_TEAPOT));
    assert!(body(&writer).starts_with(r#"{"success":true"#));
}

// ---------------------------------------------------------------------------
// Error path
// ---------------------------------------------------------------------------

#[test]
fn error_with_unset_status_becomes_500() {
    let err = LookupError("database unreachable");
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, (), "", Some(&err), 0).unwrap();

    assert_eq!(writer.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        body(&writer),
        r#"{"success":false,"error":"database unreachable"}"#
    );
}

#[test]
fn error_with_2xx_hint_becomes_500() {
    let err = LookupError("oops");
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, (), "", Some(&err), 200).unwrap();
    assert_eq!(writer.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn error_with_4xx_hint_keeps_status() {
    let err = CoreError::NotFound {
        entity: "Item",
        id: 9,
    };
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, (), "", Some(&err), 404).unwrap();

    assert_eq!(writer.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        body(&writer),
        r#"{"success":false,"error":"Item with id 9 not found"}"#
    );
}

#[test]
fn error_with_invalid_hint_becomes_500() {
    let err = LookupError("bad hint");
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, (), "", Some(&err), 1000).unwrap();
    assert_eq!(writer.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn error_wins_over_result_and_cursor() {
    let err = LookupError("nope");
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, json!({"id": 1}), "abc", Some(&err), 400).unwrap();

    let value: serde_json::Value = serde_json::from_str(body(&writer)).unwrap();
    assert_eq!(value, json!({"success": false, "error": "nope"}));
}

// ---------------------------------------------------------------------------
// Serializer fallback and Responder
// ---------------------------------------------------------------------------

#[test]
fn missing_serializer_behaves_like_json() {
    let err = LookupError("gone");
    let cases: [(serde_json::Value, &str, Option<&dyn fmt::Display>, u16); 3] = [
        (json!({"id": 1}), "", None, 200),
        (json!([1, 2]), "abc", None, 206),
        (json!(null), "", Some(&err), 0),
    ];

    for (result, cursor, err, status) in cases {
        let mut fallback = BufferedResponse::new();
        send(None::<&JsonSerializer>, &mut fallback, &result, cursor, err, status).unwrap();

        let mut explicit = BufferedResponse::new();
        send(Some(&JsonSerializer), &mut explicit, &result, cursor, err, status).unwrap();

        assert_eq!(fallback.status(), explicit.status());
        assert_eq!(fallback.headers(), explicit.headers());
        assert_eq!(fallback.body(), explicit.body());
    }
}

#[test]
fn send_outcome_maps_result_variants() {
    let responder: Responder = Responder::default();

    let mut ok = BufferedResponse::new();
    let outcome: Result<u32, CoreError> = Ok(7);
    responder.send_outcome(&mut ok, outcome, "", 200).unwrap();
    assert_eq!(body(&ok), r#"{"success":true,"result":7}"#);

    let mut failed = BufferedResponse::new();
    let outcome: Result<u32, CoreError> = Err(CoreError::Conflict("taken".into()));
    responder.send_outcome(&mut failed, outcome, "", 200).unwrap();
    assert_eq!(failed.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        body(&failed),
        r#"{"success":false,"error":"Conflict: taken"}"#
    );
}

#[test]
fn second_send_on_same_stream_is_rejected() {
    let mut writer = BufferedResponse::new();
    send_json(&mut writer, 1, "", None, 200).unwrap();

    let err = LookupError("late");
    let second = send_json(&mut writer, (), "", Some(&err), 500);

    assert_matches!(second, Err(EmitError::Committed));
    assert_eq!(writer.status(), Some(StatusCode::OK));
    assert_eq!(body(&writer), r#"{"success":true,"result":1}"#);
}

#[tokio::test]
async fn concurrent_sends_do_not_interfere() {
    let handles: Vec<_> = (0..32u32)
        .map(|n| {
            tokio::spawn(async move {
                let mut writer = BufferedResponse::new();
                let cursor = if n % 2 == 0 { n.to_string() } else { String::new() };
                send_json(&mut writer, n, &cursor, None, 200).unwrap();
                (n, writer)
            })
        })
        .collect();

    for handle in handles {
        let (n, writer) = handle.await.unwrap();
        let value: serde_json::Value = serde_json::from_str(body(&writer)).unwrap();
        assert_eq!(value["result"], n);
        assert_eq!(value.get("next").is_some(), n % 2 == 0);
    }
}
