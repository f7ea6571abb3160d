#[path = "../common/mod.rs"]
mod common;

use common::{sample_payload, SAMPLE_JSON};
use newsdesk::content::SchemaError;
use newsdesk::generator::extract::{extract_json, parse_content};
use newsdesk::generator::GenerationError;

#[test]
fn extracts_json_tagged_fence() {
    let response = "Here you go:\n```json\n{\"a\": 1}\n```\nEnjoy!";

    assert_eq!(extract_json(response), "{\"a\": 1}");
}

#[test]
fn extracts_untagged_fence() {
    let response = "```\n{\"a\": 1}\n```";

    assert_eq!(extract_json(response), "{\"a\": 1}");
}

#[test]
fn prefers_json_fence_over_earlier_plain_fence() {
    let response = "```\nnot this\n```\n\n```json\n{\"a\": 2}\n```";

    assert_eq!(extract_json(response), "{\"a\": 2}");
}

#[test]
fn falls_back_to_raw_text() {
    let response = "  {\"a\": 3}\n";

    assert_eq!(extract_json(response), "{\"a\": 3}");
}

#[test]
fn unclosed_fence_falls_back_to_raw_text() {
    let response = "```json\n{\"a\": 4}";

    assert_eq!(extract_json(response), response);
}

#[test]
fn fenced_and_bare_responses_parse_identically() {
    let fenced = format!("Sure! Here is the newsletter:\n\n```json\n{}\n```\n", SAMPLE_JSON);

    let from_fence = parse_content(&fenced).expect("Fenced response should parse");
    let from_bare = parse_content(SAMPLE_JSON).expect("Bare response should parse");

    assert_eq!(from_fence, from_bare);
    assert_eq!(from_bare, sample_payload());
}

#[test]
fn untagged_fence_parses() {
    let fenced = format!("```\n{}\n```", SAMPLE_JSON);

    let payload = parse_content(&fenced).expect("Fenced response should parse");
    assert_eq!(payload.sections.len(), 5);
}

#[test]
fn rejects_response_without_json() {
    let err = parse_content("I'm sorry, I can't help with that.")
        .expect_err("Expected invalid JSON error");

    match err {
        GenerationError::InvalidJson(_) => {}
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_empty_response() {
    let err = parse_content("  \n ").expect_err("Expected no content error");

    match err {
        GenerationError::NoContent => {}
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_json_of_wrong_shape() {
    let err = parse_content("```json\n{\"title\": \"only\"}\n```")
        .expect_err("Expected invalid JSON error");

    assert!(matches!(err, GenerationError::InvalidJson(_)));
}

#[test]
fn rejects_blank_required_field_as_schema_error() {
    let response = SAMPLE_JSON.replace("\"John Lubbock\"", "\"\"");

    let err = parse_content(&response).expect_err("Expected schema error");

    match err {
        GenerationError::Schema(inner) => {
            assert_eq!(inner, SchemaError::BlankField("quoteAuthor"))
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}
