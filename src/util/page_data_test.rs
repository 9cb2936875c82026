use super::*;
use crate::state::thread::{AnalyzedComment, Toxicity};

#[test]
fn encode_payload_escapes_closing_script_tags() {
    let payload = ThreadPayload {
        thread_url: "https://www.reddit.com/r/rust/comments/abc/".to_owned(),
        threshold: 0.7,
        comments: vec![AnalyzedComment {
            id: "c1".to_owned(),
            body: "</script><script>alert(1)</script>".to_owned(),
            toxicity: Toxicity { score: 0.95, is_toxic: true, ..Toxicity::default() },
            ..AnalyzedComment::default()
        }],
        ..ThreadPayload::default()
    };
    let encoded = encode_payload(&payload).unwrap();
    assert!(!encoded.contains("</"));

    let decoded = decode_payload(&encoded).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn decode_payload_reports_malformed_json() {
    let err = decode_payload("{not json").unwrap_err();
    assert!(matches!(err, UiError::PayloadDecode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_embedded_is_none_outside_browser() {
    assert!(load_embedded().is_none());
}
