use super::*;

// =============================================================
// with_threshold
// =============================================================

#[test]
fn with_threshold_adds_missing_param() {
    let out = with_threshold("https://example.test/thread", 0.3, None).unwrap();
    assert_eq!(out, "https://example.test/thread?threshold=0.30");
}

#[test]
fn with_threshold_overwrites_without_duplicating() {
    let out = with_threshold("https://example.test/thread?threshold=0.10", 0.9, None).unwrap();
    assert_eq!(out, "https://example.test/thread?threshold=0.90");
    assert_eq!(out.matches("threshold=").count(), 1);
}

#[test]
fn with_threshold_collapses_repeated_params() {
    let out = with_threshold("https://example.test/t?threshold=0.1&a=1&threshold=0.2", 0.5, None).unwrap();
    assert_eq!(out, "https://example.test/t?a=1&threshold=0.50");
}

#[test]
fn with_threshold_keeps_other_pairs_encoded() {
    let href = "https://example.test/thread?thread_url=https%3A%2F%2Fwww.reddit.com%2Fr%2Frust%2Fcomments%2Fabc%2F&x=a+b";
    let out = with_threshold(href, 0.75, None).unwrap();
    assert_eq!(
        out,
        "https://example.test/thread?thread_url=https%3A%2F%2Fwww.reddit.com%2Fr%2Frust%2Fcomments%2Fabc%2F&x=a+b&threshold=0.75"
    );
}

#[test]
fn with_threshold_preserves_fragment() {
    let out = with_threshold("https://example.test/thread#c42", 0.2, None).unwrap();
    assert_eq!(out, "https://example.test/thread?threshold=0.20#c42");
}

#[test]
fn with_threshold_keeps_relative_hrefs_relative() {
    let out = with_threshold("/thread?thread_url=x", 0.3, None).unwrap();
    assert_eq!(out, "/thread?thread_url=x&threshold=0.30");
}

#[test]
fn with_threshold_resolves_relative_against_base() {
    let out = with_threshold("thread", 0.3, Some("https://example.test/app/analyze")).unwrap();
    assert_eq!(out, "/app/thread?threshold=0.30");
}

#[test]
fn with_threshold_resolves_document_relative_against_full_page_url() {
    let out = with_threshold("thread?x=1", 0.3, Some("https://host.example/app/analyze?q=2")).unwrap();
    assert_eq!(out, "/app/thread?x=1&threshold=0.30");
}

#[test]
fn with_threshold_keeps_path_absolute_hrefs_on_their_path() {
    let out = with_threshold("/thread?x=1", 0.3, Some("https://host.example/app/analyze")).unwrap();
    assert_eq!(out, "/thread?x=1&threshold=0.30");
}

#[test]
fn with_threshold_keeps_host_of_scheme_relative_hrefs() {
    let out = with_threshold("//cdn.example/thread?x=1", 0.3, None).unwrap();
    assert_eq!(out, "//cdn.example/thread?x=1&threshold=0.30");

    let out = with_threshold("//cdn.example/thread", 0.3, Some("https://host.example/app/analyze")).unwrap();
    assert_eq!(out, "//cdn.example/thread?threshold=0.30");
}

#[test]
fn with_threshold_keeps_absolute_hrefs_absolute_with_base() {
    let out = with_threshold("https://other.example/t", 0.3, Some("https://host.example/app/analyze")).unwrap();
    assert_eq!(out, "https://other.example/t?threshold=0.30");
}

#[test]
fn with_threshold_rejects_invalid_base() {
    let err = with_threshold("/thread", 0.3, Some("not a url")).unwrap_err();
    assert!(matches!(err, UiError::InvalidUrl { .. }));
}

#[test]
fn with_threshold_rejects_malformed_absolute_url() {
    let err = with_threshold("http://[::1", 0.3, None).unwrap_err();
    assert!(err.to_string().contains("invalid url"));
}

#[test]
fn with_param_encodes_reserved_characters() {
    let out = with_param("https://example.test/", "q", "a&b=c", None).unwrap();
    assert_eq!(out, "https://example.test/?q=a%26b%3Dc");
}

// =============================================================
// thread_href / legacy_thread_href
// =============================================================

#[test]
fn thread_href_encodes_thread_url() {
    let href = thread_href("https://www.reddit.com/r/rust/comments/abc/", 0.7);
    assert_eq!(
        href,
        "/thread?thread_url=https%3A%2F%2Fwww.reddit.com%2Fr%2Frust%2Fcomments%2Fabc%2F&threshold=0.70"
    );
}

#[test]
fn legacy_thread_href_carries_valid_threshold() {
    assert_eq!(
        legacy_thread_href("abc123", Some("0.4")),
        "/thread?thread_url=https%3A%2F%2Freddit.com%2Fcomments%2Fabc123&threshold=0.40"
    );
}

#[test]
fn legacy_thread_href_drops_invalid_threshold() {
    assert_eq!(
        legacy_thread_href("abc123", Some("2")),
        "/thread?thread_url=https%3A%2F%2Freddit.com%2Fcomments%2Fabc123"
    );
    assert_eq!(
        legacy_thread_href("abc123", None),
        "/thread?thread_url=https%3A%2F%2Freddit.com%2Fcomments%2Fabc123"
    );
}

// =============================================================
// extract_thread_id
// =============================================================

#[test]
fn extract_thread_id_reads_comments_segment() {
    assert_eq!(
        extract_thread_id("https://www.reddit.com/r/rust/comments/1abcd2/some_title/").as_deref(),
        Some("1abcd2")
    );
    assert_eq!(extract_thread_id("old.reddit.com/r/ask_me/comments/zz9").as_deref(), Some("zz9"));
}

#[test]
fn extract_thread_id_rejects_other_urls() {
    assert_eq!(extract_thread_id("https://example.com/r/rust/comments/abc"), None);
    assert_eq!(extract_thread_id("https://www.reddit.com/r/rust/"), None);
    assert_eq!(extract_thread_id("https://www.reddit.com/r//comments/abc"), None);
    assert_eq!(extract_thread_id("https://www.reddit.com/r/rust/comments/ABC"), None);
}
