//! Table-driven tests for URL bar input resolution.

use groove::services::url_resolver::{
    address_bar_text, looks_like_domain, prettify_url, Resolution, UrlResolver,
    DEFAULT_SEARCH_URL,
};
use groove::types::tab::{BrowserView, Tab};
use rstest::rstest;

fn web(url: &str) -> Option<Resolution> {
    Some(Resolution::Web(url.to_string()))
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("  github.com/rust-lang  ", "https://github.com/rust-lang")]
#[case("sub.domain.co.uk", "https://sub.domain.co.uk")]
#[case("https://example.com/a?b=c", "https://example.com/a?b=c")]
#[case("HTTPS://Example.com", "HTTPS://Example.com")]
fn test_urls_resolve_to_web(#[case] input: &str, #[case] expected: &str) {
    let resolver = UrlResolver::default();
    assert_eq!(resolver.resolve(input, true), web(expected));
}

#[rstest]
#[case("hello world", "hello%20world")]
#[case("rust", "rust")]
#[case("localhost", "localhost")]
#[case("a&b=c", "a%26b%3Dc")]
#[case("example.com:8080", "example.com%3A8080")]
fn test_free_text_becomes_search(#[case] input: &str, #[case] encoded: &str) {
    let resolver = UrlResolver::default();
    let expected = format!("{}{}", DEFAULT_SEARCH_URL, encoded);
    assert_eq!(resolver.resolve(input, true), web(&expected));
}

#[test]
fn test_http_upgraded_only_when_enforced() {
    let resolver = UrlResolver::default();
    assert_eq!(
        resolver.resolve("http://example.com", true),
        web("https://example.com")
    );
    assert_eq!(
        resolver.resolve("http://example.com", false),
        web("http://example.com")
    );
}

#[rstest]
#[case("groove://settings", BrowserView::Settings)]
#[case("groove://home", BrowserView::Home)]
#[case("groove://reading-list", BrowserView::ReadingList)]
#[case("groove://bookmarks", BrowserView::Bookmarks)]
fn test_internal_scheme(#[case] input: &str, #[case] view: BrowserView) {
    let resolver = UrlResolver::default();
    assert_eq!(resolver.resolve(input, true), Some(Resolution::Internal(view)));
}

#[test]
fn test_unknown_internal_view_falls_through_to_search() {
    let resolver = UrlResolver::default();
    let resolved = resolver.resolve("groove://web", true);
    assert_eq!(
        resolved,
        web(&format!("{}groove%3A%2F%2Fweb", DEFAULT_SEARCH_URL))
    );
}

#[test]
fn test_blank_input_is_ignored() {
    let resolver = UrlResolver::default();
    assert_eq!(resolver.resolve("", true), None);
    assert_eq!(resolver.resolve("   \t ", true), None);
}

#[test]
fn test_custom_search_endpoint() {
    let resolver = UrlResolver::new("https://duckduckgo.com/?q=");
    assert_eq!(
        resolver.resolve("privacy tools", false),
        web("https://duckduckgo.com/?q=privacy%20tools")
    );
}

#[test]
fn test_prettify() {
    assert_eq!(prettify_url("https://example.com/"), "example.com");
    assert_eq!(prettify_url("https://example.com/docs/intro"), "example.com/docs/intro");
    assert_eq!(prettify_url("garbage"), "garbage");
}

fn tab_with(view: BrowserView, url: &str) -> Tab {
    Tab {
        id: "tab_1".to_string(),
        url: url.to_string(),
        title: String::new(),
        view,
        history: Vec::new(),
        history_index: -1,
    }
}

#[test]
fn test_address_bar_text_per_view() {
    assert_eq!(
        address_bar_text(&tab_with(BrowserView::Web, "https://wikipedia.org/wiki/Rust")),
        "wikipedia.org/wiki/Rust"
    );
    assert_eq!(address_bar_text(&tab_with(BrowserView::Home, "https://a.io")), "");
    assert_eq!(
        address_bar_text(&tab_with(BrowserView::History, "")),
        "groove://history"
    );
}

#[rstest]
#[case("example.com/a\nb")]
#[case("example.com/a\rb")]
#[case("example.com/a\u{2028}b")]
#[case("example.com/a\u{2029}b")]
fn test_line_terminator_in_path_is_not_a_domain(#[case] input: &str) {
    assert!(!looks_like_domain(input));
    assert!(looks_like_domain("example.com/a b"));
}
