//! Address bar input resolution.
//!
//! Classifies raw URL bar input as an internal surface, an explicit web URL,
//! a bare domain, or a search query, and derives the display strings
//! (tab title, address bar text) from resolved URLs.

use url::Url;

use crate::types::tab::{BrowserView, Tab};

/// Prefix addressing built-in surfaces instead of network content.
pub const INTERNAL_SCHEME: &str = "groove://";

/// Search endpoint used for free-text input; the query is appended percent-encoded.
pub const DEFAULT_SEARCH_URL: &str = "https://www.bing.com/search?q=";

/// Where a piece of URL bar input leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Switch the active tab to a built-in surface.
    Internal(BrowserView),
    /// Load the given URL in the content frame.
    Web(String),
}

/// Resolves URL bar input against a configured search endpoint.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    search_url: String,
}

impl UrlResolver {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Resolve raw input. Returns `None` for empty or whitespace-only input.
    ///
    /// With `https_enforce`, a resolved `http://` URL is upgraded to `https://`.
    pub fn resolve(&self, input: &str, https_enforce: bool) -> Option<Resolution> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(view) = parse_internal(trimmed) {
            return Some(Resolution::Internal(view));
        }

        let mut target = if has_web_scheme(trimmed) {
            trimmed.to_string()
        } else if looks_like_domain(trimmed) {
            format!("https://{}", trimmed)
        } else {
            self.search_for(trimmed)
        };

        if https_enforce {
            target = upgrade_to_https(&target);
        }

        Some(Resolution::Web(target))
    }

    /// Build the search URL for a free-text query.
    pub fn search_for(&self, query: &str) -> String {
        format!("{}{}", self.search_url, urlencoding::encode(query))
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL)
    }
}

/// `groove://<view>` for any recognised view other than `web`.
pub fn parse_internal(input: &str) -> Option<BrowserView> {
    let name = input.strip_prefix(INTERNAL_SCHEME)?;
    BrowserView::INTERNAL
        .iter()
        .copied()
        .find(|view| view.as_str() == name)
}

/// True when the input starts with `http://` or `https://`, in any case.
pub fn has_web_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, "http://") || starts_with_ignore_case(input, "https://")
}

/// Bare-domain check: one or more `label.` segments, a TLD of at least two
/// ASCII letters, then optionally a `/path`.
pub fn looks_like_domain(input: &str) -> bool {
    let host = match input.find('/') {
        Some(slash) => &input[..slash],
        None => input,
    };

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let (tld, rest) = match labels.split_last() {
        Some(parts) => parts,
        None => return false,
    };

    let labels_ok = rest.iter().all(|label| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let tld_ok = tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic());

    // The path may contain anything except a line terminator.
    let path_ok = !input[host.len()..].contains(['\n', '\r', '\u{2028}', '\u{2029}']);

    labels_ok && tld_ok && path_ok
}

/// Rewrite a leading `http://` (any case) to `https://`; other URLs pass through.
pub fn upgrade_to_https(url: &str) -> String {
    if starts_with_ignore_case(url, "http://") {
        format!("https://{}", &url["http://".len()..])
    } else {
        url.to_string()
    }
}

/// Tab title for a URL: its host, or the raw string when it has none or
/// does not parse.
pub fn host_title(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| url.to_string())
}

/// Host plus path, dropping a bare `/` path. Unparsable input is returned as is.
pub fn prettify_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(u) => {
            let host = u.host_str().unwrap_or("");
            if u.path() == "/" {
                host.to_string()
            } else {
                format!("{}{}", host, u.path())
            }
        }
        Err(_) => url.to_string(),
    }
}

/// Text the address bar shows for a tab that is not being edited.
pub fn address_bar_text(tab: &Tab) -> String {
    match tab.view {
        BrowserView::Web if !tab.url.is_empty() => prettify_url(&tab.url),
        BrowserView::Web | BrowserView::Home => String::new(),
        view => format!("{}{}", INTERNAL_SCHEME, view),
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
