//! RPC method handler for the Groove JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches one call to the `App` controller and returns
//! the JSON result.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::url_resolver::Resolution;
use crate::types::download::DownloadStatus;
use crate::types::tab::BrowserView;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn require_str<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    str_param(params, name).ok_or_else(|| format!("missing {}", name))
}

fn view_param(params: &Value) -> Result<Option<BrowserView>, String> {
    match str_param(params, "view") {
        Some(name) => name.parse().map(Some),
        None => Ok(None),
    }
}

/// Like `view_param`, but only built-in surfaces are accepted.
fn internal_view_param(params: &Value) -> Result<Option<BrowserView>, String> {
    match view_param(params)? {
        Some(view) if !BrowserView::INTERNAL.contains(&view) => {
            Err(format!("not an internal view: {}", view))
        }
        other => Ok(other),
    }
}

fn status_param(params: &Value) -> Result<DownloadStatus, String> {
    let raw = params.get("status").ok_or("missing status")?;
    serde_json::from_value(raw.clone()).map_err(|e| format!("invalid status: {}", e))
}

fn tab_state(app: &App) -> Value {
    json!({
        "tabs": app.tabs(),
        "activeTabId": app.active_tab_id(),
        "activeTab": app.active_tab(),
        "addressBar": app.address_bar_text(),
        "secure": app.is_secure(),
        "loading": app.is_loading(),
        "bookmarked": app.is_active_bookmarked(),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Session ───
        "state.snapshot" => {
            let mut state = tab_state(&a);
            state["settings"] = json!(a.settings());
            state["counters"] = json!(a.counters());
            state["bookmarks"] = json!(a.bookmarks());
            state["history"] = json!(a.history());
            state["readingList"] = json!(a.reading_list.list());
            state["downloads"] = json!(a.download_manager.list());
            state["frame"] = json!(a.frame_descriptor());
            state["searchUrl"] = json!(a.resolver().search_url());
            Ok(state)
        }
        "state.reset" => {
            a.reset_all_data().map_err(|e| e.to_string())?;
            Ok(tab_state(&a))
        }

        // ─── Tabs ───
        "tab.create" => {
            let url = str_param(params, "url").filter(|u| !u.is_empty());
            let view = match url {
                Some(_) => view_param(params)?,
                None => internal_view_param(params)?,
            };
            let id = a.new_tab(url, view);
            Ok(json!({"id": id}))
        }
        "tab.close" => {
            let id = require_str(params, "id")?;
            let closed = a.close_tab(id);
            let mut state = tab_state(&a);
            state["closed"] = json!(closed);
            Ok(state)
        }
        "tab.close_active" => {
            let closed = a.close_active_tab();
            let mut state = tab_state(&a);
            state["closed"] = json!(closed);
            Ok(state)
        }
        "tab.switch" => {
            let id = require_str(params, "id")?;
            let switched = a.switch_tab(id);
            let mut state = tab_state(&a);
            state["switched"] = json!(switched);
            Ok(state)
        }
        "tab.list" => Ok(json!({
            "tabs": a.tabs(),
            "activeTabId": a.active_tab_id(),
        })),
        "tab.active" => Ok(tab_state(&a)),

        // ─── Navigation ───
        "navigate" => {
            let input = require_str(params, "input")?;
            let outcome = match a.navigate(input) {
                None => json!({"kind": "ignored"}),
                Some(Resolution::Internal(view)) => json!({"kind": "internal", "view": view}),
                Some(Resolution::Web(url)) => json!({"kind": "web", "url": url}),
            };
            let mut state = tab_state(&a);
            state["outcome"] = outcome;
            Ok(state)
        }
        "nav.back" => {
            a.go_back();
            Ok(tab_state(&a))
        }
        "nav.forward" => {
            let moved = a.go_forward();
            let mut state = tab_state(&a);
            state["moved"] = json!(moved);
            Ok(state)
        }
        "nav.reload" => {
            let reloaded = a.reload();
            let mut state = tab_state(&a);
            state["reloaded"] = json!(reloaded);
            Ok(state)
        }
        "view.open" => {
            let view = internal_view_param(params)?.ok_or("missing view")?;
            a.open_view(view);
            Ok(tab_state(&a))
        }
        "frame.descriptor" => Ok(json!(a.frame_descriptor())),

        // ─── Bookmarks ───
        "bookmark.toggle" => {
            let bookmarked = a.toggle_bookmark().ok_or("active tab has no page to bookmark")?;
            Ok(json!({"bookmarked": bookmarked}))
        }
        "bookmark.remove" => {
            let url = require_str(params, "url")?;
            Ok(json!({"removed": a.remove_bookmark(url)}))
        }
        "bookmark.list" => Ok(json!(a.bookmarks())),

        // ─── Reading list ───
        "reading_list.add" => {
            let outcome = a
                .add_to_reading_list()
                .ok_or("active tab has no page to save")?;
            Ok(json!({"result": outcome}))
        }
        "reading_list.remove" => {
            let id = require_str(params, "id")?;
            Ok(json!({"removed": a.remove_from_reading_list(id)}))
        }
        "reading_list.list" => Ok(json!(a.reading_list.list())),

        // ─── History ───
        "history.list" => {
            let limit = params.get("limit").and_then(|v| v.as_u64());
            let entries = match limit {
                Some(n) => a.recent_history(n as usize),
                None => a.history(),
            };
            Ok(json!(entries))
        }
        "history.delete" => {
            let url = require_str(params, "url")?;
            Ok(json!({"removed": a.delete_history_entry(url)}))
        }
        "history.clear" => {
            a.clear_history();
            Ok(json!({"ok": true}))
        }

        // ─── Downloads ───
        "download.add" => {
            let name = require_str(params, "name")?;
            let url = require_str(params, "url")?;
            let size = str_param(params, "size").unwrap_or("");
            let status = status_param(params)?;
            let id = a.add_download(name, url, status, size);
            Ok(json!({"id": id}))
        }
        "download.update" => {
            let id = require_str(params, "id")?;
            let status = status_param(params)?;
            Ok(json!({"updated": a.update_download(id, status)}))
        }
        "download.remove" => {
            let id = require_str(params, "id")?;
            Ok(json!({"removed": a.remove_download(id)}))
        }
        "download.clear" => {
            a.clear_downloads();
            Ok(json!({"ok": true}))
        }
        "download.list" => Ok(json!(a.download_manager.list())),

        // ─── Settings ───
        "settings.get" => Ok(json!(a.settings())),
        "settings.set" => {
            let key = require_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!(a.settings()))
        }
        "settings.toggle" => {
            let key = require_str(params, "key")?;
            let enabled = a.toggle_setting(key).map_err(|e| e.to_string())?;
            Ok(json!({"key": key, "value": enabled}))
        }
        "settings.reset" => {
            a.reset_settings();
            Ok(json!(a.settings()))
        }

        // ─── Privacy shield ───
        "privacy.counters" => Ok(json!(a.counters())),

        _ => Err(format!("unknown method: {}", method)),
    }
}
