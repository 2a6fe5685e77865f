//! Description of the sandboxed frame that renders web content.

use serde::Serialize;

use crate::types::settings::BrowserSettings;
use crate::types::tab::{BrowserView, Tab};

/// Capabilities granted to every content frame.
const BASE_SANDBOX: [&str; 3] = ["allow-same-origin", "allow-forms", "allow-popups"];

/// Granted only while scripting is enabled.
const SCRIPTS_CAPABILITY: &str = "allow-scripts";

/// What the UI shell needs to mount the external rendering surface.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    pub src: String,
    /// Sandbox tokens, in attribute order.
    pub sandbox: Vec<String>,
    pub desktop_mode: bool,
}

impl FrameDescriptor {
    /// Space-separated sandbox attribute value.
    pub fn sandbox_attribute(&self) -> String {
        self.sandbox.join(" ")
    }
}

/// Frame for the tab, or `None` when it shows a built-in surface.
pub fn frame_for(tab: &Tab, settings: &BrowserSettings) -> Option<FrameDescriptor> {
    if tab.view != BrowserView::Web || tab.url.is_empty() {
        return None;
    }

    let mut sandbox: Vec<String> = BASE_SANDBOX.iter().map(|s| s.to_string()).collect();
    if settings.js_enabled {
        sandbox.push(SCRIPTS_CAPABILITY.to_string());
    }

    Some(FrameDescriptor {
        src: tab.url.clone(),
        sandbox,
        desktop_mode: settings.desktop_mode,
    })
}

/// Whether the address bar shows the secure-connection lock.
pub fn is_secure(url: &str) -> bool {
    url.starts_with("https")
}
