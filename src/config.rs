use log::{debug, warn};
use serde::Deserialize;
use web_sys::window;

use crate::auth::FixedCredentials;

/// `<script id="app-config" type="application/json">` in index.html.
const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the logged-in flag.
    pub storage_key: String,
    pub credentials: FixedCredentials,
    /// Simulated latency of the credential check.
    pub check_delay_ms: u32,
    /// Refresh period of the home page clock.
    pub clock_tick_ms: u32,
    pub brand_initials: String,
    pub brand_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "loggedIn".into(),
            credentials: FixedCredentials::default(),
            check_delay_ms: 1000,
            clock_tick_ms: 1000,
            brand_initials: "ME".into(),
            brand_name: "Mundo Escolar".into(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults, overridden by whatever the embedded JSON block names.
    /// A missing or broken block never stops the app from starting.
    pub fn load() -> Self {
        let Some(json) = config_json_from_dom() else {
            debug!("no #{CONFIG_ELEMENT_ID} block, using defaults");
            return Self::default();
        };
        Self::from_json(&json).unwrap_or_else(|e| {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            Self::default()
        })
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let text = el.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
