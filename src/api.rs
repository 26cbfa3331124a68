// API client module: contains a small blocking HTTP client that talks to
// the VoiceOver control server. It is intentionally small and synchronous;
// the server is local and every call is part of a step-by-step script.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Error message used whenever the server cannot be reached at all.
const CONNECT_FAILURE: &str = "Could not connect to VoiceOver server. Make sure it's running.";

/// Uniform record every endpoint call resolves to. The server reports
/// failures in-band (`success=false` plus `error`), and transport failures
/// are folded into the same shape, so callers never handle a second error
/// channel.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VoiceOverResponse {
    pub success: bool,
    pub message: Option<String>,
    pub current_item: Option<String>,
    pub responses: Option<Vec<String>>,
    pub error: Option<String>,
    /// Only present on `/health` replies.
    pub voice_over_running: Option<bool>,
}

impl VoiceOverResponse {
    fn failure(error: impl Into<String>) -> Self {
        VoiceOverResponse {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the VoiceOver control server.
#[derive(Clone)]
pub struct VoiceOverClient {
    client: Client,
    base_url: String,
}

impl VoiceOverClient {
    /// Create a client configured from the environment variable
    /// `VOICEOVER_SERVER_URL` or fallback to `http://localhost:3000`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("VOICEOVER_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());
        Self::new(&base_url)
    }

    /// Create a client for an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().context("Failed to build HTTP client")?;
        Ok(VoiceOverClient {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Perform one call against the server and normalize the reply.
    ///
    /// Connection failures and unparseable replies come back as a failure
    /// record rather than an error; the scripted callers only ever branch
    /// on the record. POST bodies default to an empty JSON object.
    fn request(&self, method: Method, path: &str, payload: Option<Value>) -> VoiceOverResponse {
        let url = format!("{}{}", &self.base_url, path);
        let builder = if method == Method::GET {
            self.client.get(&url)
        } else {
            self.client.post(&url).json(&payload.unwrap_or_else(|| json!({})))
        };

        let res = match builder.send() {
            Ok(res) => res,
            Err(e) if e.is_connect() => return VoiceOverResponse::failure(CONNECT_FAILURE),
            Err(e) => return VoiceOverResponse::failure(e.to_string()),
        };

        let status = res.status();
        match res.json::<VoiceOverResponse>() {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                VoiceOverResponse::failure(format!("server returned HTTP {}", status))
            }
            Err(e) => VoiceOverResponse::failure(e.to_string()),
        }
    }

    /// Check server health. The reply carries `voice_over_running`.
    pub fn health_check(&self) -> VoiceOverResponse {
        self.request(Method::GET, "/health", None)
    }

    /// Start VoiceOver.
    pub fn start_voiceover(&self) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/start", None)
    }

    /// Stop VoiceOver.
    pub fn stop_voiceover(&self) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/stop", None)
    }

    /// Type text into the focused control.
    pub fn type_text(&self, text: &str) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/type", Some(json!({ "text": text })))
    }

    /// Move the VoiceOver cursor to the next element.
    pub fn navigate_next(&self) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/next", None)
    }

    /// Move the VoiceOver cursor to the previous element.
    pub fn navigate_previous(&self) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/previous", None)
    }

    /// Read the item the VoiceOver cursor is currently on.
    pub fn current_item(&self) -> VoiceOverResponse {
        self.request(Method::GET, "/voiceover/current", None)
    }

    /// Activate the focused item.
    pub fn click_current(&self) -> VoiceOverResponse {
        self.request(Method::POST, "/voiceover/click", None)
    }

    /// Ask the system to open an application by name.
    pub fn open_app(&self, app_name: &str) -> VoiceOverResponse {
        self.request(Method::POST, "/system/open-app", Some(json!({ "appName": app_name })))
    }

    /// Press a single key.
    pub fn press_key(&self, key: &str) -> VoiceOverResponse {
        self.request(Method::POST, "/system/press-key", Some(json!({ "key": key })))
    }

    /// Combined server-side operation: open Copilot, send `message`, and
    /// collect whatever response lines the reader announced.
    pub fn open_copilot_and_send_message(&self, message: &str) -> VoiceOverResponse {
        self.request(
            Method::POST,
            "/operations/open-copilot-and-send-message",
            Some(json!({ "message": message })),
        )
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
