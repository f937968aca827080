//! Help URL composition

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::HelpConfig;
use crate::encode::{encode_component, encode_json};

/// Something that can point at its own explainer page
pub trait Helpful {
    /// Derive the help URL from the current state
    fn help_url(&self, config: &HelpConfig) -> String;
}

/// The `cause` query payload: who failed upstream and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseSummary {
    pub name: String,
    pub message: String,
    /// Only set when the cause is itself part of the taxonomy
    #[serde(rename = "helpUrl", skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

impl CauseSummary {
    /// Summary of a foreign error without a help URL
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            help_url: None,
        }
    }

    /// Attach the cause's own help URL
    pub fn with_help_url(mut self, help_url: impl Into<String>) -> Self {
        self.help_url = Some(help_url.into());
        self
    }
}

/// Compose the explainer URL.
///
/// Segments always appear in the order message, data, cause. The data
/// segment is left out when `data` is absent or empty, the cause segment
/// when there is no cause. A `cause` key inside `data` is never encoded.
pub fn compose_help_url(
    config: &HelpConfig,
    code: u32,
    message: &str,
    data: Option<&Map<String, Value>>,
    cause: Option<&CauseSummary>,
) -> String {
    let mut url = format!("{}?message={}", config.endpoint(code), encode_component(message));

    if let Some(data) = data {
        let data: Map<String, Value> = data
            .iter()
            .filter(|(key, _)| key.as_str() != "cause")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if !data.is_empty() {
            match encode_json(&data) {
                Ok(encoded) => {
                    url.push_str("&data=");
                    url.push_str(&encoded);
                }
                Err(e) => tracing::warn!(code, error = %e, "dropping unencodable help data"),
            }
        }
    }

    if let Some(cause) = cause {
        match encode_json(cause) {
            Ok(encoded) => {
                url.push_str("&cause=");
                url.push_str(&encoded);
            }
            Err(e) => tracing::warn!(code, error = %e, "dropping unencodable help cause"),
        }
    }

    url
}
