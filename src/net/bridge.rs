//! Configuration and session-identity bridge. Two read-only configuration
//! values come from the environment with an empty-string default; session
//! identity is delegated to an external provider, with a fixed mock payload
//! when the auth-disabled flag is set (local development only).

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

pub const CHAT_API_BASE_VAR: &str = "DEUTSCHMEISTER_CHAT_API_BASE";
pub const TUTOR_API_URL_VAR: &str = "DEUTSCHMEISTER_TUTOR_API_URL";
pub const AUTH_DISABLED_VAR: &str = "DEUTSCHMEISTER_AUTH_DISABLED";
pub const IDENTITY_URL_VAR: &str = "DEUTSCHMEISTER_IDENTITY_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEndpoint {
    #[serde(rename = "apiBase")]
    pub api_base: String,
}

#[allow(dead_code)] // the bridge's second config read; no screen consumes it yet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorEndpoint {
    #[serde(rename = "apiUrl")]
    pub api_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user: SessionUser,
    pub expires: String,
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

pub fn chat_endpoint() -> ChatEndpoint {
    chat_endpoint_from(env_lookup)
}

/// Lookup is injectable so tests don't have to mutate the process
/// environment.
pub fn chat_endpoint_from(get: impl Fn(&str) -> Option<String>) -> ChatEndpoint {
    ChatEndpoint { api_base: get(CHAT_API_BASE_VAR).unwrap_or_default() }
}

#[allow(dead_code)]
pub fn tutor_endpoint() -> TutorEndpoint {
    tutor_endpoint_from(env_lookup)
}

#[allow(dead_code)]
pub fn tutor_endpoint_from(get: impl Fn(&str) -> Option<String>) -> TutorEndpoint {
    TutorEndpoint { api_url: get(TUTOR_API_URL_VAR).unwrap_or_default() }
}

/// The fixed identity served while auth is disabled: a local user with a
/// 30-day expiry from now, RFC 3339.
pub fn mock_session() -> SessionIdentity {
    SessionIdentity {
        user: SessionUser {
            name: "Local User".to_string(),
            email: "local@deutschmeister.app".to_string(),
        },
        expires: (Utc::now() + Duration::days(30)).to_rfc3339(),
    }
}

pub fn resolve_session() -> Option<SessionIdentity> {
    resolve_session_from(env_lookup)
}

/// Mock wins only when the flag equals the literal string "true"; any other
/// value delegates to the provider. A missing or failing provider means
/// signed-out, never an error.
pub fn resolve_session_from(get: impl Fn(&str) -> Option<String>) -> Option<SessionIdentity> {
    if get(AUTH_DISABLED_VAR).as_deref() == Some("true") {
        return Some(mock_session());
    }
    let base = get(IDENTITY_URL_VAR)?;
    if base.is_empty() {
        return None;
    }
    fetch_delegated_session(&base)
}

#[cfg(feature = "network")]
fn fetch_delegated_session(base: &str) -> Option<SessionIdentity> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .ok()?;
    let response = client.get(format!("{base}/session")).send().ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<SessionIdentity>().ok()
}

#[cfg(not(feature = "network"))]
fn fetch_delegated_session(_base: &str) -> Option<SessionIdentity> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn endpoints_default_to_empty_string() {
        let chat = chat_endpoint_from(|_| None);
        assert_eq!(chat.api_base, "");
        let tutor = tutor_endpoint_from(|_| None);
        assert_eq!(tutor.api_url, "");
    }

    #[test]
    fn endpoints_read_their_own_variables() {
        let env = env_of(&[
            (CHAT_API_BASE_VAR, "https://example.test/v1"),
            (TUTOR_API_URL_VAR, "https://tutor.test"),
        ]);
        assert_eq!(chat_endpoint_from(&env).api_base, "https://example.test/v1");
        assert_eq!(tutor_endpoint_from(&env).api_url, "https://tutor.test");
    }

    #[test]
    fn payload_keys_are_camel_case() {
        let chat = ChatEndpoint { api_base: "x".into() };
        assert_eq!(serde_json::to_string(&chat).unwrap(), r#"{"apiBase":"x"}"#);
        let tutor = TutorEndpoint { api_url: "y".into() };
        assert_eq!(serde_json::to_string(&tutor).unwrap(), r#"{"apiUrl":"y"}"#);
    }

    #[test]
    fn mock_session_only_for_literal_true() {
        let on = env_of(&[(AUTH_DISABLED_VAR, "true")]);
        let identity = resolve_session_from(&on).unwrap();
        assert_eq!(identity.user.name, "Local User");
        assert_eq!(identity.user.email, "local@deutschmeister.app");

        for value in ["TRUE", "1", "yes", ""] {
            let pairs = [(AUTH_DISABLED_VAR, value)];
            let env = env_of(&pairs);
            assert!(resolve_session_from(&env).is_none(), "flag {value:?} must not mock");
        }
        assert!(resolve_session_from(|_| None).is_none());
    }

    #[test]
    fn mock_expiry_is_thirty_days_out() {
        let identity = mock_session();
        let expires = chrono::DateTime::parse_from_rfc3339(&identity.expires).unwrap();
        let delta = expires.with_timezone(&Utc) - Utc::now();
        assert!(delta > Duration::days(29));
        assert!(delta <= Duration::days(30));
    }

    #[test]
    fn session_payload_round_trips() {
        let identity = mock_session();
        let json = serde_json::to_string(&identity).unwrap();
        let back: SessionIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, back);
        assert!(json.contains(r#""user""#));
        assert!(json.contains(r#""expires""#));
    }
}
