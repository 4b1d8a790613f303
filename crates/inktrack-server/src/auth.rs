use axum::http::HeaderMap;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::AppError;
use crate::state::AppState;

pub const AUTH_COOKIE: &str = "inktrack_auth";

/// Live session token. There is exactly one owner, so one token at a time;
/// logging in again invalidates the previous session.
#[derive(Debug, Default)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    pub fn issue(&mut self) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        self.token = Some(token.clone());
        token
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }
}

/// Extract the session token from the request's `Cookie` header.
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get("cookie")?.to_str().ok()?;
    for part in cookies.split(';') {
        if let Some(val) = part.trim().strip_prefix("inktrack_auth=") {
            return Some(val.to_string());
        }
    }
    None
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/")
}

/// `Set-Cookie` value clearing the session.
pub fn clear_cookie() -> String {
    format!("{AUTH_COOKIE}=; Max-Age=0; HttpOnly; SameSite=Lax; Path=/")
}

/// True when the request carries the current session token.
pub async fn is_authenticated(app: &AppState, headers: &HeaderMap) -> bool {
    match cookie_token(headers) {
        Some(token) => app.auth.read().await.is_valid(&token),
        None => false,
    }
}

/// Gate for mutating routes: returns the owner identity or 401.
pub async fn require_owner(app: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    if is_authenticated(app, headers).await {
        Ok(app.config.owner.clone())
    } else {
        Err(AppError::unauthorized("owner login required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_validate_token() {
        let mut auth = AuthState::default();
        assert!(!auth.is_valid("anything"));

        let token = auth.issue();
        assert_eq!(token.len(), 32);
        assert!(auth.is_valid(&token));

        // Re-issuing invalidates the previous session.
        let fresh = auth.issue();
        assert!(!auth.is_valid(&token));
        assert!(auth.is_valid(&fresh));

        auth.clear();
        assert!(!auth.is_valid(&fresh));
    }

    #[test]
    fn cookie_token_parses_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            "theme=dark; inktrack_auth=abc123; lang=en".parse().unwrap(),
        );
        assert_eq!(cookie_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn cookie_token_absent() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("cookie", "theme=dark".parse().unwrap());
        assert_eq!(cookie_token(&headers), None);
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("tok");
        assert!(cookie.contains("inktrack_auth=tok"));
        assert!(cookie.contains("HttpOnly"));
        assert!(clear_cookie().contains("Max-Age=0"));
    }
}
