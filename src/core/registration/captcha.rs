//! Cloudflare Turnstile verification

use serde::Deserialize;
use std::time::Duration;

pub const TURNSTILE_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Tokens shorter than this are rejected without calling Turnstile
const MIN_TOKEN_LEN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum CaptchaError {
    #[error("Captcha inválido o faltante")]
    Missing,

    #[error("Captcha inválido")]
    Invalid(Vec<String>),

    #[error("Error validando captcha")]
    Unavailable(String),

    #[error("Captcha no configurado en el servidor")]
    NotConfigured,
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

#[derive(Clone)]
pub struct CaptchaVerifier {
    client: reqwest::Client,
    secret: Option<String>,
    bypass: bool,
    verify_url: String,
}

impl CaptchaVerifier {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret,
            bypass: false,
            verify_url: TURNSTILE_VERIFY_URL.to_string(),
        }
    }

    /// Verifier that accepts every token (local development and tests)
    pub fn bypass() -> Self {
        Self {
            bypass: true,
            ..Self::new(None)
        }
    }

    pub fn with_verify_url(mut self, url: impl Into<String>) -> Self {
        self.verify_url = url.into();
        self
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    pub async fn verify(&self, token: &str, remote_ip: &str) -> Result<(), CaptchaError> {
        if self.bypass {
            return Ok(());
        }

        let token = token.trim();
        if token.len() < MIN_TOKEN_LEN {
            return Err(CaptchaError::Missing);
        }

        let secret = self
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(CaptchaError::NotConfigured)?;

        let response = self
            .client
            .post(&self.verify_url)
            .timeout(VERIFY_TIMEOUT)
            .form(&[
                ("secret", secret),
                ("response", token),
                ("remoteip", remote_ip),
            ])
            .send()
            .await
            .map_err(|e| CaptchaError::Unavailable(e.to_string()))?;

        let result: SiteVerifyResponse = response
            .json()
            .await
            .map_err(|e| CaptchaError::Unavailable(e.to_string()))?;

        if result.success {
            Ok(())
        } else {
            Err(CaptchaError::Invalid(result.error_codes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Form, Json, Router, routing::post};
    use std::collections::HashMap;

    /// Local stand-in for siteverify: accepts only the token "valid-token-123"
    async fn spawn_siteverify() -> String {
        async fn siteverify(Form(form): Form<HashMap<String, String>>) -> Json<serde_json::Value> {
            let ok = form.get("secret").map(String::as_str) == Some("test-secret")
                && form.get("response").map(String::as_str) == Some("valid-token-123");
            if ok {
                Json(serde_json::json!({ "success": true }))
            } else {
                Json(serde_json::json!({
                    "success": false,
                    "error-codes": ["invalid-input-response"]
                }))
            }
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/siteverify", post(siteverify));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/siteverify", addr)
    }

    #[tokio::test]
    async fn test_bypass_accepts_anything() {
        let verifier = CaptchaVerifier::bypass();
        assert!(verifier.is_bypassed());
        assert!(verifier.verify("", "127.0.0.1").await.is_ok());
    }

    #[tokio::test]
    async fn test_short_token_is_missing() {
        let verifier = CaptchaVerifier::new(Some("test-secret".to_string()));
        assert!(matches!(
            verifier.verify("short", "127.0.0.1").await,
            Err(CaptchaError::Missing)
        ));
        assert!(matches!(
            verifier.verify("          ", "127.0.0.1").await,
            Err(CaptchaError::Missing)
        ));
    }

    #[tokio::test]
    async fn test_missing_secret_is_not_configured() {
        let verifier = CaptchaVerifier::new(None);
        assert!(matches!(
            verifier.verify("valid-token-123", "127.0.0.1").await,
            Err(CaptchaError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_siteverify_success_and_failure() {
        let url = spawn_siteverify().await;
        let verifier = CaptchaVerifier::new(Some("test-secret".to_string())).with_verify_url(url);

        assert!(verifier.verify("valid-token-123", "203.0.113.7").await.is_ok());

        match verifier.verify("forged-token-456", "203.0.113.7").await {
            Err(CaptchaError::Invalid(codes)) => {
                assert_eq!(codes, vec!["invalid-input-response".to_string()])
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let verifier = CaptchaVerifier::new(Some("test-secret".to_string()))
            .with_verify_url(format!("http://{}/siteverify", addr));

        assert!(matches!(
            verifier.verify("valid-token-123", "127.0.0.1").await,
            Err(CaptchaError::Unavailable(_))
        ));
    }
}
