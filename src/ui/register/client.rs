//! Browser-side calls to the registration and catalog endpoints

#[cfg(feature = "hydrate")]
use crate::core::catalog::OptionSet;
use crate::core::registration::{
    RegisterVoterRequest, RegisterVoterResponse, RegistrationMode, RegistrationStatus,
    UPDATED_MESSAGE,
};

pub const REGISTER_ENDPOINT: &str = "/public/voters/register";

pub const CATALOG_ENDPOINT: &str = "/catalog";

pub const CREATED_MESSAGE: &str = "¡Gracias por registrarte! Ya eres parte del movimiento.";

const NETWORK_ERROR: &str = "Error de red. Intenta de nuevo.";

/// Registration URL; the public mode is the endpoint default and is left implicit
pub fn registration_endpoint(mode: RegistrationMode) -> String {
    match mode {
        RegistrationMode::Public => REGISTER_ENDPOINT.to_string(),
        other => format!("{}?mode={}", REGISTER_ENDPOINT, other.as_str()),
    }
}

/// Text shown after a successful submission
pub fn success_message(response: &RegisterVoterResponse) -> String {
    match response.status {
        RegistrationStatus::Created => CREATED_MESSAGE.to_string(),
        RegistrationStatus::Updated => response
            .message
            .clone()
            .unwrap_or_else(|| UPDATED_MESSAGE.to_string()),
    }
}

#[cfg(feature = "hydrate")]
pub async fn submit_registration(
    mode: RegistrationMode,
    request: &RegisterVoterRequest,
) -> Result<RegisterVoterResponse, String> {
    use gloo_net::http::Request;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let response = Request::post(&registration_endpoint(mode))
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|_| NETWORK_ERROR.to_string())?;

    if response.ok() {
        return response
            .json::<RegisterVoterResponse>()
            .await
            .map_err(|e| e.to_string());
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Error inesperado ({})", response.status())),
    }
}

#[cfg(not(feature = "hydrate"))]
pub async fn submit_registration(
    _mode: RegistrationMode,
    _request: &RegisterVoterRequest,
) -> Result<RegisterVoterResponse, String> {
    Err(NETWORK_ERROR.to_string())
}

/// Every option list from the directory in one request
#[cfg(feature = "hydrate")]
pub async fn fetch_catalog() -> Result<OptionSet, String> {
    use gloo_net::http::Request;

    let response = Request::get(CATALOG_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<OptionSet>().await.map_err(|e| e.to_string())
}

/// Token the Turnstile widget writes into its hidden input
#[cfg(feature = "hydrate")]
pub fn captcha_token() -> String {
    use leptos::prelude::document;
    use wasm_bindgen::JsCast;

    document()
        .query_selector("input[name='cf-turnstile-response']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

#[cfg(not(feature = "hydrate"))]
pub fn captcha_token() -> String {
    String::new()
}

#[cfg(feature = "hydrate")]
mod turnstile {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = turnstile, js_name = reset, catch)]
        pub fn reset() -> Result<(), JsValue>;
    }
}

/// Ask the Turnstile widget for a fresh token once the last one was sent
#[cfg(feature = "hydrate")]
pub fn reset_captcha() {
    if turnstile::reset().is_err() {
        leptos::logging::warn!("Turnstile widget not loaded, nothing to reset");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn reset_captcha() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_endpoint_by_mode() {
        assert_eq!(
            registration_endpoint(RegistrationMode::Public),
            "/public/voters/register"
        );
        assert_eq!(
            registration_endpoint(RegistrationMode::Brigadista),
            "/public/voters/register?mode=brigadista"
        );
    }

    #[test]
    fn test_success_message() {
        assert_eq!(success_message(&RegisterVoterResponse::created()), CREATED_MESSAGE);
        assert_eq!(success_message(&RegisterVoterResponse::updated()), UPDATED_MESSAGE);

        let bare = RegisterVoterResponse {
            status: RegistrationStatus::Updated,
            message: None,
        };
        assert_eq!(success_message(&bare), UPDATED_MESSAGE);
    }
}
