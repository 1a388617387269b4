//! Registration API endpoints
//!
//! - POST /public/voters/register?mode=public|brigadista - register or update a voter

use axum::{
    Json, Router,
    extract::{
        ConnectInfo, FromRequestParts, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::core::api::ApiError;
use crate::core::registration::captcha::CaptchaError;
use crate::core::registration::service::{ConsentContext, RegistrationError, RegistrationService};
use crate::core::registration::{
    RegisterVoterRequest, RegisterVoterResponse, RegistrationMode, ValidationError,
};

/// Registration API state containing the registration service
#[derive(Clone)]
pub struct RegistrationApiState {
    pub service: RegistrationService,
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RegistrationError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                match err {
                    ValidationError::Length { .. } => "INVALID_LENGTH",
                    ValidationError::NotNumeric(_) => "NOT_NUMERIC",
                    ValidationError::ConsentRequired => "CONSENT_REQUIRED",
                },
            ),
            RegistrationError::Captcha(err) => match err {
                CaptchaError::Missing => (StatusCode::BAD_REQUEST, "CAPTCHA_MISSING"),
                CaptchaError::Invalid(_) => (StatusCode::BAD_REQUEST, "CAPTCHA_INVALID"),
                CaptchaError::Unavailable(_) => (StatusCode::BAD_GATEWAY, "CAPTCHA_UNAVAILABLE"),
                CaptchaError::NotConfigured => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "CAPTCHA_NOT_CONFIGURED")
                }
            },
            RegistrationError::UnknownOption(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_OPTION")
            }
            RegistrationError::InvalidNeighborhood => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_NEIGHBORHOOD")
            }
            RegistrationError::NeighborhoodMismatch => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NEIGHBORHOOD_MISMATCH")
            }
            RegistrationError::Directory(_) | RegistrationError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        ApiError::respond(status, self.to_string(), code)
    }
}

/// Malformed requests, rejected before they reach the service
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Modo de registro inválido")]
    InvalidMode(#[from] QueryRejection),

    #[error("Solicitud inválida: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            RequestError::Registration(err) => err.into_response(),
            RequestError::InvalidMode(_) => {
                ApiError::respond(StatusCode::BAD_REQUEST, self.to_string(), "INVALID_MODE")
            }
            RequestError::InvalidBody(ref rejection) => {
                ApiError::respond(rejection.status(), self.to_string(), "INVALID_BODY")
            }
        }
    }
}

/// Caller address and browser, recorded as consent evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub ip: String,
    pub user_agent: String,
}

/// First `X-Forwarded-For` hop, else the socket peer, else `unknown`
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

impl<S: Send + Sync> FromRequestParts<S> for ClientContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0);

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            ip: client_ip(&parts.headers, peer),
            user_agent,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ModeParams {
    #[serde(default)]
    pub mode: RegistrationMode,
}

/// Create the registration API router
pub fn registration_router(state: RegistrationApiState) -> Router {
    Router::new()
        .route("/public/voters/register", post(register_handler))
        .with_state(Arc::new(state))
}

/// POST /public/voters/register
async fn register_handler(
    State(state): State<Arc<RegistrationApiState>>,
    params: Result<Query<ModeParams>, QueryRejection>,
    client: ClientContext,
    body: Result<Json<RegisterVoterRequest>, JsonRejection>,
) -> Result<Json<RegisterVoterResponse>, RequestError> {
    let Query(params) = params.inspect_err(|err| {
        tracing::warn!("Rejected registration query from {}: {}", client.ip, err);
    })?;
    let Json(request) = body.inspect_err(|err| {
        tracing::warn!("Rejected registration body from {}: {}", client.ip, err);
    })?;

    tracing::info!("Registration attempt from {} (mode={})", client.ip, params.mode.as_str());

    let context = ConsentContext {
        ip: client.ip,
        user_agent: client.user_agent,
        mode: params.mode,
    };

    let response = state.service.register(request, &context).await?;

    Ok(Json(response))
}
