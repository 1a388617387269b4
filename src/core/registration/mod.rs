//! Public registration: form schema, wire contract and the server pipeline

mod form;
mod request;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod captcha;
#[cfg(feature = "ssr")]
pub mod service;
#[cfg(feature = "ssr")]
pub mod store;

pub use form::{
    CONSENT_POLICY_LINK_TEXT, CONSENT_PREFIX, CONSENT_STATEMENT, CharClass, FIELD_ROWS,
    FIELD_SPECS, FieldError, FieldKind, FieldName, FieldSpec, RegistrationDraft, field_spec,
};
pub use request::{
    RegisterVoterRequest, RegisterVoterResponse, RegistrationMode, RegistrationStatus,
    UPDATED_MESSAGE, ValidationError,
};

#[cfg(feature = "ssr")]
pub use api::{ClientContext, RegistrationApiState, registration_router};
#[cfg(feature = "ssr")]
pub use captcha::{CaptchaError, CaptchaVerifier};
#[cfg(feature = "ssr")]
pub use service::{ConsentContext, RegistrationError, RegistrationService};
#[cfg(feature = "ssr")]
pub use store::{MemoryVoterStore, UpsertOutcome, VoterStore, VoterStoreError};
