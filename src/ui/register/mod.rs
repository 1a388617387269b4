//! Registration form, its option catalog and the browser-side client

mod benefit;
mod catalog;
mod client;
mod register_form;

pub use benefit::{BENEFITS, Benefit, BenefitTone, BenefitsAside, CLOSING_LINE};
pub use catalog::{CatalogContext, provide_catalog_context};
pub use client::{
    CATALOG_ENDPOINT, REGISTER_ENDPOINT, registration_endpoint, submit_registration,
    success_message,
};
pub use register_form::{RegisterForm, TURNSTILE_SITE_KEY};
