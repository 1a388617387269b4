//! Common reusable UI components
//!
//! Field primitives, status messages and the submit button shared by the
//! registration form.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{ConsentCheckbox, InputField, SelectField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingButton};
