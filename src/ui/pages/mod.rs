//! Application pages module
//!
//! - Register page (home)
//! - Not found page (router fallback)

mod not_found;
mod register;

pub use not_found::NotFoundPage;
pub use register::RegisterPage;
