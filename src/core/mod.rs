//! Core domain models and business logic for public registration

#[cfg(feature = "ssr")]
pub mod api;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
pub mod registration;
