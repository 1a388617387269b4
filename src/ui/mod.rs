pub mod common;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod register;

pub use icon::{Icon, icons};
