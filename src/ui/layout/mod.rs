//! Page chrome: background watermark, navbar and footer

mod footer;
mod navbar;
mod watermark;

pub use footer::Footer;
pub use navbar::{Logo, Navbar};
pub use watermark::{Bloom, LOGO_PATH, WATERMARK_MARKS, WatermarkMark, WatermarkTiled};
