//! Reference-data catalog: option tables, directory service and API

mod options;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod directory;

pub use options::{
    CatalogCategory, CatalogOption, CatalogQuery, OptionSet, SEARCH_LIMIT, static_options,
};

#[cfg(feature = "ssr")]
pub use api::{CatalogApiState, catalog_router};
#[cfg(feature = "ssr")]
pub use directory::{Directory, DirectoryError};
