//! Reference-data directory
//!
//! The service the form and the registration endpoint consult for
//! "given a category, the current list of {id, label} options". The static
//! variant serves the configured tables; the Postgres variant reads the
//! reference tables.

use crate::core::catalog::{CatalogCategory, CatalogOption, CatalogQuery, OptionSet, static_options};
use crate::core::db::repositories::{CatalogRepository, CatalogRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Catalog lookup failed: {0}")]
    Lookup(#[from] CatalogRepositoryError),
}

#[derive(Clone)]
pub enum Directory {
    Static,
    Postgres(CatalogRepository),
}

impl Directory {
    pub fn kind(&self) -> &'static str {
        match self {
            Directory::Static => "static",
            Directory::Postgres(_) => "postgres",
        }
    }

    pub async fn options(&self, query: &CatalogQuery) -> Result<Vec<CatalogOption>, DirectoryError> {
        match self {
            Directory::Static => Ok(query.apply(static_options(query.category))),
            Directory::Postgres(repo) => Ok(repo.list(query).await?),
        }
    }

    /// Unfiltered lists of every category
    pub async fn snapshot(&self) -> Result<OptionSet, DirectoryError> {
        let mut set = OptionSet::default();
        for category in CatalogCategory::ALL {
            set.set(category, self.options(&CatalogQuery::new(category)).await?);
        }
        Ok(set)
    }

    /// Whether `id` is a current option of `category`
    pub async fn contains(&self, category: CatalogCategory, id: i32) -> Result<bool, DirectoryError> {
        match self {
            Directory::Static => Ok(static_options(category).iter().any(|o| o.id == id)),
            Directory::Postgres(repo) => Ok(repo.exists(category, id).await?),
        }
    }

    /// Municipality owning a neighborhood, `None` for an unknown neighborhood
    pub async fn neighborhood_municipality(
        &self,
        neighborhood_id: i32,
    ) -> Result<Option<i32>, DirectoryError> {
        match self {
            Directory::Static => Ok(static_options(CatalogCategory::Neighborhoods)
                .into_iter()
                .find(|o| o.id == neighborhood_id)
                .and_then(|o| o.parent_id)),
            Directory::Postgres(repo) => Ok(repo.neighborhood_municipality(neighborhood_id).await?),
        }
    }
}
