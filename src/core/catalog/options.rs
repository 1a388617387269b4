//! Reference-data option lists
//!
//! Leaders, coordinators, municipalities and neighborhoods are opaque ids
//! mapped to display labels. The configured tables here seed both the form
//! (so server and client render identical selects) and the static directory.

use serde::{Deserialize, Serialize};

use crate::core::registration::FieldName;

/// Maximum rows returned for the searchable categories
pub const SEARCH_LIMIT: usize = 50;

/// A reference-data category backing one select field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CatalogCategory {
    #[display("leaders")]
    Leaders,
    #[display("coordinators")]
    Coordinators,
    #[display("municipalities")]
    Municipalities,
    #[display("neighborhoods")]
    Neighborhoods,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 4] = [
        CatalogCategory::Leaders,
        CatalogCategory::Coordinators,
        CatalogCategory::Municipalities,
        CatalogCategory::Neighborhoods,
    ];

    /// Form field holding the selected id
    pub fn field(self) -> FieldName {
        match self {
            CatalogCategory::Leaders => FieldName::LeaderId,
            CatalogCategory::Coordinators => FieldName::CoordinatorId,
            CatalogCategory::Municipalities => FieldName::MunicipalityId,
            CatalogCategory::Neighborhoods => FieldName::NeighborhoodId,
        }
    }

    /// Parse the URL slug used by the catalog API
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == slug)
    }

    /// Leaders and coordinators are searched by name and capped at [`SEARCH_LIMIT`]
    pub fn is_searchable(self) -> bool {
        matches!(
            self,
            CatalogCategory::Leaders | CatalogCategory::Coordinators
        )
    }
}

/// One selectable reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: i32,
    pub name: String,
    /// Coordinator of a leader, municipality of a neighborhood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
}

impl CatalogOption {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Value submitted by the select element
    pub fn value(&self) -> String {
        self.id.to_string()
    }

    pub fn label(&self) -> &str {
        &self.name
    }
}

struct StaticEntry {
    id: i32,
    name: &'static str,
    parent_id: Option<i32>,
}

const LEADERS: &[StaticEntry] = &[
    StaticEntry {
        id: 1,
        name: "Líder Zona Norte",
        parent_id: Some(1),
    },
    StaticEntry {
        id: 2,
        name: "Líder Zona Sur",
        parent_id: Some(2),
    },
];

const COORDINATORS: &[StaticEntry] = &[
    StaticEntry {
        id: 1,
        name: "Coordinador General",
        parent_id: None,
    },
    StaticEntry {
        id: 2,
        name: "Coordinador de Territorio",
        parent_id: None,
    },
];

const MUNICIPALITIES: &[StaticEntry] = &[
    StaticEntry {
        id: 1,
        name: "Barranquilla",
        parent_id: None,
    },
    StaticEntry {
        id: 2,
        name: "Soledad",
        parent_id: None,
    },
];

const NEIGHBORHOODS: &[StaticEntry] = &[
    StaticEntry {
        id: 10,
        name: "Centro",
        parent_id: Some(1),
    },
    StaticEntry {
        id: 11,
        name: "Riomar",
        parent_id: Some(1),
    },
];

/// The configured option table for a category
pub fn static_options(category: CatalogCategory) -> Vec<CatalogOption> {
    let table = match category {
        CatalogCategory::Leaders => LEADERS,
        CatalogCategory::Coordinators => COORDINATORS,
        CatalogCategory::Municipalities => MUNICIPALITIES,
        CatalogCategory::Neighborhoods => NEIGHBORHOODS,
    };

    table
        .iter()
        .map(|entry| CatalogOption {
            id: entry.id,
            name: entry.name.to_string(),
            parent_id: entry.parent_id,
        })
        .collect()
}

/// Lookup filters for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CatalogCategory,
    pub search: Option<String>,
    pub parent_id: Option<i32>,
}

impl CatalogQuery {
    pub fn new(category: CatalogCategory) -> Self {
        Self {
            category,
            search: None,
            parent_id: None,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Trimmed, lowercased search term, if any
    pub fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Filter, order by name and cap an in-memory option list
    pub fn apply(&self, options: Vec<CatalogOption>) -> Vec<CatalogOption> {
        let needle = self.needle();

        let mut rows: Vec<CatalogOption> = options
            .into_iter()
            .filter(|o| self.parent_id.is_none_or(|p| o.parent_id == Some(p)))
            .filter(|o| {
                needle
                    .as_ref()
                    .is_none_or(|n| o.name.to_lowercase().contains(n.as_str()))
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name));

        if self.category.is_searchable() {
            rows.truncate(SEARCH_LIMIT);
        }

        rows
    }
}

/// Current option lists for every select field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    leaders: Vec<CatalogOption>,
    coordinators: Vec<CatalogOption>,
    municipalities: Vec<CatalogOption>,
    neighborhoods: Vec<CatalogOption>,
}

impl OptionSet {
    /// Option set built from the configured tables
    pub fn configured() -> Self {
        let mut set = Self::default();
        for category in CatalogCategory::ALL {
            set.set(category, static_options(category));
        }
        set
    }

    pub fn get(&self, category: CatalogCategory) -> &[CatalogOption] {
        match category {
            CatalogCategory::Leaders => &self.leaders,
            CatalogCategory::Coordinators => &self.coordinators,
            CatalogCategory::Municipalities => &self.municipalities,
            CatalogCategory::Neighborhoods => &self.neighborhoods,
        }
    }

    pub fn set(&mut self, category: CatalogCategory, options: Vec<CatalogOption>) {
        let slot = match category {
            CatalogCategory::Leaders => &mut self.leaders,
            CatalogCategory::Coordinators => &mut self.coordinators,
            CatalogCategory::Municipalities => &mut self.municipalities,
            CatalogCategory::Neighborhoods => &mut self.neighborhoods,
        };
        *slot = options;
    }

    /// Take every non-empty list from `other`, keeping ours where it is empty
    pub fn merge_non_empty(&mut self, other: OptionSet) {
        let OptionSet {
            leaders,
            coordinators,
            municipalities,
            neighborhoods,
        } = other;

        for (category, list) in [
            (CatalogCategory::Leaders, leaders),
            (CatalogCategory::Coordinators, coordinators),
            (CatalogCategory::Municipalities, municipalities),
            (CatalogCategory::Neighborhoods, neighborhoods),
        ] {
            if !list.is_empty() {
                self.set(category, list);
            }
        }
    }

    /// Whether `value` is one of the category's option values
    pub fn contains(&self, category: CatalogCategory, value: &str) -> bool {
        self.get(category).iter().any(|o| o.value() == value)
    }

    /// `(value, label)` pairs in display order
    pub fn select_options(&self, category: CatalogCategory) -> Vec<(String, String)> {
        self.get(category)
            .iter()
            .map(|o| (o.value(), o.label().to_string()))
            .collect()
    }
}
