//! Option lists shared by the select fields
//!
//! Starts from the configured tables so server and client render the same
//! markup, then swaps in the live directory once hydrated.

use leptos::prelude::*;

use crate::core::catalog::OptionSet;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub options: RwSignal<OptionSet>,
}

pub fn provide_catalog_context() -> CatalogContext {
    let ctx = CatalogContext {
        options: RwSignal::new(OptionSet::configured()),
    };
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        use leptos::task::spawn_local;

        use super::client::fetch_catalog;

        let options = ctx.options;
        // Runs once, after hydration
        Effect::new(move |_| {
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(live) => options.update(|set| set.merge_non_empty(live)),
                    Err(err) => {
                        leptos::logging::warn!("Catalog unavailable, keeping defaults: {}", err)
                    }
                }
            });
        });
    }

    ctx
}
