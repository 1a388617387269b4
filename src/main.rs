#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use oxigeno_registro::app::*;
    use oxigeno_registro::core::api::{cors_layer, health_router};
    use oxigeno_registro::core::catalog::{CatalogApiState, Directory, catalog_router};
    use oxigeno_registro::core::config::Config;
    use oxigeno_registro::core::db::{
        CatalogRepository, DbConfig, VoterRepository, create_pool_with_migrations,
    };
    use oxigeno_registro::core::registration::{
        CaptchaVerifier, MemoryVoterStore, RegistrationApiState, RegistrationService, VoterStore,
        registration_router,
    };
    use std::net::SocketAddr;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: database={}, turnstile_secret={}, turnstile_bypass={}, cors={:?}",
        config.has_database(),
        config.has_turnstile_secret(),
        config.turnstile_bypass,
        config.cors_origins
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    let (directory, store) = match &config.database_url {
        Some(url) => {
            let pool = create_pool_with_migrations(&DbConfig::new(url)).await?;
            tracing::info!("Connected to PostgreSQL, migrations applied");
            (
                Directory::Postgres(CatalogRepository::new(pool.clone())),
                VoterStore::Postgres(VoterRepository::new(pool)),
            )
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set: serving built-in catalogs, registrations kept in memory"
            );
            (Directory::Static, VoterStore::Memory(MemoryVoterStore::new()))
        }
    };

    tracing::info!(
        "Catalog directory: {}, voter store: {}",
        directory.kind(),
        store.kind()
    );

    let captcha = if config.turnstile_bypass {
        CaptchaVerifier::bypass()
    } else {
        CaptchaVerifier::new(config.turnstile_secret_key.clone())
    };

    if captcha.is_bypassed() {
        tracing::warn!("TURNSTILE_TEST_BYPASS=1: captcha verification disabled");
    } else if !config.has_turnstile_secret() {
        tracing::warn!("TURNSTILE_SECRET_KEY not set: registrations will be rejected");
    }

    let catalog_api = catalog_router(CatalogApiState {
        directory: directory.clone(),
    });
    let registration_api = registration_router(RegistrationApiState {
        service: RegistrationService::new(directory, store, captcha),
    });

    // Serves .br and .gz variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(health_router())
        .merge(catalog_api)
        .merge(registration_api)
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        .layer(cors_layer(&config))
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Registration API: http://{}/public/voters/register", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
