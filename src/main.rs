use axum::middleware::from_fn;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soc_faculty_api::config;
use soc_faculty_api::database::manager::DatabaseManager;
use soc_faculty_api::handlers;
use soc_faculty_api::middleware::auth::jwt_auth_middleware;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soc_faculty_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::config();
    info!("Starting in {:?} mode", config.environment);

    DatabaseManager::run_migrations().await?;

    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/staff", staff_routes())
        .nest("/departments", department_routes())
        .nest("/admin-positions", admin_position_routes())
        .nest("/programs", program_routes())
        .nest("/news", news_routes())
        .nest("/chiang-rai", chiang_rai_routes())
        .nest("/upload", upload_routes());

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http());

    if config.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn auth_routes() -> Router {
    let public = Router::new()
        .route("/google", get(handlers::auth::google_login))
        .route("/google/callback", get(handlers::auth::google_callback))
        .route("/dev/login", get(handlers::auth::dev_login))
        .route("/dev/token", post(handlers::auth::dev_token));

    let protected = Router::new()
        .route("/profile", get(handlers::auth::profile))
        .route("/users", get(handlers::auth::list_users))
        .route("/users/:id/role", patch(handlers::auth::update_user_level))
        .route("/users/:id/active", patch(handlers::auth::toggle_user_active))
        .route("/users/:id", delete(handlers::auth::delete_user))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn staff_routes() -> Router {
    let public = Router::new()
        .route("/", get(handlers::staff::list))
        .route("/:id", get(handlers::staff::get));

    let protected = Router::new()
        .route("/", post(handlers::staff::create))
        .route("/:id", put(handlers::staff::update).delete(handlers::staff::remove))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn department_routes() -> Router {
    let public = Router::new()
        .route("/", get(handlers::departments::list))
        .route("/:id", get(handlers::departments::get));

    let protected = Router::new()
        .route("/", post(handlers::departments::create))
        .route(
            "/:id",
            put(handlers::departments::update).delete(handlers::departments::remove),
        )
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn admin_position_routes() -> Router {
    let public = Router::new().route("/", get(handlers::admin_positions::list));

    let protected = Router::new()
        .route("/", post(handlers::admin_positions::create))
        .route(
            "/:id",
            put(handlers::admin_positions::update).delete(handlers::admin_positions::remove),
        )
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn program_routes() -> Router {
    let public = Router::new()
        .route("/", get(handlers::programs::list))
        .route("/code/:code", get(handlers::programs::get_by_code))
        .route("/:id", get(handlers::programs::get));

    let protected = Router::new()
        .route("/", post(handlers::programs::create))
        .route("/:id", put(handlers::programs::update).delete(handlers::programs::remove))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn news_routes() -> Router {
    let public = Router::new()
        .route("/", get(handlers::news::list))
        .route("/slug/:slug", get(handlers::news::get_by_slug))
        .route("/:id", get(handlers::news::get));

    let protected = Router::new()
        .route("/", post(handlers::news::create))
        .route("/:id", put(handlers::news::update).delete(handlers::news::remove))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

// Article and activity detail pages address records by slug, so the admin
// mutations share the same wildcard and parse it as a UUID instead.
fn chiang_rai_routes() -> Router {
    let public = Router::new()
        .route("/identities", get(handlers::chiang_rai::list_identities))
        .route("/identities/:code", get(handlers::chiang_rai::get_identity))
        .route("/search", get(handlers::chiang_rai::search))
        .route("/artifacts", get(handlers::chiang_rai::list_artifacts))
        .route("/artifacts/:id", get(handlers::chiang_rai::get_artifact))
        .route("/articles", get(handlers::chiang_rai::list_articles))
        .route("/articles/:slug", get(handlers::chiang_rai::get_article_by_slug))
        .route("/activities", get(handlers::chiang_rai::list_activities))
        .route("/activities/:slug", get(handlers::chiang_rai::get_activity_by_slug))
        .route("/staff", get(handlers::chiang_rai::list_staff));

    let protected = Router::new()
        .route("/artifacts", post(handlers::chiang_rai::create_artifact))
        .route(
            "/artifacts/:id",
            put(handlers::chiang_rai::update_artifact)
                .delete(handlers::chiang_rai::remove_artifact),
        )
        .route("/articles", post(handlers::chiang_rai::create_article))
        .route("/articles/id/:id", get(handlers::chiang_rai::get_article))
        .route(
            "/articles/:slug",
            put(handlers::chiang_rai::update_article)
                .delete(handlers::chiang_rai::remove_article),
        )
        .route("/activities", post(handlers::chiang_rai::create_activity))
        .route("/activities/id/:id", get(handlers::chiang_rai::get_activity))
        .route(
            "/activities/:slug",
            put(handlers::chiang_rai::update_activity)
                .delete(handlers::chiang_rai::remove_activity),
        )
        .route("/staff", post(handlers::chiang_rai::create_staff))
        .route("/staff/import", post(handlers::chiang_rai::import_staff))
        .route("/staff/:id", delete(handlers::chiang_rai::remove_staff))
        .route("/admin/faculty-staff", get(handlers::chiang_rai::faculty_staff))
        .layer(from_fn(jwt_auth_middleware));

    public.merge(protected)
}

fn upload_routes() -> Router {
    Router::new()
        .route("/staff-image", post(handlers::upload::staff_image))
        .layer(from_fn(jwt_auth_middleware))
}
