//! HTTP transport for the issue store.

mod issues;
mod payload;
mod response;

use std::path::Path;

use axum::{routing::get, Router};
use issue_tracker_core::IssueStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use payload::Payload;
pub use response::Outcome;

/// Builds the application router.
///
/// When `public_dir` is given, paths outside the API are served from it.
pub fn create_router(store: IssueStore, public_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(
            "/issues/{project}",
            get(issues::list_issues)
                .post(issues::create_issue)
                .put(issues::update_issue)
                .delete(issues::delete_issue),
        )
        .with_state(store);

    let mut app = Router::new().nest("/api", api);
    if let Some(dir) = public_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
