use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler::{self, AppState};

/// Student routes, relative to the mount path.
///
/// Literal segments (`stats`, `search`, `grade`, `bulk`) take priority over
/// the `:id` capture.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_students).post(handler::create_student),
        )
        .route("/stats", get(handler::student_stats))
        .route("/search", get(handler::search_students))
        .route("/grade/:grade", get(handler::students_by_grade))
        .route("/bulk", post(handler::create_students_bulk))
        .route(
            "/:id",
            get(handler::get_student)
                .put(handler::update_student)
                .delete(handler::delete_student),
        )
        .route("/:id/grade", put(handler::update_student_grade))
}

/// Build the axum router with all Roster endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let base = Router::new()
        .route("/", get(handler::root_handler))
        .route("/health", get(handler::health_handler));

    let app = if config.mount_path == "/" {
        base.merge(student_routes())
    } else {
        base.nest(&config.mount_path, student_routes())
    };

    let app = app.with_state(state).layer(TraceLayer::new_for_http());
    if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
