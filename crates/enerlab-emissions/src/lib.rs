mod routes;

use axum::routing::{get, post};
use axum::Router;
use enerlab_http::with_static_assets;

pub fn app() -> Router {
    let router = Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/api/emissions", post(routes::api_emissions));
    with_static_assets(router, "static")
}
