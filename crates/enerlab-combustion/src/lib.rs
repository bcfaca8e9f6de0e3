mod routes;
mod views;

use axum::routing::{get, post};
use axum::Router;
use enerlab_http::with_static_assets;

pub fn app() -> Router {
    let router = Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/api/fuel", post(routes::api_fuel))
        .route("/api/fuel-oil", post(routes::api_fuel_oil));
    with_static_assets(router, "static")
}
