use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::middleware::{handle_panic, log_errors};

pub mod location;
pub mod weather;

/// 组装全部路由与公共中间件
pub fn router(state: AppState) -> Router {
    Router::new()
        // 位置路由
        .route(
            "/locations",
            post(location::create_location).get(location::list_locations),
        )
        .route(
            "/locations/{location_id}",
            get(location::get_location)
                .put(location::update_location)
                .delete(location::delete_location),
        )
        // 天气路由
        .route("/weather/{location_id}", get(weather::current_weather))
        .route("/history/{location_id}", get(weather::history))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(log_errors))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}
