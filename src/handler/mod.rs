mod auth;
mod laptop;
mod mouse;
mod order;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::laptop::laptop_routes;
pub use self::mouse::mouse_routes;
pub use self::order::order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::health_checker_handler,
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,

        laptop::get_laptops,
        laptop::get_available_laptops,
        laptop::search_laptops,
        laptop::get_laptops_by_brand,
        laptop::get_laptop,

        mouse::get_mice,
        mouse::get_available_mice,
        mouse::search_mice,
        mouse::get_mice_by_brand,
        mouse::get_mice_by_type,
        mouse::get_mouse,

        order::create_order,
        order::get_orders,
        order::get_order,
        order::update_order_status,
        order::delete_order,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Laptop", description = "Laptop catalog endpoints"),
        (name = "Mouse", description = "Mouse catalog endpoints"),
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(laptop_routes(shared_state.clone()))
            .merge(mouse_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
