use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{self, books};
use crate::middleware::{log_request, require_token, AuthState};
use crate::state::AppState;

/// Build the full application.
///
/// Every request goes through `log_request` first. `/health` stops there; the
/// book routes additionally pass `require_token` before their handler, so a
/// rejected request is still logged with its 401.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();
    let auth = AuthState::new(config.security.api_token.as_str());

    let router = Router::new()
        // Public
        .route("/health", get(handlers::health))
        // Protected
        .merge(book_routes(auth))
        .fallback(handlers::route_not_found)
        .with_state(state);

    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    // Outermost first
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_request))
            .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
    )
}

fn book_routes(auth: AuthState) -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_token))
}
