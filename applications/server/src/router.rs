/// HTTP routing
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Account routes sit outside the identity middleware so that a stale token
/// never blocks signing in again. Everything else runs with an optional
/// caller resolved from the bearer token.
pub fn create_router(app_state: AppState) -> Router {
    let auth_service = Arc::clone(&app_state.auth_service);

    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/anonymous", post(api::auth::anonymous))
        .route("/auth/refresh", post(api::auth::refresh));

    let caller_routes = Router::new()
        // Catalog
        .route("/tracks", get(api::tracks::list_tracks))
        .route("/tracks/popular", get(api::tracks::popular_tracks))
        .route("/tracks/genres", get(api::tracks::list_genres))
        .route("/tracks/genre/:genre", get(api::tracks::tracks_by_genre))
        .route("/tracks/search", get(api::tracks::search_tracks))
        .route("/tracks/seed", post(api::tracks::seed_catalog))
        .route("/tracks/:id", get(api::tracks::get_track))
        .route("/tracks/:id/plays", post(api::tracks::increment_plays))
        // Library
        .route(
            "/library",
            get(api::library::get_library).post(api::library::add_to_library),
        )
        .route(
            "/library/:track_id",
            get(api::library::is_in_library).delete(api::library::remove_from_library),
        )
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route(
            "/playlists/:id/tracks",
            get(api::playlists::playlist_tracks).post(api::playlists::add_track_to_playlist),
        )
        .route(
            "/playlists/:id/tracks/:track_id",
            delete(api::playlists::remove_track_from_playlist),
        )
        // Playback state
        .route("/playback", get(api::playback::get_playback))
        .route("/playback/play", post(api::playback::play))
        .route("/playback/pause", post(api::playback::pause))
        .route("/playback/resume", post(api::playback::resume))
        .route("/playback/volume", post(api::playback::set_volume))
        .route("/playback/shuffle", post(api::playback::toggle_shuffle))
        .route("/playback/repeat", post(api::playback::cycle_repeat))
        .route("/playback/queue", post(api::playback::add_to_queue))
        .route("/playback/recent", get(api::playback::recently_played))
        .layer(axum_middleware::from_fn_with_state(
            auth_service,
            middleware::optional_auth,
        ));

    Router::new()
        .nest("/api", public_routes.merge(caller_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
