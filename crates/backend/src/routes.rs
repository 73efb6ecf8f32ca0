use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::shared::uploads::MAX_UPLOAD_BYTES;
use crate::{handlers, system};

/// Конфигурация всех API роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(public_routes())
        .merge(authenticated_routes())
        .merge(admin_routes())
}

fn public_routes() -> Router {
    Router::new()
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/register",
            post(system::handlers::auth::register),
        )
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // Token is optional here
        .route(
            "/api/system/auth/session",
            get(system::handlers::auth::session),
        )
        // ========================================
        // CATALOG & BLOG (PUBLIC)
        // ========================================
        .route("/api/items", get(handlers::a001_catalog_item::list_all))
        .route("/api/items/:id", get(handlers::a001_catalog_item::get_by_id))
        .route("/api/posts", get(handlers::a002_blog_post::list_page))
        .route("/api/posts/:id", get(handlers::a002_blog_post::get_by_id))
        .route(
            "/api/categories",
            get(handlers::a002_blog_post::list_categories),
        )
}

fn authenticated_routes() -> Router {
    Router::new()
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        .route(
            "/api/profile/me",
            get(system::handlers::profile::get_own).put(system::handlers::profile::update_own),
        )
        // Self or admin, checked in the handler
        .route(
            "/api/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete),
        )
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth))
}

fn admin_routes() -> Router {
    Router::new()
        .route(
            "/api/admin/summary",
            get(handlers::d001_admin_summary::get_summary),
        )
        // Catalog items
        .route(
            "/api/admin/items",
            get(handlers::a001_catalog_item::list_all).post(handlers::a001_catalog_item::create),
        )
        .route(
            "/api/admin/items/:id",
            get(handlers::a001_catalog_item::get_by_id)
                .put(handlers::a001_catalog_item::update)
                .delete(handlers::a001_catalog_item::delete),
        )
        // Users
        .route(
            "/api/admin/users",
            get(system::handlers::users::admin_list),
        )
        .route(
            "/api/admin/users/:id",
            get(system::handlers::users::admin_get)
                .put(system::handlers::users::admin_update)
                .delete(system::handlers::users::admin_delete),
        )
        // Blog posts
        .route(
            "/api/admin/posts",
            get(handlers::a002_blog_post::admin_list).post(handlers::a002_blog_post::create),
        )
        .route(
            "/api/admin/posts/:id",
            get(handlers::a002_blog_post::get_by_id)
                .put(handlers::a002_blog_post::update)
                .delete(handlers::a002_blog_post::delete),
        )
        // Uploads: allow a little over the file limit for multipart framing
        .route(
            "/api/upload",
            post(handlers::uploads::upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
        .route_layer(middleware::from_fn(system::auth::middleware::require_admin))
}
