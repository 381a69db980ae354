/**
 * API Route Configuration
 *
 * The /api route table and its guard layering.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/login` - authentication
 * - `POST /api/users` - registration
 *
 * ## Authenticated
 * - `GET /api/users/me`, `PUT|DELETE /api/users/{id}`
 * - `GET|POST|DELETE /api/notes`, `GET /api/notes/archive`,
 *   `GET|PUT|DELETE /api/notes/{id}`
 * - `GET|POST /api/labels`, `GET|PUT|DELETE /api/labels/{id}`
 *
 * ## Admin
 * - `GET /api/users`, `GET /api/users/{id}`
 *
 * # Guard Layering
 *
 * The role guard is layered inside the authentication guard, so auth runs
 * first and the role guard can rely on the attached identity.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::login::login;
use crate::labels::handlers as labels;
use crate::middleware::{require_admin, require_auth};
use crate::notes::handlers as notes;
use crate::server::state::AppState;
use crate::users::handlers as users;

/// Build the /api route table
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/login", post(login))
        .route("/users", post(users::register));

    let admin = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
        .route_layer(middleware::from_fn(require_admin));

    let protected = Router::new()
        .route("/users/me", get(users::current_user))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .delete(notes::delete_all_notes),
        )
        .route("/notes/archive", get(notes::list_archived))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route(
            "/labels",
            get(labels::list_labels).post(labels::create_label),
        )
        .route(
            "/labels/{id}",
            get(labels::get_label)
                .put(labels::update_label)
                .delete(labels::delete_label),
        )
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
