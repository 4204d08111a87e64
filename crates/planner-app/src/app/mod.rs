pub mod api;
pub mod web;

use salvo::Router;

use crate::config::Settings;

/// ## Summary
/// Builds the full router: the JSON API under `/api` and the static web
/// client everywhere else.
#[must_use]
pub fn routes(settings: &Settings) -> Router {
    Router::new()
        .push(api::routes())
        .push(web::routes(&settings.web.dir))
}
