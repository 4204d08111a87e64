//! Static file serving for the web client.

use salvo::Router;
use salvo::caching_headers::CachingHeaders;
use salvo::serve_static::StaticDir;

/// ## Summary
/// Serves files under `dir`, with `index.html` for directory requests.
#[must_use]
pub fn routes(dir: &str) -> Router {
    tracing::debug!(dir, "Serving static files");

    Router::with_path("{**path}").hoop(CachingHeaders::new()).get(
        StaticDir::new([dir])
            .defaults("index.html")
            .auto_list(false),
    )
}
