//! Landing page and static asset routes.
//!
//! Files come verbatim from the built frontend directory:
//!
//! ```text
//! dist/
//! ├── index.html            -> GET /
//! ├── css/ js/ img/         -> GET /css/*, /js/*, /img/*
//! ├── apple-touch-icon.png
//! ├── favicon-16x16.png
//! ├── favicon-32x32.png
//! └── site.webmanifest
//! ```

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Asset directories served under a prefix of the same name.
const ASSET_DIRS: &[&str] = &["css", "js", "img"];

/// Single files served at the site root.
const ROOT_FILES: &[&str] = &[
    "apple-touch-icon.png",
    "favicon-32x32.png",
    "favicon-16x16.png",
    "site.webmanifest",
];

/// Build the static routes for `dist_dir`.
pub fn router(dist_dir: &Path) -> Router {
    let mut router =
        Router::new().route_service("/", ServeFile::new(dist_dir.join("index.html")));

    for dir in ASSET_DIRS {
        router = router.nest_service(&format!("/{dir}"), ServeDir::new(dist_dir.join(dir)));
    }

    for file in ROOT_FILES {
        router = router.route_service(&format!("/{file}"), ServeFile::new(dist_dir.join(file)));
    }

    router
}
