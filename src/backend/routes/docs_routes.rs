/**
 * API Documentation Routes
 *
 * - `GET /swagger` - Swagger UI page
 * - `GET /swagger/openapi.json` - OpenAPI 3 description of every route
 *
 * The document is `docs/openapi.json`, compiled into the binary. The UI page
 * loads the Swagger UI assets from a CDN and points them at the document.
 */

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::backend::server::state::AppState;

pub const OPENAPI_DOCUMENT: &str = include_str!("../../../docs/openapi.json");

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>blogd API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

async fn openapi_document() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

/// Add the public `/swagger` routes to `router`
pub fn configure_docs_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/swagger", get(swagger_ui))
        .route("/swagger/openapi.json", get(openapi_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_document_describes_every_route() {
        let document: Value = serde_json::from_str(OPENAPI_DOCUMENT).unwrap();
        let paths = document["paths"].as_object().unwrap();

        for (path, methods) in [
            ("/health", &["get"][..]),
            ("/auth/register", &["post"][..]),
            ("/auth/login", &["post"][..]),
            ("/auth/users", &["get"][..]),
            ("/api/posts", &["get", "post"][..]),
            ("/api/posts/{id}", &["get", "patch", "delete"][..]),
            ("/api/posts/{id}/comments", &["get", "post"][..]),
            ("/api/comments", &["get"][..]),
            ("/api/comments/{id}", &["patch", "delete"][..]),
        ] {
            let entry = paths.get(path).unwrap_or_else(|| panic!("{} undocumented", path));
            for method in methods {
                assert!(entry.get(*method).is_some(), "{} {} undocumented", method, path);
            }
        }
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn test_ui_points_at_document() {
        assert!(SWAGGER_UI_PAGE.contains("/swagger/openapi.json"));
    }
}
