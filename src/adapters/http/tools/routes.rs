//! Axum router configuration for tools endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_tool, get_tool_schema, list_tools, validate_parameters, ToolsHandlers};

/// Create the tools API router, suitable for mounting at `/{version}/api/tools`.
///
/// # Routes
///
/// - `GET /` - Catalog (query: category)
/// - `GET /:tool_id` - Descriptor
/// - `GET /:tool_id/schema` - Parameter schema
/// - `POST /:tool_id/validate` - Dry-run parameter validation
pub fn tools_routes(handlers: ToolsHandlers) -> Router {
    Router::new()
        .route("/", get(list_tools))
        .route("/:tool_id", get(get_tool))
        .route("/:tool_id/schema", get(get_tool_schema))
        .route("/:tool_id/validate", post(validate_parameters))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthenticatedUser, Role, UserId};
    use crate::domain::tools::ToolRegistry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        tools_routes(ToolsHandlers::new(Arc::new(ToolRegistry::builtin(1000.0))))
    }

    fn authed(method: &str, uri: &str, body: Body) -> Request<Body> {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        request
            .extensions_mut()
            .insert(AuthenticatedUser::new(UserId::new(1), "testuser", Role::User));
        request
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lists_blockchain_tools() {
        let response = router()
            .oneshot(authed("GET", "/?category=blockchain", Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["total"], 3);
        assert!(json["tools"]
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["category"] == "blockchain"));
    }

    #[tokio::test]
    async fn unknown_category_is_400() {
        let response = router()
            .oneshot(authed("GET", "/?category=games", Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_tool_is_404() {
        let response = router()
            .oneshot(authed("GET", "/nonexistent_tool/schema", Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn schema_lists_required_parameters() {
        let response = router()
            .oneshot(authed("GET", "/transfer_sol/schema", Body::empty()))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["tool_id"], "transfer_sol");
        assert_eq!(json["parameters"]["required"], serde_json::json!(["recipient", "amount"]));
    }

    #[tokio::test]
    async fn validate_reports_missing_parameters() {
        let response = router()
            .oneshot(authed(
                "POST",
                "/transfer_sol/validate",
                Body::from(r#"{"recipient": "Bob"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"]["missing_parameters"], serde_json::json!(["amount"]));
    }

    #[tokio::test]
    async fn requests_without_principal_are_401() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
