//! Router

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{call_tool, get_menu_item, health_check, list_menu, list_tools};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Tools
        .route("/api/tools", get(list_tools))
        .route("/api/tools/call", post(call_tool))
        // Menu
        .route("/api/menu", get(list_menu))
        .route("/api/menu/{query}", get(get_menu_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use menu_catalog::source::{BuiltinMenu, MenuSource};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    fn test_app() -> Router {
        let config = ServerConfig {
            enable_file_tools: false,
            ..ServerConfig::default()
        };
        router(AppState::with_menu(BuiltinMenu.load().unwrap(), &config))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let resp = test_app().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tools"], 4);
        assert_eq!(body["menu_items"], 5);
    }

    #[tokio::test]
    async fn test_list_tools_sorted() {
        let (status, body) = send(get_req("/api/tools")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["calculator", "datetime", "get_menu_item", "list_menu"]);
    }

    #[tokio::test]
    async fn test_menu_item_partial_match() {
        let (status, body) = send(get_req("/api/menu/pizza")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Margherita Pizza");
        assert_eq!(body["match"], "substring");
        assert_eq!(body["item"]["cuisine"], "Italian");
    }

    #[tokio::test]
    async fn test_menu_item_percent_encoded() {
        let (status, body) = send(get_req("/api/menu/pad%20thai")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Pad Thai");
        assert_eq!(body["match"], "case_insensitive");
    }

    #[tokio::test]
    async fn test_menu_item_ambiguous() {
        let (status, body) = send(get_req("/api/menu/a")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "AMBIGUOUS_MATCH");
        assert_eq!(
            body["names"],
            json!(["Caesar Salad", "Chicken Tikka", "Margherita Pizza", "Pad Thai"])
        );
    }

    #[tokio::test]
    async fn test_menu_item_not_found() {
        let (status, body) = send(get_req("/api/menu/lasagna")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["names"].as_array().unwrap().len(), 5);
        assert!(body["error"].as_str().unwrap().starts_with("Dish 'lasagna' not found"));
    }

    #[tokio::test]
    async fn test_list_menu() {
        let (status, body) = send(get_req("/api/menu")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dishes"][0], "Caesar Salad");
    }

    #[tokio::test]
    async fn test_call_tool_assigns_id() {
        let call = json!({"name": "get_menu_item", "arguments": {"dish_name": "tikka"}});
        let (status, body) = send(post_json("/api/tools/call", &call)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Chicken Tikka");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn test_call_tool_keeps_caller_id() {
        let call = json!({
            "name": "calculator",
            "arguments": {"expression": "50 * 50"},
            "id": "abc",
        });
        let (_, body) = send(post_json("/api/tools/call", &call)).await;
        assert_eq!(body["id"], "abc");
        assert_eq!(body["output"], "50 * 50 = 2500");
    }

    #[tokio::test]
    async fn test_tool_failure_is_still_ok() {
        let call = json!({"name": "get_menu_item", "arguments": {"dish_name": "nonexistent"}});
        let (status, body) = send(post_json("/api/tools/call", &call)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["error"], "not_found");
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let call = json!({"name": "file_write", "arguments": {"path": "x", "content": "y"}});
        let (status, body) = send(post_json("/api/tools/call", &call)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "TOOL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_default_config_has_no_file_tools() {
        let state = AppState::with_menu(BuiltinMenu.load().unwrap(), &ServerConfig::default());
        assert!(state.tools.get("file_read").is_none());
        assert!(state.tools.get("file_write").is_none());

        let call = json!({"name": "file_write", "arguments": {"path": ".env", "content": "x"}});
        let resp = router(state)
            .oneshot(post_json("/api/tools/call", &call))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_call_invalid_arguments() {
        let call = json!({"name": "get_menu_item", "arguments": {"dish_name": 7}});
        let (status, body) = send(post_json("/api/tools/call", &call)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_ARGUMENTS");
    }
}
