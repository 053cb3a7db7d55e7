//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use agent_core::{AgentError, ToolCall, ToolResult, ToolSchema};
use menu_catalog::{svckit::dish_failure_message, MatchTier, MenuItem, ResolveError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tools: usize,
    pub menu_items: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub dishes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub name: String,
    #[serde(rename = "match")]
    pub tier: MatchTier,
    pub item: MenuItem,
}

/// Failed dish lookup: the candidates (ambiguous) or the whole menu (not found)
#[derive(Debug, Serialize)]
pub struct MenuErrorResponse {
    pub error: String,
    pub code: String,
    pub names: Vec<String>,
}

type ApiError<T> = (StatusCode, Json<T>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: state.tools.len(),
        menu_items: state.menu.len(),
    })
}

/// Schemas of every registered tool
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

/// Execute one tool call
///
/// Tool-level failures (a dish that does not resolve, a division by zero)
/// are still a 200 with `success: false`; only calls that never reached the
/// tool are HTTP errors.
pub async fn call_tool(
    State(state): State<AppState>,
    Json(mut call): Json<ToolCall>,
) -> Result<Json<ToolResult>, ApiError<ErrorResponse>> {
    if call.id.is_none() {
        call.id = Some(uuid::Uuid::new_v4().to_string());
    }

    state.tools.execute(&call).await.map(Json).map_err(|e| {
        let (status, code) = match &e {
            AgentError::ToolNotFound(_) => (StatusCode::NOT_FOUND, "TOOL_NOT_FOUND"),
            AgentError::ToolValidation(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENTS"),
            _ => {
                tracing::error!(tool = %call.name, "Tool error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "TOOL_ERROR")
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: e.user_message(),
                code: code.into(),
            }),
        )
    })
}

/// All dish names
pub async fn list_menu(State(state): State<AppState>) -> Json<MenuListResponse> {
    Json(MenuListResponse {
        dishes: state.menu.names().map(str::to_owned).collect(),
    })
}

/// Resolve a dish name with partial matching
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<MenuItemResponse>, ApiError<MenuErrorResponse>> {
    match state.menu.resolve(&query) {
        Ok(found) => Ok(Json(MenuItemResponse {
            name: found.name.to_owned(),
            tier: found.tier,
            item: found.entry.clone(),
        })),
        Err(err) => {
            let (status, code) = match &err {
                ResolveError::AmbiguousMatch { .. } => (StatusCode::CONFLICT, "AMBIGUOUS_MATCH"),
                ResolveError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            };
            Err((
                status,
                Json(MenuErrorResponse {
                    error: dish_failure_message(&err),
                    code: code.into(),
                    names: err.names().to_vec(),
                }),
            ))
        }
    }
}
