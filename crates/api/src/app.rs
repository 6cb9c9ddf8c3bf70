use async_graphql::http::{parse_query_string, GraphiQLSource};
use axum::{
    extract::{RawQuery, Request, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{GraphqlConfig, GRAPHQL_PATH};
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::state::AppState;

/// Largest GraphQL request body accepted, in bytes.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Axum router with health endpoint and GraphQL.
pub fn build_router(state: AppState, schema: AppSchema, config: &GraphqlConfig) -> Router {
    let graphiql_enabled = config.graphiql;
    let get_schema = schema.clone();

    let graphql_route = post(move |state, req| graphql_handler(state, req, schema)).get(
        move |state, query| graphql_get_handler(state, query, get_schema, graphiql_enabled),
    );

    Router::new()
        // Simple liveness check; also proves DB connectivity.
        .route("/health", get(health))
        .route(GRAPHQL_PATH, graphql_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Any origin may call the API.
        .layer(CorsLayer::permissive())
}

/// Parses the GraphQL-over-HTTP body and runs it with the store handle
/// attached to the request context.
async fn graphql_handler(
    State(state): State<AppState>,
    req: Request,
    schema: AppSchema,
) -> Result<Response, AppError> {
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    Ok(execute(&schema, state, gql_request).await)
}

/// `GET /graphql?query=...` runs the query; a bare `GET` opens GraphiQL
/// when the explorer is enabled.
async fn graphql_get_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    schema: AppSchema,
    graphiql_enabled: bool,
) -> Result<Response, AppError> {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => {
            let gql_request = parse_query_string(&query)
                .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;
            Ok(execute(&schema, state, gql_request).await)
        }
        None if graphiql_enabled => Ok(graphiql().into_response()),
        None => Err(AppError::NotFound),
    }
}

async fn execute(schema: &AppSchema, state: AppState, request: async_graphql::Request) -> Response {
    let gql_response = schema.execute(request.data(state)).await;
    if gql_response.is_err() {
        tracing::debug!(errors = ?gql_response.errors, "GraphQL request returned errors");
    }

    Json(gql_response).into_response()
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Liveness + quick DB probe.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&state.db).await?;
    Ok("ok")
}
