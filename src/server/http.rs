use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde_json::json;
use tracing::Instrument;

use crate::{
    executor::QueryPipeline,
    metadata::EdmDocument,
    parser::QueryOptions,
    schema::{Normalizer, SchemaDict},
    server::{
        AdapterConfig, AdapterError, CollectionEnvelope, ServiceDocument, UpstreamClient,
        require_basic_auth, service_root,
    },
};

const ODATA_VERSION: HeaderName = HeaderName::from_static("odata-version");

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AdapterConfig>,
    pub upstream: UpstreamClient,
}

pub fn router(config: AdapterConfig) -> Result<Router, AdapterError> {
    if config.inbound_credentials.is_none() {
        tracing::warn!("ODATA_USERNAME/ODATA_PASSWORD not set; /odata routes are served without authentication");
    }

    let upstream = UpstreamClient::new(&config)?;
    let state = AppState { config: Arc::new(config), upstream };

    Ok(Router::new()
        .route("/odata", get(service_document))
        .route("/odata/", get(service_document))
        .route("/odata/$metadata", get(metadata))
        .route("/odata/Transactions", get(transactions))
        .route("/odata/{*rest}", any(not_found))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .route("/health", get(health))
        .with_state(state))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// unknown /odata/* paths still pass through the auth layer before answering 404
async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
}

async fn service_document(headers: HeaderMap) -> Response {
    let schema = SchemaDict::transactions();
    let body = ServiceDocument::new(&service_root(&headers), &[schema.entity_set.as_str()]);
    with_odata_version(Json(body).into_response())
}

async fn metadata() -> Response {
    let response = (
        [(header::CONTENT_TYPE, "application/xml")],
        EdmDocument::transactions(),
    ).into_response();
    with_odata_version(response)
}

async fn transactions(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("transactions", %request_id);

    async move {
        // an undecodable query string is treated like an empty one
        let options = Query::<Vec<(String, String)>>::try_from_uri(&uri)
            .map(|Query(pairs)| QueryOptions::from_pairs(pairs))
            .unwrap_or_default();

        match query_transactions(&state, &headers, &options).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    AdapterError::Unexpected(message) => tracing::error!(%message, "transactions query failed"),
                    AdapterError::BadQuery(parse) => tracing::debug!(%parse, "rejected $filter"),
                    other => tracing::warn!(error = %other, "transactions query failed"),
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

async fn query_transactions(
    state: &AppState,
    headers: &HeaderMap,
    options: &QueryOptions,
) -> Result<Response, AdapterError> {
    let schema = SchemaDict::transactions();

    let items = state.upstream.fetch().await?;
    let records = Normalizer::normalize_all(&items, schema);

    let result = if state.config.strict_query {
        QueryPipeline::run_strict(&records, options).map_err(AdapterError::BadQuery)?
    } else {
        QueryPipeline::run(&records, options)
    };

    tracing::info!(source = records.len(), returned = result.value.len(), "served transactions");

    let envelope = CollectionEnvelope::new(&service_root(headers), &schema.entity_set, result);
    Ok(with_odata_version(Json(envelope).into_response()))
}

fn with_odata_version(mut response: Response) -> Response {
    response.headers_mut().insert(ODATA_VERSION, HeaderValue::from_static("4.0"));
    response
}
