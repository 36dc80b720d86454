//! API handlers for the green claims server
//!
//! Provides REST endpoints for:
//! - Text scanning
//! - Highlighting
//! - Term listing

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use green_claims_engine::{
    highlight, Category, GreenClaimsEngine, Language, ScanMatch, ScanResponse, ScanResult,
    Severity, TermCorpus,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "green-claims-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Scan request body
///
/// `text` is kept as raw JSON so a non-string value reaches the engine's
/// input check instead of failing deserialization.
#[derive(Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub text: Value,
}

/// Validate and scan a request body
fn scan_request(
    state: &AppState,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<ScanResult, ServerError> {
    let Json(req) = payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    if let Some(text) = req.text.as_str() {
        let len = text.chars().count();
        if len > state.max_text_length {
            return Err(ServerError::TextTooLong {
                len,
                max: state.max_text_length,
            });
        }
        debug!(len, "Scan request");
    }

    let result = GreenClaimsEngine::new().scan_value(&req.text)?;
    info!(
        risk_score = result.risk_score,
        findings = result.summary.total_findings,
        "Scanned text"
    );
    Ok(result)
}

/// Handler: POST /api/scan
pub async fn handle_scan(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResult>, ServerError> {
    scan_request(&state, payload).map(Json)
}

/// Handler: POST /api/scan/legacy
pub async fn handle_scan_legacy(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResponse>, ServerError> {
    let result = scan_request(&state, payload)?;
    Ok(Json(green_claims_engine::to_legacy_shape(&result)))
}

/// Highlight response
#[derive(Serialize)]
pub struct HighlightResponse {
    pub success: bool,
    pub html: String,
    pub score: u32,
}

/// Handler: POST /api/highlight
pub async fn handle_highlight(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<HighlightResponse>, ServerError> {
    let result = scan_request(&state, payload)?;
    let matches: Vec<ScanMatch> = result.findings.iter().cloned().collect();

    Ok(Json(HighlightResponse {
        success: true,
        html: highlight(&result.input_text, &matches),
        score: result.risk_score,
    }))
}

/// Term list filters, all optional
#[derive(Deserialize, Default)]
pub struct TermsQuery {
    pub severity: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
}

/// Term list response
#[derive(Serialize)]
pub struct TermListResponse {
    pub success: bool,
    pub terms: Vec<TermInfo>,
    pub count: usize,
}

/// Term metadata
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermInfo {
    pub term: String,
    pub language: Language,
    pub category: Category,
    pub severity: Severity,
    pub regulation: String,
    pub penalty_range: String,
    pub description: String,
    pub alternatives: Vec<String>,
}

/// Handler: GET /api/terms
pub async fn handle_list_terms(
    Query(query): Query<TermsQuery>,
) -> Result<Json<TermListResponse>, ServerError> {
    let severity: Option<Severity> = parse_filter("severity", query.severity.as_deref())?;
    let language: Option<Language> = parse_filter("language", query.language.as_deref())?;
    let category: Option<Category> = parse_filter("category", query.category.as_deref())?;

    let terms: Vec<TermInfo> = TermCorpus::builtin()
        .iter()
        .filter(|t| severity.map_or(true, |s| t.severity == s))
        .filter(|t| language.map_or(true, |l| t.language.covers(l)))
        .filter(|t| category.map_or(true, |c| t.category == c))
        .map(|t| TermInfo {
            term: t.term.clone(),
            language: t.language,
            category: t.category,
            severity: t.severity,
            regulation: t.regulation.clone(),
            penalty_range: t.penalty_range.clone(),
            description: t.description.clone(),
            alternatives: t.alternatives.clone(),
        })
        .collect();

    let count = terms.len();

    Ok(Json(TermListResponse {
        success: true,
        terms,
        count,
    }))
}

/// Parse a lowercase enum filter using its wire name
fn parse_filter<T: DeserializeOwned>(
    name: &str,
    value: Option<&str>,
) -> Result<Option<T>, ServerError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    serde_json::from_value(Value::String(raw.to_lowercase()))
        .map(Some)
        .map_err(|_| ServerError::InvalidRequest(format!("Unknown {} '{}'", name, raw)))
}
