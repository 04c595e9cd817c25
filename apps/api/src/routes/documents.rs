use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::detect::{detect_template_type, template_metadata, TemplateMetadata, TemplateType};
use crate::documents::parse_documents;
use crate::errors::AppError;
use crate::models::Typography;
use crate::resume::{
    build_preview, render_markdown, resolve_document_style, validate_document, ResumePreview,
    ValidationIssue,
};
use crate::state::AppState;
use crate::theme::{theme_css, ResolvedStyle};

#[derive(Deserialize)]
pub struct DocumentRequest {
    pub yaml: String,
    /// Session typography from the editor's customiser.
    #[serde(default)]
    pub typography: Option<Typography>,
    /// Pins "today" for time spans; defaults to the server's date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

static EMPTY_DOCUMENT: Value = Value::Null;

/// A request body that has been size-checked, detected and parsed.
struct ParsedRequest {
    template_type: TemplateType,
    documents: Vec<Value>,
}

impl ParsedRequest {
    fn primary(&self) -> &Value {
        self.documents.first().unwrap_or(&EMPTY_DOCUMENT)
    }

    fn metadata(&self) -> TemplateMetadata {
        template_metadata(self.template_type, self.primary())
    }
}

fn parse_request(state: &AppState, req: &DocumentRequest) -> Result<ParsedRequest, AppError> {
    let limit = state.config.max_document_bytes;
    if req.yaml.len() > limit {
        return Err(AppError::PayloadTooLarge {
            size: req.yaml.len(),
            limit,
        });
    }
    // Detection runs on the raw text, before any split into documents.
    let template_type = detect_template_type(&req.yaml);
    let documents = parse_documents(&req.yaml)?;
    Ok(ParsedRequest {
        template_type,
        documents,
    })
}

#[derive(Serialize)]
pub struct DetectResponse {
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub document_count: usize,
    pub metadata: TemplateMetadata,
}

/// POST /api/v1/detect
pub async fn handle_detect(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<DetectResponse>, AppError> {
    let parsed = parse_request(&state, &req)?;
    Ok(Json(DetectResponse {
        template_type: parsed.template_type,
        document_count: parsed.documents.len(),
        metadata: parsed.metadata(),
    }))
}

#[derive(Serialize)]
pub struct ValidateResponse {
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

/// POST /api/v1/validate
/// Only resumes carry a schema; other document types validate as their YAML parses.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let parsed = parse_request(&state, &req)?;
    let issues = match parsed.template_type {
        TemplateType::Resume => validate_document(parsed.primary()),
        _ => Vec::new(),
    };
    Ok(Json(ValidateResponse {
        template_type: parsed.template_type,
        valid: issues.is_empty(),
        issues,
    }))
}

#[derive(Serialize)]
pub struct PreviewResponse {
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub document_count: usize,
    pub metadata: TemplateMetadata,
    pub theme_id: String,
    pub style: ResolvedStyle,
    pub css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumePreview>,
}

/// POST /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let parsed = parse_request(&state, &req)?;
    let mut options = state.preview_options(req.reference_date.unwrap_or_else(today));
    options.session_typography = req.typography.clone();

    let (theme_id, style) = resolve_document_style(parsed.primary(), &state.themes, &options);
    let resume = match parsed.template_type {
        TemplateType::Resume => Some(build_preview(parsed.primary(), &state.themes, &options)),
        _ => None,
    };
    info!(
        template_type = %parsed.template_type,
        theme_id = %theme_id,
        "Rendered preview"
    );

    Ok(Json(PreviewResponse {
        template_type: parsed.template_type,
        document_count: parsed.documents.len(),
        metadata: parsed.metadata(),
        css: theme_css(&style),
        theme_id,
        style,
        resume,
    }))
}

/// POST /api/v1/export/markdown
pub async fn handle_export_markdown(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let parsed = parse_request(&state, &req)?;
    if parsed.template_type != TemplateType::Resume {
        return Err(AppError::UnprocessableEntity(format!(
            "Markdown export needs a resume, got {}",
            parsed.template_type
        )));
    }
    let options = state.preview_options(req.reference_date.unwrap_or_else(today));
    let preview = build_preview(parsed.primary(), &state.themes, &options);
    let markdown = render_markdown(&preview.header, &preview.sections);
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
