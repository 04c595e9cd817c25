use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ThemeCategory, ThemeDescriptor};
use crate::state::AppState;
use crate::theme::{resolve_style, theme_css};

#[derive(Deserialize)]
pub struct ThemeListQuery {
    pub category: Option<String>,
}

/// GET /api/v1/themes
pub async fn handle_list_themes(
    State(state): State<AppState>,
    Query(params): Query<ThemeListQuery>,
) -> Result<Json<Vec<ThemeDescriptor>>, AppError> {
    let themes = match params.category.as_deref() {
        Some(raw) => {
            let category = ThemeCategory::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unknown theme category '{raw}'")))?;
            state.themes.by_category(category).into_iter().cloned().collect()
        }
        None => state.themes.all().to_vec(),
    };
    Ok(Json(themes))
}

/// GET /api/v1/themes/:id
pub async fn handle_get_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ThemeDescriptor>, AppError> {
    state
        .themes
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Theme {id} not found")))
}

/// GET /api/v1/themes/:id/css
pub async fn handle_theme_css(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let theme = state
        .themes
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Theme {id} not found")))?;
    let css = theme_css(&resolve_style(Some(theme), None, None));
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
