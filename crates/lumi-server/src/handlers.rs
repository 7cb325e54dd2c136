use axum::{
    Form, Json,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
};
use lumi_catalog::{BookRecord, CatalogError};

use crate::{
    error::{ApiError, Result},
    pipeline::summarize_and_speak,
    request::{ExtractUpload, Upload},
    state::AppState,
    types::{BookSummaryForm, SearchParams, SummaryPayload, language_or_default},
};

pub const NO_DESCRIPTION: &str = "No description found for this book.";

/// `POST /summarize`: summarize and voice an uploaded document
pub async fn summarize(
    State(state): State<AppState>,
    ExtractUpload(upload): ExtractUpload,
) -> Result<Json<SummaryPayload>> {
    let Upload {
        file_name,
        bytes,
        language,
    } = upload;

    tracing::info!(file_name = %file_name, size = bytes.len(), %language, "summarize upload");

    let text = tokio::task::spawn_blocking(move || lumi_extract::extract_text(bytes, &file_name))
        .await
        .map_err(|e| ApiError::Processing(format!("extraction task failed: {e}")))?
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ApiError::NoTextFound);
    }

    Ok(Json(summarize_and_speak(&state, &text, &language).await))
}

/// `GET /search_book?title=...`
pub async fn search_book(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<BookRecord>>> {
    let Query(params) = query.map_err(|e| ApiError::InvalidSearch(e.body_text()))?;

    tracing::info!(title = %params.title, "search books");

    let books = state
        .catalog
        .search(&params.title)
        .await
        .map_err(|e| ApiError::Search(e.to_string()))?;

    Ok(Json(books))
}

/// `POST /summarize_book`: summarize and voice a catalog description
pub async fn summarize_book(
    State(state): State<AppState>,
    form: std::result::Result<Form<BookSummaryForm>, FormRejection>,
) -> Result<Json<SummaryPayload>> {
    let Form(form) = form.map_err(|e| ApiError::InvalidBookRequest(e.body_text()))?;
    let language = language_or_default(form.language);

    tracing::info!(book_key = %form.book_key, %language, "summarize book");

    let detail = state.catalog.work(&form.book_key).await.map_err(|e| match e {
        CatalogError::InvalidKey(_) | CatalogError::Status { .. } => ApiError::BookFetch(e.to_string()),
        CatalogError::Connection(_) | CatalogError::MalformedResponse(_) => ApiError::BookSummary(e.to_string()),
    })?;

    let description = detail.description_text();
    if description.trim().is_empty() {
        tracing::info!(book_key = %form.book_key, "book has no description");
        return Ok(Json(SummaryPayload::message(NO_DESCRIPTION)));
    }

    Ok(Json(summarize_and_speak(&state, description, &language).await))
}
