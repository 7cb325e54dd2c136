use axum::extract::{FromRequest, Multipart, Request, multipart::MultipartError};
use http::StatusCode;

use crate::{error::ApiError, types::language_or_default};

/// Document uploaded to `POST /summarize`
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub language: String,
}

/// Extractor for the `file` and `language` multipart fields
///
/// Unknown fields are skipped. The body size limit comes from the router's
/// `DefaultBodyLimit`.
pub struct ExtractUpload(pub Upload);

impl<S> FromRequest<S> for ExtractUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| ApiError::InvalidUpload {
                status: e.status(),
                message: e.body_text(),
            })?;

        let mut file: Option<(String, Vec<u8>)> = None;
        let mut language: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(rejected)? {
            let name = field.name().unwrap_or_default().to_owned();

            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await.map_err(rejected)?;
                    file = Some((file_name, bytes.to_vec()));
                }
                "language" => {
                    language = Some(field.text().await.map_err(rejected)?);
                }
                _ => {}
            }
        }

        let (file_name, bytes) = file.ok_or_else(|| ApiError::InvalidUpload {
            status: StatusCode::BAD_REQUEST,
            message: "Missing required 'file' field in multipart form".to_owned(),
        })?;

        Ok(Self(Upload {
            file_name,
            bytes,
            language: language_or_default(language),
        }))
    }
}

fn rejected(error: MultipartError) -> ApiError {
    ApiError::InvalidUpload {
        status: error.status(),
        message: error.body_text(),
    }
}
