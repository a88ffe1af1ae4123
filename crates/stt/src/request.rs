use axum::body::Body;

use crate::{error::SttError, types::TranscriptionRequest};

/// Extractor for the raw audio body of `POST /speech-to-text`
///
/// The browser posts a `Blob` without a reliable content type, so no
/// content-type check is made here.
pub struct ExtractAudio(pub TranscriptionRequest);

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

impl<S> axum::extract::FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                SttError::PayloadTooLarge {
                    limit: BODY_LIMIT_BYTES,
                }
            } else {
                tracing::error!("Failed to read audio upload: {err}");
                SttError::BodyRead(err.to_string())
            }
        })?;

        Ok(Self(TranscriptionRequest {
            audio: bytes.to_vec(),
            content_type,
        }))
    }
}
