use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("api key environment variable '{0}' is not set")]
    MissingApiKey(String),

    #[error("gemini api returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("gemini api returned no text candidates")]
    EmptyResponse,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
