use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Terminal failure of a single event. The process keeps serving; nothing
/// is retried.
#[derive(Debug, thiserror::Error)]
pub(crate) enum HandlerError {
    /// The app has no installation on the repository it needs to write to.
    #[error("no installation for {owner}/{repo}: {source}")]
    Configuration {
        owner: String,
        repo: String,
        source: octocrab::Error,
    },
    /// A read or write against GitHub failed; the operation stopped at
    /// that step.
    #[error("store call failed: {0}")]
    Store(#[from] octocrab::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(octocrab::Error::GitHub { source, backtrace }) => {
                tracing::error!("GitHub Error: {source}\n{backtrace}");
            }
            error => tracing::error!("{error}"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
