use thiserror::Error;

#[derive(Error, Debug)]
pub enum WdError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("bad status code {status}, body: {body}")]
    Response {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
