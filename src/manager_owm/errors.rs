use thiserror::Error;

#[derive(Error, Debug)]
pub enum OWMError {
    #[error("Error: Unable to fetch data. Status Code: {status}")]
    Status { status: u16, message: String },
    #[error("http request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("json document error: {0}")]
    Document(#[from] serde_json::Error),
}
