// src/error.rs
use thiserror::Error;

use crate::core::net::FetchError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Please enter a URL")]
    EmptyUrl,

    #[error("Failed to fetch the product page: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

impl From<printpdf::Error> for PipelineError {
    fn from(e: printpdf::Error) -> Self {
        PipelineError::Pdf(e.to_string())
    }
}

impl PipelineError {
    /// Anything outside input validation and page transport.
    pub fn is_unexpected(&self) -> bool {
        !matches!(self, PipelineError::EmptyUrl | PipelineError::Fetch(_))
    }

    /// Text for the error notice.
    pub fn user_message(&self) -> String {
        if self.is_unexpected() {
            format!("An unexpected error occurred: {self}")
        } else {
            self.to_string()
        }
    }
}
