use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("QR capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("QR encoding error: {0}")]
    Encoding(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<qrcode::types::QrError> for AppError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => AppError::CapacityExceeded(
                "payload too large for the chosen error-correction level".to_string(),
            ),
            other => AppError::Encoding(other.to_string()),
        }
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Image(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
