use std::fmt;

#[derive(Debug)]
pub enum MemeError {
    ClientError(String),
    RequestError(String),
    ResponseError(String),
    ImageError(String),
    EmptyPrompt,
}

impl fmt::Display for MemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemeError::ClientError(msg) => write!(f, "Client error: {}", msg),
            MemeError::RequestError(msg) => write!(f, "Request error: {}", msg),
            MemeError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            MemeError::ImageError(msg) => write!(f, "Image error: {}", msg),
            MemeError::EmptyPrompt => write!(f, "Prompt is empty; type a topic or phrase first"),
        }
    }
}

impl std::error::Error for MemeError {}

pub type Result<T> = std::result::Result<T, MemeError>;
