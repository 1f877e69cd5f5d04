use thiserror::Error;

use super::RenderError;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

pub type SinkResult<T> = Result<T, SinkError>;

impl SinkError {
    pub fn render<E>(error: E) -> Self
    where
        E: Into<RenderError>,
    {
        error.into().into()
    }
}
