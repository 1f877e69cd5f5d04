use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create output file '{path}': {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to persist output file '{path}': {source}")]
    PersistOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Chart error during {context}: {source}")]
    Draw {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to write text chart: {source}")]
    WriteText {
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn draw<E>(context: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Draw {
            context,
            source: Box::new(source),
        }
    }
}
