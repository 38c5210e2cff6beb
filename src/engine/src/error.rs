use thiserror::Error;

/// A rendering engine could not be acquired. The two variants tell an
/// operator whether to look at the machine this process runs on or at
/// the remote rendering service.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("local rendering engine unavailable: {0}")]
    LocalUnavailable(String),
    #[error("remote rendering endpoint unreachable: {0}")]
    RemoteUnreachable(String),
}

/// The engine was acquired but the document could not be turned into
/// PDF bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to open a page: {0}")]
    PageOpen(String),
    #[error("failed to load the document into the page: {0}")]
    ContentLoad(String),
    #[error("PDF capture failed: {0}")]
    Capture(String),
    #[error("PDF capture returned no bytes")]
    EmptyOutput,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Provision(#[from] ProvisionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
