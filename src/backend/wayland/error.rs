//! Rendering errors for the Wayland backend.

use smithay_client_toolkit::shm::CreatePoolError;
use smithay_client_toolkit::shm::slot::CreateBufferError;
use thiserror::Error;

/// Errors that can occur while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("window has not been created yet")]
    WindowNotReady,

    #[error("failed to create shared memory pool: {0}")]
    Pool(#[from] CreatePoolError),

    #[error("failed to create buffer: {0}")]
    Buffer(#[from] CreateBufferError),

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}
