use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnekError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    // The snake covers every cell, so there is nowhere to put an apple.
    // Normal play never gets here.
    #[error("no free cell left to spawn an apple")]
    BoardFull,
}

/// Combines the result of a session with the result of tearing it down.
/// The session error wins; a teardown error is then only logged.
pub fn session_result(
    session: Result<(), SnekError>,
    teardown: std::io::Result<()>,
) -> Result<(), SnekError> {
    match (session, teardown) {
        (Err(e), Err(cleanup)) => {
            error!("Teardown also failed: {}", cleanup);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), teardown) => Ok(teardown?),
    }
}
