use squad_board_core::PlayerId;

/// Transport and remote-store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected response ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response payload: {0}")]
    Decode(String),

    #[error("Player not found: {0}")]
    NotFound(PlayerId),

    #[error("Insert returned no row")]
    MissingRow,
}

pub type Result<T> = std::result::Result<T, StoreError>;
