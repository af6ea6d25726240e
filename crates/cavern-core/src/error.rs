use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while assembling a room graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The requested room ID does not exist in the graph.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),

    /// The room already carries a riddle; riddles cannot be replaced.
    #[error("room \"{0}\" already has a riddle")]
    RiddleAlreadySet(String),
}
