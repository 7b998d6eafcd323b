pub type MediaResult<T> = Result<T, MediaError>;

#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    #[error("failed to create {element}: {reason}")]
    ElementCreate { element: String, reason: String },

    #[error("failed to link pipeline elements: {0}")]
    Link(String),

    #[error("pipeline state change failed: {0}")]
    StateChange(String),

    #[error("preroll failed: {0}")]
    Preroll(String),

    #[error("seek failed: {0}")]
    Seek(String),

    #[error("media probe failed: {0}")]
    Probe(String),

    #[error("file has no video stream")]
    NoVideoStream,

    #[error("path is not valid UTF-8")]
    InvalidPath,

    #[error("no frame available from the video sink")]
    NoFrame,
}
