pub mod error;
pub mod gst_init;
pub mod import;
pub mod player;
pub mod probe;

pub use error::{MediaError, MediaResult};
pub use player::{PlayerPipeline, VideoFrame};
pub use probe::{probe_file, MediaProbe};
