use std::path::PathBuf;

/// The loaded video file as plain data. The live decode pipeline is owned
/// by the app controller, never by the state crate.
#[derive(Debug, Clone)]
pub struct VideoSource {
    pub path: PathBuf,
    pub filename: String,
    pub duration: Option<f64>,
    pub resolution: Option<(u32, u32)>,
    pub codec: Option<String>,
    pub has_audio: bool,
}

impl VideoSource {
    pub fn from_path(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            filename,
            duration: None,
            resolution: None,
            codec: None,
            has_audio: false,
        }
    }
}
