use std::path::Path;

use gst_pbutils::prelude::DiscovererStreamInfoExt;
use gstreamer as gst;
use gstreamer_pbutils as gst_pbutils;

use crate::error::{MediaError, MediaResult};
use crate::gst_init::init_once;

pub struct MediaProbe {
    pub duration: Option<f64>,
    pub resolution: Option<(u32, u32)>,
    pub codec: Option<String>,
    pub has_video: bool,
    pub has_audio: bool,
}

/// Discover duration, resolution and codec of a media file before the
/// playback pipeline is built for it.
pub fn probe_file(path: &Path) -> MediaResult<MediaProbe> {
    init_once();

    let uri = url_from_path(path).ok_or(MediaError::InvalidPath)?;

    let discoverer = gst_pbutils::Discoverer::new(gst::ClockTime::from_seconds(10))
        .map_err(|e| MediaError::Probe(e.to_string()))?;
    let info = discoverer
        .discover_uri(&uri)
        .map_err(|e| MediaError::Probe(e.to_string()))?;

    let duration = info
        .duration()
        .map(|d| d.nseconds() as f64 / 1_000_000_000.0);

    let mut resolution = None;
    let mut codec = None;
    let mut has_video = false;

    if let Some(stream) = info.video_streams().into_iter().next() {
        has_video = true;
        let w = stream.width();
        let h = stream.height();
        if w > 0 && h > 0 {
            resolution = Some((w, h));
        }
        if let Some(caps) = DiscovererStreamInfoExt::caps(&stream) {
            if let Some(structure) = caps.structure(0) {
                codec = Some(structure.name().as_str().to_string());
            }
        }
    }

    let has_audio = !info.audio_streams().is_empty();

    Ok(MediaProbe {
        duration,
        resolution,
        codec,
        has_video,
        has_audio,
    })
}

fn url_from_path(path: &Path) -> Option<String> {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    Some(format!("file://{}", abs.display()))
}
