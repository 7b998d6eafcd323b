use std::path::PathBuf;

use titler_media::{probe_file, MediaError, PlayerPipeline};
use titler_state::video::VideoSource;
use titler_ui::constants::{STAGE_HEIGHT, STAGE_WIDTH};

use crate::TitlerApp;

pub struct LoadedVideo {
    pub source: VideoSource,
    pub pipeline: PlayerPipeline,
    pub poster: image::RgbaImage,
}

pub enum LoadOutcome {
    Loaded(Box<LoadedVideo>),
    Failed {
        filename: String,
        error: MediaError,
    },
}

impl TitlerApp {
    /// Probe and preroll on a loader thread; the result is polled from
    /// `update`. One load at a time.
    pub fn open_video(&mut self, path: PathBuf) {
        if self.loading {
            return;
        }
        self.loading = true;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.state.ui.status = Some(format!("Loading {filename}…"));

        let tx = self.loader_tx.clone();
        std::thread::Builder::new()
            .name("video-loader".into())
            .spawn(move || {
                let _ = tx.send(load_video(path));
            })
            .expect("failed to spawn video loader thread");
    }

    pub fn poll_loader(&mut self, ctx: &egui::Context) {
        while let Ok(outcome) = self.loader_rx.try_recv() {
            self.loading = false;
            match outcome {
                LoadOutcome::Loaded(loaded) => {
                    let poster = loaded.poster;
                    self.textures.frame = Some(Self::load_frame_texture(
                        ctx,
                        poster.width(),
                        poster.height(),
                        poster.as_raw(),
                    ));
                    // Replaces any previous pipeline; dropping it sets the
                    // old GStreamer pipeline to Null.
                    self.pipeline = Some(loaded.pipeline);
                    self.state.session.video = Some(loaded.source);
                    self.state.session.playback.stop();
                    self.prev_playback = self.state.session.playback.state;
                    self.state.ui.status = None;
                }
                LoadOutcome::Failed { filename, error } => {
                    // Nothing is recorded on failure; any previous video
                    // keeps playing role.
                    tracing::error!(%filename, %error, "failed to open video");
                    self.state.ui.status = Some(format!("Could not open {filename}: {error}"));
                }
            }
            ctx.request_repaint();
        }
    }
}

fn load_video(path: PathBuf) -> LoadOutcome {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let fail = |error: MediaError| LoadOutcome::Failed {
        filename: filename.clone(),
        error,
    };

    let probe = match probe_file(&path) {
        Ok(p) => p,
        Err(e) => return fail(e),
    };
    if !probe.has_video {
        return fail(MediaError::NoVideoStream);
    }

    let pipeline = match PlayerPipeline::open(&path, STAGE_WIDTH, STAGE_HEIGHT, probe.has_audio) {
        Ok(p) => p,
        Err(e) => return fail(e),
    };
    let poster = match pipeline.poster_frame() {
        Ok(img) => img,
        Err(e) => return fail(e),
    };

    let mut source = VideoSource::from_path(path);
    source.duration = probe.duration.or_else(|| pipeline.duration_seconds());
    source.resolution = probe.resolution;
    source.codec = probe.codec;
    source.has_audio = probe.has_audio;

    LoadOutcome::Loaded(Box::new(LoadedVideo {
        source,
        pipeline,
        poster,
    }))
}
