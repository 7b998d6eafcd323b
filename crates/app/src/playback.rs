use titler_state::playback::PlaybackState;

use crate::TitlerApp;

impl TitlerApp {
    /// Maps state-machine edges flipped by the panels onto pipeline calls.
    /// Runs after the panels so a button press takes effect in the same
    /// frame it was clicked.
    pub fn apply_playback_transitions(&mut self, ctx: &egui::Context) {
        let current = self.state.session.playback.state;
        let previous = self.prev_playback;
        if current == previous {
            return;
        }
        self.prev_playback = current;

        let Some(pipeline) = &self.pipeline else {
            return;
        };

        match current {
            PlaybackState::Playing => {
                if let Err(error) = pipeline.play() {
                    tracing::error!(%error, "failed to start playback");
                    self.state.session.playback.pause();
                    self.prev_playback = self.state.session.playback.state;
                }
            }
            PlaybackState::Paused => {
                if let Err(error) = pipeline.pause() {
                    tracing::error!(%error, "failed to pause playback");
                }
            }
            PlaybackState::Stopped => {
                if let Err(error) = pipeline.pause() {
                    tracing::error!(%error, "failed to pause playback");
                }
                // Flushing seek back to zero, then refresh the stage
                // texture once the seek has prerolled.
                match pipeline.seek_to_start() {
                    Ok(frame) => {
                        self.textures.frame = Some(Self::load_frame_texture(
                            ctx,
                            frame.width(),
                            frame.height(),
                            frame.as_raw(),
                        ));
                    }
                    Err(error) => tracing::error!(%error, "failed to seek to start"),
                }
            }
            // The pipeline ran out on its own; nothing to tell it.
            PlaybackState::Completed => {}
        }
    }

    /// The per-frame playback loop. A stale repaint scheduled just before
    /// a pause or stop lands on the state check and does nothing.
    pub fn drive_playback(&mut self, ctx: &egui::Context) {
        if !self.state.session.playback.is_playing() {
            return;
        }
        let Some(pipeline) = &self.pipeline else {
            return;
        };

        pipeline.drain_bus_errors();

        if let Some(position) = pipeline.position_seconds() {
            self.state.session.playback.set_position(position);
        }

        // Keep only the newest decoded frame for the stage texture.
        let mut latest = None;
        while let Some(frame) = pipeline.try_next_frame() {
            latest = Some(frame);
        }
        if let Some(frame) = latest {
            self.textures.frame = Some(Self::load_frame_texture(
                ctx,
                frame.width,
                frame.height,
                &frame.rgba,
            ));
        }

        if pipeline.is_eos() {
            self.state.session.playback.complete();
            self.prev_playback = self.state.session.playback.state;
            return;
        }

        ctx.request_repaint();
    }
}
