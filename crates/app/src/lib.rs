use std::sync::mpsc;

use titler_media::PlayerPipeline;
use titler_state::playback::PlaybackState;
use titler_state::session::AppState;

mod loader;
mod playback;

use loader::LoadOutcome;

/// Texture handles owned by the app, looked up by the stage panel.
#[derive(Default)]
pub struct StageTextures {
    pub frame: Option<egui::TextureHandle>,
}

impl titler_ui::TextureLookup for StageTextures {
    fn stage_frame(&self) -> Option<&egui::TextureHandle> {
        self.frame.as_ref()
    }
}

/// The owned controller: session state, the live pipeline, the stage
/// texture and the loader channel all live here, created on app start and
/// torn down on drop. No ambient globals.
pub struct TitlerApp {
    state: AppState,
    pipeline: Option<PlayerPipeline>,
    textures: StageTextures,
    loader_tx: mpsc::Sender<LoadOutcome>,
    loader_rx: mpsc::Receiver<LoadOutcome>,
    loading: bool,
    prev_playback: PlaybackState,
}

impl TitlerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        titler_ui::theme::apply_theme(&cc.egui_ctx);
        let (loader_tx, loader_rx) = mpsc::channel();

        Self {
            state: AppState::default(),
            pipeline: None,
            textures: StageTextures::default(),
            loader_tx,
            loader_rx,
            loading: false,
            prev_playback: PlaybackState::Stopped,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() || self.state.session.video.is_none() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.state.session.playback.toggle_play();
        }
    }

    fn handle_open_request(&mut self) {
        if !self.state.ui.open_requested {
            return;
        }
        self.state.ui.open_requested = false;

        let picked = rfd::FileDialog::new()
            .add_filter("Video", titler_media::import::VIDEO_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            self.open_video(path);
        }
    }

    pub(crate) fn load_frame_texture(
        ctx: &egui::Context,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> egui::TextureHandle {
        ctx.load_texture(
            "stage_frame",
            egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba),
            egui::TextureOptions::LINEAR,
        )
    }
}

impl eframe::App for TitlerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader(ctx);
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::bottom("transport_panel")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                titler_ui::transport::transport_bar(ui, &mut self.state);
            });

        egui::SidePanel::right("inspector_panel")
            .default_width(260.0)
            .width_range(200.0..=400.0)
            .show(ctx, |ui| {
                titler_ui::inspector::inspector_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            titler_ui::stage::stage_panel(ui, &mut self.state, &self.textures);
        });

        self.handle_open_request();
        self.apply_playback_transitions(ctx);
        self.drive_playback(ctx);

        if self.state.session.playback.is_playing() {
            ctx.request_repaint();
        }
    }
}
