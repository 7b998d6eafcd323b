use titler_state::session::AppState;

use crate::constants;
use crate::theme;

/// Transport controls plus the current-time readout. Play/pause/stop only
/// flip the state machine; the app maps the transitions onto the pipeline.
pub fn transport_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("Open Video…").clicked() {
            state.ui.open_requested = true;
        }
        if ui.button("Add Caption").clicked() {
            let id = state.session.add_caption("New caption");
            state.select_caption(id);
            state.end_drag();
        }

        ui.separator();

        let has_video = state.session.video.is_some();
        let playback = &mut state.session.playback;
        let btn = constants::TRANSPORT_BTN_SIZE;

        let play_label = if playback.is_playing() {
            "\u{23F8}"
        } else {
            "\u{25B6}"
        };
        if ui
            .add_enabled(has_video, egui::Button::new(play_label).min_size(btn))
            .on_hover_text(if playback.is_playing() {
                "Pause"
            } else {
                "Play"
            })
            .clicked()
        {
            playback.toggle_play();
        }

        if ui
            .add_enabled(has_video, egui::Button::new("\u{25FC}").min_size(btn))
            .on_hover_text("Stop")
            .clicked()
        {
            playback.stop();
        }

        ui.add_space(8.0);
        let timecode = match state.session.video.as_ref().and_then(|v| v.duration) {
            Some(duration) => format!("{:.1} / {:.1}s", state.session.playback.position, duration),
            None => format!("{:.1}s", state.session.playback.position),
        };
        ui.label(
            egui::RichText::new(timecode)
                .font(egui::FontId::monospace(12.0))
                .color(theme::TEXT_PRIMARY),
        );
    });
}
