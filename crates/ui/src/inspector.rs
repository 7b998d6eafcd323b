use titler_state::session::AppState;

use crate::theme;

pub fn inspector_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Inspector");
    ui.separator();

    if let Some(status) = &state.ui.status {
        ui.colored_label(theme::ACCENT, status);
        ui.separator();
    }

    show_video_summary(ui, state);
    ui.separator();

    ui.label("Caption");
    let caption_count = state.session.captions.len();
    ui.colored_label(theme::TEXT_DIM, format!("Captions: {caption_count}"));

    let Some(caption) = state.selected_caption_mut() else {
        ui.colored_label(theme::TEXT_DIM, "Select a caption on the stage");
        return;
    };

    ui.text_edit_singleline(&mut caption.text);

    // Windows are taken as entered. An inverted window is simply a
    // caption that never shows.
    ui.horizontal(|ui| {
        ui.label("In");
        ui.add(
            egui::DragValue::new(&mut caption.in_time)
                .speed(0.1)
                .suffix("s"),
        );
        ui.label("Out");
        ui.add(
            egui::DragValue::new(&mut caption.out_time)
                .speed(0.1)
                .suffix("s"),
        );
    });
    ui.colored_label(
        theme::TEXT_DIM,
        format!("Position: ({:.0}, {:.0})", caption.x, caption.y),
    );
}

fn show_video_summary(ui: &mut egui::Ui, state: &AppState) {
    ui.label("Video");
    let Some(video) = &state.session.video else {
        ui.colored_label(theme::TEXT_DIM, "No video loaded");
        return;
    };

    ui.colored_label(theme::TEXT_PRIMARY, &video.filename);
    ui.colored_label(
        theme::TEXT_DIM,
        match video.duration {
            Some(seconds) => format!("Duration: {seconds:.2}s"),
            None => "Duration: Unknown".to_string(),
        },
    );
    ui.colored_label(
        theme::TEXT_DIM,
        match video.resolution {
            Some((w, h)) => format!("Resolution: {w}x{h}"),
            None => "Resolution: Unknown".to_string(),
        },
    );
    ui.colored_label(
        theme::TEXT_DIM,
        format!(
            "Codec: {}",
            video.codec.as_deref().unwrap_or("Unknown")
        ),
    );
    ui.colored_label(
        theme::TEXT_DIM,
        format!(
            "Audio: {}",
            if video.has_audio { "yes" } else { "no" }
        ),
    );
}
