use titler_state::caption::CaptionId;
use titler_state::session::AppState;

use crate::constants;
use crate::theme;
use crate::TextureLookup;

/// The 800x450 stage: current video frame underneath, visible captions on
/// top. The stage background doubles as the deselect hit-target; captions
/// are individually pressable and draggable.
pub fn stage_panel(ui: &mut egui::Ui, state: &mut AppState, textures: &dyn TextureLookup) {
    let available = ui.available_rect_before_wrap();
    let stage_rect = egui::Rect::from_center_size(available.center(), constants::STAGE_SIZE);

    let bg_response = ui.allocate_rect(stage_rect, egui::Sense::click());

    let painter = ui.painter().with_clip_rect(stage_rect.expand(2.0));
    painter.rect_filled(stage_rect, egui::CornerRadius::ZERO, theme::STAGE_BG);
    painter.rect_stroke(
        stage_rect,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(1.0, theme::BORDER),
        egui::StrokeKind::Outside,
    );

    match textures.stage_frame() {
        Some(tex) => {
            // Stretched to the full stage regardless of source aspect.
            painter.image(
                tex.id(),
                stage_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            painter.text(
                stage_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Open a video to begin",
                egui::FontId::proportional(16.0),
                theme::TEXT_DIM,
            );
        }
    }

    // Recomputed from the windows on every paint, playing or not.
    let time = state.session.playback.position;
    let visible: Vec<(CaptionId, String, egui::Pos2)> = state
        .session
        .visible_captions(time)
        .map(|c| (c.id, c.text.clone(), c.position()))
        .collect();

    for (id, text, pos) in visible {
        let galley = painter.layout_no_wrap(
            text,
            egui::FontId::proportional(constants::CAPTION_FONT_SIZE),
            theme::CAPTION_COLOR,
        );
        let center = stage_rect.min + pos.to_vec2();
        let rect = egui::Rect::from_center_size(
            center,
            galley.size() + egui::Vec2::splat(constants::CAPTION_HIT_PADDING * 2.0),
        );

        let response = ui.interact(rect, ui.id().with(id), egui::Sense::click_and_drag());

        if response.clicked() {
            state.select_caption(id);
            state.end_drag();
        }
        if response.drag_started() {
            state.select_caption(id);
        }
        if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                state.drag_to((pointer - stage_rect.min).to_pos2());
            }
        }
        if response.drag_stopped() {
            state.end_drag();
        }

        if state.ui.selection.is_selected(id) {
            painter.rect_stroke(
                rect,
                theme::ROUNDING,
                egui::Stroke::new(1.0, theme::ACCENT),
                egui::StrokeKind::Outside,
            );
        }

        painter.galley(
            center - galley.size() / 2.0,
            galley,
            theme::CAPTION_COLOR,
        );
    }

    if bg_response.clicked() {
        state.clear_selection();
    }
}
