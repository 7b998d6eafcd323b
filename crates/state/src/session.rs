use crate::caption::{Caption, CaptionId};
use crate::playback::Playback;
use crate::selection::Selection;
use crate::video::VideoSource;

/// Session data: everything that outlives a single frame. Captions are
/// never removed; they accumulate for the lifetime of the session.
#[derive(Default)]
pub struct SessionState {
    pub captions: Vec<Caption>,
    pub playback: Playback,
    pub video: Option<VideoSource>,
}

impl SessionState {
    pub fn add_caption(&mut self, text: impl Into<String>) -> CaptionId {
        let caption = Caption::new(text);
        let id = caption.id;
        self.captions.push(caption);
        id
    }

    pub fn caption(&self, id: CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id == id)
    }

    pub fn caption_mut(&mut self, id: CaptionId) -> Option<&mut Caption> {
        self.captions.iter_mut().find(|c| c.id == id)
    }

    /// The display set at `time`, recomputed from the windows on every
    /// call rather than cached.
    pub fn visible_captions(&self, time: f64) -> impl Iterator<Item = &Caption> {
        self.captions.iter().filter(move |c| c.visible_at(time))
    }
}

/// Transient per-frame UI bookkeeping, kept out of the session data.
#[derive(Default)]
pub struct UiState {
    pub selection: Selection,
    pub dragging_caption: Option<CaptionId>,
    pub open_requested: bool,
    pub status: Option<String>,
}

#[derive(Default)]
pub struct AppState {
    pub session: SessionState,
    pub ui: UiState,
}

impl AppState {
    /// Pointer press on a caption: it becomes the sole selection and the
    /// pointer starts dragging it.
    pub fn select_caption(&mut self, id: CaptionId) {
        if self.session.caption(id).is_none() {
            return;
        }
        self.ui.selection.select(id);
        self.ui.dragging_caption = Some(id);
    }

    /// Pointer press on the stage background.
    pub fn clear_selection(&mut self) {
        self.ui.selection.clear();
    }

    pub fn selected_caption_mut(&mut self) -> Option<&mut Caption> {
        let id = self.ui.selection.selected()?;
        self.session.caption_mut(id)
    }

    /// While a drag is live, the caption tracks the pointer in stage
    /// coordinates. No clamping; positions outside the stage are kept.
    pub fn drag_to(&mut self, pos: egui::Pos2) {
        let Some(id) = self.ui.dragging_caption else {
            return;
        };
        if let Some(caption) = self.session.caption_mut(id) {
            caption.set_position(pos);
        }
    }

    pub fn end_drag(&mut self) {
        self.ui.dragging_caption = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_b_deselects_a() {
        let mut state = AppState::default();
        let a = state.session.add_caption("a");
        let b = state.session.add_caption("b");

        state.select_caption(a);
        assert!(state.ui.selection.is_selected(a));

        state.select_caption(b);
        assert!(state.ui.selection.is_selected(b));
        assert!(!state.ui.selection.is_selected(a));
    }

    #[test]
    fn background_press_clears_selection() {
        let mut state = AppState::default();
        let a = state.session.add_caption("a");
        state.select_caption(a);
        state.clear_selection();
        assert_eq!(state.ui.selection.selected(), None);
    }

    #[test]
    fn drag_moves_caption_and_release_clears_drag_state() {
        let mut state = AppState::default();
        let id = state.session.add_caption("drag me");
        state.select_caption(id);

        state.drag_to(egui::pos2(260.0, 180.0));
        state.drag_to(egui::pos2(300.0, 150.0));
        state.end_drag();

        let caption = state.session.caption(id).unwrap();
        assert_eq!((caption.x, caption.y), (300.0, 150.0));
        assert_eq!(state.ui.dragging_caption, None);
    }

    #[test]
    fn drag_without_active_drag_is_ignored() {
        let mut state = AppState::default();
        let id = state.session.add_caption("still");
        state.drag_to(egui::pos2(10.0, 10.0));
        let caption = state.session.caption(id).unwrap();
        assert_eq!((caption.x, caption.y), (200.0, 200.0));
    }

    #[test]
    fn visible_set_follows_playback_position() {
        let mut state = AppState::default();
        let id = state.session.add_caption("window");
        {
            let c = state.session.caption_mut(id).unwrap();
            c.in_time = 2.0;
            c.out_time = 5.0;
        }

        let visible_at = |state: &AppState, t: f64| -> Vec<CaptionId> {
            state.session.visible_captions(t).map(|c| c.id).collect()
        };
        assert_eq!(visible_at(&state, 3.0), vec![id]);
        assert!(visible_at(&state, 6.0).is_empty());
        assert!(visible_at(&state, 1.0).is_empty());
    }

    #[test]
    fn boundary_between_adjacent_windows() {
        let mut state = AppState::default();
        let first = state.session.add_caption("first");
        let second = state.session.add_caption("second");
        state.session.caption_mut(first).unwrap().out_time = 3.0;
        {
            let c = state.session.caption_mut(second).unwrap();
            c.in_time = 3.0;
            c.out_time = 6.0;
        }

        let at_boundary: Vec<CaptionId> =
            state.session.visible_captions(3.0).map(|c| c.id).collect();
        assert_eq!(at_boundary, vec![second]);
    }

    #[test]
    fn edits_reach_only_the_selected_caption() {
        let mut state = AppState::default();
        let a = state.session.add_caption("a");
        let b = state.session.add_caption("b");
        state.select_caption(b);
        state.end_drag();

        {
            let c = state.selected_caption_mut().unwrap();
            c.text = "edited".to_string();
            c.in_time = 9.0;
            c.out_time = 1.0;
        }

        assert_eq!(state.session.caption(a).unwrap().text, "a");
        let b = state.session.caption(b).unwrap();
        assert_eq!(b.text, "edited");
        // Inverted window stored as given, not rejected.
        assert_eq!((b.in_time, b.out_time), (9.0, 1.0));
    }
}
