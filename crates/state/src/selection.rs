use crate::caption::CaptionId;

/// At most one caption is selected at a time; selecting one replaces
/// any previous selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<CaptionId>,
}

impl Selection {
    pub fn select(&mut self, id: CaptionId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<CaptionId> {
        self.selected
    }

    pub fn is_selected(&self, id: CaptionId) -> bool {
        self.selected == Some(id)
    }
}
