use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptionId(Uuid);

impl CaptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CaptionId {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_POSITION: (f32, f32) = (200.0, 200.0);
pub const DEFAULT_IN_TIME: f64 = 0.0;
pub const DEFAULT_OUT_TIME: f64 = 3.0;

/// A timed text caption positioned on the stage. Visible only while the
/// playback position is inside `[in_time, out_time)`.
#[derive(Debug, Clone)]
pub struct Caption {
    pub id: CaptionId,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub in_time: f64,
    pub out_time: f64,
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CaptionId::new(),
            text: text.into(),
            x: DEFAULT_POSITION.0,
            y: DEFAULT_POSITION.1,
            in_time: DEFAULT_IN_TIME,
            out_time: DEFAULT_OUT_TIME,
        }
    }

    /// Half-open window test: in at `in_time`, out again at `out_time`.
    /// Inverted or empty windows never match; they are stored as given.
    pub fn visible_at(&self, time: f64) -> bool {
        self.in_time <= time && time < self.out_time
    }

    pub fn position(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn set_position(&mut self, pos: egui::Pos2) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caption_uses_defaults() {
        let c = Caption::new("Hello");
        assert_eq!((c.x, c.y), (200.0, 200.0));
        assert_eq!(c.in_time, 0.0);
        assert_eq!(c.out_time, 3.0);
    }

    #[test]
    fn window_is_half_open() {
        let mut c = Caption::new("t");
        c.in_time = 2.0;
        c.out_time = 5.0;
        assert!(c.visible_at(2.0));
        assert!(c.visible_at(3.0));
        assert!(c.visible_at(4.9));
        assert!(!c.visible_at(5.0));
        assert!(!c.visible_at(6.0));
        assert!(!c.visible_at(1.0));
    }

    #[test]
    fn adjacent_windows_share_no_instant() {
        let mut a = Caption::new("a");
        a.in_time = 0.0;
        a.out_time = 3.0;
        let mut b = Caption::new("b");
        b.in_time = 3.0;
        b.out_time = 6.0;
        assert!(!a.visible_at(3.0));
        assert!(b.visible_at(3.0));
    }

    #[test]
    fn inverted_window_never_matches() {
        let mut c = Caption::new("t");
        c.in_time = 5.0;
        c.out_time = 2.0;
        for t in [0.0, 2.0, 3.5, 5.0, 10.0] {
            assert!(!c.visible_at(t));
        }
    }
}
