#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
    /// The source ran out on its own. Only reachable from `Playing`.
    Completed,
}

#[derive(Debug, Clone)]
pub struct Playback {
    pub state: PlaybackState,
    /// Current playback position in seconds, rounded to one decimal.
    pub position: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            position: 0.0,
        }
    }
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// No-op while already playing and after the source completed.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Stopped | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Playing | PlaybackState::Completed => {}
        }
    }

    /// Leaves the position untouched.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Valid from every state: position back to zero, `Completed` cleared.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.position = 0.0;
    }

    pub fn complete(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Completed;
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Publishes a sampled source position, rounded to one decimal.
    pub fn set_position(&mut self, seconds: f64) {
        self.position = round_to_tenth(seconds);
    }
}

pub fn round_to_tenth(seconds: f64) -> f64 {
    (seconds * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_is_idempotent_while_playing() {
        let mut p = Playback::default();
        p.play();
        let snapshot = (p.state, p.position);
        p.play();
        assert_eq!((p.state, p.position), snapshot);
    }

    #[test]
    fn play_from_completed_is_a_no_op() {
        let mut p = Playback::default();
        p.play();
        p.complete();
        p.play();
        assert_eq!(p.state, PlaybackState::Completed);
    }

    #[test]
    fn stop_resets_from_every_state() {
        for setup in [
            |_: &mut Playback| {},
            |p: &mut Playback| p.play(),
            |p: &mut Playback| {
                p.play();
                p.pause();
            },
            |p: &mut Playback| {
                p.play();
                p.complete();
            },
        ] {
            let mut p = Playback::default();
            setup(&mut p);
            p.set_position(7.3);
            p.stop();
            assert_eq!(p.state, PlaybackState::Stopped);
            assert_eq!(p.position, 0.0);
        }
    }

    #[test]
    fn pause_preserves_position() {
        let mut p = Playback::default();
        p.play();
        p.set_position(4.2);
        p.pause();
        assert_eq!(p.state, PlaybackState::Paused);
        assert_eq!(p.position, 4.2);
    }

    #[test]
    fn complete_only_from_playing() {
        let mut p = Playback::default();
        p.complete();
        assert_eq!(p.state, PlaybackState::Stopped);
        p.play();
        p.pause();
        p.complete();
        assert_eq!(p.state, PlaybackState::Paused);
    }

    #[test]
    fn position_is_rounded_to_one_decimal() {
        let mut p = Playback::default();
        p.set_position(1.2345);
        assert_eq!(p.position, 1.2);
        p.set_position(2.96);
        assert_eq!(p.position, 3.0);
    }
}
