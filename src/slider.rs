//! Before/after reveal position.

use log::debug;

use crate::config;

pub const MIN_POSITION: f64 = 0.0;
pub const MAX_POSITION: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(config::DEFAULT_SLIDER_POSITION)
    }
}

impl SliderState {
    pub fn new(position: f64) -> Self {
        Self {
            position: position.clamp(MIN_POSITION, MAX_POSITION),
            dragging: false,
        }
    }

    /// Percentage of the container the "after" image covers.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Moves the handle under the pointer. Ignored unless a drag is in
    /// progress or while the container has no usable width yet.
    pub fn update_position(&mut self, client_x: f64, container_left: f64, container_width: f64) {
        if !self.dragging {
            return;
        }
        if !(container_width.is_finite() && container_width > 0.0) {
            debug!("skipping slider update, container width is {}", container_width);
            return;
        }

        let percentage = (client_x - container_left) / container_width * 100.0;
        if percentage.is_nan() {
            return;
        }
        self.position = percentage.clamp(MIN_POSITION, MAX_POSITION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging() -> SliderState {
        let mut s = SliderState::default();
        s.begin_drag();
        s
    }

    #[test]
    fn starts_centered_and_idle() {
        let s = SliderState::default();
        assert_eq!(s.position(), 50.0);
        assert!(!s.dragging());
    }

    #[test]
    fn maps_pointer_into_percentage() {
        let mut s = dragging();
        s.update_position(150.0, 100.0, 200.0);
        assert_eq!(s.position(), 25.0);
    }

    #[test]
    fn clamps_outside_container() {
        let mut s = dragging();
        s.update_position(-5_000.0, 100.0, 200.0);
        assert_eq!(s.position(), 0.0);
        s.update_position(99.0, 100.0, 200.0);
        assert_eq!(s.position(), 0.0);
        s.update_position(301.0, 100.0, 200.0);
        assert_eq!(s.position(), 100.0);
        s.update_position(f64::MAX, 100.0, 200.0);
        assert_eq!(s.position(), 100.0);
    }

    #[test]
    fn position_always_within_bounds() {
        let mut s = dragging();
        let mut x = -1_000.0;
        while x < 1_000.0 {
            s.update_position(x, 37.0, 413.0);
            assert!((MIN_POSITION..=MAX_POSITION).contains(&s.position()));
            x += 17.3;
        }
    }

    #[test]
    fn zero_width_is_skipped() {
        let mut s = dragging();
        s.update_position(150.0, 100.0, 200.0);
        s.update_position(400.0, 100.0, 0.0);
        assert_eq!(s.position(), 25.0);
        assert!(s.position().is_finite());

        s.update_position(400.0, 100.0, f64::NAN);
        s.update_position(400.0, 100.0, -10.0);
        assert_eq!(s.position(), 25.0);
    }

    #[test]
    fn updates_ignored_after_release() {
        let mut s = dragging();
        s.update_position(300.0, 100.0, 200.0);
        assert_eq!(s.position(), 100.0);

        s.end_drag();
        s.update_position(100.0, 100.0, 200.0);
        assert_eq!(s.position(), 100.0);

        s.begin_drag();
        s.update_position(100.0, 100.0, 200.0);
        assert_eq!(s.position(), 0.0);
    }

    #[test]
    fn idle_slider_ignores_moves() {
        let mut s = SliderState::default();
        s.update_position(150.0, 100.0, 200.0);
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn initial_position_is_clamped() {
        assert_eq!(SliderState::new(140.0).position(), 100.0);
        assert_eq!(SliderState::new(-1.0).position(), 0.0);
    }
}
