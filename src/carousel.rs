//! Testimonial carousel state.
//!
//! The controller knows nothing about the DOM. The widget in
//! `components::testimonials` feeds it clicks and timer ticks and renders
//! whatever `active_index` and the rotation table say.

use std::rc::Rc;

use thiserror::Error;

/// Largest tilt, in degrees, given to a card sitting behind the active one.
pub const MAX_ROTATION_DEG: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub designation: String,
    pub image_ref: String,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str, designation: &str, image_ref: &str) -> Self {
        Self {
            quote: quote.to_string(),
            name: name.to_string(),
            designation: designation.to_string(),
            image_ref: image_ref.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one testimonial")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// How a single card is drawn in the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub opacity: f64,
    pub scale: f64,
    pub rotate_deg: i32,
    pub z_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselController {
    testimonials: Rc<[Testimonial]>,
    rotations: Rc<[i32]>,
    active_index: usize,
    auto_advance: bool,
}

impl CarouselController {
    /// Builds a controller starting at the first testimonial.
    ///
    /// `unit_random` must yield values in `[0, 1)`; it is called once per
    /// testimonial and never again, so the tilt of each card is fixed for
    /// the controller's lifetime.
    pub fn new(
        testimonials: Rc<[Testimonial]>,
        auto_advance: bool,
        mut unit_random: impl FnMut() -> f64,
    ) -> Result<Self, CarouselError> {
        if testimonials.is_empty() {
            return Err(CarouselError::Empty);
        }

        let rotations = testimonials
            .iter()
            .map(|_| rotation_from_unit(unit_random()))
            .collect::<Vec<_>>();

        Ok(Self {
            testimonials,
            rotations: rotations.into(),
            active_index: 0,
            auto_advance,
        })
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn active(&self) -> &Testimonial {
        &self.testimonials[self.active_index]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    /// Cached tilt for the card at `index`, 0 if out of range.
    pub fn rotation(&self, index: usize) -> i32 {
        self.rotations.get(index).copied().unwrap_or(0)
    }

    /// The active card sits upright on top; the rest fan out behind it at
    /// their cached tilt, earlier cards above later ones.
    pub fn pose(&self, index: usize) -> CardPose {
        if self.is_active(index) {
            CardPose {
                opacity: 1.0,
                scale: 1.0,
                rotate_deg: 0,
                z_index: 999,
            }
        } else {
            CardPose {
                opacity: 0.7,
                scale: 0.95,
                rotate_deg: self.rotation(index),
                z_index: (self.len() + 2).saturating_sub(index),
            }
        }
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.len();
    }

    pub fn previous(&mut self) {
        let count = self.len();
        self.active_index = (self.active_index + count - 1) % count;
    }

    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Next => self.next(),
            Step::Previous => self.previous(),
        }
    }
}

/// Maps a unit sample onto an integer angle in `[-10, 10]`.
fn rotation_from_unit(sample: f64) -> i32 {
    let span = (2 * MAX_ROTATION_DEG + 1) as f64;
    let bucket = (sample.clamp(0.0, 1.0) * span).floor() as i32;
    bucket.min(2 * MAX_ROTATION_DEG) - MAX_ROTATION_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Rc<[Testimonial]> {
        names
            .iter()
            .map(|name| Testimonial::new("Great work.", name, "Owner", "/img.jpg"))
            .collect::<Vec<_>>()
            .into()
    }

    fn carousel(names: &[&str]) -> CarouselController {
        CarouselController::new(people(names), false, || 0.5).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = CarouselController::new(people(&[]), true, || 0.5).unwrap_err();
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn next_walks_forward_and_wraps() {
        let mut c = carousel(&["A", "B", "C"]);
        assert_eq!(c.active().name, "A");
        c.next();
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.active().name, "B");
        c.next();
        assert_eq!(c.active().name, "C");
        c.next();
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.active().name, "A");
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 1..=7 {
            let names = vec!["x"; n];
            let mut c = carousel(&names);
            let mut seen = Vec::new();
            for _ in 0..n {
                seen.push(c.active_index());
                c.next();
            }
            assert_eq!(seen, (0..n).collect::<Vec<_>>());
            assert_eq!(c.active_index(), 0);
        }
    }

    #[test]
    fn previous_undoes_next() {
        let mut c = carousel(&["A", "B", "C", "D"]);
        for start in 0..4 {
            while c.active_index() != start {
                c.next();
            }
            c.next();
            c.previous();
            assert_eq!(c.active_index(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = carousel(&["A", "B", "C"]);
        c.apply(Step::Previous);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn single_testimonial_stays_put() {
        let mut c = carousel(&["only"]);
        c.next();
        assert_eq!(c.active_index(), 0);
        c.previous();
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn rotations_are_drawn_once() {
        let mut calls = 0;
        let samples = [0.0, 0.25, 0.5, 0.999];
        let c = CarouselController::new(people(&["A", "B", "C", "D"]), true, || {
            let s = samples[calls];
            calls += 1;
            s
        })
        .unwrap();
        assert_eq!(calls, 4);

        let first: Vec<_> = (0..4).map(|i| c.rotation(i)).collect();
        assert_eq!(first, vec![-10, -5, 0, 10]);

        let mut moved = c.clone();
        moved.next();
        moved.next();
        let again: Vec<_> = (0..4).map(|i| moved.rotation(i)).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn rotation_stays_in_range_for_odd_samples() {
        for sample in [-3.0, 0.0, 0.04, 0.5, 0.96, 1.0, 7.5] {
            let r = rotation_from_unit(sample);
            assert!((-MAX_ROTATION_DEG..=MAX_ROTATION_DEG).contains(&r), "{sample} -> {r}");
        }
    }

    #[test]
    fn active_card_is_upright_and_on_top() {
        let mut c = CarouselController::new(people(&["A", "B", "C"]), false, || 0.0).unwrap();
        c.next();

        let top = c.pose(1);
        assert_eq!(top.rotate_deg, 0);
        assert_eq!(top.z_index, 999);
        assert_eq!(top.opacity, 1.0);

        let behind = c.pose(0);
        assert_eq!(behind.rotate_deg, -10);
        assert_eq!(behind.scale, 0.95);
        assert_eq!(behind.z_index, 5);
        assert!(c.pose(0).z_index > c.pose(2).z_index);
    }

    #[test]
    fn auto_advance_flag_is_kept() {
        let c = CarouselController::new(people(&["A"]), true, || 0.1).unwrap();
        assert!(c.auto_advance());
        assert!(!carousel(&["A"]).auto_advance());
    }
}
