//! Gesture smoothing over a short window of raw classifications.
//!
//! The recognizer flickers between labels from one frame to the next. The
//! smoother keeps the last few raw samples, takes a majority vote on every
//! new sample and only then moves the confirmed [`CurrentGesture`]. An
//! open palm confirmed before a closed fist raises a [`ProcEvent`].

use crate::constants::WINDOW_CAPACITY;
use crate::gesture::{CurrentGesture, GestureLabel, Position, RawSample};
use log::debug;
use std::collections::VecDeque;

/// Bounded FIFO of the most recent raw samples
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    capacity: usize,
    samples: VecDeque<RawSample>,
}

impl SlidingWindow {
    /// Create a window holding at most `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window capacity must be greater than 0");
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest one when full
    pub fn push(&mut self, sample: RawSample) -> Option<RawSample> {
        let evicted = if self.samples.len() >= self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &RawSample> {
        self.samples.iter()
    }

    /// Label with the highest count; ties go to the label seen first
    pub fn majority(&self) -> Option<GestureLabel> {
        // First-seen order is kept by the Vec
        let mut counts: Vec<(GestureLabel, usize)> = Vec::with_capacity(GestureLabel::ALL.len());
        for sample in &self.samples {
            match counts.iter_mut().find(|(label, _)| *label == sample.label) {
                Some((_, count)) => *count += 1,
                None => counts.push((sample.label, 1)),
            }
        }

        let mut best: Option<(GestureLabel, usize)> = None;
        for (label, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Newest sample carrying `label`
    pub fn most_recent(&self, label: GestureLabel) -> Option<&RawSample> {
        self.samples.iter().rev().find(|s| s.label == label)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY)
    }
}

/// Open palm followed by a confirmed closed fist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcEvent {
    /// Where the palm was when it was last confirmed open
    pub open_palm_position: Position,
}

/// Result of feeding one raw sample to the smoother
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Winning label of the vote that produced this transition
    pub majority: GestureLabel,
    pub previous: CurrentGesture,
    pub current: CurrentGesture,
    pub proc_event: Option<ProcEvent>,
}

/// Majority-vote smoother producing the confirmed current gesture
#[derive(Debug, Clone, Default)]
pub struct GestureSmoother {
    window: SlidingWindow,
    current: CurrentGesture,
}

impl GestureSmoother {
    /// Create a smoother with a window of `capacity` samples
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            window: SlidingWindow::new(capacity),
            current: CurrentGesture::SENTINEL,
        }
    }

    /// Feed one raw sample
    ///
    /// Returns `None` when the confirmed gesture did not change and no
    /// event was raised.
    pub fn observe(&mut self, raw: RawSample) -> Option<Transition> {
        self.window.push(raw);
        let majority = self.window.majority()?;
        let previous = self.current;

        let current = if majority.is_watched() {
            self.window
                .most_recent(majority)
                .map_or(CurrentGesture::SENTINEL, |sample| CurrentGesture::from(*sample))
        } else {
            CurrentGesture::SENTINEL
        };

        let proc_event = if majority == GestureLabel::ClosedFist && previous.label == GestureLabel::OpenPalm {
            Some(ProcEvent {
                open_palm_position: previous.position,
            })
        } else {
            None
        };

        self.current = current;

        if current == previous && proc_event.is_none() {
            return None;
        }

        debug!(
            "Gesture {} -> {} (majority {}, window {})",
            previous.label,
            current.label,
            majority,
            self.window.len()
        );

        Some(Transition {
            majority,
            previous,
            current,
            proc_event,
        })
    }

    /// Confirmed gesture
    pub fn current(&self) -> CurrentGesture {
        self.current
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    /// Drop all samples and return to the sentinel gesture
    pub fn reset(&mut self) {
        self.window.clear();
        self.current = CurrentGesture::SENTINEL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palm(x: f64, y: f64) -> RawSample {
        RawSample::new(GestureLabel::OpenPalm, Position::new(x, y))
    }

    fn fist(x: f64, y: f64) -> RawSample {
        RawSample::new(GestureLabel::ClosedFist, Position::new(x, y))
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut window = SlidingWindow::new(3);
        assert!(window.push(palm(0.1, 0.1)).is_none());
        window.push(palm(0.2, 0.2));
        window.push(palm(0.3, 0.3));
        let evicted = window.push(palm(0.4, 0.4));

        assert_eq!(evicted, Some(palm(0.1, 0.1)));
        assert_eq!(window.len(), 3);
        let xs: Vec<f64> = window.iter().filter_map(|s| s.position).map(|p| p.x).collect();
        assert_eq!(xs, vec![0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_majority_tie_goes_to_first_seen() {
        let mut window = SlidingWindow::new(4);
        window.push(fist(0.5, 0.5));
        window.push(palm(0.5, 0.5));
        window.push(palm(0.5, 0.5));
        window.push(fist(0.5, 0.5));
        assert_eq!(window.majority(), Some(GestureLabel::ClosedFist));

        let mut window = SlidingWindow::new(4);
        window.push(RawSample::none());
        window.push(palm(0.5, 0.5));
        assert_eq!(window.majority(), Some(GestureLabel::None));
    }

    #[test]
    fn test_empty_window_has_no_majority() {
        assert_eq!(SlidingWindow::default().majority(), None);
    }

    #[test]
    fn test_current_tracks_most_recent_winning_sample() {
        let mut smoother = GestureSmoother::default();
        smoother.observe(palm(0.1, 0.1));
        smoother.observe(palm(0.2, 0.2));
        smoother.observe(palm(0.3, 0.3));

        assert_eq!(smoother.current().label, GestureLabel::OpenPalm);
        assert_eq!(smoother.current().position, Position::new(0.3, 0.3));
    }

    #[test]
    fn test_other_majority_forces_sentinel() {
        let mut smoother = GestureSmoother::new(3);
        smoother.observe(palm(0.4, 0.4));
        assert_eq!(smoother.current().label, GestureLabel::OpenPalm);

        let thumbs = RawSample::new(GestureLabel::ThumbUp, Position::new(0.4, 0.4));
        smoother.observe(thumbs);
        let transition = smoother.observe(thumbs).unwrap();

        assert_eq!(transition.majority, GestureLabel::ThumbUp);
        assert!(transition.current.is_sentinel());
        assert!(smoother.current().is_sentinel());
    }

    #[test]
    fn test_proc_event_carries_open_palm_position() {
        let mut smoother = GestureSmoother::new(3);
        smoother.observe(palm(0.42, 0.37));

        smoother.observe(fist(0.6, 0.6));
        let transition = smoother.observe(fist(0.61, 0.62)).unwrap();

        assert_eq!(transition.previous.label, GestureLabel::OpenPalm);
        assert_eq!(
            transition.proc_event,
            Some(ProcEvent {
                open_palm_position: Position::new(0.42, 0.37)
            })
        );
        assert_eq!(transition.current.position, Position::new(0.61, 0.62));
    }

    #[test]
    fn test_unchanged_gesture_yields_no_transition() {
        let mut smoother = GestureSmoother::new(4);
        assert!(smoother.observe(RawSample::none()).is_none());
        assert!(smoother.observe(RawSample::none()).is_none());
        assert!(smoother.current().is_sentinel());
    }

    #[test]
    fn test_reset_returns_to_sentinel() {
        let mut smoother = GestureSmoother::default();
        smoother.observe(palm(0.5, 0.5));
        smoother.reset();
        assert!(smoother.window().is_empty());
        assert!(smoother.current().is_sentinel());
    }
}
