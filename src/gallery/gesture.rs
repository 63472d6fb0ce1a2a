use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
}

/// Horizontal touch tracking for the lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Classify the gesture and forget both coordinates.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let (start, end) = (self.start_x.take(), self.end_x.take());
        let (start, end) = (start?, end?);

        if start - end > SWIPE_THRESHOLD {
            Some(Swipe::Left)
        } else if end - start > SWIPE_THRESHOLD {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}
