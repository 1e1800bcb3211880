use crate::constants::SWIPE_COMMIT_PX;

/// Navigation step a finished swipe asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeCommit {
    Next,
    Prev,
}

/// One pointer session over the track. Two states: idle (`active == false`)
/// and dragging. A pointer-down while already dragging restarts the gesture
/// from the new pointer (last pointer-down wins).
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    active: bool,
    start_x: f32,
    delta_x: f32,
}

impl SwipeTracker {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn delta_x(&self) -> f32 {
        self.delta_x
    }

    pub fn begin(&mut self, x: f32) {
        self.active = true;
        self.start_x = x;
        self.delta_x = 0.0;
    }

    /// Track pointer movement; returns the running delta, or `None` when no
    /// gesture is live (window-level move events fire regardless).
    pub fn drag(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.delta_x = x - self.start_x;
        Some(self.delta_x)
    }

    /// Finish the gesture. A drag strictly past the threshold commits one
    /// navigation step: leftward (negative delta) means next, rightward
    /// means prev. Anything shorter snaps back with no index change.
    pub fn release(&mut self) -> Option<SwipeCommit> {
        if !self.active {
            return None;
        }
        let delta = self.delta_x;
        self.active = false;
        self.delta_x = 0.0;
        if delta.abs() > SWIPE_COMMIT_PX {
            if delta < 0.0 {
                Some(SwipeCommit::Next)
            } else {
                Some(SwipeCommit::Prev)
            }
        } else {
            None
        }
    }

    /// Abandon the gesture without ever committing.
    pub fn cancel(&mut self) {
        self.active = false;
        self.delta_x = 0.0;
    }
}
