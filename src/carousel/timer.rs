use crate::foundation::core::Millis;

/// A single-slot timer on a simulated clock.
///
/// Scheduling replaces whatever was pending, so a slot can never hold two deadlines. The host
/// event loop observes deadlines through [`TimerSlot::deadline`] and fires them with
/// [`TimerSlot::take_due`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    deadline: Option<Millis>,
}

impl TimerSlot {
    /// Arm the slot for `at`. Returns the deadline that was cancelled, if any.
    pub fn schedule(&mut self, at: Millis) -> Option<Millis> {
        self.deadline.replace(at)
    }

    pub fn cancel(&mut self) -> Option<Millis> {
        self.deadline.take()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and return the deadline if it is at or before `now`.
    pub fn take_due(&mut self, now: Millis) -> Option<Millis> {
        match self.deadline {
            Some(at) if at <= now => self.deadline.take(),
            _ => None,
        }
    }
}
