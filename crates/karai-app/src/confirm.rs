//! Two-step gate for destructive actions.
//!
//! Deleting a category, meal, user, or order goes through an interactive
//! confirmation: the first step arms the gate, and the request is issued
//! only when the armed gate is consumed.

#[derive(Debug, Default)]
pub struct Confirmation {
    armed: bool,
}

impl Confirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// First interaction: ask the user to confirm.
    pub fn request(&mut self) {
        self.armed = true;
    }

    /// The user backed out.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Consume the confirmation. Returns `true` exactly once per armed
    /// request; the destructive call must be skipped on `false`.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}
