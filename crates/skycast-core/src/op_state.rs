//! Refresh serialization state machine.
//!
//! Ensures only one refresh runs at a time. A refresh requested while one
//! is already in flight is ignored rather than raced against the snapshot.

/// Operation state gating the widget's refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    Busy,
}

impl OpState {
    /// True if a new refresh can be started.
    pub fn can_start_refresh(self) -> bool {
        matches!(self, OpState::Idle)
    }

    /// State after the in-flight refresh finishes, success or failure.
    pub fn on_refresh_done(self) -> Self {
        OpState::Idle
    }
}
