use std::sync::atomic::{AtomicU8, Ordering};

/// Whether a request is waiting for its completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No handle is owned, a new request may be armed.
    Idle,
    /// A handle is owned and awaits exactly one resolution.
    Armed,
}

impl Phase {
    const fn as_u8(self) -> u8 {
        match self {
            Phase::Idle => 0,
            Phase::Armed => 1,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Phase::Idle,
            _ => Phase::Armed,
        }
    }
}

/// Two-state machine driven by compare-and-swap.
pub(crate) struct PhaseCell(AtomicU8);

impl Default for PhaseCell {
    fn default() -> Self {
        Self(AtomicU8::new(Phase::Idle.as_u8()))
    }
}

impl PhaseCell {
    pub(crate) fn phase(&self) -> Phase {
        Phase::from_u8(self.0.load(Ordering::Acquire))
    }

    fn transition(&self, from: Phase, to: Phase) -> bool {
        self.0
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn try_arm(&self) -> bool {
        self.transition(Phase::Idle, Phase::Armed)
    }

    pub(crate) fn try_resolve(&self) -> bool {
        self.transition(Phase::Armed, Phase::Idle)
    }

    /// Returns the phase observed before the reset.
    pub(crate) fn force_idle(&self) -> Phase {
        Phase::from_u8(self.0.swap(Phase::Idle.as_u8(), Ordering::AcqRel))
    }
}
