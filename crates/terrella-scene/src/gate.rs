//! Scene readiness gating for the label projector.
//!
//! Labels must not flicker over a half-loaded scene, so the projector stays
//! disabled until the loading flow has settled: the external "assets ready"
//! event starts two staged delays, a short one to hide the loading
//! indicator and a longer one to open the gate.

/// One-way latch enabling the label projector.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadinessGate {
    open: bool,
}

impl ReadinessGate {
    /// A closed gate.
    pub fn new() -> Self {
        Self { open: false }
    }

    /// Open the gate. Idempotent; the latch never closes again.
    pub fn open(&mut self) {
        if !self.open {
            log::info!("scene ready, label projector enabled");
        }
        self.open = true;
    }

    /// Whether the projector may run.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Tracks the staged post-load delays.
#[derive(Clone, Copy, Debug)]
pub struct LoadSettle {
    /// Seconds after load completion until the loading indicator hides.
    pub hide_delay: f32,
    /// Seconds after load completion until the readiness gate opens.
    pub ready_delay: f32,
    completed_at: Option<f32>,
    indicator_hidden: bool,
}

impl LoadSettle {
    /// Build a tracker with tunable delays (the scene defaults are 0.5 s
    /// and 2.0 s).
    pub fn new(hide_delay: f32, ready_delay: f32) -> Self {
        Self {
            hide_delay,
            ready_delay,
            completed_at: None,
            indicator_hidden: false,
        }
    }

    /// Record the external "all initial assets ready" event. Only the first
    /// call counts.
    pub fn complete(&mut self, elapsed: f32) {
        if self.completed_at.is_none() {
            self.completed_at = Some(elapsed);
            log::info!("assets loaded at t={elapsed:.2}s");
        }
    }

    /// Advance the settle timers, opening `gate` once its delay expires.
    /// Returns `true` on the single frame where the loading indicator
    /// should hide.
    pub fn advance(&mut self, elapsed: f32, gate: &mut ReadinessGate) -> bool {
        let Some(completed_at) = self.completed_at else {
            return false;
        };
        let since = elapsed - completed_at;

        let mut hide_now = false;
        if !self.indicator_hidden && since >= self.hide_delay {
            self.indicator_hidden = true;
            hide_now = true;
        }
        if !gate.is_open() && since >= self.ready_delay {
            gate.open();
        }
        hide_now
    }

    /// Whether the loading indicator has been hidden.
    pub fn indicator_hidden(&self) -> bool {
        self.indicator_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_closed_and_latches_open() {
        let mut gate = ReadinessGate::new();
        assert!(!gate.is_open());

        gate.open();
        assert!(gate.is_open());

        // A second open is harmless.
        gate.open();
        assert!(gate.is_open());
    }

    #[test]
    fn test_settle_does_nothing_before_completion() {
        let mut settle = LoadSettle::new(0.5, 2.0);
        let mut gate = ReadinessGate::new();

        assert!(!settle.advance(100.0, &mut gate));
        assert!(!gate.is_open());
        assert!(!settle.indicator_hidden());
    }

    #[test]
    fn test_settle_hides_indicator_then_opens_gate() {
        let mut settle = LoadSettle::new(0.5, 2.0);
        let mut gate = ReadinessGate::new();
        settle.complete(1.0);

        // Before the short delay: nothing.
        assert!(!settle.advance(1.2, &mut gate));
        assert!(!settle.indicator_hidden());
        assert!(!gate.is_open());

        // Past the short delay: hide fires exactly once.
        assert!(settle.advance(1.6, &mut gate));
        assert!(settle.indicator_hidden());
        assert!(!gate.is_open(), "gate still waits for the long delay");
        assert!(!settle.advance(1.7, &mut gate), "hide only fires once");

        // Past the long delay: gate opens.
        settle.advance(3.1, &mut gate);
        assert!(gate.is_open());
    }

    #[test]
    fn test_second_completion_event_is_ignored() {
        let mut settle = LoadSettle::new(0.5, 2.0);
        let mut gate = ReadinessGate::new();
        settle.complete(1.0);
        settle.complete(50.0);

        // Delays still count from the first completion.
        settle.advance(3.1, &mut gate);
        assert!(gate.is_open());
    }

    #[test]
    fn test_both_delays_can_expire_in_one_advance() {
        let mut settle = LoadSettle::new(0.5, 2.0);
        let mut gate = ReadinessGate::new();
        settle.complete(0.0);

        let hid = settle.advance(10.0, &mut gate);
        assert!(hid);
        assert!(gate.is_open());
    }
}
