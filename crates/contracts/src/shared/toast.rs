//! Lifecycle of a toast or alert banner after it appears.

use crate::shared::config::NotificationTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Opacity set to 0, waiting for the transition to finish
    Fading,
    Removed,
}

/// A timed step: wait `delay_ms` after the previous step, then enter `phase`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStep {
    pub delay_ms: u32,
    pub phase: ToastPhase,
}

impl NotificationTiming {
    /// Steps for a toast created by `notify`
    pub fn toast_schedule(&self) -> [ToastStep; 2] {
        self.schedule_after(self.visible_ms)
    }

    /// Steps for an `.alert` already present when the page loads
    pub fn alert_schedule(&self) -> [ToastStep; 2] {
        self.schedule_after(self.alert_dismiss_ms)
    }

    fn schedule_after(&self, visible_ms: u32) -> [ToastStep; 2] {
        [
            ToastStep {
                delay_ms: visible_ms,
                phase: ToastPhase::Fading,
            },
            ToastStep {
                delay_ms: self.fade_ms,
                phase: ToastPhase::Removed,
            },
        ]
    }

    /// Phase of a toast `elapsed_ms` after creation
    pub fn toast_phase_at(&self, elapsed_ms: u64) -> ToastPhase {
        phase_at(&self.toast_schedule(), elapsed_ms)
    }
}

fn phase_at(steps: &[ToastStep], elapsed_ms: u64) -> ToastPhase {
    let mut phase = ToastPhase::Visible;
    let mut at = 0u64;
    for step in steps {
        at += u64::from(step.delay_ms);
        if elapsed_ms < at {
            break;
        }
        phase = step.phase;
    }
    phase
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Container model driven by a simulated clock
    struct FakeContainer {
        created_at: Vec<u64>,
    }

    impl FakeContainer {
        fn live(&self, now: u64, timing: &NotificationTiming) -> usize {
            self.created_at
                .iter()
                .filter(|t| timing.toast_phase_at(now - **t) != ToastPhase::Removed)
                .count()
        }
    }

    #[test]
    fn test_default_schedule() {
        let timing = NotificationTiming::default();
        assert_eq!(
            timing.toast_schedule(),
            [
                ToastStep {
                    delay_ms: 5000,
                    phase: ToastPhase::Fading
                },
                ToastStep {
                    delay_ms: 300,
                    phase: ToastPhase::Removed
                },
            ]
        );
        assert_eq!(timing.alert_schedule()[0].delay_ms, 5000);
    }

    #[test]
    fn test_phase_boundaries() {
        let timing = NotificationTiming::default();
        assert_eq!(timing.toast_phase_at(0), ToastPhase::Visible);
        assert_eq!(timing.toast_phase_at(4999), ToastPhase::Visible);
        assert_eq!(timing.toast_phase_at(5000), ToastPhase::Fading);
        assert_eq!(timing.toast_phase_at(5299), ToastPhase::Fading);
        assert_eq!(timing.toast_phase_at(5300), ToastPhase::Removed);
        assert_eq!(timing.toast_phase_at(60_000), ToastPhase::Removed);
    }

    #[test]
    fn test_each_toast_adds_one_then_expires() {
        let timing = NotificationTiming::default();
        let mut container = FakeContainer { created_at: vec![] };

        container.created_at.push(0);
        assert_eq!(container.live(0, &timing), 1);

        container.created_at.push(1000);
        assert_eq!(container.live(1000, &timing), 2);

        assert_eq!(container.live(5300, &timing), 1);
        assert_eq!(container.live(6300, &timing), 0);
    }

    #[test]
    fn test_zero_timing_removes_immediately() {
        let timing = NotificationTiming {
            visible_ms: 0,
            fade_ms: 0,
            alert_dismiss_ms: 0,
        };
        assert_eq!(timing.toast_phase_at(0), ToastPhase::Removed);
    }
}
