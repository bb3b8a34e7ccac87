//! Deferred steps of a submission cycle and how long each one waits.

use super::aggregate::SubmitOutcome;
use crate::shared::config::FormConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    /// Reverts the shake cue after a rejected submit.
    Shake,
    /// Simulated request latency.
    Submission,
    /// Hides the status message.
    StatusHide,
}

impl FormTimer {
    pub fn delay_ms(self, config: &FormConfig) -> u32 {
        match self {
            FormTimer::Shake => config.shake_ms,
            FormTimer::Submission => config.submit_latency_ms,
            FormTimer::StatusHide => config.status_visible_ms,
        }
    }

    /// Timer a submit attempt arms, if any.
    pub fn after_submit(outcome: &SubmitOutcome) -> Option<Self> {
        match outcome {
            SubmitOutcome::Rejected { .. } => Some(FormTimer::Shake),
            SubmitOutcome::Started => Some(FormTimer::Submission),
            SubmitOutcome::Ignored => None,
        }
    }

    /// Timer armed once the simulated request has completed.
    pub fn after_completion() -> Self {
        FormTimer::StatusHide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = FormConfig::default();
        assert_eq!(FormTimer::Shake.delay_ms(&config), 500);
        assert_eq!(FormTimer::Submission.delay_ms(&config), 1500);
        assert_eq!(FormTimer::StatusHide.delay_ms(&config), 5000);
    }

    #[test]
    fn test_delays_follow_config() {
        let config = FormConfig {
            shake_ms: 1,
            submit_latency_ms: 2,
            status_visible_ms: 3,
            ..FormConfig::default()
        };
        assert_eq!(FormTimer::Shake.delay_ms(&config), 1);
        assert_eq!(FormTimer::Submission.delay_ms(&config), 2);
        assert_eq!(FormTimer::StatusHide.delay_ms(&config), 3);
    }

    #[test]
    fn test_timer_per_outcome() {
        let rejected = SubmitOutcome::Rejected { invalid_fields: vec![0] };
        assert_eq!(FormTimer::after_submit(&rejected), Some(FormTimer::Shake));
        assert_eq!(FormTimer::after_submit(&SubmitOutcome::Started), Some(FormTimer::Submission));
        // a re-click while sending arms nothing
        assert_eq!(FormTimer::after_submit(&SubmitOutcome::Ignored), None);
        assert_eq!(FormTimer::after_completion(), FormTimer::StatusHide);
    }
}
