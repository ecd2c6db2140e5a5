//! Resend cooldown for the "send code" control
//!
//! After a send is triggered the control is locked for a short simulated
//! delivery delay (`Sending`), then for a per-second countdown
//! (`CountingDown`). It unlocks when the countdown reaches zero.

use std::time::{Duration, Instant};

use tracing::debug;

use super::schedule::{Interval, Timeout};
use crate::config::settings::VerificationSettings;

const TICK: Duration = Duration::from_secs(1);

/// Current phase of the cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownPhase {
    /// The control is enabled
    Idle,
    /// Simulated delivery in progress
    Sending,
    /// Seconds left before the control re-enables
    CountingDown(u32),
}

/// Something that happened during a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The send delay elapsed and the countdown started
    Sent,
    /// One second passed; carries the seconds remaining
    Tick(u32),
    /// The countdown reached zero and the control re-enabled
    Finished,
}

/// Send-code cooldown timer, owned by the phone verification step
#[derive(Debug)]
pub struct CountdownTimer {
    send_delay: Duration,
    duration_secs: u32,
    remaining: u32,
    sending: Option<Timeout>,
    ticker: Option<Interval>,
}

impl CountdownTimer {
    /// Create an idle timer
    pub fn new(send_delay: Duration, duration_secs: u32) -> Self {
        Self {
            send_delay,
            duration_secs,
            remaining: 0,
            sending: None,
            ticker: None,
        }
    }

    /// Create an idle timer from the verification settings
    pub fn from_settings(settings: &VerificationSettings) -> Self {
        Self::new(settings.send_delay(), settings.cooldown_secs)
    }

    pub fn phase(&self) -> CooldownPhase {
        if self.sending.is_some() {
            CooldownPhase::Sending
        } else if self.remaining > 0 {
            CooldownPhase::CountingDown(self.remaining)
        } else {
            CooldownPhase::Idle
        }
    }

    /// Whether the send control is disabled
    pub fn is_locked(&self) -> bool {
        self.phase() != CooldownPhase::Idle
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Text for the send control
    pub fn label(&self) -> String {
        match self.phase() {
            CooldownPhase::Idle => "Send code".to_string(),
            CooldownPhase::Sending => "Sending...".to_string(),
            CooldownPhase::CountingDown(n) => format!("Retry in {}s", n),
        }
    }

    /// Begin the sending phase
    ///
    /// Returns `false` without doing anything while sending or counting down.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_locked() {
            debug!(phase = ?self.phase(), "Ignoring send while cooldown is active");
            return false;
        }
        self.sending = Some(Timeout::after(now, self.send_delay));
        true
    }

    /// Advance the timer to `now`, returning what happened in order
    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        if let Some(fired_at) = self.sending.as_mut().and_then(|t| t.poll(now)) {
            self.sending = None;
            self.remaining = self.duration_secs;
            self.ticker = Some(Interval::every(fired_at, TICK));
            events.push(TimerEvent::Sent);
        }

        let fired = self.ticker.as_mut().map(|t| t.poll(now)).unwrap_or(0);
        for _ in 0..fired {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.stop_ticker();
                events.push(TimerEvent::Finished);
                break;
            }
            events.push(TimerEvent::Tick(self.remaining));
        }

        events
    }

    /// Cancel any pending send and countdown, returning to `Idle`
    pub fn cancel(&mut self) {
        if let Some(mut timeout) = self.sending.take() {
            timeout.cancel();
        }
        self.stop_ticker();
        self.remaining = 0;
    }

    /// Whether any timer handle is still live
    pub fn has_pending_timers(&self) -> bool {
        self.sending.is_some() || self.ticker.is_some()
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn timer() -> CountdownTimer {
        CountdownTimer::new(SECOND, 60)
    }

    #[test]
    fn test_new_timer_is_idle() {
        let timer = timer();
        assert_eq!(timer.phase(), CooldownPhase::Idle);
        assert!(!timer.is_locked());
        assert_eq!(timer.label(), "Send code");
        assert!(!timer.has_pending_timers());
    }

    #[test]
    fn test_sending_phase_then_countdown() {
        let t0 = Instant::now();
        let mut timer = timer();

        assert!(timer.start(t0));
        assert_eq!(timer.phase(), CooldownPhase::Sending);
        assert_eq!(timer.label(), "Sending...");

        assert!(timer.poll(t0 + Duration::from_millis(999)).is_empty());
        assert_eq!(timer.phase(), CooldownPhase::Sending);

        assert_eq!(timer.poll(t0 + SECOND), vec![TimerEvent::Sent]);
        assert_eq!(timer.phase(), CooldownPhase::CountingDown(60));
        assert_eq!(timer.label(), "Retry in 60s");
    }

    #[test]
    fn test_countdown_runs_sixty_ticks() {
        let t0 = Instant::now();
        let mut timer = timer();
        timer.start(t0);
        timer.poll(t0 + SECOND);

        for i in 1..60u32 {
            let events = timer.poll(t0 + SECOND + SECOND * i);
            assert_eq!(events, vec![TimerEvent::Tick(60 - i)]);
            assert!(timer.is_locked());
        }

        let events = timer.poll(t0 + SECOND * 61);
        assert_eq!(events, vec![TimerEvent::Finished]);
        assert_eq!(timer.phase(), CooldownPhase::Idle);
        assert_eq!(timer.label(), "Send code");
        assert!(!timer.has_pending_timers());
    }

    #[test]
    fn test_start_is_ignored_while_locked() {
        let t0 = Instant::now();
        let mut timer = timer();
        assert!(timer.start(t0));
        assert!(!timer.start(t0 + Duration::from_millis(500)));

        timer.poll(t0 + SECOND);
        assert!(!timer.start(t0 + SECOND * 2));
        assert!(timer.is_locked());
    }

    #[test]
    fn test_restart_after_finish() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(SECOND, 2);
        timer.start(t0);
        timer.poll(t0 + SECOND * 3);
        assert_eq!(timer.phase(), CooldownPhase::Idle);

        assert!(timer.start(t0 + SECOND * 4));
        assert_eq!(timer.phase(), CooldownPhase::Sending);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(SECOND, 3);
        timer.start(t0);

        let events = timer.poll(t0 + SECOND * 10);
        assert_eq!(
            events,
            vec![
                TimerEvent::Sent,
                TimerEvent::Tick(2),
                TimerEvent::Tick(1),
                TimerEvent::Finished
            ]
        );
        assert!(!timer.is_locked());
    }

    #[test]
    fn test_cancel_tears_down_everything() {
        let t0 = Instant::now();
        let mut timer = timer();
        timer.start(t0);
        timer.poll(t0 + SECOND);
        assert!(timer.has_pending_timers());

        timer.cancel();
        assert!(!timer.has_pending_timers());
        assert_eq!(timer.phase(), CooldownPhase::Idle);
        assert!(timer.poll(t0 + SECOND * 5).is_empty());
    }

    #[test]
    fn test_cancel_during_sending_suppresses_sent() {
        let t0 = Instant::now();
        let mut timer = timer();
        timer.start(t0);
        timer.cancel();
        assert!(timer.poll(t0 + SECOND * 2).is_empty());
    }

    #[test]
    fn test_from_settings() {
        let settings = VerificationSettings::default();
        let t0 = Instant::now();
        let mut timer = CountdownTimer::from_settings(&settings);
        timer.start(t0);
        timer.poll(t0 + settings.send_delay());
        assert_eq!(timer.remaining(), settings.cooldown_secs);
    }
}
