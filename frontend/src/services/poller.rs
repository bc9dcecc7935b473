//! Cancellable progress polling.
//!
//! Split in two halves:
//!
//! - [`PollSchedule`] - pure session bookkeeping kept inside the UI state,
//!   decides whether a tick fires and whether a response is still wanted
//! - [`ProgressPoller`] - owns the browser timer; dropping it cancels
//!   the interval

use std::fmt;

use gloo_timers::callback::Interval;

/// Identifies one polling session.
///
/// Responses carry the ticket of the tick that requested them, so a reply
/// from a stopped or replaced session can be recognised and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollTicket(u64);

impl fmt::Display for PollTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Start/stop contract of the poll loop, free of any timer.
#[derive(Clone, Debug, Default)]
pub struct PollSchedule {
    generation: u64,
    active: bool,
    ticks: u64,
}

impl PollSchedule {
    /// Begin a new session. Every earlier ticket becomes stale.
    pub fn start(&mut self) -> PollTicket {
        self.generation += 1;
        self.active = true;
        self.ticks = 0;
        PollTicket(self.generation)
    }

    /// End the current session. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fire one tick: the ticket to request progress with, or `None` once
    /// stopped.
    pub fn tick(&mut self) -> Option<PollTicket> {
        if !self.active {
            return None;
        }
        self.ticks += 1;
        Some(PollTicket(self.generation))
    }

    /// Whether a response requested with `ticket` belongs to the live session.
    pub fn accepts(&self, ticket: PollTicket) -> bool {
        self.active && ticket.0 == self.generation
    }

    /// Ticks fired in the current session.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Browser side of the poll loop.
#[derive(Default)]
pub struct ProgressPoller {
    interval: Option<Interval>,
}

impl ProgressPoller {
    /// Run `on_tick` every `period_ms`, replacing any running timer.
    pub fn start<F>(&mut self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        self.interval = Some(Interval::new(period_ms, on_tick));
    }

    /// Cancel the timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.interval.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_schedule_never_ticks() {
        let mut schedule = PollSchedule::default();
        assert!(!schedule.is_active());
        assert_eq!(schedule.tick(), None);
    }

    #[test]
    fn test_ticks_until_stopped() {
        let mut schedule = PollSchedule::default();
        let ticket = schedule.start();

        assert_eq!(schedule.tick(), Some(ticket));
        assert_eq!(schedule.tick(), Some(ticket));
        assert_eq!(schedule.ticks(), 2);
        assert!(schedule.accepts(ticket));

        assert!(schedule.stop());
        assert!(!schedule.stop());
        assert_eq!(schedule.tick(), None);
        assert!(!schedule.accepts(ticket));
        assert_eq!(schedule.ticks(), 2);
    }

    #[test]
    fn test_restart_invalidates_old_ticket() {
        let mut schedule = PollSchedule::default();
        let first = schedule.start();
        let second = schedule.start();

        assert_ne!(first, second);
        assert!(!schedule.accepts(first));
        assert!(schedule.accepts(second));
        assert_eq!(schedule.ticks(), 0);
    }

    #[test]
    fn test_ticket_display() {
        let mut schedule = PollSchedule::default();
        schedule.start();
        let ticket = schedule.start();
        assert_eq!(ticket.to_string(), "#2");
    }

    #[test]
    fn test_poller_stop_without_timer() {
        let mut poller = ProgressPoller::default();
        assert!(!poller.stop());
    }
}
