use chrono::{DateTime, Local, NaiveTime};
use std::time::{Duration, Instant};

/// Sleep granularity of the poll loop. Triggers may fire up to one tick
/// late; nothing depends on sub-tick precision.
pub const TICK: Duration = Duration::from_secs(60);

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Check,
    Heartbeat,
}

/// Due-time bookkeeping for the two periodic triggers. The clock is passed
/// in explicitly so firing can be asserted in tests without real waiting.
/// Deadlines are re-armed from startup; nothing persists across restarts.
pub struct Scheduler {
    check_interval: Duration,
    next_check: Instant,
    next_heartbeat: Instant,
}

impl Scheduler {
    pub fn new(now: Instant, check_interval: Duration, first_heartbeat_in: Duration) -> Self {
        Self {
            check_interval,
            next_check: now + check_interval,
            next_heartbeat: now + first_heartbeat_in,
        }
    }

    /// Returns every trigger whose deadline has elapsed, each at most once,
    /// and re-arms it. An overdue check re-arms from `now` (no catch-up
    /// burst); the heartbeat advances in whole days to stay aligned to the
    /// configured wall-clock time.
    pub fn due(&mut self, now: Instant) -> Vec<Trigger> {
        let mut fired = Vec::new();
        if now >= self.next_check {
            fired.push(Trigger::Check);
            self.next_check = now + self.check_interval;
        }
        if now >= self.next_heartbeat {
            fired.push(Trigger::Heartbeat);
            while self.next_heartbeat <= now {
                self.next_heartbeat += DAY;
            }
        }
        fired
    }
}

/// Time remaining until the next occurrence of `at` on the local clock,
/// rolling to tomorrow when today's occurrence has already passed.
pub fn until_next_daily(now: DateTime<Local>, at: NaiveTime) -> Duration {
    let naive_now = now.naive_local();
    let today = now.date_naive().and_time(at);
    let target = if today > naive_now {
        today
    } else {
        today + chrono::Duration::days(1)
    };
    (target - naive_now).to_std().unwrap_or(Duration::ZERO)
}
