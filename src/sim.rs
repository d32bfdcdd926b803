//! Deterministic virtual-time host.
//!
//! Used by the test suites (and handy for replaying captured sessions): time
//! only moves when [`VirtualHost::advance`] is called, and due timers fire in
//! (deadline, scheduling order).

use core::cmp::Ordering;
use core::time::Duration;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::console::Console;
use crate::timers::{Host, Timer};

#[derive(Debug)]
struct Pending {
    at: Duration,
    seq: u64,
    timer: Timer,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

#[derive(Debug)]
pub struct VirtualHost {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
    /// Seconds since local midnight at virtual time zero.
    wall_offset_secs: u64,
    fired: u64,
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualHost {
    pub fn new() -> Self {
        Self::with_wall_clock(9 * 3600)
    }

    pub fn with_wall_clock(secs_since_midnight: u64) -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
            wall_offset_secs: secs_since_midnight,
            fired: 0,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total timers delivered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(p)| p.at)
    }

    /// Pop the earliest timer if it is due at or before `until`, moving the
    /// clock to its deadline.
    fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let due = matches!(self.queue.peek(), Some(Reverse(p)) if p.at <= until);
        if !due {
            return None;
        }
        let Reverse(p) = self.queue.pop()?;
        self.now = p.at;
        self.fired += 1;
        Some(p.timer)
    }

    /// Advance virtual time by `by`, delivering every timer that falls due,
    /// including ones scheduled by timers fired along the way.
    pub fn advance(&mut self, by: Duration, console: &mut Console) {
        let target = self.now + by;
        while let Some(timer) = self.pop_due(target) {
            console.on_timer(timer, self);
        }
        self.now = target;
    }

    pub fn advance_ms(&mut self, ms: u64, console: &mut Console) {
        self.advance(Duration::from_millis(ms), console);
    }
}

impl Host for VirtualHost {
    fn schedule(&mut self, after: Duration, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Pending {
            at: self.now + after,
            seq,
            timer,
        }));
    }

    fn local_time(&self) -> String {
        let secs = (self.wall_offset_secs + self.now.as_secs()) % 86_400;
        format!(
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut host = VirtualHost::new();
        host.schedule(Duration::from_millis(20), Timer::HideResults);
        host.schedule(Duration::from_millis(10), Timer::HideThought);
        host.schedule(Duration::from_millis(10), Timer::ClockTick);

        let until = Duration::from_millis(100);
        assert_eq!(host.pop_due(until), Some(Timer::HideThought));
        assert_eq!(host.now(), Duration::from_millis(10));
        assert_eq!(host.pop_due(until), Some(Timer::ClockTick));
        assert_eq!(host.pop_due(until), Some(Timer::HideResults));
        assert_eq!(host.pop_due(until), None);
        assert_eq!(host.fired(), 3);
    }

    #[test]
    fn does_not_fire_early() {
        let mut host = VirtualHost::new();
        host.schedule(Duration::from_millis(50), Timer::HideThought);
        assert_eq!(host.pop_due(Duration::from_millis(49)), None);
        assert_eq!(host.next_deadline(), Some(Duration::from_millis(50)));
        assert_eq!(host.pending(), 1);
    }

    #[test]
    fn local_time_tracks_virtual_clock() {
        let mut host = VirtualHost::with_wall_clock(23 * 3600 + 59 * 60 + 59);
        assert_eq!(host.local_time(), "23:59:59");
        let mut console = Console::default();
        host.advance(Duration::from_secs(2), &mut console);
        assert_eq!(host.local_time(), "00:00:01");
    }
}
