//! Deferred bar-fill sweeps.
//!
//! Renderers emit bars at zero width with their target in `data-value`. After
//! a section renders, a one-shot sweep is queued; when it fires it copies every
//! matching bar's target into its inline width. Sweeps are driven by an
//! explicit clock so the host decides when time passes. They cannot be
//! cancelled and are never retried.

use crate::surface::Surface;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;
use tracing::debug;

/// Attribute carrying a bar's target percentage.
pub const DATA_VALUE: &str = "data-value";

/// Which family of bars a sweep fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BarKind {
    /// Skill proficiency meters
    SkillMeter,
    /// Summary stat bars
    StatBar,
}

impl BarKind {
    /// Class name of the fill element.
    pub fn fill_class(self) -> &'static str {
        match self {
            BarKind::SkillMeter => "meter-fill",
            BarKind::StatBar => "stat-fill",
        }
    }
}

/// Set every annotated bar of `kind` to its target width.
///
/// Targets are read from the surface when the sweep runs, so bars rendered
/// after the sweep was scheduled are filled too. Returns the number of bars
/// written.
pub fn sweep(kind: BarKind, surface: &mut dyn Surface) -> usize {
    let class = kind.fill_class();
    let mut filled = 0;

    surface.for_each_element(&mut |element| {
        if !element.has_class(class) {
            return;
        }
        if let Some(target) = element.get_attr(DATA_VALUE).map(str::to_owned) {
            element.set_attr("style", format!("width: {}%", target));
            filled += 1;
        }
    });

    debug!(?kind, filled, "bar sweep fired");
    filled
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due: Duration,
    seq: u64,
    kind: BarKind,
}

/// Queue of one-shot sweeps ordered by due time.
///
/// Determinism rule: sweeps due at the same instant fire in scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on this scheduler's clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of sweeps not yet fired.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Clock time at which the next sweep is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(p)| p.due)
    }

    /// Queue a sweep of `kind` to fire `delay` from now.
    pub fn schedule(&mut self, kind: BarKind, delay: Duration) {
        let pending = Pending {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            kind,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        debug!(?kind, due_ms = pending.due.as_millis() as u64, "bar sweep scheduled");
        self.queue.push(Reverse(pending));
    }

    /// Move the clock forward, firing every sweep that becomes due.
    /// Returns the number of sweeps fired.
    pub fn advance(&mut self, elapsed: Duration, surface: &mut dyn Surface) -> usize {
        let until = self.now.saturating_add(elapsed);
        let mut fired = 0;

        while let Some(Reverse(next)) = self.queue.peek().copied() {
            if next.due > until {
                break;
            }
            self.queue.pop();
            self.now = next.due;
            sweep(next.kind, surface);
            fired += 1;
        }

        self.now = until;
        fired
    }

    /// Fire every queued sweep, moving the clock to the last due time.
    pub fn run_until_idle(&mut self, surface: &mut dyn Surface) -> usize {
        let mut fired = 0;
        while let Some(Reverse(next)) = self.queue.pop() {
            self.now = self.now.max(next.due);
            sweep(next.kind, surface);
            fired += 1;
        }
        fired
    }
}
