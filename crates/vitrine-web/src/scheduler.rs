//! Browser interval scheduler
//!
//! Each armed schedule is a [`gloo::timers::callback::Interval`]; cancelling
//! drops it, which clears the underlying `setInterval`.

use std::rc::Rc;

use gloo::timers::callback::Interval;
use vitrine_page::Scheduler;

/// Scheduler that calls one fixed tick callback on every interval
pub struct IntervalScheduler {
    tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(tick: impl Fn() + 'static) -> Self {
        Self {
            tick: Rc::new(tick),
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, period_ms: u32) -> Interval {
        let tick = Rc::clone(&self.tick);
        Interval::new(period_ms, move || tick())
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle);
    }
}
