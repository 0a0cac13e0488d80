//! In-memory host for tests and headless use.
//!
//! Both types are cheap handles over shared state: clone one, hand the clone
//! to the code under test, and inspect the original afterwards.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{ClassMarker, Scheduler, StyleTarget};

/// In-memory element with a class list and inline styles.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
    styles: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryElement {
    /// Create an element with no classes and no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element carrying the given classes.
    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        for class in classes {
            element.add_class(class);
        }
        element
    }

    /// Create `count` independent elements.
    pub fn many(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::new()).collect()
    }

    /// Current classes, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// Current value of an inline style property.
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

impl ClassMarker for MemoryElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl StyleTarget for MemoryElement {
    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }
}

/// Identifier of a schedule armed on a [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Default)]
struct TimerTable {
    next_id: u64,
    /// Live schedules (id -> period in ms)
    live: BTreeMap<TimerId, u32>,
    armed_total: usize,
    cancelled_total: usize,
}

/// Scheduler that only records arm/cancel calls.
///
/// Nothing fires on its own; tests simulate a tick by calling
/// [`crate::Carousel::on_timer`] directly.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    table: Rc<RefCell<TimerTable>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of schedules armed and not yet cancelled.
    pub fn outstanding(&self) -> usize {
        self.table.borrow().live.len()
    }

    /// Periods of the outstanding schedules, in arming order.
    pub fn outstanding_periods(&self) -> Vec<u32> {
        self.table.borrow().live.values().copied().collect()
    }

    /// Total schedules ever armed.
    pub fn armed_total(&self) -> usize {
        self.table.borrow().armed_total
    }

    /// Total schedules ever cancelled.
    pub fn cancelled_total(&self) -> usize {
        self.table.borrow().cancelled_total
    }

    /// Whether a given handle is still live.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.table.borrow().live.contains_key(&id)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn every(&mut self, period_ms: u32) -> TimerId {
        let mut table = self.table.borrow_mut();
        let id = TimerId(table.next_id);
        table.next_id += 1;
        table.live.insert(id, period_ms);
        table.armed_total += 1;
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        let mut table = self.table.borrow_mut();
        if table.live.remove(&handle).is_some() {
            table.cancelled_total += 1;
        }
    }
}
