//! Recurring tasks and the queue they feed.
//!
//! Timers never touch [`FrameState`](crate::state::FrameState) directly. They
//! push an [`Event`] into an [`EventQueue`], and the render loop, the only
//! consumer, drains the queue at the start of each tick. On a single thread
//! this keeps every state change between two frames.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::config::DemoConfig;

/// State change requested by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    FlipDirection,
    ToggleFill,
}

/// An event emitted once per `period`, forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringTask {
    pub event: Event,
    pub period: Duration,
}

impl RecurringTask {
    pub fn new(event: Event, period: Duration) -> Self {
        Self { event, period }
    }

    pub fn period_millis(&self) -> i32 {
        i32::try_from(self.period.as_millis()).unwrap_or(i32::MAX)
    }
}

/// Single-consumer FIFO shared between timer callbacks and the render loop.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<Event>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&self, event: Event) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Removes and returns every pending event in arrival order.
    pub fn drain(&self) -> Vec<Event> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    task: RecurringTask,
    next_due: Duration,
}

/// The set of recurring tasks, plus a virtual clock to fire them
/// deterministically.
///
/// In the browser the tasks are handed to `setInterval`; [`Schedule::advance_to`]
/// drives them from an explicit clock instead, firing every crossed period
/// boundary in time order. Boundaries that coincide fire in registration
/// order.
#[derive(Debug, Clone)]
pub struct Schedule {
    slots: Vec<Slot>,
    now: Duration,
}

impl Schedule {
    pub fn new(tasks: impl IntoIterator<Item = RecurringTask>) -> Self {
        let slots = tasks
            .into_iter()
            .map(|task| Slot {
                task,
                next_due: task.period,
            })
            .collect();
        Self {
            slots,
            now: Duration::ZERO,
        }
    }

    /// Direction flip first, then fill toggle.
    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new([
            RecurringTask::new(Event::FlipDirection, config.direction_period),
            RecurringTask::new(Event::ToggleFill, config.fill_period),
        ])
    }

    pub fn tasks(&self) -> impl Iterator<Item = &RecurringTask> {
        self.slots.iter().map(|slot| &slot.task)
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock to `now` and pushes every event due on the way.
    ///
    /// Returns the number of events pushed. A `now` earlier than the current
    /// clock is ignored.
    pub fn advance_to(&mut self, now: Duration, queue: &EventQueue) -> usize {
        if now < self.now {
            log::warn!("schedule clock moved backwards ({:?} < {:?})", now, self.now);
            return 0;
        }
        self.now = now;

        let mut fired = 0;
        loop {
            let next = self
                .slots
                .iter_mut()
                .filter(|slot| !slot.task.period.is_zero() && slot.next_due <= now)
                .min_by_key(|slot| slot.next_due);
            let Some(slot) = next else { break };
            queue.push(slot.task.event);
            slot.next_due += slot.task.period;
            fired += 1;
        }
        fired
    }
}
