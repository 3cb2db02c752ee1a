//! Recurring timers with scoped ownership
//!
//! Components never talk to `setInterval` directly. They ask an
//! [`IntervalScheduler`] for a timer and keep the returned handle; dropping
//! the handle cancels the timer, so releasing a component's state releases
//! its timers on every exit path.
//!
//! - [`ManualScheduler`] runs on a virtual clock and is what tests use.
//! - `BrowserScheduler` (hydrate builds only) wraps `gloo_timers`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Shortest period a timer may have. Zero periods are raised to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Source of recurring timers.
///
/// The returned handle owns the timer: once it is dropped the callback must
/// never run again.
pub trait IntervalScheduler {
    type Handle;

    fn schedule(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;
}

type SharedCallback = Rc<RefCell<Box<dyn FnMut()>>>;

struct ScheduledTimer {
    id: u64,
    period: Duration,
    due: Duration,
    callback: SharedCallback,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<ScheduledTimer>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

/// Handle returned by [`ManualScheduler`]; cancels on drop
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers that are still live
    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward, firing every timer that falls due in order.
    ///
    /// Timers due at the same instant fire in scheduling order. Callbacks may
    /// cancel timers (including their own) or schedule new ones.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            let callback = {
                let mut clock = self.clock.borrow_mut();
                let Some(timer) = clock
                    .timers
                    .iter_mut()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| (t.due, t.id))
                else {
                    break;
                };
                let due = timer.due;
                timer.due += timer.period;
                let callback = Rc::clone(&timer.callback);
                clock.now = due;
                callback
            };

            let mut run = callback.borrow_mut();
            (*run)();
        }

        self.clock.borrow_mut().now = target;
    }
}

impl IntervalScheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, period: Duration, callback: Box<dyn FnMut()>) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period = period.max(MIN_PERIOD);
        let due = clock.now + period;
        clock.timers.push(ScheduledTimer {
            id,
            period,
            due,
            callback: Rc::new(RefCell::new(callback)),
        });

        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().timers.retain(|t| t.id != self.id);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserInterval, BrowserScheduler};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{IntervalScheduler, MIN_PERIOD};
    use gloo_timers::callback::Interval;
    use std::time::Duration;

    /// Scheduler backed by the browser's `setInterval`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserScheduler;

    /// Live browser interval; cleared on drop
    pub struct BrowserInterval {
        interval: Option<Interval>,
    }

    impl IntervalScheduler for BrowserScheduler {
        type Handle = BrowserInterval;

        fn schedule(&self, period: Duration, callback: Box<dyn FnMut()>) -> BrowserInterval {
            let millis = u32::try_from(period.max(MIN_PERIOD).as_millis()).unwrap_or(u32::MAX);
            BrowserInterval {
                interval: Some(Interval::new(millis, callback)),
            }
        }
    }

    impl Drop for BrowserInterval {
        fn drop(&mut self) {
            if let Some(interval) = self.interval.take() {
                // The handle may be dropped from inside its own callback, so
                // the JS closure is released on the next tick instead of now.
                let closure = interval.cancel();
                leptos::task::spawn_local(async move {
                    drop(closure);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let hits = Rc::new(Cell::new(0));
        let hits_cb = Rc::clone(&hits);
        (hits, Box::new(move || hits_cb.set(hits_cb.get() + 1)))
    }

    #[test]
    fn test_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let (hits, cb) = counter();
        let _timer = scheduler.schedule(Duration::from_secs(5), cb);

        scheduler.advance(Duration::from_millis(4_999));
        assert_eq!(hits.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        scheduler.advance(Duration::from_secs(15));
        assert_eq!(hits.get(), 4);
        assert_eq!(scheduler.now(), Duration::from_secs(20));
    }

    #[test]
    fn test_drop_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, cb) = counter();
        let timer = scheduler.schedule(Duration::from_secs(1), cb);
        scheduler.advance(Duration::from_secs(2));
        assert_eq!(hits.get(), 2);

        drop(timer);
        assert_eq!(scheduler.active_timers(), 0);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_callback_can_cancel_itself() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let slot_cb = Rc::clone(&slot);
        let hits_cb = Rc::clone(&hits);
        let timer = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                hits_cb.set(hits_cb.get() + 1);
                if hits_cb.get() == 3 {
                    slot_cb.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(timer);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let scheduler = ManualScheduler::new();
        let (hits, cb) = counter();
        let _timer = scheduler.schedule(Duration::ZERO, cb);
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn test_same_instant_fires_in_schedule_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut timers = Vec::new();
        for name in ["first", "second"] {
            let order = Rc::clone(&order);
            timers.push(scheduler.schedule(
                Duration::from_millis(100),
                Box::new(move || order.borrow_mut().push(name)),
            ));
        }

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
