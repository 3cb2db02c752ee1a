//! Rotating showcase (carousel) with autoplay
//!
//! While autoplay is on, every timer tick moves to the next item and wraps
//! around forever. The first manual navigation turns autoplay off for good
//! and releases the timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::schedule::IntervalScheduler;

/// Default time between autoplay ticks
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5_000);

/// Showcase timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub interval: Duration,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Items, active index and autoplay flag of one showcase.
///
/// Items are shared, so cloning a state is cheap whatever `T` is.
#[derive(Debug, PartialEq)]
pub struct ShowcaseState<T> {
    items: Rc<[T]>,
    active_index: usize,
    autoplay_enabled: bool,
    interval: Duration,
}

impl<T> Clone for ShowcaseState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            active_index: self.active_index,
            autoplay_enabled: self.autoplay_enabled,
            interval: self.interval,
        }
    }
}

impl<T> ShowcaseState<T> {
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn new(items: Vec<T>, config: ShowcaseConfig) -> Self {
        assert!(!items.is_empty(), "a showcase needs at least one item");
        Self {
            items: items.into(),
            active_index: 0,
            autoplay_enabled: true,
            interval: config.interval,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Autoplay step. Ignored once autoplay is off.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay_enabled {
            return false;
        }
        self.active_index = (self.active_index + 1) % self.items.len();
        true
    }

    /// Jump to `index` (reduced modulo the item count) and stop autoplay
    pub fn go_to(&mut self, index: usize) {
        self.autoplay_enabled = false;
        self.active_index = index % self.items.len();
    }

    pub fn next(&mut self) {
        self.go_to(self.active_index + 1);
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.go_to((self.active_index + len - 1) % len);
    }
}

struct DriverInner<T, H> {
    state: ShowcaseState<T>,
    timer: Option<H>,
    on_change: Rc<dyn Fn(&ShowcaseState<T>)>,
    torn_down: bool,
}

/// Owns a [`ShowcaseState`] together with its autoplay timer.
///
/// Dropping the driver, or calling [`ShowcaseDriver::teardown`], cancels the
/// timer; after that no tick reaches the state.
pub struct ShowcaseDriver<T: 'static, S: IntervalScheduler> {
    inner: Rc<RefCell<DriverInner<T, S::Handle>>>,
}

impl<T: 'static, S> ShowcaseDriver<T, S>
where
    S: IntervalScheduler + 'static,
    S::Handle: 'static,
{
    /// Start autoplay (if enabled) on `scheduler`.
    ///
    /// `on_change` runs after every transition, timer- or user-driven. It
    /// receives a snapshot and runs with the driver unborrowed, so it may
    /// query or navigate the driver.
    pub fn start(
        state: ShowcaseState<T>,
        scheduler: &S,
        on_change: impl Fn(&ShowcaseState<T>) + 'static,
    ) -> Self {
        let autoplay = state.autoplay_enabled();
        let interval = state.interval();
        let inner = Rc::new(RefCell::new(DriverInner {
            state,
            timer: None,
            on_change: Rc::new(on_change),
            torn_down: false,
        }));

        if autoplay {
            let weak = Rc::downgrade(&inner);
            let timer = scheduler.schedule(interval, Box::new(move || Self::on_tick(&weak)));
            inner.borrow_mut().timer = Some(timer);
        }

        Self { inner }
    }

    fn on_tick(weak: &Weak<RefCell<DriverInner<T, S::Handle>>>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let (snapshot, on_change) = {
            let mut inner = inner.borrow_mut();
            if inner.torn_down || !inner.state.tick() {
                return;
            }
            (inner.state.clone(), Rc::clone(&inner.on_change))
        };
        on_change(&snapshot);
    }

    fn navigate(&self, nav: impl FnOnce(&mut ShowcaseState<T>)) {
        let (snapshot, on_change, timer) = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return;
            }
            nav(&mut inner.state);
            // Manual navigation ends autoplay for good
            let timer = inner.timer.take();
            (inner.state.clone(), Rc::clone(&inner.on_change), timer)
        };
        drop(timer);
        on_change(&snapshot);
    }

    pub fn go_to(&self, index: usize) {
        self.navigate(|s| s.go_to(index));
    }

    pub fn next(&self) {
        self.navigate(ShowcaseState::next);
    }

    pub fn previous(&self) {
        self.navigate(ShowcaseState::previous);
    }

    pub fn active_index(&self) -> usize {
        self.inner.borrow().state.active_index()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.inner.borrow().state.autoplay_enabled()
    }

    /// Whether an autoplay timer is currently held
    pub fn is_running(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    /// Release the timer and ignore every later trigger
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.torn_down = true;
        inner.timer = None;
    }
}

impl<T: 'static, S: IntervalScheduler> Drop for ShowcaseDriver<T, S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.torn_down = true;
            inner.timer = None;
        }
    }
}
