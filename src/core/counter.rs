//! Visibility-triggered animated counter
//!
//! A counter sits at zero until its element first scrolls into view. It then
//! climbs to its target in fixed steps over a fixed duration, lands exactly
//! on the target, and stays there. Scrolling away and back does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::schedule::IntervalScheduler;

/// Counter animation configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterConfig {
    /// Total animation time
    pub duration: Duration,
    /// Number of increments the duration is split into
    pub steps: u32,
    /// Targets below this render with two decimals
    pub decimal_threshold: f64,
    /// Fraction of the element that must be on screen to count as visible
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2_000),
            steps: 60,
            decimal_threshold: 10.0,
            visibility_threshold: 0.1,
        }
    }
}

impl CounterConfig {
    /// Time between two animation steps
    pub fn step_interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }
}

/// Render `value` the way a counter with the given `target` displays it.
///
/// Small targets (below `threshold`) keep two decimals, everything else is
/// rounded to a whole number.
pub fn format_counter(value: f64, target: f64, threshold: f64) -> String {
    if target < threshold {
        format!("{:.2}", value)
    } else {
        format!("{:.0}", value.round())
    }
}

/// Progress of one counter animation
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    target: f64,
    current: f64,
    increment: f64,
    steps: u32,
    steps_taken: u32,
    decimal_threshold: f64,
    has_started: bool,
    finished: bool,
}

impl CounterState {
    pub fn new(target: f64, config: CounterConfig) -> Self {
        let steps = config.steps.max(1);
        Self {
            target,
            current: 0.0,
            increment: target / f64::from(steps),
            steps,
            steps_taken: 0,
            decimal_threshold: config.decimal_threshold,
            has_started: false,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed a visibility observation.
    ///
    /// Returns `true` only for the observation that starts the animation.
    pub fn observe(&mut self, visible: bool) -> bool {
        if !visible || self.has_started {
            return false;
        }
        self.has_started = true;
        true
    }

    /// Apply one animation step. Returns whether the value changed.
    pub fn step(&mut self) -> bool {
        if !self.has_started || self.finished {
            return false;
        }
        self.steps_taken += 1;
        self.current += self.increment;
        if self.current >= self.target || self.steps_taken >= self.steps {
            self.current = self.target;
            self.finished = true;
        }
        true
    }

    /// Current value formatted for display
    pub fn display(&self) -> String {
        format_counter(self.current, self.target, self.decimal_threshold)
    }
}

struct DriverInner<S: IntervalScheduler> {
    state: CounterState,
    scheduler: S,
    step_interval: Duration,
    timer: Option<S::Handle>,
    on_change: Rc<dyn Fn(&CounterState)>,
    torn_down: bool,
}

/// Owns a [`CounterState`] and, while animating, its step timer.
///
/// Visibility observations are pushed in through [`CounterDriver::observe`].
/// The timer is released when the target is reached, on
/// [`CounterDriver::teardown`], and on drop.
pub struct CounterDriver<S: IntervalScheduler> {
    inner: Rc<RefCell<DriverInner<S>>>,
}

impl<S> CounterDriver<S>
where
    S: IntervalScheduler + 'static,
    S::Handle: 'static,
{
    /// `on_change` receives a snapshot after every step and runs with the
    /// driver unborrowed, so it may query the driver.
    pub fn new(
        target: f64,
        config: CounterConfig,
        scheduler: S,
        on_change: impl Fn(&CounterState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DriverInner {
                state: CounterState::new(target, config),
                scheduler,
                step_interval: config.step_interval(),
                timer: None,
                on_change: Rc::new(on_change),
                torn_down: false,
            })),
        }
    }

    /// Feed a visibility observation; the first visible one starts the timer
    pub fn observe(&self, visible: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down || !inner.state.observe(visible) {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let timer = inner
            .scheduler
            .schedule(inner.step_interval, Box::new(move || Self::on_step(&weak)));
        inner.timer = Some(timer);
    }

    fn on_step(weak: &Weak<RefCell<DriverInner<S>>>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let (snapshot, on_change, finished_timer) = {
            let mut inner = inner.borrow_mut();
            if inner.torn_down || !inner.state.step() {
                return;
            }
            let finished_timer = if inner.state.is_finished() {
                inner.timer.take()
            } else {
                None
            };
            (inner.state.clone(), Rc::clone(&inner.on_change), finished_timer)
        };
        drop(finished_timer);
        on_change(&snapshot);
    }

    pub fn current(&self) -> f64 {
        self.inner.borrow().state.current()
    }

    pub fn display(&self) -> String {
        self.inner.borrow().state.display()
    }

    pub fn has_started(&self) -> bool {
        self.inner.borrow().state.has_started()
    }

    /// Whether a step timer is currently held
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    /// Release the timer and ignore every later observation or tick
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.torn_down = true;
        inner.timer = None;
    }
}

impl<S: IntervalScheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.torn_down = true;
            inner.timer = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::ManualScheduler;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.steps, 60);
        assert_eq!(config.duration, ms(2_000));
        assert_eq!(config.step_interval(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn test_format_rule_uses_target() {
        assert_eq!(format_counter(3.2, 3.2, 10.0), "3.20");
        assert_eq!(format_counter(1.0666, 3.2, 10.0), "1.07");
        assert_eq!(format_counter(99.99, 99.99, 10.0), "100");
        assert_eq!(format_counter(49.6, 50.0, 10.0), "50");
        assert_eq!(format_counter(0.0, 500.0, 10.0), "0");
    }

    #[test]
    fn test_step_before_start_is_noop() {
        let mut state = CounterState::new(50.0, CounterConfig::default());
        assert!(!state.step());
        assert_eq!(state.current(), 0.0);
    }

    #[test]
    fn test_hidden_observation_does_not_start() {
        let mut state = CounterState::new(50.0, CounterConfig::default());
        assert!(!state.observe(false));
        assert!(!state.has_started());
    }

    #[test]
    fn test_start_is_sticky() {
        let mut state = CounterState::new(50.0, CounterConfig::default());
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.has_started());
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let mut state = CounterState::new(99.99, CounterConfig::default());
        state.observe(true);
        let mut last = 0.0;
        let mut steps = 0;
        while state.step() {
            assert!(state.current() >= last);
            assert!(state.current() <= state.target());
            last = state.current();
            steps += 1;
        }
        assert_eq!(steps, 60);
        assert_eq!(state.current(), 99.99);
        assert!(state.is_finished());
    }

    #[test]
    fn test_zero_target_finishes_on_first_step() {
        let mut state = CounterState::new(0.0, CounterConfig::default());
        state.observe(true);
        assert!(state.step());
        assert!(state.is_finished());
        assert_eq!(state.display(), "0.00");
    }

    #[test]
    fn test_driver_waits_for_visibility() {
        let scheduler = ManualScheduler::new();
        let driver = CounterDriver::new(500.0, CounterConfig::default(), scheduler.clone(), |_| {});

        scheduler.advance(ms(5_000));
        assert_eq!(driver.current(), 0.0);
        assert!(!driver.is_animating());
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_driver_completes_within_duration() {
        let scheduler = ManualScheduler::new();
        let driver = CounterDriver::new(180.0, CounterConfig::default(), scheduler.clone(), |_| {});

        driver.observe(true);
        scheduler.advance(ms(1_000));
        assert!(driver.current() > 0.0 && driver.current() < 180.0);

        scheduler.advance(ms(1_000));
        assert_eq!(driver.current(), 180.0);
        assert_eq!(driver.display(), "180");
        assert!(!driver.is_animating());
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_driver_never_restarts() {
        let scheduler = ManualScheduler::new();
        let changes = Rc::new(Cell::new(0));
        let changes_cb = Rc::clone(&changes);
        let driver = CounterDriver::new(3.2, CounterConfig::default(), scheduler.clone(), move |_| {
            changes_cb.set(changes_cb.get() + 1)
        });

        driver.observe(true);
        scheduler.advance(ms(2_000));
        let settled = changes.get();

        driver.observe(false);
        driver.observe(true);
        scheduler.advance(ms(5_000));

        assert_eq!(changes.get(), settled);
        assert_eq!(driver.display(), "3.20");
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_repeat_visibility_mid_animation_keeps_single_timer() {
        let scheduler = ManualScheduler::new();
        let driver = CounterDriver::new(50.0, CounterConfig::default(), scheduler.clone(), |_| {});

        driver.observe(true);
        scheduler.advance(ms(500));
        driver.observe(true);
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn test_teardown_mid_animation() {
        let scheduler = ManualScheduler::new();
        let driver = CounterDriver::new(50.0, CounterConfig::default(), scheduler.clone(), |_| {});

        driver.observe(true);
        scheduler.advance(ms(500));
        let frozen = driver.current();
        driver.teardown();

        scheduler.advance(ms(5_000));
        assert_eq!(driver.current(), frozen);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_drop_mid_animation_releases_timer() {
        let scheduler = ManualScheduler::new();
        let driver = CounterDriver::new(50.0, CounterConfig::default(), scheduler.clone(), |_| {});
        driver.observe(true);
        scheduler.advance(ms(100));

        drop(driver);
        assert_eq!(scheduler.active_timers(), 0);
        scheduler.advance(ms(5_000));
    }

    #[test]
    fn test_on_change_may_query_the_driver() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<Rc<CounterDriver<ManualScheduler>>>>> =
            Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (slot_cb, seen_cb) = (Rc::clone(&slot), Rc::clone(&seen));
        let driver = Rc::new(CounterDriver::new(
            180.0,
            CounterConfig::default(),
            scheduler.clone(),
            move |state| {
                let Some(driver) = slot_cb.borrow().clone() else {
                    return;
                };
                seen_cb.borrow_mut().push((
                    state.current() == driver.current(),
                    driver.is_animating(),
                ));
            },
        ));
        *slot.borrow_mut() = Some(Rc::clone(&driver));

        driver.observe(true);
        scheduler.advance(ms(2_100));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 60);
        assert!(seen.iter().all(|&(in_sync, _)| in_sync));
        assert!(seen[..59].iter().all(|&(_, animating)| animating));
        // The timer is already released when the final value is reported
        assert_eq!(seen[59], (true, false));
        assert_eq!(driver.display(), "180");

        slot.borrow_mut().take();
    }
}
