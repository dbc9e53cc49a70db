//! Leptos Ticker
//!
//! A periodic tick held as a scoped resource.
//! The interval lives exactly as long as the handle returned by `start`:
//! stopping, dropping the `Ticker`, or disposing the owning component all release it.

use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Something that can run a callback periodically.
///
/// Dropping the returned handle must cancel the callback.
pub trait Schedule {
    type Handle;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser scheduler backed by `setInterval`
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Schedule for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, tick)
    }
}

/// Periodic tick that is either idle or owns exactly one running schedule
pub struct Ticker<S: Schedule = IntervalScheduler> {
    scheduler: S,
    period: Duration,
    active: Option<S::Handle>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::with_scheduler(IntervalScheduler, period)
    }
}

impl<S: Schedule> Ticker<S> {
    pub fn with_scheduler(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            active: None,
        }
    }

    /// Start ticking. Returns false (and keeps the current schedule) if already running.
    pub fn start<F>(&mut self, tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(self.scheduler.every(self.period, Box::new(tick)));
        log::debug!("[TICKER] Started, period={:?}", self.period);
        true
    }

    /// Stop ticking. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        // Dropping the handle cancels the schedule
        let was_running = self.active.take().is_some();
        if was_running {
            log::debug!("[TICKER] Stopped");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Copyable handle to a `Ticker` owned by the current reactive owner
#[derive(Clone, Copy)]
pub struct TickerHandle {
    inner: StoredValue<Ticker, LocalStorage>,
}

impl TickerHandle {
    /// Start ticking; no-op once the owner has been disposed
    pub fn start<F>(&self, tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        self.inner
            .try_update_value(move |ticker| ticker.start(tick))
            .unwrap_or(false)
    }

    pub fn stop(&self) -> bool {
        self.inner
            .try_update_value(|ticker| ticker.stop())
            .unwrap_or(false)
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .try_with_value(|ticker| ticker.is_running())
            .unwrap_or(false)
    }
}

/// Create a ticker scoped to the calling component.
///
/// The ticker is stopped when the component is torn down, even if the
/// component never called `stop` itself.
pub fn use_ticker(period: Duration) -> TickerHandle {
    let handle = TickerHandle {
        inner: StoredValue::new_local(Ticker::new(period)),
    };
    on_cleanup(move || {
        if handle.stop() {
            log::debug!("[TICKER] Released on cleanup");
        }
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    /// Scheduler that fires only when the test asks it to
    #[derive(Clone, Default)]
    struct ManualScheduler {
        live: Rc<Cell<usize>>,
        slot: Slot,
    }

    impl ManualScheduler {
        fn fire(&self) {
            if let Some(tick) = self.slot.borrow_mut().as_mut() {
                tick();
            }
        }
    }

    struct ManualHandle {
        live: Rc<Cell<usize>>,
        slot: Slot,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            self.slot.borrow_mut().take();
        }
    }

    impl Schedule for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, _period: Duration, tick: Box<dyn FnMut()>) -> ManualHandle {
            self.live.set(self.live.get() + 1);
            *self.slot.borrow_mut() = Some(tick);
            ManualHandle {
                live: self.live.clone(),
                slot: self.slot.clone(),
            }
        }
    }

    fn counting_tick(count: &Rc<Cell<u32>>) -> impl FnMut() + 'static {
        let count = count.clone();
        move || count.set(count.get() + 1)
    }

    #[test]
    fn test_start_ticks_until_stopped() {
        let scheduler = ManualScheduler::default();
        let mut ticker = Ticker::with_scheduler(scheduler.clone(), Duration::from_secs(1));
        let count = Rc::new(Cell::new(0));

        assert!(ticker.start(counting_tick(&count)));
        assert!(ticker.is_running());
        scheduler.fire();
        scheduler.fire();
        assert_eq!(count.get(), 2);

        assert!(ticker.stop());
        assert!(!ticker.is_running());
        assert_eq!(scheduler.live.get(), 0);
        scheduler.fire();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_second_start_keeps_single_schedule() {
        let scheduler = ManualScheduler::default();
        let mut ticker = Ticker::with_scheduler(scheduler.clone(), Duration::from_millis(500));
        let count = Rc::new(Cell::new(0));

        assert!(ticker.start(counting_tick(&count)));
        assert!(!ticker.start(counting_tick(&count)));
        assert_eq!(scheduler.live.get(), 1);
    }

    #[test]
    fn test_stop_when_idle() {
        let mut ticker = Ticker::with_scheduler(ManualScheduler::default(), Duration::from_secs(1));
        assert!(!ticker.stop());
    }

    #[test]
    fn test_drop_releases_schedule() {
        let scheduler = ManualScheduler::default();
        let count = Rc::new(Cell::new(0));
        {
            let mut ticker = Ticker::with_scheduler(scheduler.clone(), Duration::from_secs(1));
            ticker.start(counting_tick(&count));
            assert_eq!(scheduler.live.get(), 1);
        }
        assert_eq!(scheduler.live.get(), 0);
        scheduler.fire();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_restart_after_stop() {
        let scheduler = ManualScheduler::default();
        let mut ticker = Ticker::with_scheduler(scheduler.clone(), Duration::from_secs(1));
        let count = Rc::new(Cell::new(0));

        ticker.start(counting_tick(&count));
        ticker.stop();
        assert!(ticker.start(counting_tick(&count)));
        scheduler.fire();
        assert_eq!(count.get(), 1);
        assert_eq!(ticker.period(), Duration::from_secs(1));
    }
}
