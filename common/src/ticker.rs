//! The clock card's periodic refresh.
//!
//! [`ClockDriver`] owns the repeating timer for as long as the view is
//! mounted. Dropping it cancels the timer, and a callback that was already
//! queued finds the driver unmounted and does nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use env_dashboard_model::ClockFace;

use crate::clock::Clock;

/// A repeating timer the clock driver can be scheduled on.
pub trait PeriodicTimer {
    /// Starts calling `callback` every `period`, replacing any previous callback.
    fn start_periodic(&self, period: Duration, callback: Box<dyn FnMut()>);

    /// Stops the timer. No callback fires afterwards.
    fn cancel(&self);

    fn is_active(&self) -> bool;
}

#[cfg(feature = "slint")]
impl PeriodicTimer for slint::Timer {
    fn start_periodic(&self, period: Duration, mut callback: Box<dyn FnMut()>) {
        self.start(slint::TimerMode::Repeated, period, move || callback());
    }

    fn cancel(&self) {
        self.stop();
    }

    fn is_active(&self) -> bool {
        self.running()
    }
}

/// A timer that fires only when told to. Clones share the same state, so a
/// test can keep a handle after moving the timer into a [`ClockDriver`].
#[derive(Clone, Default)]
pub struct ManualTimer {
    callback: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
    period: Rc<Cell<Option<Duration>>>,
    active: Rc<Cell<bool>>,
}

impl ManualTimer {
    /// Runs the callback once if the timer is active. Returns whether it ran.
    pub fn fire(&self) -> bool {
        if !self.active.get() {
            return false;
        }
        self.force_fire()
    }

    /// Runs the callback even if the timer was cancelled, like a tick that
    /// was already queued when the timer stopped.
    pub fn force_fire(&self) -> bool {
        match self.callback.borrow_mut().as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period.get()
    }
}

impl PeriodicTimer for ManualTimer {
    fn start_periodic(&self, period: Duration, callback: Box<dyn FnMut()>) {
        *self.callback.borrow_mut() = Some(callback);
        self.period.set(Some(period));
        self.active.set(true);
    }

    fn cancel(&self) {
        self.active.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Keeps a clock display current while mounted.
pub struct ClockDriver<T: PeriodicTimer> {
    timer: T,
    mounted: Rc<Cell<bool>>,
}

impl<T: PeriodicTimer> ClockDriver<T> {
    pub const PERIOD: Duration = Duration::from_secs(1);

    /// Shows the current time right away, then refreshes it every [`Self::PERIOD`].
    pub fn mount<C, S>(timer: T, clock: C, mut sink: S) -> Self
    where
        C: Clock + 'static,
        S: FnMut(ClockFace) + 'static,
    {
        sink(ClockFace::from_datetime(&clock.now()));

        let mounted = Rc::new(Cell::new(true));
        let alive = mounted.clone();

        timer.start_periodic(
            Self::PERIOD,
            Box::new(move || {
                if !alive.get() {
                    return;
                }
                let face = ClockFace::from_datetime(&clock.now());
                log::trace!("Clock tick: {face}");
                sink(face);
            }),
        );
        log::info!("Clock driver mounted, refreshing every {:?}", Self::PERIOD);

        Self { timer, mounted }
    }

    /// Cancels the timer. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        if self.mounted.replace(false) {
            self.timer.cancel();
            log::info!("Clock driver unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl<T: PeriodicTimer> Drop for ClockDriver<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{FixedOffset, TimeDelta, TimeZone};

    fn clock() -> ManualClock {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 13, 14, 5, 58)
            .unwrap();
        ManualClock::new(start)
    }

    fn recorder() -> (Rc<RefCell<Vec<ClockFace>>>, impl FnMut(ClockFace) + 'static) {
        let faces = Rc::new(RefCell::new(Vec::new()));
        let sink_faces = faces.clone();
        (faces, move |face| sink_faces.borrow_mut().push(face))
    }

    #[test]
    fn test_mount_shows_time_immediately() {
        let timer = ManualTimer::default();
        let (faces, sink) = recorder();

        let driver = ClockDriver::mount(timer.clone(), clock(), sink);

        assert!(driver.is_mounted());
        assert!(timer.is_active());
        assert_eq!(timer.period(), Some(Duration::from_secs(1)));
        assert_eq!(faces.borrow().len(), 1);
        assert_eq!(faces.borrow()[0].time, "2:05");
    }

    #[test]
    fn test_ticks_follow_the_clock_across_a_minute() {
        let timer = ManualTimer::default();
        let clock = clock();
        let (faces, sink) = recorder();
        let _driver = ClockDriver::mount(timer.clone(), clock.clone(), sink);

        clock.advance(TimeDelta::seconds(1));
        assert!(timer.fire());
        assert_eq!(faces.borrow().last().unwrap().time, "2:05");

        clock.advance(TimeDelta::seconds(1));
        assert!(timer.fire());
        let last = faces.borrow().last().cloned().unwrap();
        assert_eq!(last.time, "2:06");
        assert_eq!((last.year, last.day, last.month.as_str()), (2025, 13, "Mar"));
        assert_eq!(faces.borrow().len(), 3);
    }

    #[test]
    fn test_no_updates_after_unmount() {
        let timer = ManualTimer::default();
        let clock = clock();
        let (faces, sink) = recorder();
        let mut driver = ClockDriver::mount(timer.clone(), clock.clone(), sink);

        driver.unmount();
        driver.unmount();
        clock.advance(TimeDelta::seconds(5));

        assert!(!driver.is_mounted());
        assert!(!timer.is_active());
        assert!(!timer.fire());
        // a tick queued before the cancel still reaches the callback
        assert!(timer.force_fire());
        assert_eq!(faces.borrow().len(), 1);
    }

    #[test]
    fn test_drop_cancels_the_timer() {
        let timer = ManualTimer::default();
        let clock = clock();
        let (faces, sink) = recorder();

        {
            let _driver = ClockDriver::mount(timer.clone(), clock.clone(), sink);
            assert!(timer.fire());
        }

        clock.advance(TimeDelta::minutes(3));

        assert!(!timer.is_active());
        assert!(timer.force_fire());
        assert_eq!(faces.borrow().len(), 2);
    }
}
