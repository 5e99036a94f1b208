use chrono::{Local, NaiveDateTime};
use std::cell::Cell;

/// Source of append timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock for tests; `advance` moves it forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.current
            .set(self.current.get() + chrono::TimeDelta::seconds(secs));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}
