//! Unit tests for the board module.

mod task_registry_tests;

use crate::board::ports::{KeyValueError, KeyValueResult, KeyValueStore};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl FixedClock {
    pub(super) fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("valid test timestamp");
        Self(instant)
    }

    pub(super) fn later_by_hours(self, hours: i64) -> Self {
        Self(self.0 + chrono::TimeDelta::hours(hours))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Store whose every operation fails, for exercising best-effort paths.
#[derive(Debug, Default)]
pub(super) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> KeyValueResult<Option<String>> {
        Err(KeyValueError::backend(std::io::Error::other("store offline")))
    }

    fn set(&self, _key: &str, _value: &str) -> KeyValueResult<()> {
        Err(KeyValueError::backend(std::io::Error::other("store offline")))
    }

    fn remove(&self, _key: &str) -> KeyValueResult<()> {
        Err(KeyValueError::backend(std::io::Error::other("store offline")))
    }
}
