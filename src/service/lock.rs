//! In-process registry of per-room, per-day booking locks.
//!
//! Holding the guard for a (room, date) key serializes the availability check and the
//! write that follows it against every other booking task in this process. The database
//! transaction and the `booking_lock` row extend the same exclusion across processes.

use chrono::NaiveDate;
use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::model::room::RoomRef;

type LockKey = (RoomRef, NaiveDate);

/// Shared registry of booking locks, cheap to clone.
#[derive(Clone, Default)]
pub struct RoomDayLocks {
    locks: Arc<Mutex<HashMap<LockKey, Arc<Mutex<()>>>>>,
}

/// Guards held for the duration of one check-and-write sequence.
pub struct RoomDayGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl RoomDayLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to one room on one date.
    pub async fn acquire(&self, room: &RoomRef, date: NaiveDate) -> RoomDayGuard {
        self.acquire_all([(room.clone(), date)]).await
    }

    /// Waits for exclusive access to several (room, date) keys.
    ///
    /// Keys are deduplicated and locked in sorted order so that two tasks asking for
    /// overlapping sets cannot deadlock.
    pub async fn acquire_all(&self, keys: impl IntoIterator<Item = LockKey>) -> RoomDayGuard {
        let keys: BTreeSet<LockKey> = keys.into_iter().collect();

        let mutexes: Vec<Arc<Mutex<()>>> = {
            let mut locks = self.locks.lock().await;
            // Entries nobody holds or waits on only have the registry's reference.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            keys.into_iter()
                .map(|key| locks.entry(key).or_default().clone())
                .collect()
        };

        let mut guards = Vec::with_capacity(mutexes.len());
        for mutex in mutexes {
            guards.push(mutex.lock_owned().await);
        }

        RoomDayGuard { _guards: guards }
    }

    /// Number of keys currently tracked.
    #[cfg(test)]
    pub(crate) async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
