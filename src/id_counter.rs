// Reservation id counter shared explicitly between managers

use parking_lot::Mutex;
use std::sync::Arc;

/// Hands out reservation ids in strictly increasing order.
///
/// Cloning the counter yields a handle to the same sequence, so managers built
/// with clones of one counter never issue the same id twice. The counter is
/// never decremented, and ids freed by a cancellation are not reused.
#[derive(Debug, Clone, Default)]
pub struct ReservationIdCounter {
    last_id: Arc<Mutex<u64>>,
}

impl ReservationIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last id that was committed, or 0 if none was issued yet.
    pub fn current(&self) -> u64 {
        *self.last_id.lock()
    }

    /// The id the next successful reservation will receive.
    pub fn peek_next(&self) -> u64 {
        self.current() + 1
    }

    pub fn is_shared_with(&self, other: &ReservationIdCounter) -> bool {
        Arc::ptr_eq(&self.last_id, &other.last_id)
    }

    // Runs `f` with the candidate id while holding the counter lock.
    // The counter moves forward only when `f` succeeds.
    pub(crate) fn issue_with<T, E>(&self, f: impl FnOnce(u64) -> Result<T, E>) -> Result<T, E> {
        let mut last_id = self.last_id.lock();
        let candidate = *last_id + 1;
        let issued = f(candidate)?;
        *last_id = candidate;
        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_counter_advances_only_on_success() {
        let counter = ReservationIdCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.peek_next(), 1);

        let first: Result<u64, ()> = counter.issue_with(Ok);
        assert_eq!(first, Ok(1));

        let failed: Result<u64, &str> = counter.issue_with(|_| Err("rejected"));
        assert_eq!(failed, Err("rejected"));
        assert_eq!(counter.current(), 1);

        let second: Result<u64, ()> = counter.issue_with(Ok);
        assert_eq!(second, Ok(2));
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let counter = ReservationIdCounter::new();
        let shared = counter.clone();
        let independent = ReservationIdCounter::new();

        assert!(counter.is_shared_with(&shared));
        assert!(!counter.is_shared_with(&independent));

        let _: Result<u64, ()> = shared.issue_with(Ok);
        assert_eq!(counter.current(), 1);
        assert_eq!(independent.current(), 0);
    }

    #[test]
    fn test_concurrent_issue_yields_distinct_ids() {
        let counter = ReservationIdCounter::new();
        let threads_count = 8;
        let ids_per_thread = 500;

        let mut handles = vec![];
        for _ in 0..threads_count {
            let counter = counter.clone();
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| {
                        let issued: Result<u64, ()> = counter.issue_with(Ok);
                        issued.unwrap()
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), threads_count * ids_per_thread);
        assert_eq!(counter.current(), (threads_count * ids_per_thread) as u64);
    }
}
