use std::cmp::Ordering;

pub use crate::core::{
    error::QueueError,
    log::{LogEntry, Logger, Outcome},
    natord,
    queue::{CopyOut, Queue, copy_truncated},
};

/// Unified Queue System Builder
///
/// Owns the queue plus its operation log and exposes the handle-level
/// surface: a destroyed system behaves like an absent handle, so every
/// operation on it is a rejected no-op rather than a fault. Exclusive
/// access per call via `&mut self`; no internal locking, no background
/// work.
pub struct TextQueueSystem {
    inner: Option<Queue>,
    logger: Logger,
}

impl TextQueueSystem {
    /// Create a new system holding an empty queue.
    ///
    /// The allocation arm of the contract is kept on the signature; the
    /// global allocator aborts on exhaustion, so this constructor never
    /// actually produces `QueueError::Allocation` on this target.
    pub fn create() -> Result<Self, QueueError> {
        let mut system = Self {
            inner: Some(Queue::new()),
            logger: Logger::new(),
        };
        system.logger.log("create", None, Outcome::Applied, None, 0);
        Ok(system)
    }

    /// Tear down the queue, releasing every element and its value.
    ///
    /// Idempotent: destroying an already-destroyed system is a rejected
    /// no-op. Subsequent operations observe an absent handle.
    pub fn destroy(&mut self) {
        match self.inner.take() {
            Some(queue) => {
                let released = queue.len();
                drop(queue);
                self.logger.log(
                    "destroy",
                    None,
                    Outcome::Applied,
                    Some(format!("released {released} elements")),
                    0,
                );
            }
            None => self.reject("destroy", None),
        }
    }

    /// Insert an owned copy of `s` at the front
    pub fn insert_head(&mut self, s: &str) -> bool {
        match self.inner.as_mut() {
            Some(queue) => {
                queue.push_head(s);
                let size = queue.len();
                self.logger
                    .log("insert_head", Some(s), Outcome::Applied, None, size);
                true
            }
            None => {
                self.reject("insert_head", Some(s));
                false
            }
        }
    }

    /// Insert an owned copy of `s` at the back
    pub fn insert_tail(&mut self, s: &str) -> bool {
        match self.inner.as_mut() {
            Some(queue) => {
                queue.push_tail(s);
                let size = queue.len();
                self.logger
                    .log("insert_tail", Some(s), Outcome::Applied, None, size);
                true
            }
            None => {
                self.reject("insert_tail", Some(s));
                false
            }
        }
    }

    /// Remove the front element.
    ///
    /// False with no mutation when the handle is absent or the queue is
    /// empty. On success the removed value is copied into `out` (when
    /// provided) under the bounded copy-out contract: cleared
    /// destination, silent clipping to capacity minus one, guaranteed
    /// terminator, no write at all for zero capacity.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> bool {
        let Some(queue) = self.inner.as_mut() else {
            self.reject("remove_head", None);
            return false;
        };
        let Some(value) = queue.pop_head() else {
            self.logger.log(
                "remove_head",
                None,
                Outcome::Rejected,
                Some("queue is empty".to_owned()),
                0,
            );
            return false;
        };
        let mut detail = None;
        if let Some(buf) = out {
            let copy: CopyOut = copy_truncated(&value, buf);
            if copy.truncated {
                detail = Some(format!("value clipped to {} bytes", copy.written));
            }
        }
        let size = queue.len();
        self.logger
            .log("remove_head", Some(&value), Outcome::Applied, detail, size);
        true
    }

    /// Current element count; 0 when the handle is absent. Pure, O(1).
    pub fn size(&self) -> usize {
        self.inner.as_ref().map_or(0, Queue::len)
    }

    /// Reverse the element order in place; no-op on an absent handle
    pub fn reverse(&mut self) {
        match self.inner.as_mut() {
            Some(queue) => {
                queue.reverse();
                let size = queue.len();
                self.logger.log("reverse", None, Outcome::Applied, None, size);
            }
            None => self.reject("reverse", None),
        }
    }

    /// Sort into ascending natural order, in place
    pub fn sort(&mut self) {
        self.sort_with(natord::compare);
    }

    /// Sort under a caller-provided total order
    pub fn sort_with<F>(&mut self, cmp: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        match self.inner.as_mut() {
            Some(queue) => {
                queue.sort_by(cmp);
                let size = queue.len();
                self.logger.log("sort", None, Outcome::Applied, None, size);
            }
            None => self.reject("sort", None),
        }
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (usize, bool) {
        (self.size(), self.size() == 0)
    }

    /// Snapshot of the values, front to back; empty when destroyed
    pub fn values(&self) -> Vec<String> {
        self.inner
            .as_ref()
            .map_or_else(Vec::new, |q| q.iter().map(str::to_owned).collect())
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry> {
        self.logger.entries().to_vec()
    }

    fn reject(&mut self, op: &str, value: Option<&str>) {
        self.logger.log(
            op,
            value,
            Outcome::Rejected,
            Some(QueueError::InvalidHandle.to_string()),
            0,
        );
    }
}
