use thiserror::Error;

/// Error taxonomy for queue operations.
///
/// Both conditions are recoverable by the caller; nothing in the queue is
/// fatal to the process. Operations surface them as boolean failures or
/// no-ops rather than panics, and the rejected call is recorded in the
/// operation log with this error's display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The allocator could not satisfy a request
    #[error("allocation failed")]
    Allocation,
    /// The queue handle is absent or already destroyed
    #[error("queue handle is absent")]
    InvalidHandle,
}
