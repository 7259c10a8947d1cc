use std::cmp::Ordering;
use std::fmt;
use std::ptr;

/// One node of the chain: an owned copy of the text value plus the link
/// to the following element.
pub struct Element {
    value: String,
    next: Option<Box<Element>>,
}

/// core queue structure: a singly linked chain of owned text values.
///
/// `head` owns the chain; `tail` is a cached raw pointer to the last
/// element (null iff the queue is empty) so push_tail stays O(1). The
/// raw pointer never leaves this module and is always derived from the
/// element's final resting slot in the chain; any operation that moves
/// the box owning the tail element re-derives it, so the pointer never
/// outlives the box it was taken from. The raw tail makes the structure
/// !Send, which matches the single-threaded contract.
pub struct Queue {
    head: Option<Box<Element>>,
    tail: *mut Element,
    count: usize,
}

impl Queue {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            count: 0,
        }
    }

    /// Number of linked elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Front value, if any
    pub fn peek_head(&self) -> Option<&str> {
        self.head.as_deref().map(|e| e.value.as_str())
    }

    /// Link a new element holding an owned copy of `s` at the front
    pub fn push_head(&mut self, s: &str) {
        let len_before = self.count;
        let elem = Box::new(Element {
            value: s.to_owned(),
            next: self.head.take(),
        });
        self.head = Some(elem);
        self.count += 1;
        if len_before <= 1 {
            // the box owning the tail element was just (re)linked under
            // the new head, so the cached pointer must be derived anew
            self.refresh_tail();
        }
        // --post operation assertion
        assert!(
            self.count > 0 && self.head.is_some(),
            "Queue must have a head after push_head"
        );
    }

    /// Link a new element holding an owned copy of `s` at the back
    pub fn push_tail(&mut self, s: &str) {
        let elem = Box::new(Element {
            value: s.to_owned(),
            next: None,
        });
        if self.tail.is_null() {
            self.head = Some(elem);
            self.tail = raw_last(&mut self.head);
        } else {
            // SAFETY: `tail` points at the last element of the chain owned
            // by `head`; it is non-null here, that element's `next` is None
            // per the tail invariant, and no reference into the chain is
            // live across this call. The replacement pointer is derived
            // from the new element's resting slot, never from the box
            // before it moved.
            unsafe {
                debug_assert!((*self.tail).next.is_none(), "tail element must be last");
                (*self.tail).next = Some(elem);
                self.tail = raw_last(&mut (*self.tail).next);
            }
        }
        self.count += 1;
        // --post operation assertion
        assert!(
            !self.tail.is_null(),
            "Queue must have a tail after push_tail"
        );
    }

    /// Unlink the front element and hand back its owned value
    pub fn pop_head(&mut self) -> Option<String> {
        let len_before = self.count;
        let mut removed = self.head.take()?;
        self.head = removed.next.take();
        self.count -= 1;
        if self.count <= 1 {
            // the surviving element's box moved into `head`; derive the
            // cached tail from its new slot (nulls it when empty)
            self.refresh_tail();
        }
        // -- post op assertion: queue size decreases when pop succeeded
        assert_eq!(
            self.count,
            len_before - 1,
            "Queue length should decrease by 1"
        );
        Some(removed.value)
    }

    /// Reverse the element order in place.
    ///
    /// Single pass relinking each element's `next` to its predecessor.
    /// Never allocates or frees an element; a no-op on empty and
    /// single-element queues (already their own reverse).
    pub fn reverse(&mut self) {
        if self.count < 2 {
            return;
        }
        let len_before = self.count;
        let mut prev: Option<Box<Element>> = None;
        let mut cur = self.head.take();
        while let Some(mut elem) = cur {
            cur = elem.next.take();
            elem.next = prev;
            prev = Some(elem);
        }
        self.head = prev;
        self.refresh_tail();
        assert_eq!(self.count, len_before, "Reverse must not change the count");
    }

    /// Sort elements into ascending order under `cmp`, in place.
    ///
    /// Insertion sort by detach-and-relink: each element is taken off the
    /// unsorted remainder and spliced into a sorted prefix, before the
    /// first element it compares not-greater against. No element is
    /// allocated or freed; a no-op below two elements.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        if self.count < 2 {
            return;
        }
        let len_before = self.count;
        let mut sorted: Option<Box<Element>> = None;
        let mut rest = self.head.take();
        while let Some(mut elem) = rest {
            rest = elem.next.take();
            let mut cursor = &mut sorted;
            while cursor
                .as_ref()
                .map_or(false, |e| cmp(&elem.value, &e.value) == Ordering::Greater)
            {
                cursor = &mut cursor.as_mut().unwrap().next;
            }
            elem.next = cursor.take();
            *cursor = Some(elem);
        }
        self.head = sorted;
        self.refresh_tail();
        assert_eq!(self.count, len_before, "Sort must not change the count");
    }

    /// Shared front-to-back walk over the values
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Recompute the cached tail pointer from the chain that owns it
    fn refresh_tail(&mut self) {
        let mut tail: *mut Element = ptr::null_mut();
        let mut cursor = &mut self.head;
        while let Some(elem) = cursor {
            tail = &mut **elem;
            cursor = &mut elem.next;
        }
        self.tail = tail;
    }
}

/// Raw pointer to the element resting in `slot`, or null when empty.
/// Deriving from the slot rather than a pre-move box keeps the pointer
/// tied to the element's place in the chain.
fn raw_last(slot: &mut Option<Box<Element>>) -> *mut Element {
    slot.as_deref_mut()
        .map_or(ptr::null_mut(), |elem| elem as *mut Element)
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    /// Release the chain iteratively; the derived recursive drop would
    /// overflow the stack on long chains.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut elem) = cur {
            cur = elem.next.take();
        }
        self.tail = ptr::null_mut();
        self.count = 0;
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Element>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next.map(|elem| {
            self.next = elem.next.as_deref();
            elem.value.as_str()
        })
    }
}

/// Outcome of a bounded copy-out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyOut {
    /// Payload bytes written, terminator excluded
    pub written: usize,
    /// True when the value did not fit and was clipped
    pub truncated: bool,
}

/// Copy `value` into a caller-provided fixed-size destination.
///
/// The destination is cleared first so trailing bytes are deterministic,
/// then at most `dest.len() - 1` bytes of the value are copied, leaving a
/// NUL terminator inside the capacity. A zero-capacity destination gets
/// no write at all. Truncation is silent and byte-oriented: a clipped
/// value is cut mid-sequence rather than reported as an error.
pub fn copy_truncated(value: &str, dest: &mut [u8]) -> CopyOut {
    dest.fill(0);
    if dest.is_empty() {
        return CopyOut {
            written: 0,
            truncated: !value.is_empty(),
        };
    }
    let take = value.len().min(dest.len() - 1);
    dest[..take].copy_from_slice(&value.as_bytes()[..take]);
    CopyOut {
        written: take,
        truncated: take < value.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(q: &Queue) -> Vec<String> {
        q.iter().map(str::to_owned).collect()
    }

    #[test]
    fn push_tail_keeps_fifo_order() {
        let mut q = Queue::new();
        q.push_tail("a");
        q.push_tail("b");
        q.push_tail("c");
        assert_eq!(
            q.pop_head().as_deref(),
            Some("a"),
            "FIFO front should be first pushed"
        );
        assert_eq!(q.pop_head().as_deref(), Some("b"));
        assert_eq!(q.pop_head().as_deref(), Some("c"));
        assert_eq!(q.pop_head(), None, "Queue should be empty");
        assert!(q.is_empty());
    }

    #[test]
    fn push_head_stacks_in_front() {
        let mut q = Queue::new();
        q.push_head("a");
        q.push_head("b");
        assert_eq!(collect(&q), ["b", "a"]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn tail_stays_valid_after_reverse() {
        let mut q = Queue::new();
        q.push_tail("1");
        q.push_tail("2");
        q.push_tail("3");
        q.reverse();
        // push_tail goes through the cached tail pointer; a stale tail
        // after reverse would corrupt the chain here
        q.push_tail("0");
        assert_eq!(collect(&q), ["3", "2", "1", "0"]);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn tail_stays_valid_after_sort() {
        let mut q = Queue::new();
        q.push_tail("b");
        q.push_tail("c");
        q.push_tail("a");
        q.sort_by(|x, y| x.cmp(y));
        q.push_tail("z");
        assert_eq!(collect(&q), ["a", "b", "c", "z"]);
    }

    #[test]
    fn tail_survives_head_insert_on_single_element() {
        let mut q = Queue::new();
        q.push_tail("a");
        // the old head is also the tail; pushing in front relinks its
        // box under the new head, which must re-derive the cached tail
        q.push_head("b");
        q.push_tail("c");
        assert_eq!(collect(&q), ["b", "a", "c"]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn tail_survives_pop_down_to_single_element() {
        let mut q = Queue::new();
        q.push_tail("x");
        q.push_tail("y");
        // popping the front moves the tail element's box into `head`
        assert_eq!(q.pop_head().as_deref(), Some("x"));
        q.push_tail("z");
        assert_eq!(collect(&q), ["y", "z"]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn peek_head_observes_without_removing() {
        let mut q = Queue::new();
        assert_eq!(q.peek_head(), None, "empty queue has no front");
        q.push_tail("front");
        q.push_tail("back");
        assert_eq!(q.peek_head(), Some("front"));
        assert_eq!(q.len(), 2, "peek must not remove");
    }

    #[test]
    fn tail_cleared_when_last_element_leaves() {
        let mut q = Queue::new();
        q.push_head("only");
        assert_eq!(q.pop_head().as_deref(), Some("only"));
        // a stale tail here would alias freed memory on the next push
        q.push_tail("fresh");
        assert_eq!(collect(&q), ["fresh"]);
    }

    #[test]
    fn reverse_on_short_queues_is_noop() {
        let mut q = Queue::new();
        q.reverse();
        assert!(q.is_empty());
        q.push_head("solo");
        q.reverse();
        assert_eq!(collect(&q), ["solo"]);
    }

    #[test]
    fn sort_with_lexicographic_substitute() {
        let mut q = Queue::new();
        for s in ["pear", "apple", "orange", "banana"] {
            q.push_tail(s);
        }
        q.sort_by(|a, b| a.cmp(b));
        assert_eq!(collect(&q), ["apple", "banana", "orange", "pear"]);
    }

    #[test]
    fn copy_truncated_clips_and_terminates() {
        let mut buf = [0xAAu8; 4];
        let out = copy_truncated("hello", &mut buf);
        assert_eq!(&buf, b"hel\0", "3 payload bytes plus terminator");
        assert_eq!(out.written, 3);
        assert!(out.truncated);
    }

    #[test]
    fn copy_truncated_fits_short_values() {
        let mut buf = [0xAAu8; 8];
        let out = copy_truncated("hi", &mut buf);
        assert_eq!(&buf, b"hi\0\0\0\0\0\0", "trailing bytes must be cleared");
        assert_eq!(out.written, 2);
        assert!(!out.truncated);
    }

    #[test]
    fn copy_truncated_zero_capacity_writes_nothing() {
        let mut buf: [u8; 0] = [];
        let out = copy_truncated("hello", &mut buf);
        assert_eq!(out.written, 0);
        assert!(out.truncated);
    }

    #[test]
    fn deep_chain_drops_without_overflow() {
        let mut q = Queue::new();
        for i in 0..1000 {
            q.push_tail(&format!("value {i}"));
        }
        assert_eq!(q.len(), 1000);
        drop(q);
    }
}
