use std::collections::VecDeque;

use rand::Rng;

use crate::sampler;

/// Maximum number of digits either structure will hold.
///
/// Must stay strictly below [`sampler::DIGIT_DOMAIN`] so the rejection
/// sampling loop always finds a free digit.
pub const CAPACITY: usize = 8;

/// Outcome of an insert or remove request.
///
/// Capacity-exceeded and empty-removal are silent no-ops (`Rejected`),
/// not errors; the caller decides whether to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpResult {
    Inserted(u8),
    Removed(u8),
    Rejected,
}

impl OpResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, OpResult::Rejected)
    }
}

/// LIFO variant: distinct digits with push/pop at the top.
#[derive(Debug, Clone, Default)]
pub struct DigitStack {
    items: Vec<u8>,
}

impl DigitStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a randomly-drawn unused digit onto the top.
    pub fn try_push<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OpResult {
        if self.items.len() == CAPACITY {
            return OpResult::Rejected;
        }

        let digit = sampler::draw_unused_digit(rng, &self.items);
        self.items.push(digit);
        OpResult::Inserted(digit)
    }

    /// Remove and report the most recently pushed digit.
    pub fn try_pop(&mut self) -> OpResult {
        match self.items.pop() {
            Some(digit) => OpResult::Removed(digit),
            None => OpResult::Rejected,
        }
    }

    /// The current top digit, for restyling after an operation.
    pub fn top(&self) -> Option<u8> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Digits in insertion order, oldest first.
    pub fn digits(&self) -> &[u8] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// FIFO variant: distinct digits enqueued at the tail, dequeued at the head.
#[derive(Debug, Clone, Default)]
pub struct DigitQueue {
    items: VecDeque<u8>,
}

impl DigitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a randomly-drawn unused digit at the tail.
    pub fn try_enqueue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OpResult {
        if self.items.len() == CAPACITY {
            return OpResult::Rejected;
        }

        let digit = sampler::draw_unused_digit(rng, self.items.make_contiguous());
        self.items.push_back(digit);
        OpResult::Inserted(digit)
    }

    /// Remove and report the oldest digit.
    pub fn try_dequeue(&mut self) -> OpResult {
        match self.items.pop_front() {
            Some(digit) => OpResult::Removed(digit),
            None => OpResult::Rejected,
        }
    }

    /// The current tail digit, for restyling after an operation.
    pub fn tail(&self) -> Option<u8> {
        self.items.back().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Digits in insertion order, head first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Presenter-facing dispatch over the two variants.
///
/// The UI only ever issues parameterless insert/remove requests and queries
/// the resulting state; digit selection stays internal to the structures.
#[derive(Debug, Clone)]
pub enum Structure {
    Stack(DigitStack),
    Queue(DigitQueue),
}

impl Structure {
    pub fn insert<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OpResult {
        match self {
            Structure::Stack(stack) => stack.try_push(rng),
            Structure::Queue(queue) => queue.try_enqueue(rng),
        }
    }

    pub fn remove(&mut self) -> OpResult {
        match self {
            Structure::Stack(stack) => stack.try_pop(),
            Structure::Queue(queue) => queue.try_dequeue(),
        }
    }

    /// The element at the active end (stack top or queue tail), if any.
    pub fn active_end(&self) -> Option<u8> {
        match self {
            Structure::Stack(stack) => stack.top(),
            Structure::Queue(queue) => queue.tail(),
        }
    }

    /// Digits in insertion order, oldest first.
    pub fn digits(&self) -> Vec<u8> {
        match self {
            Structure::Stack(stack) => stack.digits().to_vec(),
            Structure::Queue(queue) => queue.digits().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Structure::Stack(stack) => stack.len(),
            Structure::Queue(queue) => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == CAPACITY
    }

    pub fn clear(&mut self) {
        match self {
            Structure::Stack(stack) => stack.clear(),
            Structure::Queue(queue) => queue.clear(),
        }
    }
}
