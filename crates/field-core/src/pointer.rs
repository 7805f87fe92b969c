use glam::Vec2;
use std::collections::VecDeque;

/// Raw pointer position plus the eased position the cursor is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// `None` while the pointer is outside the window.
    pub raw: Option<Vec2>,
    pub smoothed: Vec2,
}

impl PointerState {
    pub fn new(start: Vec2) -> Self {
        Self {
            raw: None,
            smoothed: start,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.raw.is_some()
    }

    /// Move the smoothed position `factor` of the way toward the raw one.
    /// Returns the new smoothed position, or `None` if the pointer is inactive.
    pub fn advance(&mut self, factor: f32) -> Option<Vec2> {
        let raw = self.raw?;
        self.smoothed += (raw - self.smoothed) * factor;
        Some(self.smoothed)
    }
}

/// Bounded FIFO of recent smoothed cursor positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, p: Vec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}
