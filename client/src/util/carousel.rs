//! Wrapping index for carousels and image galleries.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Interval between automatic testimonial advances.
pub const AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Position within `len` slides. Navigation wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
}

impl Carousel {
    /// Carousel at slide 0. Auto-play starts enabled.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0, autoplay: true }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Advance one slide, wrapping to the first.
    pub fn forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping to the last.
    pub fn back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Timer tick: advances only while auto-play is on.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.forward();
        }
    }

    /// User navigation. Stops auto-play permanently, then moves.
    pub fn navigate(&mut self, direction: Direction) {
        self.autoplay = false;
        match direction {
            Direction::Prev => self.back(),
            Direction::Next => self.forward(),
        }
    }

    /// User picked a specific slide. Stops auto-play.
    pub fn jump(&mut self, index: usize) {
        self.autoplay = false;
        self.select(index);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}
