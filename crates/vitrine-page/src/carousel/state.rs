//! Carousel navigation direction and observable state

/// Direction of a relative slide change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One slide back (wraps from the first slide to the last)
    Previous,
    /// One slide forward (wraps from the last slide to the first)
    Next,
}

impl Direction {
    /// Map a host-side integer step: negative is back, positive is forward.
    ///
    /// Zero carries no direction and yields `None`.
    pub fn from_step(step: i32) -> Option<Self> {
        match step.signum() {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }

    /// Signed offset applied to the current index
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Index reached from `current` in a circular sequence of `count` slides
    ///
    /// `count` must be non-zero.
    pub fn step_from(self, current: usize, count: usize) -> usize {
        let count = count as isize;
        (current as isize + self.offset()).rem_euclid(count) as usize
    }
}

/// Observable carousel state
///
/// There is no terminal state: a mounted carousel alternates between these
/// two for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselState {
    /// Slide `index` is active and auto-advance is armed
    Running { index: usize },
    /// Slide `index` is active and auto-advance is paused (pointer hovering)
    Paused { index: usize },
}

impl CarouselState {
    /// Index of the active slide
    pub fn index(&self) -> usize {
        match self {
            CarouselState::Running { index } | CarouselState::Paused { index } => *index,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, CarouselState::Running { .. })
    }
}
