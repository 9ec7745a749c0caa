use std::collections::VecDeque;

use crate::config::{Grid, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the playfield.
    #[must_use]
    pub fn is_within_bounds(self, grid: Grid) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.cols())
            && self.y < i32::from(grid.rows())
    }

    /// Returns this position wrapped into the playfield on both axes.
    #[must_use]
    pub fn wrapped(self, grid: Grid) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(grid.cols())),
            y: wrap_axis(self.y, i32::from(grid.rows())),
        }
    }

    /// Returns the neighboring position one cell in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Ordered snake body plus heading and the buffered direction change.
///
/// Pure data and movement rules: no knowledge of food, scoring, rendering,
/// or timing. The body is a deque with the head at the front, so growth is
/// an amortized O(1) append at the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// Creates the starting snake: head at the grid center, body extending
    /// to the left of it.
    ///
    /// The leftward layout is why a session never starts heading `Left` —
    /// the first move would land on the second segment.
    #[must_use]
    pub fn spawn_centered(grid: Grid, heading: Direction) -> Self {
        let head = Position {
            x: i32::from(grid.cols() / 2),
            y: i32::from(grid.rows() / 2),
        };

        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self {
            body,
            heading,
            pending: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
            pending: None,
        }
    }

    /// Returns true when `direction` is the direct opposite of the current
    /// heading.
    #[must_use]
    pub fn would_reverse(&self, direction: Direction) -> bool {
        direction == self.heading.opposite()
    }

    /// Buffers a direction change for the next movement step.
    ///
    /// A reversal of the *current* heading is silently dropped; any other
    /// direction overwrites the buffer (last-write-wins — several requests
    /// between two ticks collapse to the most recent valid one). Returns
    /// whether the request was accepted.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if self.would_reverse(direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Applies the buffered heading and moves the body one cell forward.
    ///
    /// Every segment follows its predecessor and the head steps in the
    /// heading's direction, possibly leaving the playfield (the caller wraps
    /// it afterwards). Returns the tail cell vacated by the shift so the
    /// caller can re-append it on growth.
    pub fn advance(&mut self) -> Position {
        if let Some(next) = self.pending.take() {
            self.heading = next;
        }

        let next_head = self.head().stepped(self.heading);
        self.body.push_front(next_head);
        self.body
            .pop_back()
            .expect("snake body must always contain at least one segment")
    }

    /// Re-appends a vacated tail cell, growing the body by one segment.
    pub fn extend_tail(&mut self, cell: Position) {
        self.body.push_back(cell);
    }

    /// Replaces an out-of-bounds head with its toroidally wrapped position.
    pub fn wrap_head(&mut self, grid: Grid) {
        let wrapped = self.head().wrapped(grid);
        if let Some(head) = self.body.front_mut() {
            *head = wrapped;
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
