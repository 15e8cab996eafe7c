//! Iterator
//!
//! A collection hands out cursors that walk its items either front-to-back or
//! back-to-front. The direction is read from the collection once, when the
//! cursor is created, and never again.
//!
//! Run with: cargo run --bin patterns -- iterator

use std::cell::Cell;
use std::io::Write;

use tracing::trace;

use crate::error::Result;

pub const DEFAULT_WORDS: [&str; 6] = ["First", "Second", "Third", "4", "5", "6"];

/* ============================================================
 * Direction and index stepping
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Index the cursor moves to from `current` (`None` = not started yet),
/// or `None` when the step leaves `[0, len)`.
pub fn next_index(current: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
    match (direction, current) {
        (Direction::Forward, None) => (len > 0).then_some(0),
        (Direction::Forward, Some(i)) => i.checked_add(1).filter(|&next| next < len),
        (Direction::Reverse, None) => len.checked_sub(1),
        (Direction::Reverse, Some(i)) => i.checked_sub(1).filter(|&next| next < len),
    }
}

/* ============================================================
 * OrderedCollection
 * ============================================================
 */

/// Append-only sequence with a traversal direction flag.
///
/// The flag sits in a `Cell` so it can be flipped while cursors borrow the
/// collection; items can only be appended through `&mut self`, which the
/// borrow checker refuses while any cursor is alive.
#[derive(Debug, Clone)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
    direction: Cell<Direction>,
}

impl<T> OrderedCollection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            direction: Cell::new(Direction::Forward),
        }
    }

    pub fn add_item(&mut self, item: impl Into<T>) {
        self.items.push(item.into());
    }

    /// Flips the direction used by cursors created from now on.
    pub fn reverse_direction(&self) {
        self.direction.set(self.direction.get().flipped());
    }

    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn new_iterator(&self) -> CursorIterator<'_, T> {
        CursorIterator::new(self, self.direction.get())
    }
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            direction: Cell::new(Direction::Forward),
        }
    }
}

impl<T> Extend<T> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = CursorIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.new_iterator()
    }
}

/* ============================================================
 * CursorIterator
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    NotStarted,
    At(usize),
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct CursorIterator<'a, T> {
    collection: &'a OrderedCollection<T>,
    cursor: Cursor,
    direction: Direction,
}

impl<'a, T> CursorIterator<'a, T> {
    fn new(collection: &'a OrderedCollection<T>, direction: Direction) -> Self {
        Self {
            collection,
            cursor: Cursor::NotStarted,
            direction,
        }
    }

    /// Direction captured when this cursor was created.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steps once in the captured direction. Returns `false` once the
    /// sequence is used up; the cursor then stays exhausted until `reset`.
    pub fn advance(&mut self) -> bool {
        let from = match self.cursor {
            Cursor::Exhausted => return false,
            Cursor::NotStarted => None,
            Cursor::At(i) => Some(i),
        };

        match next_index(from, self.direction, self.collection.len()) {
            Some(next) => {
                self.cursor = Cursor::At(next);
                true
            }
            None => {
                trace!(direction = ?self.direction, "cursor exhausted");
                self.cursor = Cursor::Exhausted;
                false
            }
        }
    }

    /// Item under the cursor; `None` before the first `advance` or after exhaustion.
    pub fn current(&self) -> Option<&'a T> {
        match self.cursor {
            Cursor::At(i) => self.collection.items.get(i),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<usize> {
        match self.cursor {
            Cursor::At(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }

    /// Puts the cursor on the first item of its captured direction.
    pub fn reset(&mut self) {
        let len = self.collection.len();
        self.cursor = match (len, self.direction) {
            (0, _) => Cursor::Exhausted,
            (_, Direction::Forward) => Cursor::At(0),
            (_, Direction::Reverse) => Cursor::At(len - 1),
        };
    }
}

impl<'a, T> Iterator for CursorIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }
}

/* ============================================================
 * Demo
 * ============================================================
 */

pub fn run(out: &mut dyn Write) -> Result<()> {
    run_with_words(out, &DEFAULT_WORDS)
}

pub fn run_with_words<S: AsRef<str>>(out: &mut dyn Write, words: &[S]) -> Result<()> {
    let mut collection: OrderedCollection<String> = OrderedCollection::new();
    for word in words {
        collection.add_item(word.as_ref());
    }

    writeln!(out, "--Straight traversal--")?;
    for element in &collection {
        writeln!(out, "{element}")?;
    }

    // Created before the flip: keeps walking forward.
    let mut early = collection.new_iterator();

    writeln!(out, "\n--Reverse traversal--")?;
    collection.reverse_direction();
    for element in &collection {
        writeln!(out, "{element}")?;
    }

    writeln!(out, "\n--Iterator created before the flip--")?;
    while early.advance() {
        if let (Some(key), Some(element)) = (early.key(), early.current()) {
            writeln!(out, "[{key}] {element}")?;
        }
    }

    writeln!(out, "\n--After reset--")?;
    early.reset();
    match early.current() {
        Some(element) => writeln!(out, "first again: {element}")?,
        None => writeln!(out, "collection is empty")?,
    }

    Ok(())
}
