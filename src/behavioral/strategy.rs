//! Strategy
//!
//! The context keeps a boxed algorithm and swaps it at runtime; callers only
//! ever talk to the context.
//!
//! Run with: cargo run --bin patterns -- strategy

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;

pub const DEFAULT_INPUT: [&str; 7] = ["c", "f", "a", "d", "e", "w", "b"];

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, items: &[String]) -> Vec<String>;
}

pub struct Ascending;

impl SortStrategy for Ascending {
    fn name(&self) -> &'static str {
        "normal sorting"
    }

    fn sort(&self, items: &[String]) -> Vec<String> {
        items.iter().cloned().sorted().collect()
    }
}

pub struct Descending;

impl SortStrategy for Descending {
    fn name(&self) -> &'static str {
        "reverse sorting"
    }

    fn sort(&self, items: &[String]) -> Vec<String> {
        items.iter().cloned().sorted_by(|a, b| b.cmp(a)).collect()
    }
}

pub struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Sorted items joined by single spaces. `items` is left untouched.
    pub fn conduct(&self, items: &[String]) -> String {
        self.strategy.sort(items).iter().join(" ")
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let input: Vec<String> = DEFAULT_INPUT.iter().map(|s| s.to_string()).collect();
    run_with_input(out, &input)
}

pub fn run_with_input(out: &mut dyn Write, input: &[String]) -> Result<()> {
    let mut sorter = Sorter::new(Box::new(Ascending));
    writeln!(out, "Client: Strategy is set to {}.", sorter.strategy_name())?;
    writeln!(out, "{}\n", sorter.conduct(input))?;

    sorter.set_strategy(Box::new(Descending));
    writeln!(out, "Client: Strategy is set to {}.", sorter.strategy_name())?;
    writeln!(out, "{}", sorter.conduct(input))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> Vec<String> {
        DEFAULT_INPUT.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ascending() {
        assert_eq!(Sorter::new(Box::new(Ascending)).conduct(&input()), "a b c d e f w");
    }

    #[test]
    fn test_swap_strategy_at_runtime() {
        let items = input();
        let mut sorter = Sorter::new(Box::new(Ascending));
        sorter.set_strategy(Box::new(Descending));
        assert_eq!(sorter.strategy_name(), "reverse sorting");
        assert_eq!(sorter.conduct(&items), "w f e d c b a");
        // input order preserved
        assert_eq!(items[0], "c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Sorter::new(Box::new(Descending)).conduct(&[]), "");
    }
}
