//! State
//!
//! The context forwards requests to whatever state object it currently holds.
//! States decide which state comes next; the context only performs the swap.
//!
//! Run with: cargo run --bin patterns -- state

use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub trait State {
    fn name(&self) -> &'static str;

    fn handle1(&self) -> String {
        format!("{} handles request1.", self.name())
    }

    fn handle2(&self) -> String {
        format!("{} handles request2.", self.name())
    }

    /// The state the context should move to on `change_state`. Borrows
    /// `self`; the context drops the old state once the successor is in.
    fn next(&self) -> Box<dyn State>;
}

pub struct ConcreteStateA;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn next(&self) -> Box<dyn State> {
        Box::new(ConcreteStateB)
    }
}

pub struct ConcreteStateB;

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn next(&self) -> Box<dyn State> {
        Box::new(ConcreteStateA)
    }
}

pub struct Context {
    state: Box<dyn State>,
    history: Vec<&'static str>,
}

impl Context {
    pub fn new(state: Box<dyn State>) -> Self {
        debug!(state = state.name(), "context created");
        Self {
            history: vec![state.name()],
            state,
        }
    }

    /// Swaps in `state` and returns the announcement line.
    pub fn transition_to(&mut self, state: Box<dyn State>) -> String {
        debug!(from = self.state.name(), to = state.name(), "transition");
        self.history.push(state.name());
        self.state = state;
        format!("Context: Transition to {}.", self.state.name())
    }

    pub fn handle1(&self) -> String {
        self.state.handle1()
    }

    pub fn handle2(&self) -> String {
        self.state.handle2()
    }

    /// Lets the current state pick its successor; returns the lines produced.
    pub fn change_state(&mut self) -> [String; 2] {
        let intent = format!("{} wants to change the state of the context.", self.state.name());
        let next = self.state.next();
        [intent, self.transition_to(next)]
    }

    pub fn current(&self) -> &'static str {
        self.state.name()
    }

    /// Names of every state held so far, oldest first.
    pub fn history(&self) -> &[&'static str] {
        &self.history
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut context = Context::new(Box::new(ConcreteStateA));
    writeln!(out, "Context: Transition to {}.", context.current())?;
    writeln!(out, "{}", context.handle1())?;
    writeln!(out, "{}", context.handle2())?;

    for _ in 0..2 {
        writeln!(out)?;
        for line in context.change_state() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", context.handle1())?;
        writeln!(out, "{}", context.handle2())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_alternate() {
        let mut context = Context::new(Box::new(ConcreteStateA));
        assert_eq!(context.current(), "ConcreteStateA");

        let [intent, transition] = context.change_state();
        assert_eq!(intent, "ConcreteStateA wants to change the state of the context.");
        assert_eq!(transition, "Context: Transition to ConcreteStateB.");
        assert_eq!(context.handle1(), "ConcreteStateB handles request1.");

        context.change_state();
        assert_eq!(context.current(), "ConcreteStateA");
        assert_eq!(context.history(), ["ConcreteStateA", "ConcreteStateB", "ConcreteStateA"]);
    }

    #[test]
    fn test_explicit_transition() {
        let mut context = Context::new(Box::new(ConcreteStateB));
        let line = context.transition_to(Box::new(ConcreteStateB));
        assert_eq!(line, "Context: Transition to ConcreteStateB.");
        assert_eq!(context.handle2(), "ConcreteStateB handles request2.");
    }

    #[test]
    fn test_next_leaves_state_usable() {
        let a = ConcreteStateA;
        let b = a.next();
        assert_eq!(b.name(), "ConcreteStateB");
        assert_eq!(b.next().name(), "ConcreteStateA");
        assert_eq!(a.handle1(), "ConcreteStateA handles request1.");
    }

    #[test]
    fn test_demo_output() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Context: Transition to").count(), 3);
        assert!(text.ends_with("ConcreteStateA handles request2.\n"));
    }
}
