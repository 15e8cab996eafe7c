//! Chain of Responsibility
//!
//! A request travels along a linked list of handlers until one of them takes
//! it. Every handler only knows its successor, so a client may hand the
//! request to any link and get the behavior of the remaining sub-chain.
//!
//! Run with: cargo run --bin patterns -- chain

use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub const DEFAULT_REQUESTS: [&str; 3] = ["Nut", "Banana", "Cup of coffee"];

pub trait Handler {
    /// Local attempt only; `None` means "not mine".
    fn try_handle(&self, request: &str) -> Option<String>;

    fn next(&self) -> Option<&dyn Handler>;

    fn name(&self) -> &str;

    /// Runs the local attempt, then falls through to the successor.
    /// `None` means nobody in the remaining chain took the request.
    fn handle(&self, request: &str) -> Option<String> {
        self.try_handle(request).or_else(|| {
            debug!(handler = self.name(), request, "passing request on");
            self.next().and_then(|next| next.handle(request))
        })
    }
}

/// An animal that eats exactly one kind of food.
pub struct Feeder {
    animal: &'static str,
    food: &'static str,
    next: Option<Box<dyn Handler>>,
}

impl Feeder {
    pub fn new(animal: &'static str, food: &'static str) -> Self {
        Self {
            animal,
            food,
            next: None,
        }
    }

    pub fn monkey() -> Self {
        Self::new("Monkey", "Banana")
    }

    pub fn squirrel() -> Self {
        Self::new("Squirrel", "Nut")
    }

    pub fn dog() -> Self {
        Self::new("Dog", "MeatBall")
    }

    /// Links `next` behind this handler, e.g.
    /// `Feeder::monkey().then(Feeder::squirrel().then(Feeder::dog()))`.
    pub fn then(mut self, next: impl Handler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl Handler for Feeder {
    fn try_handle(&self, request: &str) -> Option<String> {
        (request == self.food).then(|| format!("{}: I'll eat the {}.", self.animal, request))
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }

    fn name(&self) -> &str {
        self.animal
    }
}

/// Human-readable chain layout, e.g. "Monkey > Squirrel > Dog".
pub fn describe(head: &dyn Handler) -> String {
    let mut names = vec![head.name().to_string()];
    let mut link = head.next();
    while let Some(handler) = link {
        names.push(handler.name().to_string());
        link = handler.next();
    }
    names.join(" > ")
}

pub fn client_code(out: &mut dyn Write, handler: &dyn Handler, requests: &[&str]) -> Result<()> {
    for food in requests {
        writeln!(out, "Client: Who wants a {food}?")?;
        match handler.handle(food) {
            Some(answer) => writeln!(out, "   {answer}")?,
            None => writeln!(out, "   {food} was left untouched.")?,
        }
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let chain = Feeder::monkey().then(Feeder::squirrel().then(Feeder::dog()));

    writeln!(out, "Chain: {}\n", describe(&chain))?;
    client_code(out, &chain, &DEFAULT_REQUESTS)?;
    writeln!(out)?;

    if let Some(sub_chain) = chain.next() {
        writeln!(out, "Subchain: {}\n", describe(sub_chain))?;
        client_code(out, sub_chain, &DEFAULT_REQUESTS)?;
    }
    Ok(())
}
