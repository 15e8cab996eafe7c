//! Factory Method
//!
//! Run with: cargo run --bin patterns -- factory-method

use std::io::Write;

use crate::error::Result;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;
pub struct ConcreteProduct2;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Operation() of ConcreteProduct1}".to_string()
    }
}

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Operation() of ConcreteProduct2}".to_string()
    }
}

/// Implementors only pick the product; the shared logic in `some_operation`
/// stays in the trait.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        format!(
            "Creator is calling factory_method().operation(): {}",
            self.factory_method().operation()
        )
    }
}

pub struct ConcreteCreator1;
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "App: Launched with the ConcreteCreator1.")?;
    writeln!(out, "{}", ConcreteCreator1.some_operation())?;
    writeln!(out)?;
    writeln!(out, "App: Launched with the ConcreteCreator2.")?;
    writeln!(out, "{}", ConcreteCreator2.some_operation())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_picks_product() {
        let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreator1), Box::new(ConcreteCreator2)];
        let results: Vec<String> = creators.iter().map(|c| c.some_operation()).collect();
        assert!(results[0].ends_with("{Operation() of ConcreteProduct1}"));
        assert!(results[1].ends_with("{Operation() of ConcreteProduct2}"));
    }
}
