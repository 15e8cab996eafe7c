//! Abstract Factory
//!
//! One factory per furniture family. Client code asks a factory for a chair
//! and a table and never names a concrete type, so the two pieces always
//! match.
//!
//! Run with: cargo run --bin patterns -- abstract-factory

use std::io::Write;

use crate::error::Result;

pub trait Chair {
    fn info(&self) -> &'static str;
}

pub trait Table {
    fn info(&self) -> &'static str;

    fn show_with(&self, chair: &dyn Chair) -> String {
        format!("{} with {}", self.info(), chair.info())
    }
}

pub trait FurnitureFactory {
    fn style(&self) -> &'static str;
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_table(&self) -> Box<dyn Table>;
}

pub struct ModernChair;
pub struct ClassicChair;
pub struct ModernTable;
pub struct ClassicTable;

impl Chair for ModernChair {
    fn info(&self) -> &'static str {
        "modern chair"
    }
}

impl Chair for ClassicChair {
    fn info(&self) -> &'static str {
        "classic chair"
    }
}

impl Table for ModernTable {
    fn info(&self) -> &'static str {
        "Modern Table"
    }
}

impl Table for ClassicTable {
    fn info(&self) -> &'static str {
        "Classic Table"
    }
}

pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn style(&self) -> &'static str {
        "modern"
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(ModernTable)
    }
}

pub struct ClassicFurnitureFactory;

impl FurnitureFactory for ClassicFurnitureFactory {
    fn style(&self) -> &'static str {
        "classic"
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ClassicChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(ClassicTable)
    }
}

pub fn client_method(factory: &dyn FurnitureFactory) -> String {
    let chair = factory.create_chair();
    let table = factory.create_table();
    table.show_with(chair.as_ref())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let factories: [&dyn FurnitureFactory; 2] = [&ModernFurnitureFactory, &ClassicFurnitureFactory];

    for (i, factory) in factories.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "Client: Testing client code with the {} furniture factory type...",
            factory.style()
        )?;
        writeln!(out, "{}", client_method(factory))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_stay_consistent() {
        assert_eq!(client_method(&ModernFurnitureFactory), "Modern Table with modern chair");
        assert_eq!(client_method(&ClassicFurnitureFactory), "Classic Table with classic chair");
    }

    #[test]
    fn test_tables_accept_any_chair() {
        assert_eq!(ModernTable.show_with(&ClassicChair), "Modern Table with classic chair");
    }
}
