//! Builder
//!
//! A director drives a fixed sequence of construction steps; each builder
//! decides what a step produces. The director can swap builders between
//! products.
//!
//! Run with: cargo run --bin patterns -- builder

use std::io::Write;

use crate::error::Result;

/// Parts accumulated by a builder so far.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartList {
    parts: Vec<String>,
}

impl PartList {
    pub fn push(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Hands out everything built so far and starts over.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.parts)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

pub trait CarBuilder {
    fn build_tire(&mut self);
    fn build_door(&mut self);
    fn build_car_frame(&mut self);
    fn build_engine(&mut self);

    /// Returns the finished product and resets the builder.
    fn take_product(&mut self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct PorscheBuilder {
    parts: PartList,
}

impl CarBuilder for PorscheBuilder {
    fn build_tire(&mut self) {
        self.parts.push("Porsche's Tire");
    }

    fn build_door(&mut self) {
        self.parts.push("Porsche's CarDoor");
    }

    fn build_car_frame(&mut self) {
        self.parts.push("Porsche's fancy Car Frame");
    }

    fn build_engine(&mut self) {
        self.parts.push("Porsche's Super Powerful Engine");
    }

    fn take_product(&mut self) -> Vec<String> {
        self.parts.take()
    }
}

#[derive(Debug, Default)]
pub struct AudiBuilder {
    parts: PartList,
}

impl CarBuilder for AudiBuilder {
    fn build_tire(&mut self) {
        self.parts.push("Audi's Tire");
    }

    fn build_door(&mut self) {
        self.parts.push("Audi's CarDoor");
    }

    fn build_car_frame(&mut self) {
        self.parts.push("Audi's stylish Car Frame");
    }

    fn build_engine(&mut self) {
        self.parts.push("Audi's robust Engine");
    }

    fn take_product(&mut self) -> Vec<String> {
        self.parts.take()
    }
}

pub struct CarDirector {
    builder: Box<dyn CarBuilder>,
}

impl CarDirector {
    pub fn new(builder: Box<dyn CarBuilder>) -> Self {
        Self { builder }
    }

    pub fn set_builder(&mut self, builder: Box<dyn CarBuilder>) {
        self.builder = builder;
    }

    pub fn build_minimal(&mut self) {
        self.builder.build_tire();
    }

    pub fn build_full_car(&mut self) {
        self.builder.build_tire();
        self.builder.build_door();
        self.builder.build_car_frame();
        self.builder.build_engine();
    }

    pub fn product(&mut self) -> Vec<String> {
        self.builder.take_product()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "--use PorscheBuilder--")?;
    let mut director = CarDirector::new(Box::new(PorscheBuilder::default()));
    director.build_full_car();
    for part in director.product() {
        writeln!(out, "{part}")?;
    }

    writeln!(out, "--use AudiBuilder--")?;
    director.set_builder(Box::new(AudiBuilder::default()));
    director.build_full_car();
    for part in director.product() {
        writeln!(out, "{part}")?;
    }

    writeln!(out, "--minimal AudiBuilder product--")?;
    director.build_minimal();
    for part in director.product() {
        writeln!(out, "{part}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_car_step_order() {
        let mut director = CarDirector::new(Box::new(AudiBuilder::default()));
        director.build_full_car();
        assert_eq!(
            director.product(),
            ["Audi's Tire", "Audi's CarDoor", "Audi's stylish Car Frame", "Audi's robust Engine"]
        );
    }

    #[test]
    fn test_product_resets_builder() {
        let mut director = CarDirector::new(Box::new(PorscheBuilder::default()));
        director.build_minimal();
        assert_eq!(director.product(), ["Porsche's Tire"]);
        assert!(director.product().is_empty());
    }

    #[test]
    fn test_part_list_take() {
        let mut parts = PartList::default();
        parts.push("a");
        assert_eq!(parts.take(), ["a"]);
        assert!(parts.is_empty());
    }
}
