//! Flyweight
//!
//! Building a `Car` is treated as expensive, so the factory keeps one shared
//! flyweight per distinct car description and hands out `Rc` clones of it.
//!
//! Run with: cargo run --bin patterns -- flyweight

use std::io::Write;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub owner: Option<String>,
    pub number: Option<String>,
    pub company: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Description used as the cache key. Unset and empty fields are skipped.
    pub fn info(&self) -> String {
        let fields = [
            ("CarOwner", &self.owner),
            ("Model", &self.model),
            ("CarNum", &self.number),
            ("Color", &self.color),
            ("Made by", &self.company),
        ];

        fields
            .iter()
            .filter_map(|(label, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some(format!("{label} : {v}")),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug)]
pub struct CarFlyweight {
    shared_state: Car,
}

impl CarFlyweight {
    pub fn shared_state(&self) -> &Car {
        &self.shared_state
    }

    pub fn describe(&self) -> String {
        format!("Displaying SharedCarInfo : {}", self.shared_state.info())
    }
}

#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: FxHashMap<String, Rc<CarFlyweight>>,
    // insertion order, for listing
    keys: Vec<String>,
}

impl FlyweightFactory {
    pub fn new<'a>(cars: impl IntoIterator<Item = &'a Car>) -> Self {
        let mut factory = Self::default();
        for car in cars {
            factory.get_flyweight(car);
        }
        factory
    }

    pub fn contains(&self, car: &Car) -> bool {
        self.flyweights.contains_key(&car.info())
    }

    /// Shared flyweight for `car`, created on first request.
    pub fn get_flyweight(&mut self, car: &Car) -> Rc<CarFlyweight> {
        let key = car.info();
        if let Some(existing) = self.flyweights.get(&key) {
            debug!(key = %key, "flyweight reused");
            return Rc::clone(existing);
        }

        debug!(key = %key, "flyweight created");
        let flyweight = Rc::new(CarFlyweight {
            shared_state: car.clone(),
        });
        self.keys.push(key.clone());
        self.flyweights.insert(key, Rc::clone(&flyweight));
        flyweight
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }

    /// Cache keys in the order they were first created.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

fn list_flyweights(out: &mut dyn Write, factory: &FlyweightFactory) -> Result<()> {
    writeln!(out, "\nFlyweightFactory: I have {} flyweights:", factory.len())?;
    for key in factory.keys() {
        writeln!(out, "{key}")?;
    }
    Ok(())
}

fn request(out: &mut dyn Write, factory: &mut FlyweightFactory, car: &Car) -> Result<()> {
    if !factory.contains(car) {
        writeln!(out, "this car's flyweight doesn't exist, create new one")?;
    }
    writeln!(out, "{}", factory.get_flyweight(car).describe())?;
    Ok(())
}

/// Seeds the cache with `cars`, announcing every miss like `request` does.
fn prepopulate(out: &mut dyn Write, factory: &mut FlyweightFactory, cars: &[Car]) -> Result<()> {
    for car in cars {
        if !factory.contains(car) {
            writeln!(out, "this car's flyweight doesn't exist, create new one")?;
            factory.get_flyweight(car);
        }
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "--this example assumes that Car creation is very expensive--")?;

    let cars = [
        Car::new().company("Chevrolet").model("Camaro2018").color("pink"),
        Car::new().company("Mercedes Benz").model("C300").color("black"),
        Car::new().company("Mercedes Benz").model("C500").color("red"),
        Car::new().company("BMW").model("M5").color("red"),
        Car::new().company("BMW").model("X6").color("white"),
    ];

    let mut factory = FlyweightFactory::default();
    prepopulate(out, &mut factory, &cars[..2])?;
    list_flyweights(out, &factory)?;

    for index in [0, 3, 1, 4] {
        writeln!(out)?;
        request(out, &mut factory, &cars[index])?;
        list_flyweights(out, &factory)?;
    }

    writeln!(out)?;
    for _ in 0..10 {
        request(out, &mut factory, &cars[2])?;
    }
    list_flyweights(out, &factory)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_skips_missing_fields() {
        let car = Car::new().company("BMW").model("M5").color("");
        assert_eq!(car.info(), "Model : M5 Made by : BMW");
    }

    #[test]
    fn test_same_description_is_shared() {
        let mut factory = FlyweightFactory::default();
        let a = factory.get_flyweight(&Car::new().company("BMW").model("X6"));
        let b = factory.get_flyweight(&Car::new().model("X6").company("BMW"));
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_prepopulated_and_ordered_keys() {
        let cars = [Car::new().model("A"), Car::new().model("B"), Car::new().model("A")];
        let mut factory = FlyweightFactory::new(&cars);
        assert_eq!(factory.len(), 2);
        assert_eq!(factory.keys(), ["Model : A", "Model : B"]);

        factory.get_flyweight(&Car::new().model("C"));
        assert_eq!(factory.keys().last().map(String::as_str), Some("Model : C"));
        assert_eq!(factory.get_flyweight(&cars[1]).shared_state(), &cars[1]);
    }

    #[test]
    fn test_demo_creates_each_car_once() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("create new one").count(), 5);
        assert!(text.trim_end().ends_with("Model : C500 Color : red Made by : Mercedes Benz"));
        assert!(text.contains("I have 5 flyweights"));
    }

    #[test]
    fn test_prepopulation_reports_each_miss() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let miss = "this car's flyweight doesn't exist, create new one\n";
        let expected = format!(
            "--this example assumes that Car creation is very expensive--\n{miss}{miss}\nFlyweightFactory: I have 2 flyweights:\n"
        );
        assert!(text.starts_with(&expected));
    }

    #[test]
    fn test_prepopulate_skips_cached_cars() {
        let cars = [Car::new().model("A"), Car::new().model("A"), Car::new().model("B")];
        let mut factory = FlyweightFactory::default();
        let mut out: Vec<u8> = Vec::new();
        prepopulate(&mut out, &mut factory, &cars).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("create new one").count(), 2);
        assert_eq!(factory.keys(), ["Model : A", "Model : B"]);
    }
}
