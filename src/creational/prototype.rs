//! Prototype
//!
//! `#[derive(Clone)]` copies every field, but an `Rc` field copies only the
//! pointer. `Person` keeps its id record behind `Rc<RefCell<..>>`, so `clone`
//! is a shallow copy that shares the record and `deep_clone` is the
//! prototype-style full copy.
//!
//! Run with: cargo run --bin patterns -- prototype

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct IdInfo {
    pub id_number: u32,
}

#[derive(Debug, Clone)]
pub struct Person {
    pub age: u32,
    pub birth_date: NaiveDate,
    pub name: String,
    pub id_info: Rc<RefCell<IdInfo>>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, birth_date: NaiveDate, id_number: u32) -> Self {
        Self {
            age,
            birth_date,
            name: name.into(),
            id_info: Rc::new(RefCell::new(IdInfo { id_number })),
        }
    }

    /// Copy that owns a fresh id record.
    pub fn deep_clone(&self) -> Self {
        Self {
            id_info: Rc::new(RefCell::new(self.id_info.borrow().clone())),
            ..self.clone()
        }
    }

    pub fn id_number(&self) -> u32 {
        self.id_info.borrow().id_number
    }

    pub fn set_id_number(&self, id_number: u32) {
        self.id_info.borrow_mut().id_number = id_number;
    }

    /// Two lines: name/age/birth date, then the id.
    pub fn display_values(&self) -> String {
        format!(
            "Name: {}, Age: {}, BirthDate: {}\nID#: {}",
            self.name,
            self.age,
            self.birth_date.format("%m/%d/%y"),
            self.id_number()
        )
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| PatternError::InvalidDate {
        input: input.to_string(),
    })
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut p1 = Person::new("Jack Daniels", 42, parse_date("1977-01-01")?, 666);
    let p2 = p1.clone();
    let p3 = p1.deep_clone();

    writeln!(out, "Original values of p1, p2, p3")?;
    for (label, person) in [("p1", &p1), ("p2", &p2), ("p3", &p3)] {
        writeln!(out, "--{label} instance values--")?;
        writeln!(out, "{}", person.display_values())?;
    }

    p1.age = 32;
    p1.birth_date = parse_date("1900-01-01")?;
    p1.name = "Frank".to_string();
    p1.set_id_number(7878);

    writeln!(out, "\nValues of p1, p2 and p3 after changes to p1:")?;
    writeln!(out, "--p1 instance values--")?;
    writeln!(out, "{}", p1.display_values())?;
    writeln!(out, "--p2 instance values (shallow copy, id changed)--")?;
    writeln!(out, "{}", p2.display_values())?;
    writeln!(out, "--p3 instance values (everything was kept the same)--")?;
    writeln!(out, "{}", p3.display_values())?;
    Ok(())
}
