// Pattern: Prototype
// New objects start as independent copies of an existing one.

use std::any::Any;
use std::fmt;

use crate::transcript::Transcript;

/// Object-safe cloning, for when the concrete type is behind a `dyn`.
pub trait Prototype: fmt::Display {
    fn clone_prototype(&self) -> Box<dyn Prototype>;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartPhone {
    pub name: String,
    pub color: String,
    pub capacity: u32,
}

impl SmartPhone {
    pub fn new(name: impl Into<String>, color: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            capacity,
        }
    }
}

impl fmt::Display for SmartPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} with {} RAM.", self.name, self.color, self.capacity)
    }
}

impl Prototype for SmartPhone {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn demo(out: &mut Transcript) {
    let iphone_7 = SmartPhone::new("iPhone 7", "Gray", 16);

    let mut iphone_14 = iphone_7.clone();
    iphone_14.name = "iPhone 14".to_string();
    iphone_14.color = "Black".to_string();
    iphone_14.capacity = 64;

    out.line(iphone_7.to_string());
    out.line(iphone_14.to_string());

    let catalogue: Vec<Box<dyn Prototype>> = vec![Box::new(iphone_7), Box::new(iphone_14)];
    let copies: Vec<Box<dyn Prototype>> = catalogue.iter().map(|p| p.clone_prototype()).collect();
    out.line(format!("Cloned {} phones through the trait object.", copies.len()));
}
