// Pattern: Builder
// Step-by-step construction with a director, plus a consuming fluent builder.

use std::fmt;

use bitflags::bitflags;
use itertools::Itertools;

use crate::transcript::Transcript;

// ============================================================================
// Product: Hamburger
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Meat {
    Beef,
    #[default]
    Chicken,
    Tofu,
}

impl fmt::Display for Meat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Meat::Beef => "beef",
            Meat::Chicken => "chicken",
            Meat::Tofu => "tofu",
        };
        f.write_str(name)
    }
}

bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Sauces: u8 {
        const MAYONNAISE = 1 << 0;
        const MUSTARD = 1 << 1;
        const KETCHUP = 1 << 2;
        const BARBEQUE = 1 << 3;
    }
}

bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Toppings: u8 {
        const CHEESE = 1 << 0;
        const ONION = 1 << 1;
        const LETTUCE = 1 << 2;
        const PICKLES = 1 << 3;
        const TOMATOES = 1 << 4;
    }
}

const SAUCE_NAMES: [(Sauces, &str); 4] = [
    (Sauces::MAYONNAISE, "mayonnaise"),
    (Sauces::MUSTARD, "mustard"),
    (Sauces::KETCHUP, "ketchup"),
    (Sauces::BARBEQUE, "barbeque"),
];

const TOPPING_NAMES: [(Toppings, &str); 5] = [
    (Toppings::CHEESE, "cheese"),
    (Toppings::ONION, "onion"),
    (Toppings::LETTUCE, "lettuce"),
    (Toppings::PICKLES, "pickles"),
    (Toppings::TOMATOES, "tomatoes"),
];

impl fmt::Display for Sauces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = SAUCE_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .join(", ");
        f.write_str(&names)
    }
}

impl fmt::Display for Toppings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = TOPPING_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .join(", ");
        f.write_str(&names)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hamburger {
    pub meat: Meat,
    pub sauces: Sauces,
    pub toppings: Toppings,
}

impl fmt::Display for Hamburger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Here is your burger. It has {} as meat; {} as sauce; and {} as topping in it. Bon Appetit!",
            self.meat, self.sauces, self.toppings
        )
    }
}

// ============================================================================
// Builder: mutable, reusable across builds
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct HamburgerBuilder {
    meat: Meat,
    sauces: Sauces,
    toppings: Toppings,
}

impl HamburgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_meat(&mut self, meat: Meat) -> &mut Self {
        self.meat = meat;
        self
    }

    pub fn add_sauces(&mut self, sauces: Sauces) -> &mut Self {
        self.sauces.insert(sauces);
        self
    }

    pub fn remove_sauces(&mut self, sauces: Sauces) -> &mut Self {
        self.sauces.remove(sauces);
        self
    }

    pub fn add_toppings(&mut self, toppings: Toppings) -> &mut Self {
        self.toppings.insert(toppings);
        self
    }

    pub fn remove_toppings(&mut self, toppings: Toppings) -> &mut Self {
        self.toppings.remove(toppings);
        self
    }

    pub fn build(&self) -> Hamburger {
        Hamburger {
            meat: self.meat,
            sauces: self.sauces,
            toppings: self.toppings,
        }
    }
}

// ============================================================================
// Director
// ============================================================================

/// Knows the recipes; the builder it is handed keeps whatever it already had.
pub struct BurgerShop;

impl BurgerShop {
    pub fn cheese_burger(&self, builder: &mut HamburgerBuilder) -> Hamburger {
        builder
            .set_meat(Meat::Chicken)
            .add_toppings(Toppings::CHEESE | Toppings::LETTUCE | Toppings::TOMATOES)
            .add_sauces(Sauces::BARBEQUE | Sauces::KETCHUP | Sauces::MAYONNAISE)
            .build()
    }

    pub fn vegetarian_burger(&self, builder: &mut HamburgerBuilder) -> Hamburger {
        builder
            .set_meat(Meat::Tofu)
            .add_toppings(Toppings::TOMATOES | Toppings::LETTUCE | Toppings::PICKLES)
            .add_sauces(Sauces::MUSTARD | Sauces::MAYONNAISE)
            .build()
    }
}

// ============================================================================
// Consuming builder: required fields up front, optional ones chained
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

pub struct ProfileBuilder {
    user: User,
}

impl ProfileBuilder {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            user: User {
                name: name.into(),
                age,
                email: None,
                address: None,
                phone_number: None,
            },
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.user.address = Some(address.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.user.phone_number = Some(phone_number.into());
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

pub fn demo(out: &mut Transcript) {
    let shop = BurgerShop;
    let mut builder = HamburgerBuilder::new();

    out.line(shop.cheese_burger(&mut builder).to_string());
    // Same builder again: the cheese burger's extras are still in it.
    out.line(shop.vegetarian_burger(&mut builder).to_string());

    let mammas = HamburgerBuilder::new()
        .set_meat(Meat::Tofu)
        .add_sauces(Sauces::KETCHUP | Sauces::MAYONNAISE | Sauces::MUSTARD)
        .add_toppings(Toppings::all())
        .remove_sauces(Sauces::MAYONNAISE)
        .remove_toppings(Toppings::LETTUCE)
        .build();
    out.line(mammas.to_string());

    let basic = ProfileBuilder::new("John Doe", 32).build();
    out.line(format!("{basic:?}"));

    let detailed = ProfileBuilder::new("Jane Doe", 28)
        .email("jane.doe@xyz.com")
        .phone_number("9876543210")
        .address("New York, USA")
        .build();
    out.line(format!("{detailed:?}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cheese_burger() {
        let burger = BurgerShop.cheese_burger(&mut HamburgerBuilder::new());
        assert_eq!(
            burger.to_string(),
            "Here is your burger. It has chicken as meat; mayonnaise, ketchup, barbeque as sauce; \
             and cheese, lettuce, tomatoes as topping in it. Bon Appetit!"
        );
    }

    #[test]
    fn test_reused_builder_accumulates() {
        let mut builder = HamburgerBuilder::new();
        let _ = BurgerShop.cheese_burger(&mut builder);
        let veg = BurgerShop.vegetarian_burger(&mut builder);

        assert_eq!(veg.meat, Meat::Tofu);
        assert!(veg.toppings.contains(Toppings::CHEESE));
        assert!(veg.sauces.contains(Sauces::BARBEQUE | Sauces::MUSTARD));
    }

    #[test]
    fn test_fluent_add_and_remove() {
        let burger = HamburgerBuilder::new()
            .set_meat(Meat::Tofu)
            .add_sauces(Sauces::KETCHUP | Sauces::MAYONNAISE | Sauces::MUSTARD)
            .add_toppings(Toppings::all())
            .remove_sauces(Sauces::MAYONNAISE)
            .remove_toppings(Toppings::LETTUCE)
            .build();

        assert_eq!(burger.sauces.to_string(), "mustard, ketchup");
        assert_eq!(burger.toppings.to_string(), "cheese, onion, pickles, tomatoes");
    }

    #[test]
    fn test_default_burger_is_plain_chicken() {
        let burger = HamburgerBuilder::new().build();
        assert_eq!(burger.meat, Meat::Chicken);
        assert!(burger.sauces.is_empty());
        assert_eq!(burger.toppings.to_string(), "");
    }

    #[test]
    fn test_profile_builder_optional_fields() {
        let basic = ProfileBuilder::new("John Doe", 32).build();
        assert_eq!(basic.email, None);
        assert_eq!(basic.phone_number, None);

        let detailed = ProfileBuilder::new("Jane Doe", 28)
            .email("jane.doe@xyz.com")
            .address("New York, USA")
            .build();
        assert_eq!(detailed.email.as_deref(), Some("jane.doe@xyz.com"));
        assert_eq!(detailed.address.as_deref(), Some("New York, USA"));
        assert_eq!(detailed.phone_number, None);
    }

    #[test]
    fn test_demo_prints_three_burgers() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(out.lines().iter().filter(|l| l.contains("Bon Appetit!")).count(), 3);
        assert!(out.contains("jane.doe@xyz.com"));
    }
}
