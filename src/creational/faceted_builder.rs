// Pattern: Faceted Builder
// A product with several independent groups of fields, each configured by a
// dedicated sub-builder. All sub-builders share one product instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::transcript::Transcript;

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Person {
    // personal
    pub name: String,
    pub age: i32,

    // address
    pub city: String,
    pub street: String,

    // job
    pub company: String,
    pub position: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} who is {} years old lives in {} - {} and is working in {} at the position of {}.",
            self.name, self.age, self.street, self.city, self.company, self.position
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing required field: '{field}'")]
    MissingField { field: &'static str },
}

// ============================================================================
// Root builder
// ============================================================================

/// Entry point of the faceted builder.
///
/// Cloning a `PersonBuilder` clones the handle, not the product: both clones
/// keep configuring the same `Person`.
#[derive(Debug, Default, Clone)]
pub struct PersonBuilder {
    person: Rc<RefCell<Person>>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live product shared by every facet of this builder.
    ///
    /// Unlike [`PersonFacets::build`], writes made after this call stay
    /// visible through the returned handle.
    pub fn shared(&self) -> Rc<RefCell<Person>> {
        Rc::clone(&self.person)
    }

    fn update(&self, field: &'static str, apply: impl FnOnce(&mut Person)) {
        debug!(field, "person builder set");
        apply(&mut *self.person.borrow_mut());
    }
}

/// Facet switching and finalisation, available on the root builder and on
/// every facet builder.
pub trait PersonFacets {
    fn root(&self) -> &PersonBuilder;

    fn personal(&self) -> PersonPersonalBuilder {
        PersonPersonalBuilder {
            root: self.root().clone(),
        }
    }

    fn address(&self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            root: self.root().clone(),
        }
    }

    fn job(&self) -> PersonJobBuilder {
        PersonJobBuilder {
            root: self.root().clone(),
        }
    }

    /// Snapshot of the product with every mutation applied so far.
    fn build(&self) -> Person {
        self.root().person.borrow().clone()
    }

    /// Like `build`, but requires a name, a city and a company.
    fn try_build(&self) -> Result<Person, BuildError> {
        let person = self.build();
        let required = [
            ("name", &person.name),
            ("city", &person.city),
            ("company", &person.company),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(BuildError::MissingField { field });
            }
        }
        Ok(person)
    }
}

impl PersonFacets for PersonBuilder {
    fn root(&self) -> &PersonBuilder {
        self
    }
}

// ============================================================================
// Facet builders
// ============================================================================

#[derive(Debug, Clone)]
pub struct PersonPersonalBuilder {
    root: PersonBuilder,
}

impl PersonPersonalBuilder {
    pub fn named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.root.update("name", |p| p.name = name);
        self
    }

    pub fn aged(self, age: i32) -> Self {
        self.root.update("age", |p| p.age = age);
        self
    }
}

#[derive(Debug, Clone)]
pub struct PersonAddressBuilder {
    root: PersonBuilder,
}

impl PersonAddressBuilder {
    pub fn lives(self, city: impl Into<String>) -> Self {
        let city = city.into();
        self.root.update("city", |p| p.city = city);
        self
    }

    pub fn on_street(self, street: impl Into<String>) -> Self {
        let street = street.into();
        self.root.update("street", |p| p.street = street);
        self
    }
}

#[derive(Debug, Clone)]
pub struct PersonJobBuilder {
    root: PersonBuilder,
}

impl PersonJobBuilder {
    pub fn works(self, company: impl Into<String>) -> Self {
        let company = company.into();
        self.root.update("company", |p| p.company = company);
        self
    }

    pub fn on_position(self, position: impl Into<String>) -> Self {
        let position = position.into();
        self.root.update("position", |p| p.position = position);
        self
    }
}

impl PersonFacets for PersonPersonalBuilder {
    fn root(&self) -> &PersonBuilder {
        &self.root
    }
}

impl PersonFacets for PersonAddressBuilder {
    fn root(&self) -> &PersonBuilder {
        &self.root
    }
}

impl PersonFacets for PersonJobBuilder {
    fn root(&self) -> &PersonBuilder {
        &self.root
    }
}

// ============================================================================
// Demonstration
// ============================================================================

pub fn demo(out: &mut Transcript) {
    let person = PersonBuilder::new()
        .personal()
        .named("John Doe")
        .aged(32)
        .address()
        .lives("Melbourne, AUS")
        .on_street("833, Collins")
        .job()
        .works("ANZ")
        .on_position("iOS Engineer")
        .build();
    out.line(person.to_string());

    // Two views taken before anything is set still share one product.
    let builder = PersonBuilder::new();
    let job = builder.job();
    let personal = builder.personal();
    job.works("Atlassian").on_position("Staff Engineer");
    let person = personal.named("Jane Roe").aged(41).build();
    out.line(format!(
        "Shared facets: {} works at {} as {}.",
        person.name, person.company, person.position
    ));

    match PersonBuilder::new().personal().named("Nobody").try_build() {
        Ok(person) => out.line(person.to_string()),
        Err(err) => out.line(format!("Validated build refused: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_full_description() {
        let person = PersonBuilder::new()
            .personal()
            .named("John Doe")
            .aged(32)
            .address()
            .lives("Melbourne, AUS")
            .on_street("833, Collins")
            .job()
            .works("ANZ")
            .on_position("iOS Engineer")
            .build();

        assert_eq!(
            person.to_string(),
            "John Doe who is 32 years old lives in 833, Collins - Melbourne, AUS \
             and is working in ANZ at the position of iOS Engineer."
        );
    }

    #[test]
    fn test_build_without_facets_is_default() {
        let person = PersonBuilder::new().build();
        assert_eq!(person, Person::default());
        assert_eq!(person.age, 0);
        assert!(person.name.is_empty());
        assert!(person.position.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let person = PersonBuilder::new()
            .personal()
            .named("First")
            .named("Second")
            .build();
        assert_eq!(person.name, "Second");
    }

    #[test]
    fn test_values_stored_verbatim() {
        let person = PersonBuilder::new()
            .personal()
            .named("")
            .aged(-5)
            .build();
        assert_eq!(person.name, "");
        assert_eq!(person.age, -5);
    }

    #[test]
    fn test_handles_share_one_product() {
        let builder = PersonBuilder::new();
        let first = builder.address();
        let second = builder.job();

        first.lives("Sydney");

        assert_eq!(second.build().city, "Sydney");
    }

    #[test]
    fn test_build_reflects_mutations_so_far() {
        let builder = PersonBuilder::new();
        let personal = builder.personal().named("Ada");
        assert_eq!(builder.build().age, 0);

        let _ = personal.aged(36);
        let person = builder.build();
        assert_eq!(person.name, "Ada");
        assert_eq!(person.age, 36);
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let builder = PersonBuilder::new();
        let before = builder.personal().named("Before").build();
        let _ = builder.personal().named("After");

        assert_eq!(before.name, "Before");
        assert_eq!(builder.build().name, "After");
    }

    #[test]
    fn test_shared_handle_aliases_product() {
        let builder = PersonBuilder::new();
        let live = builder.shared();
        let _ = builder.job().works("ANZ");
        assert_eq!(live.borrow().company, "ANZ");
    }

    #[test]
    fn test_try_build_requires_fields() {
        let err = PersonBuilder::new()
            .personal()
            .named("Solo")
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingField { field: "city" });

        let person = PersonBuilder::new()
            .personal()
            .named("Solo")
            .address()
            .lives("Perth")
            .job()
            .works("Canva")
            .try_build()
            .unwrap();
        assert_eq!(person.company, "Canva");
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("John Doe who is 32 years old"));
        assert!(out.contains("Jane Roe works at Atlassian as Staff Engineer."));
        assert!(out.contains("Missing required field: 'city'"));
    }

    proptest! {
        #[test]
        fn test_facet_order_does_not_matter(
            name in ".{0,12}",
            age in any::<i32>(),
            city in ".{0,12}",
            company in ".{0,12}",
        ) {
            let forward = PersonBuilder::new()
                .personal().named(name.clone()).aged(age)
                .address().lives(city.clone())
                .job().works(company.clone())
                .build();

            let backward = PersonBuilder::new()
                .job().works(company.clone())
                .address().lives(city.clone())
                .personal().aged(age).named(name.clone())
                .build();

            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(forward.name, name);
            prop_assert_eq!(forward.age, age);
        }

        #[test]
        fn test_repeated_setter_keeps_last(values in prop::collection::vec(".{0,8}", 1..6)) {
            let mut job = PersonBuilder::new().job();
            for value in &values {
                job = job.on_position(value.clone());
            }
            prop_assert_eq!(&job.build().position, values.last().unwrap());
        }
    }
}
