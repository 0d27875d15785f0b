//! Index of every demonstration, plus lookup by name or category.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::behavioral::{
    chain_of_responsibility, command, iterator, mediator, memento, observer, state, strategy,
    template_method, visitor,
};
use crate::creational::{abstract_factory, builder, factory, faceted_builder, prototype, singleton};
use crate::error::CatalogueError;
use crate::structural::{adapter, bridge, composite, decorator, facade, proxy};
use crate::transcript::Transcript;

/// Largest edit distance still offered as a "did you mean" hint.
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| CatalogueError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pattern {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    #[serde(skip)]
    demo: fn(&mut Transcript),
}

impl Pattern {
    const fn new(
        name: &'static str,
        category: Category,
        summary: &'static str,
        demo: fn(&mut Transcript),
    ) -> Self {
        Self {
            name,
            category,
            summary,
            demo,
        }
    }

    /// Run the demonstration and collect what it printed.
    pub fn run(&self) -> Transcript {
        let _span = debug_span!("pattern", name = self.name).entered();
        let mut out = Transcript::new();
        (self.demo)(&mut out);
        debug!(lines = out.len(), "demonstration finished");
        out
    }
}

use Category::{Behavioral, Creational, Structural};

pub static CATALOGUE: &[Pattern] = &[
    Pattern::new(
        "faceted-builder",
        Creational,
        "Sub-builders per group of fields, all sharing one product",
        faceted_builder::demo,
    ),
    Pattern::new(
        "builder",
        Creational,
        "Step-by-step construction, driven by a director or a fluent chain",
        builder::demo,
    ),
    Pattern::new(
        "factory",
        Creational,
        "Delegate instantiation to factory methods",
        factory::demo,
    ),
    Pattern::new(
        "abstract-factory",
        Creational,
        "Create families of related objects without naming their types",
        abstract_factory::demo,
    ),
    Pattern::new(
        "prototype",
        Creational,
        "Create independent copies of an existing object",
        prototype::demo,
    ),
    Pattern::new(
        "singleton",
        Creational,
        "One lazily created instance shared everywhere",
        singleton::demo,
    ),
    Pattern::new(
        "adapter",
        Structural,
        "Make an incompatible interface fit the one a client expects",
        adapter::demo,
    ),
    Pattern::new(
        "bridge",
        Structural,
        "Let abstraction and implementation vary independently",
        bridge::demo,
    ),
    Pattern::new(
        "composite",
        Structural,
        "Treat leaves and containers of a tree uniformly",
        composite::demo,
    ),
    Pattern::new(
        "decorator",
        Structural,
        "Wrap an object to add behaviour at runtime",
        decorator::demo,
    ),
    Pattern::new(
        "facade",
        Structural,
        "A simple front desk over a complex subsystem",
        facade::demo,
    ),
    Pattern::new(
        "proxy",
        Structural,
        "A stand-in that controls access to the real object",
        proxy::demo,
    ),
    Pattern::new(
        "chain-of-responsibility",
        Behavioral,
        "Pass a request along handlers until one takes it",
        chain_of_responsibility::demo,
    ),
    Pattern::new(
        "command",
        Behavioral,
        "Requests as objects, with undo",
        command::demo,
    ),
    Pattern::new(
        "iterator",
        Behavioral,
        "Sequential access without exposing the collection",
        iterator::demo,
    ),
    Pattern::new(
        "mediator",
        Behavioral,
        "Colleagues communicate through a mediator",
        mediator::demo,
    ),
    Pattern::new(
        "memento",
        Behavioral,
        "Save and restore snapshots of state",
        memento::demo,
    ),
    Pattern::new(
        "observer",
        Behavioral,
        "Notify subscribers of every change",
        observer::demo,
    ),
    Pattern::new(
        "state",
        Behavioral,
        "Behaviour changes with the current state object",
        state::demo,
    ),
    Pattern::new(
        "strategy",
        Behavioral,
        "Interchangeable algorithms chosen at runtime",
        strategy::demo,
    ),
    Pattern::new(
        "template-method",
        Behavioral,
        "A fixed workflow with overridable steps",
        template_method::demo,
    ),
    Pattern::new(
        "visitor",
        Behavioral,
        "New operations over a fixed element set",
        visitor::demo,
    ),
];

/// `Template_Method`, `template method` and `template-method` all match.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

pub fn find(name: &str) -> Result<&'static Pattern, CatalogueError> {
    let wanted = normalize(name);
    CATALOGUE
        .iter()
        .find(|pattern| pattern.name == wanted)
        .ok_or_else(|| CatalogueError::unknown_pattern(name, suggest(&wanted)))
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Pattern> {
    CATALOGUE
        .iter()
        .filter(move |pattern| pattern.category == category)
}

fn suggest(wanted: &str) -> Option<String> {
    CATALOGUE
        .iter()
        .map(|pattern| (levenshtein_distance(wanted, pattern.name), pattern.name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name.to_string())
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
