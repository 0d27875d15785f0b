// Pattern: Factory
// Callers ask a factory for a product instead of naming the concrete type.

use crate::transcript::Transcript;

// ============================================================================
// Example: Factory Method with Trait Objects (open for extension)
// ============================================================================

pub trait Animal {
    fn sound(&self) -> &'static str;
}

pub struct Dog;
impl Animal for Dog {
    fn sound(&self) -> &'static str {
        "Woof!"
    }
}

pub struct Cat;
impl Animal for Cat {
    fn sound(&self) -> &'static str {
        "Meow!"
    }
}

pub trait AnimalFactory {
    fn create_animal(&self) -> Box<dyn Animal>;
}

pub struct DogFactory;
impl AnimalFactory for DogFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

pub struct CatFactory;
impl AnimalFactory for CatFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

/// Client code only knows the factory interface.
pub struct AnimalClient {
    factory: Box<dyn AnimalFactory>,
}

impl AnimalClient {
    pub fn new(factory: Box<dyn AnimalFactory>) -> Self {
        Self { factory }
    }

    pub fn create_animal(&self) -> Box<dyn Animal> {
        self.factory.create_animal()
    }
}

// ============================================================================
// Example: Simple Factory with Enums (closed set)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl AnimalKind {
    /// Adding a kind means editing this match.
    pub fn create(self) -> Box<dyn Animal> {
        match self {
            AnimalKind::Dog => Box::new(Dog),
            AnimalKind::Cat => Box::new(Cat),
        }
    }
}

// ============================================================================
// Example: Shape Makers
// ============================================================================

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle;
impl Shape for Circle {
    fn draw(&self) -> String {
        "Draw Circle...".to_string()
    }
}

pub struct Square;
impl Shape for Square {
    fn draw(&self) -> String {
        "Draw Square...".to_string()
    }
}

pub struct Rectangle;
impl Shape for Rectangle {
    fn draw(&self) -> String {
        "Draw Rectangle...".to_string()
    }
}

pub trait ShapeMaker {
    fn geometrical_shape(&self) -> Box<dyn Shape>;
}

pub struct CircularShapeMaker;
impl ShapeMaker for CircularShapeMaker {
    fn geometrical_shape(&self) -> Box<dyn Shape> {
        Box::new(Circle)
    }
}

pub struct SquareShapeMaker;
impl ShapeMaker for SquareShapeMaker {
    fn geometrical_shape(&self) -> Box<dyn Shape> {
        Box::new(Square)
    }
}

pub struct RectangleShapeMaker;
impl ShapeMaker for RectangleShapeMaker {
    fn geometrical_shape(&self) -> Box<dyn Shape> {
        Box::new(Rectangle)
    }
}

pub struct ShapeFactory<M> {
    maker: M,
}

impl<M: ShapeMaker> ShapeFactory<M> {
    pub fn new(maker: M) -> Self {
        Self { maker }
    }

    pub fn create_shape(&self) -> Box<dyn Shape> {
        self.maker.geometrical_shape()
    }
}

pub fn demo(out: &mut Transcript) {
    let clients = [
        AnimalClient::new(Box::new(DogFactory)),
        AnimalClient::new(Box::new(CatFactory)),
    ];
    for client in &clients {
        out.line(client.create_animal().sound());
    }

    out.line(format!("Enum factory: {}", AnimalKind::Dog.create().sound()));

    let factory = ShapeFactory::new(RectangleShapeMaker);
    out.line(factory.create_shape().draw());
    out.line(ShapeFactory::new(CircularShapeMaker).create_shape().draw());
}
