// Pattern: Bridge
// Abstraction and implementation vary independently; the abstraction holds
// a reference to an implementor instead of subclassing per combination.

use std::fmt;
use std::rc::Rc;

use crate::transcript::Transcript;

// ============================================================================
// Example: Phones and a Charger
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneNumber {
    Mom = 12345,
    Dad = 23456,
    Sister = 34567,
    Brother = 45678,
    Other = 56789,
}

pub trait MobilePhone {
    fn name(&self) -> &str;
    fn model(&self) -> &str;

    fn turn_on(&self) -> String {
        format!("Turned on : {}", self.name())
    }

    fn turn_off(&self) -> String {
        format!("Turned off : {}", self.name())
    }

    fn call(&mut self, number: PhoneNumber) -> String;
    fn hang_up(&mut self) -> String;
}

#[derive(Debug, Default)]
struct CallState {
    connected: Option<PhoneNumber>,
}

impl CallState {
    fn call(&mut self, number: PhoneNumber) -> String {
        self.connected = Some(number);
        format!("Calling to number: {number:?} ({})", number as u32)
    }

    fn hang_up(&mut self) -> String {
        match self.connected.take() {
            Some(number) => format!("Hung up call: {number:?}"),
            None => "No call to hang up".to_string(),
        }
    }
}

macro_rules! phone {
    ($phone:ident, $name:literal, $model:literal) => {
        #[derive(Debug, Default)]
        pub struct $phone {
            calls: CallState,
        }

        impl MobilePhone for $phone {
            fn name(&self) -> &str {
                $name
            }

            fn model(&self) -> &str {
                $model
            }

            fn call(&mut self, number: PhoneNumber) -> String {
                self.calls.call(number)
            }

            fn hang_up(&mut self) -> String {
                self.calls.hang_up()
            }
        }
    };
}

phone!(Apple, "iPhone", "14");
phone!(Samsung, "Samsung", "Galaxy S 24");

/// The implementor side: works with any phone and can be moved between them.
pub struct Charger {
    device: Rc<dyn MobilePhone>,
}

impl Charger {
    pub fn new(device: Rc<dyn MobilePhone>) -> Self {
        Self { device }
    }

    pub fn attach(&mut self, device: Rc<dyn MobilePhone>) {
        self.device = device;
    }

    pub fn charge(&self) -> String {
        format!("Charging : {} - {}", self.device.name(), self.device.model())
    }
}

// ============================================================================
// Example: Shapes and Renderers
// ============================================================================

pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
    fn render_square(&self, side: f64) -> String;
}

pub struct IosRenderer;
impl Renderer for IosRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle with radius {radius} on iOS")
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square with side {side} on iOS")
    }
}

pub struct MacOsRenderer;
impl Renderer for MacOsRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle with radius {radius} on macOS")
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square with side {side} on macOS")
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    renderer: Rc<dyn Renderer>,
    radius: f64,
}

impl Circle {
    pub fn new(renderer: Rc<dyn Renderer>, radius: f64) -> Self {
        Self { renderer, radius }
    }

    pub fn set_renderer(&mut self, renderer: Rc<dyn Renderer>) {
        self.renderer = renderer;
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }
}

pub struct Square {
    renderer: Rc<dyn Renderer>,
    side: f64,
}

impl Square {
    pub fn new(renderer: Rc<dyn Renderer>, side: f64) -> Self {
        Self { renderer, side }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        self.renderer.render_square(self.side)
    }
}

// ============================================================================
// Example: Geometry x Color without subclass explosion
// ============================================================================

pub trait Color {
    fn fill(&self) -> &'static str;
}

pub struct Red;
impl Color for Red {
    fn fill(&self) -> &'static str {
        "Red"
    }
}

pub struct Blue;
impl Color for Blue {
    fn fill(&self) -> &'static str {
        "Blue"
    }
}

pub struct Black;
impl Color for Black {
    fn fill(&self) -> &'static str {
        "Black"
    }
}

pub struct Gray;
impl Color for Gray {
    fn fill(&self) -> &'static str {
        "Gray"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Circle,
    Square,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Circle => f.write_str("Circle"),
            Form::Square => f.write_str("Square"),
        }
    }
}

pub struct Geometry {
    form: Form,
    color: Box<dyn Color>,
}

impl Geometry {
    pub fn new(form: Form, color: Box<dyn Color>) -> Self {
        Self { form, color }
    }

    pub fn draw(&self) -> String {
        format!("Drawing a {} {}", self.color.fill(), self.form)
    }
}

pub fn demo(out: &mut Transcript) {
    let mut iphone = Apple::default();
    let mut samsung = Samsung::default();
    out.line(iphone.turn_on());
    out.line(iphone.call(PhoneNumber::Mom));
    out.line(iphone.hang_up());
    out.line(samsung.call(PhoneNumber::Dad));
    out.line(samsung.hang_up());

    // Both phones are flat now; one charger serves both.
    let iphone: Rc<dyn MobilePhone> = Rc::new(iphone);
    let samsung: Rc<dyn MobilePhone> = Rc::new(samsung);
    let mut charger = Charger::new(iphone);
    out.line(charger.charge());
    charger.attach(samsung);
    out.line(charger.charge());

    let ios: Rc<dyn Renderer> = Rc::new(IosRenderer);
    let macos: Rc<dyn Renderer> = Rc::new(MacOsRenderer);
    let mut circle = Circle::new(Rc::clone(&ios), 12.0);
    out.line(circle.draw());
    out.line(Square::new(Rc::clone(&macos), 15.0).draw());
    circle.set_renderer(macos);
    out.line(circle.draw());

    out.line(Geometry::new(Form::Circle, Box::new(Red)).draw());
    out.line(Geometry::new(Form::Circle, Box::new(Black)).draw());
    out.line(Geometry::new(Form::Square, Box::new(Blue)).draw());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charger_switches_device() {
        let mut charger = Charger::new(Rc::new(Apple::default()));
        assert_eq!(charger.charge(), "Charging : iPhone - 14");

        charger.attach(Rc::new(Samsung::default()));
        assert_eq!(charger.charge(), "Charging : Samsung - Galaxy S 24");
    }

    #[test]
    fn test_call_tracks_connection() {
        let mut phone = Samsung::default();
        assert_eq!(phone.hang_up(), "No call to hang up");
        assert_eq!(phone.call(PhoneNumber::Sister), "Calling to number: Sister (34567)");
        assert_eq!(phone.hang_up(), "Hung up call: Sister");
        assert_eq!(phone.turn_off(), "Turned off : Samsung");
    }

    #[test]
    fn test_renderer_swap() {
        let mut circle = Circle::new(Rc::new(IosRenderer), 12.0);
        assert!(circle.draw().ends_with("on iOS"));
        circle.set_renderer(Rc::new(MacOsRenderer));
        assert_eq!(circle.draw(), "Drawing a circle with radius 12 on macOS");
    }

    #[test]
    fn test_square_uses_square_rendering() {
        let square = Square::new(Rc::new(MacOsRenderer), 15.0);
        assert_eq!(square.draw(), "Drawing a square with side 15 on macOS");
    }

    #[test]
    fn test_geometry_composes_color() {
        assert_eq!(Geometry::new(Form::Square, Box::new(Gray)).draw(), "Drawing a Gray Square");
        assert_eq!(Geometry::new(Form::Circle, Box::new(Red)).draw(), "Drawing a Red Circle");
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("Charging : Samsung - Galaxy S 24"));
        assert!(out.contains("Drawing a Black Circle"));
    }
}
