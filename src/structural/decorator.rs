// Pattern: Decorator
// Wrappers that share the core object's interface and adjust its behaviour.
// Decorators nest, and the order they are applied in can change the result.

use crate::transcript::Transcript;

// ============================================================================
// Example: Coffee with Trait Objects
// ============================================================================

pub trait Coffee {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        10.0
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

pub struct Milk {
    inner: Box<dyn Coffee>,
}

impl Milk {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for Milk {
    fn cost(&self) -> f64 {
        self.inner.cost() + 30.0
    }

    fn description(&self) -> String {
        format!("{} with added milk.", self.inner.description())
    }
}

pub struct Sugar {
    inner: Box<dyn Coffee>,
}

impl Sugar {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for Sugar {
    fn cost(&self) -> f64 {
        self.inner.cost() + 40.0
    }

    fn description(&self) -> String {
        format!("{} with extra sugar.", self.inner.description())
    }
}

// ============================================================================
// Example: Race Car with Generic Decorators
// ============================================================================

pub trait Transporting {
    fn speed(&self) -> f64;
    fn traction(&self) -> f64;
}

pub struct RaceCar;

impl Transporting for RaceCar {
    fn speed(&self) -> f64 {
        10.0
    }

    fn traction(&self) -> f64 {
        10.0
    }
}

pub struct OffRoadTires<T>(pub T);

impl<T: Transporting> Transporting for OffRoadTires<T> {
    fn speed(&self) -> f64 {
        self.0.speed() - 3.0
    }

    fn traction(&self) -> f64 {
        self.0.traction() + 3.0
    }
}

pub struct ChainedTires<T>(pub T);

impl<T: Transporting> Transporting for ChainedTires<T> {
    fn speed(&self) -> f64 {
        self.0.speed() - 1.0
    }

    fn traction(&self) -> f64 {
        self.0.traction() * 1.1
    }
}

fn report(label: &str, car: &impl Transporting, out: &mut Transcript) {
    out.line(format!(
        "{label}: speed {:.1}, traction {:.1}",
        car.speed(),
        car.traction()
    ));
}

pub fn demo(out: &mut Transcript) {
    let orders: Vec<Box<dyn Coffee>> = vec![
        Box::new(SimpleCoffee),
        Box::new(Milk::new(Box::new(SimpleCoffee))),
        Box::new(Sugar::new(Box::new(SimpleCoffee))),
        Box::new(Sugar::new(Box::new(Milk::new(Box::new(SimpleCoffee))))),
    ];
    for coffee in &orders {
        out.line(format!("{} costs {:.1}", coffee.description(), coffee.cost()));
    }

    report("Race car", &RaceCar, out);
    report("Off-road tires", &OffRoadTires(RaceCar), out);
    report("Chained off-road tires", &ChainedTires(OffRoadTires(RaceCar)), out);
    report("Off-road chained tires", &OffRoadTires(ChainedTires(RaceCar)), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_decorators() {
        let milk = Milk::new(Box::new(SimpleCoffee));
        assert_eq!(milk.cost(), 40.0);
        assert_eq!(milk.description(), "Simple Coffee with added milk.");

        let sugar = Sugar::new(Box::new(SimpleCoffee));
        assert_eq!(sugar.cost(), 50.0);
    }

    #[test]
    fn test_decorators_stack() {
        let coffee = Sugar::new(Box::new(Milk::new(Box::new(SimpleCoffee))));
        assert_eq!(coffee.cost(), 80.0);
        assert_eq!(
            coffee.description(),
            "Simple Coffee with added milk. with extra sugar."
        );
    }

    #[test]
    fn test_order_changes_result() {
        let chained_last = ChainedTires(OffRoadTires(RaceCar));
        let chained_first = OffRoadTires(ChainedTires(RaceCar));

        assert_eq!(chained_last.speed(), chained_first.speed());
        assert!((chained_last.traction() - 14.3).abs() < 1e-9);
        assert!((chained_first.traction() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("Simple Coffee costs 10.0"));
        assert!(out.contains("Chained off-road tires: speed 6.0, traction 14.3"));
    }
}
