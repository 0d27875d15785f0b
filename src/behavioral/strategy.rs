// Pattern: Strategy
// A family of interchangeable algorithms, chosen at runtime.

use crate::transcript::Transcript;

// ============================================================================
// Example: Strategy with Trait Objects
// ============================================================================

pub trait PaymentStrategy {
    fn method(&self) -> &'static str;

    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount} using {}.", self.method())
    }
}

pub struct CreditCard;
impl PaymentStrategy for CreditCard {
    fn method(&self) -> &'static str {
        "Credit Card"
    }
}

pub struct PayPal;
impl PaymentStrategy for PayPal {
    fn method(&self) -> &'static str {
        "PayPal"
    }
}

pub struct ApplePay;
impl PaymentStrategy for ApplePay {
    fn method(&self) -> &'static str {
        "Apple Pay"
    }
}

pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn pay(&self, amount: f64) -> String {
        self.strategy.pay(amount)
    }
}

// ============================================================================
// Example: Functional Strategy with Closures
// ============================================================================

pub struct FeeCalculator<F>
where
    F: Fn(f64) -> f64,
{
    fee: F,
}

impl<F> FeeCalculator<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(fee: F) -> Self {
        Self { fee }
    }

    pub fn total(&self, amount: f64) -> f64 {
        amount + (self.fee)(amount)
    }
}

pub fn demo(out: &mut Transcript) {
    let mut context = PaymentContext::new(Box::new(CreditCard));
    out.line(context.pay(120.0));

    context.set_strategy(Box::new(PayPal));
    out.line(context.pay(45.5));

    context.set_strategy(Box::new(ApplePay));
    out.line(context.pay(9.99));

    let card_fee = FeeCalculator::new(|amount| amount * 0.02);
    out.line(format!("Total with 2% card fee: {:.2}", card_fee.total(120.0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_swap() {
        let mut context = PaymentContext::new(Box::new(CreditCard));
        assert_eq!(context.pay(10.0), "Paid 10 using Credit Card.");

        context.set_strategy(Box::new(ApplePay));
        assert_eq!(context.pay(10.5), "Paid 10.5 using Apple Pay.");
    }

    #[test]
    fn test_closure_strategy() {
        let flat = FeeCalculator::new(|_| 1.5);
        assert_eq!(flat.total(10.0), 11.5);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("Paid 45.5 using PayPal."));
        assert!(out.contains("Total with 2% card fee: 122.40"));
    }
}
