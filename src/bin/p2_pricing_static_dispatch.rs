//! Pattern 2: Strategy
//! Example: Travel Package Pricing with Static Dispatch
//!
//! The generic rendition of the same strategies: the active strategy is
//! part of the package's type, so "swapping" hands the package off to a
//! new type instead of mutating a reference. Compare with the runtime
//! swapping in p2_travel_pricing.
//!
//! Run with: cargo run --bin p2_pricing_static_dispatch

use behavioral_patterns::strategy::{
    PricingStrategy, RegularPricing, SeniorPricing, StudentPricing, VipPricing,
};
use colored::Colorize;

/// Strategy context with the strategy baked into the type.
struct StaticTravelPackage<S: PricingStrategy> {
    name: String,
    base_price: f64,
    pricing_strategy: S,
}

impl<S: PricingStrategy> StaticTravelPackage<S> {
    fn new(name: impl Into<String>, base_price: f64, pricing_strategy: S) -> Self {
        Self {
            name: name.into(),
            base_price,
            pricing_strategy,
        }
    }

    fn get_price(&self) -> f64 {
        self.pricing_strategy.calculate_price(self.base_price)
    }

    /// Rebuilds the package around a different strategy type.
    fn with_strategy<U: PricingStrategy>(self, pricing_strategy: U) -> StaticTravelPackage<U> {
        StaticTravelPackage {
            name: self.name,
            base_price: self.base_price,
            pricing_strategy,
        }
    }
}

fn main() {
    println!("{}\n", "=== Strategy Pattern: Static Dispatch ===".bold());

    let package = StaticTravelPackage::new("Tokyo Adventure", 1000.0, RegularPricing);
    println!("Package: {}\n", package.name.cyan());

    println!("Regular price: ${:.2}", package.get_price());

    let package = package.with_strategy(StudentPricing);
    println!("Student price: ${:.2}", package.get_price());

    let package = package.with_strategy(SeniorPricing);
    println!("Senior price:  ${:.2}", package.get_price());

    let package = package.with_strategy(VipPricing);
    println!("VIP price:     ${:.2}", package.get_price());
}
