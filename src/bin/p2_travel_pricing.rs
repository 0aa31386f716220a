//! Pattern 2: Strategy
//! Example: Travel Package Pricing with Dynamic Dispatch
//!
//! Run with: cargo run --bin p2_travel_pricing

use behavioral_patterns::strategy::{
    PricingTier, RegularPricing, SeniorPricing, StudentPricing, TravelPackage, VipPricing,
};
use colored::Colorize;

fn main() {
    println!("{}\n", "=== Strategy Pattern Demo ===".bold());

    let mut package = TravelPackage::new("Tokyo Adventure", 1000.0, Box::new(RegularPricing));
    println!(
        "Package: {} (base price ${:.2})\n",
        package.name().cyan(),
        package.base_price()
    );

    println!("{}", "=== Swapping strategies at runtime ===".bold());
    println!("Regular price: ${:.2}", package.get_price());

    package.set_pricing_strategy(Box::new(StudentPricing));
    println!("Student price: ${:.2}", package.get_price());

    package.set_pricing_strategy(Box::new(SeniorPricing));
    println!("Senior price:  ${:.2}", package.get_price());

    package.set_pricing_strategy(Box::new(VipPricing));
    println!("VIP price:     ${:.2}", package.get_price());

    println!("\n{}", "=== Selecting a strategy by name ===".bold());
    for input in ["regular", "Student", "SENIOR", "vip", "gold"] {
        match input.parse::<PricingTier>() {
            Ok(tier) => {
                package.set_pricing_strategy(tier.as_strategy());
                println!(
                    "{:10} -> {} -> ${:.2}",
                    input,
                    tier.to_string().green(),
                    package.get_price()
                );
            }
            Err(err) => println!("{:10} -> {}", input, err.to_string().red()),
        }
    }
}
