//! Pattern 2: Strategy
//! Example: Travel Package Pricing
//!
//! A travel package delegates its price calculation to an interchangeable
//! pricing strategy. Strategies are stateless: each one is a pure scaling
//! of the base price, and swapping the active strategy never touches the
//! base price or any previously computed result.
//!
//! Run the demo with: cargo run --bin p2_travel_pricing

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Capability of turning a base price into a final price.
pub trait PricingStrategy {
    fn calculate_price(&self, base_price: f64) -> f64;
}

/// Full price.
pub struct RegularPricing;

impl PricingStrategy for RegularPricing {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price
    }
}

/// 20% student discount.
pub struct StudentPricing;

impl PricingStrategy for StudentPricing {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * 0.8
    }
}

/// 30% senior discount.
pub struct SeniorPricing;

impl PricingStrategy for SeniorPricing {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * 0.7
    }
}

/// 20% premium for VIP service.
pub struct VipPricing;

impl PricingStrategy for VipPricing {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * 1.2
    }
}

/// Context that prices itself through whichever strategy is active.
pub struct TravelPackage {
    name: String,
    base_price: f64,
    pricing_strategy: Box<dyn PricingStrategy>,
}

impl TravelPackage {
    pub fn new(
        name: impl Into<String>,
        base_price: f64,
        pricing_strategy: Box<dyn PricingStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            pricing_strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Final price under the active strategy. Nothing is cached.
    pub fn get_price(&self) -> f64 {
        self.pricing_strategy.calculate_price(self.base_price)
    }

    /// Swaps the active strategy. Takes effect on the next `get_price`.
    pub fn set_pricing_strategy(&mut self, pricing_strategy: Box<dyn PricingStrategy>) {
        self.pricing_strategy = pricing_strategy;
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown pricing tier '{0}', expected regular, student, senior or vip")]
pub struct TierParseError(String);

/// Closed set of tiers, for callers that select a strategy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Regular,
    Student,
    Senior,
    Vip,
}

impl PricingTier {
    pub const ALL: [PricingTier; 4] = [
        PricingTier::Regular,
        PricingTier::Student,
        PricingTier::Senior,
        PricingTier::Vip,
    ];

    /// Fixed scaling factor for this tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            PricingTier::Regular => 1.0,
            PricingTier::Student => 0.8,
            PricingTier::Senior => 0.7,
            PricingTier::Vip => 1.2,
        }
    }

    pub fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * self.multiplier()
    }

    /// Bridge to the trait-object rendition of the same strategies.
    pub fn as_strategy(&self) -> Box<dyn PricingStrategy> {
        match self {
            PricingTier::Regular => Box::new(RegularPricing),
            PricingTier::Student => Box::new(StudentPricing),
            PricingTier::Senior => Box::new(SeniorPricing),
            PricingTier::Vip => Box::new(VipPricing),
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PricingTier::Regular => "regular",
            PricingTier::Student => "student",
            PricingTier::Senior => "senior",
            PricingTier::Vip => "vip",
        };
        f.write_str(name)
    }
}

impl FromStr for PricingTier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(PricingTier::Regular),
            "student" => Ok(PricingTier::Student),
            "senior" => Ok(PricingTier::Senior),
            "vip" => Ok(PricingTier::Vip),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}
