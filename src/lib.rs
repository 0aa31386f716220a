//! # Behavioral Design Patterns in Rust
//!
//! This crate demonstrates two classic behavioral patterns through small
//! domain examples:
//!
//! ## Pattern 1: Observer ([`observer`])
//! - Subjects (warehouses) holding an ordered list of non-owning observer
//!   handles
//! - Synchronous notification with a read-only state snapshot
//! - Idempotent attach, no-op detach with a boolean result
//! - A specialized subject variant (refrigerated storage) that also
//!   notifies on temperature changes
//!
//! ## Pattern 2: Strategy ([`strategy`])
//! - A context (travel package) delegating price calculation to an
//!   interchangeable strategy object
//! - Trait-object dispatch (`Box<dyn PricingStrategy>`) swappable at
//!   runtime
//! - An enum rendition (`PricingTier`) for callers that select a strategy
//!   by name
//!
//! Run the demos with: `cargo run --bin <name>`
//! - `p1_warehouse_inventory`
//! - `p2_travel_pricing`
//! - `p2_pricing_static_dispatch`

pub mod observer;
pub mod strategy;
