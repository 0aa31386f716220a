//! Pattern 1: Observer
//! Example: Warehouse Inventory Notifications
//!
//! Run with: cargo run --bin p1_warehouse_inventory

use std::rc::Rc;

use behavioral_patterns::observer::{
    GeneralWarehouse, InventoryObserver, InventorySubject, PurchasingDepartment,
    RefrigeratedWarehouse, SalesDepartment,
};
use colored::Colorize;

fn main() {
    println!("{}\n", "=== Observer Pattern Demo ===".bold());

    let mut general = GeneralWarehouse::new("Warehouse A");
    let mut refrigerated = RefrigeratedWarehouse::new("Cold Storage B");

    let sales: Rc<dyn InventoryObserver> = Rc::new(SalesDepartment::new("Sales"));
    let purchasing: Rc<dyn InventoryObserver> = Rc::new(PurchasingDepartment::new("Purchasing"));

    general.attach(sales.clone());
    general.attach(purchasing.clone());
    refrigerated.attach(sales.clone());
    refrigerated.attach(purchasing.clone());

    println!("{}", "=== Stock updates ===".bold());
    general.set_stock("Widget", 100);
    general.set_stock("Gadget", 5); // triggers a reorder notice

    println!("\n{}", "=== Cold storage updates ===".bold());
    refrigerated.set_stock("Frozen Peas", 50);
    refrigerated.set_temperature(-5.0);

    println!("\n{}", "=== Snapshot as JSON ===".bold());
    let snapshot = refrigerated.state();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );

    println!("\n{}", "=== After detaching purchasing ===".bold());
    let removed = general.detach(&purchasing);
    println!(
        "Detached purchasing from {}: {}",
        general.name(),
        if removed { "yes".green() } else { "no".red() }
    );

    // Only sales reports now; Gadget stays low but no reorder notice fires.
    general.set_stock("Widget", 80);
}
