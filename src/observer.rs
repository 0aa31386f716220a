//! Pattern 1: Observer
//! Example: Warehouse Inventory Notifications
//!
//! Warehouses are subjects that hold inventory counts; departments are
//! observers that react whenever stock (or temperature, for refrigerated
//! storage) changes. Subjects hold non-owning handles to their observers
//! and notify them synchronously, in subscription order, with a snapshot
//! of the state committed by the triggering update.
//!
//! Run the demo with: cargo run --bin p1_warehouse_inventory

use std::collections::BTreeMap;
use std::rc::Rc;

use colored::Colorize;
use serde::Serialize;

/// Items with fewer units than this are flagged by purchasing.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Which warehouse variant produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseKind {
    General,
    Refrigerated,
}

/// Read-only snapshot of a warehouse at notification time.
///
/// Built fresh for every notification, so observers always see the state
/// committed by the update that triggered them, decoupled from any later
/// mutation of the subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseState {
    pub name: String,
    pub kind: WarehouseKind,
    pub stock: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Capability of reacting to a warehouse state change.
pub trait InventoryObserver {
    fn update(&self, state: &WarehouseState);
}

/// Logs the reporting warehouse's current stock.
pub struct SalesDepartment {
    name: String,
}

impl SalesDepartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl InventoryObserver for SalesDepartment {
    fn update(&self, state: &WarehouseState) {
        println!(
            "{} {} stock update from {}: {:?}",
            format!("[{}]", self.name).cyan(),
            "->".dimmed(),
            state.name,
            state.stock
        );
    }
}

/// Flags items that are running low so they can be reordered.
pub struct PurchasingDepartment {
    name: String,
}

impl PurchasingDepartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Items in `state` with a quantity strictly below [`LOW_STOCK_THRESHOLD`].
    pub fn low_stock_items(state: &WarehouseState) -> Vec<&str> {
        state
            .stock
            .iter()
            .filter(|(_, &quantity)| quantity < LOW_STOCK_THRESHOLD)
            .map(|(item, _)| item.as_str())
            .collect()
    }
}

impl InventoryObserver for PurchasingDepartment {
    fn update(&self, state: &WarehouseState) {
        for item in Self::low_stock_items(state) {
            println!(
                "{} {} reorder notice: '{}' is running low at {} ({} units)",
                format!("[{}]", self.name).cyan(),
                "->".dimmed(),
                item.yellow(),
                state.name,
                state.stock[item]
            );
        }
    }
}

/// Ordered list of non-owning observer handles.
///
/// Observers are identified by pointer, not by value: two departments with
/// the same name are distinct subscriptions. Ownership stays with whoever
/// created the observer; the list only keeps it notifiable.
#[derive(Default)]
pub struct Subscribers {
    observers: Vec<Rc<dyn InventoryObserver>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `observer` unless it is already subscribed. Idempotent.
    pub fn attach(&mut self, observer: Rc<dyn InventoryObserver>) {
        if !self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    /// Removes the subscription for `observer` if present.
    ///
    /// Returns whether anything was removed; detaching an observer that was
    /// never attached is a no-op.
    pub fn detach(&mut self, observer: &Rc<dyn InventoryObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        self.observers.len() < before
    }

    /// Passes `state` to every subscriber, in subscription order.
    pub fn notify_all(&self, state: &WarehouseState) {
        for observer in &self.observers {
            observer.update(state);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// A subject that can be observed for inventory changes.
pub trait InventorySubject {
    fn attach(&mut self, observer: Rc<dyn InventoryObserver>);
    fn detach(&mut self, observer: &Rc<dyn InventoryObserver>) -> bool;

    /// Snapshot of the current committed state.
    fn state(&self) -> WarehouseState;

    /// Notifies every current subscriber with a fresh snapshot.
    fn notify(&self);
}

/// Plain storage: tracks stock only.
pub struct GeneralWarehouse {
    name: String,
    stock: BTreeMap<String, u32>,
    subscribers: Subscribers,
}

impl GeneralWarehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock: BTreeMap::new(),
            subscribers: Subscribers::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> &BTreeMap<String, u32> {
        &self.stock
    }

    /// Commits the new quantity for `item`, then notifies all subscribers.
    pub fn set_stock(&mut self, item: impl Into<String>, quantity: u32) {
        self.stock.insert(item.into(), quantity);
        self.notify();
    }
}

impl InventorySubject for GeneralWarehouse {
    fn attach(&mut self, observer: Rc<dyn InventoryObserver>) {
        self.subscribers.attach(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn InventoryObserver>) -> bool {
        self.subscribers.detach(observer)
    }

    fn state(&self) -> WarehouseState {
        WarehouseState {
            name: self.name.clone(),
            kind: WarehouseKind::General,
            stock: self.stock.clone(),
            temperature: None,
        }
    }

    fn notify(&self) {
        self.subscribers.notify_all(&self.state());
    }
}

/// Cold storage: tracks stock and temperature, notifying on both.
pub struct RefrigeratedWarehouse {
    name: String,
    stock: BTreeMap<String, u32>,
    temperature: Option<f64>,
    subscribers: Subscribers,
}

impl RefrigeratedWarehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock: BTreeMap::new(),
            temperature: None,
            subscribers: Subscribers::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> &BTreeMap<String, u32> {
        &self.stock
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Commits the new quantity for `item`, then notifies all subscribers.
    pub fn set_stock(&mut self, item: impl Into<String>, quantity: u32) {
        self.stock.insert(item.into(), quantity);
        self.notify();
    }

    /// Commits the new temperature, then notifies all subscribers.
    pub fn set_temperature(&mut self, temp: f64) {
        self.temperature = Some(temp);
        self.notify();
    }
}

impl InventorySubject for RefrigeratedWarehouse {
    fn attach(&mut self, observer: Rc<dyn InventoryObserver>) {
        self.subscribers.attach(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn InventoryObserver>) -> bool {
        self.subscribers.detach(observer)
    }

    fn state(&self) -> WarehouseState {
        WarehouseState {
            name: self.name.clone(),
            kind: WarehouseKind::Refrigerated,
            stock: self.stock.clone(),
            temperature: self.temperature,
        }
    }

    fn notify(&self) {
        self.subscribers.notify_all(&self.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test double that records every snapshot it receives.
    struct RecordingObserver {
        seen: RefCell<Vec<WarehouseState>>,
    }

    impl RecordingObserver {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                seen: RefCell::new(Vec::new()),
            })
        }

        fn notification_count(&self) -> usize {
            self.seen.borrow().len()
        }

        fn last_seen(&self) -> WarehouseState {
            self.seen.borrow().last().cloned().expect("no notifications")
        }
    }

    impl InventoryObserver for RecordingObserver {
        fn update(&self, state: &WarehouseState) {
            self.seen.borrow_mut().push(state.clone());
        }
    }

    fn state_with(stock: &[(&str, u32)]) -> WarehouseState {
        WarehouseState {
            name: "test".to_string(),
            kind: WarehouseKind::General,
            stock: stock
                .iter()
                .map(|(item, qty)| (item.to_string(), *qty))
                .collect(),
            temperature: None,
        }
    }

    #[test]
    fn every_update_notifies_each_observer_once() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Widget", 100);
        warehouse.set_stock("Gadget", 5);
        warehouse.set_stock("Widget", 80);

        assert_eq!(recorder.notification_count(), 3);
    }

    #[test]
    fn snapshot_reflects_state_after_the_update() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Widget", 100);
        assert_eq!(recorder.last_seen().stock["Widget"], 100);

        warehouse.set_stock("Widget", 80);
        assert_eq!(recorder.last_seen().stock["Widget"], 80);
        assert_eq!(recorder.last_seen().name, "Warehouse A");
        assert_eq!(recorder.last_seen().kind, WarehouseKind::General);
    }

    #[test]
    fn snapshots_are_decoupled_from_later_mutation() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Widget", 100);
        warehouse.set_stock("Widget", 1);

        let seen = recorder.seen.borrow();
        assert_eq!(seen[0].stock["Widget"], 100);
        assert_eq!(seen[1].stock["Widget"], 1);
    }

    #[test]
    fn attach_is_idempotent() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Widget", 1);
        assert_eq!(recorder.notification_count(), 1);
    }

    #[test]
    fn detached_observer_receives_no_further_notifications() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Widget", 1);
        let handle: Rc<dyn InventoryObserver> = recorder.clone();
        assert!(warehouse.detach(&handle));

        warehouse.set_stock("Widget", 2);
        assert_eq!(recorder.notification_count(), 1);
    }

    #[test]
    fn detach_of_unknown_observer_is_a_no_op() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let attached = RecordingObserver::new();
        let stranger: Rc<dyn InventoryObserver> = RecordingObserver::new();
        warehouse.attach(attached.clone());

        assert!(!warehouse.detach(&stranger));

        warehouse.set_stock("Widget", 1);
        assert_eq!(attached.notification_count(), 1);
    }

    #[test]
    fn observers_are_notified_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Tagged {
            tag: &'static str,
            order: Rc<RefCell<Vec<&'static str>>>,
        }
        impl InventoryObserver for Tagged {
            fn update(&self, _state: &WarehouseState) {
                self.order.borrow_mut().push(self.tag);
            }
        }

        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        warehouse.attach(Rc::new(Tagged {
            tag: "first",
            order: order.clone(),
        }));
        warehouse.attach(Rc::new(Tagged {
            tag: "second",
            order: order.clone(),
        }));

        warehouse.set_stock("Widget", 1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn same_named_observers_are_distinct_subscriptions() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        let first = RecordingObserver::new();
        let second = RecordingObserver::new();
        warehouse.attach(first.clone());
        warehouse.attach(second.clone());

        let handle: Rc<dyn InventoryObserver> = first.clone();
        assert!(warehouse.detach(&handle));

        warehouse.set_stock("Widget", 1);
        assert_eq!(first.notification_count(), 0);
        assert_eq!(second.notification_count(), 1);
    }

    #[test]
    fn purchasing_flags_items_strictly_below_threshold() {
        let state = state_with(&[("ItemX", 5), ("AtLimit", 10), ("JustUnder", 9)]);
        let flagged = PurchasingDepartment::low_stock_items(&state);
        assert_eq!(flagged, vec!["ItemX", "JustUnder"]);
    }

    #[test]
    fn purchasing_flags_nothing_when_stock_is_healthy() {
        let state = state_with(&[("Widget", 100), ("Gadget", 10)]);
        assert!(PurchasingDepartment::low_stock_items(&state).is_empty());
    }

    #[test]
    fn low_stock_scenario_reaches_observers() {
        let mut warehouse = GeneralWarehouse::new("A");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());
        warehouse.attach(Rc::new(PurchasingDepartment::new("Purchasing")));

        warehouse.set_stock("ItemX", 5);

        let seen = recorder.last_seen();
        assert_eq!(seen.stock["ItemX"], 5);
        assert_eq!(PurchasingDepartment::low_stock_items(&seen), vec!["ItemX"]);
    }

    #[test]
    fn temperature_change_notifies_with_new_temperature() {
        let mut warehouse = RefrigeratedWarehouse::new("Cold Storage B");
        let recorder = RecordingObserver::new();
        warehouse.attach(recorder.clone());

        warehouse.set_stock("Frozen Peas", 50);
        assert_eq!(recorder.notification_count(), 1);

        warehouse.set_temperature(-5.0);
        assert_eq!(recorder.notification_count(), 2);

        let seen = recorder.last_seen();
        assert_eq!(seen.kind, WarehouseKind::Refrigerated);
        assert_eq!(seen.temperature, Some(-5.0));
        assert_eq!(seen.stock["Frozen Peas"], 50);
    }

    #[test]
    fn general_snapshot_serializes_without_temperature_key() {
        let mut warehouse = GeneralWarehouse::new("Warehouse A");
        warehouse.set_stock("Widget", 100);

        let json = serde_json::to_value(warehouse.state()).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["kind"], "general");
        assert_eq!(json["stock"]["Widget"], 100);
    }

    #[test]
    fn refrigerated_snapshot_serializes_temperature() {
        let mut warehouse = RefrigeratedWarehouse::new("Cold Storage B");
        warehouse.set_temperature(-18.0);

        let json = serde_json::to_value(warehouse.state()).unwrap();
        assert_eq!(json["temperature"], -18.0);
        assert_eq!(json["kind"], "refrigerated");
    }

    #[test]
    fn dropping_the_subject_leaves_observers_alive() {
        let recorder = RecordingObserver::new();
        {
            let mut warehouse = GeneralWarehouse::new("Warehouse A");
            warehouse.attach(recorder.clone());
            warehouse.set_stock("Widget", 1);
        }
        assert_eq!(recorder.notification_count(), 1);
    }

    #[test]
    fn subscribers_len_tracks_attach_and_detach() {
        let mut subscribers = Subscribers::new();
        assert!(subscribers.is_empty());

        let observer: Rc<dyn InventoryObserver> = RecordingObserver::new();
        subscribers.attach(observer.clone());
        subscribers.attach(observer.clone());
        assert_eq!(subscribers.len(), 1);

        assert!(subscribers.detach(&observer));
        assert!(subscribers.is_empty());
        assert!(!subscribers.detach(&observer));
    }
}
