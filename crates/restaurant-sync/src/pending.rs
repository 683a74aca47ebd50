//! Pending Operations
//!
//! Ledger of deletes that were applied to the list before the backend
//! answered. A `Failed` entry is a record the UI hides but the backend
//! still has; the next successful refresh brings it back.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::RestaurantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    InFlight,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    pub id: OperationId,
    pub restaurant_id: RestaurantId,
    pub status: OperationStatus,
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    operations: Vec<PendingOperation>,
}

/// Shared ledger of optimistic deletes
#[derive(Debug, Clone, Default)]
pub struct PendingOperations {
    inner: Rc<RefCell<Ledger>>,
}

impl PendingOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delete that has been applied locally
    pub fn start(&self, restaurant_id: RestaurantId) -> OperationId {
        let mut ledger = self.inner.borrow_mut();
        let id = OperationId(ledger.next_id);
        ledger.next_id += 1;
        ledger.operations.push(PendingOperation {
            id,
            restaurant_id,
            status: OperationStatus::InFlight,
        });
        id
    }

    /// Forget the operation (backend confirmed, or the record is visible again)
    pub fn confirm(&self, id: OperationId) {
        self.inner.borrow_mut().operations.retain(|op| op.id != id);
    }

    pub fn fail(&self, id: OperationId, message: impl Into<String>) {
        let message = message.into();
        if let Some(op) = self.inner.borrow_mut().operations.iter_mut().find(|op| op.id == id) {
            op.status = OperationStatus::Failed(message);
        }
    }

    /// Drop failed entries once fresh server state has been applied
    pub fn clear_failed(&self) {
        self.inner
            .borrow_mut()
            .operations
            .retain(|op| op.status == OperationStatus::InFlight);
    }

    pub fn all(&self) -> Vec<PendingOperation> {
        self.inner.borrow().operations.clone()
    }

    pub fn in_flight(&self) -> Vec<PendingOperation> {
        self.filtered(|status| *status == OperationStatus::InFlight)
    }

    pub fn failed(&self) -> Vec<PendingOperation> {
        self.filtered(|status| matches!(status, OperationStatus::Failed(_)))
    }

    fn filtered(&self, keep: impl Fn(&OperationStatus) -> bool) -> Vec<PendingOperation> {
        self.inner
            .borrow()
            .operations
            .iter()
            .filter(|op| keep(&op.status))
            .cloned()
            .collect()
    }
}
