//! Sync Controller
//!
//! Runs refresh, submit and delete against the gateway and writes the
//! results into the stores. Actions are independent: nothing serializes
//! an in-flight refresh against a delete, and responses land in the
//! order they complete.

use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::error::RemoteError;
use crate::gateway::RestaurantGateway;
use crate::intent::Intent;
use crate::model::RestaurantId;
use crate::pending::{OperationId, PendingOperations};
use crate::store::{DraftStore, ListStateStore};

/// Handle to the background half of an optimistic delete
#[must_use = "the backend delete only happens when the handle is settled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub operation: OperationId,
    pub restaurant_id: RestaurantId,
}

/// Orchestrates the board's three actions
pub struct SyncController<G, L, D> {
    gateway: Rc<G>,
    list: L,
    draft: D,
    pending: PendingOperations,
    refreshes_in_flight: Rc<Cell<usize>>,
}

impl<G, L: Clone, D: Clone> Clone for SyncController<G, L, D> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            list: self.list.clone(),
            draft: self.draft.clone(),
            pending: self.pending.clone(),
            refreshes_in_flight: Rc::clone(&self.refreshes_in_flight),
        }
    }
}

/// Counts a refresh as in flight until dropped
struct FetchingGuard(Rc<Cell<usize>>);

impl FetchingGuard {
    fn enter(counter: &Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        Self(Rc::clone(counter))
    }
}

impl Drop for FetchingGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl<G, L, D> SyncController<G, L, D>
where
    G: RestaurantGateway,
    L: ListStateStore,
    D: DraftStore,
{
    pub fn new(gateway: G, list: L, draft: D) -> Self {
        Self {
            gateway: Rc::new(gateway),
            list,
            draft,
            pending: PendingOperations::new(),
            refreshes_in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn pending(&self) -> &PendingOperations {
        &self.pending
    }

    /// Refreshes currently waiting on the backend
    pub fn refreshes_in_flight(&self) -> usize {
        self.refreshes_in_flight.get()
    }

    /// Replace the list with the backend's.
    ///
    /// On failure the list is left as it was.
    pub async fn refresh(&self) -> Result<(), RemoteError> {
        let result = {
            let _fetching = FetchingGuard::enter(&self.refreshes_in_flight);
            self.gateway.list_all().await
        };

        match result {
            Ok(restaurants) => {
                log::debug!("[SYNC] Loaded {} restaurants", restaurants.len());
                self.list.replace(restaurants);
                self.pending.clear_failed();
                Ok(())
            }
            Err(e) => {
                log::warn!("[SYNC] Refresh failed: {}", e);
                Err(e)
            }
        }
    }

    /// Create the current draft, then refresh and clear the form.
    ///
    /// A failed create aborts before either. The follow-up refresh is
    /// issued before the draft is cleared but not waited on for it; its
    /// failure is only logged.
    pub async fn submit(&self) -> Result<(), RemoteError> {
        let draft = self.draft.draft();

        if let Err(e) = self.gateway.create_one(&draft).await {
            log::warn!("[SYNC] Create failed: {}", e);
            return Err(e);
        }
        log::debug!("[SYNC] Created '{}'", draft.name);

        let mut refresh = self.refresh().boxed_local();
        let issued = futures::poll!(refresh.as_mut());
        self.draft.reset();

        // refresh() already logged any failure
        let _ = match issued {
            Poll::Ready(result) => result,
            Poll::Pending => refresh.await,
        };
        Ok(())
    }

    /// Remove the restaurant from the list now and record the pending
    /// backend delete.
    pub fn begin_delete(&self, id: &RestaurantId) -> PendingDelete {
        if self.list.remove(id) == 0 {
            log::debug!("[SYNC] Delete of {} not in list", id);
        }
        PendingDelete {
            operation: self.pending.start(id.clone()),
            restaurant_id: id.clone(),
        }
    }

    /// Ask the backend to delete.
    ///
    /// Failure is logged and recorded; the local removal stays. A record
    /// that a refresh already brought back is not hidden, so its failed
    /// delete is dropped from the ledger instead.
    pub async fn settle_delete(&self, pending: PendingDelete) {
        match self.gateway.delete_one(&pending.restaurant_id).await {
            Ok(()) => self.pending.confirm(pending.operation),
            Err(e) => {
                log::error!("[SYNC] Delete of {} failed: {}", pending.restaurant_id, e);
                let visible = self
                    .list
                    .snapshot()
                    .iter()
                    .any(|r| r.id == pending.restaurant_id);
                if visible {
                    self.pending.confirm(pending.operation);
                } else {
                    self.pending.fail(pending.operation, e.message());
                }
            }
        }
    }

    pub async fn delete(&self, id: &RestaurantId) {
        let pending = self.begin_delete(id);
        self.settle_delete(pending).await;
    }
}

impl<G, L, D> SyncController<G, L, D>
where
    G: RestaurantGateway + 'static,
    L: ListStateStore + Clone + 'static,
    D: DraftStore + Clone + 'static,
{
    /// Apply the synchronous part of an intent and hand back the async
    /// remainder for the event loop to spawn.
    pub fn handle(&self, intent: Intent) -> Option<LocalBoxFuture<'static, ()>> {
        match intent {
            Intent::EditField(field, value) => {
                self.draft.set_field(field, value);
                None
            }
            Intent::Refresh => {
                let this = self.clone();
                Some(
                    async move {
                        let _ = this.refresh().await;
                    }
                    .boxed_local(),
                )
            }
            Intent::Submit => {
                let this = self.clone();
                Some(
                    async move {
                        let _ = this.submit().await;
                    }
                    .boxed_local(),
                )
            }
            Intent::Delete(id) => {
                let pending = self.begin_delete(&id);
                let this = self.clone();
                Some(async move { this.settle_delete(pending).await }.boxed_local())
            }
        }
    }
}
