//! # Generic Table Actor
//!
//! This module defines the `StoreActor`, the server side of the store. It
//! owns the rows of one table and processes all requests for that table
//! sequentially, which is what serializes concurrent reorder requests (see
//! the [`store`](crate::store) module docs).
//!
//! The actor is also where the ordering engine's recovery policy lives:
//! when a reorder reports `PrecisionExhausted`, the actor renumbers the
//! sibling group and retries the original move exactly once before giving
//! up.

use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use crate::store::record::StoreRecord;
use ordering_engine::{compute_insertion_key, renumber, reorder, sort, OrderingError, SortKey};
use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one catalog table.
///
/// # Concurrency Model
/// Each table gets its own actor running in its own Tokio task. Messages
/// are processed one at a time, so a reorder always sees the neighbor keys
/// as of the moment it runs — no locks, no torn sibling views.
pub struct StoreActor<T: StoreRecord> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    rows: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreRecord> StoreActor<T>
where
    T::Id: From<u32> + Hash,
{
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client
    /// has been dropped.
    pub async fn run(mut self) {
        let table = table_name::<T>();
        info!(table, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(table, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    // Build with a provisional key, then place the record
                    // last within its group via the engine's one-sided rule.
                    let mut row = T::from_create(id.clone(), params, SortKey::BASELINE);
                    match self.append_key(&row.group()) {
                        Ok(key) => {
                            row.set_sort(key);
                            self.rows.insert(id.clone(), row);
                            info!(table, %id, size = self.rows.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(table, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    debug!(table, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                StoreRequest::List { group, respond_to } => {
                    let members = self.group_rows(&group);
                    debug!(table, ?group, count = members.len(), "List");
                    let _ = respond_to.send(Ok(members));
                }
                StoreRequest::Reorder {
                    id,
                    group,
                    new_index,
                    respond_to,
                } => {
                    debug!(table, %id, ?group, new_index, "Reorder");
                    let result = self.reorder_in_group(&id, &group, new_index);
                    match &result {
                        Ok(key) => info!(table, %id, %key, "Reordered"),
                        Err(e) => warn!(table, %id, error = %e, "Reorder failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(table, %id, "Delete");
                    if self.rows.remove(&id).is_some() {
                        info!(table, %id, size = self.rows.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(table, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(table, size = self.rows.len(), "Shutdown");
    }

    /// Computes and persists the new key for `id` moved to `new_index`
    /// within `group`.
    ///
    /// Exactly one row's `sort` changes on success. On
    /// `PrecisionExhausted` the group is renumbered and the move retried
    /// once — the caller sees only the final key, never the recovery.
    fn reorder_in_group(
        &mut self,
        id: &T::Id,
        group: &T::Group,
        new_index: usize,
    ) -> Result<SortKey, StoreError> {
        let members = self.group_rows(group);
        match reorder(&members, id, new_index) {
            Ok(key) => {
                self.set_sort(id, key);
                Ok(key)
            }
            Err(OrderingError::PrecisionExhausted { prev, next }) => {
                warn!(
                    table = table_name::<T>(),
                    ?group,
                    ?prev,
                    ?next,
                    "Sort keys exhausted, renumbering group"
                );
                for (row_id, key) in renumber(&members) {
                    self.set_sort(&row_id, key);
                }
                // Retry the original move once against the fresh keys.
                let members = self.group_rows(group);
                let key = reorder(&members, id, new_index)?;
                self.set_sort(id, key);
                Ok(key)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Computes the key placing a new record last in `group`.
    ///
    /// Shares the reorder recovery policy: if the tail key has no headroom
    /// left, the group is renumbered and the placement retried once.
    fn append_key(&mut self, group: &T::Group) -> Result<SortKey, StoreError> {
        let members = self.group_rows(group);
        let tail = members.last().map(|sibling| sibling.sort_key());
        match compute_insertion_key(tail, None) {
            Ok(key) => Ok(key),
            Err(OrderingError::PrecisionExhausted { prev, next }) => {
                warn!(
                    table = table_name::<T>(),
                    ?group,
                    ?prev,
                    ?next,
                    "Sort keys exhausted, renumbering group"
                );
                for (row_id, key) in renumber(&members) {
                    self.set_sort(&row_id, key);
                }
                let members = self.group_rows(group);
                let tail = members.last().map(|sibling| sibling.sort_key());
                Ok(compute_insertion_key(tail, None)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Materializes the sibling list for `group` in display order.
    fn group_rows(&self, group: &T::Group) -> Vec<T> {
        let mut members: Vec<T> = self
            .rows
            .values()
            .filter(|row| row.group() == *group)
            .cloned()
            .collect();
        sort(&mut members);
        members
    }

    fn set_sort(&mut self, id: &T::Id, key: SortKey) {
        if let Some(row) = self.rows.get_mut(id) {
            row.set_sort(key);
        }
    }
}

/// Extract just the type name (e.g. "Category" instead of
/// "catalog_admin::model::category::Category").
fn table_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryId};

    #[test]
    fn append_key_renumbers_when_tail_has_no_headroom() {
        let (mut actor, _client) = StoreActor::<Category>::new(8);

        // 2^53: adding the one-sided step rounds back onto the tail.
        let tail = SortKey::new(9_007_199_254_740_992.0).unwrap();
        actor
            .rows
            .insert(CategoryId(1), Category::new(CategoryId(1), "A", "a", tail));

        let key = actor.append_key(&()).expect("placement after renumber");

        // The group was renumbered and the new key lands after it.
        let renumbered = actor.rows[&CategoryId(1)].sort;
        assert_eq!(renumbered, SortKey::new(SortKey::RENUMBER_STEP).unwrap());
        assert!(key > renumbered);
    }

    #[test]
    fn append_key_leaves_healthy_groups_alone() {
        let (mut actor, _client) = StoreActor::<Category>::new(8);
        let tail = SortKey::new(2.0).unwrap();
        actor
            .rows
            .insert(CategoryId(1), Category::new(CategoryId(1), "A", "a", tail));

        let key = actor.append_key(&()).expect("placement");

        assert_eq!(key, SortKey::new(2.0 + SortKey::STEP).unwrap());
        assert_eq!(actor.rows[&CategoryId(1)].sort, tail);
    }
}
