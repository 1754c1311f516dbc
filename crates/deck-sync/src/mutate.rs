//! Create, update and delete against a [`ListStore`].
//!
//! A successful response is spliced into the local items directly; the list
//! is never refetched after a mutation. Failures leave the items untouched.

use deck_client::ClientError;
use deck_core::entities::Identified;
use deck_core::validation::Validate;
use parking_lot::Mutex;

use crate::confirm::Confirm;
use crate::error::SyncError;
use crate::resource::Resource;
use crate::store::{Busy, Inner, ListStore};

/// Result of a confirmed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation was declined and no request was sent.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Create,
    Update,
    Delete,
}

impl Op {
    const fn counter(self, busy: &mut Busy) -> &mut u32 {
        match self {
            Self::Create => &mut busy.creating,
            Self::Update => &mut busy.updating,
            Self::Delete => &mut busy.deleting,
        }
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Marks a mutation as running for as long as it is alive.
///
/// Dropping it takes the store lock, so it must not be dropped while that
/// lock is held.
struct BusyGuard<'a, T> {
    inner: &'a Mutex<Inner<T>>,
    op: Op,
}

impl<'a, T> BusyGuard<'a, T> {
    fn enter(inner: &'a Mutex<Inner<T>>, op: Op) -> Self {
        {
            let mut state = inner.lock();
            *op.counter(&mut state.busy) += 1;
            state.error = None;
        }
        Self { inner, op }
    }
}

impl<T> Drop for BusyGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        let counter = self.op.counter(&mut state.busy);
        *counter = counter.saturating_sub(1);
    }
}

impl<R: Resource> ListStore<R> {
    /// Validate `draft`, send it, and prepend the created item.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] without sending anything when the
    /// draft is rejected, or [`SyncError::Request`] when the server refuses.
    pub async fn create(&self, draft: &R::Draft) -> Result<R::Item, SyncError> {
        let input = draft.validate()?;
        let _busy = BusyGuard::enter(&self.inner, Op::Create);

        let item = match self.resource.create(&input).await {
            Ok(item) => item,
            Err(error) => return Err(self.fail(Op::Create, error)),
        };
        tracing::debug!(noun = R::NOUN, id = item.id(), "created");

        {
            let mut inner = self.inner.lock();
            inner.items.retain(|existing| existing.id() != item.id());
            inner.items.insert(0, item.clone());
            inner.pagination.record_created();
            if let Some(in_flight) = inner.in_flight.as_mut() {
                in_flight.created.push(item.clone());
            }
        }
        Ok(item)
    }

    /// Validate `draft`, send it, and replace the item with `id` in place.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    pub async fn update(&self, id: &str, draft: &R::Draft) -> Result<R::Item, SyncError> {
        let input = draft.validate()?;
        let _busy = BusyGuard::enter(&self.inner, Op::Update);

        let item = match self.resource.update(id, &input).await {
            Ok(item) => item,
            Err(error) => return Err(self.fail(Op::Update, error)),
        };
        tracing::debug!(noun = R::NOUN, id, "updated");

        {
            let mut inner = self.inner.lock();
            if let Some(slot) = inner.items.iter_mut().find(|existing| existing.id() == id) {
                slot.clone_from(&item);
            }
            if let Some(in_flight) = inner.in_flight.as_mut() {
                in_flight.replaced.insert(id.to_string(), item.clone());
            }
        }
        Ok(item)
    }

    /// Ask `confirm`, then delete the item with `id` and drop it locally.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Request`] when the server refuses. The item stays
    /// in the list in that case.
    pub async fn delete<C>(&self, id: &str, confirm: &C) -> Result<DeleteOutcome, SyncError>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(&format!("Delete this {}?", R::NOUN)) {
            tracing::debug!(noun = R::NOUN, id, "delete declined");
            return Ok(DeleteOutcome::Cancelled);
        }
        let _busy = BusyGuard::enter(&self.inner, Op::Delete);

        if let Err(error) = self.resource.delete(id).await {
            return Err(self.fail(Op::Delete, error));
        }
        tracing::debug!(noun = R::NOUN, id, "deleted");

        {
            let mut inner = self.inner.lock();
            inner.items.retain(|existing| existing.id() != id);
            inner.pagination.record_deleted();
            if let Some(in_flight) = inner.in_flight.as_mut() {
                in_flight.replaced.remove(id);
                in_flight.created.retain(|created| created.id() != id);
                in_flight.removed.insert(id.to_string());
            }
        }
        Ok(DeleteOutcome::Deleted)
    }

    fn fail(&self, op: Op, error: ClientError) -> SyncError {
        tracing::warn!(noun = R::NOUN, op = op.verb(), %error, "request failed");
        self.inner.lock().error = Some(format!("failed to {} {}: {error}", op.verb(), R::NOUN));
        error.into()
    }
}
