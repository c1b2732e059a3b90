//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # One queue, one order
/// Every operation an owner supports is a variant of this single enum, so all
/// of them travel through the same channel. The owner therefore sees one total
/// order across reads, updates, resets and actions; there is no per-kind queue
/// that could overtake another.
///
/// - **List**: Key-ordered deep copy of the whole store.
/// - **Get**: Copy of a single record, if present.
/// - **Update**: Applies [`ActorEntity::Update`] to one record. Replies `None`
///   when the update caused the record to be dropped (see [`ActorEntity::is_retained`]).
/// - **Reset**: Replaces the store with [`ActorEntity::seed`] and replies with the new contents.
/// - **Action**: Applies a store-wide [`ActorEntity::Action`] to every record and
///   replies with the number of records touched.
///
/// Each variant carries its own reply slot (`respond_to`), used exactly once.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Reset {
        respond_to: Response<Vec<T>>,
    },
    Action {
        action: T::Action,
        respond_to: Response<usize>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the variant, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Reset { .. } => "Reset",
            ResourceRequest::Action { .. } => "Action",
        }
    }
}
