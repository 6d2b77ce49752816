//! Request context carrying the acting user and the request time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assethub_core::types::UserId;

/// Context for the current request.
///
/// The caller has already authenticated the actor; services never re-check.
/// Every timestamp written by an operation is `request_time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user.
    pub actor_id: UserId,
    /// When the request was received (UTC).
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context stamped with the current time.
    pub fn new(actor_id: UserId) -> Self {
        Self::at(actor_id, Utc::now())
    }

    /// Creates a context with an explicit request time.
    pub fn at(actor_id: UserId, request_time: DateTime<Utc>) -> Self {
        Self {
            actor_id,
            request_time,
        }
    }
}
