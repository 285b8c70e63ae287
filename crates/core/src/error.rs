//! Domain error taxonomy.
//!
//! Pure domain failures only: this crate does no I/O, so persistence
//! errors never appear here. The api crate wraps storage errors in its own
//! type and maps both onto the HTTP surface (NotFound -> 404,
//! Validation -> 400, Conflict -> 409, Unauthorized -> 401,
//! Forbidden -> 403, Internal -> 500).

use crate::types::DbId;

/// Failure modes shared by every domain operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed entity does not exist. `entity` is the type name as
    /// shown to callers ("MediaItem", "User").
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// The caller's payload failed a gateway-side check; the message is
    /// surfaced to the client verbatim.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The operation collides with existing state, e.g. a taken email.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller presented no usable identity.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but may not touch this resource.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An invariant the domain relies on was broken. The message is for
    /// logs; clients only ever see a sanitized form.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}
