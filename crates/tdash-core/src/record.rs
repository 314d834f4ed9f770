//! Traits shared by every entity held in a [`Store`](crate::store::Store).

use std::borrow::Cow;

use crate::error::DashResult;

/// Locally unique record identifier.
pub type RecordId = u64;

/// Bucket name for enumerated values outside their closed set. Distinct
/// from every real category, including the event category `other`.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// An immutable value record with a locally unique id.
pub trait Record {
    /// Entity name used in errors and log fields.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Check per-entity invariants (required fields, closed enumerations).
    fn validate(&self) -> DashResult<()> {
        Ok(())
    }
}

/// Records that can be narrowed by a filter tag.
pub trait Filterable {
    /// Value compared against a filter tag. Unknown enum values report
    /// [`UNKNOWN_BUCKET`].
    fn category(&self) -> &str;

    /// Boolean field named by `tag`, e.g. `unread`.
    ///
    /// Returns `None` when `tag` does not name a boolean field of this
    /// entity, in which case the tag is compared against [`category`].
    ///
    /// [`category`]: Filterable::category
    fn flag(&self, _tag: &str) -> Option<bool> {
        None
    }
}

/// Records that expose named text fields to free-text search.
pub trait Searchable {
    /// Fields searched when the caller does not name any.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Text of the named field, or `None` for an unknown name.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}
