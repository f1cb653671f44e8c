//! Aggregate root trait for the shipping domain.

/// Aggregate root marker + minimal interface.
///
/// Kept small so domain types decide how they model state transitions
/// without bringing in any storage concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// For shipments this is the number of recorded status events.
    fn version(&self) -> u64;
}
