//! Product synchronization between the catalog store and the external catalog.
//!
//! The store is authoritative. Creation is a two-step saga with one
//! compensating action:
//! 1. Insert the product into the store (provisional)
//! 2. Create the mirrored item in the external catalog
//! 3. Link the product to the external item
//!
//! If step 2 fails the provisional product is deleted. Updates write the
//! store first and then mirror to the external catalog on a best-effort
//! basis: a mirror failure is reported in the outcome, never as an error.

pub mod coordinator;
pub mod error;
pub mod outcome;

pub use coordinator::SyncCoordinator;
pub use error::SyncError;
pub use outcome::{CreationOutcome, MirrorOutcome, UpdateOutcome};
