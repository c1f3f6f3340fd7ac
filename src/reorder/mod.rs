// Optimistic list reordering: view state, pointer geometry, wire payload,
// request sequencing and the DOM controller that ties them together.
pub mod controller;
pub mod drop_target;
pub mod order;
pub mod payload;
pub mod sequencer;
pub mod status;

mod prop_test;

pub use controller::{attach, ReorderController};
pub use drop_target::{insertion_target, RowGeometry};
pub use order::{Direction, RowKey, RowOrder};
pub use payload::{OrderEntry, OrderSubmission};
pub use sequencer::{RequestSequencer, Ticket};
pub use status::StatusRegion;
