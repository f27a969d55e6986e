//! Per-session mutable state. Both pieces are owned by the `App` and live as long
//! as it does; nothing here is persisted.

mod detail;
mod tags;

pub use detail::{OpenSelection, SelectionController};
pub use tags::TagSelection;
