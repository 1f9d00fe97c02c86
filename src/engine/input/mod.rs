// Input boundary
//
// The core consumes an abstract per-frame snapshot of logical button state;
// device polling lives outside the simulation. Feed device events into the
// snapshot, call `update()` once per frame, then run the world against it.

pub mod button;
pub mod snapshot;

pub use button::Button;
pub use snapshot::InputSnapshot;
