// Game layer: the room, the things living in it, and the map that seeds it

pub mod map;
pub mod player;
pub mod prop;
pub mod room;

pub use map::{MapRecord, TILE_SIZE};
pub use player::PlayerState;
pub use room::Room;
