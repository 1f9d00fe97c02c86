// Engine modules: physics, input boundary, render boundary, frame pacing

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod render;
