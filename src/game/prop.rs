// Dynamic prop behavior
//
// A crate is gravity-affected and collides with static geometry exactly like
// the player does, minus controls. Crates do NOT collide with each other;
// only Block bodies stop them.

use glam::Vec2;

use crate::engine::physics::{collide_against, Body, BodyKind};

/// Run one physics step for the prop body at `actor`.
pub fn update(bodies: &mut [Body], actor: usize) {
    bodies[actor].integrate(false);
    let v = bodies[actor].velocity();
    bodies[actor].apply_velocity(Vec2::new(0.0, v.y));
    bodies[actor].apply_velocity(Vec2::new(v.x, 0.0));

    // Contacts are fully resolved inside the pass; a prop has no state
    // machine to feed them into.
    let _ = collide_against(bodies, actor, BodyKind::Block);
}
