// Room: owns the body list and drives the per-frame simulation step

use std::collections::HashMap;

use log::debug;

use crate::engine::input::InputSnapshot;
use crate::engine::physics::body::presets;
use crate::engine::physics::{Body, BodyId, BodyKind};
use crate::engine::render::{self, Color, RenderSink};
use crate::game::map::MapRecord;
use crate::game::player::{self, PlayerState};
use crate::game::prop;

/// The simulated level: an ordered collection of bodies plus per-player
/// control state.
///
/// Insertion order is update order AND draw order, and it decides which
/// correction wins when a body overlaps several obstacles in one frame.
/// Keep that in mind when seeding level geometry.
pub struct Room {
    bodies: Vec<Body>,
    players: HashMap<BodyId, PlayerState>,
    next_id: u64,
    background: Color,
}

impl Room {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            players: HashMap::new(),
            next_id: 0,
            background: render::BACKGROUND,
        }
    }

    /// Add a body; returns its id (stable across removals)
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body and any player state attached to it.
    /// Later bodies keep their relative order.
    #[allow(dead_code)]
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.players.remove(&id);
        let index = self.bodies.iter().position(|b| b.id() == id)?;
        Some(self.bodies.remove(index))
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn player_state(&self, id: BodyId) -> Option<&PlayerState> {
        self.players.get(&id)
    }

    /// Spawn the controllable character
    pub fn spawn_player(&mut self, x: i32, y: i32) -> BodyId {
        let id = self.add_body(presets::player(x, y));
        self.players.insert(id, PlayerState::new());
        id
    }

    /// Spawn a movable crate
    pub fn spawn_crate(&mut self, x: i32, y: i32, w: i32, h: i32) -> BodyId {
        self.add_body(presets::crate_prop(x, y, w, h))
    }

    /// Seed static geometry from map records. Only "Block" records become
    /// bodies; everything else is skipped.
    pub fn load_map(&mut self, records: &[MapRecord]) {
        for record in records {
            if record.kind == "Block" {
                self.add_body(presets::block(record.x, record.y, record.width, record.height));
            } else {
                debug!("skipping map record of kind {:?}", record.kind);
            }
        }
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Bodies update in insertion order: static kinds take the trivial
    /// integrate-and-move path, props and players run their collision-aware
    /// controllers against the whole list.
    pub fn update(&mut self, input: &InputSnapshot) {
        for i in 0..self.bodies.len() {
            match self.bodies[i].kind() {
                BodyKind::Player => {
                    let id = self.bodies[i].id();
                    if let Some(mut state) = self.players.remove(&id) {
                        player::update(&mut self.bodies, i, &mut state, input);
                        self.players.insert(id, state);
                    } else {
                        // Player body without control state; fall back to
                        // plain physics rather than stalling the frame
                        self.bodies[i].integrate(true);
                    }
                }
                BodyKind::Box => prop::update(&mut self.bodies, i),
                BodyKind::Block | BodyKind::None => self.bodies[i].integrate(true),
            }
        }
    }

    /// Paint the room: background, then every body in insertion order
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.clear(self.background);
        for body in &self.bodies {
            sink.draw(body);
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}
