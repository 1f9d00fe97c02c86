// Player controller
//
// Layers input-driven movement, jump buffering and the ledge grab on top of
// the contact results coming back from the physics pass.

use glam::Vec2;

use crate::engine::input::{Button, InputSnapshot};
use crate::engine::physics::body::momentum_blend;
use crate::engine::physics::{collide_against, pair_mut, Body, BodyKind, ContactDirection};

/// Movement tuning - same for any spawned player
#[derive(Debug, Clone)]
pub struct PlayerTuning {
    /// Horizontal speed while walking (pixels/step)
    pub walk_speed: f32,
    /// Upward velocity reapplied each buffered jump frame
    pub jump_speed: f32,
    /// Max consecutive frames the held jump button keeps reapplying lift
    pub jump_buffer_frames: u32,
    /// Max vertical offset (pixels) between player top and ledge top for a grab
    pub ledge_tolerance: i32,
}

/// Baseline tuning shared by every player
pub const BASE_TUNING: PlayerTuning = PlayerTuning {
    walk_speed: 5.0,
    jump_speed: 6.0,
    jump_buffer_frames: 8,
    ledge_tolerance: 3,
};

impl Default for PlayerTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

/// Per-player control state, carried between frames.
///
/// Conceptually a small state machine: Grounded (`can_jump`), Airborne,
/// Jumping (buffer counter live) and Grabbing (`grab` holds the ledge top).
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub tuning: PlayerTuning,

    /// Consecutive frames the held jump button has reapplied lift
    jump_frames: u32,

    /// Grounded flag; sticky until a head bump, buffer exhaustion or the
    /// post-release edge clears it
    can_jump: bool,

    /// One-frame edge flag: jump button released after a live jump
    jumped: bool,

    /// Top Y of the grabbed ledge, while grabbing
    grab: Option<i32>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grounded(&self) -> bool {
        self.can_jump
    }

    pub fn is_grabbing(&self) -> bool {
        self.grab.is_some()
    }

    #[allow(dead_code)]
    pub fn grabbed_y(&self) -> Option<i32> {
        self.grab
    }
}

/// Run one control + physics step for the player body at `actor`.
///
/// Order matters and mirrors the contact model: input, jump buffer, walk
/// velocity, gravity, y-then-x movement, block contacts, grab, crate shove.
pub fn update(bodies: &mut [Body], actor: usize, state: &mut PlayerState, input: &InputSnapshot) {
    let walk_direction = input.horizontal_axis();
    let jump_held = input.is_pressed(Button::ButtonA);

    // Release edge: arm the jumped flag if a jump was live, reset the
    // buffer, and let go of any grabbed ledge.
    if input.just_released(Button::ButtonA) {
        if state.jump_frames > 0 {
            state.jumped = true;
            state.jump_frames = 0;
        }
        state.grab = None;
    }

    // Jump buffering: the held button reapplies constant lift for at most
    // `jump_buffer_frames` frames, giving variable jump height by hold
    // duration. An armed jumped flag is consumed here and grounds out the
    // buffer before it can retrigger.
    if jump_held {
        if state.jumped {
            state.can_jump = false;
            state.jumped = false;
        }
        if state.can_jump && state.jump_frames < state.tuning.jump_buffer_frames {
            bodies[actor].velocity_mut().y = -state.tuning.jump_speed;
            state.jump_frames += 1;
        } else if state.jump_frames >= state.tuning.jump_buffer_frames {
            // Buffer exhausted while still held
            state.can_jump = false;
        }
    }

    // Grabbing a ledge freezes horizontal control
    if state.grab.is_none() {
        bodies[actor].velocity_mut().x = state.tuning.walk_speed * walk_direction as f32;
    }

    // Gravity into velocity, then explicit y-before-x movement so the
    // contact pass sees the fully moved rect.
    bodies[actor].integrate(false);
    let v = bodies[actor].velocity();
    bodies[actor].apply_velocity(Vec2::new(0.0, v.y));
    bodies[actor].apply_velocity(Vec2::new(v.x, 0.0));

    // Grab eligibility is judged against the grounded state at contact
    // time, before this frame's contacts can re-ground the player.
    let was_grounded = state.can_jump;

    let contacts = collide_against(bodies, actor, BodyKind::Block);
    for contact in &contacts {
        match contact.direction {
            ContactDirection::Down => state.can_jump = true,
            ContactDirection::Up => {
                bodies[actor].velocity_mut().y = 0.0;
                state.can_jump = false;
            }
            ContactDirection::Left | ContactDirection::Right => {
                let ledge_top = bodies[contact.other].rect().top();
                let offset = (bodies[actor].rect().top() - ledge_top).abs();
                if !was_grounded && offset <= state.tuning.ledge_tolerance {
                    state.grab = Some(ledge_top);
                }
            }
        }
    }

    // Stick to the grabbed ledge until the jump button is released
    if let Some(grabbed_y) = state.grab {
        bodies[actor].rect_mut().set_top(grabbed_y);
        bodies[actor].velocity_mut().y = 0.0;
        state.can_jump = true;
    }

    // Shove movable crates: lateral contact pushes horizontal momentum into
    // the crate with the same blend, applied to the crate's side.
    let crate_contacts = collide_against(bodies, actor, BodyKind::Box);
    for contact in &crate_contacts {
        if contact.direction.is_lateral() {
            let (player, crate_body) = pair_mut(bodies, actor, contact.other);
            crate_body.velocity_mut().x = momentum_blend(
                player.mass(),
                player.velocity().x,
                crate_body.mass(),
                crate_body.velocity().x,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;

    /// Player standing flush on a wide floor, floor inserted first
    fn grounded_setup() -> (Vec<Body>, usize, PlayerState) {
        let floor = presets::block(0, 132, 300, 20);
        let player = presets::player(100, 100); // bottom = 132, flush
        let mut state = PlayerState::new();
        state.can_jump = true;
        (vec![floor, player], 1, state)
    }

    #[test]
    fn test_walk_sets_horizontal_velocity() {
        let (mut bodies, actor, mut state) = grounded_setup();
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, actor, &mut state, &input);
        assert_eq!(bodies[actor].velocity().x, BASE_TUNING.walk_speed);

        input.update();
        input.release(Button::Right);
        input.press(Button::Left);
        update(&mut bodies, actor, &mut state, &input);
        assert_eq!(bodies[actor].velocity().x, -BASE_TUNING.walk_speed);
    }

    /// Holding jump longer than the buffer ceiling yields exactly `ceiling`
    /// frames of reapplied lift, then can_jump drops even while held.
    #[test]
    fn test_jump_buffer_ceiling() {
        let (mut bodies, actor, mut state) = grounded_setup();
        let mut input = InputSnapshot::new();
        input.press(Button::ButtonA);

        let ceiling = state.tuning.jump_buffer_frames;
        let mut applications = 0;
        for _ in 0..(ceiling + 6) {
            let before = state.jump_frames;
            update(&mut bodies, actor, &mut state, &input);
            if state.jump_frames > before {
                applications += 1;
            }
            input.update();
        }

        assert_eq!(applications, ceiling);
        assert!(!state.can_jump, "buffer exhaustion must clear can_jump");
        // The player actually left the ground
        assert!(bodies[actor].rect().bottom() < 132);
    }

    #[test]
    fn test_release_edge_arms_and_consumes_jumped_flag() {
        let (mut bodies, actor, mut state) = grounded_setup();
        let mut input = InputSnapshot::new();

        // Two held jump frames, then release
        input.press(Button::ButtonA);
        update(&mut bodies, actor, &mut state, &input);
        input.update();
        update(&mut bodies, actor, &mut state, &input);
        input.update();
        input.release(Button::ButtonA);
        update(&mut bodies, actor, &mut state, &input);
        input.update();

        assert!(state.jumped);
        assert_eq!(state.jump_frames, 0);

        // Re-press mid-air: the armed flag grounds the buffer out instead
        // of retriggering lift
        input.press(Button::ButtonA);
        let vy_before = bodies[actor].velocity().y;
        update(&mut bodies, actor, &mut state, &input);
        assert!(!state.jumped);
        assert!(!state.can_jump);
        assert!(bodies[actor].velocity().y >= vy_before, "no lift reapplied");
    }

    /// Scenario: walking right into a wall directly ahead. First contact
    /// frame leaves the player flush and the blend collapses vx to ~0.
    #[test]
    fn test_walk_into_wall() {
        let (mut bodies, actor, mut state) = grounded_setup();
        // Tall wall one step ahead of the player's right edge
        bodies.push(presets::block(120, 32, 20, 100));
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, actor, &mut state, &input);

        assert_eq!(bodies[actor].rect().right(), 120);
        assert!(
            bodies[actor].velocity().x.abs() < 0.5,
            "wall mass should absorb nearly all momentum, vx = {}",
            bodies[actor].velocity().x
        );
    }

    /// Scenario: airborne lateral contact near a ledge top grabs it; the
    /// grab pins Y and zeroes vertical velocity on following frames.
    #[test]
    fn test_ledge_grab() {
        let ledge = presets::block(100, 100, 50, 20);
        let player = presets::player(80, 101);
        let mut bodies = vec![ledge, player];
        let mut state = PlayerState::new(); // airborne: can_jump = false
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, 1, &mut state, &input);
        assert_eq!(state.grabbed_y(), Some(100));
        assert!(state.is_grounded(), "grab counts as solid footing");

        input.update();
        update(&mut bodies, 1, &mut state, &input);
        assert_eq!(bodies[1].rect().top(), 100);
        assert_eq!(bodies[1].velocity().y, 0.0);
    }

    /// A grounded player never grabs, regardless of vertical offset.
    #[test]
    fn test_grab_exclusivity_when_grounded() {
        let (mut bodies, actor, mut state) = grounded_setup();
        // Wall ahead whose top matches the player's top exactly
        bodies.push(presets::block(120, 100, 20, 32));
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, actor, &mut state, &input);

        assert!(state.grab.is_none());
        assert!(state.can_jump);
    }

    #[test]
    fn test_grab_released_by_jump_button_release() {
        let ledge = presets::block(100, 100, 50, 20);
        let player = presets::player(80, 101);
        let mut bodies = vec![ledge, player];
        let mut state = PlayerState::new();
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, 1, &mut state, &input);
        assert!(state.is_grabbing());

        // Press and release jump: the release edge drops the grab
        input.update();
        input.press(Button::ButtonA);
        update(&mut bodies, 1, &mut state, &input);
        input.update();
        input.release(Button::ButtonA);
        update(&mut bodies, 1, &mut state, &input);

        assert!(!state.is_grabbing());
    }

    /// Head bump: vertical velocity zeroed, grounded flag cleared.
    #[test]
    fn test_up_contact_kills_ascent() {
        let ceiling = presets::block(0, 80, 200, 20);
        let player = presets::player(80, 104); // top flush under the ceiling
        let mut bodies = vec![ceiling, player];
        let mut state = PlayerState::new();
        state.can_jump = true;
        bodies[1].velocity_mut().y = -6.0;

        let input = InputSnapshot::new();
        update(&mut bodies, 1, &mut state, &input);

        assert_eq!(bodies[1].rect().top(), 100);
        assert_eq!(bodies[1].velocity().y, 0.0);
        assert!(!state.can_jump);
    }

    /// Corner landing: Down and Left contacts in the same frame must both
    /// ground the player and still evaluate the grab for the airborne
    /// approach.
    #[test]
    fn test_simultaneous_down_and_left_contact() {
        let floor = presets::block(0, 132, 200, 20);
        let wall = presets::block(0, 100, 20, 32);
        let mut player = presets::player(22, 99);
        *player.velocity_mut() = glam::Vec2::new(0.0, 3.1);
        let mut bodies = vec![floor, wall, player];
        let mut state = PlayerState::new(); // airborne
        let mut input = InputSnapshot::new();
        input.press(Button::Left);

        update(&mut bodies, 2, &mut state, &input);

        assert!(state.can_jump, "down contact grounds the player");
        assert_eq!(state.grabbed_y(), Some(100), "grab still evaluated");
    }

    /// The player shoves a crate: lateral contact transfers momentum into
    /// the crate instead of stopping dead.
    #[test]
    fn test_shove_crate() {
        let (mut bodies, actor, mut state) = grounded_setup();
        // Crate resting ahead of the player
        bodies.push(presets::crate_prop(120, 112, 20, 20));
        let mut input = InputSnapshot::new();
        input.press(Button::Right);

        update(&mut bodies, actor, &mut state, &input);

        let crate_body = &bodies[2];
        assert!(
            crate_body.velocity().x > 0.0,
            "crate should pick up forward momentum"
        );
        assert_eq!(bodies[actor].rect().right(), crate_body.rect().left());
    }
}
