// Rigid body: an axis-aligned rect with mass, velocity and a kind tag

use glam::{IVec2, Vec2};

use super::contact::ContactDirection;
use super::{CONTACT_BIAS, GROUND_FRICTION, PIXELS_PER_METER, RESTITUTION};
use crate::core::math::Rect;
use crate::engine::render::{self, Color};

/// Unique identifier for a body, assigned by the room on insertion.
/// Stable across removals, unlike a plain index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) u64);

/// Closed set of body classifications.
///
/// The kind doubles as the collision filter: a collision pass only tests the
/// acting body against bodies of one requested kind. `None` bodies take part
/// in physics but never match a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Unclassified; participates in physics, matches no filter
    None,
    /// Static level geometry
    Block,
    /// Movable, gravity-affected prop
    Box,
    /// The controllable character
    Player,
}

/// A simulated rectangular entity.
///
/// The body is the sole owner of its rect and velocity; everything else
/// mutates them only through the operations below. `last_center` remembers
/// where the body was at the start of its update so a contact can be
/// classified by approach direction rather than by current overlap geometry.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) id: BodyId,
    rect: Rect,
    mass: f32,
    velocity: Vec2,
    gravity: f32,
    kind: BodyKind,
    color: Color,
    last_center: IVec2,
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.velocity
    }

    #[allow(dead_code)]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    #[allow(dead_code)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Integrate gravity for one step.
    ///
    /// Always records the pre-move center and accelerates `vy`. When
    /// `advance` is false the position is NOT moved yet — the player and
    /// prop controllers move axis-by-axis themselves before colliding.
    pub fn integrate(&mut self, advance: bool) {
        self.last_center = self.rect.center();
        self.velocity.y += self.gravity / PIXELS_PER_METER;
        if advance {
            let v = self.velocity;
            self.apply_velocity(v);
        }
    }

    /// Move the rect by a velocity truncated to whole pixels.
    ///
    /// Truncation (toward zero, not rounding) is inherited behavior; it
    /// biases sub-pixel drift toward standing still.
    pub fn apply_velocity(&mut self, v: Vec2) {
        self.rect.translate(v.x as i32, v.y as i32);
    }

    /// Detect overlap with `other` and push this body out along one axis.
    ///
    /// Classification compares the vertical and horizontal distance from this
    /// body's `last_center` to the other's current center, scaled by the
    /// combined height/width ratio. Using the pre-move center answers "which
    /// side did I approach from", which stays correct even after partially
    /// tunnelling into the other rect.
    ///
    /// On contact the relevant edge is snapped flush against the other body
    /// (zero residual penetration on that axis) and the direction returned.
    pub fn detect_and_separate(&mut self, other: &Body) -> Option<ContactDirection> {
        if !self.rect.overlaps(other.rect()) {
            return None;
        }

        let combined_w = (self.rect.width() + other.rect().width()) as f32;
        let combined_h = (self.rect.height() + other.rect().height()) as f32;
        if combined_w <= 0.0 || combined_h <= 0.0 {
            debug_assert!(false, "degenerate rect reached contact classification");
            return None;
        }
        let ratio = combined_h / combined_w;

        let to_other = other.rect().center() - self.last_center;
        let dh = to_other.x as f32;
        let dv = to_other.y as f32;

        let direction = if dv.abs() > dh.abs() * ratio - CONTACT_BIAS {
            if dv > 0.0 {
                self.rect.set_bottom(other.rect().top());
                ContactDirection::Down
            } else {
                self.rect.set_top(other.rect().bottom());
                ContactDirection::Up
            }
        } else if dh > 0.0 {
            self.rect.set_right(other.rect().left());
            ContactDirection::Right
        } else {
            self.rect.set_left(other.rect().right());
            ContactDirection::Left
        };

        Some(direction)
    }

    /// Exchange momentum after a resolved contact.
    ///
    /// A `Down` contact blends `vy` with the surface and damps `vx` by the
    /// ground friction divisor; lateral contacts blend `vx` undamped. `Up`
    /// is left to the caller (the player zeroes its own head-bump velocity).
    pub fn resolve_velocity_on_contact(&mut self, direction: ContactDirection, other: &Body) {
        match direction {
            ContactDirection::Down => {
                self.velocity.y =
                    momentum_blend(self.mass, self.velocity.y, other.mass, other.velocity.y);
                self.velocity.x /= GROUND_FRICTION;
            }
            ContactDirection::Left | ContactDirection::Right => {
                self.velocity.x =
                    momentum_blend(self.mass, self.velocity.x, other.mass, other.velocity.x);
            }
            ContactDirection::Up => {}
        }
    }
}

/// Mass-weighted inelastic velocity blend with a restitution correction.
///
/// Not a physically rigorous impulse solver: each body resolves its own side
/// of the pair independently, which is stable at platformer speeds and keeps
/// the result bounded by the two inputs plus the restitution term.
pub fn momentum_blend(m_self: f32, v_self: f32, m_other: f32, v_other: f32) -> f32 {
    (m_self * v_self + m_other * v_other + RESTITUTION * (v_self - v_other)) / (m_self + m_other)
}

/// Builder for bodies with common configurations
pub struct BodyBuilder {
    rect: Rect,
    mass: f32,
    gravity: f32,
    kind: BodyKind,
    color: Color,
}

impl BodyBuilder {
    /// Start a body at `(x, y)` (top-left) with the given size
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            mass: 1.0,
            gravity: 0.0,
            kind: BodyKind::None,
            color: render::BODY_DEFAULT,
        }
    }

    pub fn mass(mut self, mass: f32) -> Self {
        debug_assert!(mass > 0.0, "mass must be positive");
        self.mass = mass;
        self
    }

    /// Gravity acceleration in m/s² (0 = unaffected)
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn build(self) -> Body {
        let last_center = self.rect.center();
        Body {
            id: BodyId(0),
            rect: self.rect,
            mass: self.mass,
            velocity: Vec2::ZERO,
            gravity: self.gravity,
            kind: self.kind,
            color: self.color,
            last_center,
        }
    }
}

/// Common body configurations for game objects
pub mod presets {
    use super::*;

    /// Mass given to static geometry. Large enough that the blend formula
    /// leaves a dynamic body with essentially no velocity after hitting it.
    pub const BLOCK_MASS: f32 = 200.0;

    pub const PLAYER_MASS: f32 = 12.0;
    pub const PLAYER_WIDTH: i32 = 16;
    pub const PLAYER_HEIGHT: i32 = 32;
    pub const PLAYER_GRAVITY: f32 = 9.8;

    pub const CRATE_MASS: f32 = 4.0;
    pub const CRATE_GRAVITY: f32 = 9.8;

    /// Static level geometry
    pub fn block(x: i32, y: i32, w: i32, h: i32) -> Body {
        BodyBuilder::new(x, y, w, h)
            .mass(BLOCK_MASS)
            .kind(BodyKind::Block)
            .color(render::BLOCK)
            .build()
    }

    /// The controllable character (fixed 16x32 frame)
    pub fn player(x: i32, y: i32) -> Body {
        BodyBuilder::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)
            .mass(PLAYER_MASS)
            .gravity(PLAYER_GRAVITY)
            .kind(BodyKind::Player)
            .build()
    }

    /// A movable, gravity-affected crate
    pub fn crate_prop(x: i32, y: i32, w: i32, h: i32) -> Body {
        BodyBuilder::new(x, y, w, h)
            .mass(CRATE_MASS)
            .gravity(CRATE_GRAVITY)
            .kind(BodyKind::Box)
            .color(render::CRATE)
            .build()
    }
}
