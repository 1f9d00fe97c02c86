// Rigid-body physics: discrete per-axis collision detection and resolution
//
// This is deliberately NOT a general physics engine. Bodies are axis-aligned
// rectangles, penetration is resolved by a hard edge snap on one axis, and
// momentum exchange is a per-pair inelastic blend. No rotation, no swept
// collision, no global constraint solving.

pub mod body;
pub mod contact;

pub use body::{Body, BodyBuilder, BodyId, BodyKind};
pub use contact::{collide_against, pair_mut, Contact, ContactDirection};

/// Unit conversion applied to gravity each step (the world is pixel-scaled)
pub const PIXELS_PER_METER: f32 = 10.0;

/// How much relative velocity survives a contact (0 = fully absorbed)
pub const RESTITUTION: f32 = 0.5;

/// Divisor applied to horizontal velocity while resting on a surface
pub const GROUND_FRICTION: f32 = 1.2;

/// Bias in the vertical-vs-horizontal contact classification. Nudges shallow
/// corner hits toward a vertical contact so a body skimming a ledge lands on
/// it instead of clipping its side.
pub const CONTACT_BIAS: f32 = 2.0;
