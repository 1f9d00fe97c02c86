// Contact collection: run one body against every body of a given kind

use super::body::{Body, BodyKind};

/// Which side of the acting body a contact resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactDirection {
    /// Hit something above (head bump)
    Up,
    /// Landed on something below
    Down,
    /// Hit something on the left
    Left,
    /// Hit something on the right
    Right,
}

impl ContactDirection {
    #[allow(dead_code)]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn is_lateral(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Outcome of one resolved overlap, valid for the current frame only.
///
/// `other` indexes into the body slice of the pass that produced it. A
/// contact existing means the acting body's rect has already been snapped
/// flush against `other` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub direction: ContactDirection,
    pub other: usize,
}

/// Disjoint mutable access to two bodies of one slice.
///
/// Panics if `a == b` or either index is out of bounds; callers pair an
/// acting body with a contact partner, which are distinct by construction.
pub fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert_ne!(a, b, "cannot split a body against itself");
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

/// Run the body at `actor` against every body of kind `filter`.
///
/// Bodies are visited in slice order (= insertion order), so when the actor
/// overlaps two obstacles on the same axis the last-visited correction
/// stands. Penetration is resolved by `detect_and_separate`; Down and
/// lateral contacts additionally exchange momentum. `Up` contacts are
/// reported but left to the caller.
///
/// The slice is borrowed exclusively for the whole pass, so the body list
/// cannot change underneath the iteration.
pub fn collide_against(bodies: &mut [Body], actor: usize, filter: BodyKind) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for other in 0..bodies.len() {
        if other == actor || bodies[other].kind() != filter {
            continue;
        }

        let (acting, obstacle) = pair_mut(bodies, actor, other);
        if let Some(direction) = acting.detect_and_separate(obstacle) {
            if direction != ContactDirection::Up {
                acting.resolve_velocity_on_contact(direction, obstacle);
            }
            contacts.push(Contact { direction, other });
        }
    }

    contacts
}
