// Math primitives for the simulation
//
// Coordinates are screen-space: x grows right, y grows DOWN. Gravity is a
// positive y acceleration and an upward jump is a negative y velocity.

use glam::IVec2;

/// Axis-aligned rectangle with integer pixel coordinates.
///
/// `(x, y)` is the top-left corner. Width and height must be positive;
/// a rect that flunks that invariant never reports an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    /// Create a new rect from its top-left corner and size
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0, "rect must have positive dimensions");
        Self { x, y, w, h }
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (integer division, rounds toward the top-left)
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True when either dimension is non-positive
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Move the rect so its left edge sits at `left` (size preserved)
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move the rect so its right edge sits at `right` (size preserved)
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    /// Move the rect so its top edge sits at `top` (size preserved)
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move the rect so its bottom edge sits at `bottom` (size preserved)
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Translate the rect by whole pixels
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Strict overlap test: rects that merely share an edge do NOT overlap.
    ///
    /// This is what keeps a resolved contact stable — after an edge snap the
    /// two rects are flush and stop reporting contacts.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center(), IVec2::new(25, 40));
    }

    #[test]
    fn test_edge_setters_preserve_size() {
        let mut r = Rect::new(0, 0, 16, 32);
        r.set_right(100);
        assert_eq!(r.right(), 100);
        assert_eq!(r.left(), 84);
        assert_eq!(r.width(), 16);

        r.set_bottom(50);
        assert_eq!(r.bottom(), 50);
        assert_eq!(r.top(), 18);
        assert_eq!(r.height(), 32);
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::new(5, 5, 10, 10);
        r.translate(3, -2);
        assert_eq!(r.left(), 8);
        assert_eq!(r.top(), 3);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let c = Rect::new(20, 20, 10, 10);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_flush_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right_neighbor = Rect::new(10, 0, 10, 10);
        let below_neighbor = Rect::new(0, 10, 10, 10);

        assert!(!a.overlaps(&right_neighbor));
        assert!(!a.overlaps(&below_neighbor));
    }

    #[test]
    fn test_overlap_by_one_pixel() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 0, 10, 10);
        assert!(a.overlaps(&b));
    }
}
