use glam::IVec2;

/// Axis-aligned bounding box in integer arena pixels.
///
/// `pos` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point, rounded toward the top-left
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
