//! Screen geometry
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Location(pub i32, pub i32);
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Dimension(pub i32, pub i32);

/// A rectangle of console cells, used to place and hit-test widgets
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    /// A rectangle of the given size, horizontally centered on `center_x`
    pub fn centered(center_x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect::new(center_x - w / 2, y, w, h)
    }

    pub fn center(&self) -> Location {
        let x = (self.x1 + self.x2) / 2;
        let y = (self.y1 + self.y2) / 2;
        Location(x, y)
    }

    /// Whether the cell at `loc` lies inside this rectangle.
    ///
    /// The right and bottom edges are exclusive, so cells on the seam
    /// between two adjacent rectangles belong to exactly one of them.
    pub fn contains(&self, loc: &Location) -> bool {
        let Location(x, y) = *loc;
        (self.x1 <= x) && (x < self.x2) && (self.y1 <= y) && (y < self.y2)
    }

    pub fn x(&self) -> i32 {
        self.x1
    }

    pub fn y(&self) -> i32 {
        self.y1
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_exclusive_on_the_far_edges() {
        let rect = Rect::new(10, 20, 4, 2);

        assert!(rect.contains(&Location(10, 20)));
        assert!(rect.contains(&Location(13, 21)));
        assert!(!rect.contains(&Location(14, 21)));
        assert!(!rect.contains(&Location(13, 22)));
        assert!(!rect.contains(&Location(9, 20)));
    }

    #[test]
    fn centered_splits_the_width_evenly() {
        let rect = Rect::centered(48, 30, 20, 3);

        assert_eq!(rect.x(), 38);
        assert_eq!(rect.width(), 20);
        assert_eq!(rect.center(), Location(48, 31));
    }
}
