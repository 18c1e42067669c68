//! Pixel-grid geometry for tiles, and world positions for entities.
//!
//! Tiles sit on integer pixel coordinates ([`Point`], [`Range`]). Entity
//! centers are continuous ([`Vec2`]). Y grows downwards.

use std::fmt;
use std::ops::{Div, Mul};

/// Integer position on the pixel grid, or a (column, row) cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `dx` and `dy`.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Scales a pixel position down to a cell, e.g. `position / tile_length`.
impl Div<i32> for Point {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Scales a cell up to its pixel position, e.g. `cell * tile_length`.
impl Mul<i32> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle covering `min` up to, but not including, `max`.
///
/// Two tiles of side `L` that share a border do not share a point: the tile
/// at `(0, 0)` is `Range::with_size(0, 0, L, L)` and ends where the next one
/// starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle between two opposite corners, given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    pub fn with_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Saturates at `i32::MAX` for ranges spanning more than that.
    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Points in both ranges. Disjoint ranges give the default empty range.
    pub fn intersect(&self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Every point of the rectangle, row by row.
    pub fn iter(&self) -> Points {
        Points {
            range: *self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Row-major iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct Points {
    range: Range,
    next: usize,
}

impl Points {
    fn total(&self) -> usize {
        if self.range.is_empty() {
            0
        } else {
            self.range.width() as usize * self.range.height() as usize
        }
    }
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.total() {
            return None;
        }
        let w = self.range.width() as usize;
        let p = self
            .range
            .min
            .shift((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Points {}

/// Continuous world position, used for entity centers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_scale() {
        let p = Point::new(30, 20).shift(-10, 5);
        assert_eq!(p, Point::new(20, 25));
        assert_eq!(p / 10, Point::new(2, 2));
        assert_eq!(Point::new(2, -3) * 10, Point::new(20, -30));
        assert_eq!((p / 10) * 10, Point::new(20, 20));
    }

    #[test]
    fn corners_in_any_order() {
        assert_eq!(Range::new(5, 7, 0, 1), Range::new(0, 1, 5, 7));
        let r = Range::with_size(10, 20, 30, 40);
        assert_eq!(r.max, Point::new(40, 60));
        assert_eq!((r.width(), r.height()), (30, 40));
    }

    #[test]
    fn shared_border_is_outside() {
        let tile = Range::with_size(0, 0, 10, 10);
        assert!(tile.contains(Point::new(9, 9)));
        assert!(!tile.contains(Point::new(10, 0)));
        assert!(!tile.contains(Point::new(0, 10)));
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let map = Range::new(0, 0, 5, 4);
        assert_eq!(map.intersect(Range::new(3, -2, 9, 2)), Range::new(3, 0, 5, 2));
        assert_eq!(map.intersect(Range::new(5, 0, 7, 4)), Range::default());
        let huge = Range::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(huge.width(), i32::MAX);
        assert_eq!(huge.intersect(map), map);
    }

    #[test]
    fn iterates_row_by_row() {
        let pts: Vec<Point> = Range::new(1, 1, 3, 3).iter().collect();
        assert_eq!(
            pts,
            [
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
        let mut it = Range::new(0, 0, 4, 3).iter();
        assert_eq!(it.len(), 12);
        it.next();
        assert_eq!(it.len(), 11);
    }

    #[test]
    fn empty_range() {
        let r = Range::new(3, 3, 3, 7);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.to_string(), "(3, 3)..(3, 7)");
    }
}
