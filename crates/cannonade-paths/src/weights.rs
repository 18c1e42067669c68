/// Step costs used for graph edges and the search heuristic.
///
/// The defaults keep the classic integer ratio of 10 for a straight step and
/// 14 for a diagonal one (≈ √2 : 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeWeights {
    pub nondiagonal: i32,
    pub diagonal: i32,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            nondiagonal: Self::NONDIAGONAL,
            diagonal: Self::DIAGONAL,
        }
    }
}

impl EdgeWeights {
    pub const NONDIAGONAL: i32 = 10;
    pub const DIAGONAL: i32 = 14;

    pub const fn new(nondiagonal: i32, diagonal: i32) -> Self {
        Self {
            nondiagonal,
            diagonal,
        }
    }

    /// Whether `0 < nondiagonal < diagonal`.
    pub fn is_valid(&self) -> bool {
        self.nondiagonal > 0 && self.diagonal > self.nondiagonal
    }

    /// Weight of an edge of the given kind.
    #[inline]
    pub fn of(&self, diagonal: bool) -> i32 {
        if diagonal {
            self.diagonal
        } else {
            self.nondiagonal
        }
    }

    /// Cheapest cost of covering `dx × dy` tiles in the open, which is an
    /// admissible estimate for any path on the graph.
    ///
    /// A diagonal step is never counted above two straight steps, so the
    /// estimate stays admissible even for very expensive diagonals. Saturates
    /// at `i32::MAX`.
    #[inline]
    pub fn octile(&self, dx: i32, dy: i32) -> i32 {
        let (dx, dy) = (dx.saturating_abs(), dy.saturating_abs());
        let diag = self.diagonal.min(self.nondiagonal.saturating_mul(2));
        let straight = dx.max(dy) - dx.min(dy);
        diag.saturating_mul(dx.min(dy))
            .saturating_add(self.nondiagonal.saturating_mul(straight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_fourteen() {
        let w = EdgeWeights::default();
        assert_eq!((w.nondiagonal, w.diagonal), (10, 14));
        assert!(w.is_valid());
        assert_eq!(w.of(false), 10);
        assert_eq!(w.of(true), 14);
    }

    #[test]
    fn validation() {
        assert!(!EdgeWeights::new(0, 14).is_valid());
        assert!(!EdgeWeights::new(10, 10).is_valid());
        assert!(!EdgeWeights::new(-1, 5).is_valid());
        assert!(EdgeWeights::new(1, 2).is_valid());
    }

    #[test]
    fn octile_distance() {
        let w = EdgeWeights::default();
        assert_eq!(w.octile(0, 0), 0);
        assert_eq!(w.octile(3, 0), 30);
        assert_eq!(w.octile(-4, 4), 56);
        assert_eq!(w.octile(2, 5), 2 * 14 + 3 * 10);
    }

    #[test]
    fn octile_caps_expensive_diagonals() {
        let w = EdgeWeights::new(10, 50);
        assert_eq!(w.octile(1, 1), 20);
    }

    #[test]
    fn octile_saturates_on_large_weights() {
        let w = EdgeWeights::new(1_500_000_000, 2_000_000_000);
        assert!(w.is_valid());
        assert_eq!(w.octile(1, 1), 2_000_000_000);
        assert_eq!(w.octile(2, 0), i32::MAX);
        assert_eq!(EdgeWeights::default().octile(i32::MIN, 0), i32::MAX);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn weights_round_trip() {
        let w = EdgeWeights::new(3, 4);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"nondiagonal":3,"diagonal":4}"#);
        let back: EdgeWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
