use arrowsmith_core::geometry::Point;

use crate::layout::Engine;

/// Places node `i` of `N` at `(N + spacing * i, N - spacing / i)`.
///
/// The first node has no defined `y` under that formula and sits at
/// `(N, N)`, so every coordinate is finite. Nodes are not checked for
/// overlap.
#[derive(Debug, Clone, Copy)]
pub struct FanOutEngine {
    spacing: f64,
}

impl FanOutEngine {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }
}

impl Engine for FanOutEngine {
    fn position(&self, index: usize, count: usize) -> Point {
        let n = count as f64;
        let i = index as f64;

        let y = if index == 0 { n } else { n - self.spacing / i };
        Point::new(n + self.spacing * i, y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_node_is_finite() {
        let position = FanOutEngine::new(400.0).position(0, 3);

        assert!(position.is_finite());
        assert!(approx_eq!(f64, position.x(), 3.0));
        assert!(approx_eq!(f64, position.y(), 3.0));
    }

    #[test]
    fn test_fan_out_positions() {
        let engine = FanOutEngine::new(400.0);

        let second = engine.position(1, 2);
        assert!(approx_eq!(f64, second.x(), 402.0));
        assert!(approx_eq!(f64, second.y(), -398.0));

        let fifth = engine.position(4, 5);
        assert!(approx_eq!(f64, fifth.x(), 1605.0));
        assert!(approx_eq!(f64, fifth.y(), -95.0));
    }

    proptest! {
        #[test]
        fn positions_are_finite(count in 1usize..500, spacing in 1.0f64..1000.0) {
            let engine = FanOutEngine::new(spacing);
            for index in 0..count.min(20) {
                prop_assert!(engine.position(index, count).is_finite());
            }
        }
    }
}
