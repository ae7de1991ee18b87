//! Node placement.
//!
//! Positions depend only on a node's index among the `count` object types
//! of a schema, never on its fields or relationships, so every engine is a
//! pure function of `(index, count)`.

mod fan_out;
mod grid;

pub use fan_out::FanOutEngine;
pub use grid::GridEngine;

use log::debug;

use arrowsmith_core::geometry::Point;

use crate::config::{LayoutConfig, LayoutEngine};

/// Interface of the node placement engines.
pub trait Engine {
    /// Position of the node at `index` among `count` nodes.
    fn position(&self, index: usize, count: usize) -> Point;
}

/// Create the engine selected by `config`.
pub fn engine_for(config: &LayoutConfig) -> Box<dyn Engine> {
    debug!(engine:% = config.engine(), spacing = config.spacing(); "Selected layout engine");
    match config.engine() {
        LayoutEngine::FanOut => Box::new(FanOutEngine::new(config.spacing())),
        LayoutEngine::Grid => Box::new(GridEngine::new(config.spacing())),
    }
}
