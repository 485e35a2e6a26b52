//! Interpreter that walks an expanded grammar string and emits plant geometry.
//!
//! The entry point is [`PlantInterpreter`]. Configure it with a [`TurtleConfig`],
//! then call [`PlantInterpreter::interpret`] with the symbol string, an
//! [`AngleSource`] for turn magnitudes, and the [`MeshAccumulator`] to fill.

use crate::builders::{Cylinder, Leaf};
use crate::error::PlantError;
use crate::mesh::{MeshAccumulator, TextureTag};
use crate::random::AngleSource;
use crate::turtle::{TurtleConfig, TurtleOp, TurtleState};

/// Summary of a completed interpretation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpretation {
    /// Symbols consumed, counted in chars like error indices.
    pub symbols: usize,
    /// Turtle state after the last symbol.
    pub turtle: TurtleState,
    pub leaves: usize,
    pub branches: usize,
}

/// Interprets plant symbol strings into mesh geometry.
#[derive(Clone, Debug, Default)]
pub struct PlantInterpreter {
    config: TurtleConfig,
}

impl PlantInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Interprets `symbols` starting from the configured initial state.
    pub fn interpret<A: AngleSource + ?Sized>(
        &self,
        symbols: &str,
        angles: &mut A,
        mesh: &mut MeshAccumulator,
    ) -> Result<Interpretation, PlantError> {
        self.interpret_from(symbols, self.config.initial, angles, mesh)
    }

    /// Interprets `symbols` starting from `start`.
    ///
    /// # Symbols
    ///
    /// `0` draws a leaf and `1` a branch segment, each moving the turtle to the
    /// returned tip. `/` `\` turn about Z, `+` `-` `^` `&` turn about X, each by
    /// a fresh magnitude from `angles`. `.` thins the radius. `[` saves the
    /// full state and `]` restores it. Everything else is ignored.
    ///
    /// # Errors
    ///
    /// A `]` with nothing saved returns [`PlantError::UnbalancedBracket`]; a `[`
    /// beyond `max_stack_depth` returns [`PlantError::StackDepthExceeded`].
    /// Either way the remaining symbols are skipped; geometry already emitted
    /// stays in `mesh`.
    pub fn interpret_from<A: AngleSource + ?Sized>(
        &self,
        symbols: &str,
        start: TurtleState,
        angles: &mut A,
        mesh: &mut MeshAccumulator,
    ) -> Result<Interpretation, PlantError> {
        let mut turtle = start;
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut leaves = 0;
        let mut branches = 0;
        let mut consumed = 0;

        let leaf = Leaf {
            height: self.config.leaf_height,
            tag: TextureTag::Default,
        };

        for (index, c) in symbols.chars().enumerate() {
            consumed = index + 1;
            match TurtleOp::from_symbol(c) {
                TurtleOp::Leaf => {
                    turtle.position = leaf.emit(mesh, turtle.position, turtle.angles);
                    leaves += 1;
                }
                TurtleOp::Branch => {
                    let segment = Cylinder {
                        height: self.config.branch_length,
                        radius: turtle.radius,
                        tag: TextureTag::Bottom,
                        draw: true,
                    };
                    turtle.position = segment.emit(mesh, turtle.position, turtle.angles);
                    branches += 1;
                }
                TurtleOp::Roll(s) => turtle.turn_z(angles.next_delta() * s),
                TurtleOp::Pitch(s) | TurtleOp::Tilt(s) => turtle.turn_x(angles.next_delta() * s),
                TurtleOp::Shrink => turtle.shrink(self.config.shrink_factor),
                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        let err = PlantError::StackDepthExceeded {
                            index,
                            limit: self.config.max_stack_depth,
                        };
                        tracing::warn!(%err, "interpretation aborted");
                        return Err(err);
                    }
                    stack.push(turtle);
                }
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => {
                        let err = PlantError::UnbalancedBracket { index };
                        tracing::warn!(%err, "interpretation aborted");
                        return Err(err);
                    }
                },
                TurtleOp::Ignore => {}
            }
        }

        tracing::debug!(
            symbols = consumed,
            leaves,
            branches,
            quads = mesh.quad_count(),
            unclosed = stack.len(),
            "interpretation complete"
        );

        Ok(Interpretation {
            symbols: consumed,
            turtle,
            leaves,
            branches,
        })
    }
}
