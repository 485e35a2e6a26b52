//! # lsys-plant
//!
//! Grows a potted plant from an L-System and turns it into a textured
//! triangle mesh ready for upload.
//!
//! The pipeline runs once, front to back: [`GrammarConfig::expand`] rewrites
//! the axiom, [`PlantInterpreter`] walks the result with a turtle and calls
//! the [`builders`] for every branch and leaf, and [`MeshAccumulator::finish`]
//! hands the buffers to a [`Renderer`]. Only the [`ModelTransform`] changes
//! after that.

pub mod builders;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod math;
pub mod mesh;
pub mod plant;
pub mod random;
pub mod renderer;
pub mod transform;
pub mod turtle;

pub use builders::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use mesh::*;
pub use plant::*;
pub use random::*;
pub use renderer::*;
pub use transform::*;
pub use turtle::*;
