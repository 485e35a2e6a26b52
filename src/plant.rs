//! End-to-end plant generation and the interactive viewer loop.

use crate::builders::PotConfig;
use crate::error::{PlantError, RenderError};
use crate::grammar::GrammarConfig;
use crate::interpreter::PlantInterpreter;
use crate::mesh::{MeshAccumulator, MeshBuffers};
use crate::random::{AngleSource, RandomAngles};
use crate::renderer::{Renderer, TextureAtlas};
use crate::transform::{ModelTransform, TransformAction};
use crate::turtle::TurtleConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to grow one potted plant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub grammar: GrammarConfig,
    pub turtle: TurtleConfig,
    pub pot: PotConfig,
    /// Fixes the turn angles. `None` draws them from the clock.
    pub seed: Option<u64>,
}

impl PlantConfig {
    /// The angle source this configuration asks for.
    pub fn angle_source(&self) -> RandomAngles {
        match self.seed {
            Some(seed) => RandomAngles::with_seed(seed, self.turtle.angle_range),
            None => RandomAngles::from_entropy(self.turtle.angle_range),
        }
    }
}

/// Builds the pot, expands the grammar and interprets it into one mesh.
pub fn generate_plant<A: AngleSource + ?Sized>(
    config: &PlantConfig,
    angles: &mut A,
) -> Result<MeshBuffers, PlantError> {
    let mut mesh = MeshAccumulator::new();
    config.pot.emit(&mut mesh);

    let symbols = config.grammar.expand();
    let interpreter = PlantInterpreter::new(config.turtle.clone());
    interpreter.interpret(&symbols, angles, &mut mesh)?;

    tracing::debug!(
        vertices = mesh.vertex_count(),
        quads = mesh.quad_count(),
        "plant generated"
    );
    Ok(mesh.finish())
}

/// Owns a renderer and the model transform; redraws on every key.
pub struct PlantViewer<R: Renderer> {
    renderer: R,
    transform: ModelTransform,
}

impl<R: Renderer> PlantViewer<R> {
    /// Uploads `mesh` once and starts from the default transform.
    pub fn new(
        mut renderer: R,
        mesh: &MeshBuffers,
        atlas: &TextureAtlas,
    ) -> Result<Self, RenderError> {
        renderer.upload(mesh, atlas)?;
        Ok(Self {
            renderer,
            transform: ModelTransform::default(),
        })
    }

    pub fn transform(&self) -> &ModelTransform {
        &self.transform
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn draw(&mut self) -> Result<R::Frame, RenderError> {
        self.renderer.draw(&self.transform.matrix())
    }

    /// Applies the key's action, if any, then redraws.
    pub fn handle_key(&mut self, key: char) -> Result<R::Frame, RenderError> {
        if let Some(action) = TransformAction::from_key(key) {
            self.transform.apply(action);
        }
        self.draw()
    }
}
