use anyhow::Context;
use clap::Parser;
use lsys_plant::{
    HeadlessRenderer, Indices, PlantConfig, PlantViewer, TextureAtlas, generate_plant,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plant-mesh", about = "Grow an L-System potted plant and report its mesh")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON plant configuration; omitted fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grammar iterations (overrides the configuration)
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Seed for the turn angles (overrides the configuration)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keys to replay against the viewer, one frame per key
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Texture atlas size in pixels
    #[arg(long, default_value = "512")]
    atlas_size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<PlantConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlantConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.grammar.iterations = iterations;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tracing::info!(
        iterations = config.grammar.iterations,
        seed = ?config.seed,
        "growing plant"
    );

    let mut angles = config.angle_source();
    let mesh = generate_plant(&config, &mut angles)?;

    println!("vertices: {}", mesh.vertex_count());
    println!("uvs:      {}", mesh.uvs.len() / 2);
    println!(
        "indices:  {} ({})",
        mesh.indices.len(),
        match mesh.indices {
            Indices::U16(_) => "u16",
            Indices::U32(_) => "u32",
        }
    );

    let atlas = TextureAtlas::new(cli.atlas_size, cli.atlas_size)?;
    let mut viewer = PlantViewer::new(HeadlessRenderer::new(), &mesh, &atlas)?;
    println!("{}", viewer.draw()?);
    for key in cli.keys.chars() {
        println!("{}", viewer.handle_key(key)?);
    }

    tracing::info!(frames = viewer.renderer().frames(), "done");
    Ok(())
}
