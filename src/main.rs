use {
  anyhow::{Context, Result},
  clap::Parser,
  grid_field::{
    config::Preset,
    drawing,
    error,
    noise::PerlinSampler
  },
  std::path::PathBuf
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
  /// Preset JSON, merged over the defaults
  #[arg(short, long)]
  preset: Option<PathBuf>,

  /// Output image
  #[arg(short, long, default_value = "out.png")]
  output: PathBuf,

  /// Loop phase of a still frame, in [0, 1)
  #[arg(short, long, default_value_t = 0.0)]
  time: f64,

  /// Override the noise pattern seed
  #[arg(long)]
  seed: Option<i64>,

  /// Render one animation loop into this directory instead of a single image
  #[arg(long, value_name = "DIR")]
  sequence: Option<PathBuf>,

  /// Print the effective preset and exit
  #[arg(long)]
  dump_preset: bool,
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  if let Err(e) = run(Args::parse()) {
    eprint!("{}", error::display(e.as_ref()));
    std::process::exit(1);
  }
}

fn run(args: Args) -> Result<()> {
  let mut preset = match &args.preset {
    Some(path) => Preset::load(path)
      .with_context(|| format!("loading preset {}", path.display()))?,
    None => Preset::default()
  };
  if let Some(seed) = args.seed {
    preset.pattern.seed = seed;
  }
  if args.dump_preset {
    println!("{}", preset.to_json()?);
    return Ok(());
  }

  log::info!(
    "{}x{} grid, {} symmetry, {} cells",
    preset.grid.cols, preset.grid.rows, preset.grid.symmetry, preset.grid.cell_count()
  );
  let noise = PerlinSampler::default();
  match &args.sequence {
    Some(dir) => {
      drawing::export_sequence(&preset, &noise, dir)
        .with_context(|| format!("exporting sequence to {}", dir.display()))?;
    }
    None => {
      drawing::export_png(&preset, &noise, args.time, &args.output)
        .with_context(|| format!("exporting {}", args.output.display()))?;
    }
  }
  Ok(())
}
