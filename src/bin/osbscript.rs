use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "osbscript", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an .osb file from a JSON scene description.
    Build(BuildArgs),
    /// Generate a rain effect as an .osb file.
    Rain(RainArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output .osb path.
    #[arg(long)]
    out: PathBuf,

    /// Create missing parent directories of the output path.
    #[arg(long)]
    create_dirs: bool,
}

#[derive(Parser, Debug)]
struct RainArgs {
    /// Output .osb path.
    #[arg(long)]
    out: PathBuf,

    /// Drop image, relative to the beatmap folder.
    #[arg(long)]
    file: String,

    /// Time the rain starts, in milliseconds.
    #[arg(long, allow_hyphen_values = true)]
    start: i32,

    /// Time the rain ends, in milliseconds.
    #[arg(long, allow_hyphen_values = true)]
    end: i32,

    /// Number of drops.
    #[arg(long, default_value_t = 75)]
    drops: u32,

    /// Fall time of the nearest drops, in milliseconds.
    #[arg(long, default_value_t = 500)]
    fall_time: i32,

    /// Seed for drop placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Create missing parent directories of the output path.
    #[arg(long)]
    create_dirs: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Rain(args) => cmd_rain(args),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let scene = osbscript::Scene::load(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let sb = scene.build().with_context(|| "build storyboard from scene")?;

    let opts = osbscript::CompileOpts {
        create_dirs: args.create_dirs,
    };
    sb.compile_with(&args.out, opts)
        .with_context(|| format!("write storyboard '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_rain(args: RainArgs) -> anyhow::Result<()> {
    let rain = osbscript::Rain {
        file: args.file,
        drop_count: args.drops,
        fall_time: args.fall_time,
        seed: args.seed,
    };

    let mut sb = osbscript::Storyboard::new();
    rain.generate(
        &mut sb,
        osbscript::TimeMs(args.start),
        osbscript::TimeMs(args.end),
    )
    .with_context(|| "generate rain")?;

    let opts = osbscript::CompileOpts {
        create_dirs: args.create_dirs,
    };
    sb.compile_with(&args.out, opts)
        .with_context(|| format!("write storyboard '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
