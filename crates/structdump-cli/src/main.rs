mod config;
mod sink;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use structdump::{memory::MemoryImage, traversal::dump};

use crate::config::{Config, parse_address};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file declaring the struct fields and the traversal.
    #[arg(short, long, required = true)]
    config: PathBuf,

    /// Raw memory dump to read structs from.
    #[arg(short, long, required = true)]
    image: PathBuf,

    /// Address of the first byte of the image (hex with 0x, or decimal).
    #[arg(long, default_value = "0", value_parser = parse_address)]
    image_base: u64,

    /// Write the report to this file, overriding the config.
    #[arg(short, long, conflicts_with = "console")]
    output: Option<PathBuf>,

    /// Print the report to stdout, overriding the config.
    #[arg(long)]
    console: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = Config::load(&args.config)?;
    let layout = config.layout().context("invalid struct layout")?;
    let plan = config.plan().context("invalid traversal")?;
    plan.validate(layout.total_size()).context("invalid traversal")?;

    let sink = config.resolve_sink(args.output, args.console)?;

    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image {}", args.image.display()))?;
    let memory = MemoryImage::new(args.image_base, bytes);
    log::debug!(
        "image {} mapped at {:#010x}..{:#010x}",
        args.image.display(),
        memory.base(),
        memory.end()
    );

    log::info!("detected struct size: {} bytes", layout.total_size());
    log::debug!("{} structs to read", plan.struct_count());

    let report = dump(&memory, &layout, &plan, config.dump_options())?;
    let written = sink.emit(report.text_lines())?;

    log::info!("dump complete: {} structs, {} lines", report.structs, written);

    Ok(())
}
