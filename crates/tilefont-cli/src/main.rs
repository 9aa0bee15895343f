use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilefont::{collect_tiles, BuildConfig, Font, Tile, TileBlock};

use crate::console::{glyph_listing, palette_listing};
mod console;

#[derive(Parser)]
#[command(name = "tilefont", about = "Tile font compiler for the clock firmware")]
struct Cli {
    /// Build root; font sources and outputs are relative to it
    #[arg(short = 'C', long, default_value = ".", global = true)]
    dir: PathBuf,
    /// Show per tile and per glyph details
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Compile the fonts into tiles.bin, digits.bin, blockfont.bin and blockfontmap.bin
    Build {
        #[arg(long)]
        block_font: Option<PathBuf>,
        #[arg(long)]
        digit_font: Option<PathBuf>,
    },
    /// Print the tile palette without writing anything
    Tiles,
    /// Inspect a single font file
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let mut config = BuildConfig::with_root(&cli.dir);
    log::debug!("build root {}", config.root.display());
    match cli.command.unwrap_or(Cmd::Build {
        block_font: None,
        digit_font: None,
    }) {
        Cmd::Build {
            block_font,
            digit_font,
        } => {
            if let Some(path) = block_font {
                config.block_font = path;
            }
            if let Some(path) = digit_font {
                config.digit_font = path;
            }
            let artifacts = tilefont::run(&config)?;
            println!("{}", palette_listing(artifacts.tiles.tiles()));
        }
        Cmd::Tiles => {
            let block_font = Font::load(&config.resolve(&config.block_font))?;
            let digit_font = Font::load(&config.resolve(&config.digit_font))?;
            // listed before the budget check
            let set = collect_tiles([&block_font, &digit_font]);
            let tiles: Vec<Tile> = set.iter().collect();
            println!("{}", palette_listing(&tiles));
            TileBlock::from_set(&set)?;
        }
        Cmd::Inspect { font } => {
            let f = Font::load(&config.resolve(&font))?;
            println!("Font: {}", f.name);
            println!("  Defined characters: {}", f.glyph_count());
            if cli.verbose {
                print!("{}", glyph_listing(&f));
            }
        }
    }
    Ok(())
}
