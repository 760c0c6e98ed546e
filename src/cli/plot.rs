use crate::cli::log_pdb_warnings;
use clap::Parser;
use pdbsketch::{load_model, render_projections};
use std::path::{Path, PathBuf};
use tracing::{error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF file to be analyzed
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the PNG image to write
    #[arg(short, long)]
    output: PathBuf,

    /// Figure title; defaults to the input file stem
    #[arg(long)]
    title: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1600)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    // Make sure `input` exists
    let input_path = match Path::new(&args.input).canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to retrieve input file: {}", e);
            return;
        }
    };
    let input_file: String = input_path.to_str().unwrap().parse().unwrap();

    let (pdb, pdb_warnings) = match load_model(&input_file) {
        Ok(res) => res,
        Err(errs) => {
            for e in &errs {
                error!("{e}");
            }
            return;
        }
    };
    log_pdb_warnings(&pdb_warnings);

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| {
            input_path
                .file_stem()
                .unwrap()
                .to_string_lossy()
                .to_string()
        });

    // The bitmap backend does not create intermediate directories
    if let Some(parent) = args.output.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match render_projections(&pdb, &title, &args.output, (args.width, args.height)) {
        Ok(()) => info!("Saved projection figure to {}", args.output.display()),
        Err(e) => error!("Failed to render figure: {}", e),
    }
}
