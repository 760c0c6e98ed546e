use crate::cli::log_pdb_warnings;
use clap::Parser;
use pdbsketch::{hetero_residues, load_model, water_count, write_df_to_file, DataFrameFileType};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF file(s) to be analyzed
    input: Vec<PathBuf>,

    /// Optional directory for saving the hetero residue tables
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file type
    #[arg(short = 't', long, default_value_t = DataFrameFileType::Csv)]
    output_format: DataFrameFileType,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    for f in &args.input {
        let input_path = match Path::new(f).canonicalize() {
            Ok(path) => path,
            Err(e) => {
                error!("Failed to retrieve input file {}: {}", f.display(), e);
                continue;
            }
        };
        let input_file: String = input_path.to_str().unwrap().parse().unwrap();

        let (pdb, pdb_warnings) = match load_model(&input_file) {
            Ok(res) => res,
            Err(errs) => {
                for e in &errs {
                    error!("{e}");
                }
                continue;
            }
        };
        log_pdb_warnings(&pdb_warnings);

        let mut df = hetero_residues(&pdb);
        println!("File: {input_file}");
        println!("{df}");
        info!(
            "{} non-standard residue(s), {} water(s)",
            df.height(),
            water_count(&pdb)
        );

        if let Some(outdir) = &args.output {
            let _ = std::fs::create_dir_all(outdir);
            let stem = input_path.file_stem().unwrap().to_str().unwrap();
            let output_file = outdir.join(format!("{stem}_hetero"));
            write_df_to_file(&mut df, &output_file, args.output_format);
            debug!("Saved hetero residues to {}", output_file.display());
        }
    }
}
