use crate::cli::log_pdb_warnings;
use clap::Parser;
use pdbsketch::{
    chain_summary, first_residue, get_sequences, load_model, write_df_to_file, DataFrameFileType,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF file(s) to be analyzed
    input: Vec<PathBuf>,

    /// Optional directory for saving the per-chain summary tables
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file type
    #[arg(short = 't', long, default_value_t = DataFrameFileType::Csv)]
    output_format: DataFrameFileType,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    for f in &args.input {
        // Make sure `input` exists
        let input_path = match Path::new(f).canonicalize() {
            Ok(path) => path,
            Err(e) => {
                error!("Failed to retrieve input file {}: {}", f.display(), e);
                continue;
            }
        };
        let input_file: String = input_path.to_str().unwrap().parse().unwrap();

        // Load file as complex structure
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

        for (chain_id, seq) in get_sequences(&pdb) {
            debug!("Chain {chain_id}: {seq}");
            if let Some(res) = first_residue(&pdb, &chain_id) {
                debug!(
                    "Chain {chain_id} starts at {} {}",
                    res.name().unwrap_or("?"),
                    res.serial_number()
                );
            }
        }

        let mut df = chain_summary(&pdb);
        println!("File: {input_file}");
        println!("{df}");

        // Save one table per input file, named after its stem
        if let Some(outdir) = &args.output {
            let _ = std::fs::create_dir_all(outdir);
            let stem = input_path.file_stem().unwrap().to_str().unwrap();
            let output_file = outdir.join(format!("{stem}_chains"));
            write_df_to_file(&mut df, &output_file, args.output_format);
            debug!("Saved chain summary to {}", output_file.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_covers_chain_peek_and_writes_summary() {
        let root = env!("CARGO_MANIFEST_DIR");
        let outdir = std::env::temp_dir().join("pdbsketch_describe_test");
        let args = Args {
            input: vec![PathBuf::from(format!("{root}/test-data/two_chain.pdb"))],
            output: Some(outdir.clone()),
            output_format: DataFrameFileType::Csv,
        };

        run(&args);

        let written = outdir.join("two_chain_chains.csv");
        let contents = std::fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("model,chain,residues,atoms"));
        let _ = std::fs::remove_dir_all(outdir);
    }
}
