pub(crate) mod describe;
pub(crate) mod hetero;
pub(crate) mod plot;

use tracing::{error, warn};

/// Route pdbtbx parse diagnostics through the logger by severity.
pub(crate) fn log_pdb_warnings(warnings: &[pdbtbx::PDBError]) {
    for e in warnings {
        match e.level() {
            pdbtbx::ErrorLevel::BreakingError => error!("{e}"),
            pdbtbx::ErrorLevel::InvalidatingError => error!("{e}"),
            _ => warn!("{e}"),
        }
    }
}
