use super::IOArgs;
use clap::Subcommand;

mod export;
mod palette;
mod snapshot;
mod solve;

pub use export::ExportFormat;
pub use palette::palette;
pub use snapshot::{show, sync};
pub use solve::SolverLib;

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize the allocation and report it with chart colors
    Solve {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific optimizer (defaults to the configured one)
        #[arg(short, long)]
        lib: Option<SolverLib>,
    },

    /// Construct the allocation linear program and export to a standard format
    Export {
        #[command(flatten)]
        io: IOArgs,

        /// The file format to use (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Print the first `count` palette colors, one per line
    Palette {
        /// The number of colors to generate
        count: usize,
    },

    /// Store the constraint table as a snapshot and print its id
    Sync {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Print a stored snapshot
    Show {
        /// The snapshot id returned by `sync`
        id: i64,
    },
}
