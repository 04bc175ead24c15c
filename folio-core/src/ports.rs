mod optimizer;
mod snapshot;

pub use optimizer::Optimizer;
pub use snapshot::SnapshotRepository;
