pub mod fingerprint;
pub mod partition;
pub mod types;

pub use fingerprint::layout_fingerprint;
pub use partition::rng::{RandomSource, SeededSource};
pub use partition::{PartitionRun, SplitPolicy, StepEvent, partition};
pub use types::{PartitionError, Region};
