//! Binary space partitioning domain split into coherent submodules.

pub mod policy;
pub mod rng;

mod splitter;

pub use policy::SplitPolicy;
pub use splitter::{PartitionRun, StepEvent};

use crate::types::{PartitionError, Region};

use self::rng::RandomSource;

/// Partition `root` into leaf rooms no smaller than the given minimums.
///
/// Rooms come back in breadth-first discovery order. Sub-minimum remainders
/// produced by unlucky splits are dropped, so the union of the rooms can
/// undercover `root`, and a root smaller than the minimums yields an empty
/// list rather than an error.
pub fn partition(
    root: Region,
    min_width: i32,
    min_height: i32,
    policy: SplitPolicy,
    rng: &mut impl RandomSource,
) -> Result<Vec<Region>, PartitionError> {
    let mut run = PartitionRun::new(root, min_width, min_height, policy)?;
    run.run_to_end(rng);
    Ok(run.into_rooms())
}

#[cfg(test)]
mod tests {
    use super::rng::SeededSource;
    use super::*;

    #[test]
    fn partition_matches_a_manually_driven_run() {
        let root = Region::new(0, 0, 32, 24);

        let from_helper =
            partition(root, 4, 4, SplitPolicy::Random, &mut SeededSource::from_seed(9))
                .expect("valid arguments");

        let mut run =
            PartitionRun::new(root, 4, 4, SplitPolicy::Random).expect("valid arguments");
        run.run_to_end(&mut SeededSource::from_seed(9));

        assert_eq!(from_helper, run.into_rooms());
    }
}
