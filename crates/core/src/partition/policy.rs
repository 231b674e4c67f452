//! Axis-selection policies for the splitter.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Which axis a candidate region is first evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AxisPreference {
    HorizontalFirst,
    VerticalFirst,
}

/// How the splitter picks the preferred split axis for each region that
/// passes the minimum-size gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitPolicy {
    /// One coin draw per gated region.
    Random,
    /// Flip the preferred axis on every gated region, starting horizontal.
    Alternating,
}

/// Per-run policy state. `Random` is stateless; `Alternating` carries the
/// flag it flips on every gated region, whether or not that region ends up
/// split.
#[derive(Clone, Debug)]
pub(super) struct AxisChooser {
    policy: SplitPolicy,
    prefer_horizontal: bool,
}

impl AxisChooser {
    pub(super) fn new(policy: SplitPolicy) -> Self {
        Self { policy, prefer_horizontal: true }
    }

    pub(super) fn next_preference(&mut self, rng: &mut impl RandomSource) -> AxisPreference {
        let horizontal = match self.policy {
            SplitPolicy::Random => rng.next_bool(),
            SplitPolicy::Alternating => {
                let current = self.prefer_horizontal;
                self.prefer_horizontal = !current;
                current
            }
        };
        if horizontal { AxisPreference::HorizontalFirst } else { AxisPreference::VerticalFirst }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Coin pinned to one value; panics if the offset draw is reached.
    struct PinnedCoin(bool);

    impl RandomSource for PinnedCoin {
        fn next_u64(&mut self) -> u64 {
            unreachable!("axis selection must not consume raw draws directly")
        }

        fn next_bool(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn random_policy_follows_the_coin() {
        let mut chooser = AxisChooser::new(SplitPolicy::Random);
        assert_eq!(chooser.next_preference(&mut PinnedCoin(true)), AxisPreference::HorizontalFirst);
        assert_eq!(chooser.next_preference(&mut PinnedCoin(false)), AxisPreference::VerticalFirst);
        assert_eq!(chooser.next_preference(&mut PinnedCoin(false)), AxisPreference::VerticalFirst);
    }

    #[test]
    fn alternating_policy_ignores_the_coin_and_flips() {
        let mut chooser = AxisChooser::new(SplitPolicy::Alternating);
        let mut coin = PinnedCoin(false);
        assert_eq!(chooser.next_preference(&mut coin), AxisPreference::HorizontalFirst);
        assert_eq!(chooser.next_preference(&mut coin), AxisPreference::VerticalFirst);
        assert_eq!(chooser.next_preference(&mut coin), AxisPreference::HorizontalFirst);
        assert_eq!(chooser.next_preference(&mut coin), AxisPreference::VerticalFirst);
    }
}
