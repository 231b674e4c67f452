//! Queue-driven binary space partitioning.

use std::collections::VecDeque;

use crate::types::{PartitionError, Region};

use super::policy::{AxisChooser, AxisPreference, SplitPolicy};
use super::rng::RandomSource;

/// What a single partition step did with the region it dequeued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The region was split; both children went back on the queue.
    Split { parent: Region, first: Region, second: Region },
    /// The region became a leaf room.
    Accepted(Region),
    /// The region fell below a minimum and was dropped.
    Discarded(Region),
}

/// One in-flight partition of a root region.
///
/// The work queue, room list, and policy state are owned by the run.
/// Callers that want paced output (one split per animation frame, say)
/// drive [`step`](Self::step) themselves; everyone else goes through
/// [`partition`](crate::partition::partition).
#[derive(Clone, Debug)]
pub struct PartitionRun {
    queue: VecDeque<Region>,
    rooms: Vec<Region>,
    min_width: i32,
    min_height: i32,
    chooser: AxisChooser,
    splits: u32,
}

impl PartitionRun {
    pub fn new(
        root: Region,
        min_width: i32,
        min_height: i32,
        policy: SplitPolicy,
    ) -> Result<Self, PartitionError> {
        if min_width <= 0 || min_height <= 0 {
            return Err(PartitionError::InvalidArgument {
                message: format!("minimum room size {min_width}x{min_height} must be positive"),
            });
        }
        if root.width <= 0 || root.height <= 0 {
            return Err(PartitionError::InvalidArgument {
                message: format!("root extent {}x{} must be positive", root.width, root.height),
            });
        }

        let mut queue = VecDeque::new();
        queue.push_back(root);
        Ok(Self {
            queue,
            rooms: Vec::new(),
            min_width,
            min_height,
            chooser: AxisChooser::new(policy),
            splits: 0,
        })
    }

    /// Process one queued region. Returns `None` once the queue is empty.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> Option<StepEvent> {
        let region = self.queue.pop_front()?;

        if region.height < self.min_height || region.width < self.min_width {
            return Some(StepEvent::Discarded(region));
        }

        let event = match self.chooser.next_preference(rng) {
            AxisPreference::HorizontalFirst => {
                if region.height >= self.min_height.saturating_mul(2) {
                    self.split_horizontally(region, rng)
                } else if region.width >= self.min_width.saturating_mul(2) {
                    self.split_vertically(region, rng)
                } else if region.width >= self.min_width && region.height >= self.min_height {
                    self.accept(region)
                } else {
                    // already filtered by the size gate
                    StepEvent::Discarded(region)
                }
            }
            AxisPreference::VerticalFirst => {
                if region.width >= self.min_width.saturating_mul(2) {
                    self.split_vertically(region, rng)
                } else if region.height >= self.min_height.saturating_mul(2) {
                    self.split_horizontally(region, rng)
                } else if region.width >= self.min_width && region.height >= self.min_height {
                    self.accept(region)
                } else {
                    StepEvent::Discarded(region)
                }
            }
        };
        Some(event)
    }

    /// Drain the queue to completion.
    pub fn run_to_end(&mut self, rng: &mut impl RandomSource) {
        while self.step(rng).is_some() {}
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Rooms accepted so far, in breadth-first discovery order.
    pub fn rooms(&self) -> &[Region] {
        &self.rooms
    }

    pub fn into_rooms(self) -> Vec<Region> {
        self.rooms
    }

    pub fn splits_performed(&self) -> u32 {
        self.splits
    }

    fn accept(&mut self, region: Region) -> StepEvent {
        self.rooms.push(region);
        StepEvent::Accepted(region)
    }

    fn split_horizontally(&mut self, region: Region, rng: &mut impl RandomSource) -> StepEvent {
        let offset = rng.offset_within(region.height);
        let first = Region::new(region.x, region.y, region.width, offset);
        let second =
            Region::new(region.x, region.y + offset, region.width, region.height - offset);
        self.enqueue_children(first, second);
        StepEvent::Split { parent: region, first, second }
    }

    fn split_vertically(&mut self, region: Region, rng: &mut impl RandomSource) -> StepEvent {
        let offset = rng.offset_within(region.width);
        let first = Region::new(region.x, region.y, offset, region.height);
        let second =
            Region::new(region.x + offset, region.y, region.width - offset, region.height);
        self.enqueue_children(first, second);
        StepEvent::Split { parent: region, first, second }
    }

    fn enqueue_children(&mut self, first: Region, second: Region) {
        self.queue.push_back(first);
        self.queue.push_back(second);
        self.splits += 1;
    }
}
