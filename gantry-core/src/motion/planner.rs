//! Planner seam and a fixed-size block queue
//!
//! Queued jogs go through the same planner as programmed motion. The
//! [`Planner`] trait is what the jog path needs from it; [`BlockQueue`] is a
//! ring of planned lines with no acceleration planning, enough for a host
//! that hands blocks straight to a step scheduler.

use heapless::Deque;

use super::axis::{round_to_steps, Axis, AxisSteps, AxisVector, N_AXIS};
use super::params::{ConditionFlags, MotionParameters};
use crate::config::Settings;

/// Default planner ring size
pub const BLOCK_BUFFER_SIZE: usize = 16;

/// A line queued for execution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlanBlock {
    /// Absolute target in steps
    pub target_steps: AxisSteps,
    /// Steps of the dominant axis; the block's length in step events
    pub step_event_count: u32,
    /// Feed rate in units per minute
    pub feed_rate: f32,
    /// Condition flags copied from the motion parameters
    pub condition: ConditionFlags,
    /// Source line number
    pub line_number: Option<i32>,
}

/// What happened to a line handed to the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanOutcome {
    /// Line appended to the buffer
    Queued,
    /// Target equals the planned position; nothing to execute
    EmptyBlock,
    /// No free slot; line dropped
    BufferFull,
}

/// Motion planner as seen by the jog path
pub trait Planner {
    /// Append a line to `target` with the given motion parameters
    fn buffer_line(&mut self, target: &AxisVector, params: &MotionParameters) -> PlanOutcome;

    /// Block the step scheduler would execute next, if any
    fn current_block(&self) -> Option<&PlanBlock>;
}

/// Fixed-capacity FIFO of planned lines
#[derive(Debug, Clone)]
pub struct BlockQueue<const N: usize = BLOCK_BUFFER_SIZE> {
    blocks: Deque<PlanBlock, N>,
    /// Position at the end of the last queued block
    position: AxisSteps,
    steps_per_unit: [f32; N_AXIS],
}

impl<const N: usize> BlockQueue<N> {
    /// Create an empty queue planning from step zero
    pub fn new(settings: &Settings) -> Self {
        Self {
            blocks: Deque::new(),
            position: [0; N_AXIS],
            steps_per_unit: settings.steps_per_unit(),
        }
    }

    /// Reset the planned position, e.g. from the machine position after a stop
    pub fn sync_position(&mut self, position: &AxisSteps) {
        self.position = *position;
    }

    /// Position at the end of the queued motion
    pub fn position(&self) -> AxisSteps {
        self.position
    }

    /// Drop the block at the head once the scheduler has finished it
    pub fn discard_current_block(&mut self) -> Option<PlanBlock> {
        self.blocks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.is_full()
    }

    /// Remove every queued block
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl<const N: usize> Planner for BlockQueue<N> {
    fn buffer_line(&mut self, target: &AxisVector, params: &MotionParameters) -> PlanOutcome {
        let mut target_steps = [0; N_AXIS];
        let mut step_event_count = 0;
        for axis in Axis::ALL {
            let i = axis.index();
            target_steps[i] = round_to_steps(target[i], self.steps_per_unit[i]);
            let delta = target_steps[i].abs_diff(self.position[i]);
            step_event_count = step_event_count.max(delta);
        }

        if step_event_count == 0 {
            trace!("planner: empty block dropped");
            return PlanOutcome::EmptyBlock;
        }

        let block = PlanBlock {
            target_steps,
            step_event_count,
            feed_rate: params.feed_rate,
            condition: params.condition,
            line_number: params.line_number,
        };

        if self.blocks.push_back(block).is_err() {
            warn!("planner: buffer full, line dropped");
            return PlanOutcome::BufferFull;
        }

        self.position = target_steps;
        PlanOutcome::Queued
    }

    fn current_block(&self) -> Option<&PlanBlock> {
        self.blocks.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisSettings;

    fn settings(steps_per_unit: f32) -> Settings {
        Settings {
            axes: [AxisSettings {
                steps_per_unit,
                ..Default::default()
            }; N_AXIS],
            ..Default::default()
        }
    }

    fn jog_params(feed_rate: f32) -> MotionParameters {
        MotionParameters {
            feed_rate,
            condition: ConditionFlags::NO_FEED_OVERRIDE,
            ..Default::default()
        }
    }

    #[test]
    fn test_queue_line() {
        let mut queue: BlockQueue = BlockQueue::new(&settings(80.0));
        assert!(queue.current_block().is_none());

        let outcome = queue.buffer_line(&[10.0, -2.5, 0.0], &jog_params(600.0));
        assert_eq!(outcome, PlanOutcome::Queued);

        let block = queue.current_block().unwrap();
        assert_eq!(block.target_steps, [800, -200, 0]);
        assert_eq!(block.step_event_count, 800);
        assert_eq!(block.feed_rate, 600.0);
        assert!(block.condition.contains(ConditionFlags::NO_FEED_OVERRIDE));
        assert_eq!(queue.position(), [800, -200, 0]);
    }

    #[test]
    fn test_zero_length_line_dropped() {
        let mut queue: BlockQueue = BlockQueue::new(&settings(80.0));
        queue.sync_position(&[800, 0, 0]);

        let outcome = queue.buffer_line(&[10.0, 0.0, 0.0], &jog_params(600.0));
        assert_eq!(outcome, PlanOutcome::EmptyBlock);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sub_step_line_dropped() {
        let mut queue: BlockQueue = BlockQueue::new(&settings(4.0));
        let outcome = queue.buffer_line(&[0.1, 0.0, 0.0], &jog_params(100.0));
        assert_eq!(outcome, PlanOutcome::EmptyBlock);
    }

    #[test]
    fn test_full_queue_drops_line() {
        let mut queue: BlockQueue<2> = BlockQueue::new(&settings(1.0));
        assert_eq!(queue.buffer_line(&[1.0, 0.0, 0.0], &jog_params(100.0)), PlanOutcome::Queued);
        assert_eq!(queue.buffer_line(&[2.0, 0.0, 0.0], &jog_params(100.0)), PlanOutcome::Queued);
        assert!(queue.is_full());

        assert_eq!(
            queue.buffer_line(&[3.0, 0.0, 0.0], &jog_params(100.0)),
            PlanOutcome::BufferFull
        );
        // Planned position does not advance past a dropped line
        assert_eq!(queue.position(), [2, 0, 0]);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: BlockQueue<4> = BlockQueue::new(&settings(1.0));
        queue.buffer_line(&[1.0, 0.0, 0.0], &jog_params(100.0));
        queue.buffer_line(&[1.0, 5.0, 0.0], &jog_params(200.0));

        assert_eq!(queue.current_block().unwrap().feed_rate, 100.0);
        queue.discard_current_block();
        let next = queue.current_block().unwrap();
        assert_eq!(next.feed_rate, 200.0);
        assert_eq!(next.step_event_count, 5);

        queue.clear();
        assert!(queue.current_block().is_none());
        assert_eq!(queue.len(), 0);
    }
}
