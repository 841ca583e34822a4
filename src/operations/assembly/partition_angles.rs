use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::{AngleSet, NodeType};
use crate::math::{sample_quantized, TOLERANCE};
use crate::style::StyleConfig;

/// Randomly splits a node's span into the angles between its shelves.
///
/// Both ends of the node type's span are trimmed by a random amount, then
/// angles drawn from `[minAngle, maxAngle]` are laid end to end until the
/// span is used up. A draw that would leave less than `minAngle` uncovered
/// is replaced by the rest of the span, which ends the partition; a span
/// narrower than `minAngle` therefore holds a single angle. Trims that meet
/// or cross leave an empty span and no partitioned angle at all. The
/// returned set always sums to 360°; see [`AngleSet`].
pub struct AnglePartitioner<'a> {
    node_type: NodeType,
    style: &'a StyleConfig,
}

impl<'a> AnglePartitioner<'a> {
    /// Creates a new `AnglePartitioner` operation.
    #[must_use]
    pub fn new(node_type: NodeType, style: &'a StyleConfig) -> Self {
        Self { node_type, style }
    }

    /// Executes the partition, drawing every random value from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError`] if the style's angle bounds are
    /// inverted, out of `(0, 360]`, or the angle increment is not positive.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AngleSet> {
        self.style.validate_angles()?;

        let min_angle = self.style.min_angle;
        let max_angle = self.style.max_angle;
        let increment = self.style.angle_increment;
        let span = self.node_type.span();

        let start = span.start + sample_quantized(rng, span.start_trim.0, span.start_trim.1, increment);
        let drawn_end = span.end - sample_quantized(rng, span.end_trim.0, span.end_trim.1, increment);

        // trims on a 90° span can meet or cross, leaving nothing to partition
        let end = drawn_end.max(start);
        if drawn_end < start {
            debug!(
                node_type = ?self.node_type,
                start,
                end = drawn_end,
                "trims crossed, node span collapsed"
            );
        }

        let mut angles = Vec::new();
        let mut current = start;
        while end - current > TOLERANCE {
            let remaining = end - current;
            let angle = sample_quantized(rng, min_angle, max_angle, increment);
            if angle > remaining - min_angle {
                trace!(angle, current, remaining, "partition step clamped to span");
                angles.push(remaining);
                break;
            }
            trace!(angle, current, "partition step");
            angles.push(angle);
            current += angle;
        }

        let set = AngleSet::from_partition(start, angles, end - start);
        debug!(
            node_type = ?self.node_type,
            start,
            end,
            angles = ?set.angles(),
            "partitioned node"
        );
        Ok(set)
    }
}
