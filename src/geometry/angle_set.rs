/// The angles of one node, in fan order, always summing to a full turn.
///
/// The first angles partition the node's span. When that span is less than
/// 360°, one more closing angle covers the open side of the node (the side
/// facing the wall or the neighbouring structure).
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSet {
    start_angle: f64,
    angles: Vec<f64>,
    has_closing: bool,
}

impl AngleSet {
    /// Builds a set from the angles partitioning `span`, appending the
    /// closing angle `360 - span` when the span is short of a full turn.
    #[must_use]
    pub fn from_partition(start_angle: f64, mut angles: Vec<f64>, span: f64) -> Self {
        let has_closing = span < 360.0;
        if has_closing {
            angles.push(360.0 - span);
        }
        Self {
            start_angle,
            angles,
            has_closing,
        }
    }

    /// Angle (degrees) at which the first shelf of the fan is placed.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Every angle, the closing angle included.
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Only the angles partitioning the node's span.
    #[must_use]
    pub fn partitioned(&self) -> &[f64] {
        let n = self.angles.len() - usize::from(self.has_closing);
        &self.angles[..n]
    }

    /// The closing angle, if the span was short of a full turn.
    #[must_use]
    pub fn closing_angle(&self) -> Option<f64> {
        if self.has_closing {
            self.angles.last().copied()
        } else {
            None
        }
    }

    /// Number of angles, the closing angle included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Returns `true` if the set holds no angle at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Angle preceding index `i`, wrapping from the first to the last.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn previous(&self, i: usize) -> Option<f64> {
        let n = self.angles.len();
        if n == 0 {
            return None;
        }
        self.angles.get((i % n + n - 1) % n).copied()
    }

    /// Each angle paired with the one before it, the first paired with the last.
    pub fn with_previous(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let wrapped = self.angles.last().copied().into_iter();
        self.angles
            .iter()
            .copied()
            .zip(wrapped.chain(self.angles.iter().copied()))
    }

    /// Sum of every angle.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.angles.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_span_gets_closing_angle() {
        let set = AngleSet::from_partition(40.0, vec![50.0, 45.0], 95.0);
        assert_eq!(set.angles(), &[50.0, 45.0, 265.0]);
        assert_eq!(set.partitioned(), &[50.0, 45.0]);
        assert_eq!(set.closing_angle(), Some(265.0));
        assert!((set.total() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn full_turn_has_no_closing_angle() {
        let set = AngleSet::from_partition(0.0, vec![120.0; 3], 360.0);
        assert_eq!(set.len(), 3);
        assert_eq!(set.closing_angle(), None);
        assert_eq!(set.partitioned().len(), 3);
    }

    #[test]
    fn previous_wraps_around() {
        let set = AngleSet::from_partition(0.0, vec![30.0, 60.0], 90.0);
        assert_eq!(set.previous(0), Some(270.0));
        assert_eq!(set.previous(1), Some(30.0));
        assert_eq!(set.previous(2), Some(60.0));
        assert_eq!(
            set.with_previous().collect::<Vec<_>>(),
            [(30.0, 270.0), (60.0, 30.0), (270.0, 60.0)]
        );
    }

    #[test]
    fn empty_set_has_no_neighbours() {
        let set = AngleSet::from_partition(90.0, Vec::new(), 360.0);
        assert!(set.is_empty());
        assert_eq!(set.previous(0), None);
        assert_eq!(set.with_previous().count(), 0);
        assert!(set.partitioned().is_empty());
    }

    #[test]
    fn collapsed_span_closes_the_whole_turn() {
        let set = AngleSet::from_partition(225.0, Vec::new(), 0.0);
        assert_eq!(set.angles(), &[360.0]);
        assert!(set.partitioned().is_empty());
        assert_eq!(set.previous(0), Some(360.0));
    }
}
