/// Where a node sits in a shelf unit, which decides the span its shelves fan over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Bottom,
    Top,
    Left,
    Right,
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    Inner,
}

/// Angular span of a node type, before random trimming.
///
/// The fan starts at `start + trim` with the trim drawn from `start_trim`, and
/// ends at `end - trim` with the trim drawn from `end_trim`. All values are in
/// degrees; trim ranges are `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSpan {
    pub start: f64,
    pub end: f64,
    pub start_trim: (f64, f64),
    pub end_trim: (f64, f64),
}

impl NodeType {
    /// Every node type.
    pub const ALL: [Self; 9] = [
        Self::Bottom,
        Self::Top,
        Self::Left,
        Self::Right,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopRight,
        Self::TopLeft,
        Self::Inner,
    ];

    /// Looks up the fixed span of this node type.
    #[must_use]
    pub fn span(self) -> NodeSpan {
        let (start, end, start_trim, end_trim) = match self {
            Self::Bottom => (0.0, 180.0, (30.0, 50.0), (30.0, 50.0)),
            Self::Top => (180.0, 360.0, (10.0, 30.0), (10.0, 30.0)),
            Self::Right => (90.0, 270.0, (20.0, 50.0), (20.0, 50.0)),
            Self::Left => (270.0, 450.0, (20.0, 50.0), (20.0, 50.0)),
            // corners abut a wall on one side, so that side barely moves
            Self::BottomRight => (90.0, 180.0, (-10.0, 10.0), (20.0, 40.0)),
            Self::BottomLeft => (0.0, 90.0, (20.0, 40.0), (-10.0, 10.0)),
            Self::TopRight => (180.0, 270.0, (20.0, 50.0), (20.0, 50.0)),
            Self::TopLeft => (270.0, 360.0, (20.0, 50.0), (20.0, 50.0)),
            Self::Inner => (0.0, 360.0, (0.0, 0.0), (0.0, 0.0)),
        };
        NodeSpan {
            start,
            end,
            start_trim,
            end_trim,
        }
    }
}
