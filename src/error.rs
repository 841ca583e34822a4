use thiserror::Error;

use crate::geometry::NodeType;

/// Top-level error type for shelf generation.
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A shelf inside a node could not be built.
    #[error("shelf {index}: {source}")]
    Shelf {
        index: usize,
        #[source]
        source: Box<ShelfError>,
    },

    /// A node inside a unit could not be assembled.
    #[error("node {index} ({node_type:?}): {source}")]
    Node {
        index: usize,
        node_type: NodeType,
        #[source]
        source: Box<ShelfError>,
    },
}

impl ShelfError {
    /// Wraps `self` with the index of the shelf that failed.
    #[must_use]
    pub fn at_shelf(self, index: usize) -> Self {
        Self::Shelf {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps `self` with the index and type of the node that failed.
    #[must_use]
    pub fn at_node(self, index: usize, node_type: NodeType) -> Self {
        Self::Node {
            index,
            node_type,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, stripping node/shelf context.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Shelf { source, .. } | Self::Node { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns `true` if the root cause is an invalid style configuration.
    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.root(), Self::Config(_))
    }

    /// Returns `true` if the root cause is degenerate shelf geometry.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self.root(), Self::Geometry(_))
    }

    /// Index of the shelf that failed, if the error carries one.
    #[must_use]
    pub fn shelf_index(&self) -> Option<usize> {
        match self {
            Self::Shelf { index, .. } => Some(*index),
            Self::Node { source, .. } => source.shelf_index(),
            _ => None,
        }
    }

    /// Index of the node that failed, if the error carries one.
    #[must_use]
    pub fn node_index(&self) -> Option<usize> {
        match self {
            Self::Node { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Errors related to the style configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed style sheet: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when shelf parameters describe a degenerate solid.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("shelf length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("shelf thickness must be positive, got {0}")]
    NonPositiveThickness(f64),

    #[error("{name} must not be negative, got {value}")]
    NegativeDepth { name: &'static str, value: f64 },

    #[error("corner angle {corner:?} = {degrees}° has no defined miter")]
    DegenerateAngle {
        corner: crate::geometry::Corner,
        degrees: f64,
    },

    #[error("face {face} has collapsed and has no normal")]
    DegenerateFace { face: usize },
}

/// Convenience type alias for results using [`ShelfError`].
pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_strips_context() {
        let err = ShelfError::from(GeometryError::NonPositiveLength(0.0))
            .at_shelf(3)
            .at_node(1, NodeType::Bottom);

        assert!(err.is_invalid_geometry());
        assert!(!err.is_invalid_config());
        assert_eq!(err.shelf_index(), Some(3));
        assert_eq!(err.node_index(), Some(1));
        assert!(matches!(
            err.root(),
            ShelfError::Geometry(GeometryError::NonPositiveLength(_))
        ));
    }

    #[test]
    fn message_names_stage() {
        let err = ShelfError::from(GeometryError::NonPositiveLength(-1.0))
            .at_shelf(2)
            .at_node(0, NodeType::BottomLeft);
        let text = err.to_string();
        assert!(text.contains("node 0 (BottomLeft)"), "{text}");
        assert!(text.contains("shelf 2"), "{text}");
    }
}
