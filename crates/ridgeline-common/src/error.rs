//! Error types for Ridgeline.

use thiserror::Error;

/// Top-level error type for Ridgeline operations.
#[derive(Debug, Error)]
pub enum RidgelineError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terrain generation and streaming errors
    #[error("Terrain error: {0}")]
    Terrain(#[from] TerrainError),

    /// Config file parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coordinate resolution errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Position is non-finite or maps outside the addressable chunk range
    #[error("Invalid observer position: {x}")]
    InvalidPosition {
        /// Offending world x coordinate
        x: f64,
    },

    /// Chunk index outside the addressable range
    #[error("Chunk index {index} out of range")]
    IndexOutOfRange {
        /// Offending index
        index: i64,
    },
}

/// Invalid terrain configuration. Always fatal at initialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than two samples per chunk cannot form a surface
    #[error("points_per_chunk must be at least 2, got {0}")]
    TooFewPoints(u32),

    /// Chunk width must be strictly positive
    #[error("chunk_width must be positive, got {0}")]
    InvalidChunkWidth(f64),

    /// A numeric parameter is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Parameter value
        value: f64,
    },
}

/// Terrain generation and streaming errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    /// Coordinate could not be resolved to a chunk
    #[error(transparent)]
    Coord(#[from] CoordError),

    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Scene backend refused an operation
    #[error("Scene backend error: {0}")]
    Scene(String),
}

/// Result type alias for Ridgeline operations.
pub type RidgelineResult<T> = Result<T, RidgelineError>;

/// Result type alias for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;
