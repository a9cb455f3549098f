use thiserror::Error;

/// Recoverable conditions raised by the projection and clipping math.
///
/// None of these are fatal: the caller skips the affected geometry for the
/// current frame and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("projection plane axes are parallel; plane normal is zero")]
    DegenerateCamera,

    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("segment is parallel to the clip plane")]
    UnprojectableSegment,

    #[error("point lies in the eye plane and has no projection")]
    PointOnEyePlane,

    #[error("plot bounds have zero or negative extent")]
    EmptyBounds,
}

/// Errors from reading or writing files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for results using [`ProjectionError`].
pub type Result<T> = std::result::Result<T, ProjectionError>;
