use crate::SurfaceError;

/// The embedded browser component the shell drives.
pub trait RenderSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    fn go_back(&mut self) -> Result<(), SurfaceError>;

    fn evaluate_script(&mut self, script: &str) -> Result<(), SurfaceError>;

    fn pause(&mut self) -> Result<(), SurfaceError>;

    fn resume(&mut self) -> Result<(), SurfaceError>;

    /// Releases the surface. Later calls on it fail with `SurfaceError::Destroyed`.
    fn destroy(&mut self);
}
