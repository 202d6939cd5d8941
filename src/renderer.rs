use glam::Vec2;

/// Opaque handle to a prepared texture, issued by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub usize);

/// Endpoint-anchored transform for one visible body segment: translate to the
/// first endpoint's screen position, rotate, draw the image at its authored
/// local offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Screen-space anchor, the first endpoint projected
    pub position: Vec2,
    /// Radians, already including the constraint's authored bias
    pub rotation: f32,
    pub image: ImageHandle,
    /// Authored local offset in simulation units, unscaled
    pub offset: Vec2,
}

/// The rendering collaborator. Rasterization, caching, and compositing are
/// its business; the core only hands it segment transforms and asks whether
/// textures are ready.
pub trait Renderer {
    /// Begin decoding the given source, returning a handle immediately.
    /// Readiness is polled separately; decoding may be asynchronous.
    fn prepare_image(&mut self, source: &str) -> ImageHandle;

    fn is_ready(&self, image: ImageHandle) -> bool;

    /// Replace an image that never became ready with a flat-color
    /// placeholder, which is ready by definition.
    fn use_placeholder(&mut self, image: ImageHandle);

    /// Regenerate any scale-dependent cached form of the image.
    fn regenerate_cache(&mut self, image: ImageHandle, scale: f32);

    fn clear_frame(&mut self);

    fn draw_segment(&mut self, segment: &Segment);
}
