use crate::error::Result;

/// Whatever renders the overlay. The controller owns the state and calls
/// into this to project it; `dom::DocumentSurface` is the browser version.
pub trait OverlaySurface {
    fn overlay_exists(&self) -> bool;

    /// Builds the overlay and attaches it. Only called when
    /// `overlay_exists` is false.
    fn create_overlay(&mut self) -> Result<()>;

    fn has_image_slot(&self) -> bool;

    fn set_image(&mut self, src: &str, alt: &str) -> Result<()>;

    fn clear_image(&mut self) -> Result<()>;

    /// Toggles the open-state class and `aria-hidden`.
    fn render_open(&mut self, open: bool) -> Result<()>;

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()>;
}
