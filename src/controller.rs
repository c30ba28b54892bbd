use crate::config::LightboxConfig;
use crate::dispatch::{dispatch_click, dispatch_key, read_click, ClickInput, ClickTarget, Intent};
use crate::error::Result;
use crate::state::{OverlayState, PreviewTarget};
use crate::surface::OverlaySurface;
use leptos::logging::{log, warn};

/// Owns the open/closed state and the surface it is rendered on.
pub struct Lightbox<S: OverlaySurface> {
    surface: S,
    state: OverlayState,
    config: LightboxConfig,
}

impl<S: OverlaySurface> Lightbox<S> {
    pub fn new(surface: S, config: LightboxConfig) -> Self {
        Self {
            surface,
            state: OverlayState::Closed,
            config,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn config(&self) -> &LightboxConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Creates the overlay unless one is already attached.
    pub fn ensure_overlay(&mut self) -> Result<()> {
        if !self.surface.overlay_exists() {
            self.surface.create_overlay()?;
            self.debug("overlay created");
        }
        Ok(())
    }

    pub fn open(&mut self, src: &str, alt: &str) -> Result<()> {
        let target = PreviewTarget::new(src, alt, &self.config.default_alt);
        self.show(target)
    }

    pub fn show(&mut self, target: PreviewTarget) -> Result<()> {
        self.ensure_overlay()?;
        if !self.surface.has_image_slot() {
            return Ok(());
        }

        self.surface.set_image(&target.src, &target.alt)?;
        self.surface.render_open(true)?;
        // Visible from here on, so Escape and the backdrop must work.
        self.debug(&format!("opened {}", target.src));
        self.state = OverlayState::Open(target);
        if self.config.lock_scroll {
            self.surface.set_scroll_locked(true)?;
        }
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        if !self.surface.overlay_exists() {
            self.state = OverlayState::Closed;
            return Ok(());
        }

        self.surface.render_open(false)?;
        if self.state.is_open() {
            self.debug("closed");
        }
        self.state = OverlayState::Closed;
        if self.surface.has_image_slot() {
            self.surface.clear_image()?;
        }
        if self.config.lock_scroll {
            self.surface.set_scroll_locked(false)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Open(target) => self.show(target),
            Intent::Close => self.close(),
        }
    }

    /// Runs a delegated click. Returns whether the default action must be
    /// prevented.
    pub fn handle_click(&mut self, input: &ClickInput) -> bool {
        let outcome = dispatch_click(input, self.is_open(), &self.config);
        if let Some(intent) = outcome.intent {
            self.apply_logged(intent);
        }
        outcome.prevent_default
    }

    /// Reads and runs a click on `target`. Returns whether the default
    /// action must be prevented.
    pub fn handle_click_target<T: ClickTarget>(&mut self, target: Option<&T>) -> bool {
        let input = read_click(target, &self.config);
        self.handle_click(&input)
    }

    /// Runs a delegated keydown. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match dispatch_key(key, self.is_open(), &self.config) {
            Some(intent) => {
                self.apply_logged(intent);
                true
            }
            None => false,
        }
    }

    fn apply_logged(&mut self, intent: Intent) {
        if let Err(err) = self.apply(intent) {
            warn!("image preview: {err}");
        }
    }

    fn debug(&self, message: &str) {
        if self.config.debug {
            log!("image preview: {message}");
        }
    }
}
