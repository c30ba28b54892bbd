pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod state;
pub mod surface;

pub use config::LightboxConfig;
pub use controller::Lightbox;
pub use error::LightboxError;
pub use state::{OverlayState, PreviewTarget};

use dom::{DocumentSurface, SharedLightbox};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static CONTROLLER: RefCell<Option<SharedLightbox>> = const { RefCell::new(None) };
}

/// Creates the page's lightbox controller and binds its document listeners.
/// Later calls return the controller from the first one.
pub fn install(config: LightboxConfig) -> error::Result<SharedLightbox> {
    if let Some(existing) = CONTROLLER.with(|slot| slot.borrow().clone()) {
        return Ok(existing);
    }

    let document = dom::document()?;
    let lightbox = Rc::new(RefCell::new(Lightbox::new(
        DocumentSurface::new(document.clone()),
        config,
    )));
    dom::bind(&document, lightbox.clone())?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(lightbox.clone()));
    Ok(lightbox)
}

fn with_controller<T>(f: impl FnOnce(&mut Lightbox<DocumentSurface>) -> T) -> Option<T> {
    let lightbox = CONTROLLER.with(|slot| slot.borrow().clone())?;
    let mut lb = lightbox.try_borrow_mut().ok()?;
    Some(f(&mut lb))
}

#[wasm_bindgen]
pub fn install_lightbox(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = LightboxConfig::from_js(options)?;
    install(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn open_preview(src: &str, alt: Option<String>) {
    let result = with_controller(|lb| lb.open(src, alt.as_deref().unwrap_or("")));
    if let Some(Err(err)) = result {
        leptos::logging::warn!("image preview: {err}");
    }
}

#[wasm_bindgen]
pub fn close_preview() {
    if let Some(Err(err)) = with_controller(|lb| lb.close()) {
        leptos::logging::warn!("image preview: {err}");
    }
}

#[wasm_bindgen]
pub fn is_preview_open() -> bool {
    with_controller(|lb| lb.is_open()).unwrap_or(false)
}
