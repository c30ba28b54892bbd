use crate::controller::Lightbox;
use crate::dispatch::{claim_bind, BindTiming, ClickTarget};
use crate::error::{LightboxError, Result};
use crate::state::{
    CLOSE_BUTTON_CLASS, CLOSE_BUTTON_ID, CLOSE_BUTTON_LABEL, CLOSE_BUTTON_TEXT,
    DIALOG_CLASS, DIALOG_LABEL, IMAGE_ID, OPEN_CLASS, OVERLAY_CLASS, OVERLAY_ID,
};
use crate::surface::OverlaySurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, MouseEvent};

pub type SharedLightbox = Rc<RefCell<Lightbox<DocumentSurface>>>;

// Listeners are attached at most once per page load
thread_local! {
    static LISTENERS_BOUND: Cell<bool> = const { Cell::new(false) };
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(LightboxError::NoWindow)?
        .document()
        .ok_or(LightboxError::NoDocument)
}

/// Renders the overlay into the live document. Elements are looked up by id
/// every time, so markup already present in the page is picked up too.
pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn overlay(&self) -> Option<Element> {
        self.document.get_element_by_id(OVERLAY_ID)
    }

    fn image(&self) -> Option<HtmlImageElement> {
        self.overlay()?
            .query_selector(&format!("#{IMAGE_ID}"))
            .ok()
            .flatten()?
            .dyn_into::<HtmlImageElement>()
            .ok()
    }

    fn create(&self, tag: &str) -> Result<Element> {
        Ok(self.document.create_element(tag)?)
    }

    fn build_overlay(&self) -> Result<Element> {
        let overlay = self.create("div")?;
        overlay.set_id(OVERLAY_ID);
        overlay.set_class_name(OVERLAY_CLASS);
        overlay.set_attribute("aria-hidden", "true")?;

        let dialog = self.create("div")?;
        dialog.set_class_name(DIALOG_CLASS);
        dialog.set_attribute("role", "dialog")?;
        dialog.set_attribute("aria-modal", "true")?;
        dialog.set_attribute("aria-label", DIALOG_LABEL)?;

        let close = self.create("button")?;
        close.set_id(CLOSE_BUTTON_ID);
        close.set_class_name(CLOSE_BUTTON_CLASS);
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", CLOSE_BUTTON_LABEL)?;
        close.set_text_content(Some(CLOSE_BUTTON_TEXT));

        let image = self.create("img")?;
        image.set_id(IMAGE_ID);
        image.set_attribute("src", "")?;
        image.set_attribute("alt", "")?;

        dialog.append_child(&close)?;
        dialog.append_child(&image)?;
        overlay.append_child(&dialog)?;
        Ok(overlay)
    }
}

impl OverlaySurface for DocumentSurface {
    fn overlay_exists(&self) -> bool {
        self.overlay().is_some()
    }

    fn create_overlay(&mut self) -> Result<()> {
        let body = self.document.body().ok_or(LightboxError::NoBody)?;
        let overlay = self.build_overlay()?;
        body.append_child(&overlay)?;
        Ok(())
    }

    fn has_image_slot(&self) -> bool {
        self.image().is_some()
    }

    fn set_image(&mut self, src: &str, alt: &str) -> Result<()> {
        if let Some(image) = self.image() {
            image.set_src(src);
            image.set_alt(alt);
        }
        Ok(())
    }

    fn clear_image(&mut self) -> Result<()> {
        if let Some(image) = self.image() {
            image.set_src("");
        }
        Ok(())
    }

    fn render_open(&mut self, open: bool) -> Result<()> {
        let Some(overlay) = self.overlay() else {
            return Ok(());
        };
        if open {
            overlay.class_list().add_1(OPEN_CLASS)?;
        } else {
            overlay.class_list().remove_1(OPEN_CLASS)?;
        }
        overlay.set_attribute("aria-hidden", if open { "false" } else { "true" })?;
        Ok(())
    }

    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        let body = self.document.body().ok_or(LightboxError::NoBody)?;
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }
}

impl ClickTarget for Element {
    fn element_id(&self) -> String {
        self.id()
    }

    fn closest_match(&self, selector: &str) -> Option<Self> {
        Element::closest(self, selector).ok().flatten()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

fn event_element(ev: &MouseEvent) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Attaches the delegated document listeners, deferring to
/// `DOMContentLoaded` while the document is still loading.
pub fn bind(document: &Document, lightbox: SharedLightbox) -> Result<()> {
    let ready_state = document.ready_state();
    let Some(timing) = LISTENERS_BOUND.with(|bound| claim_bind(bound, &ready_state)) else {
        return Ok(());
    };

    let result = match timing {
        BindTiming::Immediate => attach_listeners(document, lightbox),
        BindTiming::OnDomContentLoaded => defer_listeners(document, lightbox),
    };
    if result.is_err() {
        LISTENERS_BOUND.with(|bound| bound.set(false));
    }
    result
}

fn defer_listeners(document: &Document, lightbox: SharedLightbox) -> Result<()> {
    let doc = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(err) = attach_listeners(&doc, lightbox) {
            leptos::logging::warn!("image preview: {err}");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}

fn attach_listeners(document: &Document, lightbox: SharedLightbox) -> Result<()> {
    let on_click = Closure::wrap(Box::new({
        let lightbox = lightbox.clone();
        move |ev: MouseEvent| {
            let Ok(mut lb) = lightbox.try_borrow_mut() else {
                return;
            };
            if lb.handle_click_target(event_element(&ev).as_ref()) {
                ev.prevent_default();
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let on_keydown = Closure::wrap(Box::new({
        let lightbox = lightbox.clone();
        move |ev: KeyboardEvent| {
            if let Ok(mut lb) = lightbox.try_borrow_mut() {
                lb.handle_key(&ev.key());
            }
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_click.forget();
    on_keydown.forget();
    Ok(())
}
