//! Pure event dispatch: everything the document listeners decide, without
//! touching the DOM.

use crate::config::LightboxConfig;
use crate::state::{PreviewTarget, CLOSE_BUTTON_ID, OVERLAY_ID, PREVIEW_SRC_ATTR};
use std::cell::Cell;

pub const ESCAPE_KEY: &str = "Escape";

/// The parts of a click the dispatcher cares about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickInput {
    /// `id` of the element the click landed on, if it has one.
    pub target_id: Option<String>,
    /// Trigger found by walking up from the target, already resolved into
    /// a target. `None` when no ancestor matches or its source is empty.
    pub trigger: Option<PreviewTarget>,
}

impl ClickInput {
    pub fn on_element(id: &str) -> Self {
        Self {
            target_id: Some(id.to_string()),
            trigger: None,
        }
    }

    pub fn on_trigger(target: PreviewTarget) -> Self {
        Self {
            target_id: None,
            trigger: Some(target),
        }
    }

    fn target_is(&self, id: &str) -> bool {
        self.target_id.as_deref() == Some(id)
    }
}

/// An element a click can land on, seen only through what trigger lookup
/// needs. Implemented for `web_sys::Element`.
pub trait ClickTarget: Sized {
    fn element_id(&self) -> String;

    /// Nearest ancestor, the element itself included, matching `selector`.
    fn closest_match(&self, selector: &str) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Reads a click target into a `ClickInput`. The trigger lookup walks up
/// from the target, so clicks on nested content still count.
pub fn read_click<T: ClickTarget>(target: Option<&T>, config: &LightboxConfig) -> ClickInput {
    let Some(target) = target else {
        return ClickInput::default();
    };

    let id = target.element_id();
    let trigger = target
        .closest_match(&config.trigger_selector)
        .and_then(|trigger| {
            PreviewTarget::from_attributes(
                trigger.attribute(PREVIEW_SRC_ATTR),
                trigger.attribute("alt"),
                &config.default_alt,
            )
        });

    ClickInput {
        target_id: (!id.is_empty()).then_some(id),
        trigger,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Open(PreviewTarget),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickOutcome {
    pub intent: Option<Intent>,
    pub prevent_default: bool,
}

impl ClickOutcome {
    fn ignore() -> Self {
        Self::default()
    }
}

pub fn dispatch_click(input: &ClickInput, is_open: bool, config: &LightboxConfig) -> ClickOutcome {
    if input.target_is(CLOSE_BUTTON_ID) {
        return ClickOutcome {
            intent: Some(Intent::Close),
            prevent_default: true,
        };
    }

    // Only the container itself counts, not anything inside the dialog.
    if input.target_is(OVERLAY_ID) {
        if is_open && config.close_on_backdrop {
            return ClickOutcome {
                intent: Some(Intent::Close),
                prevent_default: false,
            };
        }
        return ClickOutcome::ignore();
    }

    match &input.trigger {
        Some(target) => ClickOutcome {
            intent: Some(Intent::Open(target.clone())),
            prevent_default: true,
        },
        None => ClickOutcome::ignore(),
    }
}

pub fn dispatch_key(key: &str, is_open: bool, config: &LightboxConfig) -> Option<Intent> {
    (key == ESCAPE_KEY && is_open && config.close_on_escape).then_some(Intent::Close)
}

/// When the document listeners get attached, based on `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindTiming {
    Immediate,
    OnDomContentLoaded,
}

impl BindTiming {
    pub fn for_ready_state(ready_state: &str) -> Self {
        if ready_state == "loading" {
            BindTiming::OnDomContentLoaded
        } else {
            BindTiming::Immediate
        }
    }
}

/// Claims the once-per-page bind flag. Returns when to attach, or `None`
/// if listeners were already attached or are waiting on `DOMContentLoaded`.
pub fn claim_bind(bound: &Cell<bool>, ready_state: &str) -> Option<BindTiming> {
    if bound.replace(true) {
        None
    } else {
        Some(BindTiming::for_ready_state(ready_state))
    }
}
