pub const OVERLAY_ID: &str = "imgPreviewOverlay";
pub const OVERLAY_CLASS: &str = "img-preview-overlay";
pub const DIALOG_CLASS: &str = "img-preview-dialog";
pub const DIALOG_LABEL: &str = "Image preview";
pub const CLOSE_BUTTON_ID: &str = "imgPreviewOverlayClose";
pub const CLOSE_BUTTON_CLASS: &str = "img-preview-close";
pub const CLOSE_BUTTON_LABEL: &str = "Close";
pub const CLOSE_BUTTON_TEXT: &str = "\u{00d7}";
pub const IMAGE_ID: &str = "imgPreviewOverlayImg";
pub const OPEN_CLASS: &str = "is-open";
pub const PREVIEW_SRC_ATTR: &str = "data-preview-src";
pub const TRIGGER_SELECTOR: &str = "img[data-preview-src]";
pub const DEFAULT_ALT: &str = "preview";

/// What to show in the dialog, taken from a trigger's attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTarget {
    pub src: String,
    pub alt: String,
}

impl PreviewTarget {
    pub fn new(src: impl Into<String>, alt: &str, default_alt: &str) -> Self {
        let alt = if alt.is_empty() { default_alt } else { alt };
        Self {
            src: src.into(),
            alt: alt.to_string(),
        }
    }

    /// Builds a target from raw attribute values. A missing or empty source
    /// means the element is not a trigger.
    pub fn from_attributes(
        src: Option<String>,
        alt: Option<String>,
        default_alt: &str,
    ) -> Option<Self> {
        let src = src.filter(|s| !s.is_empty())?;
        Some(Self::new(src, alt.as_deref().unwrap_or(""), default_alt))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(PreviewTarget),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn target(&self) -> Option<&PreviewTarget> {
        match self {
            OverlayState::Open(target) => Some(target),
            OverlayState::Closed => None,
        }
    }

    /// `aria-hidden` value projected from the state.
    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod preview_target_tests {
        use super::*;

        #[test]
        fn keeps_given_alt() {
            let target = PreviewTarget::new("https://x/img.png", "cat", DEFAULT_ALT);
            assert_eq!(target.src, "https://x/img.png");
            assert_eq!(target.alt, "cat");
        }

        #[test]
        fn empty_alt_falls_back_to_default() {
            let target = PreviewTarget::new("https://x/img.png", "", DEFAULT_ALT);
            assert_eq!(target.alt, "preview");
        }

        #[test]
        fn custom_default_alt_is_used() {
            let target = PreviewTarget::new("a.jpg", "", "full size");
            assert_eq!(target.alt, "full size");
        }

        #[test]
        fn from_attributes_requires_source() {
            assert_eq!(
                PreviewTarget::from_attributes(None, Some("x".into()), DEFAULT_ALT),
                None
            );
            assert_eq!(
                PreviewTarget::from_attributes(Some(String::new()), None, DEFAULT_ALT),
                None
            );
        }

        #[test]
        fn from_attributes_without_alt() {
            let target =
                PreviewTarget::from_attributes(Some("a.jpg".into()), None, DEFAULT_ALT).unwrap();
            assert_eq!(target.src, "a.jpg");
            assert_eq!(target.alt, "preview");
        }

        #[test]
        fn from_attributes_with_alt() {
            let target =
                PreviewTarget::from_attributes(Some("a.jpg".into()), Some("x".into()), DEFAULT_ALT)
                    .unwrap();
            assert_eq!(target, PreviewTarget::new("a.jpg", "x", DEFAULT_ALT));
        }
    }

    mod overlay_state_tests {
        use super::*;

        #[test]
        fn starts_closed() {
            let state = OverlayState::default();
            assert!(!state.is_open());
            assert_eq!(state.target(), None);
            assert_eq!(state.aria_hidden(), "true");
        }

        #[test]
        fn open_exposes_target() {
            let target = PreviewTarget::new("a.jpg", "x", DEFAULT_ALT);
            let state = OverlayState::Open(target.clone());
            assert!(state.is_open());
            assert_eq!(state.target(), Some(&target));
            assert_eq!(state.aria_hidden(), "false");
        }
    }
}
