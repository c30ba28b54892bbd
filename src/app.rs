use crate::components::{AddImageButton, Gallery};
use leptos::prelude::*;

const DEMO_PHOTOS: &[(u32, &str)] = &[
    (10, "Forest trail"),
    (15, "Waterfall"),
    (28, "Misty woods"),
    (29, "Mountain range"),
    (37, ""),
    (42, "Coffee shop"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: usize,
    pub thumb: String,
    pub full: String,
    pub alt: String,
}

impl GalleryImage {
    /// Demo entry `index`, cycling through the bundled photo list.
    pub fn demo(index: usize) -> Self {
        let (photo, alt) = DEMO_PHOTOS[index % DEMO_PHOTOS.len()];
        Self {
            id: index,
            thumb: format!("https://picsum.photos/id/{photo}/240/160"),
            full: format!("https://picsum.photos/id/{photo}/1600/1067"),
            alt: alt.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct GalleryCtx {
    pub images: ReadSignal<Vec<GalleryImage>>,
    pub set_images: WriteSignal<Vec<GalleryImage>>,
}

/// Demo host page: a thumbnail grid whose images open in the lightbox.
/// Thumbnails added after load go through the same document listeners.
#[component]
pub fn App() -> impl IntoView {
    let initial = (0..4).map(GalleryImage::demo).collect::<Vec<_>>();
    let (images, set_images) = signal(initial);

    provide_context(GalleryCtx { images, set_images });

    view! {
        <main class="page">
            <h1>"Image preview"</h1>
            <p class="hint">"Click a thumbnail. Close with the button, Escape, or a click on the backdrop."</p>
            <AddImageButton />
            <Gallery />
        </main>
    }
}
