use leptos::prelude::*;
use crate::app::GalleryImage;

/// A thumbnail the lightbox picks up through `data-preview-src`.
#[component]
pub fn PreviewImage(image: GalleryImage) -> impl IntoView {
    view! {
        <figure class="thumb">
            <img
                src=image.thumb
                alt=image.alt
                data-preview-src=image.full
                loading="lazy"
                style="width: 240px; height: 160px; object-fit: cover; cursor: zoom-in;"
            />
        </figure>
    }
}
