use leptos::prelude::*;
use crate::app::{GalleryCtx, GalleryImage};

#[component]
pub fn AddImageButton() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().unwrap();

    view! {
        <button
            type="button"
            class="add-image"
            on:click=move |_| {
                ctx.set_images.update(|images| {
                    let next = images.iter().map(|i| i.id + 1).max().unwrap_or(0);
                    images.push(GalleryImage::demo(next));
                });
            }
        >
            "Add image"
        </button>
    }
}
