use leptos::prelude::*;
use crate::app::{GalleryCtx, GalleryImage};
use crate::components::PreviewImage;

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().unwrap();

    view! {
        <section
            class="gallery"
            style="display: flex; flex-wrap: wrap; gap: 12px;"
        >
            <For
                each=move || ctx.images.get()
                key=|image| image.id
                children=move |image: GalleryImage| view! { <PreviewImage image=image /> }
            />
        </section>
    }
}
