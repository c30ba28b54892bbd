use image_preview_lightbox::app::App;
use image_preview_lightbox::{install, LightboxConfig};

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = install(LightboxConfig::default()) {
        leptos::logging::warn!("image preview disabled: {err}");
    }

    leptos::mount::mount_to_body(App);
}
