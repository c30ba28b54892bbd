mod add_image_button;
mod gallery;
mod preview_image;

pub use add_image_button::AddImageButton;
pub use gallery::Gallery;
pub use preview_image::PreviewImage;
