//! Reusable UI components

mod button;
mod field_renderer;
mod toast;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use field_renderer::{draw_field, FIELD_HEIGHT};
pub use toast::draw_toasts;
