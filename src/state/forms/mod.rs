//! Form state: field value objects and per-screen form structs

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
