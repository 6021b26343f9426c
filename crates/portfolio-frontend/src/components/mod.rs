//! # UI Components Module
//!
//! Leptos components composing the projects page.

pub mod card;
pub mod head;
pub mod icons;
pub mod layout;
pub mod project_card;

pub use card::*;
pub use head::*;
pub use icons::*;
pub use layout::*;
pub use project_card::*;
