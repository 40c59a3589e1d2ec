//! Theme system providing colors, shapes, spacing and typography.
//!
//! A theme is resolved from a [`Brand`] and an [`Appearance`] and stored as
//! an app global; components read it at render time through [`ThemeExt`].

pub use brandkit_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
