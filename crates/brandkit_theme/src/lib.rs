//! Design tokens, brand theming and layout math for the brandkit components.
//!
//! Token bundles are plain data typed with GPUI's colors and lengths, theme
//! resolution is a table lookup and the flow layout is a pure function of its
//! inputs. Components and app globals live in `gpui_brandkit`.

mod brand;
pub use brand::*;

mod color;
pub use color::*;

mod deserializers;

mod error;
pub use error::*;

pub mod flow;

mod styles;
pub use styles::*;

mod theme;
pub use theme::*;

mod tokens;
pub use tokens::*;
