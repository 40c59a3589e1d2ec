pub mod primitives;

pub mod components;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, StyledExt};

pub use theme::RgbaExt;

mod init;
pub use init::*;
