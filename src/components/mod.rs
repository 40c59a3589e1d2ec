mod button;
pub use button::*;

mod card;
pub use card::*;

mod chip;
pub use chip::*;

mod chip_group;
pub use chip_group::*;
