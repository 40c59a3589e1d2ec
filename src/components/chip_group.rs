use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window};
use smallvec::SmallVec;

use crate::{components::Chip, primitives::flow, theme::ThemeSpacingKind};

/// A set of chips that wraps onto as many rows as the width requires.
#[derive(IntoElement, Default)]
pub struct ChipGroup {
    spacing: ThemeSpacingKind,
    chips: SmallVec<[Chip; 8]>,
}

impl ChipGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gap between chips and between rows. Defaults to the small step.
    pub fn spacing(mut self, spacing: ThemeSpacingKind) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn chip(mut self, chip: Chip) -> Self {
        self.chips.push(chip);
        self
    }

    pub fn chips(mut self, chips: impl IntoIterator<Item = Chip>) -> Self {
        self.chips.extend(chips);
        self
    }
}

impl RenderOnce for ChipGroup {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        flow()
            .w_full()
            .spacing(self.spacing.resolve(cx))
            .children(self.chips)
    }
}
