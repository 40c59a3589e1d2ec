use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder,
};
use smallvec::SmallVec;

use crate::{
    theme::{
        CardVariant, ThemeExt, ThemeRadiusKind, ThemeSpacingKind, ThemeTextColorKind,
        ThemeTextStyleKind,
    },
    utils::{StyledExt, box_shadow},
};

/// A surface grouping related content, with an optional title and subtitle.
#[derive(IntoElement)]
pub struct Card {
    variant: CardVariant,
    padding: ThemeSpacingKind,
    radius: ThemeRadiusKind,
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    children: SmallVec<[AnyElement; 2]>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::default(),
            padding: ThemeSpacingKind::Lg,
            radius: ThemeRadiusKind::Lg,
            title: None,
            subtitle: None,
            children: SmallVec::new(),
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn padding(mut self, padding: ThemeSpacingKind) -> Self {
        self.padding = padding;
        self
    }

    pub fn radius(mut self, radius: ThemeRadiusKind) -> Self {
        self.radius = radius;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = *cx.get_theme();

        let style = self.variant.style(&theme);
        let shadow = box_shadow(self.variant.elevation(), theme.colors().shadow);
        let padding = self.padding.resolve(cx);
        let gap = ThemeSpacingKind::Sm.resolve(cx);
        let header_gap = ThemeSpacingKind::Xxs.resolve(cx);
        let corner_radius = self.radius.resolve(cx);
        let body_style = ThemeTextStyleKind::Body.resolve(cx);
        let title_style = ThemeTextStyleKind::Headline.resolve(cx);
        let subtitle_style = ThemeTextStyleKind::Caption.resolve(cx);
        let subtitle_color = ThemeTextColorKind::Secondary.resolve(cx);

        let has_header = self.title.is_some() || self.subtitle.is_some();

        div()
            .flex()
            .flex_col()
            .gap(gap)
            .p(padding)
            .rounded(corner_radius)
            .font_family(theme.typography().primary_family())
            .text_style_token(body_style)
            .component_style(style)
            .when_some(shadow, |this, shadow| this.shadow(vec![shadow]))
            .when(has_header, |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(header_gap)
                        .when_some(self.title, |this, title| {
                            this.child(div().text_style_token(title_style).child(title))
                        })
                        .when_some(self.subtitle, |this, subtitle| {
                            this.child(
                                div()
                                    .text_style_token(subtitle_style)
                                    .text_color(subtitle_color)
                                    .child(subtitle),
                            )
                        }),
                )
            })
            .children(self.children)
    }
}
