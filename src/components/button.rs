use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    theme::{ButtonSize, ButtonVariant, ThemeExt, ThemeRadiusKind},
    utils::StyledExt,
};

/// Shown in place of the label while a button is loading.
const LOADING_INDICATOR: &str = "•••";

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: SharedString::from("Button"),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = text.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// A loading button keeps its colors but swaps its label for an
    /// indicator and ignores clicks.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn handle_on_click(
        window: &mut Window,
        cx: &mut App,
        event: &ClickEvent,
        on_click: Option<&Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    ) {
        if let Some(on_click) = on_click {
            (on_click)(event, window, cx)
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = *cx.get_theme();

        let style = self.variant.resolve(&theme, self.disabled);
        let pressed_background = self.variant.pressed_background(&theme);
        let (horizontal_padding, vertical_padding) = self.size.padding(theme.spacing());
        let text_style = self.size.text_style(theme.typography());
        let corner_radius = ThemeRadiusKind::Md.resolve(cx);

        let is_interactive = self.is_interactive();
        let label = if self.loading {
            SharedString::new_static(LOADING_INDICATOR)
        } else {
            self.text.clone()
        };

        div()
            .id(self.id.clone())
            .cursor(if is_interactive {
                CursorStyle::PointingHand
            } else {
                CursorStyle::OperationNotAllowed
            })
            .when(self.full_width, |this| this.w_full())
            .flex()
            .items_center()
            .justify_center()
            .px(horizontal_padding)
            .py(vertical_padding)
            .rounded(corner_radius)
            .font_family(theme.typography().primary_family())
            .text_style_token(text_style)
            .component_style(style)
            .child(label)
            .when(is_interactive, |this| {
                this.hover(move |this| this.bg(pressed_background).opacity(0.92))
                    .active(move |this| this.bg(pressed_background))
                    .on_click(move |event, window, cx| {
                        Self::handle_on_click(window, cx, event, self.on_click.as_ref());
                    })
            })
    }
}
