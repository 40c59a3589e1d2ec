use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};

use crate::{
    theme::{
        ChipState, RgbaExt, ThemeExt, ThemeRadiusKind, ThemeSpacingKind, ThemeTextStyleKind,
    },
    utils::StyledExt,
};

/// A compact, pill-shaped toggle. Clicking reports the new selection.
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    selected: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn state(&self) -> ChipState {
        ChipState::from(self.selected)
    }

    fn handle_on_click(
        window: &mut Window,
        cx: &mut App,
        selected: bool,
        on_click: Option<&Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    ) {
        if let Some(on_click) = on_click {
            (on_click)(&selected, window, cx)
        }
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = *cx.get_theme();

        let style = self.state().style(&theme);
        let style = if self.disabled {
            style.disabled(&theme)
        } else {
            style
        };
        let padding_x = ThemeSpacingKind::Md.resolve(cx);
        let padding_y = ThemeSpacingKind::Xs.resolve(cx);
        let corner_radius = ThemeRadiusKind::Pill.resolve(cx);
        let text_style = ThemeTextStyleKind::Label.resolve(cx);
        let hover_background = theme.colors().accent.subtle.mix(&style.background, 0.5);

        let next_selected = !self.selected;

        div()
            .id(self.id.clone())
            .flex()
            .flex_none()
            .items_center()
            .px(padding_x)
            .py(padding_y)
            .rounded(corner_radius)
            .font_family(theme.typography().primary_family())
            .text_style_token(text_style)
            .component_style(style)
            .child(self.label.clone())
            .map(|this| {
                if self.disabled {
                    this.cursor(CursorStyle::OperationNotAllowed)
                } else {
                    this.cursor(CursorStyle::PointingHand)
                        .when(!self.selected, |this| {
                            this.hover(move |this| this.bg(hover_background))
                        })
                        .on_click(move |_, window, cx| {
                            Self::handle_on_click(window, cx, next_selected, self.on_click.as_ref());
                        })
                }
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::theme::{Theme, ThemeExt};
    use gpui::{Context, Modifiers, Render, TestAppContext};

    struct ChipView {
        selected: bool,
        disabled: bool,
        reported: Rc<RefCell<Vec<bool>>>,
    }

    impl Render for ChipView {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            let reported = self.reported.clone();

            div().flex().child(
                div().debug_selector(|| "chip".into()).child(
                    Chip::new("chip", "Design")
                        .selected(self.selected)
                        .disabled(self.disabled)
                        .on_click(cx.listener(move |view, selected, _window, cx| {
                            reported.borrow_mut().push(*selected);
                            view.selected = *selected;
                            cx.notify();
                        })),
                ),
            )
        }
    }

    #[test]
    fn test_state_follows_selection() {
        assert_eq!(Chip::new("a", "A").state(), ChipState::Unselected);
        assert_eq!(Chip::new("b", "B").selected(true).state(), ChipState::Selected);
    }

    #[gpui::test]
    fn test_click_toggles_selection(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::default()));

        let reported = Rc::new(RefCell::new(Vec::new()));
        let (view, cx) = cx.add_window_view(|_window, _cx| ChipView {
            selected: false,
            disabled: false,
            reported: reported.clone(),
        });
        cx.run_until_parked();

        let center = cx.debug_bounds("chip").expect("chip is painted").center();

        cx.simulate_click(center, Modifiers::none());
        view.update(cx, |view, _cx| assert!(view.selected));

        cx.simulate_click(center, Modifiers::none());
        view.update(cx, |view, _cx| assert!(!view.selected));

        assert_eq!(*reported.borrow(), [true, false]);
    }

    #[gpui::test]
    fn test_disabled_chip_ignores_clicks(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::default()));

        let reported = Rc::new(RefCell::new(Vec::new()));
        let (view, cx) = cx.add_window_view(|_window, _cx| ChipView {
            selected: true,
            disabled: true,
            reported: reported.clone(),
        });
        cx.run_until_parked();

        let center = cx.debug_bounds("chip").expect("chip is painted").center();
        cx.simulate_click(center, Modifiers::none());

        view.update(cx, |view, _cx| assert!(view.selected));
        assert!(reported.borrow().is_empty());
    }
}
