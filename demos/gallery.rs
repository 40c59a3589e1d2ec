//! Showcase for every component, with brand and appearance switching.
//!
//! Usage: `gallery [brand] [appearance]`, e.g. `gallery b dark`.

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, KeyBinding, Window, WindowBounds,
    WindowOptions, actions, div, prelude::*, px, size,
};

use gpui_brandkit::{
    ElementIdExt,
    components::{Button, Card, Chip, ChipGroup},
    theme::{
        Appearance, Brand, ButtonSize, ButtonVariant, CardVariant, ThemeExt, ThemeSettings,
        ThemeBackgroundKind, ThemeSpacingKind, ThemeTextColorKind,
    },
};

actions!(gallery, [NextBrand, ToggleAppearance]);

const TOPICS: [&str; 9] = [
    "Design",
    "Engineering",
    "Research",
    "Product",
    "Marketing",
    "Customer support",
    "Operations",
    "Finance",
    "Legal",
];

struct Gallery {
    selected_topics: [bool; TOPICS.len()],
    saving: bool,
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.get_theme();
        let topics_id = gpui::ElementId::from("topics");

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap(ThemeSpacingKind::Xl.resolve(cx))
            .p(ThemeSpacingKind::Xxl.resolve(cx))
            .bg(ThemeBackgroundKind::Primary.resolve(cx))
            .text_color(ThemeTextColorKind::Primary.resolve(cx))
            .child(
                div()
                    .flex()
                    .gap(ThemeSpacingKind::Sm.resolve(cx))
                    .child(
                        Button::new("next-brand")
                            .text(format!("Brand: {}", theme.brand()))
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Sm)
                            .on_click(|_, _, cx| {
                                let brand = cx.get_theme().brand().next();
                                cx.set_brand(brand);
                            }),
                    )
                    .child(
                        Button::new("toggle-appearance")
                            .text(format!("Appearance: {}", theme.appearance()))
                            .variant(ButtonVariant::Ghost)
                            .size(ButtonSize::Sm)
                            .on_click(|_, _, cx| cx.toggle_appearance()),
                    ),
            )
            .child(
                Card::new()
                    .variant(CardVariant::Outlined)
                    .title("Topics")
                    .subtitle("Pick the teams you want updates from.")
                    .child(
                        ChipGroup::new()
                            .spacing(ThemeSpacingKind::Sm)
                            .chips(TOPICS.iter().enumerate().map(|(index, topic)| {
                                Chip::new(topics_id.with_index(index), *topic)
                                    .selected(self.selected_topics[index])
                                    .on_click(cx.listener(move |view, selected, _window, cx| {
                                        view.selected_topics[index] = *selected;
                                        cx.notify();
                                    }))
                            })),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap(ThemeSpacingKind::Lg.resolve(cx))
                    .children(CardVariant::ALL.map(|variant| {
                        Card::new()
                            .variant(variant)
                            .title(format!("{variant:?}"))
                            .child("Cards group related content.")
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(ThemeSpacingKind::Sm.resolve(cx))
                    .child(
                        Button::new("save")
                            .text("Save")
                            .size(ButtonSize::Lg)
                            .loading(self.saving)
                            .on_click(cx.listener(|view, _, _window, cx| {
                                view.saving = true;
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("reset")
                            .text("Reset")
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Lg)
                            .on_click(cx.listener(|view, _, _window, cx| {
                                view.saving = false;
                                view.selected_topics = Default::default();
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("delete")
                            .text("Delete")
                            .variant(ButtonVariant::Ghost)
                            .size(ButtonSize::Lg)
                            .disabled(true),
                    ),
            )
    }
}

fn settings_from_args() -> anyhow::Result<ThemeSettings> {
    let mut args = std::env::args().skip(1);
    let mut settings = ThemeSettings::default();

    if let Some(brand) = args.next() {
        settings.brand = brand.parse::<Brand>().context("first argument must be a brand")?;
    }
    if let Some(appearance) = args.next() {
        settings.appearance = appearance
            .parse::<Appearance>()
            .context("second argument must be an appearance")?;
    }

    Ok(settings)
}

fn open_gallery(cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, size(px(880.), px(720.)), cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            gpui_brandkit::init_for_window(window, cx);

            cx.new(|_cx| Gallery {
                selected_topics: [false; TOPICS.len()],
                saving: false,
            })
        },
    )?;

    Ok(())
}

fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let settings = match settings_from_args() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("{err:#}, using the default theme");
            ThemeSettings::default()
        }
    };

    Application::new().run(move |cx: &mut App| {
        gpui_brandkit::init_with_settings(settings, cx);

        cx.on_action(|_: &NextBrand, cx| {
            let brand = cx.get_theme().brand().next();
            cx.set_brand(brand);
        });
        cx.on_action(|_: &ToggleAppearance, cx| cx.toggle_appearance());
        cx.bind_keys([
            KeyBinding::new("ctrl-b", NextBrand, None),
            KeyBinding::new("ctrl-d", ToggleAppearance, None),
        ]);

        if let Err(err) = open_gallery(cx) {
            tracing::error!("failed to open the gallery window: {err:#}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
