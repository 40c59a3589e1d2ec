use gpui::{
    AbsoluteLength, AnyElement, App, AvailableSpace, Bounds, DefiniteLength, Edges, Element,
    ElementId, GlobalElementId, InspectorElementId, IntoElement, LayoutId, ParentElement, Pixels,
    Refineable, Size, Style, StyleRefinement, Styled, Window, point, px, size,
};
use smallvec::SmallVec;

use crate::theme::flow;

/// Lays children out left to right, wrapping onto new rows when the next
/// child would overflow the available width.
///
/// Each child is measured at its max-content size, so children never shrink
/// to fit; a child wider than the container gets a row to itself. Padding and
/// borders inset the area children wrap within.
pub struct Flow {
    spacing: Pixels,
    style: StyleRefinement,
    children: SmallVec<[AnyElement; 8]>,
}

pub fn flow() -> Flow {
    Flow {
        spacing: Pixels::ZERO,
        style: StyleRefinement::default(),
        children: SmallVec::new(),
    }
}

impl Flow {
    /// Gap between items in a row and between rows.
    pub fn spacing(mut self, spacing: impl Into<Pixels>) -> Self {
        self.spacing = spacing.into();
        self
    }
}

pub struct FlowLayoutState {
    item_sizes: Vec<Size<Pixels>>,
    padding: Edges<DefiniteLength>,
    border_widths: Edges<AbsoluteLength>,
}

impl ParentElement for Flow {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl Styled for Flow {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl IntoElement for Flow {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for Flow {
    type RequestLayoutState = FlowLayoutState;
    type PrepaintState = ();

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let intrinsic = size(AvailableSpace::MaxContent, AvailableSpace::MaxContent);

        let item_sizes: Vec<Size<Pixels>> = self
            .children
            .iter_mut()
            .map(|child| child.layout_as_root(intrinsic, window, cx))
            .collect();

        let mut style = Style::default();
        style.refine(&self.style);

        let padding = style.padding.clone();
        let border_widths = style.border_widths.clone();

        let spacing = self.spacing;
        let sizes = item_sizes.clone();

        // Taffy hands the measure function the content box, so padding and
        // borders are added around the flow height by the layout engine.
        let layout_id = window.request_measured_layout(style, {
            move |known_dimensions, available_space, _window, _cx| {
                let max_width = known_dimensions
                    .width
                    .or(match available_space.width {
                        AvailableSpace::Definite(width) => Some(width),
                        _ => None,
                    })
                    .unwrap_or(px(f32::INFINITY));

                let measured = flow::measure(max_width, &sizes, spacing);

                size(
                    known_dimensions.width.unwrap_or(measured.width),
                    known_dimensions.height.unwrap_or(measured.height),
                )
            }
        });

        (
            layout_id,
            FlowLayoutState {
                item_sizes,
                padding,
                border_widths,
            },
        )
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        bounds: Bounds<Pixels>,
        request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        let content = content_bounds(
            bounds,
            &request_layout.padding,
            &request_layout.border_widths,
            window.rem_size(),
        );

        let positions = flow::place(content, &request_layout.item_sizes, self.spacing);

        for (child, position) in self.children.iter_mut().zip(positions) {
            child.prepaint_at(position, window, cx);
        }
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&InspectorElementId>,
        _bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        _prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        for child in self.children.iter_mut() {
            child.paint(window, cx);
        }
    }
}

/// Shrinks a border box to the area inside its padding and borders.
///
/// Percentage padding resolves against the element's own width.
fn content_bounds(
    bounds: Bounds<Pixels>,
    padding: &Edges<DefiniteLength>,
    border_widths: &Edges<AbsoluteLength>,
    rem_size: Pixels,
) -> Bounds<Pixels> {
    let base = AbsoluteLength::Pixels(bounds.size.width);
    let padding = padding.map(|length| length.to_pixels(base, rem_size));
    let border = border_widths.map(|width| width.to_pixels(rem_size));

    let left = padding.left + border.left;
    let top = padding.top + border.top;
    let right = padding.right + border.right;
    let bottom = padding.bottom + border.bottom;

    Bounds::new(
        point(bounds.origin.x + left, bounds.origin.y + top),
        size(
            (bounds.size.width - left - right).max(Pixels::ZERO),
            (bounds.size.height - top - bottom).max(Pixels::ZERO),
        ),
    )
}
