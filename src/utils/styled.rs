use gpui::{AbsoluteLength, FontWeight, Pixels, Styled};

use crate::theme::{ComponentStyle, TextStyle};

pub trait StyledExt: Styled + Sized {
    /// Sets the same border width on every edge.
    fn border_thickness(mut self, width: Pixels) -> Self {
        let width: AbsoluteLength = width.into();
        let edges = &mut self.style().border_widths;

        edges.top = Some(width);
        edges.right = Some(width);
        edges.bottom = Some(width);
        edges.left = Some(width);

        self
    }

    /// Applies a type ramp entry: size, weight and line height.
    fn text_style_token(self, style: TextStyle) -> Self {
        self.text_size(style.size)
            .font_weight(FontWeight(style.weight))
            .line_height(style.line_height)
    }

    /// Paints a component style: text, background and border.
    fn component_style(self, style: ComponentStyle) -> Self {
        let this = self.text_color(style.foreground).bg(style.background);

        if style.has_border() {
            this.border_color(style.border)
                .border_thickness(style.border_width)
        } else {
            this
        }
    }
}

impl<T: Styled> StyledExt for T {}
