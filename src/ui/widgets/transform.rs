// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that shifts its content and can fade it against a backdrop.
//!
//! Iced has no CSS-style transforms, so slide-ins, hover lifts and fade-ins
//! go through this wrapper. The shift moves the content's layout node, so
//! hit-testing follows what is drawn. The fade paints a translucent quad of
//! the backdrop color on a layer above the content.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Color, Element, Event, Length, Rectangle, Size, Vector};

/// Shifts `content` by an offset and optionally veils it.
pub struct Transform<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
    veil: Option<Color>,
}

impl<'a, Message, Theme, Renderer> Transform<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: Vector::ZERO,
            veil: None,
        }
    }

    /// Moves the content by `offset` without changing the space it takes.
    #[must_use]
    pub fn translate(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    /// Covers the content with `backdrop` at `1.0 - visibility` opacity.
    ///
    /// A visibility of `1.0` draws nothing extra.
    #[must_use]
    pub fn fade(mut self, backdrop: Color, visibility: f32) -> Self {
        let alpha = 1.0 - visibility.clamp(0.0, 1.0);
        self.veil = (alpha > f32::EPSILON).then_some(Color { a: alpha, ..backdrop });
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Transform<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits);
        let size = content.size();

        layout::Node::with_children(size, vec![content.translate(self.offset)])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            content_layout,
            cursor,
            viewport,
        );

        if let Some(veil) = self.veil {
            let bounds = content_layout.bounds();
            renderer.with_layer(bounds, |renderer| {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds,
                        ..renderer::Quad::default()
                    },
                    veil,
                );
            });
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout.children().next().map_or_else(mouse::Interaction::default, |content_layout| {
            self.content.as_widget().mouse_interaction(
                &tree.children[0],
                content_layout,
                cursor,
                viewport,
                renderer,
            )
        })
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Transform<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Transform<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a [`Transform`] wrapper.
pub fn transform<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Transform<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Transform::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Plain<'a> = Transform<'a, (), iced::Theme, iced::Renderer>;

    #[test]
    fn full_visibility_adds_no_veil() {
        let wrapper: Plain<'_> = transform(iced::widget::text("x")).fade(Color::WHITE, 1.0);
        assert!(wrapper.veil.is_none());
    }

    #[test]
    fn hidden_content_is_fully_veiled() {
        let wrapper: Plain<'_> = transform(iced::widget::text("x")).fade(Color::WHITE, 0.0);
        assert_eq!(wrapper.veil.map(|c| c.a), Some(1.0));
    }

    #[test]
    fn translate_stores_offset() {
        let wrapper: Plain<'_> =
            transform(iced::widget::text("x")).translate(Vector::new(0.0, -8.0));
        assert_eq!(wrapper.offset, Vector::new(0.0, -8.0));
    }
}
