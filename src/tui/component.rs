use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive everything they display as props (struct fields) and
/// render to a `Frame` within a given `Rect`. They never touch the `Session`
/// directly; the caller derives the props from it.
///
/// The `render` method takes `&mut self` so a component may keep
/// presentation-only caches between frames.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
