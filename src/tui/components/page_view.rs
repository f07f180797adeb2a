//! # PageView Component
//!
//! Draws one presenter `Screen`: the notification banner (red for errors,
//! green for successes) followed by the page body inside a bordered block.
//! When the page has an input field the terminal cursor is parked at the end
//! of it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::notification::Notification;
use crate::core::presenter::Screen;
use crate::tui::component::Component;

pub struct PageView {
    pub title: &'static str,
    pub screen: Screen,
}

impl PageView {
    pub fn new(title: &'static str, screen: Screen) -> Self {
        Self { title, screen }
    }

    /// Rows taken by the banner (message plus a blank line) above the body.
    fn banner_height(&self) -> u16 {
        if self.screen.banner.is_some() { 2 } else { 0 }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.screen.lines.len() + 2);
        if let Some(notification) = &self.screen.banner {
            lines.push(banner_line(notification));
            lines.push(Line::default());
        }
        lines.extend(self.screen.lines.iter().cloned().map(Line::from));
        lines
    }
}

fn banner_line(notification: &Notification) -> Line<'static> {
    let (label, color) = match notification {
        Notification::Error(_) => ("[error] ", Color::Red),
        Notification::Success(_) => ("[ok] ", Color::Green),
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(label, style),
        Span::styled(notification.text().to_string(), style),
    ])
}

impl Component for PageView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);

        frame.render_widget(Paragraph::new(self.lines()).block(block), area);

        if let Some((row, col)) = self.screen.cursor {
            let y = inner.y + self.banner_height() + row as u16;
            let x = inner.x + col as u16;
            if y < inner.bottom() && x < inner.right() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(banner: Option<Notification>) -> Screen {
        Screen {
            banner,
            lines: vec!["Enter password:".into(), String::new(), "> **".into()],
            cursor: Some((2, 4)),
        }
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_body_and_cursor_without_banner() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut view = PageView::new("Password", screen(None));
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area);
            })
            .unwrap();

        assert!(row_text(&terminal, 0).contains("Password"));
        assert!(row_text(&terminal, 1).contains("Enter password:"));
        assert!(row_text(&terminal, 3).contains("> **"));
        terminal.backend_mut().assert_cursor_position((5, 3));
    }

    #[test]
    fn test_banner_shifts_body_and_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let banner = Some(Notification::Error("wrong password".into()));
        let mut view = PageView::new("Password", screen(banner));
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area);
            })
            .unwrap();

        assert!(row_text(&terminal, 1).contains("[error] wrong password"));
        assert!(row_text(&terminal, 3).contains("Enter password:"));
        terminal.backend_mut().assert_cursor_position((5, 5));
    }
}
