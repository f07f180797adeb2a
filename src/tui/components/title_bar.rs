//! # TitleBar Component
//!
//! Top status line showing where the operator is and what is going on.
//!
//! - Current page title
//! - Lock state (`locked` until the password gate is passed)
//! - Number of deferred actions still running, if any
//!
//! TitleBar is purely presentational: all three values are props handed in
//! by the event loop. The page title and lock state come from the `Session`;
//! the running count is TUI state kept by the loop.
//!
//! ```text
//! nftctl | AirDrop NFT | unlocked | 1 running
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub page_title: &'static str,
    pub authenticated: bool,
    pub running: usize,
}

impl TitleBar {
    pub fn new(page_title: &'static str, authenticated: bool, running: usize) -> Self {
        Self {
            page_title,
            authenticated,
            running,
        }
    }

    fn text(&self) -> String {
        let lock = if self.authenticated { "unlocked" } else { "locked" };
        if self.running > 0 {
            format!(
                "nftctl | {} | {} | {} running",
                self.page_title, lock, self.running
            )
        } else {
            format!("nftctl | {} | {}", self.page_title, lock)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.authenticated {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
