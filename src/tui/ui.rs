use crate::core::presenter;
use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{PageView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let title = session.page.title();
    TitleBar::new(title, session.authenticated, tui.running).render(frame, title_area);
    PageView::new(title, presenter::screen(session)).render(frame, main_area);
}
