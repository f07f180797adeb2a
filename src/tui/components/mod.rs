//! # TUI Components
//!
//! Both components are stateless and props-based: the event loop derives
//! everything they show from the `Session` (plus a little TUI state) and
//! hands it over as struct fields.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (page, lock state, running actions)
//! └── page_view.rs     (banner + page body + input cursor)
//! ```

mod page_view;
mod title_bar;

pub use page_view::PageView;
pub use title_bar::TitleBar;
