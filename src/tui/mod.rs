//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the session,
//! translates keyboard events into core `Event`s and hands any requested
//! `DeferredAction` to the dispatcher.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event is processed at a time:
//!
//! 1. Draw if anything changed since the last frame.
//! 2. Wait up to [`IDLE_POLL`] for a key, then drain every key already queued.
//! 3. Drain follow-ups posted by finished actions.
//!
//! Follow-ups arrive over a `std::sync::mpsc` channel, so a follow-up is
//! always handled after the keystroke that dispatched its action, and never
//! concurrently with another event.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::actions::{Collaborator, DryRunCollaborator, spawn_action};
use crate::core::action::{Effect, Event, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long to wait for a key before checking for follow-ups.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of the session)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Deferred actions dispatched but not yet reported back.
    pub running: usize,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes make a bare Esc arrive immediately instead
        // of waiting to see whether it starts a sequence. Terminals without
        // the protocol ignore the request.
        execute!(
            stdout(),
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Sends dispatched actions to the collaborator and counts what is in flight.
struct Dispatcher {
    collaborator: Arc<dyn Collaborator>,
    timeout: Duration,
    tx: mpsc::Sender<Event>,
}

impl Dispatcher {
    /// Carries out an effect. Returns true when the loop should stop.
    fn apply(&self, effect: Effect, tui: &mut TuiState) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::Dispatch(action) => {
                spawn_action(
                    action,
                    self.collaborator.clone(),
                    self.timeout,
                    self.tx.clone(),
                );
                tui.running += 1;
                false
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let collaborator: Arc<dyn Collaborator> = Arc::new(DryRunCollaborator::new(
        Duration::from_millis(config.latency_ms),
        config.fail_actions,
    ));
    info!("Using {} collaborator", collaborator.name());

    let (tx, rx) = mpsc::channel();
    let dispatcher = Dispatcher {
        collaborator,
        timeout: Duration::from_secs(config.timeout_secs),
        tx,
    };
    let mut session = Session::new(config.secret);
    let mut tui = TuiState::default();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut session, &mut tui, &dispatcher, &rx)
    });
    ratatui::restore();

    info!("Shutting down on {}", session.page.title());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    tui: &mut TuiState,
    dispatcher: &Dispatcher,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, session, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending keys before next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            needs_redraw = true;
            if let TuiEvent::Key(key) = event {
                let effect = update(session, Event::KeyPress(key));
                if dispatcher.apply(effect, tui) {
                    return Ok(());
                }
            }
            next = poll_event_immediate()?;
        }

        // Handle follow-ups from finished actions
        while let Ok(event) = rx.try_recv() {
            needs_redraw = true;
            tui.running = tui.running.saturating_sub(1);
            debug!("Event loop received: {:?}", event);
            let effect = update(session, event);
            if dispatcher.apply(effect, tui) {
                return Ok(());
            }
        }
    }
}
