//! Event Handling
//!
//! Maps keyboard and timer events to viewer actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Force quit (Ctrl+C)
    ForceQuit,
    /// Start editing the file path
    OpenFile,
    /// Confirm (Enter): load the file being edited
    Submit,
    /// Toggle help view
    ToggleHelp,
    /// Escape - close modals, cancel editing
    Escape,
    /// Focus the next control (Tab)
    NextControl,
    /// Focus the previous control (Shift+Tab)
    PrevControl,
    /// Next value of the focused control
    CycleNext,
    /// Previous value of the focused control
    CyclePrev,
    /// Select the previous card
    SelectUp,
    /// Select the next card
    SelectDown,
    /// Jump back one page of cards
    PageUp,
    /// Jump forward one page of cards
    PageDown,
    /// Delete character
    DeleteKey,
    /// Regular input character
    Input(KeyEvent),
    /// Timer tick
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppAction>,
    _tx: mpsc::Sender<AppAction>,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let tx_clone = tx.clone();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                let tick = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                tokio::select! {
                    _ = tick => {
                        if tx_clone.send(AppAction::Tick).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        if let Some(action) = Self::map_event(evt) {
                            if tx_clone.send(action).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Wait for the next action
    pub async fn next(&mut self) -> Option<AppAction> {
        self.rx.recv().await
    }

    fn map_event(event: Event) -> Option<AppAction> {
        match event {
            Event::Key(key) => Self::map_key_event(key),
            _ => None,
        }
    }

    /// Map a key event to an app action
    ///
    /// Printable characters always arrive as `Input` so that the path editor
    /// receives them; the app decides what they mean in list mode.
    pub fn map_key_event(key: KeyEvent) -> Option<AppAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(AppAction::ForceQuit),
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(AppAction::Quit),
            (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(AppAction::OpenFile),

            (KeyModifiers::SHIFT, KeyCode::BackTab) => Some(AppAction::PrevControl),

            (KeyModifiers::NONE, code) | (KeyModifiers::SHIFT, code) => match code {
                KeyCode::Esc => Some(AppAction::Escape),
                KeyCode::Enter => Some(AppAction::Submit),
                KeyCode::F(1) => Some(AppAction::ToggleHelp),

                KeyCode::Tab => Some(AppAction::NextControl),
                KeyCode::BackTab => Some(AppAction::PrevControl),
                KeyCode::Right => Some(AppAction::CycleNext),
                KeyCode::Left => Some(AppAction::CyclePrev),

                KeyCode::Up => Some(AppAction::SelectUp),
                KeyCode::Down => Some(AppAction::SelectDown),
                KeyCode::PageUp => Some(AppAction::PageUp),
                KeyCode::PageDown => Some(AppAction::PageDown),

                KeyCode::Backspace => Some(AppAction::DeleteKey),

                _ => Some(AppAction::Input(key)),
            },

            _ => None,
        }
    }
}
