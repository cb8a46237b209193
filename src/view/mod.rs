//! TUI rendering and terminal management (impure shell).
//!
//! Owns the terminal, the event loop and the wiring between input events
//! and the pure core: key events go through the bindings to the action
//! handler, scroll/resize events feed every card's lazy lifecycle, each
//! tick fires due lazy timers, and each render pass runs the cards' frame
//! callbacks before drawing.

pub mod card;
pub mod layout;
mod styles;

pub use card::{fit_width, IssueCard};
pub use layout::{card_height, layout_cards, CardProbe, CardSlot, BODY_MAX_LINES, CARD_GAP};
pub use styles::{CardStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::lazy::Viewport;
use crate::model::{AppError, KeyAction};
use crate::state::{handle_key_action, scroll_to_reveal, AppState};
use crossterm::{
    event::{self, Event, KeyEventKind, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Event poll timeout; one lazy tick and one render pass per interval when
/// idle.
const TICK: Duration = Duration::from_millis(50);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error.
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    styles: CardStyles,
    bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI application on the real terminal.
    ///
    /// Sets up raw mode, the alternate screen and mouse capture.
    pub fn new(state: AppState, styles: CardStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state,
            styles,
            bindings: KeyBindings::new(),
        })
    }

    /// Run the event loop until quit, restoring the terminal on all paths.
    pub fn run(mut self) -> Result<(), TuiError> {
        let result = self.event_loop();
        // Teardown is synchronous: stopping every lifecycle first means no
        // deferred callback can observe a disposed card.
        self.state.stop_all();
        let _ = io::stdout().execute(crossterm::event::DisableMouseCapture);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        result
    }

    fn event_loop(&mut self) -> Result<(), TuiError> {
        loop {
            let now = Instant::now();
            self.tick(now)?;
            self.draw()?;

            if !event::poll(TICK)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = self.bindings.resolve(key) {
                        if action == KeyAction::Quit {
                            debug!("Quit requested");
                            return Ok(());
                        }
                        self.apply_action(action, Instant::now())?;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        self.apply_action(KeyAction::ScrollUp, Instant::now())?;
                    }
                    MouseEventKind::ScrollDown => {
                        self.apply_action(KeyAction::ScrollDown, Instant::now())?;
                    }
                    _ => {}
                },
                Event::Resize(_, _) => {
                    // Resize and orientation changes re-evaluate visibility.
                    self.dispatch_viewport_event(Instant::now())?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application over an existing terminal (used with
    /// `TestBackend` in tests).
    pub fn with_terminal(terminal: Terminal<B>, state: AppState, styles: CardStyles) -> Self {
        Self {
            terminal,
            state,
            styles,
            bindings: KeyBindings::new(),
        }
    }

    /// Read access to the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read access to the terminal (buffer inspection in tests).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The card-list viewport: width, list height, full terminal height.
    /// The bottom row is reserved for the status line.
    fn viewport_size(&self) -> io::Result<(u16, u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height.saturating_sub(1), size.height))
    }

    fn viewport(&self) -> io::Result<Viewport> {
        let (_, list_height, full_height) = self.viewport_size()?;
        Ok(Viewport::new(
            Some(i32::from(list_height)),
            i32::from(full_height),
        ))
    }

    /// Apply a key action, then notify every card's lazy lifecycle if the
    /// viewport moved.
    pub fn apply_action(&mut self, action: KeyAction, now: Instant) -> Result<(), TuiError> {
        let (width, list_height, _) = self.viewport_size()?;
        let (slots, total_height) =
            layout_cards(self.state.cards().iter().map(|card| &card.issue));

        let scroll_before = self.state.scroll_offset;
        let selected_before = self.state.selected;

        let state = std::mem::replace(&mut self.state, AppState::loading());
        let mut state = handle_key_action(state, action, usize::from(list_height), total_height);

        // Selection moves pull the selected card into view.
        if state.selected != selected_before {
            if let Some(slot) = slots.get(state.selected) {
                state.scroll_offset = scroll_to_reveal(
                    state.scroll_offset,
                    slot.y,
                    usize::from(slot.height),
                    usize::from(list_height),
                );
            }
        }
        self.state = state;

        if self.state.scroll_offset != scroll_before {
            self.dispatch_scroll(now, width, &slots)?;
        }
        Ok(())
    }

    /// Feed a viewport event (scroll/resize) to every card's lazy loader.
    pub fn dispatch_viewport_event(&mut self, now: Instant) -> Result<(), TuiError> {
        let (width, _, _) = self.viewport_size()?;
        let (slots, _) = layout_cards(self.state.cards().iter().map(|card| &card.issue));
        self.dispatch_scroll(now, width, &slots)
    }

    fn dispatch_scroll(
        &mut self,
        now: Instant,
        width: u16,
        slots: &[CardSlot],
    ) -> Result<(), TuiError> {
        let viewport = self.viewport()?;
        let scroll_offset = self.state.scroll_offset;
        for (index, card) in self.state.cards_mut().iter_mut().enumerate() {
            let probe = match slots.get(index) {
                Some(slot) => CardProbe::new(*slot, scroll_offset, width),
                None => CardProbe::detached(),
            };
            card.lazy.handle_viewport_event(now, &probe, viewport);
        }
        Ok(())
    }

    /// Fire due lazy timers for every card.
    pub fn tick(&mut self, now: Instant) -> Result<(), TuiError> {
        let (width, _, _) = self.viewport_size()?;
        let viewport = self.viewport()?;
        let (slots, total_height) =
            layout_cards(self.state.cards().iter().map(|card| &card.issue));
        let (_, list_height, _) = self.viewport_size()?;
        self.state
            .clamp_scroll(total_height.saturating_sub(usize::from(list_height)));

        let scroll_offset = self.state.scroll_offset;
        for (index, card) in self.state.cards_mut().iter_mut().enumerate() {
            let probe = match slots.get(index) {
                Some(slot) => CardProbe::new(*slot, scroll_offset, width),
                None => CardProbe::detached(),
            };
            card.lazy.poll(now, &probe, viewport);
        }
        Ok(())
    }

    /// Run frame callbacks and render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let (width, _, _) = self.viewport_size()?;
        let (slots, _) = layout_cards(self.state.cards().iter().map(|card| &card.issue));

        // The frame callback runs before painting, mirroring an
        // animation-frame measurement.
        let scroll_offset = self.state.scroll_offset;
        for (index, card) in self.state.cards_mut().iter_mut().enumerate() {
            let probe = match slots.get(index) {
                Some(slot) => CardProbe::new(*slot, scroll_offset, width),
                None => CardProbe::detached(),
            };
            card.lazy.on_frame(&probe);
        }

        let state = &self.state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            let area = frame.area();
            if area.height == 0 {
                return;
            }
            let list = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
            let status_bar = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

            if state.is_loading() {
                let banner_y = list.y + list.height / 2;
                let banner = Rect::new(list.x, banner_y, list.width, 1);
                frame.render_widget(
                    Paragraph::new(Line::styled("Loading...", styles.status)).centered(),
                    banner,
                );
            } else {
                for (index, card) in state.cards().iter().enumerate() {
                    let Some(slot) = slots.get(index) else {
                        continue;
                    };
                    let top = slot.y as i64 - state.scroll_offset as i64;
                    let bottom = top + i64::from(slot.height);
                    if bottom <= 0 || top >= i64::from(list.height) {
                        continue;
                    }
                    // Partially visible cards are clipped to the viewport.
                    let y0 = top.max(0) as u16;
                    let visible = (bottom.min(i64::from(list.height)) - top.max(0)) as u16;
                    let rect = Rect::new(list.x, list.y + y0, list.width, visible);
                    frame.render_widget(
                        IssueCard::new(
                            &card.issue,
                            card.lazy.mount_decision(),
                            index == state.selected,
                            styles,
                        ),
                        rect,
                    );
                }
            }

            let hint = state
                .status
                .as_deref()
                .unwrap_or("q quit · j/k scroll · Tab next card · Enter view more");
            frame.render_widget(
                Paragraph::new(Line::styled(hint, styles.status)),
                status_bar,
            );
        })?;
        Ok(())
    }
}
