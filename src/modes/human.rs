use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::game::{GameConfig, GameOver, Session, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Overlay, Renderer};

/// Redraw period, independent of the game tempo
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    session: Session,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    paused: bool,
    game_over: Option<GameOver>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let session = Session::new(config).context("Failed to start game session")?;

        Ok(Self {
            session,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            paused: false,
            game_over: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = setup_or_restore(setup_terminal, restore_terminal_mode)?;

        let result = self.run_game_loop(&mut terminal).await;

        // restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.session.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(RENDER_INTERVAL);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            tick_interval = ?self.session.tick_interval(),
            "game loop started"
        );

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.draw(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(score = self.session.score(), "quit requested");
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = self.session.snapshot();
        let overlay = Overlay {
            paused: self.paused,
            game_over: self.game_over.as_ref(),
        };

        terminal
            .draw(|frame| {
                self.renderer.render(frame, &snapshot, &self.metrics, overlay);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                // applied right away, the last press before a tick wins
                if !self.paused {
                    self.session.set_direction(direction);
                }
            }
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if self.paused {
            return;
        }

        match self.session.tick() {
            TickOutcome::GameOver(game_over) => {
                info!(score = game_over.score, ticks = game_over.ticks, "game over");
                self.metrics.on_game_over(game_over.score);
                self.game_over = Some(game_over);
            }
            TickOutcome::AteFruit { score } => {
                self.metrics.resume();
                debug!(score, "score increased");
            }
            // the play clock starts with the first step the snake takes
            TickOutcome::Moved => self.metrics.resume(),
            TickOutcome::Waiting | TickOutcome::Halted => {}
        }
    }

    fn toggle_pause(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            self.metrics.pause();
        } else if self.session.ticks() > 0 {
            self.metrics.resume();
        }
        debug!(paused = self.paused, "pause toggled");
    }

    fn restart(&mut self) {
        self.session.restart();
        self.metrics.on_game_start();
        self.paused = false;
        self.game_over = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo `enable_raw_mode` and the alternate screen when setup bails out
fn restore_terminal_mode() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stderr(), LeaveAlternateScreen)
}

/// Run `setup` with raw mode already on. On failure `restore` runs before
/// the setup error is returned, so the shell is not left in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Err(restore_err) = restore() {
                error!(?restore_err, "failed to restore terminal after setup error");
            }
            Err(err)
        }
    }
}
