use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Cell, CellState, GameOver, Snapshot};
use crate::metrics::SessionMetrics;

/// Everything the renderer needs besides the board itself
pub struct Overlay<'a> {
    pub paused: bool,
    pub game_over: Option<&'a GameOver>,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        metrics: &SessionMetrics,
        overlay: Overlay<'_>,
    ) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), header);

        // two terminal columns per cell keeps cells roughly square
        let board_width = (snapshot.width as u16).saturating_mul(2).saturating_add(2);
        let board_height = (snapshot.height as u16).saturating_add(2);
        let [board] = Layout::horizontal([Constraint::Length(board_width)])
            .flex(Flex::Center)
            .areas(body);
        let [board] = Layout::vertical([Constraint::Length(board_height)])
            .flex(Flex::Center)
            .areas(board);

        frame.render_widget(self.render_grid(snapshot), board);

        if let Some(game_over) = overlay.game_over {
            let popup = centered(body, 30, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(game_over, metrics), popup);
        } else if overlay.paused {
            let popup = centered(body, 20, 3);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_paused(), popup);
        }

        frame.render_widget(self.render_controls(), footer);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let lines: Vec<Line> = snapshot
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(x, &state)| cell_span(state, Cell::new(x, y) == snapshot.head))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &SessionMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.max(snapshot.score).to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, game_over: &GameOver, metrics: &SessionMetrics) -> Paragraph<'static> {
        let text = vec![
            Line::from(Span::styled(
                game_over.message().to_uppercase(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    game_over.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Games played: {}", metrics.games_played)),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart  "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_paused(&self) -> Paragraph<'static> {
        Paragraph::new("PAUSED")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Cyan);
        let text = Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("Space", key),
            Span::raw(" pause | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(state: CellState, is_head: bool) -> Span<'static> {
    match state {
        CellState::Body if is_head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        CellState::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
        CellState::Fruit => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellState::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Body, Direction, GameConfig, Session};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn session() -> Session {
        Session::with_layout(
            GameConfig::new(6, 4).with_seed(1),
            Body::new(Cell::new(2, 1)),
            Cell::new(4, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(cell_span(CellState::Body, true).content, "■ ");
        assert_eq!(cell_span(CellState::Body, false).content, "□ ");
        assert_eq!(cell_span(CellState::Fruit, false).content, "O ");
        assert_eq!(cell_span(CellState::Empty, false).content, ". ");
    }

    #[test]
    fn test_draws_board_and_score() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let snapshot = session().snapshot();
        let metrics = SessionMetrics::new();

        terminal
            .draw(|frame| {
                Renderer::new().render(
                    frame,
                    &snapshot,
                    &metrics,
                    Overlay {
                        paused: false,
                        game_over: None,
                    },
                )
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score"));
        assert!(text.contains('■'));
        assert!(text.contains('O'));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_draws_game_over_notice() {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let mut session = session();
        session.set_direction(Direction::Right);
        session.tick();
        let snapshot = session.snapshot();
        let metrics = SessionMetrics::new();
        let game_over = GameOver { score: 3, ticks: 1 };

        terminal
            .draw(|frame| {
                Renderer::new().render(
                    frame,
                    &snapshot,
                    &metrics,
                    Overlay {
                        paused: false,
                        game_over: Some(&game_over),
                    },
                )
            })
            .unwrap();

        assert!(screen_text(&terminal).contains("GAME OVER"));
    }
}
