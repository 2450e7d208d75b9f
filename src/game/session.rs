use rand::{rngs::StdRng, SeedableRng};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use super::{
    body::Body,
    config::GameConfig,
    direction::Direction,
    error::GameError,
    fruit::{Fruit, FruitSpawner},
    grid::{Cell, Grid},
    snapshot::{SessionStatus, Snapshot},
};

/// Terminal notice produced once when the snake bites itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub ticks: u64,
}

impl GameOver {
    pub fn message(&self) -> &'static str {
        "Game Over"
    }
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score {})", self.message(), self.score)
    }
}

/// What happened during one call to [`Session::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The head has no heading yet and stayed put
    Waiting,
    /// The snake moved one step
    Moved,
    /// The snake moved onto the fruit and will grow
    AteFruit { score: u32 },
    /// The head ran into the body; the session is over
    GameOver(GameOver),
    /// The session had already ended, nothing changed
    Halted,
}

/// One game: grid, snake, fruit and score, advanced one tick at a time.
///
/// The session never touches a terminal or a clock; callers drive
/// [`Session::tick`] at [`Session::tick_interval`] and paint
/// [`Session::snapshot`].
pub struct Session {
    config: GameConfig,
    grid: Grid,
    body: Body,
    fruit: Fruit,
    spawner: FruitSpawner,
    rng: StdRng,
    score: u32,
    ticks: u64,
    status: SessionStatus,
}

impl Session {
    /// Start a session with the head and fruit placed at random
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        let spawner = FruitSpawner::new(config.fruit_region);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let body = Body::new(spawner.random_cell(&grid, &mut rng));
        let fruit = spawner.spawn(&grid, &mut rng);

        info!(
            width = grid.width(),
            height = grid.height(),
            seed = ?config.seed,
            "session started"
        );

        Ok(Self {
            config,
            grid,
            body,
            fruit,
            spawner,
            rng,
            score: 0,
            ticks: 0,
            status: SessionStatus::Running,
        })
    }

    /// Start a session from an explicit layout
    pub fn with_layout(config: GameConfig, body: Body, fruit: Cell) -> Result<Self, GameError> {
        let mut session = Self::new(config)?;

        for cell in body.cells().chain(std::iter::once(fruit)) {
            if !session.grid.contains(cell) {
                return Err(GameError::CellOutOfBounds {
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        session.body = body;
        session.fruit = Fruit::new(fruit);
        Ok(session)
    }

    /// Steer the snake; reversals are ignored
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.body.set_direction(direction);
        if !accepted {
            debug!(?direction, "reversal ignored");
        }
        accepted
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == SessionStatus::GameOver {
            return TickOutcome::Halted;
        }

        // a head without a heading stays put, the rest of the tick still runs
        let head_moving = self.body.direction().is_some();
        self.body.advance(&self.grid);
        if head_moving {
            self.ticks += 1;
        }

        if self.body.head_collides() {
            self.status = SessionStatus::GameOver;
            let game_over = GameOver {
                score: self.score,
                ticks: self.ticks,
            };
            info!(score = self.score, ticks = self.ticks, "snake bit itself");
            return TickOutcome::GameOver(game_over);
        }

        // fruit is only eaten by a head that arrives on it, so an idle
        // starting head cannot grow onto itself before the first key press
        if head_moving && self.body.head_cell() == self.fruit.cell() {
            self.score += 1;
            self.fruit = self
                .spawner
                .respawn(&self.grid, self.fruit.cell(), &mut self.rng);
            self.body.grow();
            debug!(
                score = self.score,
                length = self.body.len(),
                fruit = ?self.fruit.cell(),
                "fruit eaten"
            );
            return TickOutcome::AteFruit { score: self.score };
        }

        if head_moving {
            TickOutcome::Moved
        } else {
            TickOutcome::Waiting
        }
    }

    /// Throw away the current game and start over with the same settings
    pub fn restart(&mut self) {
        self.body = Body::new(self.spawner.random_cell(&self.grid, &mut self.rng));
        self.fruit = self.spawner.spawn(&self.grid, &mut self.rng);
        self.score = 0;
        self.ticks = 0;
        self.status = SessionStatus::Running;
        info!("session restarted");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.grid,
            &self.body,
            &self.fruit,
            self.score,
            self.ticks,
            self.status,
        )
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks in which the snake actually moved
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }
}
