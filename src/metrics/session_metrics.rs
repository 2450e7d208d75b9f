use std::time::{Duration, Instant};

/// Play clock and best score for the current program run.
///
/// The clock only runs while a game is actually being played. It starts on
/// the first move, so waiting for the first key press, pausing or sitting on
/// the game over screen does not count.
pub struct SessionMetrics {
    played: Duration,
    running_since: Option<Instant>,
    pub best_score: u32,
    pub games_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            played: Duration::ZERO,
            running_since: None,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Time spent playing the current game
    pub fn elapsed(&self) -> Duration {
        self.played + self.running_since.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.played += since.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Reset the clock for a new game; it stays stopped until `resume`
    pub fn on_game_start(&mut self) {
        self.played = Duration::ZERO;
        self.running_since = None;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.pause();
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = SessionMetrics::new();

        metrics.played = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.played = Duration::ZERO;
        assert_eq!(metrics.format_time(), "00:00");

        metrics.played = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = SessionMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.best_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_idle_until_first_move() {
        let metrics = SessionMetrics::new();
        assert!(!metrics.is_running());
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(metrics.elapsed(), Duration::ZERO);
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_clock_stops_while_paused() {
        let mut metrics = SessionMetrics::new();
        metrics.resume();
        metrics.pause();
        assert!(!metrics.is_running());

        let frozen = metrics.elapsed();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(metrics.elapsed(), frozen);

        metrics.resume();
        assert!(metrics.is_running());
        std::thread::sleep(Duration::from_millis(30));
        assert!(metrics.elapsed() >= frozen + Duration::from_millis(30));
    }

    #[test]
    fn test_game_over_stops_clock() {
        let mut metrics = SessionMetrics::new();
        metrics.resume();
        metrics.on_game_over(3);
        assert!(!metrics.is_running());
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = SessionMetrics::new();
        metrics.resume();
        std::thread::sleep(Duration::from_millis(50));
        assert!(metrics.elapsed().as_millis() >= 50);

        metrics.on_game_start();
        assert_eq!(metrics.elapsed(), Duration::ZERO);
        assert!(!metrics.is_running());
    }
}
