/// Fixed-step tick scheduling
///
/// Wall-clock frame time is accumulated and paid out in whole simulation
/// ticks, so the simulation advances at the same rate regardless of how
/// often the window wakes up.
use std::time::{Duration, Instant};

/// Default simulation tick (~33 ticks per second)
pub const TICK_DURATION: Duration = Duration::from_millis(30);

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
#[derive(Debug)]
pub struct GameLoop {
    /// Length of one simulation tick
    tick_duration: Duration,

    /// Accumulated time not yet paid out as ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total ticks handed out
    tick_count: u64,
}

impl GameLoop {
    /// Create a game loop with the default tick duration
    pub fn new() -> Self {
        Self::with_tick_duration(TICK_DURATION)
    }

    pub fn with_tick_duration(tick_duration: Duration) -> Self {
        let now = Instant::now();
        Self {
            tick_duration,
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall clock and return the ticks it pays for
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        // If paused, don't accumulate time for ticks
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Time beyond the per-frame cap is dropped rather than replayed later
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.tick_duration {
            log::debug!("Dropping {:?} of simulation time", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks handed out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert_eq!(game_loop.tick_duration(), ms(30));
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_pause_resume() {
        let mut game_loop = GameLoop::new();
        assert!(!game_loop.is_paused());

        game_loop.pause();
        assert!(game_loop.is_paused());

        game_loop.resume();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();

        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert_eq!(game_loop.advance(ms(500)), 0);

        // Nothing banked while paused
        game_loop.resume();
        assert_eq!(game_loop.advance(ms(10)), 0);
    }

    #[test]
    fn test_resume_discards_partial_tick() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(ms(25)), 0);
        game_loop.pause();
        game_loop.resume();
        assert_eq!(game_loop.advance(ms(25)), 0);
        assert_eq!(game_loop.advance(ms(5)), 1);
    }

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(ms(20)), 0);
        assert_eq!(game_loop.advance(ms(20)), 1);
        assert_eq!(game_loop.advance(ms(20)), 1);
        assert_eq!(game_loop.advance(ms(65)), 2);
        assert_eq!(game_loop.tick_count(), 4);
        assert_eq!(game_loop.frame_count(), 4);
    }

    #[test]
    fn test_max_ticks_per_frame() {
        let mut game_loop = GameLoop::new();

        // 300ms would pay for 10 ticks
        assert_eq!(game_loop.advance(ms(300)), MAX_TICKS_PER_FRAME);
        // The excess is not replayed on the next frame
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_custom_tick_duration() {
        let mut game_loop = GameLoop::with_tick_duration(ms(10));
        assert_eq!(game_loop.advance(ms(35)), 3);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_elapsed_time() {
        let game_loop = GameLoop::new();
        thread::sleep(ms(10));
        assert!(game_loop.elapsed() >= ms(10));
    }
}
