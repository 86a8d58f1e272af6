//! Hold-to-repeat handler for cursor movement.
//!
//! Moving the hovering piece across the board one keypress at a time is
//! tedious, so held movement keys repeat: an initial delay (DAS), then a
//! steady repeat rate (ARR). Terminals that do not emit key release events
//! are handled with a timeout — a direction with no fresh press for a short
//! while is treated as released.

use std::time::Instant;

use arrayvec::ArrayVec;

use tui_pentomino_types::{InputAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks the held movement direction and produces repeat actions.
#[derive(Debug, Clone)]
pub struct KeyRepeater {
    held: Option<InputAction>,
    last_key_time: Instant,
    das_timer: u32,
    arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl KeyRepeater {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Register a key press. Returns the action to apply now, or None when
    /// the press is a terminal auto-repeat of the direction already held
    /// (DAS/ARR produces those repeats instead).
    pub fn handle_key_press(&mut self, action: InputAction) -> Option<InputAction> {
        if !action.repeats() {
            return Some(action);
        }

        self.last_key_time = Instant::now();
        if self.held == Some(action) {
            return None;
        }
        self.held = Some(action);
        self.das_timer = 0;
        self.arr_accumulator = 0;
        Some(action)
    }

    /// Register a key release.
    pub fn handle_key_release(&mut self, action: InputAction) {
        if self.held == Some(action) {
            self.release();
        }
    }

    /// Advance the repeat timers and collect actions to apply this tick.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputAction, 32> {
        let mut actions = ArrayVec::<InputAction, 32>::new();

        let Some(held) = self.held else {
            return actions;
        };

        // Auto-release when the terminal never reports key releases.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.release();
            return actions;
        }

        let prev_das = self.das_timer;
        self.das_timer += elapsed_ms;
        if self.das_timer >= self.das_delay {
            let excess = if prev_das < self.das_delay {
                self.das_timer - self.das_delay
            } else {
                elapsed_ms
            };
            self.arr_accumulator += excess;
            while self.arr_accumulator >= self.arr_rate {
                let _ = actions.try_push(held);
                self.arr_accumulator -= self.arr_rate;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.release();
        self.last_key_time = Instant::now();
    }

    fn release(&mut self) {
        self.held = None;
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }
}

impl Default for KeyRepeater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_press_passes_through_and_repeats_after_das() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            kr.handle_key_press(InputAction::CursorLeft),
            Some(InputAction::CursorLeft)
        );

        // Before DAS expires: no repeats.
        assert!(kr.update(99).is_empty());
        // Exactly at DAS: still none (repeats need excess over the delay).
        assert!(kr.update(1).is_empty());
        // One ARR interval past DAS: one repeat.
        assert_eq!(kr.update(25).as_slice(), &[InputAction::CursorLeft]);
        assert_eq!(kr.update(25).as_slice(), &[InputAction::CursorLeft]);
    }

    #[test]
    fn held_direction_suppresses_terminal_auto_repeat() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert!(kr.handle_key_press(InputAction::CursorRight).is_some());
        assert_eq!(kr.handle_key_press(InputAction::CursorRight), None);
    }

    #[test]
    fn switching_direction_restarts_das() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        kr.handle_key_press(InputAction::CursorLeft);
        kr.update(150);
        assert_eq!(
            kr.handle_key_press(InputAction::CursorRight),
            Some(InputAction::CursorRight)
        );
        // DAS starts over for the new direction.
        assert!(kr.update(99).is_empty());
    }

    #[test]
    fn non_repeating_actions_are_never_tracked() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            kr.handle_key_press(InputAction::Place),
            Some(InputAction::Place)
        );
        assert_eq!(
            kr.handle_key_press(InputAction::Place),
            Some(InputAction::Place)
        );
        assert!(kr.update(1000).is_empty());
    }

    #[test]
    fn release_stops_repeats() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        kr.handle_key_press(InputAction::CursorDown);
        assert!(!kr.update(200).is_empty());
        kr.handle_key_release(InputAction::CursorDown);
        assert!(kr.update(200).is_empty());
    }

    #[test]
    fn auto_release_after_timeout_without_release_events() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(50);

        kr.handle_key_press(InputAction::CursorLeft);
        // Simulate a silent terminal by moving the last press into the past.
        kr.last_key_time = Instant::now() - Duration::from_millis(51);

        assert!(kr.update(200).is_empty());
        assert!(kr.update(200).is_empty());
    }

    #[test]
    fn reset_clears_held_state() {
        let mut kr = KeyRepeater::with_config(100, 25).with_key_release_timeout_ms(10_000);

        kr.handle_key_press(InputAction::CursorUp);
        assert!(!kr.update(200).is_empty());
        kr.reset();
        assert!(kr.update(200).is_empty());
    }
}
