//! Screen flow around rounds: start screen, game, end overlay

use crate::audio::{play_with_retry, RetryPolicy, Track, TrackPlayer};
use crate::config::GameConfig;
use crate::round::{Round, StepOutcome};
use std::time::Duration;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Game,
    /// Final score drawn over the frozen game screen
    End,
}

/// Ties a round to its screens and music
pub struct Session {
    round: Round,
    screen: Screen,
    retry: RetryPolicy,
    final_score: Option<u32>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let retry = RetryPolicy::from_config(&config);
        Self {
            round: Round::new(config),
            screen: Screen::Start,
            retry,
            final_score: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Score of the last finished round
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Leave the start screen and begin a round.
    ///
    /// Music is unlocked with the menu track first, then swapped for the
    /// game track. Does nothing while a round is running.
    pub fn start_game<P, S>(&mut self, player: &mut P, mut sleep: S)
    where
        P: TrackPlayer + ?Sized,
        S: FnMut(Duration),
    {
        if self.round.is_running() {
            return;
        }

        self.screen = Screen::Game;

        play_with_retry(player, Track::Menu, self.retry, &mut sleep);
        player.stop(Track::Menu);
        play_with_retry(player, Track::Game, self.retry, &mut sleep);

        self.final_score = None;
        self.round.start();
    }

    /// Forward a tap to the round
    pub fn tap(&mut self) -> bool {
        self.round.tap()
    }

    /// Step the round to `ts` (ms) and handle the end of it
    pub fn frame<P>(&mut self, ts: f64, player: &mut P) -> Option<StepOutcome>
    where
        P: TrackPlayer + ?Sized,
    {
        let outcome = self.round.step(ts)?;
        if outcome.ended {
            player.stop(Track::Game);
            self.final_score = Some(self.round.score());
            self.screen = Screen::End;
        }
        Some(outcome)
    }

    /// Abandon whatever is on screen and return to the start screen
    pub fn back_to_start<P, S>(&mut self, player: &mut P, sleep: S)
    where
        P: TrackPlayer + ?Sized,
        S: FnMut(Duration),
    {
        self.round.reset();
        self.screen = Screen::Start;
        player.stop(Track::Game);
        play_with_retry(player, Track::Menu, self.retry, sleep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::FakePlayer;
    use crate::round::RoundPhase;

    fn no_sleep(_: Duration) {}

    #[test]
    fn starts_on_start_screen() {
        let session = Session::new(GameConfig::default());
        assert_eq!(session.screen(), Screen::Start);
        assert_eq!(session.round().phase(), RoundPhase::Idle);
        assert_eq!(session.final_score(), None);
    }

    #[test]
    fn start_game_swaps_music_then_runs() {
        let mut session = Session::new(GameConfig::default());
        let mut player = FakePlayer::default();

        session.start_game(&mut player, no_sleep);

        assert_eq!(session.screen(), Screen::Game);
        assert!(session.round().is_running());
        assert_eq!(session.round().state().velocity, 900.0);
        assert_eq!(player.calls, vec!["play menu", "stop menu", "play game"]);
    }

    #[test]
    fn start_game_is_ignored_while_running() {
        let mut session = Session::new(GameConfig::default());
        let mut player = FakePlayer::default();
        session.start_game(&mut player, no_sleep);
        session.frame(0.0, &mut player);
        session.tap();
        let before = *session.round().state();

        session.start_game(&mut player, no_sleep);
        assert_eq!(session.round().state(), &before);
        assert_eq!(player.calls.len(), 3);
    }

    #[test]
    fn blocked_audio_does_not_stop_the_game() {
        let mut session = Session::new(GameConfig::default());
        let mut player = FakePlayer::failing(u32::MAX);
        let mut slept = Duration::ZERO;

        session.start_game(&mut player, |d| slept += d);

        assert!(session.round().is_running());
        assert_eq!(slept, Duration::from_millis(300));
        assert_eq!(
            player.calls,
            vec!["play menu", "play menu", "stop menu", "play game", "play game"]
        );
    }

    #[test]
    fn round_end_stops_music_and_shows_score() {
        let config = GameConfig {
            duration_ms: 1_000,
            ..Default::default()
        };
        let mut session = Session::new(config);
        let mut player = FakePlayer::default();
        session.start_game(&mut player, no_sleep);

        let mut ts = 0.0;
        while session.screen() == Screen::Game {
            session.tap();
            session.frame(ts, &mut player);
            ts += 16.0;
        }

        assert_eq!(session.screen(), Screen::End);
        assert_eq!(session.round().phase(), RoundPhase::Ended);
        assert_eq!(session.final_score(), Some(session.round().score()));
        assert!(session.final_score().unwrap() > 0);
        assert_eq!(player.calls.last().map(String::as_str), Some("stop game"));

        // inert once ended
        assert_eq!(session.frame(ts, &mut player), None);
        assert!(!session.tap());
    }

    #[test]
    fn back_to_start_resets_everything() {
        let mut session = Session::new(GameConfig::default());
        let mut player = FakePlayer::default();
        session.start_game(&mut player, no_sleep);
        session.frame(0.0, &mut player);
        session.tap();
        session.frame(20.0, &mut player);
        player.calls.clear();

        session.back_to_start(&mut player, no_sleep);

        assert_eq!(session.screen(), Screen::Start);
        assert_eq!(session.round().phase(), RoundPhase::Idle);
        assert_eq!(session.round().state().total_angle, 0.0);
        assert_eq!(session.round().state().velocity, 0.0);
        assert_eq!(session.round().score(), 0);
        assert_eq!(player.calls, vec!["stop game", "play menu"]);
    }

    #[test]
    fn next_game_starts_clean() {
        let config = GameConfig {
            duration_ms: 500,
            ..Default::default()
        };
        let mut session = Session::new(config);
        let mut player = FakePlayer::default();
        session.start_game(&mut player, no_sleep);
        session.frame(0.0, &mut player);
        session.frame(500.0, &mut player);
        assert_eq!(session.screen(), Screen::End);

        session.back_to_start(&mut player, no_sleep);
        session.start_game(&mut player, no_sleep);

        assert_eq!(session.final_score(), None);
        let outcome = session.frame(10_000.0, &mut player).unwrap();
        assert_eq!(outcome.remaining_ms, 500.0);
        assert_eq!(outcome.score_changed, None);
    }
}
