//! Guess handling for a live round.

use crate::models::{Game, GuessOutcome, Round, RoundPhase, MAX_GUESSES};

/// Guesses are compared ignoring surrounding whitespace and letter case.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Submit a guess against the current round.
///
/// Guesses are only accepted while the round is Ready with an unrevealed
/// player; everything else (Idle, Resolving, already revealed) is ignored
/// without touching the round.
pub fn submit_guess(game: &mut Game, guess: &str) -> GuessOutcome {
    let round = &mut game.round;
    if round.phase != RoundPhase::Ready || round.revealed {
        return GuessOutcome::Ignored;
    }
    let Some(player) = round.resolved_player.clone() else {
        return GuessOutcome::Ignored;
    };

    round.guess_count += 1;

    if normalize(guess) == normalize(&player) {
        round.revealed = true;
        round.phase = RoundPhase::Revealed;
        round.status_message = "Congratulations! You guessed correctly!".to_string();
        return GuessOutcome::Correct;
    }

    if round.guess_count >= MAX_GUESSES {
        round.revealed = true;
        round.phase = RoundPhase::Revealed;
        round.status_message = format!("Sorry, you've used all attempts. The player was: {player}");
        return GuessOutcome::OutOfGuesses;
    }

    let attempts = round.guess_count;
    round.status_message = format!("Incorrect guess. Try again! (Attempt {attempts}/{MAX_GUESSES})");
    GuessOutcome::Incorrect {
        attempts_left: round.attempts_left(),
    }
}

/// Abandon the current round and return the game to Idle.
///
/// The session itself (its id, grid and the count of rounds ever started)
/// is untouched, so in-flight resolutions from before the reset can never
/// re-apply.
pub fn reset_round(game: &mut Game) {
    game.round = Round::default();
}
