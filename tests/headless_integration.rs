use std::sync::mpsc::{self, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wonderfield::{
    cue::{Cue, Recorder},
    difficulty::Difficulty,
    engine::{Engine, Flow},
    input::command_for,
    round::Outcome,
    runtime::{ChannelEventSource, GameEvent, Runner},
    session::SessionConfig,
    word_bank::{WordBank, WordEntry},
};

// Headless integration using the internal runtime + Engine without a TTY.
// Keys go through the same mapping the binary uses.

fn engine(word: &str, difficulty: Difficulty) -> (Engine<Recorder>, Instant) {
    let bank = WordBank::new(
        "headless",
        vec![WordEntry::new(word, "What is hidden here?").unwrap()],
    )
    .unwrap();
    let config = SessionConfig {
        difficulty,
        ..SessionConfig::default()
    };
    let now = Instant::now();
    (Engine::seeded(config, bank, Recorder::default(), 3, now), now)
}

fn send_keys(tx: &Sender<GameEvent>, codes: &[KeyCode]) {
    for code in codes {
        tx.send(GameEvent::Key(KeyEvent::new(*code, KeyModifiers::NONE)))
            .unwrap();
    }
}

fn letters(s: &str) -> Vec<KeyCode> {
    s.chars().map(KeyCode::Char).collect()
}

/// Drives a tiny event loop until quit or the channel runs dry
fn drive(engine: &mut Engine<Recorder>, runner: &Runner<ChannelEventSource>, now: Instant) {
    for _ in 0..100u32 {
        let flow = match runner.step() {
            GameEvent::Tick | GameEvent::Closed => break,
            GameEvent::Resize => Flow::Continue,
            GameEvent::Key(key) => match command_for(key) {
                Some(command) => engine.handle(command, now),
                None => Flow::Continue,
            },
        };
        if flow == Flow::Quit {
            break;
        }
    }
}

fn runner() -> (Sender<GameEvent>, Runner<ChannelEventSource>) {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(ChannelEventSource::new(rx), Duration::from_millis(5));
    (tx, runner)
}

#[test]
fn headless_round_won_by_typing() {
    let (mut engine, now) = engine("code", Difficulty::Medium);
    let (tx, runner) = runner();

    // lowercase input, a repeat and a digit along the way
    send_keys(&tx, &letters("co7ode"));
    drive(&mut engine, &runner, now);

    let session = engine.session();
    assert_eq!(session.round().outcome(), Outcome::Won);
    assert_eq!(session.total_score(), 60);
    assert_eq!(session.guessed_words(), ["CODE"]);
    assert_eq!(
        engine.player().played,
        [
            Cue::CorrectLetter,
            Cue::CorrectLetter,
            Cue::CorrectLetter,
            Cue::Victory
        ]
    );

    let snapshot = engine.snapshot(now);
    assert_eq!(snapshot.masked_word, "C O D E");
    assert_eq!(
        snapshot.message.as_deref(),
        Some("Victory! You guessed the word!")
    );
}

#[test]
fn headless_round_lost_on_hard() {
    // two letters on hard leave three mistakes
    let (mut engine, now) = engine("ab", Difficulty::Hard);
    let (tx, runner) = runner();

    send_keys(&tx, &letters("xyzq"));
    drive(&mut engine, &runner, now);

    let round = engine.session().round();
    assert_eq!(round.outcome(), Outcome::Lost);
    assert_eq!(round.attempts_left(), 0);
    assert_eq!(round.wrong_letters_sorted(), ['X', 'Y', 'Z']);
    assert_eq!(
        engine.player().played,
        [Cue::WrongLetter, Cue::WrongLetter, Cue::Defeat]
    );
    assert_eq!(engine.session().total_score(), 0);
    assert_eq!(
        engine.snapshot(now).message.as_deref(),
        Some("Out of attempts. The word was: AB")
    );
}

#[test]
fn headless_round_times_out_on_tick() {
    let (mut engine, now) = engine("network", Difficulty::Medium);

    engine.tick(now + Duration::from_secs(59));
    assert_eq!(engine.session().round().outcome(), Outcome::Playing);
    assert_eq!(engine.snapshot(now + Duration::from_secs(59)).remaining_secs, 1);

    let deadline = now + Duration::from_secs(60);
    engine.tick(deadline);
    assert_eq!(engine.session().round().outcome(), Outcome::TimedOut);
    assert_eq!(engine.player().played, [Cue::Defeat]);

    let snapshot = engine.snapshot(deadline + Duration::from_secs(5));
    assert_eq!(snapshot.remaining_secs, 0);
    assert_eq!(
        snapshot.message.as_deref(),
        Some("Time is up! The word was: NETWORK")
    );

    // later ticks stay quiet
    engine.tick(deadline + Duration::from_secs(1));
    assert_eq!(engine.player().played, [Cue::Defeat]);
}

#[test]
fn headless_late_letter_times_out_instead_of_counting() {
    let (mut engine, now) = engine("n", Difficulty::Easy);
    let (tx, runner) = runner();

    send_keys(&tx, &letters("n"));
    drive(&mut engine, &runner, now + Duration::from_secs(61));

    assert_eq!(engine.session().round().outcome(), Outcome::TimedOut);
    assert!(engine.session().round().guessed_letters().is_empty());
    assert_eq!(engine.session().total_score(), 0);
    assert_eq!(engine.player().played, [Cue::Defeat]);
}

#[test]
fn headless_difficulty_change_can_end_round() {
    let (mut engine, now) = engine("file", Difficulty::Easy);
    let (tx, runner) = runner();

    send_keys(&tx, &letters("bcdghjk"));
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().round().attempts_left(), 5);

    send_keys(&tx, &[KeyCode::Tab]);
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().difficulty(), Difficulty::Medium);
    assert_eq!(engine.session().round().attempts_left(), 1);
    assert_eq!(engine.session().round().outcome(), Outcome::Playing);

    send_keys(&tx, &[KeyCode::Tab]);
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().difficulty(), Difficulty::Hard);
    assert_eq!(engine.session().round().attempts_left(), 0);
    assert_eq!(engine.session().round().outcome(), Outcome::Lost);
    assert_eq!(engine.player().played.last(), Some(&Cue::Defeat));

    // cycling on a finished round only changes the mode
    let played = engine.player().played.len();
    send_keys(&tx, &[KeyCode::Tab]);
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().difficulty(), Difficulty::Easy);
    assert_eq!(engine.session().round().outcome(), Outcome::Lost);
    assert_eq!(engine.player().played.len(), played);
}

#[test]
fn headless_new_round_keeps_session_totals() {
    let (mut engine, now) = engine("file", Difficulty::Easy);
    let (tx, runner) = runner();

    send_keys(&tx, &letters("file"));
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().total_score(), 40);

    let later = now + Duration::from_secs(30);
    send_keys(&tx, &[KeyCode::Char(' ')]);
    drive(&mut engine, &runner, later);

    let round = engine.session().round();
    assert_eq!(round.outcome(), Outcome::Playing);
    assert!(round.guessed_letters().is_empty());
    assert!(round.wrong_letters().is_empty());
    assert_eq!(round.attempts_left(), 12);
    assert_eq!(round.started_at(), later);
    assert_eq!(engine.session().total_score(), 40);
    assert_eq!(engine.session().guessed_words(), ["FILE"]);

    send_keys(&tx, &letters("file"));
    drive(&mut engine, &runner, later);
    assert_eq!(engine.session().total_score(), 80);
    assert_eq!(engine.session().guessed_words(), ["FILE", "FILE"]);
}

#[test]
fn headless_escape_quits() {
    let (mut engine, now) = engine("code", Difficulty::Medium);
    let (tx, runner) = runner();

    send_keys(&tx, &[KeyCode::Char('c'), KeyCode::Esc, KeyCode::Char('o')]);
    drive(&mut engine, &runner, now);

    // the letter after Esc is never applied
    assert_eq!(engine.session().round().masked_word(), "C _ _ _");
}

#[test]
fn headless_tab_after_deadline_times_out() {
    let (mut engine, now) = engine("code", Difficulty::Medium);
    let (tx, runner) = runner();

    send_keys(&tx, &letters("xyzqwv"));
    drive(&mut engine, &runner, now);
    assert_eq!(engine.session().round().attempts_left(), 2);

    // no tick fell between the deadline and the key press
    send_keys(&tx, &[KeyCode::Tab]);
    drive(&mut engine, &runner, now + Duration::from_secs(61));

    assert_eq!(engine.session().round().outcome(), Outcome::TimedOut);
    assert_eq!(engine.session().difficulty(), Difficulty::Hard);
    assert_eq!(engine.player().played.last(), Some(&Cue::Defeat));
    assert_eq!(
        engine.snapshot(now + Duration::from_secs(61)).message.as_deref(),
        Some("Time is up! The word was: CODE")
    );
}

#[test]
fn headless_closed_input_stops_the_loop() {
    let (mut engine, now) = engine("code", Difficulty::Medium);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(ChannelEventSource::new(rx), Duration::from_secs(30));

    send_keys(&tx, &letters("c"));
    drop(tx);

    let mut steps = 0;
    loop {
        steps += 1;
        match runner.step() {
            GameEvent::Closed => break,
            GameEvent::Key(key) => {
                if let Some(command) = command_for(key) {
                    engine.handle(command, now);
                }
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    assert_eq!(steps, 2);
    assert_eq!(engine.session().round().masked_word(), "C _ _ _");
}
