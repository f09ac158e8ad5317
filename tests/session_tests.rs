//! End-to-end game scenarios driven through `GameSession` with
//! scripted bot policies, covering the forfeit path, bomb reuse, and
//! the final-result banner cases.

use rps_plus::{
    GamePhase, GameRng, GameSessionBuilder, GameState, Move, MovePolicy, Outcome, PlayedMove,
    Player, RoundReport,
};

/// Replays a fixed move list, one per contested round.
struct Script(std::sync::Mutex<Vec<Move>>);

impl Script {
    fn new(moves: &[Move]) -> Self {
        let mut queue = moves.to_vec();
        queue.reverse();
        Self(std::sync::Mutex::new(queue))
    }
}

impl MovePolicy for Script {
    fn choose_move(&self, _state: &GameState, _rng: &mut GameRng) -> Move {
        self.0
            .lock()
            .expect("script poisoned")
            .pop()
            .expect("script exhausted")
    }
}

fn outcome_of(report: RoundReport) -> Outcome {
    match report {
        RoundReport::Resolved { outcome, .. } => outcome,
        RoundReport::Forfeited { .. } => Outcome::Draw,
    }
}

/// (rock,scissors), (paper,paper), (bomb,rock) -> user, draw, user;
/// final 2-0, "YOU WIN".
#[test]
fn test_scenario_user_wins() {
    let mut session = GameSessionBuilder::new()
        .policy(Script::new(&[Move::Scissors, Move::Paper, Move::Rock]))
        .build(0);

    let outcomes: Vec<Outcome> = ["rock", "paper", "bomb"]
        .iter()
        .map(|raw| outcome_of(session.play_round(raw).expect("game still in progress")))
        .collect();

    assert_eq!(outcomes, vec![Outcome::User, Outcome::Draw, Outcome::User]);

    let state = session.state();
    assert_eq!(state.round(), 3);
    assert_eq!(state.score(Player::User), 2);
    assert_eq!(state.score(Player::Bot), 0);
    assert!(state.is_over());
    assert_eq!(state.phase(), GamePhase::Finished);
    assert_eq!(session.final_result(), Some(Outcome::User));
}

/// Round 1 garbage input forfeits as a draw regardless of what the bot
/// would have played; rounds 2-3 score normally.
#[test]
fn test_scenario_forfeit_then_play_on() {
    let mut session = GameSessionBuilder::new()
        .policy(Script::new(&[Move::Rock, Move::Scissors]))
        .build(0);

    let first = session.play_round("xyz").unwrap();
    match first {
        RoundReport::Forfeited { summary, .. } => {
            assert_eq!(summary.round, 1);
            assert_eq!(summary.user_score, 0);
            assert_eq!(summary.bot_score, 0);
        }
        RoundReport::Resolved { .. } => panic!("garbage input must forfeit"),
    }

    assert_eq!(
        outcome_of(session.play_round("scissors").unwrap()),
        Outcome::Bot
    );
    assert_eq!(
        outcome_of(session.play_round("rock").unwrap()),
        Outcome::User
    );

    let state = session.state();
    assert_eq!(state.round(), 3);
    assert_eq!(state.score(Player::User), 1);
    assert_eq!(state.score(Player::Bot), 1);
    assert_eq!(session.final_result(), Some(Outcome::Draw));
}

/// User bombs round 1 and wins, tries to bomb again round 2: the
/// validator rejects it and round 2 is forfeited as a draw.
#[test]
fn test_scenario_bomb_reuse_forfeits() {
    let mut session = GameSessionBuilder::new()
        .policy(Script::new(&[Move::Rock, Move::Rock]))
        .build(0);

    assert_eq!(outcome_of(session.play_round("bomb").unwrap()), Outcome::User);
    assert!(session.state().bomb_used(Player::User));

    let second = session.play_round("bomb").unwrap();
    match second {
        RoundReport::Forfeited { reason, summary } => {
            assert_eq!(reason.to_string(), "User bomb already used");
            assert_eq!(summary.round, 2);
            assert_eq!(summary.user_score, 1);
            assert_eq!(summary.bot_score, 0);
        }
        RoundReport::Resolved { .. } => panic!("second bomb must be rejected"),
    }

    // The rejected bomb did not touch either flag.
    assert!(session.state().bomb_used(Player::User));
    assert!(!session.state().bomb_used(Player::Bot));

    assert_eq!(outcome_of(session.play_round("rock").unwrap()), Outcome::Draw);
    assert_eq!(session.final_result(), Some(Outcome::User));
}

/// Bot sweep for the "BOT WINS" banner case.
#[test]
fn test_scenario_bot_wins() {
    let mut session = GameSessionBuilder::new()
        .policy(Script::new(&[Move::Paper, Move::Paper, Move::Paper]))
        .build(0);

    for _ in 0..3 {
        assert_eq!(outcome_of(session.play_round("rock").unwrap()), Outcome::Bot);
    }

    assert_eq!(session.final_result(), Some(Outcome::Bot));
}

/// Forfeited rounds are recorded with the sentinel non-move, never with
/// a fabricated contest.
#[test]
fn test_history_distinguishes_forfeits() {
    let mut session = GameSessionBuilder::new()
        .policy(Script::new(&[Move::Scissors, Move::Scissors]))
        .build(0);

    let _ = session.play_round("rock");
    let _ = session.play_round("???");
    let _ = session.play_round("paper");

    let history = session.state().history();
    assert_eq!(history.len(), 3);

    assert!(!history[0].is_forfeit());
    assert_eq!(history[0].user_move, PlayedMove::Played(Move::Rock));

    assert!(history[1].is_forfeit());
    assert_eq!(history[1].user_move, PlayedMove::Forfeited);
    assert_eq!(history[1].bot_move, PlayedMove::Forfeited);
    assert_eq!(history[1].outcome, Outcome::Draw);

    assert!(!history[2].is_forfeit());
    assert_eq!(history[2].outcome, Outcome::Bot);
}

/// The uniform random bot plays a full game under a fixed seed and the
/// state invariants hold at every step, identically across replays.
#[test]
fn test_seeded_sessions_replay_identically() {
    for seed in [1u64, 7, 42, 1337] {
        let mut a = rps_plus::GameSession::new(seed);
        let mut b = rps_plus::GameSession::new(seed);

        for raw in ["rock", "bomb", "scissors"] {
            let ra = a.play_round(raw);
            let rb = b.play_round(raw);
            assert_eq!(ra, rb, "seed {seed} diverged");

            let state = a.state();
            let total = state.score(Player::User) + state.score(Player::Bot);
            assert!(total <= state.round());
            assert!(state.round() <= state.max_rounds());
        }

        assert_eq!(a.final_result(), b.final_result());
        assert!(a.final_result().is_some());
    }
}
