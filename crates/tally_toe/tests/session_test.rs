//! Tests for the game session: turns, scores and front-end calls together.

use tally_toe::{
    Announcement, GameConfig, GameSession, KeyValueStore, MemoryStore, MoveSignal, Notifier,
    Player, Renderer, SCORES_KEY, ScoreLedger, Snapshot, StarterPolicy, StoreError,
};

/// One thing the front end saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Redraw { marked: usize, active: Player, x_wins: u32 },
    Announce(String),
}

#[derive(Debug, Default)]
struct RecordingFrontend {
    events: Vec<Event>,
}

impl Renderer for RecordingFrontend {
    fn redraw(&mut self, snapshot: &Snapshot<'_>) {
        self.events.push(Event::Redraw {
            marked: snapshot.board.marked(),
            active: snapshot.active,
            x_wins: snapshot.ledger.wins(Player::X),
        });
    }
}

impl Notifier for RecordingFrontend {
    fn announce(&mut self, announcement: &Announcement) {
        self.events.push(Event::Announce(announcement.to_string()));
    }
}

/// Store whose writes always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::new("read-only store"))
    }
}

fn quiet_config() -> GameConfig {
    GameConfig::default().with_announce_delay_ms(0)
}

fn new_session() -> GameSession<MemoryStore, RecordingFrontend> {
    GameSession::new(MemoryStore::new(), RecordingFrontend::default(), &quiet_config())
}

fn play_all<S: KeyValueStore>(
    session: &mut GameSession<S, RecordingFrontend>,
    moves: &[usize],
) -> MoveSignal {
    let mut last = MoveSignal::Ignored;
    for &index in moves {
        last = session.play(index).expect("Store write failed");
    }
    last
}

#[test]
fn test_new_session_draws_initial_frame() {
    let session = new_session();
    assert_eq!(
        session.frontend().events,
        vec![Event::Redraw {
            marked: 0,
            active: Player::X,
            x_wins: 0
        }]
    );
    assert_eq!(*session.ledger(), ScoreLedger::zero());
}

#[test]
fn test_ignored_move_draws_nothing() {
    let mut session = new_session();
    session.play(4).unwrap();
    let before = session.frontend().events.len();

    assert_eq!(session.play(4).unwrap(), MoveSignal::Ignored);
    assert_eq!(session.play(9).unwrap(), MoveSignal::Ignored);
    assert_eq!(session.frontend().events.len(), before);
    assert_eq!(*session.state().active(), Player::O);
}

#[test]
fn test_win_persists_before_announcement() {
    let mut session = new_session();
    let signal = play_all(&mut session, &[0, 3, 1, 4, 2]);

    assert!(matches!(signal, MoveSignal::Won { winner: Player::X, .. }));
    assert_eq!(session.ledger().wins(Player::X), 1);

    let stored = session.store().get(SCORES_KEY).unwrap().expect("Scores saved");
    assert_eq!(stored, r#"{"X":1,"O":0}"#);

    let tail: Vec<_> = session.frontend().events.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![
            Event::Redraw {
                marked: 5,
                active: Player::X,
                x_wins: 1
            },
            Event::Announce("Congrats player X! You're the winner".to_string()),
            Event::Redraw {
                marked: 0,
                active: Player::X,
                x_wins: 1
            },
        ]
    );
    assert_eq!(session.state().board().marked(), 0);
}

#[test]
fn test_draw_announces_and_leaves_scores() {
    let mut session = new_session();
    let signal = play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(matches!(signal, MoveSignal::Drawn { .. }));
    assert_eq!(*session.ledger(), ScoreLedger::zero());
    assert_eq!(session.store().get(SCORES_KEY).unwrap(), None);
    assert!(
        session
            .frontend()
            .events
            .contains(&Event::Announce("Game ended in a draw!".to_string()))
    );
    assert_eq!(session.state().board().marked(), 0);
}

#[test]
fn test_scores_resume_from_store() {
    let mut store = MemoryStore::new();
    ScoreLedger::zero()
        .record_win(Player::O)
        .save(&mut store)
        .unwrap();

    let mut session = GameSession::new(store, RecordingFrontend::default(), &quiet_config());
    // O wins the middle column: X 0 2 6, O 1 4 7
    play_all(&mut session, &[0, 1, 2, 4, 6, 7]);

    assert_eq!(session.ledger().wins(Player::O), 2);
    assert_eq!(session.ledger().wins(Player::X), 0);
    let (store, _) = session.into_parts();
    assert_eq!(ScoreLedger::load(&store).wins(Player::O), 2);
}

#[test]
fn test_fixed_policy_restarts_with_first_player() {
    let config = quiet_config().with_starter_policy(StarterPolicy::Fixed);
    let mut session = GameSession::new(MemoryStore::new(), RecordingFrontend::default(), &config);
    // O wins, X should still start the next game.
    play_all(&mut session, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(session.ledger().wins(Player::O), 1);
    assert_eq!(*session.state().active(), Player::X);
}

#[test]
fn test_alternate_policy_swaps_first_player() {
    let config = quiet_config().with_starter_policy(StarterPolicy::Alternate);
    let mut session = GameSession::new(MemoryStore::new(), RecordingFrontend::default(), &config);
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(*session.state().active(), Player::O);
}

#[test]
fn test_failed_save_still_announces_win() {
    let mut session = GameSession::new(ReadOnlyStore, RecordingFrontend::default(), &quiet_config());
    for index in [0, 3, 1, 4] {
        assert_eq!(session.play(index).unwrap(), MoveSignal::Accepted);
    }

    let err = session.play(2).unwrap_err();
    assert_eq!(err.message, "read-only store");

    assert_eq!(session.ledger().wins(Player::X), 1);
    assert_eq!(session.state().board().marked(), 0);
    assert!(
        session
            .frontend()
            .events
            .contains(&Event::Announce("Congrats player X! You're the winner".to_string()))
    );
    assert_eq!(
        session.frontend().events.last(),
        Some(&Event::Redraw {
            marked: 0,
            active: Player::X,
            x_wins: 1
        })
    );
}
