use assert_matches::assert_matches;
use indexmap::IndexMap;
use packbot::{
    BallKind,
    Balls,
    PackError,
    ScannedEntry,
};
use packbot_test_utils::{
    Action,
    FakeEmulator,
};

fn balls(entries: &[(&str, u32)]) -> Balls {
    Balls::new(
        entries
            .iter()
            .map(|(name, quantity)| ScannedEntry::new(*name, *quantity)),
    )
    .unwrap()
}

#[test]
fn ranks_held_balls_by_canonical_priority() {
    let balls = balls(&[("masterball", 1), ("pokeball", 3)]);

    let rank = balls.rank().unwrap();

    pretty_assertions::assert_eq!(
        rank,
        IndexMap::from([("masterball".to_owned(), 1), ("pokeball".to_owned(), 4)]),
    );
    assert_eq!(balls.best(&rank).unwrap(), BallKind::Master);
}

#[test]
fn unranked_kinds_are_excluded_from_the_ranking() {
    let balls = balls(&[("safariball", 5), ("pokeball", 3), ("loveball", 1)]);

    let rank = balls.rank().unwrap();

    pretty_assertions::assert_eq!(rank, IndexMap::from([("pokeball".to_owned(), 4)]));
    assert_eq!(balls.best(&rank).unwrap(), BallKind::Poke);
}

#[test]
fn selection_is_impossible_without_a_ranked_ball() {
    let balls = balls(&[("safariball", 2), ("loveball", 1)]);

    let rank = balls.rank().unwrap();
    assert!(rank.is_empty());

    let error = balls.best(&rank).unwrap_err();
    assert_matches!(
        error.downcast_ref::<PackError>(),
        Some(PackError::SelectionImpossible)
    );
}

#[test]
fn unknown_ball_names_fail_the_ranking() {
    let balls = balls(&[("beastball", 2)]);

    let error = balls.rank().unwrap_err();
    assert_matches!(
        error.downcast_ref::<PackError>(),
        Some(PackError::UnknownBall { name }) => assert_eq!(name, "beastball")
    );
}

#[test]
fn positions_cursor_on_the_best_ball() {
    // Best ball first, middle, and last in the on-screen order. The index
    // counts every held ball, ranked or not.
    for (held, index) in [
        (
            vec![("masterball", 1), ("pokeball", 3), ("safariball", 2)],
            0,
        ),
        (
            vec![("pokeball", 3), ("masterball", 1), ("greatball", 2)],
            1,
        ),
        (
            vec![("safariball", 2), ("pokeball", 3), ("ultraball", 1)],
            2,
        ),
    ] {
        let balls = balls(&held);
        let mut emulator = FakeEmulator::new();

        assert_eq!(balls.position_cursor(&mut emulator).unwrap(), index);

        pretty_assertions::assert_eq!(
            emulator.actions(),
            &[
                Action::MoveDown(1),
                Action::PressA(1),
                Action::MoveDown(index),
            ],
        );
    }
}

#[test]
fn throwing_decrements_the_thrown_ball() {
    let mut held = balls(&[("masterball", 1), ("pokeball", 3)]);
    let mut emulator = FakeEmulator::new();

    let inventory = held.throw_best(&mut emulator).unwrap();

    // The master ball was the last one, so it leaves the inventory entirely.
    pretty_assertions::assert_eq!(
        inventory,
        &IndexMap::from([("pokeball".to_owned(), 3)]),
    );
    assert_eq!(emulator.actions().last(), Some(&Action::PressA(2)));
}

#[test]
fn throwing_keeps_balls_with_remaining_quantity() {
    let mut held = balls(&[("pokeball", 3), ("safariball", 2)]);
    let mut emulator = FakeEmulator::new();

    let inventory = held.throw_best(&mut emulator).unwrap();

    pretty_assertions::assert_eq!(
        inventory,
        &IndexMap::from([("pokeball".to_owned(), 2), ("safariball".to_owned(), 2)]),
    );
}

#[test]
fn consecutive_throws_track_the_shrinking_inventory() {
    let mut held = balls(&[("ultraball", 1), ("pokeball", 2)]);
    let mut emulator = FakeEmulator::new();

    held.throw_best(&mut emulator).unwrap();
    // The ultra ball is gone, so the poke ball is now the best and sits at
    // the top of the list.
    let index = held.position_cursor(&mut emulator).unwrap();
    assert_eq!(index, 0);

    held.throw_best(&mut emulator).unwrap();
    held.throw_best(&mut emulator).unwrap();
    assert!(held.inventory().is_empty());
}
