use scantriage::data::default_scans;
use scantriage::gesture::SwipeDirection;
use scantriage::models::Decision;
use scantriage::session::ReviewSession;

fn new_session() -> ReviewSession {
    ReviewSession::new(default_scans())
}

#[test]
fn test_cursor_tracks_review_count_through_a_full_session() {
    let mut session = new_session();
    assert_eq!(session.cursor(), session.reviews().len());

    let directions = [
        SwipeDirection::Right,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ];
    for direction in directions {
        session.record_swipe(direction);
        assert_eq!(
            session.cursor(),
            session.reviews().len(),
            "cursor and review log diverged after a swipe"
        );
    }

    session.undo();
    assert_eq!(
        session.cursor(),
        session.reviews().len(),
        "cursor and review log diverged after undo"
    );
}

#[test]
fn test_swipe_directions_map_to_decisions() {
    let mut session = new_session();

    let right = session
        .record_swipe(SwipeDirection::Right)
        .expect("queue should not be exhausted");
    assert_eq!(right.decision, Decision::Healthy);

    let left = session
        .record_swipe(SwipeDirection::Left)
        .expect("queue should not be exhausted");
    assert_eq!(left.decision, Decision::Sick);
}

#[test]
fn test_recording_advances_cursor_and_logs_the_current_scan() {
    let mut session = new_session();
    let expected = session
        .current_scan()
        .expect("fresh session should have a current scan")
        .clone();

    let review = session.mark_healthy().expect("record should succeed");

    assert_eq!(session.cursor(), 1);
    assert_eq!(session.reviews().len(), 1);
    assert_eq!(review.scan_id, expected.id);
    assert_eq!(review.patient_name, expected.patient_name);
}

#[test]
fn test_recording_past_the_end_is_a_no_op() {
    let mut session = new_session();
    for _ in 0..session.total() {
        session.mark_healthy();
    }
    assert!(session.is_complete());

    let before = session.clone();
    assert!(session.mark_sick().is_none());
    assert!(session.record_swipe(SwipeDirection::Left).is_none());
    assert_eq!(session, before, "state should be unchanged past the end");
}

#[test]
fn test_undo_removes_the_most_recent_review() {
    let mut session = new_session();
    session.mark_healthy();
    let second = session.mark_sick().expect("record should succeed");

    let undone = session.undo().expect("undo should return the last review");

    assert_eq!(undone, second);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.reviews().len(), 1);
    assert_eq!(session.remaining(), 4);
}

#[test]
fn test_undo_with_no_reviews_is_a_no_op() {
    let mut session = new_session();
    assert!(session.undo().is_none());
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.reviews().len(), 0);

    // Undo never takes the cursor below zero, even when repeated.
    session.mark_healthy();
    session.undo();
    assert!(session.undo().is_none());
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_category_counts_partition_the_log() {
    let mut session = new_session();
    session.mark_healthy();
    session.mark_sick();
    session.mark_healthy();

    assert_eq!(session.healthy_count(), 2);
    assert_eq!(session.sick_count(), 1);
    assert_eq!(
        session.healthy_count() + session.sick_count(),
        session.reviews().len()
    );
}

#[test]
fn test_full_review_scenario_right_left_right_right_left() {
    let mut session = new_session();
    let directions = [
        SwipeDirection::Right,
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Right,
        SwipeDirection::Left,
    ];
    for direction in directions {
        assert!(
            session.record_swipe(direction).is_some(),
            "every seeded scan should accept a decision"
        );
    }

    assert!(session.is_complete(), "completion view should be shown");
    assert!(session.current_scan().is_none());

    let summary = session.summary();
    assert_eq!(summary.remaining, 0);
    assert_eq!(summary.reviewed, 5);
    assert_eq!(summary.healthy, 3);
    assert_eq!(summary.sick, 2);
}

#[test]
fn test_undo_after_two_decisions_rewinds_to_the_second_scan() {
    let mut session = new_session();
    session.mark_healthy();
    session.mark_sick();

    session.undo();

    assert_eq!(session.cursor(), 1);
    assert_eq!(session.remaining(), 4);
    let current = session.current_scan().expect("scan should be available again");
    assert_eq!(current.id, "2", "undo should re-present the undone scan");
}

#[test]
fn test_recent_reviews_are_newest_first_and_limited() {
    let mut session = new_session();
    session.mark_healthy();
    session.mark_sick();
    session.mark_healthy();

    let recent: Vec<_> = session.recent_reviews(2).collect();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].scan_id, "3", "newest review should come first");
    assert_eq!(recent[1].scan_id, "2");

    // A limit larger than the log returns everything.
    assert_eq!(session.recent_reviews(10).count(), 3);
}
