use cardinal_spline_editor::{CurveController, CurveIntent, EditMode, EditorState};
use glam::DVec2;

fn send(controller: &mut CurveController, state: &mut EditorState, intent: CurveIntent) {
    controller
        .handle_intent(state, intent.clone())
        .unwrap_or_else(|e| panic!("{intent:?} sollte funktionieren: {e:#}"));
}

fn square_state(controller: &mut CurveController) -> EditorState {
    let mut state = EditorState::new();
    send(
        controller,
        &mut state,
        CurveIntent::PrimaryPressed { pos: DVec2::ZERO },
    );
    send(
        controller,
        &mut state,
        CurveIntent::PointerDragged {
            pos: DVec2::new(10.0, 0.0),
        },
    );
    for (x, y) in [(10.0, 10.0), (0.0, 10.0)] {
        send(
            controller,
            &mut state,
            CurveIntent::PrimaryPressed {
                pos: DVec2::new(x, y),
            },
        );
        send(controller, &mut state, CurveIntent::PointerReleased);
    }
    send(controller, &mut state, CurveIntent::EscapePressed);
    assert_eq!(state.control_points().len(), 4);
    state
}

#[test]
fn test_first_click_creates_two_point_curve() {
    let mut controller = CurveController::new();
    let mut state = EditorState::new();

    send(
        &mut controller,
        &mut state,
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(5.0, 5.0),
        },
    );

    assert_eq!(state.control_points().len(), 2);
    assert_eq!(state.rendered_curve().len(), state.params().grain() as usize + 1);
    assert_eq!(state.mode(), EditMode::Append);
}

#[test]
fn test_first_click_then_drag_draws_a_line() {
    let mut controller = CurveController::new();
    let mut state = EditorState::new();

    send(
        &mut controller,
        &mut state,
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(0.0, 0.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        CurveIntent::PointerDragged {
            pos: DVec2::new(10.0, 0.0),
        },
    );

    assert_eq!(
        state.control_points(),
        &[DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)]
    );
    let curve = state.rendered_curve();
    assert_eq!(curve[0], DVec2::new(0.0, 0.0));
    assert_eq!(*curve.last().expect("Kurve nicht leer"), DVec2::new(10.0, 0.0));
    assert!(curve.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_append_stays_sticky_after_release() {
    let mut controller = CurveController::new();
    let mut state = EditorState::new();

    send(
        &mut controller,
        &mut state,
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(0.0, 0.0),
        },
    );
    send(&mut controller, &mut state, CurveIntent::PointerReleased);
    send(
        &mut controller,
        &mut state,
        CurveIntent::PointerDragged {
            pos: DVec2::new(4.0, 4.0),
        },
    );

    assert_eq!(state.mode(), EditMode::Append);
    assert_eq!(state.control_points()[1], DVec2::new(4.0, 4.0));
}

#[test]
fn test_move_changes_only_active_index() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);
    let before = state.control_points().to_vec();

    send(
        &mut controller,
        &mut state,
        CurveIntent::SecondaryPressed {
            pos: DVec2::new(9.0, 9.0),
        },
    );
    assert_eq!(state.mode(), EditMode::Move);
    assert_eq!(state.active_index(), Some(2));

    send(
        &mut controller,
        &mut state,
        CurveIntent::PointerDragged {
            pos: DVec2::new(15.0, 12.0),
        },
    );
    send(&mut controller, &mut state, CurveIntent::PointerReleased);

    let after = state.control_points();
    assert_eq!(after.len(), before.len());
    for (index, (a, b)) in after.iter().zip(&before).enumerate() {
        if index == 2 {
            assert_eq!(*a, DVec2::new(15.0, 12.0));
        } else {
            assert_eq!(a, b);
        }
    }
    assert_eq!(state.mode(), EditMode::None);
    assert_eq!(state.active_index(), None);
}

#[test]
fn test_insert_near_segment_midpoint() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);

    send(
        &mut controller,
        &mut state,
        CurveIntent::TertiaryPressed {
            pos: DVec2::new(5.0, 1.0),
        },
    );

    assert_eq!(state.control_points().len(), 5);
    assert_eq!(state.control_points()[0], DVec2::new(0.0, 0.0));
    assert_eq!(state.control_points()[1], DVec2::new(5.0, 1.0));
    assert_eq!(state.control_points()[2], DVec2::new(10.0, 0.0));
    assert_eq!(state.mode(), EditMode::Insert);
    assert_eq!(state.active_index(), Some(1));

    send(&mut controller, &mut state, CurveIntent::PointerReleased);
    assert_eq!(state.mode(), EditMode::None);
}

#[test]
fn test_delete_active_point() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);

    send(
        &mut controller,
        &mut state,
        CurveIntent::SecondaryPressed {
            pos: DVec2::new(0.0, 9.0),
        },
    );
    send(&mut controller, &mut state, CurveIntent::DeletePressed);

    assert_eq!(state.control_points().len(), 3);
    assert_eq!(state.active_index(), None);
    assert_eq!(state.mode(), EditMode::None);
    assert_eq!(
        *state.rendered_curve().last().expect("Kurve nicht leer"),
        DVec2::new(10.0, 10.0)
    );
}

#[test]
fn test_gestures_without_enough_points_are_ignored() {
    let mut controller = CurveController::new();
    let mut state = EditorState::new();

    send(
        &mut controller,
        &mut state,
        CurveIntent::SecondaryPressed { pos: DVec2::ZERO },
    );
    send(
        &mut controller,
        &mut state,
        CurveIntent::TertiaryPressed { pos: DVec2::ZERO },
    );
    send(&mut controller, &mut state, CurveIntent::DeletePressed);
    send(&mut controller, &mut state, CurveIntent::EscapePressed);

    assert!(state.control_points().is_empty());
    assert!(state.rendered_curve().is_empty());
    assert_eq!(state.mode(), EditMode::None);
}

#[test]
fn test_deleting_down_to_one_point_keeps_lone_sample() {
    let mut controller = CurveController::new();
    let mut state = EditorState::new();

    send(
        &mut controller,
        &mut state,
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(3.0, 3.0),
        },
    );
    send(&mut controller, &mut state, CurveIntent::DeletePressed);

    assert_eq!(state.control_points(), &[DVec2::new(3.0, 3.0)]);
    assert_eq!(state.rendered_curve(), &[DVec2::new(3.0, 3.0)]);
}

#[test]
fn test_clear_resets_everything() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);

    send(
        &mut controller,
        &mut state,
        CurveIntent::SecondaryPressed { pos: DVec2::ZERO },
    );
    send(&mut controller, &mut state, CurveIntent::ClearRequested);

    assert!(state.control_points().is_empty());
    assert!(state.rendered_curve().is_empty());
    assert_eq!(state.active_index(), None);
    assert_eq!(state.status_text(), "Startpunkt klicken");
}
