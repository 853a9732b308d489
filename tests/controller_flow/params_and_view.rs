use approx::assert_relative_eq;
use cardinal_spline_editor::{
    CurveController, CurveIntent, DisplayMode, EditorError, EditorOptions, EditorState,
};
use glam::DVec2;

fn square_state(controller: &mut CurveController) -> EditorState {
    let mut state = EditorState::new();
    let intents = [
        CurveIntent::PrimaryPressed { pos: DVec2::ZERO },
        CurveIntent::PointerDragged {
            pos: DVec2::new(10.0, 0.0),
        },
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(10.0, 10.0),
        },
        CurveIntent::PrimaryPressed {
            pos: DVec2::new(0.0, 10.0),
        },
        CurveIntent::EscapePressed,
    ];
    for intent in intents {
        controller
            .handle_intent(&mut state, intent)
            .expect("Aufbau des Quadrats sollte funktionieren");
    }
    assert_eq!(
        state.control_points(),
        &[
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    );
    state
}

#[test]
fn test_square_scenario_with_grain_ten() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);

    controller
        .handle_intent(&mut state, CurveIntent::GrainChanged { grain: 10 })
        .expect("grain 10 sollte gültig sein");
    controller
        .handle_intent(&mut state, CurveIntent::TensionChanged { tension: 1.0 })
        .expect("tension 1 sollte gültig sein");

    let curve = state.rendered_curve();
    assert!(curve.len() >= 3 * (10 + 1));
    assert_eq!(curve[0], DVec2::new(0.0, 0.0));
    assert_eq!(*curve.last().expect("Kurve nicht leer"), DVec2::new(0.0, 10.0));
    assert!(curve.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(state.curve_length() > 30.0);
}

#[test]
fn test_invalid_grain_is_rejected_and_curve_kept() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);
    let before = state.rendered_curve().to_vec();
    let grain_before = state.params().grain();

    for grain in [0, -7] {
        let err = controller
            .handle_intent(&mut state, CurveIntent::GrainChanged { grain })
            .expect_err("grain ≤ 0 sollte abgelehnt werden");
        assert!(matches!(
            err.downcast_ref::<EditorError>(),
            Some(EditorError::InvalidParameter { name: "grain", .. })
        ));
    }

    assert_eq!(state.params().grain(), grain_before);
    assert_eq!(state.rendered_curve(), before.as_slice());
}

#[test]
fn test_resize_scales_points_and_curve() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);
    let points_before = state.control_points().to_vec();
    let curve_before = state.rendered_curve().to_vec();

    controller
        .handle_intent(
            &mut state,
            CurveIntent::ViewportResized {
                old_size: [640.0, 480.0],
                new_size: [1280.0, 480.0],
            },
        )
        .expect("Resize sollte funktionieren");

    for (after, before) in state.control_points().iter().zip(&points_before) {
        assert_relative_eq!(after.x, before.x * 2.0, epsilon = 1e-9);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-9);
    }
    assert_eq!(state.rendered_curve().len(), curve_before.len());
    for (after, before) in state.rendered_curve().iter().zip(&curve_before) {
        assert_relative_eq!(after.x, before.x * 2.0, epsilon = 1e-9);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-9);
    }
}

#[test]
fn test_resize_from_zero_size_is_rejected() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);
    let before = state.control_points().to_vec();

    let result = controller.handle_intent(
        &mut state,
        CurveIntent::ViewportResized {
            old_size: [0.0, 480.0],
            new_size: [1280.0, 480.0],
        },
    );

    assert!(result.is_err());
    assert_eq!(state.control_points(), before.as_slice());
}

#[test]
fn test_display_mode_projects_scene() {
    let mut controller = CurveController::new();
    let mut state = square_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            CurveIntent::DisplayModeChanged {
                mode: DisplayMode::Smooth,
            },
        )
        .expect("DisplayModeChanged sollte funktionieren");

    let scene = controller.build_render_scene(&state);
    assert!(scene.control_polyline.is_none());
    assert_eq!(
        scene.smooth_polyline.as_deref(),
        Some(state.rendered_curve())
    );
    assert_eq!(state.control_points().len(), 4);
}

#[test]
fn test_options_seed_initial_parameters() {
    let options = EditorOptions {
        default_tension: 0.5,
        default_grain: 4,
        display_mode: DisplayMode::Input,
    };
    let mut controller = CurveController::new();
    let mut state = EditorState::with_options(&options);

    controller
        .handle_intent(
            &mut state,
            CurveIntent::PrimaryPressed {
                pos: DVec2::new(1.0, 1.0),
            },
        )
        .expect("PrimaryPressed sollte funktionieren");

    assert_eq!(state.params().tension(), 0.5);
    assert_eq!(state.rendered_curve().len(), 5);
    assert!(controller.build_render_scene(&state).smooth_polyline.is_none());
}
