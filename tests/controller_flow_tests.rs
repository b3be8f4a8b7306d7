use glam::Vec2;
use tangent_viz::{AppCommand, AppController, AppIntent, AppState, DubinsScene, TangentScene};

fn tangent_state() -> AppState<TangentScene> {
    AppState::default()
}

fn dubins_state() -> AppState<DubinsScene> {
    AppState::default()
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = tangent_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_tangent_primary_press_moves_circle_center() {
    let mut controller = AppController::new();
    let mut state = tangent_state();
    let pos = Vec2::new(400.0, 100.0);

    controller
        .handle_intent(&mut state, AppIntent::PrimaryPressed { pos })
        .expect("Platzierung sollte gelingen");

    assert_eq!(state.scene.circle.center, pos);
    assert_eq!(
        state.command_log.entries(),
        &[AppCommand::MoveCircleCenter { pos }]
    );
}

#[test]
fn test_tangent_center_too_close_to_destination_is_rejected() {
    let mut controller = AppController::new();
    let mut state = tangent_state();
    let before = state.scene.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: Vec2::new(290.0, 410.0),
            },
        )
        .expect("Abgelehnte Platzierung ist kein Fehler");

    assert_eq!(state.scene, before);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_tangent_secondary_press_moves_destination_with_constraint() {
    let mut controller = AppController::new();
    let mut state = tangent_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                pos: Vec2::new(150.0, 230.0),
            },
        )
        .expect("Abgelehnte Platzierung ist kein Fehler");
    assert_eq!(state.scene.destination, Vec2::new(300.0, 420.0));

    let pos = Vec2::new(600.0, 300.0);
    controller
        .handle_intent(&mut state, AppIntent::SecondaryPressed { pos })
        .expect("Platzierung sollte gelingen");
    assert_eq!(state.scene.destination, pos);
    assert_eq!(state.command_log.len(), 1);
}

#[test]
fn test_tangent_placement_exactly_on_margin_is_rejected() {
    let mut controller = AppController::new();
    let mut state = tangent_state();
    // Abstand zum Ziel genau r + 1 = 71
    let pos = Vec2::new(300.0 - 71.0, 420.0);

    controller
        .handle_intent(&mut state, AppIntent::PrimaryPressed { pos })
        .expect("Abgelehnte Platzierung ist kein Fehler");

    assert_eq!(state.scene.circle.center, Vec2::new(130.0, 220.0));
}

#[test]
fn test_tangent_render_scene_after_move_keeps_tangents_defined() {
    let mut controller = AppController::new();
    let mut state = tangent_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: Vec2::new(500.0, 200.0),
            },
        )
        .expect("Platzierung sollte gelingen");

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.label_texts(), vec!["O", "P", "Q1", "Q2"]);
    assert!(scene.info_lines[0].starts_with("O: (500, 200)"));
}

#[test]
fn test_tangent_ignores_held_primary() {
    let mut controller = AppController::new();
    let mut state = tangent_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryHeld {
                pos: Vec2::new(500.0, 200.0),
            },
        )
        .expect("PrimaryHeld sollte ohne Fehler durchlaufen");

    assert!(state.command_log.is_empty());
}

#[test]
fn test_dubins_press_and_hold_in_same_frame_keeps_heading() {
    let mut controller = AppController::new();
    let mut state = dubins_state();
    let heading = state.scene.pose.heading;
    let pos = Vec2::new(400.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::PrimaryPressed { pos })
        .expect("Pfeil versetzen sollte gelingen");
    controller
        .handle_intent(&mut state, AppIntent::PrimaryHeld { pos })
        .expect("PrimaryHeld auf dem Pfeil sollte ohne Fehler durchlaufen");

    assert_eq!(state.scene.pose.position, pos);
    assert_eq!(state.scene.pose.heading, heading);
    assert_eq!(state.command_log.entries(), &[AppCommand::MoveArrow { pos }]);
}

#[test]
fn test_dubins_drag_turns_arrow_towards_pointer() {
    let mut controller = AppController::new();
    let mut state = dubins_state();

    // Pfeil bei (130, 220), Zeiger rechts daneben → Richtung 0
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryHeld {
                pos: Vec2::new(230.0, 220.0),
            },
        )
        .expect("Drehen sollte gelingen");
    assert!(state.scene.pose.heading.abs() < 1e-6);

    // Zeiger darüber (Screen-y nach unten) → Richtung 3π/2
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryHeld {
                pos: Vec2::new(130.0, 120.0),
            },
        )
        .expect("Drehen sollte gelingen");
    assert!((state.scene.pose.heading - 1.5 * std::f32::consts::PI).abs() < 1e-5);
    assert_eq!(state.command_log.len(), 2);
}

#[test]
fn test_dubins_secondary_press_is_ignored() {
    let mut controller = AppController::new();
    let mut state = dubins_state();
    let before = state.scene.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                pos: Vec2::new(600.0, 500.0),
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.scene, before);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_dubins_unsupported_command_fails() {
    let mut controller = AppController::new();
    let mut state = dubins_state();

    let result = controller.handle_command(
        &mut state,
        AppCommand::MoveCircleCenter {
            pos: Vec2::new(10.0, 10.0),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_dubins_arrow_next_to_destination_skips_degenerate_circle() {
    let mut controller = AppController::new();
    let mut state = dubins_state();

    // Pfeil nach unten bei (250, 420): linker Kreis bei (300, 420) = P, rechter bei (200, 420)
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: Vec2::new(250.0, 420.0),
            },
        )
        .expect("Pfeil versetzen sollte gelingen");

    let solution = state.scene.solution().expect("gültige Konfiguration");
    assert!(solution.left.is_none());
    assert!(solution.right.is_some());
}
