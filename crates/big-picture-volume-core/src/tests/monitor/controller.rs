use crate::{VolumeController, VolumeLevel, VolumeState, transition};

fn run_sequence(controller: &mut VolumeController, readings: &[bool]) -> Vec<Option<VolumeLevel>> {
    readings
        .iter()
        .map(|&active| controller.observe(active))
        .collect()
}

/// WHAT: The first reading always normalizes the unknown state
/// WHY: Until a reading arrives nothing is known about the target volume
#[test]
fn given_unknown_state_when_first_reading_arrives_then_volume_normalized() {
    // Given: A fresh controller
    let mut controller = VolumeController::new();
    assert_eq!(controller.state(), VolumeState::Unknown);

    // When: The first (inactive) reading is observed
    let action = controller.observe(false);

    // Then: One mute action and the state leaves Unknown
    assert_eq!(action, Some(VolumeLevel::Mute));
    assert_eq!(controller.state(), VolumeState::Off);
}

/// WHAT: Repeated identical readings produce no further actions
/// WHY: Debounce: one helper launch per change, never one per tick
#[test]
fn given_steady_signal_when_polled_repeatedly_then_no_further_actions() {
    // Given: A controller that has already seen the signal
    let mut controller = VolumeController::new();
    let _ = controller.observe(true);

    // When: The same reading repeats across many ticks
    let actions = run_sequence(&mut controller, &[true; 10]);

    // Then: No action fires and the state is stable
    assert!(actions.iter().all(Option::is_none));
    assert_eq!(controller.state(), VolumeState::On);
}

/// WHAT: The documented sequence fires at indices 0, 2 and 5
/// WHY: One normalization from Unknown plus one action per signal change
#[test]
fn given_unknown_state_when_signal_toggles_then_actions_match_changes() {
    // Given: A fresh controller and the reference reading sequence
    let mut controller = VolumeController::new();
    let readings = [false, false, true, true, true, false];

    // When: Every reading is observed in order
    let actions = run_sequence(&mut controller, &readings);

    // Then: Mute at 0 (normalization), Max at 2, Mute at 5, nothing else
    assert_eq!(
        actions,
        vec![
            Some(VolumeLevel::Mute),
            None,
            Some(VolumeLevel::Max),
            None,
            None,
            Some(VolumeLevel::Mute),
        ]
    );
}

/// WHAT: Once the state is known, action count equals signal-change count
/// WHY: The debounce property must hold for arbitrary sequences
#[test]
fn given_known_state_when_signal_varies_then_one_action_per_change() {
    // Given: A controller already encoding an inactive signal
    let mut controller = VolumeController::new();
    let _ = controller.observe(false);

    // When: A sequence with exactly three value changes is observed
    let readings = [false, true, true, false, false, false, true];
    let actions = run_sequence(&mut controller, &readings);

    // Then: Exactly three actions fire
    assert_eq!(actions.iter().flatten().count(), 3);
}

/// WHAT: Transition never returns to Unknown
/// WHY: Unknown is the initial state only
#[test]
fn given_any_reading_when_transitioning_then_unknown_never_reentered() {
    for state in [VolumeState::Unknown, VolumeState::On, VolumeState::Off] {
        for active in [false, true] {
            let (next, _) = transition(state, active);
            assert_ne!(next, VolumeState::Unknown);
        }
    }
}

/// WHAT: Transition is a no-op when the state already encodes the reading
/// WHY: The pure function is the debounce; callers rely on None to skip work
#[test]
fn given_matching_state_when_transitioning_then_no_action() {
    // Given/When: Readings that match what the state encodes
    let (on, on_action) = transition(VolumeState::On, true);
    let (off, off_action) = transition(VolumeState::Off, false);

    // Then: State and action are both unchanged
    assert_eq!((on, on_action), (VolumeState::On, None));
    assert_eq!((off, off_action), (VolumeState::Off, None));
}
