use crate::VolumeLevel;

/// WHAT: Helper arguments carry exactly one decimal digit
/// WHY: The external helper is invoked with fixed-point "1.0"/"0.0" strings
#[test]
fn given_volume_levels_when_formatting_arguments_then_one_decimal_digit() {
    // Given/When: Formatting both levels
    let max = VolumeLevel::Max.argument();
    let mute = VolumeLevel::Mute.argument();

    // Then: Fixed-point form with a single fractional digit
    assert_eq!(max, "1.0");
    assert_eq!(mute, "0.0");
}

/// WHAT: Magnitudes stay inside the normalized range
/// WHY: The helper contract expects a magnitude in [0.0, 1.0]
#[test]
fn given_volume_levels_when_reading_magnitudes_then_normalized() {
    for level in [VolumeLevel::Max, VolumeLevel::Mute] {
        let magnitude = level.magnitude();
        assert!((0.0..=1.0).contains(&magnitude));
    }
}
