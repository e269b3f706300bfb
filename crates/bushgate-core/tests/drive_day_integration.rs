//! End-to-end drive-day scenarios against the public API.

use bushgate_core::{classify, DriveMode, Event, RefreshDriver, TimeOfDay};

#[test]
fn host_clock_scenarios() {
    let cases = [
        ("07:15", DriveMode::Prime),
        ("12:00", DriveMode::Midday),
        ("16:00", DriveMode::Afternoon),
        ("20:00", DriveMode::General),
    ];
    for (clock, expected) in cases {
        let time: TimeOfDay = clock.parse().unwrap();
        assert_eq!(classify(time), expected, "at {clock}");
    }
}

/// Drive the refresh cycle across a whole simulated day at the default 60 s
/// period and check the sequence of window transitions.
#[test]
fn refresh_driver_full_day_transitions() {
    let mut driver = RefreshDriver::new();
    let mut transitions = Vec::new();
    let mut evaluations = 0u32;

    for minute in 0..1440u64 {
        let epoch_ms = minute * 60_000;
        let time = TimeOfDay::wrapping(minute as i64);
        match driver.tick_at(epoch_ms, time) {
            Some(Event::ModeChanged { from, to, minutes, .. }) => {
                evaluations += 1;
                transitions.push((minutes, from, to));
            }
            Some(Event::ModeRefreshed { .. }) => evaluations += 1,
            Some(_) => panic!("unexpected event kind from refresh driver"),
            None => {}
        }
    }

    // One evaluation per simulated minute.
    assert_eq!(evaluations, 1440);

    assert_eq!(
        transitions,
        vec![
            (360, DriveMode::General, DriveMode::Prime),
            (571, DriveMode::Prime, DriveMode::General),
            (600, DriveMode::General, DriveMode::Midday),
            (871, DriveMode::Midday, DriveMode::General),
            (930, DriveMode::General, DriveMode::Afternoon),
            (1051, DriveMode::Afternoon, DriveMode::General),
        ]
    );
}

/// Polling faster than the period must not produce extra evaluations.
#[test]
fn refresh_driver_sub_period_polls_are_quiet() {
    let mut driver = RefreshDriver::new();
    let time = TimeOfDay::new(720).unwrap();

    assert!(driver.tick_at(0, time).is_some());
    let mut emitted = 0;
    for second in 1..60u64 {
        if driver.tick_at(second * 1000, time).is_some() {
            emitted += 1;
        }
    }
    assert_eq!(emitted, 0);
    assert!(driver.tick_at(60_000, time).is_some());
    assert_eq!(driver.current(), Some(DriveMode::Midday));
}
