use chroma_client::SurfaceEvent;

/// Float comparison at f32 wire precision
pub fn approx_eq(left: f32, right: f32) -> bool {
    (left - right).abs() <= 1e-5 * left.abs().max(right.abs()).max(1.0)
}

#[track_caller]
pub fn assert_approx(actual: f32, expected: f32) {
    assert!(
        approx_eq(actual, expected),
        "expected {} to be approximately {}",
        actual,
        expected
    );
}

pub fn count_state_updates(events: &[SurfaceEvent]) -> usize {
    events.iter().filter(|event| event.is_state_update()).count()
}

pub fn connection_changes(events: &[SurfaceEvent]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|event| match event {
            SurfaceEvent::ConnectionChanged(connected) => Some(*connected),
            _ => None,
        })
        .collect()
}
