/// INTEGRATION TESTS: Listener to consumer channel
///
/// The listener must never stall on a slow consumer. When the bounded
/// channel is full the newest snapshot is dropped and queued ones remain,
/// while the shadow state keeps merging every fragment.

use chroma_client::{
    transport::{PublishOutcome, ShadowState, SnapshotPublisher},
    ListenerError, SyncConfig,
};
use chroma_shared::{encode, ParamValue, ParameterId};
use chroma_test::{assert_approx, count_state_updates, LocalLink};

fn gain_frame(value: f32) -> chroma_shared::Frame {
    encode(ParameterId::Gain, &ParamValue::Float(value)).unwrap()
}

#[test]
fn full_channel_drops_newest() {
    let mut link = LocalLink::with_config(SyncConfig::default(), 2);

    let outcomes: Vec<PublishOutcome> = [0.1, 0.2, 0.3, 0.4, 0.5]
        .iter()
        .map(|value| link.deliver(&gain_frame(*value)))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            PublishOutcome::Published,
            PublishOutcome::Published,
            PublishOutcome::Dropped,
            PublishOutcome::Dropped,
            PublishOutcome::Dropped,
        ]
    );
    assert_eq!(link.publisher.dropped(), 3);

    let events = link.surface.receive();
    assert_eq!(count_state_updates(&events), 2);
    // the queued snapshots are the oldest two
    assert_approx(link.surface.snapshot().float(ParameterId::Gain), 0.2);
}

#[test]
fn shadow_state_keeps_merging_while_full() {
    let mut link = LocalLink::with_config(SyncConfig::default(), 1);
    link.deliver(&gain_frame(0.1));
    link.deliver(&gain_frame(0.9));
    assert_approx(
        link.publisher.shadow().snapshot().float(ParameterId::Gain),
        0.9,
    );

    link.surface.receive();
    assert_approx(link.surface.snapshot().float(ParameterId::Gain), 0.1);

    // the next published snapshot carries every field merged so far
    let dry_wet = encode(ParameterId::DryWet, &ParamValue::Float(0.8)).unwrap();
    assert_eq!(link.deliver(&dry_wet), PublishOutcome::Published);
    link.surface.receive();
    assert_approx(link.surface.snapshot().float(ParameterId::Gain), 0.9);
    assert_approx(link.surface.snapshot().float(ParameterId::DryWet), 0.8);
}

#[test]
fn dropped_consumer_closes_channel() {
    let LocalLink {
        surface,
        mut publisher,
        ..
    } = LocalLink::new();
    drop(surface);

    assert_eq!(publisher.handle_frame(&gain_frame(0.3)), PublishOutcome::Closed);
}

#[test]
fn undecodable_frames_publish_nothing() {
    let mut link = LocalLink::new();
    let unknown = chroma_shared::Frame {
        addr: "/chroma/unknown".to_string(),
        args: Vec::new(),
    };
    assert_eq!(link.deliver(&unknown), PublishOutcome::Ignored);
    assert!(link.surface.receive().is_empty());
}

#[test]
fn zero_capacity_is_rejected() {
    let result = SnapshotPublisher::channel(ShadowState::default(), 0);
    assert!(matches!(result, Err(ListenerError::ZeroCapacity)));
}
