/// INTEGRATION TESTS: Effects chain ordering
///
/// Every order operation re-sends the entire list; edge swaps send nothing.

use chroma_client::ControlError;
use chroma_shared::{Fragment, OscType, ParamValue, ParameterId, DEFAULT_EFFECTS_ORDER};
use chroma_test::{decode_all, LocalLink};

fn sent_order(link: &mut LocalLink) -> Vec<Vec<String>> {
    decode_all(&link.engine.take_received())
        .into_iter()
        .filter_map(|fragment| match fragment {
            Fragment::EffectsOrder(order) => Some(order),
            _ => None,
        })
        .collect()
}

#[test]
fn swap_down_then_reset() {
    let mut link = LocalLink::new();
    assert_eq!(link.surface.snapshot().effects_order(), DEFAULT_EFFECTS_ORDER);

    assert!(link.surface.swap_down(0).unwrap());
    assert_eq!(
        link.surface.snapshot().effects_order(),
        ["overdrive", "filter", "bitcrush", "granular", "reverb", "delay"]
    );
    assert_eq!(
        sent_order(&mut link),
        vec![vec!["overdrive", "filter", "bitcrush", "granular", "reverb", "delay"]]
    );

    link.surface.reset_order().unwrap();
    assert_eq!(link.surface.snapshot().effects_order(), DEFAULT_EFFECTS_ORDER);
    assert_eq!(sent_order(&mut link), vec![DEFAULT_EFFECTS_ORDER.to_vec()]);
}

#[test]
fn swap_up_moves_last_effect_earlier() {
    let mut link = LocalLink::new();
    assert!(link.surface.swap_up(5).unwrap());
    assert_eq!(
        link.surface.snapshot().effects_order(),
        ["filter", "overdrive", "bitcrush", "granular", "delay", "reverb"]
    );
}

#[test]
fn edge_swaps_are_no_ops() {
    let mut link = LocalLink::new();
    assert!(!link.surface.swap_up(0).unwrap());
    assert!(!link.surface.swap_down(5).unwrap());
    assert!(link.engine.take_received().is_empty());
    assert!(link.surface.receive().is_empty());
}

#[test]
fn out_of_range_swap_is_an_error() {
    let mut link = LocalLink::new();
    let error = link.surface.swap_up(9).unwrap_err();
    assert_eq!(error, ControlError::OrderIndexOutOfRange { index: 9, len: 6 });
}

#[test]
fn order_broadcast_is_shielded_while_pending() {
    let mut link = LocalLink::new();
    link.surface.swap_down(0).unwrap();

    // engine still reports the default chain
    let broadcast = link.engine.effects_order_frame();
    link.deliver(&broadcast);
    link.surface.receive();
    assert_eq!(link.surface.snapshot().effects_order()[0], "overdrive");

    link.advance_ms(600);
    link.deliver(&broadcast);
    link.surface.receive();
    assert_eq!(link.surface.snapshot().effects_order(), DEFAULT_EFFECTS_ORDER);
}

#[test]
fn state_broadcast_never_reverts_a_reorder() {
    let mut link = LocalLink::new();
    link.surface.swap_down(0).unwrap();
    link.engine.process();
    assert_eq!(link.engine.state().effects_order()[0], "overdrive");

    // full state carries no order, so the reorder outlives its window
    link.advance_ms(600);
    link.broadcast_state();
    assert_eq!(link.surface.snapshot().effects_order()[0], "overdrive");
}

#[test]
fn telemetry_never_reverts_a_reorder() {
    let mut link = LocalLink::new();
    link.surface.swap_down(0).unwrap();

    link.advance_ms(600);
    let spectrum = link.engine.spectrum_frame();
    link.deliver(&spectrum);
    link.surface.receive();
    assert_eq!(
        link.surface.snapshot().effects_order(),
        ["overdrive", "filter", "bitcrush", "granular", "reverb", "delay"]
    );
}

#[test]
fn engine_order_is_adopted_with_unknown_tokens() {
    let mut link = LocalLink::new();
    link.engine.set(
        ParameterId::EffectsOrder,
        ParamValue::TextList(vec!["delay".into(), "chorus".into()]),
    );
    let broadcast = link.engine.effects_order_frame();
    link.deliver(&broadcast);
    link.surface.receive();

    assert_eq!(link.surface.snapshot().effects_order(), ["delay", "chorus"]);
}

#[test]
fn request_effects_order_sends_bare_request() {
    let mut link = LocalLink::new();
    link.surface.request_effects_order().unwrap();

    let frames = link.engine.take_received();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].addr, "/chroma/getEffectsOrder");
    assert_eq!(frames[0].args, Vec::<OscType>::new());
}
