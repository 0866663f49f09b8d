use crate::{
    constants::{EFFECTS_ORDER_ADDRESS, SPECTRUM_ADDRESS, STATE_ADDRESS, WAVEFORM_ADDRESS},
    protocol::parameter::ParameterId,
};

/// What an inbound address carries, and so which decode routine applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    FullState,
    Spectrum,
    Waveform,
    EffectsOrder,
    Parameter(ParameterId),
}

impl FrameKind {
    pub fn of(address: &str) -> Option<FrameKind> {
        match address {
            STATE_ADDRESS => Some(FrameKind::FullState),
            SPECTRUM_ADDRESS => Some(FrameKind::Spectrum),
            WAVEFORM_ADDRESS => Some(FrameKind::Waveform),
            EFFECTS_ORDER_ADDRESS => Some(FrameKind::EffectsOrder),
            other => ParameterId::from_address(other).map(FrameKind::Parameter),
        }
    }

    /// Every inbound route with its address
    pub fn routes() -> impl Iterator<Item = (&'static str, FrameKind)> {
        let broadcasts = [
            (STATE_ADDRESS, FrameKind::FullState),
            (SPECTRUM_ADDRESS, FrameKind::Spectrum),
            (WAVEFORM_ADDRESS, FrameKind::Waveform),
            (EFFECTS_ORDER_ADDRESS, FrameKind::EffectsOrder),
        ];
        let parameters = ParameterId::ALL
            .into_iter()
            .filter(|id| *id != ParameterId::EffectsOrder)
            .map(|id| (id.address(), FrameKind::Parameter(id)));
        broadcasts.into_iter().chain(parameters)
    }
}
