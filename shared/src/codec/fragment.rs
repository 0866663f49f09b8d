use crate::{
    constants::{SPECTRUM_BANDS, WAVEFORM_SAMPLES},
    protocol::parameter::ParameterId,
    state::param_value::ParamValue,
};

/// The typed content of one successfully decoded inbound frame
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// The scalar parameters the frame carried, in schema order
    FullState(Vec<(ParameterId, ParamValue)>),
    /// A single parameter echo
    Parameter(ParameterId, ParamValue),
    /// Effects chain order, tokens untouched
    EffectsOrder(Vec<String>),
    Spectrum([f32; SPECTRUM_BANDS]),
    Waveform([f32; WAVEFORM_SAMPLES]),
}
