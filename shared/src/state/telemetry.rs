use crate::constants::{SPECTRUM_BANDS, WAVEFORM_SAMPLES};

/// Visualisation data broadcast by the engine. Nothing here is editable, so
/// inbound telemetry always replaces what the model holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub spectrum: [f32; SPECTRUM_BANDS],
    pub waveform: [f32; WAVEFORM_SAMPLES],
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            spectrum: [0.0; SPECTRUM_BANDS],
            waveform: [0.0; WAVEFORM_SAMPLES],
        }
    }
}
