/// Every Chroma OSC address lives under this prefix
pub const ADDRESS_PREFIX: &str = "/chroma/";

/// Full-state broadcast from the engine
pub const STATE_ADDRESS: &str = "/chroma/state";
/// 8-band spectrum telemetry broadcast
pub const SPECTRUM_ADDRESS: &str = "/chroma/spectrum";
/// 64-sample waveform telemetry broadcast
pub const WAVEFORM_ADDRESS: &str = "/chroma/waveform";
/// Effects chain order, used both to set it and by the engine to report it
pub const EFFECTS_ORDER_ADDRESS: &str = "/chroma/effectsOrder";
/// Zero-argument request for an effects order broadcast
pub const EFFECTS_ORDER_REQUEST_ADDRESS: &str = "/chroma/getEffectsOrder";
/// Zero-argument request for a full-state broadcast
pub const SYNC_ADDRESS: &str = "/chroma/sync";

/// Number of positional arguments a full-state frame must carry. Frames with
/// fewer are discarded, which doubles as the protocol version guard.
pub const STATE_ARG_COUNT: usize = 35;
/// Slots the client knows how to read. Slots past [`STATE_ARG_COUNT`] are
/// optional and decoded only when the engine sends them.
pub const STATE_SLOTS: usize = 36;

pub const SPECTRUM_BANDS: usize = 8;
pub const WAVEFORM_SAMPLES: usize = 64;

/// Strings on the wire are truncated to this many bytes
pub const MAX_STRING_BYTES: usize = 255;
