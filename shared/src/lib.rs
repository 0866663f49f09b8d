//! # Chroma Shared
//! Control registry, state snapshot types and the OSC wire codec shared by the
//! chroma-client crate and its test harness.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod codec;
mod constants;
mod protocol;
mod state;

pub use rosc::OscType;

pub use codec::{
    decode, decode_as, encode, encode_effects_order_request, encode_full_state,
    encode_spectrum, encode_sync_request, encode_waveform, error::CodecError,
    fragment::Fragment, frame::Frame, frame_kind::FrameKind, schema::STATE_SCHEMA,
    wire::{frame_to_bytes, frames_from_bytes},
};
pub use constants::{
    ADDRESS_PREFIX, EFFECTS_ORDER_ADDRESS, EFFECTS_ORDER_REQUEST_ADDRESS, MAX_STRING_BYTES,
    SPECTRUM_ADDRESS, SPECTRUM_BANDS, STATE_ADDRESS, STATE_ARG_COUNT, STATE_SLOTS, SYNC_ADDRESS,
    WAVEFORM_ADDRESS, WAVEFORM_SAMPLES,
};
pub use protocol::{
    control_rule::{ContinuousRule, ControlRule, Curve, Domain},
    error::ProtocolError,
    parameter::{ParameterId, PayloadKind},
    registry::{DefaultValue, ParameterDescriptor, BLEND_MODES, DEFAULT_EFFECTS_ORDER, GRAIN_INTENSITIES},
};
pub use state::{
    param_value::{bounded_string, ParamValue},
    snapshot::StateSnapshot,
    telemetry::Telemetry,
};
