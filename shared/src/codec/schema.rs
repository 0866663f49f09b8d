use crate::{constants::STATE_SLOTS, protocol::parameter::ParameterId};

/// Positional layout of a `/chroma/state` frame. `OverdriveBias` is the
/// newest slot and sits last; engines that predate it send 35 arguments.
pub const STATE_SCHEMA: [ParameterId; STATE_SLOTS] = [
    ParameterId::Gain,
    ParameterId::InputFreeze,
    ParameterId::InputFreezeLength,
    ParameterId::FilterEnabled,
    ParameterId::FilterAmount,
    ParameterId::FilterCutoff,
    ParameterId::FilterResonance,
    ParameterId::OverdriveEnabled,
    ParameterId::OverdriveDrive,
    ParameterId::OverdriveTone,
    ParameterId::OverdriveMix,
    ParameterId::GranularEnabled,
    ParameterId::GranularDensity,
    ParameterId::GranularSize,
    ParameterId::GranularPitchScatter,
    ParameterId::GranularPosScatter,
    ParameterId::GranularMix,
    ParameterId::GranularFreeze,
    ParameterId::GrainIntensity,
    ParameterId::BitcrushEnabled,
    ParameterId::BitDepth,
    ParameterId::BitcrushSampleRate,
    ParameterId::BitcrushDrive,
    ParameterId::BitcrushMix,
    ParameterId::ReverbEnabled,
    ParameterId::ReverbDecayTime,
    ParameterId::ReverbMix,
    ParameterId::DelayEnabled,
    ParameterId::DelayTime,
    ParameterId::DelayDecayTime,
    ParameterId::ModRate,
    ParameterId::ModDepth,
    ParameterId::DelayMix,
    ParameterId::BlendMode,
    ParameterId::DryWet,
    ParameterId::OverdriveBias,
];
