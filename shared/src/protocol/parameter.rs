use super::{
    error::ProtocolError,
    registry::{ParameterDescriptor, REGISTRY},
};

/// The shape of a parameter's single OSC argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// 32-bit float
    Float,
    /// 32-bit integer
    Int,
    /// Sent as a 32-bit integer, 0 or 1
    Bool,
    /// Bounded string
    Text,
    /// Variable-length list of bounded strings
    TextList,
}

/// Handle for one controllable quantity of the effects engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterId {
    Gain,
    InputFreeze,
    InputFreezeLength,
    FilterEnabled,
    FilterAmount,
    FilterCutoff,
    FilterResonance,
    OverdriveEnabled,
    OverdriveDrive,
    OverdriveTone,
    OverdriveMix,
    GranularEnabled,
    GranularDensity,
    GranularSize,
    GranularPitchScatter,
    GranularPosScatter,
    GranularMix,
    GranularFreeze,
    GrainIntensity,
    BitcrushEnabled,
    BitDepth,
    BitcrushSampleRate,
    BitcrushDrive,
    BitcrushMix,
    ReverbEnabled,
    ReverbDecayTime,
    ReverbMix,
    DelayEnabled,
    DelayTime,
    DelayDecayTime,
    ModRate,
    ModDepth,
    DelayMix,
    BlendMode,
    DryWet,
    OverdriveBias,
    EffectsOrder,
}

impl ParameterId {
    pub const COUNT: usize = 37;

    /// Every parameter, in declaration order
    pub const ALL: [ParameterId; Self::COUNT] = [
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
        ParameterId::EffectsOrder,
    ];

    /// Position of this parameter in [`ParameterId::ALL`] and in the registry
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static ParameterDescriptor {
        &REGISTRY[self.index()]
    }

    /// The OSC address the engine listens on for this parameter
    pub fn address(self) -> &'static str {
        self.descriptor().address
    }

    pub fn payload(self) -> PayloadKind {
        self.descriptor().payload
    }

    /// Looks up the parameter bound to an OSC address
    pub fn from_address(address: &str) -> Option<ParameterId> {
        REGISTRY
            .iter()
            .find(|descriptor| descriptor.address == address)
            .map(|descriptor| descriptor.id)
    }

    /// Like [`ParameterId::from_address`], but reports the miss as an error
    pub fn try_from_address(address: &str) -> Result<ParameterId, ProtocolError> {
        Self::from_address(address).ok_or_else(|| ProtocolError::UnknownAddress {
            address: address.to_string(),
        })
    }
}
