use crate::state::param_value::ParamValue;

use super::{
    control_rule::{ContinuousRule, ControlRule},
    parameter::{ParameterId, PayloadKind},
};

pub const BLEND_MODES: &[&str] = &["mirror", "complement", "transform"];
pub const GRAIN_INTENSITIES: &[&str] = &["subtle", "pronounced", "extreme"];
pub const DEFAULT_EFFECTS_ORDER: &[&str] = &[
    "filter",
    "overdrive",
    "bitcrush",
    "granular",
    "reverb",
    "delay",
];

/// Engine-matching start value of a parameter
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefaultValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Text(&'static str),
    TextList(&'static [&'static str]),
}

impl DefaultValue {
    pub fn to_value(&self) -> ParamValue {
        match self {
            DefaultValue::Float(value) => ParamValue::Float(*value),
            DefaultValue::Int(value) => ParamValue::Int(*value),
            DefaultValue::Bool(value) => ParamValue::Bool(*value),
            DefaultValue::Text(value) => ParamValue::Text((*value).to_string()),
            DefaultValue::TextList(values) => {
                ParamValue::TextList(values.iter().map(|value| (*value).to_string()).collect())
            }
        }
    }
}

/// Everything the adjustment logic and the wire codec need to agree on for
/// one parameter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterDescriptor {
    pub id: ParameterId,
    pub address: &'static str,
    pub payload: PayloadKind,
    pub rule: ControlRule,
    pub default: DefaultValue,
}

const fn float(
    id: ParameterId,
    address: &'static str,
    rule: ContinuousRule,
    default: f32,
) -> ParameterDescriptor {
    ParameterDescriptor {
        id,
        address,
        payload: PayloadKind::Float,
        rule: ControlRule::Continuous(rule),
        default: DefaultValue::Float(default),
    }
}

const fn toggle(id: ParameterId, address: &'static str, default: bool) -> ParameterDescriptor {
    ParameterDescriptor {
        id,
        address,
        payload: PayloadKind::Bool,
        rule: ControlRule::Toggle,
        default: DefaultValue::Bool(default),
    }
}

const fn linear(min: f32, max: f32, scale: f32) -> ContinuousRule {
    ContinuousRule::linear(min, max, scale)
}

const fn logarithmic(min: f32, max: f32, scale: f32) -> ContinuousRule {
    ContinuousRule::logarithmic(min, max, scale)
}

/// Indexed by [`ParameterId::index`]
pub(crate) static REGISTRY: [ParameterDescriptor; ParameterId::COUNT] = {
    use ParameterId::*;
    [
        float(Gain, "/chroma/gain", linear(0.0, 2.0, 2.0), 1.0),
        toggle(InputFreeze, "/chroma/inputFreeze", false),
        float(InputFreezeLength, "/chroma/inputFreezeLength", linear(0.05, 0.5, 0.45), 0.1),
        toggle(FilterEnabled, "/chroma/filterEnabled", true),
        float(FilterAmount, "/chroma/filterAmount", linear(0.0, 1.0, 1.0), 0.5),
        float(FilterCutoff, "/chroma/filterCutoff", linear(200.0, 8000.0, 7800.0), 2000.0),
        float(FilterResonance, "/chroma/filterResonance", linear(0.0, 1.0, 1.0), 0.3),
        toggle(OverdriveEnabled, "/chroma/overdriveEnabled", false),
        float(OverdriveDrive, "/chroma/overdriveDrive", linear(0.0, 1.0, 1.0), 0.5),
        float(OverdriveTone, "/chroma/overdriveTone", linear(0.0, 1.0, 1.0), 0.7),
        float(OverdriveMix, "/chroma/overdriveMix", linear(0.0, 1.0, 1.0), 0.0),
        toggle(GranularEnabled, "/chroma/granularEnabled", true),
        float(GranularDensity, "/chroma/granularDensity", logarithmic(1.0, 50.0, 0.8), 20.0),
        float(GranularSize, "/chroma/granularSize", logarithmic(0.01, 0.5, 0.5), 0.15),
        float(GranularPitchScatter, "/chroma/granularPitchScatter", linear(0.0, 1.0, 1.0), 0.2),
        float(GranularPosScatter, "/chroma/granularPosScatter", linear(0.0, 1.0, 1.0), 0.3),
        float(GranularMix, "/chroma/granularMix", linear(0.0, 1.0, 1.0), 0.5),
        toggle(GranularFreeze, "/chroma/granularFreeze", false),
        ParameterDescriptor {
            id: GrainIntensity,
            address: "/chroma/grainIntensity",
            payload: PayloadKind::Text,
            rule: ControlRule::Discrete {
                choices: GRAIN_INTENSITIES,
            },
            default: DefaultValue::Text("subtle"),
        },
        toggle(BitcrushEnabled, "/chroma/bitcrushEnabled", false),
        float(BitDepth, "/chroma/bitDepth", linear(4.0, 16.0, 12.0), 8.0),
        float(BitcrushSampleRate, "/chroma/bitcrushSampleRate", linear(1000.0, 44100.0, 43100.0), 11025.0),
        float(BitcrushDrive, "/chroma/bitcrushDrive", linear(0.0, 1.0, 1.0), 0.5),
        float(BitcrushMix, "/chroma/bitcrushMix", linear(0.0, 1.0, 1.0), 0.3),
        toggle(ReverbEnabled, "/chroma/reverbEnabled", false),
        float(ReverbDecayTime, "/chroma/reverbDecayTime", linear(0.5, 10.0, 9.5), 3.0),
        float(ReverbMix, "/chroma/reverbMix", linear(0.0, 1.0, 1.0), 0.3),
        toggle(DelayEnabled, "/chroma/delayEnabled", false),
        float(DelayTime, "/chroma/delayTime", linear(0.1, 1.0, 0.9), 0.3),
        float(DelayDecayTime, "/chroma/delayDecayTime", linear(0.5, 10.0, 9.5), 3.0),
        float(ModRate, "/chroma/modRate", logarithmic(0.1, 5.0, 0.5), 0.5),
        float(ModDepth, "/chroma/modDepth", logarithmic(0.0, 1.0, 0.5), 0.3),
        float(DelayMix, "/chroma/delayMix", linear(0.0, 1.0, 1.0), 0.3),
        ParameterDescriptor {
            id: BlendMode,
            address: "/chroma/blendMode",
            payload: PayloadKind::Int,
            rule: ControlRule::Discrete {
                choices: BLEND_MODES,
            },
            default: DefaultValue::Int(0),
        },
        float(DryWet, "/chroma/dryWet", linear(0.0, 1.0, 1.0), 0.5),
        float(OverdriveBias, "/chroma/overdriveBias", linear(-1.0, 1.0, 1.0), 0.5),
        ParameterDescriptor {
            id: EffectsOrder,
            address: crate::constants::EFFECTS_ORDER_ADDRESS,
            payload: PayloadKind::TextList,
            rule: ControlRule::Ordered,
            default: DefaultValue::TextList(DEFAULT_EFFECTS_ORDER),
        },
    ]
};
