use log::warn;

use crate::{
    codec::fragment::Fragment,
    protocol::{error::ProtocolError, parameter::ParameterId},
};

use super::{param_value::ParamValue, telemetry::Telemetry};

const _: () = assert!(ParameterId::COUNT <= u64::BITS as usize);

/// Point-in-time value of every parameter plus the latest telemetry.
///
/// A snapshot also remembers which parameters were written through [`set`] or
/// a merged [`Fragment`]. Everything else still holds its registry default,
/// and a consumer reconciling against engine state must not mistake that
/// default for something the engine reported.
///
/// [`set`]: StateSnapshot::set
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    /// Indexed by [`ParameterId::index`]
    values: Vec<ParamValue>,
    /// One bit per [`ParameterId::index`]
    reported: u64,
    telemetry: Telemetry,
}

impl Default for StateSnapshot {
    /// Engine-matching defaults from the registry, none of them reported
    fn default() -> Self {
        Self {
            values: ParameterId::ALL
                .iter()
                .map(|id| id.descriptor().default.to_value())
                .collect(),
            reported: 0,
            telemetry: Telemetry::default(),
        }
    }
}

// Equality is about content; provenance is not compared.
impl PartialEq for StateSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.telemetry == other.telemetry
    }
}

impl StateSnapshot {
    pub fn get(&self, id: ParameterId) -> &ParamValue {
        &self.values[id.index()]
    }

    /// Replaces one parameter's value. The payload kind must match the
    /// registry, so a snapshot can never hold a value its codec can't send.
    pub fn set(&mut self, id: ParameterId, value: ParamValue) -> Result<(), ProtocolError> {
        let expected = id.payload();
        if value.kind() != expected {
            return Err(ProtocolError::PayloadMismatch {
                parameter: id,
                expected,
                found: value.kind(),
            });
        }
        self.values[id.index()] = value;
        self.reported |= 1 << id.index();
        Ok(())
    }

    /// True once `id` has been written, as opposed to still holding its
    /// default
    pub fn is_reported(&self, id: ParameterId) -> bool {
        self.reported & (1 << id.index()) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, &ParamValue)> {
        ParameterId::ALL.iter().copied().zip(self.values.iter())
    }

    /// Float value of a continuous parameter, `0.0` for any other kind
    pub fn float(&self, id: ParameterId) -> f32 {
        self.get(id).as_float().unwrap_or(0.0)
    }

    pub fn flag(&self, id: ParameterId) -> bool {
        self.get(id).as_bool().unwrap_or(false)
    }

    pub fn int(&self, id: ParameterId) -> i32 {
        self.get(id).as_int().unwrap_or(0)
    }

    pub fn text(&self, id: ParameterId) -> &str {
        self.get(id).as_text().unwrap_or("")
    }

    pub fn effects_order(&self) -> &[String] {
        self.get(ParameterId::EffectsOrder)
            .as_text_list()
            .unwrap_or(&[])
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn telemetry_mut(&mut self) -> &mut Telemetry {
        &mut self.telemetry
    }

    /// Splits into the reported values and the telemetry. Parameters still
    /// at their default are left out.
    pub fn into_reported_parts(self) -> (Vec<(ParameterId, ParamValue)>, Telemetry) {
        let reported = self.reported;
        let values = ParameterId::ALL
            .iter()
            .copied()
            .zip(self.values)
            .filter(|(id, _)| reported & (1 << id.index()) != 0)
            .collect();
        (values, self.telemetry)
    }

    /// Overwrites the fields a decoded fragment carries, leaving every other
    /// field as it was
    pub fn merge_fragment(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::FullState(assignments) => {
                for (id, value) in assignments {
                    self.merge_value(id, value);
                }
            }
            Fragment::Parameter(id, value) => self.merge_value(id, value),
            Fragment::EffectsOrder(order) => {
                self.merge_value(ParameterId::EffectsOrder, ParamValue::TextList(order))
            }
            Fragment::Spectrum(spectrum) => self.telemetry.spectrum = spectrum,
            Fragment::Waveform(waveform) => self.telemetry.waveform = waveform,
        }
    }

    fn merge_value(&mut self, id: ParameterId, value: ParamValue) {
        if let Err(err) = self.set(id, value) {
            warn!("Dropping inbound value: {}", err);
        }
    }
}
