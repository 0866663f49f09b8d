use chroma_shared::{ParamValue, ParameterId, StateSnapshot};

/// Builds engine-side snapshots starting from the registry defaults
#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: StateSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn float(mut self, id: ParameterId, value: f32) -> Self {
        self.snapshot.set(id, ParamValue::Float(value)).unwrap();
        self
    }

    pub fn flag(mut self, id: ParameterId, value: bool) -> Self {
        self.snapshot.set(id, ParamValue::Bool(value)).unwrap();
        self
    }

    pub fn int(mut self, id: ParameterId, value: i32) -> Self {
        self.snapshot.set(id, ParamValue::Int(value)).unwrap();
        self
    }

    pub fn text(mut self, id: ParameterId, value: &str) -> Self {
        self.snapshot
            .set(id, ParamValue::Text(value.to_string()))
            .unwrap();
        self
    }

    pub fn order(mut self, tokens: &[&str]) -> Self {
        let tokens = tokens.iter().map(|token| token.to_string()).collect();
        self.snapshot
            .set(ParameterId::EffectsOrder, ParamValue::TextList(tokens))
            .unwrap();
        self
    }

    pub fn spectrum(mut self, spectrum: [f32; 8]) -> Self {
        self.snapshot.telemetry_mut().spectrum = spectrum;
        self
    }

    pub fn build(self) -> StateSnapshot {
        self.snapshot
    }
}
