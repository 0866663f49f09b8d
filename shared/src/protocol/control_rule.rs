/// Inclusive numeric range a continuous parameter may take
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f32,
    pub max: f32,
}

impl Domain {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps into the domain. Infinities saturate at the matching bound; NaN
    /// is treated as zero first, so it never survives a clamp.
    pub fn clamp(&self, value: f32) -> f32 {
        let value = if value.is_nan() { 0.0 } else { value };
        value.max(self.min).min(self.max)
    }

    /// Maps a 0..1 control position linearly onto the domain
    pub fn from_unit(&self, unit: f32) -> f32 {
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        self.clamp(self.min + unit * (self.max - self.min))
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    /// Deltas move through log10 space, for ranges spanning more than one
    /// order of magnitude
    Logarithmic,
}

/// How a continuous parameter responds to a relative adjustment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousRule {
    pub domain: Domain,
    pub curve: Curve,
    /// Multiplier applied to a raw delta before it reaches the curve
    pub scale: f32,
}

impl ContinuousRule {
    pub const fn linear(min: f32, max: f32, scale: f32) -> Self {
        Self {
            domain: Domain::new(min, max),
            curve: Curve::Linear,
            scale,
        }
    }

    pub const fn logarithmic(min: f32, max: f32, scale: f32) -> Self {
        Self {
            domain: Domain::new(min, max),
            curve: Curve::Logarithmic,
            scale,
        }
    }

    /// Applies a raw delta to `current`, returning a value inside the domain
    pub fn adjust(&self, current: f32, delta: f32) -> f32 {
        let scaled = delta * self.scale;
        match self.curve {
            Curve::Linear => self.domain.clamp(current + scaled),
            Curve::Logarithmic => self.adjust_logarithmic(current, scaled),
        }
    }

    fn adjust_logarithmic(&self, current: f32, scaled: f32) -> f32 {
        // log10 is undefined at or below zero
        if current.is_nan() || current <= 0.0 || self.domain.min <= 0.0 {
            return self.domain.clamp(current + scaled);
        }

        let log_min = f64::from(self.domain.min).log10();
        let log_max = f64::from(self.domain.max).log10();
        let log_current = f64::from(current).log10();

        let next = log_current + f64::from(scaled) * 0.1 * (log_max - log_min);
        let next = next.clamp(log_min, log_max);

        self.domain.clamp(10f64.powf(next) as f32)
    }
}

/// The adjustment rule a parameter follows
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlRule {
    Continuous(ContinuousRule),
    Toggle,
    /// Cyclic choice among named options, selected by index
    Discrete { choices: &'static [&'static str] },
    /// Whole-list replacement of an ordered token list
    Ordered,
}

impl ControlRule {
    pub fn continuous(&self) -> Option<&ContinuousRule> {
        match self {
            ControlRule::Continuous(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            ControlRule::Discrete { choices } => Some(choices),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ControlRule::Continuous(_) => "Continuous",
            ControlRule::Toggle => "Toggle",
            ControlRule::Discrete { .. } => "Discrete",
            ControlRule::Ordered => "Ordered",
        }
    }
}
