/// Gravity-inclusive acceleration; any axis may be absent on a given platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GravityVector {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub z: Option<f64>,
}

impl GravityVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }
}

/// One device-motion event as delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionSample {
    /// `None` when the platform delivered no gravity-inclusive data for this event.
    pub gravity: Option<GravityVector>,
}

impl MotionSample {
    pub fn with_gravity(gravity: GravityVector) -> Self {
        Self {
            gravity: Some(gravity),
        }
    }

    pub fn without_gravity() -> Self {
        Self { gravity: None }
    }

    /// Structurally valid samples carry gravity data, whatever its values.
    pub fn is_valid(&self) -> bool {
        self.gravity.is_some()
    }
}
