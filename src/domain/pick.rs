//! External forcing ("pick"): the demos pin one sample while the mouse is held

use serde::{Deserialize, Serialize};

/// Which field the forced value is written into
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickTarget {
    #[default]
    Displacement,
    /// Current acceleration slot (the 2D damped demo drives the membrane this way)
    Acceleration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickOverride {
    pub index: usize,
    pub value: f64,
}

impl PickOverride {
    /// A zero value records the position but forces nothing
    #[inline]
    pub fn is_active(&self) -> bool {
        self.value != 0.0
    }
}
