use strum::Display;

/// Parameters that separate the two operating modes. Friction and pace never
/// change independently; a mode change applies a whole preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Verlet velocity retention, in (0,1]; 1.0 means no damping
    pub friction: f32,
    /// Frames between oscillation sign flips
    pub pace: u64,
    /// Amplitude multiplier fed to every gait behavior
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Mode {
    Relaxed,
    Engaged,
}

impl Mode {
    pub fn physics(self) -> Physics {
        match self {
            Mode::Relaxed => presets::RELAXED,
            Mode::Engaged => presets::ENGAGED,
        }
    }
}

pub mod presets {
    use super::Physics;

    /// Slow idle sway
    pub const RELAXED: Physics = Physics {
        friction: 1.0,
        pace: 28,
        intensity: 0.6,
    };

    /// Fast, damped, energetic motion while the pointer is held down
    pub const ENGAGED: Physics = Physics {
        friction: 0.99,
        pace: 10,
        intensity: 2.0,
    };
}
