//! Pointer-driven motion: avatar head follow and card hover tilt.

/// Horizontal pointer gain (yaw target per normalized pointer unit).
const YAW_GAIN: f64 = 0.75;
/// Vertical pointer gain. Pointer up gives a negative target, tilting the head up.
const PITCH_GAIN: f64 = 0.35;
const MAX_YAW: f64 = 0.55;
const MAX_PITCH: f64 = 0.30;
/// Fraction of the remaining distance covered per frame.
const FOLLOW: f64 = 0.08;

/// Rotation target derived from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTarget {
    pub yaw: f64,
    pub pitch: f64,
}

impl PointerTarget {
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            yaw: (client_x / width - 0.5) * YAW_GAIN,
            pitch: (client_y / height - 0.5) * PITCH_GAIN,
        }
    }
}

/// Rotation of the avatar pivot, eased toward the pointer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarMotion {
    /// Rotation around x (radians).
    pub pitch: f64,
    /// Rotation around y (radians).
    pub yaw: f64,
}

impl Default for AvatarMotion {
    fn default() -> Self {
        Self {
            pitch: 0.05,
            yaw: 0.0,
        }
    }
}

impl AvatarMotion {
    /// Advance one frame. `now_ms` drives a slow idle sway.
    pub fn step(&mut self, target: PointerTarget, now_ms: f64) {
        let t = now_ms * 0.0006;
        self.yaw += t.sin() * 0.002;
        self.pitch += (t * 0.9).cos() * 0.0015;

        let yaw_target = target.yaw.clamp(-MAX_YAW, MAX_YAW);
        let pitch_target = target.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw += (yaw_target - self.yaw) * FOLLOW;
        self.pitch += (pitch_target - self.pitch) * FOLLOW;
    }
}

/// Camera distance that fits an object of `max_dim` into a vertical
/// field of view of `fov_deg`, with a little margin.
pub fn fit_distance(max_dim: f64, fov_deg: f64) -> f64 {
    let fov = fov_deg.to_radians();
    (max_dim / (2.0 * (fov / 2.0).tan())) * 1.05
}

/// Perspective tilt for a card hovered at (`x`, `y`) within its box.
pub fn card_tilt(x: f64, y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return String::new();
    }
    let nx = x / width - 0.5;
    let ny = y / height - 0.5;
    format!(
        "perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-2px)",
        -ny * 5.0,
        nx * 6.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_target() {
        let centre = PointerTarget::from_pointer(500.0, 300.0, 1000.0, 600.0);
        assert_eq!(centre, PointerTarget::default());
        let corner = PointerTarget::from_pointer(0.0, 0.0, 1000.0, 600.0);
        assert_eq!(corner.yaw, -0.375);
        assert_eq!(corner.pitch, -0.175);
        assert_eq!(PointerTarget::from_pointer(1.0, 1.0, 0.0, 0.0), PointerTarget::default());
    }

    #[test]
    fn test_motion_converges_within_clamp() {
        let mut motion = AvatarMotion::default();
        let target = PointerTarget { yaw: 5.0, pitch: -5.0 };
        // now = 0 freezes the yaw sway at sin(0).
        for _ in 0..600 {
            motion.step(target, 0.0);
        }
        assert!((motion.yaw - MAX_YAW).abs() < 0.01);
        // cos(0) adds a constant bias of 0.0015 per frame on pitch.
        assert!(motion.pitch > -MAX_PITCH - 0.001);
        assert!(motion.pitch < -MAX_PITCH + 0.03);
    }

    #[test]
    fn test_fit_distance() {
        let d = fit_distance(1.0, 90.0);
        assert!((d - 0.525).abs() < 1e-9);
    }

    #[test]
    fn test_card_tilt() {
        assert_eq!(
            card_tilt(75.0, 25.0, 100.0, 100.0),
            "perspective(800px) rotateX(1.25deg) rotateY(1.50deg) translateY(-2px)"
        );
        assert_eq!(
            card_tilt(100.0, 0.0, 100.0, 100.0),
            "perspective(800px) rotateX(2.50deg) rotateY(3.00deg) translateY(-2px)"
        );
        assert_eq!(card_tilt(1.0, 1.0, 0.0, 10.0), "");
    }
}
