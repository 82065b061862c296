use glam::Vec3;

/// Damped spring parameters in the tension/friction/mass form used by UI
/// animation libraries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Spring with exactly the friction needed for critical damping.
    pub fn critical(tension: f32, mass: f32) -> Self {
        let mass = mass.max(f32::EPSILON);
        Self {
            tension,
            friction: 2.0 * (tension * mass).sqrt(),
            mass,
        }
    }

    /// Undamped angular frequency, rad/s.
    #[inline]
    pub fn omega(&self) -> f32 {
        (self.tension.max(0.0) / self.mass.max(f32::EPSILON)).sqrt()
    }

    /// Damping ratio: < 1 oscillates, 1 is critical, > 1 creeps.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        let denom = 2.0 * (self.tension.max(0.0) * self.mass.max(f32::EPSILON)).sqrt();
        if denom <= 0.0 {
            return 1.0;
        }
        self.friction.max(0.0) / denom
    }
}

/// Advance one axis of a damped spring by `dt` seconds toward `target`.
///
/// Uses the closed-form solution of the damped oscillator, so the result is
/// independent of how a time span is split into frames.
pub fn step_axis(position: f32, velocity: f32, target: f32, cfg: &SpringConfig, dt: f32) -> (f32, f32) {
    if dt <= 0.0 {
        return (position, velocity);
    }
    let w0 = cfg.omega();
    if w0 <= 0.0 {
        return (position + velocity * dt, velocity);
    }
    let zeta = cfg.damping_ratio();
    let x0 = position - target;
    let v0 = velocity;

    let (x, v) = if (zeta - 1.0).abs() < 1e-3 {
        let e = (-w0 * dt).exp();
        let b = v0 + w0 * x0;
        let x = (x0 + b * dt) * e;
        let v = (b - w0 * (x0 + b * dt)) * e;
        (x, v)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * dt).exp();
        let (s, c) = (wd * dt).sin_cos();
        let b = (v0 + zeta * w0 * x0) / wd;
        let x = e * (x0 * c + b * s);
        let v = e * ((-zeta * w0) * (x0 * c + b * s) + wd * (b * c - x0 * s));
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let e1 = (r1 * dt).exp();
        let e2 = (r2 * dt).exp();
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    };
    (target + x, v)
}

/// A 3D point driven toward a moving target by a damped spring.
#[derive(Clone, Debug)]
pub struct Spring3 {
    pub position: Vec3,
    pub velocity: Vec3,
    pub config: SpringConfig,
}

impl Spring3 {
    pub fn at_rest(position: Vec3, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            config,
        }
    }

    pub fn step(&mut self, target: Vec3, dt: f32) {
        let (x, vx) = step_axis(self.position.x, self.velocity.x, target.x, &self.config, dt);
        let (y, vy) = step_axis(self.position.y, self.velocity.y, target.y, &self.config, dt);
        let (z, vz) = step_axis(self.position.z, self.velocity.z, target.z, &self.config, dt);
        self.position = Vec3::new(x, y, z);
        self.velocity = Vec3::new(vx, vy, vz);
    }
}
