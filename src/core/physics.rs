//! Wind-driven Ekman transport in a homogeneous ocean (Ekman, 1905).
//!
//! Coordinates: x points east, y points north, z is depth (positive down).
//! Wind direction is the angle of the wind vector measured counter-clockwise
//! from east, in degrees.

use crate::domain::model::{EkmanParameters, EkmanResults, EkmanSpiral};
use std::f64::consts::PI;

/// Earth's rotation rate (rad/s).
pub const EARTH_ROTATION_RATE: f64 = 7.2921e-5;

/// Sea water density (kg/m³).
pub const RHO_WATER: f64 = 1025.0;

/// Air density at sea level (kg/m³).
pub const RHO_AIR: f64 = 1.225;

/// Bulk drag coefficient for wind stress.
pub const DRAG_COEFFICIENT: f64 = 0.0013;

/// Vertical eddy viscosity (m²/s).
pub const EDDY_VISCOSITY: f64 = 0.01;

/// Number of depth levels in the spiral profile, surface and bottom included.
pub const SPIRAL_LEVELS: usize = 50;

/// Latitude used in place of exactly 0° so that f never vanishes.
pub const EQUATOR_LATITUDE_SUBSTITUTE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EkmanCalculator {
    pub rho_water: f64,
    pub rho_air: f64,
    pub drag_coefficient: f64,
    pub eddy_viscosity: f64,
    pub levels: usize,
}

impl Default for EkmanCalculator {
    fn default() -> Self {
        Self {
            rho_water: RHO_WATER,
            rho_air: RHO_AIR,
            drag_coefficient: DRAG_COEFFICIENT,
            eddy_viscosity: EDDY_VISCOSITY,
            levels: SPIRAL_LEVELS,
        }
    }
}

/// Coriolis parameter `f = 2Ω sin φ` (1/s).
pub fn coriolis_parameter(latitude_deg: f64) -> f64 {
    2.0 * EARTH_ROTATION_RATE * latitude_deg.to_radians().sin()
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

impl EkmanCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk wind stress magnitude `ρ_air C_d U²` (N/m²).
    pub fn wind_stress(&self, wind_speed: f64) -> f64 {
        self.rho_air * self.drag_coefficient * wind_speed * wind_speed
    }

    /// Depth of frictional influence `π sqrt(2K / |f|)` (m).
    pub fn ekman_depth(&self, f: f64) -> f64 {
        PI * (2.0 * self.eddy_viscosity / f.abs()).sqrt()
    }

    pub fn calculate(&self, parameters: &EkmanParameters) -> EkmanResults {
        let latitude = if parameters.latitude == 0.0 {
            EQUATOR_LATITUDE_SUBSTITUTE
        } else {
            parameters.latitude
        };

        let f = coriolis_parameter(latitude);
        let wind_stress = self.wind_stress(parameters.wind_speed);

        let direction = parameters.wind_direction.to_radians();
        let tau_x = wind_stress * direction.cos();
        let tau_y = wind_stress * direction.sin();

        // Mx = -τy / (ρf), My = τx / (ρf)
        let mx = -tau_y / (self.rho_water * f);
        let my = tau_x / (self.rho_water * f);

        let ekman_depth = self.ekman_depth(f);

        let z_levels = linspace(0.0, parameters.depth, self.levels);
        let ekman_spiral = self.spiral(&z_levels, tau_x, tau_y, f);

        let u_surface = ekman_spiral.u.first().copied().unwrap_or(0.0);
        let v_surface = ekman_spiral.v.first().copied().unwrap_or(0.0);
        let energy_transfer_rate = tau_x * u_surface + tau_y * v_surface;

        tracing::debug!(
            latitude,
            f,
            wind_stress,
            mx,
            my,
            ekman_depth,
            "computed Ekman transport"
        );

        EkmanResults {
            wind_speed: parameters.wind_speed,
            wind_direction: parameters.wind_direction,
            latitude,
            depth: parameters.depth,
            wind_stress,
            tau_x,
            tau_y,
            mx,
            my,
            ekman_depth,
            z_levels,
            ekman_spiral,
            f,
            energy_transfer_rate,
        }
    }

    /// Velocity profile at each depth in `z_levels`.
    ///
    /// `a = sqrt(|f| / 2K)`; the stress vector is scaled by
    /// `e^{-az} / (ρ sqrt(2K|f|))` and turned by `sign(f) · az`. The surface
    /// current is parallel to the stress.
    pub fn spiral(&self, z_levels: &[f64], tau_x: f64, tau_y: f64, f: f64) -> EkmanSpiral {
        let k = self.eddy_viscosity;
        let a = (f.abs() / (2.0 * k)).sqrt();
        let scale = 1.0 / (self.rho_water * (2.0 * k * f.abs()).sqrt());
        let sgn = if f > 0.0 {
            1.0
        } else if f < 0.0 {
            -1.0
        } else {
            0.0
        };

        let (u, v) = z_levels
            .iter()
            .map(|&z| {
                let factor = scale * (-a * z).exp();
                let (sin_az, cos_az) = (a * z).sin_cos();
                (
                    factor * (tau_x * cos_az - sgn * tau_y * sin_az),
                    factor * (sgn * tau_x * sin_az + tau_y * cos_az),
                )
            })
            .unzip();

        EkmanSpiral { u, v }
    }
}
