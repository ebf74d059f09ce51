use serde::{Deserialize, Serialize};
use std::fmt;

/// Plot flavour requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualizationType {
    #[default]
    ThreeD,
    TwoD,
}

impl VisualizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::ThreeD => "3d",
            VisualizationType::TwoD => "2d",
        }
    }
}

// Anything that is not "3d" falls back to the 2D analysis view.
impl From<&str> for VisualizationType {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("3d") {
            VisualizationType::ThreeD
        } else {
            VisualizationType::TwoD
        }
    }
}

impl From<String> for VisualizationType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<VisualizationType> for String {
    fn from(value: VisualizationType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four physical inputs driving a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EkmanParameters {
    /// m/s
    pub wind_speed: f64,
    /// degrees, measured counter-clockwise from east
    pub wind_direction: f64,
    /// degrees, positive north
    pub latitude: f64,
    /// m
    pub depth: f64,
}

impl Default for EkmanParameters {
    fn default() -> Self {
        Self {
            wind_speed: 10.0,
            wind_direction: 0.0,
            latitude: 30.0,
            depth: 100.0,
        }
    }
}

fn default_wind_speed() -> f64 {
    EkmanParameters::default().wind_speed
}

fn default_wind_direction() -> f64 {
    EkmanParameters::default().wind_direction
}

fn default_latitude() -> f64 {
    EkmanParameters::default().latitude
}

fn default_depth() -> f64 {
    EkmanParameters::default().depth
}

/// Body of `POST /calculate_ekman`. Absent fields take the slider defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
    #[serde(default = "default_wind_direction")]
    pub wind_direction: f64,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_depth")]
    pub depth: f64,
    #[serde(default)]
    pub visualization_type: VisualizationType,
}

impl CalculationRequest {
    pub fn new(parameters: EkmanParameters, visualization_type: VisualizationType) -> Self {
        Self {
            wind_speed: parameters.wind_speed,
            wind_direction: parameters.wind_direction,
            latitude: parameters.latitude,
            depth: parameters.depth,
            visualization_type,
        }
    }

    pub fn parameters(&self) -> EkmanParameters {
        EkmanParameters {
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            latitude: self.latitude,
            depth: self.depth,
        }
    }
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self::new(EkmanParameters::default(), VisualizationType::default())
    }
}

/// Horizontal current components at each depth level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EkmanSpiral {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

impl EkmanSpiral {
    pub fn speeds(&self) -> Vec<f64> {
        self.u.iter().zip(&self.v).map(|(u, v)| u.hypot(*v)).collect()
    }

    /// Largest speed in the profile, or 1.0 when the profile is still.
    pub fn max_speed(&self) -> f64 {
        let max = self.speeds().into_iter().fold(0.0_f64, f64::max);
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EkmanResults {
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub latitude: f64,
    pub depth: f64,
    /// N/m²
    pub wind_stress: f64,
    pub tau_x: f64,
    pub tau_y: f64,
    /// m²/s
    #[serde(rename = "Mx")]
    pub mx: f64,
    #[serde(rename = "My")]
    pub my: f64,
    /// m
    pub ekman_depth: f64,
    pub z_levels: Vec<f64>,
    pub ekman_spiral: EkmanSpiral,
    /// Coriolis parameter, 1/s
    pub f: f64,
    /// W/m²
    pub energy_transfer_rate: f64,
}

impl EkmanResults {
    pub fn total_transport(&self) -> f64 {
        self.mx.hypot(self.my)
    }

    pub fn transport_direction_deg(&self) -> f64 {
        self.my.atan2(self.mx).to_degrees()
    }
}

/// Response of `POST /calculate_ekman`.
///
/// `graph` is a Plotly figure already serialized to a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub graph: String,
    pub results: EkmanResults,
}

/// Slider bounds and defaults served by `GET /get_parameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    pub wind_speed_range: [f64; 2],
    pub wind_direction_range: [f64; 2],
    pub latitude_range: [f64; 2],
    pub depth_range: [f64; 2],
    pub default_values: EkmanParameters,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            wind_speed_range: [0.0, 30.0],
            wind_direction_range: [0.0, 360.0],
            latitude_range: [-90.0, 90.0],
            depth_range: [10.0, 1000.0],
            default_values: EkmanParameters::default(),
        }
    }
}

impl ParameterRanges {
    pub fn check(&self, parameters: &EkmanParameters) -> crate::utils::error::Result<()> {
        use crate::utils::validation::validate_parameter;

        validate_parameter("wind_speed", parameters.wind_speed, self.wind_speed_range)?;
        validate_parameter(
            "wind_direction",
            parameters.wind_direction,
            self.wind_direction_range,
        )?;
        validate_parameter("latitude", parameters.latitude, self.latitude_range)?;
        validate_parameter("depth", parameters.depth, self.depth_range)?;
        Ok(())
    }
}

/// Display language for plot labels and the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    En,
    Ko,
    Zh,
    Ja,
    Es,
    Ru,
}
