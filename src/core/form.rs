use crate::domain::model::{CalculationRequest, EkmanParameters, VisualizationType};
use crate::domain::presets::{find_location, find_wind_preset};
use crate::render::panel::slider_labels;
use crate::utils::error::{EkmanError, Result};

/// Raw control values as entered: four slider strings and the checked view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterForm {
    pub wind_speed: String,
    pub wind_direction: String,
    pub latitude: String,
    pub depth: String,
    pub visualization_type: String,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::from_parameters(&EkmanParameters::default(), VisualizationType::default())
    }
}

fn parse_slider(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| EkmanError::InvalidParameterError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Value is not a number".to_string(),
        })?;

    if !value.is_finite() {
        return Err(EkmanError::InvalidParameterError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    Ok(value)
}

impl ParameterForm {
    pub fn from_parameters(parameters: &EkmanParameters, visualization: VisualizationType) -> Self {
        Self {
            wind_speed: parameters.wind_speed.to_string(),
            wind_direction: parameters.wind_direction.to_string(),
            latitude: parameters.latitude.to_string(),
            depth: parameters.depth.to_string(),
            visualization_type: visualization.to_string(),
        }
    }

    /// Sets latitude and wind from a named location.
    pub fn apply_location(&mut self, key: &str) -> Result<()> {
        let preset = find_location(key).ok_or_else(|| EkmanError::InvalidParameterError {
            field: "preset".to_string(),
            value: key.to_string(),
            reason: "Unknown location preset".to_string(),
        })?;

        self.latitude = preset.latitude.to_string();
        self.wind_speed = preset.wind_speed.to_string();
        self.wind_direction = preset.wind_direction.to_string();
        Ok(())
    }

    pub fn apply_wind_preset(&mut self, key: &str) -> Result<()> {
        let speed = find_wind_preset(key).ok_or_else(|| EkmanError::InvalidParameterError {
            field: "wind_preset".to_string(),
            value: key.to_string(),
            reason: "Unknown wind preset".to_string(),
        })?;

        self.wind_speed = speed.to_string();
        Ok(())
    }

    /// Reads the controls into a request payload.
    pub fn read(&self) -> Result<CalculationRequest> {
        let parameters = EkmanParameters {
            wind_speed: parse_slider("wind_speed", &self.wind_speed)?,
            wind_direction: parse_slider("wind_direction", &self.wind_direction)?,
            latitude: parse_slider("latitude", &self.latitude)?,
            depth: parse_slider("depth", &self.depth)?,
        };

        Ok(CalculationRequest::new(
            parameters,
            VisualizationType::from(self.visualization_type.as_str()),
        ))
    }

    pub fn labels(&self) -> Result<[String; 4]> {
        Ok(slider_labels(&self.read()?.parameters()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_reads_default_request() {
        let request = ParameterForm::default().read().unwrap();
        assert_eq!(request, CalculationRequest::default());
    }

    #[test]
    fn slider_strings_are_parsed_as_floats() {
        let form = ParameterForm {
            wind_speed: " 12.5".to_string(),
            wind_direction: "270".to_string(),
            latitude: "-45".to_string(),
            depth: "300".to_string(),
            visualization_type: "2d".to_string(),
        };

        let request = form.read().unwrap();
        assert_eq!(request.wind_speed, 12.5);
        assert_eq!(request.latitude, -45.0);
        assert_eq!(request.visualization_type, VisualizationType::TwoD);
        assert_eq!(form.labels().unwrap()[1], "270°");
    }

    #[test]
    fn garbage_and_infinity_are_rejected() {
        let mut form = ParameterForm::default();
        form.depth = "deep".to_string();
        assert!(matches!(
            form.read(),
            Err(EkmanError::InvalidParameterError { ref field, .. }) if field == "depth"
        ));

        form.depth = "inf".to_string();
        assert!(form.read().is_err());
    }

    #[test]
    fn presets_fill_the_sliders() {
        let mut form = ParameterForm::default();
        form.apply_location("north_atlantic").unwrap();
        form.apply_wind_preset("strong_wind").unwrap();

        let request = form.read().unwrap();
        assert_eq!(request.latitude, 50.0);
        assert_eq!(request.wind_direction, 270.0);
        assert_eq!(request.wind_speed, 20.0);
        assert!(form.apply_location("atlantis").is_err());
    }
}
