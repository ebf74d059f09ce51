use crate::core::physics::EkmanCalculator;
use crate::domain::model::{CalculationRequest, CalculationResponse, Language, ParameterRanges};
use crate::domain::ports::Backend;
use crate::render::plot::build_figure;
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-process calculation: validation, physics and figure in one step.
///
/// The HTTP server wraps this; the CLI uses it directly for offline runs.
#[derive(Debug, Clone, Default)]
pub struct EkmanService {
    calculator: EkmanCalculator,
    ranges: ParameterRanges,
    language: Language,
}

impl EkmanService {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn with_ranges(mut self, ranges: ParameterRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn ranges(&self) -> &ParameterRanges {
        &self.ranges
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn respond(&self, request: &CalculationRequest) -> Result<CalculationResponse> {
        let parameters = request.parameters();
        self.ranges.check(&parameters)?;

        let results = self.calculator.calculate(&parameters);
        let graph = build_figure(&results, request.visualization_type, self.language).to_json()?;

        tracing::info!(
            wind_speed = parameters.wind_speed,
            wind_direction = parameters.wind_direction,
            latitude = parameters.latitude,
            depth = parameters.depth,
            visualization = %request.visualization_type,
            "calculated Ekman transport"
        );

        Ok(CalculationResponse { graph, results })
    }
}

#[async_trait]
impl Backend for EkmanService {
    async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse> {
        self.respond(request)
    }

    async fn parameter_ranges(&self) -> Result<ParameterRanges> {
        Ok(self.ranges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::VisualizationType;
    use crate::utils::error::EkmanError;

    #[test]
    fn response_graph_is_serialized_figure() {
        let service = EkmanService::new(Language::En);
        let request = CalculationRequest {
            visualization_type: VisualizationType::TwoD,
            ..CalculationRequest::default()
        };

        let response = service.respond(&request).unwrap();
        let graph: serde_json::Value = serde_json::from_str(&response.graph).unwrap();
        assert_eq!(graph["data"].as_array().unwrap().len(), 6);
        assert_eq!(response.results.z_levels.len(), 50);
    }

    #[test]
    fn out_of_range_request_is_an_input_error() {
        let service = EkmanService::new(Language::En);
        let request = CalculationRequest {
            wind_speed: 45.0,
            ..CalculationRequest::default()
        };

        let err = service.respond(&request).unwrap_err();
        assert!(matches!(err, EkmanError::InvalidParameterError { ref field, .. } if field == "wind_speed"));
    }

    #[test]
    fn backend_trait_serves_ranges() {
        let service = EkmanService::new(Language::Ko);
        let ranges = tokio_test::block_on(service.parameter_ranges()).unwrap();
        assert_eq!(ranges.depth_range, [10.0, 1000.0]);
        assert_eq!(ranges.default_values.latitude, 30.0);
    }
}
