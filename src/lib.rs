pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use adapters::HttpBackend;
pub use core::{engine::Explorer, form::ParameterForm, physics::EkmanCalculator, service::EkmanService};
pub use domain::model::{
    CalculationRequest, CalculationResponse, EkmanParameters, EkmanResults, Language,
    ParameterRanges, VisualizationType,
};
pub use utils::error::{EkmanError, Result};
