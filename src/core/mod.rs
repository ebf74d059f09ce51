pub mod engine;
pub mod form;
pub mod physics;
pub mod service;

pub use crate::domain::model::{CalculationRequest, CalculationResponse, EkmanResults};
pub use crate::domain::ports::{Backend, ConfigProvider, Storage};
pub use crate::utils::error::Result;
