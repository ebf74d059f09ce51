use crate::domain::model::{CalculationRequest, CalculationResponse, Language, ParameterRanges};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn language(&self) -> Language;
    fn timeout_seconds(&self) -> u64;
    fn bundle_enabled(&self) -> bool;
}

/// Something that turns a request into physics results plus a figure.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse>;
    async fn parameter_ranges(&self) -> Result<ParameterRanges>;
}
