use crate::domain::model::{SearchMode, Unit, WinPlan};
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
    fn year(&self) -> u32;
    fn search_mode(&self) -> SearchMode;
    fn quiet(&self) -> bool;
    fn write_json(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Unit>>;
    async fn transform(&self, units: Vec<Unit>) -> Result<WinPlan>;
    async fn load(&self, plan: WinPlan) -> Result<String>;
}
