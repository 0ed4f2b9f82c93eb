use crate::domain::model::FetchOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink whose text is replaced on success. Stands in for the page element.
pub trait OutputSurface: Send + Sync {
    fn name(&self) -> &str;
    fn set_text(&self, text: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn wait_for_ack(&self) -> bool;
}

/// One GET, one outcome. Implementations must not retry.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_json(&self) -> Result<FetchOutcome>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<()>;
}
