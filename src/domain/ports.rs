use crate::domain::model::{ExportBatch, QuestionsPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ExportConfig: Send + Sync {
    fn api_base(&self) -> &str;
    fn site(&self) -> &str;
    fn question_ids(&self) -> &[String];
    fn from_timestamp(&self) -> Option<i64>;
    fn to_timestamp(&self) -> Option<i64>;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<QuestionsPage>;
    async fn transform(&self, page: QuestionsPage) -> Result<ExportBatch>;
    async fn load(&self, batch: ExportBatch) -> Result<String>;
}
