use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting export...");

        tracing::info!("Fetching questions...");
        let page = self.pipeline.extract().await?;
        tracing::info!("Questions found: {}", page.items.len());

        let batch = self.pipeline.transform(page).await?;
        tracing::info!("Mapped {} rows", batch.rows.len());
        tracing::info!("API quota remaining: {}", batch.quota_remaining);

        let output_path = self.pipeline.load(batch).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
