use crate::core::{ExportBatch, ExportConfig, ExportRow, Pipeline, QuestionsPage, Storage};
use crate::domain::model::ApiFailure;
use crate::utils::error::{ExportError, Result};
use chrono::SecondsFormat;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct QuestionsPipeline<S: Storage, C: ExportConfig> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ExportConfig> QuestionsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    fn questions_url(&self) -> Result<Url> {
        let ids = self.config.question_ids().join(";");
        let mut endpoint = Url::parse(&format!(
            "{}/questions/{}",
            self.config.api_base().trim_end_matches('/'),
            ids
        ))?;

        {
            let mut query = endpoint.query_pairs_mut();
            query.append_pair("site", self.config.site());
            if let Some(from) = self.config.from_timestamp() {
                query.append_pair("fromdate", &from.to_string());
            }
            if let Some(to) = self.config.to_timestamp() {
                query.append_pair("todate", &to.to_string());
            }
        }

        Ok(endpoint)
    }
}

fn format_creation_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

#[async_trait::async_trait]
impl<S: Storage, C: ExportConfig> Pipeline for QuestionsPipeline<S, C> {
    async fn extract(&self) -> Result<QuestionsPage> {
        let endpoint = self.questions_url()?;

        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;

        // The API reports failures as a JSON error payload, sometimes even
        // under a 2xx status. Check for it before reading the body as results.
        if let Ok(failure) = serde_json::from_str::<ApiFailure>(&body) {
            tracing::debug!("API error payload: id={}", failure.error_id);
            return Err(ExportError::ApiRejectedError {
                name: failure.error_name,
                message: failure.error_message,
            });
        }

        if !status.is_success() {
            return Err(ExportError::ApiStatusError {
                status: status.as_u16(),
            });
        }

        let page: QuestionsPage = serde_json::from_str(&body)?;

        tracing::debug!(
            "API quota remaining: {}/{}",
            page.quota_remaining,
            page.quota_max
        );
        if page.has_more {
            tracing::warn!("API reports more results than returned; only the first page is exported");
        }

        Ok(page)
    }

    async fn transform(&self, page: QuestionsPage) -> Result<ExportBatch> {
        let mut rows = Vec::with_capacity(page.items.len());

        for item in &page.items {
            rows.push(ExportRow {
                title: item.title.clone(),
                link: item.link.clone(),
                tags: item.tags.join("/"),
                answered: item.is_answered.to_string(),
                answer_count: item.answer_count.to_string(),
                view_count: item.view_count.to_string(),
                creation_date: format_creation_date(item.creation_date),
            });
        }

        Ok(ExportBatch {
            rows,
            quota_remaining: page.quota_remaining,
        })
    }

    async fn load(&self, batch: ExportBatch) -> Result<String> {
        let output_path = self.config.output_file().to_string();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(ExportRow::HEADERS)?;
        for row in &batch.rows {
            writer.write_record(row.fields())?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| ExportError::IoError(e.into_error()))?;

        tracing::debug!("Writing CSV ({} bytes) to {}", data.len(), output_path);
        self.storage.write_file(&output_path, &data).await?;

        Ok(output_path)
    }
}
