use super::{Query, View, ViewContext};
use crate::core::Storage;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{parse_id_list, validate_required_field};
use async_trait::async_trait;
use std::sync::Arc;

/// Bar plot of the average scores of `movie_ids`, saved through storage.
pub struct PlotView<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> PlotView<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// `average_score_plot_<stamp>.<ext>`, with a `_N` suffix when that
    /// name is already taken so earlier plots are never overwritten.
    async fn unused_filename(&self, stamp: &str, ext: &str) -> String {
        let base = format!("average_score_plot_{}", stamp);
        let mut filename = format!("{}.{}", base, ext);
        let mut n = 1;
        while self.storage.exists(&filename).await {
            filename = format!("{}_{}.{}", base, n, ext);
            n += 1;
        }
        filename
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type.split(';').next().map(str::trim) {
        Some("image/webp") => "webp",
        Some("image/png") => "png",
        Some("image/jpeg") => "jpg",
        Some("image/svg+xml") => "svg",
        _ => "bin",
    }
}

#[async_trait]
impl<S: Storage + 'static> View for PlotView<S> {
    fn name(&self) -> &'static str {
        "plot"
    }

    async fn render(&self, ctx: &ViewContext, query: &Query) -> Result<String> {
        let movie_ids_param = query.get("movie_ids");
        let raw_ids = validate_required_field("movie_ids", &movie_ids_param)?;
        let movie_ids = parse_id_list("movie_ids", raw_ids)?;

        let plot = ctx.client.average_score_plot(&movie_ids).await?;

        let filename = self
            .unused_filename(
                &chrono::Utc::now().format("%Y%m%d_%H%M%S%3f").to_string(),
                extension_for(&plot.content_type),
            )
            .await;
        self.storage.write_file(&filename, &plot.image).await?;
        tracing::info!("Saved {} byte plot as {}", plot.image.len(), filename);

        let excluded: Vec<String> = plot.excluded_ids.iter().map(|id| id.to_string()).collect();
        match ctx.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "file": filename,
                "movie_ids": movie_ids,
                "excluded_movie_ids": plot.excluded_ids,
            }))?),
            OutputFormat::Csv => Ok(format!(
                "file,excluded_movie_ids\n{},\"{}\"",
                filename,
                excluded.join(",")
            )),
            OutputFormat::Text => {
                let mut lines = vec![format!("Average score plot saved to {}", filename)];
                if !excluded.is_empty() {
                    lines.push(format!("Excluded movie ids: {}", excluded.join(", ")));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::{WebservicesClient, EXCLUDED_MOVIE_IDS_HEADER};
    use crate::utils::error::ConsumerError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ConsumerError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, path))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn exists(&self, path: &str) -> bool {
            self.files.lock().await.contains_key(path)
        }
    }

    #[test]
    fn test_extension_for_content_type() {
        assert_eq!(extension_for("image/webp"), "webp");
        assert_eq!(extension_for("image/png; charset=binary"), "png");
        assert_eq!(extension_for("application/octet-stream"), "bin");
    }

    #[tokio::test]
    async fn test_plot_is_saved_and_exclusions_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/movies/average-score-plot")
                .query_param("movie_ids", "550,13");
            then.status(200)
                .header("Content-Type", "image/webp")
                .header(EXCLUDED_MOVIE_IDS_HEADER, "13")
                .body(b"RIFF".to_vec());
        });

        let storage = Arc::new(MockStorage::default());
        let client = WebservicesClient::new(server.url("/api"), Duration::from_secs(5)).unwrap();
        let output = PlotView::new(Arc::clone(&storage))
            .render(
                &ViewContext::new(client, OutputFormat::Text),
                &Query::parse(Some("movie_ids=550,13,550")),
            )
            .await
            .unwrap();

        assert!(output.contains("Excluded movie ids: 13"));

        let name = storage.files.lock().await.keys().next().cloned().unwrap();
        assert!(name.starts_with("average_score_plot_"));
        assert!(name.ends_with(".webp"));
        assert!(output.contains(name.as_str()));

        let saved = storage.read_file(&name).await.unwrap();
        assert_eq!(saved, b"RIFF".to_vec());
    }

    #[tokio::test]
    async fn test_taken_filename_gets_suffix() {
        let storage = Arc::new(MockStorage::default());
        let view = PlotView::new(Arc::clone(&storage));

        let first = view.unused_filename("20261015_023615123", "webp").await;
        assert_eq!(first, "average_score_plot_20261015_023615123.webp");
        storage.write_file(&first, b"first").await.unwrap();

        let second = view.unused_filename("20261015_023615123", "webp").await;
        assert_eq!(second, "average_score_plot_20261015_023615123_1.webp");
        storage.write_file(&second, b"second").await.unwrap();

        let third = view.unused_filename("20261015_023615123", "webp").await;
        assert_eq!(third, "average_score_plot_20261015_023615123_2.webp");
    }

    #[tokio::test]
    async fn test_empty_id_list_is_rejected() {
        let client = WebservicesClient::new("http://127.0.0.1:9/api", Duration::from_secs(1)).unwrap();
        let result = PlotView::new(Arc::new(MockStorage::default()))
            .render(
                &ViewContext::new(client, OutputFormat::Text),
                &Query::parse(Some("movie_ids=,")),
            )
            .await;

        assert!(matches!(result, Err(ConsumerError::ValidationError { .. })));
    }
}
