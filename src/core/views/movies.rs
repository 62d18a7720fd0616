use super::{Query, View, ViewContext};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::parse_non_negative_integer;
use async_trait::async_trait;

/// The movies the user liked. `like=<id>` and `unlike=<id>` change a like
/// status before the listing is fetched.
#[derive(Debug, Default)]
pub struct MoviesView;

impl MoviesView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl View for MoviesView {
    fn name(&self) -> &'static str {
        "movies"
    }

    async fn render(&self, ctx: &ViewContext, query: &Query) -> Result<String> {
        let mut notes = Vec::new();

        if let Some(raw) = query.get("like") {
            let id = parse_non_negative_integer("like", raw)?;
            ctx.client.like(id).await?;
            notes.push(format!("Liked movie {}", id));
        }
        if let Some(raw) = query.get("unlike") {
            let id = parse_non_negative_integer("unlike", raw)?;
            ctx.client.unlike(id).await?;
            notes.push(format!("Un-liked movie {}", id));
        }

        let liked = ctx.client.likes().await?;
        tracing::debug!("{} liked movies", liked.len());

        let listing = match ctx.format {
            OutputFormat::Json => serde_json::to_string_pretty(&liked)?,
            OutputFormat::Csv => std::iter::once("id".to_string())
                .chain(liked.iter().map(|id| id.to_string()))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Text if liked.is_empty() => "No liked movies yet.".to_string(),
            OutputFormat::Text => {
                let mut lines = vec![format!("Liked movies ({}):", liked.len())];
                lines.extend(liked.iter().map(|id| format!("  {}", id)));
                lines.join("\n")
            }
        };

        // 狀態訊息只在純文字模式輸出，避免破壞 csv/json
        if ctx.format == OutputFormat::Text && !notes.is_empty() {
            notes.push(listing);
            return Ok(notes.join("\n"));
        }
        Ok(listing)
    }
}
