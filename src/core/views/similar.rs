use super::render::render_movies;
use super::{Query, View, ViewContext, DEFAULT_AMOUNT};
use crate::domain::model::{OutputFormat, SimilarMovies, SimilarityCriteria};
use crate::utils::error::Result;
use crate::utils::validation::{parse_non_negative_integer, validate_required_field};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct SimilarMoviesView;

impl SimilarMoviesView {
    pub fn new() -> Self {
        Self
    }
}

fn describe_query(similar: &SimilarMovies) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(cast) = &similar.query_cast {
        let ids: Vec<String> = cast.required.iter().map(|id| id.to_string()).collect();
        lines.push(format!("  cast: {}", ids.join(", ")));
    }
    if let Some(genres) = &similar.query_genres {
        let required: Vec<String> = genres.required.iter().map(|id| id.to_string()).collect();
        lines.push(format!(
            "  genres: {} ({} excluded)",
            required.join(", "),
            genres.excluded.len()
        ));
    }
    if let Some(runtime) = &similar.query_runtime {
        lines.push(format!(
            "  runtime: {} to {} min ({} ± {})",
            runtime.lower_bound, runtime.upper_bound, runtime.runtime, runtime.variance
        ));
    }
    lines
}

#[async_trait]
impl View for SimilarMoviesView {
    fn name(&self) -> &'static str {
        "similar"
    }

    async fn render(&self, ctx: &ViewContext, query: &Query) -> Result<String> {
        let movie_id_param = query.get("movie_id");
        let raw_id = validate_required_field("movie_id", &movie_id_param)?;
        let movie_id = parse_non_negative_integer("movie_id", raw_id)?;
        let amount = match query.get("amount") {
            Some(raw) => parse_non_negative_integer("amount", raw)?,
            None => DEFAULT_AMOUNT,
        };
        let criteria = SimilarityCriteria {
            matching_genres: query.flag("matching_genres"),
            similar_runtime: query.flag("similar_runtime"),
            overlapping_actors: query.flag("overlapping_actors"),
        };

        let similar = ctx.client.similar(movie_id, amount, criteria).await?;
        tracing::info!(
            "Found {} movies similar to {}",
            similar.result.len(),
            similar.reference_movie.id
        );

        match ctx.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&similar)?),
            OutputFormat::Csv => render_movies(&similar.result, OutputFormat::Csv),
            OutputFormat::Text => {
                let reference = &similar.reference_movie;
                let mut lines = vec![format!(
                    "Movies similar to {} ({}){}",
                    reference.title,
                    reference.id,
                    if reference.liked { " ♥" } else { "" }
                )];
                let matched_on = describe_query(&similar);
                if !matched_on.is_empty() {
                    lines.push("Matched on:".to_string());
                    lines.extend(matched_on);
                }
                lines.push(String::new());
                lines.push(render_movies(&similar.result, OutputFormat::Text)?);
                Ok(lines.join("\n"))
            }
        }
    }
}
