use super::render::render_movies;
use super::{Query, View, ViewContext, DEFAULT_AMOUNT};
use crate::utils::error::Result;
use crate::utils::validation::parse_non_negative_integer;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct PopularMoviesView;

impl PopularMoviesView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl View for PopularMoviesView {
    fn name(&self) -> &'static str {
        "popular"
    }

    async fn render(&self, ctx: &ViewContext, query: &Query) -> Result<String> {
        let amount = match query.get("amount") {
            Some(raw) => parse_non_negative_integer("amount", raw)?,
            None => DEFAULT_AMOUNT,
        };

        let movies = ctx.client.popular(amount).await?;
        tracing::info!("Fetched {} popular movies", movies.len());
        render_movies(&movies, ctx.format)
    }
}
