use super::{Query, View, ViewContext};
use crate::utils::error::Result;
use async_trait::async_trait;

const ABOUT: &str = "\
A consumer of the movie Webservices API.

Browse popular movies, find movies similar to one you know by genre,
runtime or cast, keep track of the movies you like and plot their
average scores side by side.";

#[derive(Debug, Default)]
pub struct AboutView;

impl AboutView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl View for AboutView {
    fn name(&self) -> &'static str {
        "about"
    }

    async fn render(&self, _ctx: &ViewContext, _query: &Query) -> Result<String> {
        Ok(ABOUT.to_string())
    }
}
