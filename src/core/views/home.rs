use super::{Query, View, ViewContext};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HomeView {
    pages: &'static [(&'static str, &'static str, &'static str)],
}

impl HomeView {
    pub fn new(pages: &'static [(&'static str, &'static str, &'static str)]) -> Self {
        Self { pages }
    }
}

#[async_trait]
impl View for HomeView {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn render(&self, ctx: &ViewContext, _query: &Query) -> Result<String> {
        let width = self.pages.iter().map(|(path, _, _)| path.len()).max().unwrap_or(0);

        let mut lines = vec![
            "Movie Webservices".to_string(),
            format!("Connected to {}", ctx.client.base_url()),
            String::new(),
            "Pages:".to_string(),
        ];
        lines.extend(
            self.pages
                .iter()
                .map(|(path, _, description)| format!("  {:<width$}  {}", path, description)),
        );
        Ok(lines.join("\n"))
    }
}
