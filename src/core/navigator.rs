use crate::core::router::{split_target, RouteTable};
use crate::core::views::{Query, ViewContext};
use crate::utils::error::{ConsumerError, Result};

/// Moves between the routes of a table and renders the view of the route it
/// lands on. Starts on `home`.
pub struct Navigator {
    table: RouteTable,
    ctx: ViewContext,
    history: Vec<String>,
}

impl Navigator {
    pub const INITIAL_ROUTE: &'static str = "home";

    pub fn new(table: RouteTable, ctx: ViewContext) -> Result<Self> {
        if table.by_name(Self::INITIAL_ROUTE).is_none() {
            return Err(ConsumerError::MissingConfigError {
                field: format!("route '{}'", Self::INITIAL_ROUTE),
            });
        }
        Ok(Self {
            table,
            ctx,
            history: vec![Self::INITIAL_ROUTE.to_string()],
        })
    }

    /// Name of the route currently shown.
    pub fn current(&self) -> &str {
        self.history
            .last()
            .map(String::as_str)
            .unwrap_or(Self::INITIAL_ROUTE)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves `target` (path plus optional query string), loads the view
    /// if needed and renders it. The current route only changes once the
    /// view has been obtained.
    pub async fn navigate(&mut self, target: &str) -> Result<String> {
        let route = self
            .table
            .resolve(target)
            .ok_or_else(|| ConsumerError::RouteNotFound {
                path: target.to_string(),
            })?;

        tracing::info!("Navigating to '{}' ({})", route.path, route.name);
        let view = route.view.resolve().await?;
        let name = route.name.clone();

        if self.current() != name {
            self.history.push(name);
        }

        let (_, raw_query) = split_target(target);
        view.render(&self.ctx, &Query::parse(raw_query)).await
    }

    /// Goes back to the previous route and renders it without a query.
    /// Stays on the initial route when there is nothing to go back to.
    pub async fn back(&mut self) -> Result<String> {
        if self.history.len() > 1 {
            self.history.pop();
        }
        let name = self.current().to_string();
        let route = self
            .table
            .by_name(&name)
            .ok_or_else(|| ConsumerError::RouteNotFound { path: name.clone() })?;
        let view = route.view.resolve().await?;
        view.render(&self.ctx, &Query::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::WebservicesClient;
    use crate::core::router::{Route, ViewBinding};
    use crate::core::views::View;
    use crate::domain::model::OutputFormat;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct EchoView(&'static str);

    #[async_trait]
    impl View for EchoView {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn render(&self, _ctx: &ViewContext, query: &Query) -> Result<String> {
            Ok(format!("{}:{}", self.0, query.get("q").unwrap_or("")))
        }
    }

    fn navigator() -> Navigator {
        let table = RouteTable::new(vec![
            Route::new("/", "home", ViewBinding::Eager(Arc::new(EchoView("home")))),
            Route::new(
                "/about",
                "about",
                ViewBinding::lazy(|| async { Ok(Arc::new(EchoView("about")) as Arc<dyn View>) }),
            ),
        ])
        .unwrap();
        let client =
            WebservicesClient::new("http://localhost:5000/api", Duration::from_secs(1)).unwrap();
        Navigator::new(table, ViewContext::new(client, OutputFormat::Text)).unwrap()
    }

    #[tokio::test]
    async fn test_starts_on_home() {
        let nav = navigator();
        assert_eq!(nav.current(), "home");
        assert_eq!(nav.history(), ["home".to_string()]);
    }

    #[tokio::test]
    async fn test_navigate_passes_query_and_records_history() {
        let mut nav = navigator();

        assert_eq!(nav.navigate("/about?q=hi").await.unwrap(), "about:hi");
        assert_eq!(nav.current(), "about");
        assert!(nav.routes().by_name("about").unwrap().view.is_lazy());

        // 重複導覽同一頁不會再記錄歷史
        nav.navigate("/about").await.unwrap();
        assert_eq!(nav.history().len(), 2);

        assert_eq!(nav.back().await.unwrap(), "home:");
        assert_eq!(nav.current(), "home");
        assert_eq!(nav.back().await.unwrap(), "home:");
    }

    #[tokio::test]
    async fn test_unknown_path_keeps_state() {
        let mut nav = navigator();
        nav.navigate("/about").await.unwrap();

        let err = nav.navigate("/movies/unknown").await.unwrap_err();
        assert!(matches!(err, ConsumerError::RouteNotFound { .. }));
        assert_eq!(nav.current(), "about");
    }

    #[test]
    fn test_table_without_home_is_rejected() {
        let table = RouteTable::new(vec![Route::new(
            "/about",
            "about",
            ViewBinding::Eager(Arc::new(EchoView("about"))),
        )])
        .unwrap();
        let client =
            WebservicesClient::new("http://localhost:5000/api", Duration::from_secs(1)).unwrap();
        assert!(Navigator::new(table, ViewContext::new(client, OutputFormat::Text)).is_err());
    }
}
