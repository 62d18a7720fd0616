pub mod about;
pub mod home;
pub mod movies;
pub mod plot;
pub mod popular;
pub mod render;
pub mod similar;

use crate::core::client::WebservicesClient;
use crate::core::router::{Route, RouteTable, ViewBinding};
use crate::core::Storage;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub use about::AboutView;
pub use home::HomeView;
pub use movies::MoviesView;
pub use plot::PlotView;
pub use popular::PopularMoviesView;
pub use similar::SimilarMoviesView;

pub const DEFAULT_AMOUNT: u64 = 10;

/// A page of the application.
#[async_trait]
pub trait View: Send + Sync {
    fn name(&self) -> &'static str;

    async fn render(&self, ctx: &ViewContext, query: &Query) -> Result<String>;
}

/// What every view gets handed when it renders.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub client: WebservicesClient,
    pub format: OutputFormat,
}

impl ViewContext {
    pub fn new(client: WebservicesClient, format: OutputFormat) -> Self {
        Self { client, format }
    }
}

/// Decoded query string of a navigation target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|raw| {
                url::form_urlencoded::parse(raw.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A flag is set when present with any value other than `false` or `0`.
    pub fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(value) => !matches!(value.trim(), "false" | "0"),
            None => false,
        }
    }
}

/// Path, name and short description of every page.
pub const PAGES: [(&str, &str, &str); 6] = [
    ("/", "home", "This page"),
    ("/about", "about", "What this application does"),
    ("/movies", "movies", "Liked movies; like=<id> or unlike=<id> to change"),
    ("/movies/popular", "popular", "Popular movies; amount=<n>"),
    (
        "/movies/similar",
        "similar",
        "Movies similar to movie_id=<id>; amount, matching_genres, similar_runtime, overlapping_actors",
    ),
    ("/movies/plot", "plot", "Average score bar plot of movie_ids=<id,id,...>"),
];

fn lazy<V, F>(route: &'static str, build: F) -> ViewBinding
where
    V: View + 'static,
    F: Fn() -> V + Send + Sync + 'static,
{
    let build = Arc::new(build);
    ViewBinding::lazy(move || {
        let build = Arc::clone(&build);
        async move {
            tracing::debug!("Loading view for route '{}'", route);
            Ok(Arc::new(build()) as Arc<dyn View>)
        }
    })
}

/// The application's route table. Only the home page is built up front.
pub fn default_routes<S: Storage + 'static>(storage: Arc<S>) -> Result<RouteTable> {
    let [home, about, movies, popular, similar, plot] = PAGES;

    RouteTable::new(vec![
        Route::new(
            home.0,
            home.1,
            ViewBinding::Eager(Arc::new(HomeView::new(&PAGES))),
        ),
        Route::new(about.0, about.1, lazy("about", AboutView::new)),
        Route::new(movies.0, movies.1, lazy("movies", MoviesView::new)),
        Route::new(popular.0, popular.1, lazy("popular", PopularMoviesView::new)),
        Route::new(similar.0, similar.1, lazy("similar", SimilarMoviesView::new)),
        Route::new(
            plot.0,
            plot.1,
            lazy("plot", move || PlotView::new(Arc::clone(&storage))),
        ),
    ])
}
