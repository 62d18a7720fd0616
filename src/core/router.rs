//! Static route table mapping URL paths to named views.
//!
//! A route is bound either to a view built up front or to a factory that
//! produces the view on first navigation. Loaded views are kept for the rest
//! of the process; the table itself never changes after construction.

use crate::core::views::View;
use crate::utils::error::{ConsumerError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

pub type ViewFuture = Pin<Box<dyn Future<Output = Result<Arc<dyn View>>> + Send>>;
pub type ViewFactory = Arc<dyn Fn() -> ViewFuture + Send + Sync>;

/// A view produced on demand by a factory and memoized after the first
/// successful load.
pub struct LazyView {
    factory: ViewFactory,
    cell: OnceCell<Arc<dyn View>>,
    loads: AtomicUsize,
}

impl LazyView {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || Box::pin(factory()) as ViewFuture),
            cell: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the view, running the factory if it has not loaded yet.
    ///
    /// Concurrent callers wait on the same in-flight load. A failed load
    /// leaves the cell empty so the next call tries again.
    pub async fn get(&self) -> Result<Arc<dyn View>> {
        let view = self
            .cell
            .get_or_try_init(|| {
                self.loads.fetch_add(1, Ordering::SeqCst);
                (self.factory)()
            })
            .await?;
        Ok(Arc::clone(view))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// How many times the factory has been started.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.is_loaded())
            .field("loads", &self.load_count())
            .finish()
    }
}

pub enum ViewBinding {
    Eager(Arc<dyn View>),
    Lazy(LazyView),
}

impl ViewBinding {
    pub fn lazy<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn View>>> + Send + 'static,
    {
        Self::Lazy(LazyView::new(factory))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    pub async fn resolve(&self) -> Result<Arc<dyn View>> {
        match self {
            Self::Eager(view) => Ok(Arc::clone(view)),
            Self::Lazy(lazy) => lazy.get().await,
        }
    }
}

pub struct Route {
    pub path: String,
    pub name: String,
    pub view: ViewBinding,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewBinding) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("lazy", &self.view.is_lazy())
            .finish()
    }
}

#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds the table, rejecting blank or duplicate paths and names.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &routes {
            validate_non_empty_string("route.name", &route.name)?;
            if !route.path.starts_with('/') {
                return Err(ConsumerError::InvalidConfigValueError {
                    field: "route.path".to_string(),
                    value: route.path.clone(),
                    reason: "Route paths must start with '/'".to_string(),
                });
            }
            if !paths.insert(normalize_path(&route.path)) {
                return Err(ConsumerError::InvalidConfigValueError {
                    field: "route.path".to_string(),
                    value: route.path.clone(),
                    reason: "Duplicate route path".to_string(),
                });
            }
            if !names.insert(route.name.as_str()) {
                return Err(ConsumerError::InvalidConfigValueError {
                    field: "route.name".to_string(),
                    value: route.name.clone(),
                    reason: "Duplicate route name".to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Matches the path component of `target`; the query string and one
    /// trailing slash are ignored, letter case is not significant.
    pub fn resolve(&self, target: &str) -> Option<&Route> {
        let (path, _) = split_target(target);
        let wanted = normalize_path(path);
        self.routes
            .iter()
            .find(|route| normalize_path(&route.path) == wanted)
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Splits `"/movies/popular?amount=5#top"` into its path and query parts.
/// The `#` fragment is dropped.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    let target = target.split_once('#').map_or(target, |(before, _)| before);
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_lowercase()
    }
}
