use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// The format of movie data received from the Webservices API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// The TMDB id of the movie.
    pub id: u64,
    /// Runtime in minutes, only present on detailed movie records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
    pub liked: bool,
}

// 電影以 id 為唯一識別，其餘欄位只是顯示資料
impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Envelope of every successful JSON response of the Webservices API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    pub result: T,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub id: u64,
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastQuery {
    pub required: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresQuery {
    pub required: Vec<u32>,
    pub excluded: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeQuery {
    pub runtime: i64,
    pub variance: i64,
    pub lower_bound: i64,
    pub upper_bound: i64,
}

/// Movies similar to a reference movie, plus the values the service
/// derived from the reference movie to find them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarMovies {
    pub result: Vec<Movie>,
    pub reference_movie: Movie,
    #[serde(default)]
    pub query_cast: Option<CastQuery>,
    #[serde(default)]
    pub query_genres: Option<GenresQuery>,
    #[serde(default)]
    pub query_runtime: Option<RuntimeQuery>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarityCriteria {
    pub matching_genres: bool,
    pub similar_runtime: bool,
    pub overlapping_actors: bool,
}

impl SimilarityCriteria {
    /// Query parameter names of the enabled criteria.
    pub fn query_params(&self) -> Vec<&'static str> {
        let mut params = Vec::new();
        if self.matching_genres {
            params.push("matching_genres");
        }
        if self.similar_runtime {
            params.push("similar_runtime");
        }
        if self.overlapping_actors {
            params.push("overlapping_actors");
        }
        params
    }
}

/// A rendered bar plot of average movie scores.
#[derive(Debug, Clone)]
pub struct ScorePlot {
    pub image: Vec<u8>,
    pub content_type: String,
    /// Requested ids the service could not resolve.
    pub excluded_ids: Vec<u64>,
}

/// How movie listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}
