use crate::domain::model::{Movie, OutputFormat};
use crate::utils::error::{ConsumerError, Result};

const MAX_TITLE_WIDTH: usize = 48;

/// Renders a movie listing in the requested format.
pub fn render_movies(movies: &[Movie], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(movie_table(movies)),
        OutputFormat::Csv => movie_csv(movies),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(movies)?),
    }
}

fn genres(movie: &Movie) -> String {
    movie
        .genre_ids
        .as_ref()
        .map(|ids| {
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default()
}

fn runtime(movie: &Movie) -> String {
    movie
        .runtime
        .map(|minutes| format!("{} min", minutes))
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_WIDTH {
        return title.to_string();
    }
    let mut short: String = title.chars().take(MAX_TITLE_WIDTH - 1).collect();
    short.push('…');
    short
}

fn movie_table(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies found.".to_string();
    }

    let rows: Vec<[String; 5]> = movies
        .iter()
        .map(|movie| {
            [
                movie.id.to_string(),
                truncate(&movie.title),
                runtime(movie),
                genres(movie),
                if movie.liked { "♥" } else { "" }.to_string(),
            ]
        })
        .collect();

    let header = ["ID", "TITLE", "RUNTIME", "GENRES", "LIKED"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(header.map(String::from).as_slice())];
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines.join("\n")
}

fn movie_csv(movies: &[Movie]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "title", "runtime", "genre_ids", "liked"])?;

    for movie in movies {
        writer.write_record([
            movie.id.to_string(),
            movie.title.clone(),
            movie.runtime.map(|r| r.to_string()).unwrap_or_default(),
            genres(movie),
            movie.liked.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| ConsumerError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ConsumerError::validation(e.to_string()))
}
