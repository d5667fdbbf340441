//! Catalog listing and search helpers.
//!
//! Sort keys are mapped onto a closed set of column expressions so that the
//! caller-selected key can be interpolated into `ORDER BY` without binding.

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Sort key for the movie listing. Listings are always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieSort {
    Title,
    ReleaseDate,
    #[default]
    Rating,
}

impl MovieSort {
    /// Parse the `sort` query parameter.
    ///
    /// Anything other than `title` or `release_date` (including a missing
    /// parameter) falls back to rating.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("title") => MovieSort::Title,
            Some("release_date") => MovieSort::ReleaseDate,
            _ => MovieSort::Rating,
        }
    }

    /// Column expression on the `movies m` alias.
    pub fn column(self) -> &'static str {
        match self {
            MovieSort::Title => "m.name",
            MovieSort::ReleaseDate => "m.release_date",
            MovieSort::Rating => "m.rating",
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Escape `LIKE` metacharacters so the query matches as a literal substring.
///
/// PostgreSQL's default `LIKE` escape character is backslash.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%query%` pattern for a case-insensitive substring match (`ILIKE`).
pub fn substring_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}
