//! Layout requests and their query-string form
//!
//! A [`LayoutRequest`] is what the grid endpoint receives: an ordered list of
//! icon identifiers plus theme and grid parameters. Parsing is forgiving on
//! purpose; malformed numbers fall back to defaults and out-of-range numbers
//! are clamped by [`GridConfig`].

use serde::Deserialize;
use url::form_urlencoded;

use crate::layout::config::{DEFAULT_ICONS_PER_ROW, DEFAULT_ICON_SIZE};
use crate::layout::GridConfig;
use crate::theme::Theme;

/// Raw query parameters of `GET /api/icons`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconsQuery {
    /// Comma-separated icon identifiers
    pub i: Option<String>,
    /// Theme (`light` or anything else for dark)
    pub t: Option<String>,
    /// Icons per row
    pub perline: Option<String>,
    /// Cell edge length in pixels
    pub size: Option<String>,
}

/// A fully interpreted grid request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRequest {
    /// Icon identifiers in placement order, duplicates kept
    pub identifiers: Vec<String>,
    pub theme: Theme,
    pub grid: GridConfig,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            identifiers: vec![],
            theme: Theme::default(),
            grid: GridConfig::default(),
        }
    }
}

impl LayoutRequest {
    /// Create a request for the given identifiers with default parameters
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Interpret raw query parameters
    pub fn from_query(query: &IconsQuery) -> Self {
        let icons_per_row = query
            .perline
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(i64::from(DEFAULT_ICONS_PER_ROW));
        let icon_size = query
            .size
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(i64::from(DEFAULT_ICON_SIZE));

        Self {
            identifiers: split_identifiers(query.i.as_deref().unwrap_or_default()),
            theme: Theme::from_param(query.t.as_deref()),
            grid: GridConfig::new()
                .with_icons_per_row(icons_per_row)
                .with_icon_size(icon_size),
        }
    }

    /// Canonical query string for this request
    ///
    /// `i` is always present; `t`, `size` and `perline` only when they
    /// differ from the defaults.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("i", &self.identifiers.join(","));
        if self.theme != Theme::Dark {
            serializer.append_pair("t", self.theme.as_str());
        }
        if self.grid.icon_size() != DEFAULT_ICON_SIZE {
            serializer.append_pair("size", &self.grid.icon_size().to_string());
        }
        if self.grid.icons_per_row() != DEFAULT_ICONS_PER_ROW {
            serializer.append_pair("perline", &self.grid.icons_per_row().to_string());
        }
        serializer.finish()
    }
}

/// Split the `i` parameter into identifiers
///
/// An empty parameter yields no identifiers at all. Otherwise every
/// comma-separated entry is kept (blank ones simply fail to resolve later).
fn split_identifiers(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![];
    }
    raw.split(',').map(str::to_string).collect()
}

/// Parse the leading integer of a string, ignoring any trailing garbage
///
/// `"12px"` gives 12 and `"  -3"` gives -3; a string without leading digits
/// gives `None`. Values too large for `i64` saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}
