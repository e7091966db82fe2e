//! Badge descriptions consumed by the URL encoder

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Icon;

/// Logo color the badge builder starts with
pub const DEFAULT_LOGO_COLOR: &str = "white";

/// Visual style variants understood by the badge service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    Flat,
    FlatSquare,
    #[default]
    ForTheBadge,
    Plastic,
    Social,
}

impl BadgeStyle {
    /// All styles, in the order a picker would list them
    pub const ALL: [BadgeStyle; 5] = [
        BadgeStyle::Flat,
        BadgeStyle::FlatSquare,
        BadgeStyle::ForTheBadge,
        BadgeStyle::Plastic,
        BadgeStyle::Social,
    ];

    /// Value of the `style` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::Social => "social",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown badge style name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown badge style '{0}' (expected one of: flat, flat-square, for-the-badge, plastic, social)")]
pub struct BadgeStyleError(pub String);

impl FromStr for BadgeStyle {
    type Err = BadgeStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| BadgeStyleError(s.to_string()))
    }
}

/// What the badge shows
///
/// The variant is chosen explicitly so a spec can never carry both custom
/// text and repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum BadgeKind {
    /// Free-form two-part badge
    Custom {
        label: String,
        message: String,
        color: String,
    },
    /// Repository statistic rendered by the service (stars, forks, ...)
    #[serde(rename_all = "camelCase")]
    RepositoryMetric {
        metric: String,
        owner: String,
        repository: String,
        /// Overrides the service's default color for the metric
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

/// A complete badge description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    #[serde(flatten)]
    pub kind: BadgeKind,
    #[serde(default)]
    pub style: BadgeStyle,
    /// Icon identifier shown as the badge logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_color: Option<String>,
}

impl BadgeSpec {
    /// A custom label/message badge
    pub fn custom(
        label: impl Into<String>,
        message: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self::with_kind(BadgeKind::Custom {
            label: label.into(),
            message: message.into(),
            color: color.into(),
        })
    }

    /// A repository statistics badge, e.g. `stars` for `owner/repository`
    pub fn repository_metric(
        metric: impl Into<String>,
        owner: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self::with_kind(BadgeKind::RepositoryMetric {
            metric: metric.into(),
            owner: owner.into(),
            repository: repository.into(),
            color: None,
        })
    }

    /// A custom badge prefilled from a catalog icon
    ///
    /// Label and color come from the icon's title and brand color, the icon
    /// itself becomes the logo and the logo is drawn white.
    pub fn from_icon(icon: &Icon, message: impl Into<String>) -> Self {
        Self::custom(icon.title.clone(), message, icon.hex.clone())
            .with_logo(icon.slug.clone())
            .with_logo_color(DEFAULT_LOGO_COLOR)
    }

    fn with_kind(kind: BadgeKind) -> Self {
        Self {
            kind,
            style: BadgeStyle::default(),
            logo: None,
            logo_color: None,
        }
    }

    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_logo_color(mut self, color: impl Into<String>) -> Self {
        self.logo_color = Some(color.into());
        self
    }

    /// Set the badge color
    ///
    /// For custom badges this replaces the path color; for repository
    /// badges it sets the override color.
    pub fn with_color(mut self, new_color: impl Into<String>) -> Self {
        match &mut self.kind {
            BadgeKind::Custom { color, .. } => *color = new_color.into(),
            BadgeKind::RepositoryMetric { color, .. } => *color = Some(new_color.into()),
        }
        self
    }

    /// Alt text for the badge image in generated markup
    pub fn alt_text(&self) -> String {
        match &self.kind {
            BadgeKind::Custom { label, message, .. } => {
                if label.is_empty() {
                    message.clone()
                } else {
                    format!("{} {}", label, message)
                }
            }
            BadgeKind::RepositoryMetric {
                metric,
                owner,
                repository,
                ..
            } => format!("{} {}/{}", metric, owner, repository),
        }
    }
}
