//! Badge URL construction

use url::form_urlencoded;

use super::escape::{encode_path_segment, escape_segment, normalize_color};
use super::spec::{BadgeKind, BadgeSpec};

/// Origin of the public badge service
pub const SHIELDS_BASE_URL: &str = "https://img.shields.io";

/// Route of static label/message badges
const STATIC_ROUTE: &str = "badge";
/// Route of repository statistics badges
const REPOSITORY_ROUTE: &str = "github";

/// Build the badge image URL on the public badge service
pub fn badge_url(spec: &BadgeSpec) -> String {
    badge_url_with_base(spec, SHIELDS_BASE_URL)
}

/// Build the badge image URL against a custom service origin
///
/// Never fails: odd input yields a well-formed URL the service may render
/// as an error badge.
pub fn badge_url_with_base(spec: &BadgeSpec, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("style", spec.style.as_str());

    if let Some(logo) = spec.logo.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        query.append_pair("logo", logo);
    }

    // Always sent when set, white included: without it the service draws
    // the logo in its brand color.
    if let Some(logo_color) = spec
        .logo_color
        .as_deref()
        .map(normalize_color)
        .filter(|c| !c.is_empty())
    {
        query.append_pair("logoColor", logo_color);
    }

    let path = match &spec.kind {
        BadgeKind::Custom {
            label,
            message,
            color,
        } => static_path(label, message, color),
        BadgeKind::RepositoryMetric {
            metric,
            owner,
            repository,
            color,
        } => {
            if let Some(color) = color.as_deref().map(normalize_color).filter(|c| !c.is_empty()) {
                query.append_pair("color", color);
            }
            format!(
                "{}/{}/{}/{}",
                REPOSITORY_ROUTE,
                encode_path_segment(metric),
                encode_path_segment(owner),
                encode_path_segment(repository)
            )
        }
    };

    format!("{}/{}?{}", base, path, query.finish())
}

/// `badge/label-message-color`, dropping empty label and color parts
fn static_path(label: &str, message: &str, color: &str) -> String {
    let label = escape_segment(label);
    let message = escape_segment(message);
    let color = normalize_color(color);

    let mut path = format!("{}/", STATIC_ROUTE);
    if !label.is_empty() {
        path.push_str(&label);
        path.push('-');
    }
    path.push_str(&message);
    if !color.is_empty() {
        path.push('-');
        path.push_str(&escape_segment(color));
    }
    path
}
