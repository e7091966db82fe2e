//! External badge URL encoding
//!
//! Turns a [`BadgeSpec`] into a request URL for the badge service. Nothing
//! here performs I/O; the service renders the image when the URL is
//! fetched.

pub mod encode;
pub mod escape;
pub mod spec;

pub use encode::{badge_url, badge_url_with_base, SHIELDS_BASE_URL};
pub use escape::{escape_segment, normalize_color, unescape_segment};
pub use spec::{BadgeKind, BadgeSpec, BadgeStyle, BadgeStyleError, DEFAULT_LOGO_COLOR};
