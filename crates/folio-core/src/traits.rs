//! Core traits for Folio.
//!
//! [`ConfigProvider`] abstracts the runtime configuration a section needs:
//! where the API lives, where site content comes from, and which image
//! stands in for a broken one.

use std::path::PathBuf;

/// Placeholder image used when no other is configured.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/assets/images/logo.png";

/// Trait for runtime configuration.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration is shared with spawned load tasks
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
///
/// #[derive(Clone)]
/// struct StaticConfig;
///
/// impl ConfigProvider for StaticConfig {
///     fn api_base_url(&self) -> &str {
///         "https://api.example.com"
///     }
///
///     fn content_path(&self) -> Option<PathBuf> {
///         None
///     }
/// }
///
/// assert_eq!(StaticConfig.placeholder_image(), "/assets/images/logo.png");
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// Base URL of the portfolio API, without a trailing path.
    fn api_base_url(&self) -> &str;

    /// File replacing the bundled site content, if any.
    fn content_path(&self) -> Option<PathBuf>;

    /// Image shown when a record image fails to load.
    fn placeholder_image(&self) -> &str {
        DEFAULT_PLACEHOLDER_IMAGE
    }
}
