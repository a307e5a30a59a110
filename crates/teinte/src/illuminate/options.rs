use std::path::PathBuf;

/// Options for the decoration pass. Should be passed to
/// [`illuminate()`](crate::illuminate()).
///
/// ## Examples
/// Default values:
/// ```rust,no_run
/// use teinte::{illuminate, IlluminateOptions, IlluminateOutput};
///
/// fn main() -> Result<IlluminateOutput, Box<dyn std::error::Error>> {
///   illuminate(IlluminateOptions::default())
/// }
/// ```
/// Custom values:
/// ```rust,no_run
/// use teinte::{illuminate, IlluminateOptions, IlluminateOutput};
///
/// fn main() -> Result<IlluminateOutput, Box<dyn std::error::Error>> {
///   illuminate(IlluminateOptions {
///     output_dir: "public".into(),
///     pattern_attribute: "data-tag".into(),
///   })
/// }
/// ```
pub struct IlluminateOptions {
    /// Directory holding the generated site. Every `.html` file under it,
    /// at any depth, is a candidate for decoration.
    pub output_dir: PathBuf,

    /// Attribute whose value names the element's label.
    ///
    /// Defaults to `data-pattern`, the attribute the original client-side
    /// decoration script looked for.
    pub pattern_attribute: String,
}

/// Provides default values for [`crate::illuminate()`]. Designed to work for
/// most projects.
impl Default for IlluminateOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".into(),
            pattern_attribute: "data-pattern".into(),
        }
    }
}
