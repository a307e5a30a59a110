#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod color;
pub mod decorate;
pub mod errors;

// Exports for end-users
pub use illuminate::metadata::{IlluminateOutput, PageOutput};
pub use illuminate::options::IlluminateOptions;

mod illuminate;

// Internal modules
mod logging;

use illuminate::execute_pass;
use logging::init_logging;

/// 🎨 Teinte entrypoint. Decorates every generated page in the output
/// directory, in place.
///
/// Finds every `.html` file under `options.output_dir` and paints every
/// element carrying the configured attribute (`data-pattern` by default)
/// with a stable background color derived from the attribute's value.
///
/// ## Example
/// Should be called from the main function of the binary crate, after the
/// site has been generated.
/// ```rust,no_run
/// use teinte::{illuminate, IlluminateOptions, IlluminateOutput};
///
/// fn main() -> Result<IlluminateOutput, Box<dyn std::error::Error>> {
///   illuminate(IlluminateOptions::default())
/// }
/// ```
pub fn illuminate(
    options: IlluminateOptions,
) -> Result<IlluminateOutput, Box<dyn std::error::Error>> {
    init_logging();

    execute_pass(&options)
}
