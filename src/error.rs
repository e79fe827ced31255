//! Error types.

use thiserror::Error;

/// Errors that occur while converting a Glyphs source into UFOs.
///
/// These are structural violations the loader is expected to prevent;
/// recovering silently would corrupt the output, so the affected master's
/// conversion is aborted instead.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A component references a glyph that does not exist in the font.
    #[error("component in glyph '{glyph}' references missing glyph '{base}'")]
    MissingComponent {
        /// The name of the referencing glyph.
        glyph: String,
        /// The name of the missing base glyph.
        base: String,
    },
    /// The component graph contains a cycle.
    #[error("component cycle detected at glyph '{glyph}'")]
    ComponentCycle {
        /// The name of the glyph at which the cycle was detected.
        glyph: String,
    },
}

/// An error returned when a name is empty or contains control characters.
#[derive(Debug, Clone, Error)]
#[error("invalid name '{0}'")]
pub struct NamingError(pub(crate) String);

/// An error returned when parsing an unknown node type string.
#[derive(Debug, Clone, Error)]
#[error("unknown node type '{0}'")]
pub struct UnknownNodeType(pub(crate) String);
