/// A Plist dictionary.
pub type Plist = plist::Dictionary;

/// Prefix for Glyphs-specific keys in a UFO lib.
pub static GLYPHS_PREFIX: &str = "com.schriftgestaltung.";

/// Prefix for keys standardized by the UFO specification.
pub static PUBLIC_PREFIX: &str = "public.";

/// Lib key holding the font's glyph order.
pub static GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Lib key holding the glyph name to PostScript name mapping.
pub static POSTSCRIPT_NAMES_KEY: &str = "public.postscriptNames";
