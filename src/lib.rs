//! Convert [Glyphs.app] font sources into [Unified Font Object][ufo] fonts.
//!
//! A Glyphs source describes several masters in one file; [`to_ufos`]
//! produces one [`Ufo`] per master. The heavy lifting — anchor propagation
//! through nested components, class kerning expansion, GDEF glyph
//! classification and outline drawing — lives in the [`builder`] module.
//!
//! [Glyphs.app]: https://glyphsapp.com
//! [ufo]: http://unifiedfontobject.org/versions/ufo3
//!
//! # Basic usage:
//!
//! ```
//! use glyphs2ufo::glyphs::{Font, Master};
//!
//! let mut font = Font::new("MyFont");
//! font.masters.push(Master::new("master-0"));
//! let ufos = glyphs2ufo::to_ufos(&font).expect("conversion failed");
//! assert_eq!(ufos.len(), 1);
//! assert_eq!(ufos[0].font_info.family_name.as_deref(), Some("MyFont"));
//! ```

mod affine;
pub mod builder;
mod diagnostics;
pub mod error;
pub mod glyphdata;
pub mod glyphs;
mod name;
pub mod pen;
mod shared_types;
pub mod ufo;

pub use affine::AffineTransform;
pub use builder::{
    build_style_name, draw_paths, propagate_anchors, set_custom_params, set_default_params,
    set_redundant_data, to_ufos, to_ufos_with,
};
pub use diagnostics::Diagnostics;
pub use error::BuildError;
pub use name::Name;
pub use shared_types::{Plist, GLYPHS_PREFIX, GLYPH_ORDER_KEY, POSTSCRIPT_NAMES_KEY, PUBLIC_PREFIX};
pub use ufo::Ufo;
