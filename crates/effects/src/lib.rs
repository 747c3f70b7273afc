//! Per-frame glyph effects for compiled typefx markup.
//!
//! The host lays out the clean text of a [`CompiledText`] into one [`Glyph`]
//! quad per character, then calls [`render_frame`] every frame with a
//! [`FrameClock`]. The result is a fresh glyph vector with tag effects
//! (rainbow colors, shake and wave offsets) and the typewriter reveal applied.
//!
//! Nothing here lays out or rasterizes text, and no clock state is kept:
//! [`Playback`] is a small helper hosts may use to track typing time.
//!
//! # Usage
//!
//! ```
//! use typefx_effects::{Glyph, Playback, Rgba, Vec2, render_frame};
//! use typefx_markup::compile;
//!
//! let compiled = compile("<shake>Boo!</shake>");
//! let base: Vec<Glyph> = (0..compiled.glyph_count())
//!     .map(|i| Glyph::quad(Vec2::new(i as f32 * 10.0, 0.0), 8.0, 12.0, Rgba::WHITE))
//!     .collect();
//!
//! let mut playback = Playback::default();
//! playback.skip_to_end(compiled.total_typing_time());
//! let frame = render_frame(&compiled, &base, playback.clock(0.0));
//! assert_eq!(frame.len(), base.len());
//! ```
//!
//! [`CompiledText`]: typefx_markup::CompiledText

pub mod color;
pub mod effect;
pub mod frame;
pub mod geometry;
pub mod reveal;

pub use color::Rgba;
pub use effect::GlyphEffect;
pub use frame::{FrameClock, Playback, render_frame};
pub use geometry::{Glyph, Vec2};
pub use reveal::Reveal;
