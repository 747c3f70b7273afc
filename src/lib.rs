//! Rich inline-tagged typewriter text.
//!
//! `typefx` compiles strings like `<rainbow>Hello</rainbow><pause time="0.5"/>World`
//! into clean text, resolved tag spans and a typing timeline, then turns a
//! host's laid-out glyph quads into animated frames.
//!
//! - [`markup`]: tag registry, compiler and timeline
//! - [`effects`]: tag effects, reveal animations and frame application
//!
//! # Usage
//!
//! ```
//! use typefx::{FrameClock, Glyph, MarkupCompiler, Rgba, Vec2, render_frame};
//!
//! let mut compiler = MarkupCompiler::new();
//! let compiled = compiler.compile("<wave>Hi</wave> <pause/>there");
//! assert_eq!(compiled.text(), "Hi there");
//!
//! let base: Vec<Glyph> = compiled
//!     .glyphs()
//!     .enumerate()
//!     .map(|(i, _)| Glyph::quad(Vec2::new(i as f32 * 10.0, 0.0), 8.0, 12.0, Rgba::WHITE))
//!     .collect();
//! let frame = render_frame(&compiled, &base, FrameClock::new(0.5, 0.5));
//! assert_eq!(frame.len(), 8);
//! ```

pub mod error;
mod log_init;

pub use typefx_effects as effects;
pub use typefx_markup as markup;

pub use error::LoggerError;
pub use log_init::init_logger;

pub use typefx_effects::{FrameClock, Glyph, Playback, Rgba, Vec2, render_frame};
pub use typefx_markup::{
    CompiledText, CompilerConfig, HostMarkup, MarkupCompiler, Registry, Tag, TagKind,
    TimingConfig, compile, compile_with,
};
