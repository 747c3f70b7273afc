//! Caching front end for the markup compiler.

use std::rc::Rc;

use crate::compiled::CompiledText;
use crate::config::CompilerConfig;
use crate::error::ConfigError;
use crate::parser::compile_with;
use crate::registry::Registry;

/// Compiles tagged text, remembering the last input and its output.
///
/// Compiling the same string twice in a row returns the same shared output
/// without scanning again. Any other input replaces the cached pair.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use typefx_markup::MarkupCompiler;
///
/// let mut compiler = MarkupCompiler::new();
/// let first = compiler.compile("<shake>Boo!</shake>");
/// let second = compiler.compile("<shake>Boo!</shake>");
/// assert!(Rc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct MarkupCompiler {
    registry: Registry,
    config: CompilerConfig,
    cache: Option<(String, Rc<CompiledText>)>,
}

impl Default for MarkupCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupCompiler {
    /// Compiler with the built-in tags and default timing.
    pub fn new() -> Self {
        Self::with_registry(Registry::default())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            config: CompilerConfig::default(),
            cache: None,
        }
    }

    /// Compiler with a validated configuration.
    pub fn with_config(registry: Registry, config: CompilerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry,
            config,
            cache: None,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile `input`, reusing the previous output when the input is unchanged.
    pub fn compile(&mut self, input: &str) -> Rc<CompiledText> {
        if let Some((last, compiled)) = &self.cache {
            if last == input {
                log::debug!("compile cache hit ({} bytes)", input.len());
                return Rc::clone(compiled);
            }
        }

        log::debug!("compile cache miss ({} bytes)", input.len());
        let compiled = Rc::new(compile_with(input, &self.registry, &self.config));
        self.cache = Some((input.to_string(), Rc::clone(&compiled)));
        compiled
    }

    /// Compile UTF-16 storage. Unpaired surrogates become U+FFFD.
    pub fn compile_utf16(&mut self, units: &[u16]) -> Rc<CompiledText> {
        self.compile(&String::from_utf16_lossy(units))
    }

    /// Output of the most recent compile, if any.
    pub fn last(&self) -> Option<Rc<CompiledText>> {
        self.cache.as_ref().map(|(_, compiled)| Rc::clone(compiled))
    }

    /// Forget the cached output.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;

    #[test]
    fn cache_hit_returns_same_output() {
        let mut compiler = MarkupCompiler::new();
        let a = compiler.compile("<wave>hi</wave>");
        let b = compiler.compile("<wave>hi</wave>");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn new_input_replaces_cache() {
        let mut compiler = MarkupCompiler::new();
        let a = compiler.compile("one");
        let b = compiler.compile("two");
        assert_eq!(b.text(), "two");
        let c = compiler.compile("one");
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(*a, *c);
    }

    #[test]
    fn invalidate_forces_recompile() {
        let mut compiler = MarkupCompiler::new();
        let a = compiler.compile("x");
        compiler.invalidate();
        assert!(compiler.last().is_none());
        let b = compiler.compile("x");
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CompilerConfig::new().with_timing(TimingConfig {
            ordinary: -1.0,
            ..TimingConfig::default()
        });
        assert!(MarkupCompiler::with_config(Registry::default(), config).is_err());
    }

    #[test]
    fn utf16_input_is_decoded() {
        let units: Vec<u16> = "<shake>😀</shake>a".encode_utf16().collect();
        let mut compiler = MarkupCompiler::new();
        let compiled = compiler.compile_utf16(&units);
        assert_eq!(compiled.text(), "😀a");
        assert_eq!(compiled.glyph_count(), 2);
        assert_eq!(compiled.tags()[0].as_closable().map(|t| t.length()), Some(1));
    }
}
