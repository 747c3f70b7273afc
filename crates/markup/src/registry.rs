//! Tag registry: bare tag name to factory.
//!
//! The built-in names live in a static [`phf`] table. A [`Registry`] layers
//! optional custom names on top of it and is frozen once built.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::error::RegistryError;
use crate::tag::{Tag, is_usable_speed};

/// Builds a fresh tag with default arguments.
pub type TagFactory = fn() -> Tag;

fn slow() -> Tag {
    Tag::typing_speed(0.25)
}

fn fast() -> Tag {
    Tag::typing_speed(4.0)
}

/// Built-in tag names.
pub static BUILTIN_TAGS: phf::Map<&'static str, TagFactory> = phf_map! {
    "rainbow" => Tag::rainbow as TagFactory,
    "shake" => Tag::shake as TagFactory,
    "pause" => Tag::pause as TagFactory,
    "slow" => slow as TagFactory,
    "fast" => fast as TagFactory,
    "wave" => Tag::wave as TagFactory,
};

static BUILTIN_REGISTRY: Lazy<Registry> = Lazy::new(|| Registry {
    builtins: true,
    custom: HashMap::new(),
});

/// Immutable name → factory lookup used by the compiler.
///
/// Names are case-sensitive and never include the closing `/`.
#[derive(Clone, Debug)]
pub struct Registry {
    builtins: bool,
    custom: HashMap<String, TagFactory>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin().clone()
    }
}

impl Registry {
    /// The shared registry holding exactly the built-in tags.
    pub fn builtin() -> &'static Registry {
        &BUILTIN_REGISTRY
    }

    /// Start a registry that includes the built-in tags.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            builtins: true,
            custom: HashMap::new(),
        }
    }

    /// Start a registry with no tags at all.
    pub fn empty() -> RegistryBuilder {
        RegistryBuilder {
            builtins: false,
            custom: HashMap::new(),
        }
    }

    /// Find the factory bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<TagFactory> {
        if let Some(factory) = self.custom.get(name) {
            return Some(*factory);
        }
        if self.builtins {
            BUILTIN_TAGS.get(name).copied()
        } else {
            None
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Instantiate the tag bound to `name`.
    pub fn create(&self, name: &str) -> Option<Tag> {
        self.lookup(name).map(|factory| factory())
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        if self.builtins {
            names.extend(BUILTIN_TAGS.keys().copied());
        }
        names.sort_unstable();
        names
    }
}

/// Accumulates custom tag names before freezing them into a [`Registry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    builtins: bool,
    custom: HashMap<String, TagFactory>,
}

impl RegistryBuilder {
    /// Bind `name` to `factory`.
    ///
    /// The factory is called once to check that its default typing speed can
    /// be inverted into a finite duration.
    pub fn register(
        mut self,
        name: impl Into<String>,
        factory: TagFactory,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if !is_tag_name(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        let taken = self.custom.contains_key(&name)
            || (self.builtins && BUILTIN_TAGS.contains_key(name.as_str()));
        if taken {
            return Err(RegistryError::Duplicate(name));
        }
        let speed = factory()
            .as_closable()
            .map_or(1.0, |tag| tag.typing_speed_multiplier());
        if !is_usable_speed(speed) {
            return Err(RegistryError::InvalidSpeed { name, speed });
        }
        log::debug!("registering tag {name}");
        self.custom.insert(name, factory);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            builtins: self.builtins,
            custom: self.custom,
        }
    }
}

/// One or more alphanumeric or underscore characters.
pub(crate) fn is_tag_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_word_char)
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagKind;

    fn crawl() -> Tag {
        Tag::typing_speed(0.1)
    }

    #[test]
    fn builtin_names() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.names(),
            vec!["fast", "pause", "rainbow", "shake", "slow", "wave"]
        );
        assert_eq!(registry.create("wave").map(|t| t.kind()), Some(TagKind::Wave));
        assert!(registry.lookup("Wave").is_none());
        assert!(registry.lookup("/wave").is_none());
    }

    #[test]
    fn slow_and_fast_defaults() {
        let registry = Registry::builtin();
        let slow = registry.create("slow").unwrap();
        let fast = registry.create("fast").unwrap();
        assert_eq!(slow.as_closable().unwrap().typing_speed_multiplier(), 0.25);
        assert_eq!(fast.as_closable().unwrap().typing_speed_multiplier(), 4.0);
    }

    #[test]
    fn custom_registration() {
        let registry = Registry::builder().register("crawl", crawl).unwrap().build();
        assert!(registry.contains("crawl"));
        assert!(registry.contains("rainbow"));

        let only = Registry::empty().register("crawl", crawl).unwrap().build();
        assert_eq!(only.names(), vec!["crawl"]);
        assert!(!only.contains("rainbow"));
    }

    #[test]
    fn registration_errors() {
        assert_eq!(
            Registry::builder().register("shake", crawl).unwrap_err(),
            RegistryError::Duplicate("shake".into())
        );
        assert_eq!(
            Registry::builder().register("not valid", crawl).unwrap_err(),
            RegistryError::InvalidName("not valid".into())
        );
        assert!(Registry::empty().register("", crawl).is_err());
        assert!(
            Registry::empty()
                .register("x", crawl)
                .and_then(|b| b.register("x", crawl))
                .is_err()
        );
        // builtins are not reserved in an empty registry
        assert!(Registry::empty().register("shake", crawl).is_ok());
        assert_eq!(
            Registry::builder()
                .register("stall", || Tag::typing_speed(0.0))
                .unwrap_err(),
            RegistryError::InvalidSpeed {
                name: "stall".into(),
                speed: 0.0
            }
        );
        assert!(
            Registry::builder()
                .register("freeze", || Tag::typing_speed(1e-39))
                .is_err()
        );
    }
}
