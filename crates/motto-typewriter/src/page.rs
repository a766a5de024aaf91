//! Text elements the animator writes into, and the page that owns them.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Something whose visible text can be replaced wholesale.
pub trait TextSink: Send + Sync {
    fn set_text(&self, text: &str);
}

/// A named, shared text region owned by a [`Page`].
///
/// Cloning yields another handle to the same text.
#[derive(Debug, Clone, Default)]
pub struct TextElement {
    /// Text written by the animator.
    text: Arc<RwLock<String>>,
    /// Last text successfully published, for when the lock is contended.
    cached: Arc<RwLock<String>>,
}

impl TextElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current text.
    /// Uses try_read with fallback to the cached text to avoid blocking a render.
    pub fn text(&self) -> String {
        if let Ok(t) = self.text.try_read() {
            return t.clone();
        }
        if let Ok(c) = self.cached.read() {
            return c.clone();
        }
        String::new()
    }
}

impl TextSink for TextElement {
    fn set_text(&self, text: &str) {
        if let Ok(mut t) = self.text.write() {
            t.clear();
            t.push_str(text);
        }
        if let Ok(mut c) = self.cached.write() {
            c.clear();
            c.push_str(text);
        }
    }
}

/// Registry of text elements, looked up by identifier.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, TextElement>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Page::insert`].
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.insert(id);
        self
    }

    /// Register an element under `id`, returning a handle to it.
    /// An element already registered under `id` is kept.
    pub fn insert(&mut self, id: impl Into<String>) -> TextElement {
        self.elements.entry(id.into()).or_default().clone()
    }

    /// Look up an element by identifier.
    pub fn element(&self, id: &str) -> Option<TextElement> {
        self.elements.get(id).cloned()
    }
}
