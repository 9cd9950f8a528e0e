use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::utils::Theme;
use super::{ parse_stored, ThemeStore };

/// In-process store. Clones share the same map, so a test can keep one
/// handle and inspect what the page wrote through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    key: String,
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Rc::default(),
        }
    }

    /// A store that already holds `raw` under `key`.
    pub fn with_value(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let store = Self::new(key);
        store.values.borrow_mut().insert(store.key.clone(), raw.into());
        store
    }

    /// The raw string currently persisted, if any.
    pub fn raw(&self) -> Option<String> {
        self.values.borrow().get(&self.key).cloned()
    }
}

impl ThemeStore for MemoryStore {
    fn read_theme(&self) -> Option<Theme> {
        parse_stored(&self.key, self.raw())
    }

    fn write_theme(&self, theme: Theme) {
        self.values.borrow_mut().insert(self.key.clone(), theme.as_str().to_string());
    }
}
