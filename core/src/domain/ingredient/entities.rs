/// Ordered, exact-match deduplicated list of ingredients plus the text the
/// user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
    pending: String,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed text unless it is blank or already present.
    /// Returns whether the set changed; the pending buffer is cleared only then.
    pub fn add(&mut self, text: &str) -> bool {
        let ingredient = text.trim();
        if ingredient.is_empty() || self.contains(ingredient) {
            return false;
        }

        self.items.push(ingredient.to_string());
        self.pending.clear();
        true
    }

    pub fn add_pending(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        let added = self.add(&pending);
        if !added {
            self.pending = pending;
        }
        added
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn remove(&mut self, ingredient: &str) -> bool {
        match self.items.iter().position(|item| item == ingredient) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|item| item == ingredient)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}
