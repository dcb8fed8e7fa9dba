//! Ingredient collection store
//!
//! The collection only changes through [`IngredientAction`]s applied by
//! [`ingredient_reducer`].

use crate::ingredient::Ingredient;

/// The three ways the collection can change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientAction {
    /// Adopt a freshly loaded listing, discarding the current items
    ReplaceAll(Vec<Ingredient>),
    /// Append a newly created ingredient
    Append(Ingredient),
    /// Drop every ingredient with this id
    RemoveById(String),
}

/// Apply an action to the current items and return the next items
pub fn ingredient_reducer(mut current: Vec<Ingredient>, action: IngredientAction) -> Vec<Ingredient> {
    match action {
        IngredientAction::ReplaceAll(items) => items,
        IngredientAction::Append(item) => {
            current.push(item);
            current
        }
        IngredientAction::RemoveById(id) => {
            current.retain(|item| item.id != id);
            current
        }
    }
}

/// Ordered ingredient collection owned by the model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientStore {
    items: Vec<Ingredient>,
}

impl IngredientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Ingredient>) -> Self {
        Self { items }
    }

    /// Run an action through the reducer
    pub fn dispatch(&mut self, action: IngredientAction) {
        let current = std::mem::take(&mut self.items);
        self.items = ingredient_reducer(current, action);
    }

    pub fn replace_all(&mut self, items: Vec<Ingredient>) {
        self.dispatch(IngredientAction::ReplaceAll(items));
    }

    pub fn append(&mut self, item: Ingredient) {
        self.dispatch(IngredientAction::Append(item));
    }

    pub fn remove_by_id(&mut self, id: impl Into<String>) {
        self.dispatch(IngredientAction::RemoveById(id.into()));
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Ingredient> {
        self.items.get(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
