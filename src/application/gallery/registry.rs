//! Ordered registry of gallery entries.

use std::fmt;
use std::rc::Rc;

use crate::domain::MockState;

/// Produces the initial state of a slot.
pub type StateFactory<C> = Rc<dyn Fn() -> MockState<C>>;

/// Produces a unit bound to a state.
pub type RenderFactory<C, U> = Rc<dyn Fn(&MockState<C>) -> U>;

/// Stable handle to a registered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    /// Position in display order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labelled component with the factories that build it.
pub struct ComponentEntry<C, U> {
    id: EntryId,
    label: String,
    state_factory: StateFactory<C>,
    render_factory: RenderFactory<C, U>,
}

impl<C, U> ComponentEntry<C, U> {
    /// Entry id.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Section label shown above the component.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Initial state factory.
    #[must_use]
    pub fn state_factory(&self) -> &StateFactory<C> {
        &self.state_factory
    }

    /// Unit factory.
    #[must_use]
    pub fn render_factory(&self) -> &RenderFactory<C, U> {
        &self.render_factory
    }
}

impl<C, U> fmt::Debug for ComponentEntry<C, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Entries in display order. Append-only.
pub struct GalleryRegistry<C, U> {
    entries: Vec<ComponentEntry<C, U>>,
}

impl<C: Clone + 'static, U> GalleryRegistry<C, U> {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Labels may repeat.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        state_factory: impl Fn() -> MockState<C> + 'static,
        render_factory: impl Fn(&MockState<C>) -> U + 'static,
    ) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(ComponentEntry {
            id,
            label: label.into(),
            state_factory: Rc::new(state_factory),
            render_factory: Rc::new(render_factory),
        });
        id
    }

    /// Appends an entry whose state always starts as `config`.
    pub fn register_mock(
        &mut self,
        label: impl Into<String>,
        config: C,
        render_factory: impl Fn(&MockState<C>) -> U + 'static,
    ) -> EntryId {
        self.register(label, move || MockState::new(config.clone()), render_factory)
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[ComponentEntry<C, U>] {
        &self.entries
    }

    /// Entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&ComponentEntry<C, U>> {
        self.entries.get(id.0)
    }

    /// Iterates in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentEntry<C, U>> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Clone + 'static, U> Default for GalleryRegistry<C, U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry: GalleryRegistry<String, String> = GalleryRegistry::new();
        let first = registry.register_mock("Default", "A".to_string(), |s| s.get());
        let second = registry.register_mock("Default", "B".to_string(), |s| s.get());

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(registry.len(), 2);

        let labels: Vec<&str> = registry.iter().map(ComponentEntry::label).collect();
        assert_eq!(labels, vec!["Default", "Default"]);
    }

    #[test]
    fn test_factories_build_fresh_state() {
        let mut registry: GalleryRegistry<String, String> = GalleryRegistry::new();
        let id = registry.register_mock("Copied", "ABC".to_string(), |s| format!("unit:{}", s.get()));

        let entry = registry.get(id).unwrap();
        let a = (entry.state_factory())();
        let b = (entry.state_factory())();
        a.update("changed".to_string());

        assert_eq!(b.get(), "ABC");
        assert_eq!((entry.render_factory())(&b), "unit:ABC");
    }

    #[test]
    fn test_unknown_id_lookup() {
        let mut registry: GalleryRegistry<String, String> = GalleryRegistry::new();
        registry.register_mock("Only", "A".to_string(), |s| s.get());

        let mut other: GalleryRegistry<String, String> = GalleryRegistry::new();
        other.register_mock("x", "x".to_string(), |s| s.get());
        let foreign = other.register_mock("y", "y".to_string(), |s| s.get());

        assert!(registry.get(foreign).is_none());
        assert_eq!(foreign.to_string(), "#1");
    }
}
