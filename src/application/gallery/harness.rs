//! Vertical stack of mounted gallery slots.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::error::GalleryError;
use super::registry::{EntryId, GalleryRegistry, RenderFactory, StateFactory};
use super::unit::{RenderableUnit, UnitId};
use crate::domain::{InteractionEvent, MockState};

/// Receives every event emitted by a mounted unit, with the slot's state.
pub type InteractionCallback<C> = Rc<dyn Fn(EntryId, &InteractionEvent, &MockState<C>)>;

/// Lifecycle of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Created, never mounted.
    Empty,
    /// Holds a live unit.
    Mounted,
    /// Unit torn down.
    Detached,
}

struct Mounted<C, U> {
    state: MockState<C>,
    unit: U,
}

/// Positional placeholder owning one unit at a time.
pub struct Slot<C, U> {
    entry_id: EntryId,
    label: String,
    status: SlotStatus,
    mounted: Option<Mounted<C, U>>,
    replacement: Option<(StateFactory<C>, RenderFactory<C, U>)>,
    generation: u32,
}

impl<C, U> Slot<C, U> {
    /// Entry this slot displays.
    #[must_use]
    pub const fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    /// Section label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> SlotStatus {
        self.status
    }

    /// State of the mounted unit.
    #[must_use]
    pub fn state(&self) -> Option<&MockState<C>> {
        self.mounted.as_ref().map(|m| &m.state)
    }

    /// Mounted unit.
    #[must_use]
    pub fn unit(&self) -> Option<&U> {
        self.mounted.as_ref().map(|m| &m.unit)
    }

    /// Number of times the slot was replaced.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Mounts registry entries as slots and routes their events.
pub struct GalleryHarness<C: Clone + 'static, U: RenderableUnit> {
    registry: GalleryRegistry<C, U>,
    slots: Vec<Slot<C, U>>,
    callback: Rc<RefCell<Option<InteractionCallback<C>>>>,
    focused: Option<usize>,
    scroll_offset: usize,
}

impl<C: Clone + 'static, U: RenderableUnit> GalleryHarness<C, U> {
    /// Creates one empty slot per registry entry.
    #[must_use]
    pub fn new(registry: GalleryRegistry<C, U>) -> Self {
        let slots = registry
            .iter()
            .map(|entry| Slot {
                entry_id: entry.id(),
                label: entry.label().to_string(),
                status: SlotStatus::Empty,
                mounted: None,
                replacement: None,
                generation: 0,
            })
            .collect();

        Self {
            registry,
            slots,
            callback: Rc::new(RefCell::new(None)),
            focused: None,
            scroll_offset: 0,
        }
    }

    /// Installs the callback receiving unit events. Applies to units mounted
    /// before and after the call.
    pub fn on_interaction(
        &mut self,
        callback: impl Fn(EntryId, &InteractionEvent, &MockState<C>) + 'static,
    ) {
        *self.callback.borrow_mut() = Some(Rc::new(callback));
    }

    /// Instantiates a unit for every slot not already mounted, in order.
    pub fn mount(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].status == SlotStatus::Mounted {
                continue;
            }
            let (state_factory, render_factory) = self.factories_for(index);
            self.mount_slot(index, &state_factory, &render_factory);
        }

        if self.focused.is_none() && !self.slots.is_empty() {
            self.focused = Some(0);
        }
        debug!(slots = self.slots.len(), "Gallery mounted");
    }

    /// Swaps the unit in one slot, keeping its position.
    ///
    /// The old unit is detached before the new factories run. Later remounts
    /// reuse the new factories.
    ///
    /// # Errors
    /// Returns `SlotNotFound` if `entry_id` is not in this registry.
    pub fn replace(
        &mut self,
        entry_id: EntryId,
        state_factory: impl Fn() -> MockState<C> + 'static,
        render_factory: impl Fn(&MockState<C>) -> U + 'static,
    ) -> Result<(), GalleryError> {
        let index = self.index_of(entry_id)?;
        let state_factory: StateFactory<C> = Rc::new(state_factory);
        let render_factory: RenderFactory<C, U> = Rc::new(render_factory);

        self.detach_slot(index);
        self.mount_slot(index, &state_factory, &render_factory);

        let slot = &mut self.slots[index];
        slot.replacement = Some((state_factory, render_factory));
        slot.generation += 1;
        debug!(entry = %entry_id, generation = slot.generation, "Gallery slot replaced");
        Ok(())
    }

    /// Emits `event` through the slot's unit, as if the user interacted.
    ///
    /// # Errors
    /// Returns `SlotNotFound` for foreign ids and `SlotNotMounted` when the
    /// slot holds no unit.
    pub fn dispatch(
        &self,
        entry_id: EntryId,
        event: &InteractionEvent,
    ) -> Result<bool, GalleryError> {
        let index = self.index_of(entry_id)?;
        let unit = self.slots[index]
            .unit()
            .ok_or(GalleryError::SlotNotMounted(entry_id))?;
        Ok(unit.emit(event))
    }

    /// Detaches every unit. Slots can be mounted again.
    pub fn unmount(&mut self) {
        for index in 0..self.slots.len() {
            self.detach_slot(index);
        }
        debug!("Gallery unmounted");
    }

    /// Slots in display order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<C, U>] {
        &self.slots
    }

    /// Slot by entry id.
    ///
    /// # Errors
    /// Returns `SlotNotFound` if `entry_id` is not in this registry.
    pub fn slot(&self, entry_id: EntryId) -> Result<&Slot<C, U>, GalleryError> {
        self.index_of(entry_id).map(|index| &self.slots[index])
    }

    /// Registry the harness was built from.
    #[must_use]
    pub const fn registry(&self) -> &GalleryRegistry<C, U> {
        &self.registry
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Identity of the unit in each slot, in display order.
    #[must_use]
    pub fn unit_ids(&self) -> Vec<Option<UnitId>> {
        self.slots
            .iter()
            .map(|slot| slot.unit().map(RenderableUnit::id))
            .collect()
    }

    /// Focuses `entry_id` and scrolls it to the top of the view.
    ///
    /// # Errors
    /// Returns `SlotNotFound` if `entry_id` is not in this registry.
    pub fn scroll_to_entry(&mut self, entry_id: EntryId) -> Result<(), GalleryError> {
        let index = self.index_of(entry_id)?;
        self.focused = Some(index);
        self.scroll_offset = index;
        Ok(())
    }

    /// Focused slot.
    #[must_use]
    pub fn focused(&self) -> Option<&Slot<C, U>> {
        self.focused.and_then(|index| self.slots.get(index))
    }

    /// Index of the focused slot.
    #[must_use]
    pub const fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Moves focus down, stopping at the last slot.
    pub fn focus_next(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        let next = self.focused.map_or(0, |i| (i + 1).min(self.slots.len() - 1));
        self.focused = Some(next);
    }

    /// Moves focus up, stopping at the first slot.
    pub fn focus_previous(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        self.focused = Some(self.focused.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Focuses the first slot.
    pub fn focus_first(&mut self) {
        if !self.slots.is_empty() {
            self.focused = Some(0);
        }
    }

    /// Focuses the last slot.
    pub fn focus_last(&mut self) {
        if !self.slots.is_empty() {
            self.focused = Some(self.slots.len() - 1);
        }
    }

    /// Index of the first slot drawn.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts the scroll offset so the focused slot is visible when
    /// `visible` slots fit on screen.
    pub fn ensure_focus_visible(&mut self, visible: usize) {
        let Some(focused) = self.focused else {
            return;
        };
        let visible = visible.max(1);
        if focused < self.scroll_offset {
            self.scroll_offset = focused;
        } else if focused >= self.scroll_offset + visible {
            self.scroll_offset = focused + 1 - visible;
        }
    }

    fn index_of(&self, entry_id: EntryId) -> Result<usize, GalleryError> {
        let index = entry_id.index();
        match self.slots.get(index) {
            Some(slot) if slot.entry_id == entry_id => Ok(index),
            _ => Err(GalleryError::SlotNotFound(entry_id)),
        }
    }

    fn factories_for(&self, index: usize) -> (StateFactory<C>, RenderFactory<C, U>) {
        if let Some((state, render)) = &self.slots[index].replacement {
            return (Rc::clone(state), Rc::clone(render));
        }
        let entry = &self.registry.entries()[index];
        (
            Rc::clone(entry.state_factory()),
            Rc::clone(entry.render_factory()),
        )
    }

    fn mount_slot(
        &mut self,
        index: usize,
        state_factory: &StateFactory<C>,
        render_factory: &RenderFactory<C, U>,
    ) {
        let entry_id = self.slots[index].entry_id;
        let state = state_factory();
        let mut unit = render_factory(&state);

        let callback = Rc::clone(&self.callback);
        let bound_state = state.clone();
        unit.attach_sink(Rc::new(move |event: &InteractionEvent| {
            let current = callback.borrow().clone();
            match current {
                Some(callback) => callback(entry_id, event, &bound_state),
                None => trace!(entry = %entry_id, event = %event, "No interaction callback installed"),
            }
        }));

        let slot = &mut self.slots[index];
        slot.mounted = Some(Mounted { state, unit });
        slot.status = SlotStatus::Mounted;
    }

    fn detach_slot(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        if let Some(mut mounted) = slot.mounted.take() {
            mounted.unit.detach();
            slot.status = SlotStatus::Detached;
        }
    }
}

impl<C: Clone + 'static, U: RenderableUnit> Drop for GalleryHarness<C, U> {
    fn drop(&mut self) {
        self.unmount();
    }
}
