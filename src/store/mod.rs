//! Observable state container for one keyboard configuration.
//!
//! The store holds a [`ConfigureState`] and exposes typed, per-slot access
//! through the marker types in [`slots`]. Every write notifies subscribed
//! observers synchronously, after the new value is in place and before the
//! writing call returns.
//!
//! Each write holds the state's write lock for the whole
//! read-compute-write sequence, so an updater always sees the value
//! directly preceding its own application.

pub mod slots;

use crate::models::{
    Animations, CustomKll, Define, Headers, Key, Matrix, RawConfig, UiConstants,
};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

pub use slots::{Slot, SlotName};

/// Every slot of a configuration being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigureState {
    /// Host is fetching a configuration
    pub loading: bool,
    /// Physical layout variant being edited
    pub layout: Option<String>,
    /// Active layer index
    pub layer: usize,
    /// Raw document as last loaded
    pub raw: Option<RawConfig>,
    /// Header fields
    pub headers: Option<Headers>,
    /// Key matrix
    pub matrix: Option<Matrix>,
    /// Named constants
    pub defines: Option<Vec<Define>>,
    /// LED data (pass-through)
    pub leds: Option<Value>,
    /// Custom KLL per layer
    pub custom: Option<CustomKll>,
    /// Animations by name
    pub animations: Option<Animations>,
    /// Macro data (pass-through)
    pub macros: Option<Value>,
    /// Key currently being edited
    pub selected: Option<Arc<Key>>,
    /// Whether the keyboard view is hidden
    pub keyboard_hidden: bool,
    /// Display constants
    pub ui: UiConstants,
}

impl ConfigureState {
    /// Creates an empty state with the given display constants.
    #[must_use]
    pub fn with_ui(ui: UiConstants) -> Self {
        Self {
            ui,
            ..Self::default()
        }
    }

    /// Slots cleared by [`ConfigureState::reset`].
    pub const RESET_SLOTS: &'static [SlotName] = &[
        SlotName::Layer,
        SlotName::Layout,
        SlotName::Selected,
        SlotName::KeyboardHidden,
        SlotName::Raw,
        SlotName::Headers,
        SlotName::Matrix,
        SlotName::Defines,
        SlotName::Leds,
        SlotName::Custom,
        SlotName::Animations,
        SlotName::Macros,
    ];

    /// Clears everything tied to a loaded configuration.
    ///
    /// `ui` and `loading` are left as they are.
    pub fn reset(&mut self) {
        self.layer = 0;
        self.layout = None;
        self.selected = None;
        self.keyboard_hidden = false;
        self.raw = None;
        self.headers = None;
        self.matrix = None;
        self.defines = None;
        self.leds = None;
        self.custom = None;
        self.animations = None;
        self.macros = None;
    }
}

/// Notification delivered to observers after a write.
#[derive(Debug)]
pub struct Change<'a> {
    /// Slots written by the operation
    pub slots: &'a [SlotName],
    /// State after the write
    pub state: &'a ConfigureState,
}

impl Change<'_> {
    /// Whether the given slot was written.
    #[must_use]
    pub fn touches(&self, slot: SlotName) -> bool {
        self.slots.contains(&slot)
    }
}

/// Handle returned by [`StateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn(&Change<'_>) + Send + Sync>;

/// Shared, observable configuration state.
///
/// Observers receive a copy of the post-write state in [`Change::state`].
/// They may write back into the store; such a write notifies observers
/// again once the current round is delivered to it.
pub struct StateStore {
    state: RwLock<ConfigureState>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_subscription: AtomicU64,
}

impl StateStore {
    /// Creates a store with an empty state and default display constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(ConfigureState::default())
    }

    /// Creates a store around an existing state.
    #[must_use]
    pub fn with_state(state: ConfigureState) -> Self {
        Self {
            state: RwLock::new(state),
            observers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Returns a clone of one slot's current value.
    #[must_use]
    pub fn get<S: Slot>(&self) -> S::Value {
        self.read(|state| S::get(state).clone())
    }

    /// Runs `f` against the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&ConfigureState) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Returns a clone of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> ConfigureState {
        self.read(ConfigureState::clone)
    }

    /// Replaces one slot's value.
    pub fn set<S: Slot>(&self, value: S::Value) {
        self.update::<S>(move |_| value);
    }

    /// Replaces one slot's value with `updater(current)`.
    ///
    /// The updater receives the current value and must return the complete
    /// next value.
    pub fn update<S: Slot>(&self, updater: impl FnOnce(&S::Value) -> S::Value) {
        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = updater(S::get(&guard));
            *S::get_mut(&mut guard) = next;
        }
        self.notify(&[S::NAME]);
    }

    /// Applies a multi-slot write as one step.
    ///
    /// Observers are notified once, with `slots` as the changed set.
    pub fn transact<R>(&self, slots: &[SlotName], f: impl FnOnce(&mut ConfigureState) -> R) -> R {
        let result = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.notify(slots);
        result
    }

    /// Registers an observer called after every write.
    pub fn subscribe(
        &self,
        observer: impl Fn(&Change<'_>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let observer: Observer = Arc::new(observer);
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    fn notify(&self, slots: &[SlotName]) {
        // Snapshot the list so observers can (un)subscribe while being called
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        if observers.is_empty() {
            return;
        }

        // Observers may write back, so they run without the lock held
        let state = self.snapshot();
        let change = Change {
            slots,
            state: &state,
        };
        for observer in observers {
            observer(&change);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers = self
            .observers
            .lock()
            .map(|observers| observers.len())
            .unwrap_or_default();
        f.debug_struct("StateStore")
            .field("state", &self.state)
            .field("observers", &observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Define, UiConstants};

    #[test]
    fn test_get_and_set() {
        let store = StateStore::new();
        assert_eq!(store.get::<slots::Layer>(), 0);

        store.set::<slots::Layer>(2);
        assert_eq!(store.get::<slots::Layer>(), 2);
    }

    #[test]
    fn test_update_sees_previous_value() {
        let store = StateStore::new();
        store.set::<slots::Defines>(Some(vec![Define::new("a", "N1", "1")]));

        store.update::<slots::Defines>(|prev| {
            let mut next = prev.clone().unwrap_or_default();
            assert_eq!(next.len(), 1);
            next.push(Define::new("b", "N2", "2"));
            Some(next)
        });

        assert_eq!(store.get::<slots::Defines>().unwrap().len(), 2);
    }

    #[test]
    fn test_observers_notified_after_write() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |change| {
            sink.lock()
                .unwrap()
                .push((change.slots.to_vec(), change.state.layer));
        });

        store.set::<slots::Layer>(3);
        store.set::<slots::KeyboardHidden>(true);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (vec![SlotName::Layer], 3));
        assert_eq!(seen[1].0, vec![SlotName::KeyboardHidden]);
    }

    #[test]
    fn test_unsubscribe() {
        let store = StateStore::new();
        let count = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&count);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        store.set::<slots::Layer>(1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set::<slots::Layer>(2);

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_transact_notifies_once() {
        let store = StateStore::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&calls);
        store.subscribe(move |change| {
            sink.lock().unwrap().push(change.slots.to_vec());
        });

        store.transact(&[SlotName::Layer, SlotName::Layout], |state| {
            state.layer = 4;
            state.layout = Some("Standard".to_string());
        });

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![SlotName::Layer, SlotName::Layout]);
        assert_eq!(store.get::<slots::Layout>().as_deref(), Some("Standard"));
    }

    #[test]
    fn test_observer_can_write_back() {
        let store = Arc::new(StateStore::new());
        store.set::<slots::KeyboardHidden>(true);

        let weak = Arc::downgrade(&store);
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        store.subscribe(move |change| {
            sink.lock().unwrap().push(change.slots.to_vec());
            if change.touches(SlotName::Layer) {
                if let Some(store) = weak.upgrade() {
                    store.set::<slots::KeyboardHidden>(false);
                }
            }
        });

        store.set::<slots::Layer>(1);

        assert!(!store.get::<slots::KeyboardHidden>());
        assert_eq!(
            *calls.lock().unwrap(),
            vec![vec![SlotName::Layer], vec![SlotName::KeyboardHidden]]
        );
    }

    #[test]
    fn test_change_state_is_post_write() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        store.subscribe(move |change| {
            *sink.lock().unwrap() = Some(change.state.layer);
        });

        store.set::<slots::Layer>(5);
        assert_eq!(*seen.lock().unwrap(), Some(5));
    }

    #[test]
    fn test_change_touches() {
        let state = ConfigureState::default();
        let change = Change {
            slots: &[SlotName::Matrix],
            state: &state,
        };
        assert!(change.touches(SlotName::Matrix));
        assert!(!change.touches(SlotName::Defines));
    }

    #[test]
    fn test_reset_keeps_ui_and_loading() {
        let ui = UiConstants {
            backdrop_padding: 5,
            size_factor: 10,
            led_factor: 11,
        };
        let mut state = ConfigureState::with_ui(ui);
        state.loading = true;
        state.layer = 3;
        state.keyboard_hidden = true;
        state.headers = Some(Headers::new());
        state.layout = Some("ANSI".to_string());

        state.reset();

        assert_eq!(state.layer, 0);
        assert!(!state.keyboard_hidden);
        assert!(state.headers.is_none());
        assert!(state.layout.is_none());
        assert!(state.loading);
        assert_eq!(state.ui, ui);
    }
}
