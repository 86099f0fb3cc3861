//! In-window keyboard shortcut registration and dispatch
//!
//! Components register `{hotkey, handler}` bindings for as long as they are
//! mounted (see [`use_hotkeys`]). The root component forwards every `keydown`
//! to [`dispatch_hotkey`], which runs the most recently registered matching
//! handler, so a modal opened on top of the reader wins over the reader's own
//! bindings.
//!
//! Bindings match on the physical key code and modifiers, never on the text a
//! key produces, so `shift+Digit1` fires regardless of keyboard layout.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};

/// Binding for the Escape key without modifiers
#[must_use]
pub fn escape_hotkey() -> HotKey {
    HotKey::new(None, Code::Escape)
}

/// One shortcut binding
#[derive(Debug, Clone, PartialEq)]
pub struct Hotkey<H> {
    pub hotkey: HotKey,
    pub handler: H,
}

impl<H> Hotkey<H> {
    pub const fn new(hotkey: HotKey, handler: H) -> Self {
        Self { hotkey, handler }
    }
}

/// Handle for a group of bindings registered together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyId(u64);

/// Registered binding groups, in registration order
#[derive(Debug)]
pub struct HotkeyRegistry<H> {
    next_id: u64,
    groups: Vec<(HotkeyId, Vec<Hotkey<H>>)>,
}

impl<H> Default for HotkeyRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            groups: Vec::new(),
        }
    }
}

impl<H> HotkeyRegistry<H> {
    pub fn register(&mut self, bindings: Vec<Hotkey<H>>) -> HotkeyId {
        self.next_id += 1;
        let id = HotkeyId(self.next_id);
        self.groups.push((id, bindings));
        id
    }

    /// Swap the bindings of a group, keeping its position; `false` if unknown
    pub fn replace(&mut self, id: HotkeyId, bindings: Vec<Hotkey<H>>) -> bool {
        self.groups
            .iter_mut()
            .find(|(group_id, _)| *group_id == id)
            .map(|(_, group)| *group = bindings)
            .is_some()
    }

    pub fn unregister(&mut self, id: HotkeyId) -> bool {
        let before = self.groups.len();
        self.groups.retain(|(group_id, _)| *group_id != id);
        self.groups.len() != before
    }

    /// Handler of the most recently registered binding matching the press
    pub fn resolve(&self, modifiers: Modifiers, code: Code) -> Option<&H> {
        self.groups
            .iter()
            .rev()
            .flat_map(|(_, group)| group.iter())
            .find(|binding| binding.hotkey.matches(modifiers, code))
            .map(|binding| &binding.handler)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, group)| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared registry provided by the root component
#[derive(Clone, Default)]
pub struct Hotkeys(Rc<RefCell<HotkeyRegistry<EventHandler<()>>>>);

impl Hotkeys {
    /// Run the handler bound to the pressed key; `true` if one ran
    pub fn dispatch(&self, modifiers: Modifiers, code: Code) -> bool {
        // Release the borrow before calling: handlers may unmount components
        // that unregister themselves.
        let handler = {
            let registry = self.0.borrow();
            if registry.is_empty() {
                return false;
            }
            registry.resolve(modifiers, code).copied()
        };
        handler.is_some_and(|handler| {
            tracing::debug!("Hotkey {:?} triggered with {:?}", code, modifiers);
            handler.call(());
            true
        })
    }
}

/// Provide the hotkey registry to the component tree
pub fn use_hotkey_provider() -> Hotkeys {
    use_context_provider(Hotkeys::default)
}

/// Forward a keyboard event to the registry
pub fn dispatch_hotkey(hotkeys: &Hotkeys, event: &KeyboardEvent) -> bool {
    hotkeys.dispatch(event.modifiers(), event.code())
}

/// Register bindings for the lifetime of the calling component
///
/// Bindings are re-issued whenever they differ from the last registered set
/// (e.g. a new handler identity) and removed on unmount.
pub fn use_hotkeys(bindings: Vec<Hotkey<EventHandler<()>>>) {
    let hotkeys = use_context::<Hotkeys>();

    let id = use_hook({
        let hotkeys = hotkeys.clone();
        let bindings = bindings.clone();
        move || {
            let mut registry = hotkeys.0.borrow_mut();
            let id = registry.register(bindings);
            tracing::trace!("{} hotkeys registered", registry.len());
            id
        }
    });
    let issued = use_hook(|| Rc::new(RefCell::new(bindings.clone())));

    if *issued.borrow() != bindings {
        hotkeys.0.borrow_mut().replace(id, bindings.clone());
        *issued.borrow_mut() = bindings;
    }

    use_drop(move || {
        hotkeys.0.borrow_mut().unregister(id);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_physical_key_not_produced_text() {
        let mut registry = HotkeyRegistry::default();
        let bang: HotKey = "shift+Digit1".parse().unwrap();
        registry.register(vec![Hotkey::new(bang, "bang")]);

        assert_eq!(registry.resolve(Modifiers::SHIFT, Code::Digit1), Some(&"bang"));
        assert_eq!(registry.resolve(Modifiers::empty(), Code::Digit1), None);
        assert_eq!(
            registry.resolve(Modifiers::SHIFT | Modifiers::CONTROL, Code::Digit1),
            None
        );
    }

    #[test]
    fn escape_ignores_lock_modifiers() {
        let mut registry = HotkeyRegistry::default();
        registry.register(vec![Hotkey::new(escape_hotkey(), "close")]);

        assert_eq!(registry.resolve(Modifiers::empty(), Code::Escape), Some(&"close"));
        assert_eq!(registry.resolve(Modifiers::CAPS_LOCK, Code::Escape), Some(&"close"));
        assert_eq!(registry.resolve(Modifiers::ALT, Code::Escape), None);
    }

    #[test]
    fn resolve_prefers_latest_registration() {
        let mut registry = HotkeyRegistry::default();
        registry.register(vec![Hotkey::new(escape_hotkey(), "reader")]);
        let modal = registry.register(vec![Hotkey::new(escape_hotkey(), "modal")]);

        assert_eq!(registry.resolve(Modifiers::empty(), Code::Escape), Some(&"modal"));

        assert!(registry.unregister(modal));
        assert_eq!(registry.resolve(Modifiers::empty(), Code::Escape), Some(&"reader"));
        assert!(!registry.unregister(modal));
    }

    #[test]
    fn replace_keeps_position() {
        let mut registry = HotkeyRegistry::default();
        let first = registry.register(vec![Hotkey::new(escape_hotkey(), 1)]);
        registry.register(vec![Hotkey::new(HotKey::new(None, Code::KeyJ), 2)]);

        assert!(registry.replace(first, vec![Hotkey::new(escape_hotkey(), 3)]));
        assert_eq!(registry.resolve(Modifiers::empty(), Code::Escape), Some(&3));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(Modifiers::empty(), Code::KeyX), None);
    }

    #[test]
    fn dispatch_runs_exactly_one_handler_per_press() {
        let mut registry = HotkeyRegistry::default();
        let calls = Rc::new(RefCell::new(Vec::new()));
        for name in ["outer", "inner"] {
            let calls = calls.clone();
            registry.register(vec![Hotkey::new(
                escape_hotkey(),
                Rc::new(move || calls.borrow_mut().push(name)) as Rc<dyn Fn()>,
            )]);
        }

        for _ in 0..2 {
            if let Some(handler) = registry.resolve(Modifiers::empty(), Code::Escape) {
                handler();
            }
        }
        assert_eq!(*calls.borrow(), vec!["inner", "inner"]);
    }
}
