use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use yew::prelude::*;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::error::DomError;

/// Marker attribute carrying the registry key of an observed element.
const KEY_ATTRIBUTE: &str = "data-reveal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Revealed => "reveal-visible",
        }
    }
}

/// What an intersection report did to a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Hidden until now, revealed by this report.
    Revealed,
    /// Already revealed; nothing changes.
    Unchanged,
    /// Not on screen yet.
    StillHidden,
    /// Not registered or already gone.
    Unknown,
}

#[derive(Debug)]
struct Entry {
    state: RevealState,
    attached: bool,
}

/// Per-section reveal bookkeeping. States only ever move from `Hidden` to
/// `Revealed` and survive deregistration, so a section that unmounts and
/// mounts again does not animate twice.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    sections: HashMap<String, Entry>,
}

impl RevealRegistry {
    pub fn register(&mut self, key: &str) -> RevealState {
        let entry = self.sections.entry(key.to_string()).or_insert(Entry {
            state: RevealState::Hidden,
            attached: true,
        });
        entry.attached = true;
        entry.state
    }

    pub fn deregister(&mut self, key: &str) {
        if let Some(entry) = self.sections.get_mut(key) {
            entry.attached = false;
        }
    }

    pub fn state(&self, key: &str) -> Option<RevealState> {
        self.sections.get(key).map(|entry| entry.state)
    }

    /// Applies one report from the visibility watcher.
    pub fn record(&mut self, key: &str, intersecting: bool) -> Visibility {
        let Some(entry) = self.sections.get_mut(key).filter(|entry| entry.attached) else {
            return Visibility::Unknown;
        };
        match (entry.state, intersecting) {
            (RevealState::Revealed, _) => Visibility::Unchanged,
            (RevealState::Hidden, false) => Visibility::StillHidden,
            (RevealState::Hidden, true) => {
                entry.state = RevealState::Revealed;
                Visibility::Revealed
            }
        }
    }

    /// Reveals every section still hidden and returns their keys, sorted.
    pub fn reveal_all(&mut self) -> Vec<String> {
        let mut flipped: Vec<String> = self
            .sections
            .iter_mut()
            .filter(|(_, entry)| entry.state == RevealState::Hidden)
            .map(|(key, entry)| {
                entry.state = RevealState::Revealed;
                key.clone()
            })
            .collect();
        flipped.sort_unstable();
        flipped
    }

    /// Attached sections that have not been revealed yet.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|(_, entry)| entry.attached && entry.state == RevealState::Hidden)
            .map(|(key, _)| key.as_str())
    }
}

/// Something that reports when its targets cross the reveal threshold.
pub trait Watcher {
    type Target;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
    fn disconnect(&self);
}

impl Watcher for IntersectionObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }

    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

struct Watched<T> {
    target: T,
    on_reveal: Callback<()>,
}

/// Registered sections, the ones still being watched, and the watcher
/// itself. A watched section is always attached and still hidden.
pub struct Sections<W: Watcher> {
    registry: RevealRegistry,
    watched: HashMap<String, Watched<W::Target>>,
    watcher: Option<W>,
    /// Set when no watcher could be started; everything shows at once.
    fallback: bool,
}

impl<W: Watcher> Default for Sections<W> {
    fn default() -> Self {
        Self {
            registry: RevealRegistry::default(),
            watched: HashMap::new(),
            watcher: None,
            fallback: false,
        }
    }
}

impl<W: Watcher> Sections<W> {
    /// Starts watching everything registered so far.
    pub fn attach(&mut self, watcher: W) {
        for watched in self.watched.values() {
            watcher.observe(&watched.target);
        }
        self.watcher = Some(watcher);
    }

    pub fn is_attached(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Stops all observation. Reports arriving afterwards are dropped.
    pub fn detach(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.disconnect();
        }
        self.watched.clear();
        debug!(
            "Reveal watcher detached, {} sections never shown",
            self.registry.hidden().count()
        );
    }

    /// Shows every hidden section and returns the callbacks to notify.
    /// Sections registered later start out revealed.
    pub fn reveal_all(&mut self) -> Vec<Callback<()>> {
        self.fallback = true;
        let keys = self.registry.reveal_all();
        keys.iter().filter_map(|key| self.unwatch(key)).collect()
    }

    pub fn register(&mut self, key: &str, target: W::Target, on_reveal: Callback<()>) -> RevealState {
        if self.registry.register(key) == RevealState::Revealed {
            return RevealState::Revealed;
        }
        if self.fallback {
            self.registry.record(key, true);
            return RevealState::Revealed;
        }
        self.unwatch(key);
        if let Some(watcher) = self.watcher.as_ref() {
            watcher.observe(&target);
        }
        self.watched.insert(key.to_string(), Watched { target, on_reveal });
        RevealState::Hidden
    }

    pub fn deregister(&mut self, key: &str) {
        self.registry.deregister(key);
        self.unwatch(key);
    }

    fn unwatch(&mut self, key: &str) -> Option<Callback<()>> {
        let watched = self.watched.remove(key)?;
        if let Some(watcher) = self.watcher.as_ref() {
            watcher.unobserve(&watched.target);
        }
        Some(watched.on_reveal)
    }

    /// Applies one watcher report. Returns the callback to notify when
    /// this report revealed the section.
    pub fn report(&mut self, key: &str, intersecting: bool) -> Option<Callback<()>> {
        if self.watcher.is_none() {
            return None;
        }
        match self.registry.record(key, intersecting) {
            Visibility::Revealed => {
                debug!("Revealing section {}", key);
                self.unwatch(key)
            }
            _ => None,
        }
    }

    pub fn is_watched(&self, key: &str) -> bool {
        self.watched.contains_key(key)
    }

    pub fn state(&self, key: &str) -> Option<RevealState> {
        self.registry.state(key)
    }

    /// State a section renders with before its first registration.
    pub fn initial_state(&self, key: &str) -> RevealState {
        if self.is_fallback() {
            RevealState::Revealed
        } else {
            self.state(key).unwrap_or(RevealState::Hidden)
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns the single `IntersectionObserver` of the page and the sections
/// registered with it.
#[derive(Default)]
pub struct RevealHub {
    sections: RefCell<Sections<IntersectionObserver>>,
    callback: RefCell<Option<ObserverCallback>>,
}

impl RevealHub {
    /// Creates the observer and starts watching everything registered so far.
    fn connect(self: &Rc<Self>) -> Result<(), DomError> {
        if self.sections.borrow().is_attached() {
            return Ok(());
        }

        let hub: Weak<RevealHub> = Rc::downgrade(self);
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            if let Some(hub) = hub.upgrade() {
                hub.handle_entries(&entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        self.sections.borrow_mut().attach(observer);
        *self.callback.borrow_mut() = Some(callback);
        debug!("Reveal observer connected");
        Ok(())
    }

    /// Stops all observation. No callback fires after this returns.
    fn disconnect(&self) {
        self.sections.borrow_mut().detach();
        self.callback.borrow_mut().take();
    }

    /// Shows every section at once, for browsers where the observer
    /// cannot be created.
    fn reveal_all(&self) {
        let callbacks = self.sections.borrow_mut().reveal_all();
        for on_reveal in callbacks {
            on_reveal.emit(());
        }
    }

    fn register(&self, key: &str, element: Element, on_reveal: Callback<()>) -> RevealState {
        if let Err(e) = element.set_attribute(KEY_ATTRIBUTE, key) {
            warn!("Could not tag section {}: {}", key, DomError::from(e));
        }
        self.sections.borrow_mut().register(key, element, on_reveal)
    }

    fn deregister(&self, key: &str) {
        self.sections.borrow_mut().deregister(key);
    }

    fn handle_entries(&self, entries: &Array) {
        let reports: Vec<(String, bool)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let key = entry.target().get_attribute(KEY_ATTRIBUTE)?;
                Some((key, entry.is_intersecting()))
            })
            .collect();
        let revealed: Vec<Callback<()>> = {
            let mut sections = self.sections.borrow_mut();
            reports
                .iter()
                .filter_map(|(key, intersecting)| sections.report(key, *intersecting))
                .collect()
        };
        // Borrows are released before any component state changes.
        for on_reveal in revealed {
            on_reveal.emit(());
        }
    }

    fn initial_state(&self, key: &str) -> RevealState {
        self.sections.borrow().initial_state(key)
    }
}

/// Handle to the page's reveal hub, shared through a Yew context.
#[derive(Clone, Default)]
pub struct RevealContext(Rc<RevealHub>);

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let context = use_memo(|_| RevealContext::default(), ());

    {
        let hub = context.0.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = hub.connect() {
                    warn!("Scroll reveal disabled, showing all sections: {}", e);
                    hub.reveal_all();
                }
                move || hub.disconnect()
            },
            (),
        );
    }

    html! {
        <ContextProvider<RevealContext> context={(*context).clone()}>
            { for props.children.iter() }
        </ContextProvider<RevealContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Registry key, unique per page.
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that fades in the first time it scrolls into view.
/// Without a surrounding `RevealProvider`, or when the browser has no
/// working observer, the content is shown right away.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let context = use_context::<RevealContext>();
    let node = use_node_ref();
    let state = {
        let initial = match &context {
            Some(ctx) => ctx.0.initial_state(&props.name),
            None => RevealState::Revealed,
        };
        use_state(move || initial)
    };

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |name: &AttrValue| {
                let hub = context.map(|ctx| ctx.0);
                if let (Some(hub), Some(element)) = (hub.as_ref(), node.cast::<Element>()) {
                    let on_reveal = {
                        let state = state.clone();
                        Callback::from(move |_: ()| state.set(RevealState::Revealed))
                    };
                    if hub.register(name, element, on_reveal) == RevealState::Revealed {
                        state.set(RevealState::Revealed);
                    }
                }
                let name = name.clone();
                move || {
                    if let Some(hub) = hub {
                        hub.deregister(&name);
                    }
                }
            },
            props.name.clone(),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", state.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry_with(keys: &[&str]) -> RevealRegistry {
        let mut registry = RevealRegistry::default();
        for key in keys {
            assert_eq!(registry.register(key), RevealState::Hidden);
        }
        registry
    }

    #[test]
    fn sections_start_hidden() {
        let registry = registry_with(&["about", "methods"]);
        assert_eq!(registry.state("about"), Some(RevealState::Hidden));
        assert_eq!(registry.state("methods"), Some(RevealState::Hidden));
        assert_eq!(registry.state("contact"), None);
    }

    #[test]
    fn first_crossing_reveals_and_later_ones_do_nothing() {
        let mut registry = registry_with(&["about"]);
        assert_eq!(registry.record("about", false), Visibility::StillHidden);
        assert_eq!(registry.record("about", true), Visibility::Revealed);
        assert_eq!(registry.record("about", true), Visibility::Unchanged);
        assert_eq!(registry.record("about", false), Visibility::Unchanged);
        assert_eq!(registry.state("about"), Some(RevealState::Revealed));
    }

    #[test]
    fn reports_arrive_in_any_order() {
        let mut registry = registry_with(&["about", "methods", "contact"]);
        assert_eq!(registry.record("contact", true), Visibility::Revealed);
        assert_eq!(registry.record("about", true), Visibility::Revealed);

        let hidden: Vec<_> = registry.hidden().collect();
        assert_eq!(hidden, ["methods"]);
    }

    #[test]
    fn unregistered_and_detached_sections_are_ignored() {
        let mut registry = registry_with(&["about"]);
        assert_eq!(registry.record("footer", true), Visibility::Unknown);

        registry.deregister("about");
        assert_eq!(registry.record("about", true), Visibility::Unknown);
        assert_eq!(registry.state("about"), Some(RevealState::Hidden));
    }

    #[test]
    fn revealed_state_survives_remounting() {
        let mut registry = registry_with(&["methods"]);
        registry.record("methods", true);
        registry.deregister("methods");

        assert_eq!(registry.register("methods"), RevealState::Revealed);
        assert_eq!(registry.record("methods", true), Visibility::Unchanged);
    }

    #[test]
    fn sections_below_the_hero_stay_hidden_without_scrolling() {
        let mut registry = registry_with(&["about", "methods", "contact"]);
        for key in ["about", "methods", "contact"] {
            assert_eq!(registry.record(key, false), Visibility::StillHidden);
        }

        let mut hidden: Vec<_> = registry.hidden().collect();
        hidden.sort_unstable();
        assert_eq!(hidden, ["about", "contact", "methods"]);
    }

    #[test]
    fn reveal_all_flips_only_hidden_sections() {
        let mut registry = registry_with(&["about", "methods", "contact"]);
        registry.record("methods", true);

        assert_eq!(registry.reveal_all(), ["about", "contact"]);
        assert_eq!(registry.hidden().count(), 0);
        assert!(registry.reveal_all().is_empty());
    }

    /// Records every call so tests can check what the page asked the
    /// browser to watch.
    #[derive(Clone, Default)]
    struct FakeWatcher {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FakeWatcher {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Watcher for FakeWatcher {
        type Target = &'static str;

        fn observe(&self, target: &&'static str) {
            self.calls.borrow_mut().push(format!("observe {}", target));
        }

        fn unobserve(&self, target: &&'static str) {
            self.calls.borrow_mut().push(format!("unobserve {}", target));
        }

        fn disconnect(&self) {
            self.calls.borrow_mut().push("disconnect".to_string());
        }
    }

    fn counter() -> (Rc<std::cell::Cell<usize>>, Callback<()>) {
        let count = Rc::new(std::cell::Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_: ()| count.set(count.get() + 1))
        };
        (count, callback)
    }

    fn attached() -> (Sections<FakeWatcher>, FakeWatcher) {
        let watcher = FakeWatcher::default();
        let mut sections = Sections::default();
        sections.attach(watcher.clone());
        (sections, watcher)
    }

    #[test]
    fn sections_registered_before_attach_are_observed_on_attach() {
        let mut sections = Sections::<FakeWatcher>::default();
        let (_, on_reveal) = counter();
        assert_eq!(sections.register("about", "about", on_reveal), RevealState::Hidden);

        let watcher = FakeWatcher::default();
        sections.attach(watcher.clone());
        assert_eq!(watcher.calls(), ["observe about"]);
    }

    #[test]
    fn late_registration_is_observed_at_once() {
        let (mut sections, watcher) = attached();
        let (_, on_reveal) = counter();

        sections.register("contact", "contact", on_reveal);
        assert!(sections.is_watched("contact"));
        assert_eq!(watcher.calls(), ["observe contact"]);
    }

    #[test]
    fn revealed_section_leaves_the_watch_list() {
        let (mut sections, watcher) = attached();
        let (count, on_reveal) = counter();
        sections.register("about", "about", on_reveal);

        assert!(sections.report("about", false).is_none());
        assert!(sections.is_watched("about"));

        let notify = sections.report("about", true).expect("first crossing reveals");
        notify.emit(());
        assert_eq!(count.get(), 1);
        assert!(!sections.is_watched("about"));
        assert_eq!(watcher.calls(), ["observe about", "unobserve about"]);
        assert!(sections.report("about", true).is_none());
    }

    #[test]
    fn nothing_is_reported_after_detach() {
        let (mut sections, watcher) = attached();
        let (_, on_reveal) = counter();
        sections.register("methods", "methods", on_reveal);

        sections.detach();
        assert!(!sections.is_attached());
        assert!(!sections.is_watched("methods"));
        assert!(sections.report("methods", true).is_none());
        assert_eq!(sections.state("methods"), Some(RevealState::Hidden));
        assert_eq!(watcher.calls(), ["observe methods", "disconnect"]);
    }

    #[test]
    fn revealed_key_is_never_watched_again() {
        let (mut sections, watcher) = attached();
        let (_, on_reveal) = counter();
        sections.register("about", "about", on_reveal);
        sections.report("about", true);
        sections.deregister("about");

        let (count, on_reveal) = counter();
        assert_eq!(sections.register("about", "about", on_reveal), RevealState::Revealed);
        assert!(!sections.is_watched("about"));
        assert_eq!(count.get(), 0);
        assert_eq!(watcher.calls(), ["observe about", "unobserve about"]);
    }

    #[test]
    fn unmounted_section_stops_being_observed() {
        let (mut sections, watcher) = attached();
        let (_, on_reveal) = counter();
        sections.register("contact", "contact", on_reveal);

        sections.deregister("contact");
        assert!(!sections.is_watched("contact"));
        assert!(sections.report("contact", true).is_none());
        assert_eq!(watcher.calls(), ["observe contact", "unobserve contact"]);
    }

    #[test]
    fn without_a_watcher_every_section_is_shown() {
        let mut sections = Sections::<FakeWatcher>::default();
        let (about, on_about) = counter();
        let (contact, on_contact) = counter();
        sections.register("about", "about", on_about);
        sections.register("contact", "contact", on_contact);
        assert_eq!(sections.initial_state("methods"), RevealState::Hidden);

        for notify in sections.reveal_all() {
            notify.emit(());
        }
        assert_eq!((about.get(), contact.get()), (1, 1));
        assert!(sections.is_fallback());
        assert!(!sections.is_watched("about") && !sections.is_watched("contact"));

        assert_eq!(sections.initial_state("methods"), RevealState::Revealed);
        let (methods, on_methods) = counter();
        assert_eq!(sections.register("methods", "methods", on_methods), RevealState::Revealed);
        assert!(!sections.is_watched("methods"));
        assert_eq!(methods.get(), 0);
    }

    #[test]
    fn state_classes() {
        assert_eq!(RevealState::Hidden.class(), "reveal-hidden");
        assert_eq!(RevealState::Revealed.class(), "reveal-visible");
    }

    proptest! {
        #[test]
        fn each_section_is_revealed_at_most_once(
            reports in proptest::collection::vec((0usize..3, any::<bool>()), 0..64)
        ) {
            let keys = ["about", "methods", "contact"];
            let mut registry = registry_with(&keys);
            let mut reveals = [0usize; 3];

            for (index, intersecting) in reports {
                if registry.record(keys[index], intersecting) == Visibility::Revealed {
                    reveals[index] += 1;
                }
            }

            for (index, key) in keys.iter().enumerate() {
                prop_assert!(reveals[index] <= 1);
                let revealed = registry.state(key) == Some(RevealState::Revealed);
                prop_assert_eq!(revealed, reveals[index] == 1);
            }
        }
    }
}
