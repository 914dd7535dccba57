use std::fmt;
use std::str::FromStr;

use yew::prelude::*;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::{self, DomError};

/// Named regions of the page. The string forms are used as element ids and
/// as URL fragments, so they must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Methods,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Methods,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Methods => "methods",
            SectionId::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Methods => "Methods",
            SectionId::Contact => "Contact",
        }
    }

    /// Accepts `contact` as well as `#contact`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        fragment.trim_start_matches('#').parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Collapsible menu shown on narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Resolves a navigation request. The menu is closed whether or not the
    /// target exists.
    pub fn navigate(&mut self, target: &str) -> Option<SectionId> {
        self.close();
        target.parse().ok()
    }
}

/// Smooth-scrolls the section's top edge to the top of the viewport.
/// Returns `Ok(false)` when the section is not in the document.
pub fn scroll_to_section(id: SectionId) -> Result<bool, DomError> {
    let Some(element) = error::document()?.get_element_by_id(id.as_str()) else {
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    debug!("Scrolled to #{}", id);
    Ok(true)
}

/// Missing sections are silently ignored, DOM failures only logged.
pub fn scroll_to(id: SectionId) {
    if let Err(e) = scroll_to_section(id) {
        warn!("Could not scroll to #{}: {}", id, e);
    }
}

/// Section named by the current URL fragment, if any.
pub fn fragment_target() -> Result<Option<SectionId>, DomError> {
    let hash = error::window()?.location().hash()?;
    Ok(SectionId::from_fragment(&hash))
}

/// Applies one navigation request to the menu and hands a known target to
/// `scroll`. The returned menu is always closed.
pub fn dispatch(mut menu: MobileMenu, target: &str, scroll: impl FnOnce(SectionId)) -> MobileMenu {
    if let Some(id) = menu.navigate(target) {
        scroll(id);
    }
    menu
}

/// Page-wide navigation handle. Header links, call-to-action buttons and
/// deep links all go through `navigate`, so the mobile menu closes whichever
/// one was used.
#[derive(Clone, PartialEq)]
pub struct NavigationContext {
    menu: UseStateHandle<MobileMenu>,
}

impl NavigationContext {
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&self) {
        let mut next = *self.menu;
        next.toggle();
        self.menu.set(next);
    }

    pub fn navigate(&self, target: &str) {
        self.menu.set(dispatch(*self.menu, target, scroll_to));
    }

    /// Navigates to the section in the URL fragment so deep links like
    /// `/#contact` land on the right spot. Unknown fragments are ignored.
    pub fn follow_fragment(&self) {
        match fragment_target() {
            Ok(Some(id)) => self.navigate(id.as_str()),
            Ok(None) => {}
            Err(e) => warn!("Could not read location hash: {}", e),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let menu = use_state(MobileMenu::default);
    let context = NavigationContext { menu };

    html! {
        <ContextProvider<NavigationContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<NavigationContext>>
    }
}

/// The shared navigation handle, or a private one when rendered outside a
/// `NavigationProvider`.
#[hook]
pub fn use_navigation() -> NavigationContext {
    let detached = use_state(MobileMenu::default);
    use_context::<NavigationContext>().unwrap_or(NavigationContext { menu: detached })
}
