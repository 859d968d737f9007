use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::prelude::*;

/// The pages the site can show. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Consulting,
    Trading,
    Tobacco,
    Metals,
    Firm,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0:?}")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Consulting,
        Page::Trading,
        Page::Tobacco,
        Page::Metals,
        Page::Firm,
        Page::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Consulting => "consulting",
            Page::Trading => "trading",
            Page::Tobacco => "tobacco",
            Page::Metals => "metals",
            Page::Firm => "firm",
            Page::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Consulting => "Consulting",
            Page::Trading => "Trading",
            Page::Tobacco => "Tobacco Products",
            Page::Metals => "Metals & Coal",
            Page::Firm => "The Firm",
            Page::Contact => "Contact",
        }
    }

    /// Lenient lookup used at render time. Anything unrecognized lands on the home page.
    pub fn from_key_or_home(key: &str) -> Page {
        key.parse().unwrap_or_else(|e: UnknownPage| {
            log::warn!("{}, falling back to home", e);
            Page::Home
        })
    }

    /// The "Ready to move forward?" banner is pointless on the contact page itself.
    pub fn shows_contact_cta(self) -> bool {
        self != Page::Contact
    }

    pub fn is_trading_section(self) -> bool {
        matches!(self, Page::Trading | Page::Tobacco | Page::Metals)
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Navigation state owned by the app root and handed down by value as props.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub mobile_menu_open: bool,
    pub trading_dropdown_open: bool,
    /// Bumped on every transition; the app resets the viewport whenever it changes.
    pub scroll_epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Navigate(Page),
    ToggleMobileMenu,
    OpenTradingDropdown,
    CloseTradingDropdown,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Navigate(page) => {
                log::info!("navigating from {} to {}", self.page, page);
                next.page = page;
                next.mobile_menu_open = false;
                next.trading_dropdown_open = false;
                next.scroll_epoch = self.scroll_epoch.wrapping_add(1);
            }
            NavAction::ToggleMobileMenu => next.mobile_menu_open = !self.mobile_menu_open,
            NavAction::OpenTradingDropdown => next.trading_dropdown_open = true,
            NavAction::CloseTradingDropdown => next.trading_dropdown_open = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavState, actions: &[NavAction]) -> NavState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(*action);
        }
        *state
    }

    #[test]
    fn starts_on_home_with_menus_closed() {
        let state = NavState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.trading_dropdown_open);
        assert_eq!(state.scroll_epoch, 0);
    }

    #[test]
    fn every_key_parses_back_to_its_page() {
        for page in Page::ALL {
            assert_eq!(page.key().parse::<Page>(), Ok(page));
            assert_eq!(Page::from_key_or_home(page.key()), page);
        }
    }

    #[test]
    fn unknown_keys_are_rejected_strictly_and_default_leniently() {
        assert_eq!(
            "pricing".parse::<Page>(),
            Err(UnknownPage("pricing".to_string()))
        );
        assert_eq!("Home".parse::<Page>(), Err(UnknownPage("Home".to_string())));
        assert_eq!(Page::from_key_or_home("pricing"), Page::Home);
        assert_eq!(Page::from_key_or_home(""), Page::Home);
    }

    #[test]
    fn navigate_sets_page_closes_menus_and_requests_scroll_reset() {
        let open = NavState {
            mobile_menu_open: true,
            trading_dropdown_open: true,
            ..NavState::default()
        };
        let state = apply(open, &[NavAction::Navigate(Page::Metals)]);
        assert_eq!(state.page, Page::Metals);
        assert!(!state.mobile_menu_open);
        assert!(!state.trading_dropdown_open);
        assert_eq!(state.scroll_epoch, 1);
    }

    #[test]
    fn navigating_to_the_current_page_still_resets_scroll() {
        let state = apply(
            NavState::default(),
            &[NavAction::Navigate(Page::Home), NavAction::Navigate(Page::Home)],
        );
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.scroll_epoch, 2);
    }

    #[test]
    fn scroll_epoch_changes_even_when_it_wraps() {
        let worn = NavState {
            scroll_epoch: u64::MAX,
            ..NavState::default()
        };
        let state = apply(worn, &[NavAction::Navigate(Page::Firm)]);
        assert_eq!(state.scroll_epoch, 0);
        assert_ne!(state.scroll_epoch, worn.scroll_epoch);

        let state = apply(state, &[NavAction::Navigate(Page::Home)]);
        assert_eq!(state.scroll_epoch, 1);
    }

    #[test]
    fn state_is_passed_by_value() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NavState>();

        let state = NavState {
            page: Page::Tobacco,
            ..NavState::default()
        };
        let handed_down = state;
        assert_eq!(handed_down, state);
    }

    #[test]
    fn menu_toggles_are_independent() {
        let state = apply(
            NavState::default(),
            &[NavAction::ToggleMobileMenu, NavAction::OpenTradingDropdown],
        );
        assert!(state.mobile_menu_open);
        assert!(state.trading_dropdown_open);

        let state = apply(state, &[NavAction::ToggleMobileMenu]);
        assert!(!state.mobile_menu_open);
        assert!(state.trading_dropdown_open);

        let state = apply(state, &[NavAction::CloseTradingDropdown]);
        assert!(!state.trading_dropdown_open);
        assert_eq!(state.scroll_epoch, 0);
    }

    #[test]
    fn mobile_menu_closes_after_choosing_tobacco() {
        let state = apply(
            NavState::default(),
            &[NavAction::ToggleMobileMenu, NavAction::Navigate(Page::Tobacco)],
        );
        assert_eq!(state.page, Page::Tobacco);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn contact_cta_hidden_only_on_contact() {
        for page in Page::ALL {
            assert_eq!(page.shows_contact_cta(), page != Page::Contact);
        }
    }

    #[test]
    fn trading_section_covers_product_pages() {
        assert!(Page::Trading.is_trading_section());
        assert!(Page::Tobacco.is_trading_section());
        assert!(Page::Metals.is_trading_section());
        assert!(!Page::Firm.is_trading_section());
    }
}
