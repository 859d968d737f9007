use crate::config;
use crate::navigation::{NavAction, NavState, Page};
use crate::utils::scroll::{self, ScrollSubscription};
use yew::prelude::*;

/// Visual treatment of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTheme {
    /// White background, dark text.
    Solid,
    /// Over the home hero: no background, light text.
    Transparent,
}

impl NavTheme {
    pub fn derive(scrolled: bool, page: Page) -> Self {
        if scrolled || page != Page::Home {
            NavTheme::Solid
        } else {
            NavTheme::Transparent
        }
    }

    fn class(self) -> &'static str {
        match self {
            NavTheme::Solid => "navbar-solid",
            NavTheme::Transparent => "navbar-transparent",
        }
    }
}

const DESKTOP_LINKS_BEFORE_TRADING: &[Page] = &[Page::Home, Page::Consulting];
const DESKTOP_LINKS_AFTER_TRADING: &[Page] = &[Page::Firm, Page::Contact];
const TRADING_PRODUCTS: &[Page] = &[Page::Tobacco, Page::Metals];

const MOBILE_LINKS: &[(&str, Page, &str)] = &[
    ("Home", Page::Home, "mobile-link"),
    ("Consulting", Page::Consulting, "mobile-link"),
    ("Trading Overview", Page::Trading, "mobile-link"),
    ("Tobacco Products", Page::Tobacco, "mobile-link mobile-sublink"),
    ("Metals & Coal", Page::Metals, "mobile-link mobile-sublink"),
    ("The Firm", Page::Firm, "mobile-link"),
    ("Contact Us", Page::Contact, "mobile-link mobile-contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub state: NavState,
    pub on_action: Callback<NavAction>,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);

    // The listener is held for as long as the navbar is mounted.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::attach(move |offset| {
                    scrolled.set(scroll::is_scrolled(offset));
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let state = &props.state;
    let theme = NavTheme::derive(*scrolled, state.page);
    let navigate = |page: Page| props.on_action.reform(move |_: MouseEvent| NavAction::Navigate(page));

    let link = |page: Page| {
        html! {
            <span
                class={classes!("nav-link", (state.page == page).then_some("active"))}
                onclick={navigate(page)}
            >
                {page.title()}
            </span>
        }
    };

    let open_dropdown = props.on_action.reform(|_: MouseEvent| NavAction::OpenTradingDropdown);
    let close_dropdown = props.on_action.reform(|_: MouseEvent| NavAction::CloseTradingDropdown);
    let toggle_mobile = props.on_action.reform(|_: MouseEvent| NavAction::ToggleMobileMenu);

    html! {
        <nav class={classes!("navbar", theme.class())}>
            <div class="container navbar-inner">
                <div class="nav-brand" onclick={navigate(Page::Home)}>
                    {config::BRAND}
                </div>

                <div class="nav-desktop">
                    { for DESKTOP_LINKS_BEFORE_TRADING.iter().map(|page| link(*page)) }
                    <div class="nav-dropdown" onmouseenter={open_dropdown} onmouseleave={close_dropdown}>
                        <span
                            class={classes!("nav-link", state.page.is_trading_section().then_some("active"))}
                            onclick={navigate(Page::Trading)}
                        >
                            {Page::Trading.title()}{" "}<i class="fas fa-chevron-down nav-caret"></i>
                        </span>
                        if state.trading_dropdown_open {
                            <div class="nav-dropdown-menu">
                                { for TRADING_PRODUCTS.iter().map(|page| html! {
                                    <div class="nav-dropdown-item" onclick={navigate(*page)}>
                                        {page.title()}
                                    </div>
                                }) }
                            </div>
                        }
                    </div>
                    { for DESKTOP_LINKS_AFTER_TRADING.iter().map(|page| link(*page)) }
                </div>

                <button class="nav-mobile-toggle" onclick={toggle_mobile} aria-label="Toggle menu">
                    if state.mobile_menu_open {
                        <i class="fas fa-xmark"></i>
                    } else {
                        <i class="fas fa-bars"></i>
                    }
                </button>
            </div>

            if state.mobile_menu_open {
                <div class="nav-mobile-menu">
                    { for MOBILE_LINKS.iter().map(|(label, page, class)| html! {
                        <span class={*class} onclick={navigate(*page)}>{*label}</span>
                    }) }
                </div>
            }
        </nav>
    }
}
