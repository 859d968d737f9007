pub mod components;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod utils;

use components::contact_cta::ContactCta;
use components::footer::Footer;
use components::navbar::Navbar;
use navigation::{NavAction, NavState};
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
    let nav = use_reducer(NavState::default);

    // Any change of epoch, including a wrap back to zero, resets the viewport.
    // The run on mount is skipped so a restored scroll position survives.
    {
        let mounted = use_mut_ref(|| false);
        use_effect_with_deps(
            move |_| {
                if mounted.replace(true) {
                    utils::scroll::scroll_to_top();
                }
                || ()
            },
            nav.scroll_epoch,
        );
    }

    let on_action = {
        let nav = nav.clone();
        Callback::from(move |action: NavAction| nav.dispatch(action))
    };
    let navigate = on_action.reform(NavAction::Navigate);
    let page = nav.page;

    html! {
        <div class="app-shell">
            <Navbar state={*nav} on_action={on_action} />
            <main class="app-main">
                { pages::render_page(page, navigate.clone()) }
            </main>
            if page.shows_contact_cta() {
                <ContactCta navigate={navigate.clone()} />
            }
            <Footer navigate={navigate} />
        </div>
    }
}
