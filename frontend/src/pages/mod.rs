pub mod consulting;
pub mod contact;
pub mod firm;
pub mod home;
pub mod metals;
pub mod tobacco;
pub mod trading;

use crate::navigation::Page;
use yew::prelude::*;

/// Maps the active page to its content. Every `Page` has a body, so the main area is
/// never left empty.
pub fn render_page(page: Page, navigate: Callback<Page>) -> Html {
    match page {
        Page::Home => html! { <home::HomePage navigate={navigate} /> },
        Page::Consulting => html! { <consulting::ConsultingPage /> },
        Page::Trading => html! { <trading::TradingPage navigate={navigate} /> },
        Page::Tobacco => html! { <tobacco::TobaccoPage navigate={navigate} /> },
        Page::Metals => html! { <metals::MetalsPage navigate={navigate} /> },
        Page::Firm => html! { <firm::FirmPage /> },
        Page::Contact => html! { <contact::ContactPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub navigate: Callback<Page>,
}
