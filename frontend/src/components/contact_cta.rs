use crate::components::common::{go_to, Button};
use crate::navigation::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactCtaProps {
    pub navigate: Callback<Page>,
}

#[function_component]
pub fn ContactCta(props: &ContactCtaProps) -> Html {
    html! {
        <div class="contact-cta">
            <div class="container narrow centered">
                <h3>{"Ready to move forward?"}</h3>
                <p>{"To discuss a consulting engagement, trading requirement, or partnership opportunity, please contact us."}</p>
                <div class="cta-actions">
                    <Button onclick={go_to(&props.navigate, Page::Contact)}>{"Get in Touch"}</Button>
                </div>
            </div>
        </div>
    }
}
