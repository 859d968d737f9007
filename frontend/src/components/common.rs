use crate::navigation::Page;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Text,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Text => "btn btn-text",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component]
pub fn Button(props: &ButtonProps) -> Html {
    html! {
        <button onclick={props.onclick.clone()} class={classes!(props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
            if props.variant != ButtonVariant::Text {
                <i class="fas fa-arrow-right btn-arrow"></i>
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component]
pub fn SectionHeading(props: &TextProps) -> Html {
    html! {
        <h2 class={classes!("section-heading", props.class.clone())}>
            { for props.children.iter() }
        </h2>
    }
}

#[function_component]
pub fn SectionText(props: &TextProps) -> Html {
    html! {
        <p class={classes!("section-text", props.class.clone())}>
            { for props.children.iter() }
        </p>
    }
}

/// Builds a click handler that sends the visitor to `page`.
pub fn go_to(navigate: &Callback<Page>, page: Page) -> Callback<MouseEvent> {
    navigate.reform(move |_: MouseEvent| page)
}
