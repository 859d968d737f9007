use crate::config;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InquiryType {
    #[default]
    General,
    Consulting,
    Trading,
    Careers,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::General,
        InquiryType::Consulting,
        InquiryType::Trading,
        InquiryType::Careers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Consulting => "Consulting Services",
            InquiryType::Trading => "Trading & Products",
            InquiryType::Careers => "Careers",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|inquiry| inquiry.label() == label)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Everything the visitor has typed, plus whether they already pressed send.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry: InquiryType,
    pub message: String,
    pub submitted: bool,
}

impl ContactForm {
    /// Ignored once the form has been submitted; the acknowledgment is final.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.submitted {
            return;
        }
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn set_inquiry(&mut self, inquiry: InquiryType) {
        if !self.submitted {
            self.inquiry = inquiry;
        }
    }

    /// Always succeeds. Nothing leaves the browser.
    pub fn submit(&mut self) {
        if !self.submitted {
            log::info!("contact form submitted ({})", self.inquiry.label());
        }
        self.submitted = true;
    }
}

pub enum ContactAction {
    Edit(ContactField, String),
    ChooseInquiry(InquiryType),
    Submit,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.set_field(field, value),
            ContactAction::ChooseInquiry(inquiry) => next.set_inquiry(inquiry),
            ContactAction::Submit => next.submit(),
        }
        Rc::new(next)
    }
}

#[function_component]
pub fn ContactPage() -> Html {
    let form = use_reducer(ContactForm::default);
    let on_action = {
        let form = form.clone();
        Callback::from(move |action: ContactAction| form.dispatch(action))
    };
    html! {
        <ContactView form={(*form).clone()} on_action={on_action} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactViewProps {
    pub form: ContactForm,
    pub on_action: Callback<ContactAction>,
}

/// The contact page markup for a given form state.
#[function_component]
pub fn ContactView(props: &ContactViewProps) -> Html {
    let form = &props.form;

    let onsubmit = props.on_action.reform(|e: SubmitEvent| {
        e.prevent_default();
        ContactAction::Submit
    });
    let on_name = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ContactAction::Edit(ContactField::Name, input.value())
    });
    let on_email = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ContactAction::Edit(ContactField::Email, input.value())
    });
    let on_message = props.on_action.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        ContactAction::Edit(ContactField::Message, input.value())
    });
    let on_inquiry = props.on_action.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        ContactAction::ChooseInquiry(InquiryType::from_label(&select.value()))
    });

    html! {
        <div class="page page-contact fade-in">
            <div class="container narrow">
                <div class="contact-card">
                    <div class="contact-header">
                        <h1>{"Contact Us"}</h1>
                        <p>{"For enquiries or partnership opportunities, please complete the form below."}</p>
                    </div>

                    if form.submitted {
                        <div class="contact-ack">
                            <h3>{"Thank you."}</h3>
                            <p>{"Your message has been received. Our team will contact you shortly."}</p>
                        </div>
                    } else {
                        <form class="contact-form" onsubmit={onsubmit}>
                            <div class="form-field">
                                <label for="contact-name">{"Name"}</label>
                                <input
                                    id="contact-name"
                                    required=true
                                    type="text"
                                    placeholder="Your full name"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-email">{"Email Address"}</label>
                                <input
                                    id="contact-email"
                                    required=true
                                    type="email"
                                    placeholder="name@company.com"
                                    value={form.email.clone()}
                                    oninput={on_email}
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-inquiry">{"Inquiry Type"}</label>
                                <div class="select-wrapper">
                                    <select id="contact-inquiry" onchange={on_inquiry}>
                                        { for InquiryType::ALL.into_iter().map(|inquiry| html! {
                                            <option value={inquiry.label()} selected={inquiry == form.inquiry}>
                                                {inquiry.label()}
                                            </option>
                                        }) }
                                    </select>
                                    <i class="fas fa-chevron-down select-caret"></i>
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="contact-message">{"Message"}</label>
                                <textarea
                                    id="contact-message"
                                    required=true
                                    rows="5"
                                    placeholder="How can we help you?"
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                            </div>
                            <button type="submit" class="contact-submit">{"Send Message"}</button>
                        </form>
                    }
                </div>

                <div class="contact-details">
                    <div>
                        <i class="fas fa-envelope"></i>
                        <p class="detail-title">{"Email Us"}</p>
                        <p>{config::CONTACT_EMAIL}</p>
                    </div>
                    <div>
                        <i class="fas fa-building"></i>
                        <p class="detail-title">{"Headquarters"}</p>
                        <p>{config::headquarters_line()}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(form: ContactForm, action: ContactAction) -> ContactForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn labels_round_trip_and_unknown_defaults_to_general() {
        for inquiry in InquiryType::ALL {
            assert_eq!(InquiryType::from_label(inquiry.label()), inquiry);
        }
        assert_eq!(InquiryType::from_label("Press"), InquiryType::General);
        assert_eq!(InquiryType::default().label(), "General Inquiry");
    }

    #[test]
    fn submit_succeeds_with_empty_fields() {
        let form = reduce(ContactForm::default(), ContactAction::Submit);
        assert!(form.submitted);
    }

    #[test]
    fn submit_keeps_entered_values() {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ada Lovelace".to_string());
        form.set_field(ContactField::Email, "not-an-email".to_string());
        form.set_inquiry(InquiryType::Careers);
        form.set_field(ContactField::Message, "Hello".to_string());
        form.submit();

        assert!(form.submitted);
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "not-an-email");
        assert_eq!(form.inquiry, InquiryType::Careers);
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn submitted_is_monotonic() {
        let form = reduce(ContactForm::default(), ContactAction::Submit);
        let form = reduce(form, ContactAction::Edit(ContactField::Name, "Late".to_string()));
        let form = reduce(form, ContactAction::ChooseInquiry(InquiryType::Trading));
        let form = reduce(form, ContactAction::Submit);

        assert!(form.submitted);
        assert!(form.name.is_empty());
        assert_eq!(form.inquiry, InquiryType::General);
    }
}
