//! Contact section: details, profile links and the message form.
//!
//! DESIGN
//! ======
//! Form state is local to this section (`RwSignal<ContactForm>`). The
//! completeness check runs before any request; the request itself runs in a
//! hydrate-only task and its outcome is folded back into the form. Notices
//! dismiss themselves after `NOTICE_DISMISS_MS`.

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;

use leptos::prelude::*;

use crate::components::info_tip::InfoTip;
use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::state::contact_form::{ContactForm, Field, NoticeKind};
use crate::state::mode::use_mode;
use crate::util::mode_theme::{SUBMITTING_LABEL, theme};

/// `tel:` link for a display-formatted phone number.
fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "form-notice form-notice--success",
        NoticeKind::Error => "form-notice form-notice--error",
    }
}

fn schedule_dismiss(form: RwSignal<ContactForm>) {
    let Some(seq) = form.with_untracked(|f| f.notice.as_ref().map(|n| n.seq)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(crate::state::contact_form::NOTICE_DISMISS_MS, move || {
        form.try_update(|f| f.dismiss_notice(seq));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let mode = use_mode();
    let t = move || theme(mode.get());
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            schedule_dismiss(form);
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(&payload).await;
            if form.try_update(|f| f.finish_submit(&outcome)).is_some() {
                schedule_dismiss(form);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let control_class = move || t().form_control_class;
    let field_value = move |field: Field| {
        form.with(|f| match field {
            Field::Name => f.name.clone(),
            Field::Email => f.email.clone(),
            Field::Message => f.message.clone(),
        })
    };
    let on_field = move |field: Field| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };
    let submitting = move || form.with(|f| f.submitting);

    let profiles = move || {
        let labelled = t().labelled_links;
        SOCIAL_LINKS
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        class="profile-link"
                        class:profile-link--labelled=labelled
                        href=link.href
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=format!("{} Profile", link.label)
                    >
                        <span class="profile-link__glyph" aria-hidden="true">{link.glyph}</span>
                        {labelled.then_some(link.label)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <section class=move || format!("section contact {}", t().panel_class) id="contact">
            <div class="container">
                <header class="section__header">
                    <h2 class="section__title">{move || t().contact.title}</h2>
                    <p class="section__subtitle">
                        {move || t().contact.subtitle}
                        <InfoTip text="Notice how the contact details, form elements and profile links change between the three design modes."/>
                    </p>
                </header>
                <div class="contact__layout">
                    <div class="contact__details">
                        <h3 class="contact__heading">{move || t().contact_details_title}</h3>
                        <dl class="contact__list">
                            <dt>{move || t().email_label}</dt>
                            <dd><a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a></dd>
                            <dt>{move || t().phone_label}</dt>
                            <dd><a href=tel_href(PROFILE.phone)>{PROFILE.phone}</a></dd>
                            <dt>"Location"</dt>
                            <dd>{PROFILE.location}</dd>
                        </dl>
                        <h4 class="contact__heading">{move || t().profiles_title}</h4>
                        <div class="contact__profiles">{profiles}</div>
                    </div>
                    <div class="contact__form-column">
                        <h3 class="contact__heading">{move || t().form_title}</h3>
                        <form class="contact-form" on:submit=on_submit>
                            {move || t().required_hint.map(|hint| view! { <p class="contact-form__hint">{hint}</p> })}
                            <label for="contact-name">{move || t().labels.name}</label>
                            <input
                                id="contact-name"
                                name="name"
                                type="text"
                                class=control_class
                                placeholder=move || t().placeholders.name
                                prop:value=move || field_value(Field::Name)
                                on:input=on_field(Field::Name)
                            />
                            <label for="contact-email">{move || t().labels.email}</label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                class=control_class
                                placeholder=move || t().placeholders.email
                                prop:value=move || field_value(Field::Email)
                                on:input=on_field(Field::Email)
                            />
                            <label for="contact-message">{move || t().labels.message}</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                class=control_class
                                rows=move || t().message_rows.to_string()
                                placeholder=move || t().placeholders.message
                                prop:value=move || field_value(Field::Message)
                                on:input=on_field(Field::Message)
                            ></textarea>
                            <button type="submit" class=move || t().button_class disabled=submitting>
                                {move || if submitting() { SUBMITTING_LABEL } else { t().submit_label }}
                            </button>
                            {move || {
                                form.with(|f| f.notice.clone())
                                    .map(|n| view! { <p class=notice_class(n.kind) role="status">{n.text}</p> })
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
