//! Contact form, contact cards, and the store map.
//!
//! Submission is simulated: after validation the payload is logged and a
//! success toast appears once [`SIMULATED_SUBMIT_MS`] has elapsed.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::SectionHeader;
use crate::catalog::showcase::{CONTACT_INFO, MAP_EMBED_URL};
use crate::components::icon::{Icon, IconKind};
use crate::state::contact::{ContactForm, ContactState, SIMULATED_SUBMIT_MS};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::browser;

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        contact.update(|c| payload = c.begin_submit());
        let Some(payload) = payload else {
            return;
        };
        match serde_json::to_string(&payload) {
            Ok(body) => log::debug!("contact: submitting {body}"),
            Err(e) => log::warn!("contact: payload not serializable: {e}"),
        }
        leptos::task::spawn_local(async move {
            browser::sleep_ms(SIMULATED_SUBMIT_MS).await;
            toasts.update(|t| {
                t.push(ToastKind::Success, "Message Sent!", "We'll get back to you as soon as possible.");
            });
            contact.update(ContactState::finish_submit);
        });
    };

    let submitting = move || contact.get().submitting;
    let error = move || contact.get().error.map(|e| e.to_string());

    view! {
        <section id="contact" class="section">
            <div class="container">
                <SectionHeader
                    eyebrow="Get In Touch"
                    title="Contact Us"
                    lead="Have questions? We'd love to hear from you. Send us a message!"
                />
                <div class="contact-grid">
                    <div class="card contact-form">
                        <h3 class="card__title">"Send us a Message"</h3>
                        <form on:submit=on_submit novalidate=true>
                            <div class="form-row">
                                <FormField
                                    label="Your Name"
                                    kind="text"
                                    placeholder="John Doe"
                                    get=|f| f.name.clone()
                                    set=|f, v| f.name = v
                                />
                                <FormField
                                    label="Email Address"
                                    kind="email"
                                    placeholder="john@example.com"
                                    get=|f| f.email.clone()
                                    set=|f, v| f.email = v
                                />
                            </div>
                            <FormField
                                label="Phone Number"
                                kind="tel"
                                placeholder="+1 (555) 123-4567"
                                get=|f| f.phone.clone()
                                set=|f, v| f.phone = v
                            />
                            <FormField
                                label="Your Message"
                                kind="textarea"
                                placeholder="How can we help you?"
                                get=|f| f.message.clone()
                                set=|f, v| f.message = v
                            />
                            {move || error().map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })}
                            <button type="submit" class="btn btn--accent btn--lg btn--block" disabled=submitting>
                                <Show when=submitting fallback=|| view! { "Send Message" <Icon kind=IconKind::Send/> }>
                                    "Sending..."
                                </Show>
                            </button>
                        </form>
                    </div>

                    <div class="contact-side">
                        <div class="contact-cards">
                            {CONTACT_INFO
                                .iter()
                                .map(|info| {
                                    view! {
                                        <div class="card contact-card">
                                            <div class="contact-card__icon">
                                                <Icon kind=info.icon/>
                                            </div>
                                            <h4>{info.title}</h4>
                                            {info.details.iter().map(|line| view! { <p class="muted">{*line}</p> }).collect::<Vec<_>>()}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="map">
                            {view! {
                                <iframe
                                    src=MAP_EMBED_URL
                                    title="Store Location"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    allowfullscreen=true
                                ></iframe>
                            }
                                .attr("loading", "lazy")}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Labelled input bound to one field of the shared contact form.
#[component]
fn FormField(
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&ContactForm) -> String,
    set: fn(&mut ContactForm, String),
) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();
    let value = move || contact.with(|c| get(&c.form));

    let control = if kind == "textarea" {
        view! {
            <textarea
                class="input input--multiline"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    contact.update(|c| set(&mut c.form, v));
                }
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="input"
                type=kind
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    contact.update(|c| set(&mut c.form, v));
                }
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            {control}
        </label>
    }
}
