//! Toast notification stack.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::toast::{TOAST_DURATION_MS, Toast, ToastKind, ToastState};
use crate::util::browser;

/// Renders queued toasts and schedules each one's auto-dismiss on first sight.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scheduled = RwSignal::new(0_u64);

    Effect::new(move || {
        let newest = toasts.with(|t| t.toasts.last().map(|toast| toast.id));
        let Some(newest) = newest else {
            return;
        };
        if newest <= scheduled.get_untracked() {
            return;
        }
        let pending = toasts.with_untracked(|t| {
            t.toasts
                .iter()
                .filter(|toast| toast.id > scheduled.get_untracked())
                .map(|toast| toast.id)
                .collect::<Vec<_>>()
        });
        scheduled.set(newest);
        for id in pending {
            leptos::task::spawn_local(async move {
                browser::sleep_ms(TOAST_DURATION_MS).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Info => "toast",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__content">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button class="icon-button toast__close" title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                <Icon kind=IconKind::Close/>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
