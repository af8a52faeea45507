//! The one renderer for transient notifications.

use leptos::prelude::*;

use crate::state::notifications::NotificationCenter;

/// Fixed-position stack of notifications with dismiss buttons.
///
/// Whenever the queue changes, a timer is armed for the earliest deadline.
/// A timer that wakes early keeps waiting until that deadline has passed.
#[component]
pub fn NotificationTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationCenter>>();

    Effect::new(move || {
        let Some(deadline) = notices.with(NotificationCenter::next_deadline) else {
            return;
        };
        let wait = deadline.saturating_sub(crate::util::clock::now_ms());
        #[cfg(feature = "csr")]
        crate::app::spawn_task(async move {
            let mut wait = wait;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(wait)).await;
                match crate::state::notifications::sweep_due(&notices, crate::util::clock::now_ms()) {
                    Some(remaining) => wait = remaining,
                    None => break,
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = wait;
    });

    view! {
        <div class="toast-tray" role="status" aria-live="polite">
            <For
                each=move || notices.with(|c| c.visible().cloned().collect::<Vec<_>>())
                key=|n| n.id
                let:notice
            >
                {
                    let id = notice.id;
                    let class = format!("toast toast--{}", notice.kind.css_modifier());
                    view! {
                        <div class=class>
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|c| c.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
