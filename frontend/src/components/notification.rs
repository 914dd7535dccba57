use yew::prelude::*;
use log::debug;
use gloo_timers::callback::Timeout;

use crate::config;

/// A short message popped up in the corner of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const REQUEST_RECEIVED: Notice = Notice {
        title: "Thank you for reaching out",
        description: "I will contact you shortly",
    };
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    /// Bumped for every new notice so the same text restarts the timer.
    pub serial: u32,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |&(serial, shown)| {
                let timeout = shown.then(|| {
                    debug!("Showing notice #{}", serial);
                    Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(()))
                });
                // Dropping the timeout cancels it.
                move || drop(timeout)
            },
            (props.serial, props.notice.is_some()),
        );
    }

    let Some(notice) = props.notice else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="toast" role="status" aria-live="polite">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        max-width: 360px;
                        background: #fff;
                        color: #3d3a36;
                        border-radius: 16px;
                        padding: 1.25rem 3rem 1.25rem 1.5rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.4s ease-out forwards;
                        z-index: 100;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        color: #7a746c;
                        font-size: 0.95rem;
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        border: none;
                        background: none;
                        font-size: 1.25rem;
                        cursor: pointer;
                        color: #7a746c;
                    }
                "#}
            </style>
            <div class="toast-title">{notice.title}</div>
            <div class="toast-description">{notice.description}</div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_text_is_fixed() {
        assert_eq!(
            Notice::REQUEST_RECEIVED,
            Notice {
                title: "Thank you for reaching out",
                description: "I will contact you shortly",
            }
        );
    }
}
