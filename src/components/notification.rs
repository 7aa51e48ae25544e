use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NOTIFICATION_DISMISS_MS;
use crate::error::SubmissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success!",
            NotificationKind::Error => "Error!",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#059669",
            NotificationKind::Error => "#dc2626",
        }
    }
}

/// The page's single notification. Every `present` overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub kind: NotificationKind,
    pub auto_dismiss_deadline: Option<DateTime<Utc>>,
}

pub enum NotificationAction {
    Present {
        message: String,
        kind: NotificationKind,
        at: DateTime<Utc>,
    },
    Dismiss,
    /// An auto-dismiss timer fired for the cycle ending at `deadline`.
    Expire { deadline: DateTime<Utc> },
}

impl NotificationState {
    pub fn deadline_after(at: DateTime<Utc>) -> DateTime<Utc> {
        at + Duration::milliseconds(i64::from(NOTIFICATION_DISMISS_MS))
    }

    /// Shows `message` and returns the deadline its auto-dismiss is tied to.
    pub fn present(&mut self, message: String, kind: NotificationKind, at: DateTime<Utc>) -> DateTime<Utc> {
        let deadline = Self::deadline_after(at);
        self.visible = true;
        self.message = message;
        self.kind = kind;
        self.auto_dismiss_deadline = Some(deadline);
        deadline
    }

    /// Hides the notification. Returns false if it was already hidden.
    pub fn dismiss(&mut self) -> bool {
        self.auto_dismiss_deadline = None;
        std::mem::replace(&mut self.visible, false)
    }

    /// Hides the notification only if `deadline` belongs to the cycle
    /// currently shown. Timers left over from earlier cycles do nothing.
    pub fn expire(&mut self, deadline: DateTime<Utc>) -> bool {
        if self.visible && self.auto_dismiss_deadline == Some(deadline) {
            self.dismiss()
        } else {
            false
        }
    }
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NotificationAction::Present { message, kind, at } => {
                next.present(message, kind, at);
                true
            }
            NotificationAction::Dismiss => next.dismiss(),
            NotificationAction::Expire { deadline } => next.expire(deadline),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handle for showing and hiding the page notification, provided to the
/// tree by [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier {
    present: Callback<(String, NotificationKind)>,
    dismiss: Callback<()>,
}

impl Notifier {
    pub fn present(&self, message: impl Into<String>, kind: NotificationKind) {
        self.present.emit((message.into(), kind));
    }

    pub fn present_outcome(&self, outcome: &Result<&'static str, SubmissionError>) {
        match outcome {
            Ok(message) => self.present(*message, NotificationKind::Success),
            Err(e) => self.present(e.to_string(), NotificationKind::Error),
        }
    }

    pub fn dismiss(&self) {
        self.dismiss.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::default);
    let timer = use_mut_ref(|| None::<Timeout>);

    let notifier = {
        let state = state.clone();
        use_memo(
            move |_| {
                let present = {
                    let state = state.clone();
                    let timer = timer.clone();
                    Callback::from(move |(message, kind): (String, NotificationKind)| {
                        debug!("Presenting {:?} notification: {}", kind, message);
                        let at = Utc::now();
                        let deadline = NotificationState::deadline_after(at);
                        state.dispatch(NotificationAction::Present { message, kind, at });

                        let state = state.clone();
                        // Replacing the handle drops the previous cycle's timer.
                        *timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_DISMISS_MS, move || {
                            state.dispatch(NotificationAction::Expire { deadline });
                        }));
                    })
                };

                let dismiss = Callback::from(move |_: ()| {
                    timer.borrow_mut().take();
                    state.dispatch(NotificationAction::Dismiss);
                });

                Notifier { present, dismiss }
            },
            (),
        )
    };

    {
        let notifier = notifier.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                notifier.dismiss();
            }
        });
    }

    let on_close = {
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| notifier.dismiss())
    };
    // Clicks inside the content never reach the backdrop handler.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let display = if state.visible { "display: block;" } else { "display: none;" };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .modal-content {
                        position: relative;
                        max-width: 420px;
                        margin: 15vh auto 0;
                        padding: 2rem;
                        background: #fff;
                        border-radius: 12px;
                        text-align: center;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.2);
                    }
                    .modal-content i {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .modal .close {
                        position: absolute;
                        top: 0.75rem;
                        right: 1rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                        color: #6b7280;
                    }
                "#}
            </style>
            <div id="success-modal" class="modal" style={display} onclick={on_close.clone()}>
                <div class="modal-content" onclick={keep_open}>
                    <span class="close" onclick={on_close}>{"×"}</span>
                    <i class={state.kind.icon()} style={format!("color: {};", state.kind.color())}></i>
                    <h3>{state.kind.title()}</h3>
                    <p id="modal-message">{&state.message}</p>
                </div>
            </div>
        </ContextProvider<Notifier>>
    }
}
