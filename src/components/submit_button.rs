use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SUBMIT_RESET_MS;

/// A flag that switches itself back off a short while after being set.
#[hook]
pub fn use_processing() -> UseStateHandle<bool> {
    let processing = use_state(|| false);
    let active_now = *processing;

    {
        let processing = processing.clone();
        use_effect_with_deps(
            move |active| {
                let reset = active.then(|| {
                    Timeout::new(SUBMIT_RESET_MS, move || processing.set(false))
                });
                move || drop(reset)
            },
            active_now,
        );
    }

    processing
}

fn button_label(processing: bool, label: &str) -> &str {
    if processing {
        "Processing..."
    } else {
        label
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub processing: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn btn-primary" disabled={props.processing}>
            { button_label(props.processing, props.label.as_str()) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_switches_while_processing() {
        assert_eq!(button_label(true, "Book Now"), "Processing...");
        assert_eq!(button_label(false, "Book Now"), "Book Now");
    }
}
