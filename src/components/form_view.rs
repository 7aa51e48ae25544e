use log::warn;
use yew::prelude::*;

use crate::components::field_input::FieldInput;
use crate::components::notification::Notifier;
use crate::components::submit_button::{use_processing, SubmitButton};
use crate::forms::definitions::FormKind;
use crate::forms::state::{FormAction, FormState};

#[derive(Properties, PartialEq)]
pub struct FormViewProps {
    pub kind: FormKind,
}

/// One of the site's forms: renders its fields, validates them as the user
/// moves through, and runs the form's submission handler on submit.
#[function_component(FormView)]
pub fn form_view(props: &FormViewProps) -> Html {
    let kind = props.kind;
    let form = use_reducer(move || FormState::new(kind));
    let notifier = use_context::<Notifier>();
    let processing = use_processing();

    let onsubmit = {
        let form = form.clone();
        let processing = processing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            processing.set(true);

            let outcome = form.submit();
            match &notifier {
                Some(notifier) => notifier.present_outcome(&outcome),
                None => warn!("No notifier available for {}", kind.id()),
            }
            if outcome.is_ok() {
                form.dispatch(FormAction::Reset);
            }
        })
    };

    html! {
        <form id={kind.id()} class="site-form" novalidate={true} onsubmit={onsubmit}>
            <h3>{kind.title()}</h3>
            { for kind.fields().iter().filter_map(|spec| form.field(spec.name).map(|field| (spec, field))).map(|(spec, field)| {
                let name = spec.name;
                let on_input = {
                    let form = form.clone();
                    Callback::from(move |value: String| form.dispatch(FormAction::Input { name, value }))
                };
                let on_blur = {
                    let form = form.clone();
                    Callback::from(move |_: ()| form.dispatch(FormAction::Blur { name }))
                };
                html! {
                    <FieldInput
                        key={name}
                        form_id={kind.id()}
                        spec={*spec}
                        field={field.clone()}
                        on_input={on_input}
                        on_blur={on_blur}
                    />
                }
            }) }
            <SubmitButton label={kind.submit_label()} processing={*processing} />
        </form>
    }
}
