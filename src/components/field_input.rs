use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::definitions::FieldSpec;
use crate::validation::field::{FieldKind, FormField, Indicator};

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub form_id: &'static str,
    pub spec: FieldSpec,
    pub field: FormField,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let FieldInputProps { form_id, spec, field, on_input, on_blur } = props;
    let id = format!("{}-{}", form_id, spec.name);

    let class = classes!(field.has_error_annotation.then_some("error"));
    let style = match field.indicator {
        Indicator::Error => "border-color: #dc2626;",
        Indicator::Success => "border-color: #059669;",
        Indicator::Neutral => "",
    };

    let onblur = {
        let on_blur = on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(()))
    };

    let control = match spec.kind {
        FieldKind::Select => {
            let onchange = {
                let on_input = on_input.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_input.emit(select.value());
                })
            };
            html! {
                <select id={id.clone()} name={spec.name} class={class} style={style} required={spec.required} onchange={onchange} onblur={onblur}>
                    <option value="" selected={field.raw_value.is_empty()}>{spec.placeholder}</option>
                    { for spec.options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={field.raw_value == *value}>{*label}</option>
                    }) }
                </select>
            }
        }
        FieldKind::Textarea => {
            let oninput = {
                let on_input = on_input.clone();
                Callback::from(move |e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    on_input.emit(textarea.value());
                })
            };
            html! {
                <textarea
                    id={id.clone()}
                    name={spec.name}
                    rows="4"
                    placeholder={spec.placeholder}
                    value={field.raw_value.clone()}
                    required={spec.required}
                    class={class}
                    style={style}
                    oninput={oninput}
                    onblur={onblur}
                />
            }
        }
        kind => {
            let oninput = {
                let on_input = on_input.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_input.emit(input.value());
                })
            };
            html! {
                <input
                    id={id.clone()}
                    type={kind.input_type()}
                    name={spec.name}
                    placeholder={spec.placeholder}
                    value={field.raw_value.clone()}
                    required={spec.required}
                    class={class}
                    style={style}
                    oninput={oninput}
                    onblur={onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>
                {spec.label}
                if spec.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            {control}
            if let Some(message) = &field.error_message {
                <div class="error-message">{message}</div>
            }
        </div>
    }
}
