//! Datasheet upload form.
//!
//! File picker plus submit button. All state lives in the
//! [`UploadController`]; this component only forwards events and reads
//! its signals.

use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::controller::UploadController;
use crate::services::HttpTransport;
use crate::ACCEPTED_EXTENSIONS;

#[component]
pub fn UploadForm(controller: UploadController<HttpTransport>) -> impl IntoView {
    let is_submitting = controller.is_submitting();
    let error_message = controller.error_message();
    let selected_name = controller.selected_name();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // Cancelling the dialog leaves the previous selection in place
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            controller.select_file(file);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    view! {
        <div class="upload-section">
            <form class="upload-form" on:submit=on_submit>
                <input
                    type="file"
                    id="fileInput"
                    accept=ACCEPTED_EXTENSIONS
                    on:change=on_file_change
                />

                <Show
                    when=move || selected_name.get().is_some()
                    fallback=|| view! { }
                >
                    <div class="upload-hint">
                        {move || selected_name.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    type="submit"
                    class="upload-button"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() {
                        "Generando…"
                    } else {
                        "Generar Programa"
                    }}
                </button>
            </form>

            <Show
                when=move || error_message.get().is_some()
                fallback=|| view! { }
            >
                <p class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
