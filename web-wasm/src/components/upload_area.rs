//! Upload area component
//!
//! Single-file intake by click or drag-and-drop. Validation happens in the
//! controller before the file is read; the preview read is tagged with the
//! selection generation so a slow read of a replaced file never lands.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

use car_ai_common::form::{ClassifierForm, Generation};

#[component]
pub fn UploadArea(form: RwSignal<ClassifierForm>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = move |file: File| {
        let mut accepted = None;
        form.update(|f| {
            accepted = f
                .select_image(&file.name(), &file.type_(), file.size() as u64)
                .ok();
        });
        // A rejected file is already recorded in the form; nothing to read.
        let Some(generation) = accepted else {
            return;
        };
        read_file(file, generation, form);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(file) = dt.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        // Open the file picker through a detached input element
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let input: web_sys::HtmlInputElement = document
            .create_element("input")
            .expect("create input")
            .dyn_into()
            .expect("input element");
        input.set_type("file");
        input.set_accept("image/*");

        let picker = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(file) = picker.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    let preview = move || form.read().preview().map(|p| p.to_string());

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=move || preview().is_some()
                fallback=|| view! {
                    <div class="upload-icon">"📷"</div>
                    <p><strong>"Click to upload"</strong>" or drag and drop"</p>
                    <p class="text-muted">"PNG, JPG or JPEG (MAX. 10MB)"</p>
                }
            >
                <img class="preview" src=move || preview().unwrap_or_default() alt="Preview" />
            </Show>
        </div>
    }
}

fn read_file(file: File, generation: Generation, form: RwSignal<ClassifierForm>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            form.update(|f| f.preview_failed(generation));
            return;
        }
    };

    let loaded_reader = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let data_url = loaded_reader.result().ok().and_then(|v| v.as_string());
        form.update(|f| match data_url.clone() {
            Some(data_url) => f.preview_ready(generation, data_url),
            None => f.preview_failed(generation),
        });
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        form.update(|f| f.preview_failed(generation));
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    if reader.read_as_data_url(&file).is_err() {
        form.update(|f| f.preview_failed(generation));
    }
}
