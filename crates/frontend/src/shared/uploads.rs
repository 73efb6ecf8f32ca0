//! Image upload for admin forms.

use contracts::domain::a001_catalog_item::presentation::image_src;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlInputElement};

use crate::shared::api_utils::{api_url, read_json, send_error};
use crate::system::auth::storage;

const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// Checked before sending so the user gets the message without a round trip
fn precheck(content_type: &str, size: f64) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err("画像ファイルのみアップロードできます".into());
    }
    if size <= 0.0 {
        return Err("ファイルが空です".into());
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("ファイルサイズは5MB以下にしてください".into());
    }
    Ok(())
}

/// Upload one image; returns the public URL (`/uploads/<name>`)
pub async fn upload_image(file: web_sys::File) -> Result<String, String> {
    precheck(&file.type_(), file.size())?;

    let auth_header = storage::bearer_header().ok_or("ログインしてください")?;
    let form = FormData::new().map_err(|_| "フォームを作成できません".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "フォームを作成できません".to_string())?;

    let response = Request::post(&api_url("/api/upload"))
        .header("Authorization", &auth_header)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(send_error)?;

    read_json::<UploadResponse>(response).await.map(|r| r.url)
}

/// Text field for an image URL with a file picker that fills it in
#[component]
pub fn ImageUrlField(
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_uploading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => value.set(url),
                Err(e) => set_error.set(Some(e)),
            }
            set_uploading.set(false);
            input.set_value("");
        });
    };

    view! {
        <div class="image-field">
            <input
                type="text"
                placeholder="https://... または /uploads/..."
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <input
                type="file"
                accept="image/*"
                on:change=on_file
                disabled=move || disabled.get() || uploading.get()
            />
            {move || uploading.get().then(|| view! { <span class="text-muted">"アップロード中..."</span> })}
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || {
                let url = value.get();
                (!url.trim().is_empty()).then(|| view! {
                    <img class="image-field__preview" src=image_src(Some(&url)) alt="プレビュー" />
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck() {
        assert!(precheck("image/png", 1024.0).is_ok());
        assert_eq!(
            precheck("application/pdf", 1024.0).unwrap_err(),
            "画像ファイルのみアップロードできます"
        );
        assert_eq!(precheck("image/jpeg", 0.0).unwrap_err(), "ファイルが空です");
        assert_eq!(
            precheck("image/jpeg", MAX_UPLOAD_BYTES + 1.0).unwrap_err(),
            "ファイルサイズは5MB以下にしてください"
        );
    }
}
