use contracts::system::users::{UpdateProfileDto, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::system::users::api;

fn optional(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `/profile/:id/edit`
#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notifications = use_notifications();
    let id = params.read_untracked().get("id").unwrap_or_default();

    let loaded = RwSignal::new(Option::<UserProfile>::None);
    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    {
        let id = id.clone();
        spawn_local(async move {
            match api::fetch_profile(&id).await {
                Ok(profile) => {
                    let dto = UpdateProfileDto::from_profile(&profile);
                    let _ = last_name.try_set(dto.last_name);
                    let _ = first_name.try_set(dto.first_name);
                    let _ = phone.try_set(dto.phone);
                    let _ = address.try_set(dto.address.unwrap_or_default());
                    let _ = bio.try_set(dto.bio.unwrap_or_default());
                    let _ = loaded.try_set(Some(profile));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    }

    let back_href = format!("/profile/{}", id);
    let on_save = move |_| {
        let dto = UpdateProfileDto {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            bio: optional(bio.get()),
            address: optional(address.get()),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_error.set(None);
        set_saving.set(true);
        let id = id.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_profile(&id, &dto).await {
                Ok(saved) => {
                    notifications.success("プロフィールを更新しました");
                    navigate(&format!("/profile/{}", saved.id), Default::default());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                    let _ = set_saving.try_set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get() || loaded.with(Option::is_none));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"プロフィール編集"</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--secondary" href=back_href>"キャンセル"</a>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                        {move || if saving.get() { "保存中..." } else { "保存" }}
                    </Button>
                </div>
            </div>

            <div class="page__content form">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || loaded.get().map(|p| view! {
                    <p class="text-muted">{p.email}</p>
                })}

                <div class="form__row">
                    <div class="form__group">
                        <Label>"姓 *"</Label>
                        <Input value=last_name disabled=busy />
                    </div>
                    <div class="form__group">
                        <Label>"名 *"</Label>
                        <Input value=first_name disabled=busy />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"電話番号"</Label>
                    <Input value=phone disabled=busy />
                </div>
                <div class="form__group">
                    <Label>"住所"</Label>
                    <Input value=address disabled=busy />
                </div>
                <div class="form__group">
                    <Label>"自己紹介"</Label>
                    <Textarea value=bio disabled=busy attr:rows=5 />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_are_cleared() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" 札幌市 ".into()), Some("札幌市".into()));
    }
}
