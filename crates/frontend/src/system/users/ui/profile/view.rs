use contracts::system::users::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::is_owner;
use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::date_utils::format_date;
use crate::system::auth::context::{use_auth, use_session};
use crate::system::users::api;

/// `/profile`: the signed-in user's own record
#[component]
pub fn OwnProfilePage() -> impl IntoView {
    let profile = RwSignal::new(Option::<UserProfile>::None);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_own_profile().await {
            Ok(found) => {
                let _ = profile.try_set(Some(found));
            }
            Err(e) => {
                let _ = error.try_set(Some(e));
            }
        }
    });

    view! { <ProfileShell profile=profile error=error /> }
}

/// `/profile/:id`
#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let profile = RwSignal::new(Option::<UserProfile>::None);
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        profile.set(None);
        error.set(None);
        spawn_local(async move {
            match api::fetch_profile(&id).await {
                Ok(found) => {
                    let _ = profile.try_set(Some(found));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    });

    view! { <ProfileShell profile=profile error=error /> }
}

#[component]
fn ProfileShell(
    profile: RwSignal<Option<UserProfile>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="page profile">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || match profile.get() {
                Some(p) => view! { <ProfileCard profile=p /> }.into_any(),
                None if error.with(Option::is_none) => {
                    view! { <p>"読み込み中..."</p> }.into_any()
                }
                None => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let session = use_session();
    let modal = use_modal();
    let notifications = use_notifications();
    let navigate = use_navigate();

    // Rendered under RequireAuth, so the session is settled by now
    let is_admin = session.is_admin.get_untracked();
    let can_edit = is_admin || auth_state.with_untracked(|a| is_owner(a, &profile));
    let can_delete = is_admin;

    let edit_href = format!("/profile/{}/edit", profile.id);
    let id = profile.id.clone();
    let name = profile.display_name();
    let on_delete = move |_| {
        let id = id.clone();
        let navigate = navigate.clone();
        modal.confirm(
            "ユーザーの削除",
            format!("{} を削除しますか？アカウントも削除されます。", name),
            Callback::new(move |_| {
                let id = id.clone();
                let navigate = navigate.clone();
                spawn_local(async move {
                    match api::admin_delete_user(&id).await {
                        Ok(()) => {
                            notifications.success("ユーザーを削除しました");
                            navigate("/admin/users", Default::default());
                        }
                        Err(e) => notifications.error(e),
                    }
                });
            }),
        );
    };

    let or_dash = |v: &str| {
        if v.trim().is_empty() {
            "-".to_string()
        } else {
            v.to_string()
        }
    };

    view! {
        <article class="profile__card">
            <header class="profile__header">
                <h1>{profile.display_name()}</h1>
                {profile.is_admin.then(|| view! { <span class="badge badge--info">"管理者"</span> })}
            </header>
            <dl class="profile__fields">
                <dt>"メールアドレス"</dt>
                <dd>{profile.email.clone()}</dd>
                <dt>"電話番号"</dt>
                <dd>{or_dash(&profile.phone)}</dd>
                <dt>"住所"</dt>
                <dd>{or_dash(profile.address.as_deref().unwrap_or_default())}</dd>
                <dt>"自己紹介"</dt>
                <dd class="profile__bio">{or_dash(profile.bio.as_deref().unwrap_or_default())}</dd>
                <dt>"登録日"</dt>
                <dd>{format_date(&profile.created_at)}</dd>
            </dl>
            <div class="profile__actions">
                {can_edit.then(|| view! {
                    <a class="button button--primary" href=edit_href>"編集"</a>
                })}
                {can_delete.then(|| view! {
                    <button class="button button--danger" on:click=on_delete>"削除"</button>
                })}
            </div>
        </article>
    }
}
