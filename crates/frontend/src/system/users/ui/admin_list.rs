use contracts::system::users::{AdminUpdateUserDto, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::date_utils::format_date;
use crate::system::users::api;

fn replace(users: &mut [UserProfile], saved: UserProfile) {
    if let Some(existing) = users.iter_mut().find(|u| u.id == saved.id) {
        *existing = saved;
    }
}

/// `/admin/users`
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserProfile>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let modal = use_modal();
    let notifications = use_notifications();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_all_users().await {
                Ok(data) => {
                    let _ = users.try_set(data);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load_data());

    let toggle_admin = move |user: UserProfile| {
        let dto = AdminUpdateUserDto {
            is_admin: Some(!user.is_admin),
            ..Default::default()
        };
        spawn_local(async move {
            match api::admin_update_user(&user.id, &dto).await {
                Ok(saved) => users.update(|list| replace(list, saved)),
                Err(e) => notifications.error(e),
            }
        });
    };

    let request_delete = move |user: UserProfile| {
        let id = user.id.clone();
        modal.confirm(
            "ユーザーの削除",
            format!("{} を削除しますか？アカウントも削除されます。", user.display_name()),
            Callback::new(move |_| {
                let id = id.clone();
                spawn_local(async move {
                    match api::admin_delete_user(&id).await {
                        Ok(()) => {
                            users.update(|list| list.retain(|u| u.id != id));
                            notifications.success("ユーザーを削除しました");
                        }
                        Err(e) => notifications.error(e),
                    }
                });
            }),
        );
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"ユーザー管理"</h1>
                    <Badge>{move || users.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "読み込み中..." } else { "更新" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"氏名"</TableHeaderCell>
                                <TableHeaderCell>"メールアドレス"</TableHeaderCell>
                                <TableHeaderCell>"電話番号"</TableHeaderCell>
                                <TableHeaderCell>"権限"</TableHeaderCell>
                                <TableHeaderCell>"登録日"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || users.get()
                                key=|user| (user.id.clone(), user.updated_at.clone(), user.is_admin)
                                children=move |user| {
                                    let for_toggle = user.clone();
                                    let for_delete = user.clone();
                                    let toggle_label = if user.is_admin { "管理者を解除" } else { "管理者にする" };
                                    let profile_href = format!("/profile/{}", user.id);
                                    let display_name = user.display_name();
                                    let email = user.email.clone();
                                    let phone = user.phone.clone();
                                    let is_admin = user.is_admin;
                                    let created_at = format_date(&user.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href=profile_href>{display_name}</a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {if is_admin {
                                                    view! { <span class="badge badge--info">"管理者"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--neutral">"一般"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_admin(for_toggle.clone())
                                                    >
                                                        {toggle_label}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| request_delete(for_delete.clone())
                                                    >
                                                        "削除"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
