use contracts::domain::a001_catalog_item::presentation::format_price;
use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemPatch};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::ItemFormDialog;
use crate::domain::a001_catalog_item::api;
use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::components::ui::AvailabilityBadge;
use crate::shared::date_utils::format_date;

#[derive(Clone)]
enum Editing {
    Create,
    Edit(CatalogItem),
}

/// Swap in the server's copy of an item, or add it on top if new
fn upsert(items: &mut Vec<CatalogItem>, saved: CatalogItem) {
    match items.iter_mut().find(|i| i.id == saved.id) {
        Some(existing) => *existing = saved,
        None => items.insert(0, saved),
    }
}

/// `/admin/items`
#[component]
pub fn AdminItemsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<CatalogItem>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(Option::<Editing>::None);
    let modal = use_modal();
    let notifications = use_notifications();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::admin_fetch_items().await {
                Ok(data) => {
                    let _ = items.try_set(data);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load_data());

    let on_saved = Callback::new(move |saved: CatalogItem| {
        items.update(|list| upsert(list, saved));
        editing.set(None);
        notifications.success("商品を保存しました");
    });

    let toggle_availability = move |item: CatalogItem| {
        let patch = CatalogItemPatch::availability(!item.is_available);
        spawn_local(async move {
            match api::update_item(&item.id, &patch).await {
                Ok(saved) => items.update(|list| upsert(list, saved)),
                Err(e) => notifications.error(e),
            }
        });
    };

    let request_delete = move |item: CatalogItem| {
        let id = item.id.clone();
        modal.confirm(
            "商品の削除",
            format!("「{}」を削除しますか？この操作は取り消せません。", item.name),
            Callback::new(move |_| {
                let id = id.clone();
                spawn_local(async move {
                    // The row goes away only once the server has confirmed
                    match api::delete_item(&id).await {
                        Ok(()) => {
                            items.update(|list| list.retain(|i| i.id != id));
                            notifications.success("商品を削除しました");
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
                    <h1 class="page__title">"商品管理"</h1>
                    <Badge>{move || items.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(Editing::Create))
                    >
                        "+ 新規追加"
                    </Button>
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
                                <TableHeaderCell>"商品名"</TableHeaderCell>
                                <TableHeaderCell>"カテゴリー"</TableHeaderCell>
                                <TableHeaderCell>"価格"</TableHeaderCell>
                                <TableHeaderCell>"在庫"</TableHeaderCell>
                                <TableHeaderCell>"状態"</TableHeaderCell>
                                <TableHeaderCell>"登録日"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|item| (item.id.clone(), item.updated_at.clone())
                                children=move |item| {
                                    let for_edit = item.clone();
                                    let for_toggle = item.clone();
                                    let for_delete = item.clone();
                                    let toggle_label = if item.is_available { "準備中にする" } else { "販売中にする" };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href=format!("/menu/{}", item.id)>{item.name.clone()}</a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.category.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <TableCellLayout>{format_price(item.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <TableCellLayout>{item.stock}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <AvailabilityBadge is_available=item.is_available />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(&item.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing.set(Some(Editing::Edit(for_edit.clone())))
                                                    >
                                                        "編集"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_availability(for_toggle.clone())
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

                {move || editing.get().map(|mode| {
                    let item = match mode {
                        Editing::Create => None,
                        Editing::Edit(item) => Some(item),
                    };
                    view! {
                        <ItemFormDialog
                            item=item
                            on_close=Callback::new(move |_| editing.set(None))
                            on_saved=on_saved
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            description: None,
            price: 100.0,
            category: None,
            is_available: true,
            stock: 0,
            image_url: None,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list = vec![item("a", "A"), item("b", "B")];
        upsert(&mut list, item("b", "B2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "B2");
    }

    #[test]
    fn test_upsert_puts_new_item_first() {
        let mut list = vec![item("a", "A")];
        upsert(&mut list, item("c", "C"));
        assert_eq!(list[0].id, "c");
    }
}
