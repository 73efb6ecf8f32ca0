use contracts::domain::a001_catalog_item::{CatalogItem, CatalogItemDto, CatalogItemPatch};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_catalog_item::api;
use crate::shared::uploads::ImageUrlField;

/// Raw text of the item form, before parsing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category: String,
    pub is_available: bool,
    pub stock: String,
}

impl ItemFormInput {
    pub fn empty() -> Self {
        Self {
            is_available: true,
            stock: "0".into(),
            ..Default::default()
        }
    }

    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            image_url: item.image_url.clone().unwrap_or_default(),
            category: item.category.clone().unwrap_or_default(),
            is_available: item.is_available,
            stock: item.stock.to_string(),
        }
    }

    /// Client-side checks; the server validates again
    pub fn to_dto(&self) -> Result<CatalogItemDto, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("商品名を入力してください".into());
        }
        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => return Err("価格は0以上の数値で入力してください".into()),
        };
        let stock = match self.stock.trim() {
            "" => 0,
            raw => match raw.parse::<i64>() {
                Ok(s) if s >= 0 => s,
                _ => return Err("在庫数は0以上の整数で入力してください".into()),
            },
        };

        Ok(CatalogItemDto {
            name: name.to_string(),
            description: Some(self.description.trim().to_string()),
            price: Some(price),
            image_url: Some(self.image_url.trim().to_string()),
            category: Some(self.category.trim().to_string()),
            is_available: Some(self.is_available),
            stock: Some(stock),
        })
    }

    /// Full replacement of the editable fields; blanks clear optional ones
    pub fn to_patch(&self) -> Result<CatalogItemPatch, String> {
        let dto = self.to_dto()?;
        Ok(CatalogItemPatch {
            name: Some(dto.name),
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            category: dto.category,
            is_available: dto.is_available,
            stock: dto.stock,
        })
    }
}

/// Create (no `item`) or edit dialog. `on_saved` receives the stored item.
#[component]
pub fn ItemFormDialog(
    item: Option<CatalogItem>,
    on_close: Callback<()>,
    on_saved: Callback<CatalogItem>,
) -> impl IntoView {
    let initial = item
        .as_ref()
        .map(ItemFormInput::from_item)
        .unwrap_or_else(ItemFormInput::empty);
    let editing_id = item.as_ref().map(|i| i.id.clone());
    let title = if editing_id.is_some() { "商品を編集" } else { "商品を追加" };

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(initial.price);
    let image_url = RwSignal::new(initial.image_url);
    let category = RwSignal::new(initial.category);
    let is_available = RwSignal::new(initial.is_available);
    let stock = RwSignal::new(initial.stock);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let input = ItemFormInput {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image_url: image_url.get(),
            category: category.get(),
            is_available: is_available.get(),
            stock: stock.get(),
        };

        set_error.set(None);
        let editing_id = editing_id.clone();
        let request = match &editing_id {
            Some(_) => input.to_patch().map(|p| (None, Some(p))),
            None => input.to_dto().map(|d| (Some(d), None)),
        };
        let (dto, patch) = match request {
            Ok(parts) => parts,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match (editing_id, dto, patch) {
                (Some(id), _, Some(patch)) => api::update_item(&id, &patch).await,
                (_, Some(dto), _) => api::create_item(&dto).await,
                _ => Err("入力内容が不正です".to_string()),
            };
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"商品名 *"</Label>
                        <Input value=name disabled=busy />
                    </div>
                    <div class="form__group">
                        <Label>"説明"</Label>
                        <Textarea value=description disabled=busy attr:rows=4 />
                    </div>
                    <div class="form__group">
                        <Label>"価格 (円) *"</Label>
                        <Input value=price input_type=InputType::Number disabled=busy />
                    </div>
                    <div class="form__group">
                        <Label>"在庫数"</Label>
                        <Input value=stock input_type=InputType::Number disabled=busy />
                    </div>
                    <div class="form__group">
                        <Label>"カテゴリー"</Label>
                        <Input value=category disabled=busy />
                    </div>
                    <div class="form__group">
                        <Label>"画像"</Label>
                        <ImageUrlField value=image_url disabled=busy />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=is_available label="販売中" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=busy
                    >
                        "キャンセル"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=busy
                    >
                        {move || if saving.get() { "保存中..." } else { "保存" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ItemFormInput {
        ItemFormInput {
            name: " ローダー除雪 ".into(),
            description: "".into(),
            price: "50000".into(),
            image_url: "".into(),
            category: "除雪".into(),
            is_available: true,
            stock: "3".into(),
        }
    }

    #[test]
    fn test_valid_input_becomes_dto() {
        let dto = input().to_dto().unwrap();
        assert_eq!(dto.name, "ローダー除雪");
        assert_eq!(dto.price, Some(50000.0));
        assert_eq!(dto.stock, Some(3));
        assert_eq!(dto.is_available, Some(true));
    }

    #[test]
    fn test_name_is_required() {
        let mut i = input();
        i.name = "   ".into();
        assert_eq!(i.to_dto().unwrap_err(), "商品名を入力してください");
    }

    #[test]
    fn test_price_must_be_non_negative_number() {
        for bad in ["", "abc", "-1", "NaN"] {
            let mut i = input();
            i.price = bad.into();
            assert_eq!(
                i.to_dto().unwrap_err(),
                "価格は0以上の数値で入力してください",
                "{}",
                bad
            );
        }
        let mut i = input();
        i.price = "0".into();
        assert!(i.to_dto().is_ok());
    }

    #[test]
    fn test_stock_must_be_non_negative_integer() {
        let mut i = input();
        i.stock = "-2".into();
        assert!(i.to_dto().is_err());
        i.stock = "1.5".into();
        assert!(i.to_dto().is_err());
        i.stock = "".into();
        assert_eq!(i.to_dto().unwrap().stock, Some(0));
    }

    #[test]
    fn test_patch_replaces_every_field() {
        let patch = input().to_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("ローダー除雪"));
        assert_eq!(patch.description.as_deref(), Some(""));
        assert_eq!(patch.stock, Some(3));
    }
}
