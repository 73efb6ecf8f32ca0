use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Aggregate
// ============================================================================

/// Позиция меню: бронируемая услуга или товар
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Currency-agnostic amount, always >= 0
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub is_available: bool,
    pub stock: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

impl CatalogItem {
    /// Создать новую позицию из DTO (id и временные метки проставляются здесь)
    pub fn new_for_insert(dto: CatalogItemDto) -> Result<Self, String> {
        dto.validate()?;
        let now = Utc::now().to_rfc3339();
        let item = Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name.trim().to_string(),
            description: non_empty(dto.description),
            price: dto.price.unwrap_or_default(),
            category: non_empty(dto.category),
            is_available: dto.is_available.unwrap_or(true),
            stock: dto.stock.unwrap_or(0) as u32,
            image_url: non_empty(dto.image_url),
            created_at: now.clone(),
            updated_at: now,
        };
        item.validate()?;
        Ok(item)
    }

    /// Применить частичное обновление. `updated_at` сдвигается только при успехе.
    pub fn apply_patch(&mut self, patch: &CatalogItemPatch) -> Result<(), String> {
        patch.validate()?;

        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = &patch.description {
            next.description = non_empty(Some(description.clone()));
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(image_url) = &patch.image_url {
            next.image_url = non_empty(Some(image_url.clone()));
        }
        if let Some(category) = &patch.category {
            next.category = non_empty(Some(category.clone()));
        }
        if let Some(is_available) = patch.is_available {
            next.is_available = is_available;
        }
        if let Some(stock) = patch.stock {
            next.stock = stock as u32;
        }
        next.touch();
        next.validate()?;

        *self = next;
        Ok(())
    }

    pub fn touch(&mut self) {
        let now = Utc::now();
        // created_at <= updated_at must hold even if the stored clock was ahead
        let floor = parse_rfc3339(&self.created_at).filter(|created| *created > now);
        self.updated_at = floor.unwrap_or(now).to_rfc3339();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("商品名は必須です".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("価格は0以上の数値で指定してください".into());
        }
        if let (Some(created), Some(updated)) = (
            parse_rfc3339(&self.created_at),
            parse_rfc3339(&self.updated_at),
        ) {
            if created > updated {
                return Err("作成日時が更新日時より後になっています".into());
            }
        }
        Ok(())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Тело запроса на создание позиции
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItemDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl CatalogItemDto {
    pub fn validate(&self) -> Result<(), String> {
        let price_ok = matches!(self.price, Some(p) if p.is_finite() && p >= 0.0);
        if self.name.trim().is_empty() || !price_ok {
            return Err("商品名と有効な価格が必要です".into());
        }
        validate_stock(self.stock)
    }
}

/// Частичное обновление: `None` означает «не трогать поле»
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl CatalogItemPatch {
    /// Patch that only flips availability (admin quick toggle)
    pub fn availability(is_available: bool) -> Self {
        Self {
            is_available: Some(is_available),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("商品名は必須です".into());
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err("価格は0以上の数値で指定してください".into());
            }
        }
        validate_stock(self.stock)
    }
}

fn validate_stock(stock: Option<i64>) -> Result<(), String> {
    match stock {
        Some(s) if s < 0 || s > i64::from(u32::MAX) => {
            Err("在庫数は0以上の整数で指定してください".into())
        }
        _ => Ok(()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, price: Option<f64>) -> CatalogItemDto {
        CatalogItemDto {
            name: name.into(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_for_insert_applies_defaults() {
        let item = CatalogItem::new_for_insert(CatalogItemDto {
            name: "  抹茶パフェ ".into(),
            description: Some("".into()),
            price: Some(980.0),
            category: Some("スイーツ".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(item.name, "抹茶パフェ");
        assert_eq!(item.description, None);
        assert_eq!(item.category.as_deref(), Some("スイーツ"));
        assert!(item.is_available);
        assert_eq!(item.stock, 0);
        assert_eq!(item.created_at, item.updated_at);
        assert!(Uuid::parse_str(&item.id).is_ok());
    }

    #[test]
    fn test_create_requires_name_and_valid_price() {
        let expected = Err("商品名と有効な価格が必要です".to_string());
        assert_eq!(dto("", Some(100.0)).validate(), expected);
        assert_eq!(dto("Tea", None).validate(), expected);
        assert_eq!(dto("Tea", Some(-1.0)).validate(), expected);
        assert_eq!(dto("Tea", Some(f64::NAN)).validate(), expected);
        assert!(dto("Tea", Some(0.0)).validate().is_ok());
    }

    #[test]
    fn test_create_rejects_negative_stock() {
        let mut d = dto("Tea", Some(100.0));
        d.stock = Some(-3);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_apply_patch_updates_only_given_fields() {
        let mut item = CatalogItem::new_for_insert(dto("Tea", Some(500.0))).unwrap();
        let before = item.clone();

        item.apply_patch(&CatalogItemPatch {
            price: Some(650.0),
            stock: Some(12),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(item.name, before.name);
        assert_eq!(item.price, 650.0);
        assert_eq!(item.stock, 12);
        assert_eq!(item.created_at, before.created_at);
        assert!(parse_rfc3339(&item.updated_at) >= parse_rfc3339(&before.updated_at));
    }

    #[test]
    fn test_failed_patch_leaves_item_untouched() {
        let mut item = CatalogItem::new_for_insert(dto("Tea", Some(500.0))).unwrap();
        let before = item.clone();

        let result = item.apply_patch(&CatalogItemPatch {
            name: Some("Green tea".into()),
            price: Some(-10.0),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(item, before);
    }

    #[test]
    fn test_availability_patch() {
        let mut item = CatalogItem::new_for_insert(dto("Tea", Some(500.0))).unwrap();
        item.apply_patch(&CatalogItemPatch::availability(false)).unwrap();
        assert!(!item.is_available);
    }

    #[test]
    fn test_validate_detects_inverted_timestamps() {
        let mut item = CatalogItem::new_for_insert(dto("Tea", Some(500.0))).unwrap();
        item.created_at = "2024-05-01T00:00:00Z".into();
        item.updated_at = "2024-04-01T00:00:00Z".into();
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_touch_never_moves_before_created_at() {
        let mut item = CatalogItem::new_for_insert(dto("Tea", Some(500.0))).unwrap();
        item.created_at = "2999-01-01T00:00:00+00:00".into();
        item.touch();
        assert!(item.validate().is_ok());
    }
}
