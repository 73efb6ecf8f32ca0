//! Display rules for a catalog entry (card and detail page).

pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.svg";
pub const NO_DESCRIPTION: &str = "説明はありません。";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Price as JPY currency text, e.g. `￥1,200`.
///
/// Yen has no minor unit, so the amount is rounded half away from zero.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "￥-".to_string();
    }
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}￥{}", sign, group_thousands(rounded.abs() as u64))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Description preview for a card. Counts characters, not bytes.
pub fn truncate_description(description: Option<&str>, max_chars: usize) -> String {
    let text = description.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}…", head.trim_end())
}

pub fn availability_label(is_available: bool) -> &'static str {
    if is_available {
        "販売中"
    } else {
        "準備中"
    }
}

/// Badge variant understood by the shared `Badge` component
pub fn availability_badge_variant(is_available: bool) -> &'static str {
    if is_available {
        "success"
    } else {
        "neutral"
    }
}

/// Resolve an item image reference to something an `<img src>` can load.
pub fn image_src(image_url: Option<&str>) -> String {
    match image_url.map(str::trim) {
        Some(url) if !url.is_empty() => {
            if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
                url.to_string()
            } else {
                format!("/{}", url)
            }
        }
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "￥0");
        assert_eq!(format_price(980.0), "￥980");
        assert_eq!(format_price(1200.0), "￥1,200");
        assert_eq!(format_price(1234567.0), "￥1,234,567");
        assert_eq!(format_price(1499.5), "￥1,500");
        assert_eq!(format_price(f64::NAN), "￥-");
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description(None, 10), NO_DESCRIPTION);
        assert_eq!(truncate_description(Some("   "), 10), NO_DESCRIPTION);
        assert_eq!(truncate_description(Some("短い説明"), 10), "短い説明");
        assert_eq!(
            truncate_description(Some("季節の果物をたっぷり使ったタルトです"), 6),
            "季節の果物を…"
        );
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(availability_label(true), "販売中");
        assert_eq!(availability_label(false), "準備中");
        assert_ne!(
            availability_badge_variant(true),
            availability_badge_variant(false)
        );
    }

    #[test]
    fn test_image_src() {
        assert_eq!(image_src(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_src(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_src(Some("https://cdn.example.com/a.png")),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(image_src(Some("/uploads/a.png")), "/uploads/a.png");
        assert_eq!(image_src(Some("uploads/a.png")), "/uploads/a.png");
    }
}
