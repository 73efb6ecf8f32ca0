use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Запись блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author_id: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    /// Plain-text preview for list cards. Content may carry sanitized HTML,
    /// tags are dropped and whitespace collapsed.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = plain_text(&self.content);
        if text.chars().count() <= max_chars {
            return text;
        }
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head.trim_end())
    }
}

fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Тело запроса на создание/изменение записи
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl PostDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("タイトルを入力してください".into());
        }
        if self.content.trim().is_empty() {
            return Err("内容を入力してください".into());
        }
        Ok(())
    }

    pub fn normalized_image_url(&self) -> Option<String> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Query string of `GET /api/posts`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub category: Option<i64>,
}

impl PostListQuery {
    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title_then_content() {
        let mut dto = PostDto::default();
        assert_eq!(dto.validate(), Err("タイトルを入力してください".into()));
        dto.title = "新メニューのお知らせ".into();
        assert_eq!(dto.validate(), Err("内容を入力してください".into()));
        dto.content = "本日より提供開始です。".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_list_query_bounds() {
        assert_eq!(PostListQuery::default().limit(), DEFAULT_PAGE_SIZE);
        let q = PostListQuery {
            limit: Some(0),
            offset: Some(40),
            category: None,
        };
        assert_eq!(q.limit(), 1);
        assert_eq!(q.offset(), 40);
        let q = PostListQuery {
            limit: Some(10_000),
            ..Default::default()
        };
        assert_eq!(q.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_excerpt_drops_markup() {
        let post = Post {
            id: 1,
            title: "t".into(),
            content: "<p>春の<strong>新メニュー</strong></p>\n<p>ご予約受付中</p>".into(),
            image_url: None,
            author_id: "a".into(),
            category_id: None,
            created_at: "2024-04-01T00:00:00Z".into(),
            updated_at: "2024-04-01T00:00:00Z".into(),
        };
        assert_eq!(post.excerpt(100), "春の 新メニュー ご予約受付中");
        assert_eq!(post.excerpt(2), "春の…");
    }

    #[test]
    fn test_blank_image_url_is_dropped() {
        let dto = PostDto {
            image_url: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(dto.normalized_image_url(), None);
    }
}
