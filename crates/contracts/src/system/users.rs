use serde::{Deserialize, Serialize};

/// Профиль пользователя (таблица `users`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Link to the identity account; empty until provisioned
    #[serde(default)]
    pub account_id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Family name first, as shown across the site
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.last_name.trim(), self.first_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// Self-service profile form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl UpdateProfileDto {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone: profile.phone.clone(),
            bio: profile.bio.clone(),
            address: profile.address.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.last_name.trim().is_empty() {
            return Err("姓を入力してください".into());
        }
        if self.first_name.trim().is_empty() {
            return Err("名を入力してください".into());
        }
        let phone = self.phone.trim();
        if !phone.is_empty()
            && !phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | ' ' | '(' | ')'))
        {
            return Err("電話番号の形式が正しくありません".into());
        }
        Ok(())
    }
}

/// Admin-side update: any subset of profile fields plus the admin flag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "p1".into(),
            account_id: Some("a1".into()),
            email: "hanako@example.com".into(),
            first_name: "花子".into(),
            last_name: "佐藤".into(),
            phone: String::new(),
            bio: None,
            address: None,
            is_admin: false,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_display_name() {
        let mut p = profile();
        assert_eq!(p.display_name(), "佐藤 花子");
        p.first_name.clear();
        p.last_name.clear();
        assert_eq!(p.display_name(), "hanako@example.com");
    }

    #[test]
    fn test_profile_form_validation() {
        let mut dto = UpdateProfileDto::from_profile(&profile());
        assert!(dto.validate().is_ok());

        dto.phone = "03-1234-5678".into();
        assert!(dto.validate().is_ok());

        dto.phone = "call me".into();
        assert!(dto.validate().is_err());

        dto.phone.clear();
        dto.first_name = " ".into();
        assert_eq!(dto.validate(), Err("名を入力してください".into()));
    }
}
