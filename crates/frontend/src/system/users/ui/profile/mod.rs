pub mod edit;
pub mod view;

pub use edit::ProfileEditPage;
pub use view::{OwnProfilePage, ProfilePage};

use contracts::system::users::UserProfile;

use crate::system::auth::context::AuthState;

/// Whether the signed-in account is the one linked to `profile`
pub fn is_owner(auth: &AuthState, profile: &UserProfile) -> bool {
    match (&auth.user_info, &profile.account_id) {
        (Some(user), Some(account_id)) => &user.id == account_id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn profile(account_id: Option<&str>) -> UserProfile {
        UserProfile {
            id: "p1".into(),
            account_id: account_id.map(str::to_string),
            email: "taro@example.com".into(),
            first_name: "太郎".into(),
            last_name: "山田".into(),
            phone: String::new(),
            bio: None,
            address: None,
            is_admin: false,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    fn signed_in(account_id: &str) -> AuthState {
        AuthState {
            access_token: Some("t".into()),
            user_info: Some(UserInfo {
                id: account_id.into(),
                username: "taro".into(),
                email: "taro@example.com".into(),
                is_admin: false,
            }),
        }
    }

    #[test]
    fn test_owner_is_matched_by_account_id() {
        assert!(is_owner(&signed_in("a1"), &profile(Some("a1"))));
        assert!(!is_owner(&signed_in("a2"), &profile(Some("a1"))));
    }

    #[test]
    fn test_unlinked_profile_has_no_owner() {
        assert!(!is_owner(&signed_in("a1"), &profile(None)));
        assert!(!is_owner(&AuthState::default(), &profile(Some("a1"))));
    }
}
