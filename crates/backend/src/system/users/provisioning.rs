//! Профиль для учётной записи, у которой его ещё нет.

use chrono::Utc;
use contracts::system::users::UserProfile;

use crate::system::accounts::Account;

/// Names supplied at sign-up, if any
#[derive(Debug, Clone, Default)]
pub struct ProfileSeed {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Provision {
    /// An orphaned profile with the account's email exists: point it at the account
    Relink { profile_id: String },
    /// Nothing to reuse
    Create(UserProfile),
}

/// Decide what to do for an account without a linked profile.
///
/// `owner` is the account `same_email` is currently linked to, if that
/// account still exists. Only a profile without a live owner is relinked;
/// an existing profile keeps its data, only the link changes.
pub fn decide(
    account: &Account,
    same_email: Option<&UserProfile>,
    owner: Option<&Account>,
    seed: &ProfileSeed,
) -> Provision {
    match (same_email, owner) {
        (Some(existing), None) => Provision::Relink {
            profile_id: existing.id.clone(),
        },
        _ => Provision::Create(new_profile(account, seed)),
    }
}

fn new_profile(account: &Account, seed: &ProfileSeed) -> UserProfile {
    let now = Utc::now().to_rfc3339();
    let clean = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    UserProfile {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: Some(account.id.clone()),
        email: account.email.clone(),
        first_name: clean(&seed.first_name).unwrap_or_else(|| account.username.clone()),
        last_name: clean(&seed.last_name).unwrap_or_default(),
        phone: String::new(),
        bio: None,
        address: None,
        is_admin: false,
        created_at: now.clone(),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "acc-1".into(),
            username: "hanako".into(),
            email: "hanako@example.com".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: None,
        }
    }

    fn existing() -> UserProfile {
        UserProfile {
            id: "prof-old".into(),
            account_id: Some("acc-gone".into()),
            email: "hanako@example.com".into(),
            first_name: "花子".into(),
            last_name: "佐藤".into(),
            phone: "090-0000-0000".into(),
            bio: Some("常連".into()),
            address: None,
            is_admin: true,
            created_at: "2023-01-01T00:00:00Z".into(),
            updated_at: "2023-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_orphaned_profile_is_relinked() {
        let decision = decide(&account(), Some(&existing()), None, &ProfileSeed::default());
        assert_eq!(
            decision,
            Provision::Relink {
                profile_id: "prof-old".into()
            }
        );

        let unlinked = UserProfile {
            account_id: None,
            ..existing()
        };
        assert_eq!(
            decide(&account(), Some(&unlinked), None, &ProfileSeed::default()),
            Provision::Relink {
                profile_id: "prof-old".into()
            }
        );
    }

    #[test]
    fn test_profile_of_live_account_is_not_relinked() {
        let owner = Account {
            id: "acc-admin".into(),
            username: "admin".into(),
            ..account()
        };
        let admin_profile = UserProfile {
            account_id: Some("acc-admin".into()),
            ..existing()
        };

        match decide(&account(), Some(&admin_profile), Some(&owner), &ProfileSeed::default()) {
            Provision::Create(p) => {
                assert_ne!(p.id, "prof-old");
                assert_eq!(p.account_id.as_deref(), Some("acc-1"));
                assert!(!p.is_admin);
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn test_new_profile_from_account() {
        match decide(&account(), None, None, &ProfileSeed::default()) {
            Provision::Create(p) => {
                assert_eq!(p.account_id.as_deref(), Some("acc-1"));
                assert_eq!(p.email, "hanako@example.com");
                assert_eq!(p.first_name, "hanako");
                assert_eq!(p.last_name, "");
                assert!(!p.is_admin);
                assert_eq!(p.created_at, p.updated_at);
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_up_names_are_used() {
        let seed = ProfileSeed {
            first_name: Some(" 花子 ".into()),
            last_name: Some("佐藤".into()),
        };
        match decide(&account(), None, None, &seed) {
            Provision::Create(p) => {
                assert_eq!(p.first_name, "花子");
                assert_eq!(p.last_name, "佐藤");
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }
}
