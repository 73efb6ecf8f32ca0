use contracts::system::auth::{LoginResponse, SessionInfo, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// What the current visitor may see. Provided once at the root, so pages
/// and the header never query the backend for admin status themselves.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
    /// True until the stored session is restored and checked
    pub is_loading: Signal<bool>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    let restoring = RwSignal::new(true);
    let session = RwSignal::new(SessionInfo::default());
    let session_loading = RwSignal::new(true);

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(state) = restore_session().await {
                set_auth_state.set(state);
            }
            restoring.set(false);
        });
    });

    // Re-check the admin flag whenever the signed-in identity changes
    Effect::new(move |_| {
        if restoring.get() {
            return;
        }
        let token = auth_state.with(|s| s.access_token.clone());
        let Some(access_token) = token.clone() else {
            session.set(SessionInfo::default());
            session_loading.set(false);
            return;
        };

        session_loading.set(true);
        spawn_local(async move {
            let info = match api::fetch_session(Some(&access_token)).await {
                Ok(info) => info,
                Err(e) => {
                    log::warn!("Session check failed: {}", e);
                    SessionInfo::default()
                }
            };
            // A later login or logout supersedes this answer
            if auth_state.with_untracked(|s| s.access_token == token) {
                session.set(info);
                session_loading.set(false);
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);
    provide_context(SessionContext {
        is_authenticated: Signal::derive(move || auth_state.with(|s| s.access_token.is_some())),
        is_admin: Signal::derive(move || session.with(|s| s.is_admin)),
        is_loading: Signal::derive(move || restoring.get() || session_loading.get()),
    });

    children()
}

async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    // Validate token by fetching current user
    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
        });
    }

    // Token invalid, try refresh
    let restored = match storage::get_refresh_token() {
        Some(refresh_token) => match api::refresh_token(refresh_token).await {
            Ok(response) => {
                storage::save_access_token(&response.access_token);
                api::get_current_user(&response.access_token)
                    .await
                    .ok()
                    .map(|user_info| AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(user_info),
                    })
            }
            Err(_) => None,
        },
        None => None,
    };

    if restored.is_none() {
        log::info!("Stored session is no longer valid, clearing tokens");
        storage::clear_tokens();
    }
    restored
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("AuthProvider not found in component tree")
}

/// Store tokens of a fresh login/sign-up and switch the UI to that user
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_tokens(&response.access_token, &response.refresh_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

pub async fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
