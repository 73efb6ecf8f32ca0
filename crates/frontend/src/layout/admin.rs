//! Back-office frame: sidebar plus the nested admin route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::system::auth::guard::RequireAdmin;

struct MenuItem {
    href: &'static str,
    label: &'static str,
}

const MENU: [MenuItem; 4] = [
    MenuItem { href: "/admin", label: "ダッシュボード" },
    MenuItem { href: "/admin/items", label: "商品管理" },
    MenuItem { href: "/admin/users", label: "ユーザー管理" },
    MenuItem { href: "/admin/blog", label: "ブログ管理" },
];

/// `/admin` matches only itself; sections also match their sub-pages
fn is_active(href: &str, path: &str) -> bool {
    if href == "/admin" {
        return path.trim_end_matches('/') == "/admin";
    }
    path == href || path.starts_with(&format!("{}/", href))
}

#[component]
fn AdminSidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__title">"管理画面"</div>
            <nav>
                <ul>
                    {MENU
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="admin-sidebar__link"
                                        class:admin-sidebar__link--active=move || {
                                            location.pathname.with(|p| is_active(href, p))
                                        }
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <a class="admin-sidebar__back" href="/">"← サイトへ戻る"</a>
        </aside>
    }
}

/// Parent view of every `/admin` route
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="admin-layout">
                <AdminSidebar />
                <section class="admin-layout__content">
                    <Outlet />
                </section>
            </div>
        </RequireAdmin>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_section() {
        assert!(is_active("/admin", "/admin"));
        assert!(is_active("/admin", "/admin/"));
        assert!(!is_active("/admin", "/admin/items"));
        assert!(is_active("/admin/blog", "/admin/blog/edit/3"));
        assert!(!is_active("/admin/blog", "/admin/blogger"));
    }
}
