use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::AdminDashboard;
use crate::domain::a001_catalog_item::ui::admin::AdminItemsPage;
use crate::domain::a001_catalog_item::ui::details::ItemDetailsPage;
use crate::domain::a001_catalog_item::ui::list::MenuPage;
use crate::domain::a002_blog_post::ui::admin::{AdminPostsPage, PostEditorPage};
use crate::domain::a002_blog_post::ui::details::BlogPostPage;
use crate::domain::a002_blog_post::ui::list::BlogListPage;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::layout::{AdminLayout, ModalHost, NotificationHost};
use crate::marketing::contact::ContactPage;
use crate::marketing::home::HomePage;
use crate::marketing::legal::{LegalNoticePage, PrivacyPage};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::users::ui::admin_list::AdminUsersPage;
use crate::system::users::ui::profile::{OwnProfilePage, ProfileEditPage, ProfilePage};

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"404"</h1>
            <p>"お探しのページは見つかりませんでした。"</p>
            <a class="button button--primary" href="/">"トップへ戻る"</a>
        </div>
    }
}

#[component]
fn OwnProfileRoute() -> impl IntoView {
    view! { <RequireAuth><OwnProfilePage /></RequireAuth> }
}

#[component]
fn ProfileRoute() -> impl IntoView {
    view! { <RequireAuth><ProfilePage /></RequireAuth> }
}

#[component]
fn ProfileEditRoute() -> impl IntoView {
    view! { <RequireAuth><ProfileEditPage /></RequireAuth> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/menu") view=MenuPage />
                    <Route path=path!("/menu/:id") view=ItemDetailsPage />
                    <Route path=path!("/blog") view=BlogListPage />
                    <Route path=path!("/blog/:id") view=BlogPostPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/legal-notice") view=LegalNoticePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />

                    <Route path=path!("/profile") view=OwnProfileRoute />
                    <Route path=path!("/profile/:id") view=ProfileRoute />
                    <Route path=path!("/profile/:id/edit") view=ProfileEditRoute />

                    <ParentRoute path=path!("/admin") view=AdminLayout>
                        <Route path=path!("") view=AdminDashboard />
                        <Route path=path!("items") view=AdminItemsPage />
                        <Route path=path!("users") view=AdminUsersPage />
                        <Route path=path!("blog") view=AdminPostsPage />
                        <Route path=path!("blog/new") view=PostEditorPage />
                        <Route path=path!("blog/edit/:id") view=PostEditorPage />
                    </ParentRoute>
                </Routes>
            </main>
            <Footer />
            <NotificationHost />
            <ModalHost />
        </Router>
    }
}
