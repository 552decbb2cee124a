//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::net::types::ADMIN_ROLE;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::routes::AppRoute;
use crate::state::provider::provide_auth;

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. Root and
/// unknown paths land on the dashboard, whose guard decides where to go next.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth(ApiConfig::from_env());

    view! {
        <Title text="MyUnity"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <ProtectedRoute required_roles=vec![ADMIN_ROLE.to_owned()]>
                                <AdminPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }/>
            </Routes>
        </Router>
    }
}
