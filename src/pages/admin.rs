//! Admin page: user table with add, edit, delete, and activation toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute` with `ROLE_ADMIN` required; the page still
//! re-checks the role so a demoted session sees the access-denied panel
//! instead of an empty table.
//!
//! DESIGN
//! ======
//! Every network action is a free async function over an [`AuthProvider`] and
//! an `AdminState` signal. The component only collects input and spawns them.
//! Results land in the table signal, and each action leaves a [`Notice`].
//!
//! ERROR HANDLING
//! ==============
//! Failures become a notice (or the load error banner) via `describe`. A 401
//! has already cleared storage in the API client; `resync` then drops the
//! in-memory session so the route guard sends the user to login.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::role_chips::RoleChips;
use crate::net::error::ApiError;
use crate::net::transport::HttpTransport;
use crate::net::types::{ADMIN_ROLE, AdminUser};
use crate::net::users::{create_user, delete_user, fetch_users, update_user};
use crate::state::admin::{AdminState, DialogMode, Notice, NoticeKind, UserForm, toggled_active};
use crate::state::provider::{AuthProvider, use_auth};
use crate::util::error_text::{AuthAction, describe};
use crate::util::storage::KeyValueStore;

pub const USER_ADDED: &str = "User added successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

#[cfg(feature = "csr")]
const NOTICE_TIMEOUT_MS: u64 = 6000;

/// Notice text after flipping an account that was `was_active`.
#[must_use]
pub fn toggle_notice(was_active: bool) -> String {
    format!("User {} successfully", if was_active { "deactivated" } else { "activated" })
}

#[must_use]
pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

#[must_use]
pub fn dialog_title(mode: DialogMode) -> &'static str {
    match mode {
        DialogMode::Add => "Add user",
        DialogMode::Edit(_) => "Edit user",
    }
}

fn report<T: HttpTransport, S: KeyValueStore>(auth: &AuthProvider<T, S>, err: &ApiError) -> String {
    if err.is_unauthorized() {
        auth.resync();
    }
    describe(AuthAction::ManageUsers, err)
}

/// Fetch the table into `table`.
pub async fn load_users<T: HttpTransport, S: KeyValueStore>(auth: &AuthProvider<T, S>, table: RwSignal<AdminState>) {
    table.update(|t| t.loading = true);
    match fetch_users(auth.service().api()).await {
        Ok(users) => table.update(|t| t.loaded(users)),
        Err(e) => {
            leptos::logging::error!("failed to fetch users: {e}");
            let message = report(auth, &e);
            table.update(|t| t.load_failed(message));
        }
    }
}

/// Create or update from the dialog. Returns `true` when the dialog may close.
pub async fn save_user<T: HttpTransport, S: KeyValueStore>(
    auth: &AuthProvider<T, S>,
    table: RwSignal<AdminState>,
    mode: DialogMode,
    form: &UserForm,
) -> bool {
    if let Err(message) = form.validate() {
        table.update(|t| {
            t.notify(Notice::error(message));
        });
        return false;
    }
    let api = auth.service().api();
    let result = match mode {
        DialogMode::Add => create_user(api, &form.to_draft(None)).await.map(|u| (u, USER_ADDED)),
        DialogMode::Edit(id) => {
            let existing = table.with_untracked(|t| t.find(id).cloned());
            update_user(api, id, &form.to_draft(existing.as_ref())).await.map(|u| (u, USER_UPDATED))
        }
    };
    match result {
        Ok((user, message)) => {
            table.update(|t| {
                t.upsert(user);
                t.notify(Notice::success(message));
            });
            true
        }
        Err(e) => {
            let message = report(auth, &e);
            table.update(|t| {
                t.notify(Notice::error(message));
            });
            false
        }
    }
}

/// Delete account `id` after confirmation.
pub async fn remove_user<T: HttpTransport, S: KeyValueStore>(
    auth: &AuthProvider<T, S>,
    table: RwSignal<AdminState>,
    id: i64,
) -> bool {
    match delete_user(auth.service().api(), id).await {
        Ok(()) => {
            table.update(|t| {
                t.remove(id);
                t.notify(Notice::success(USER_DELETED));
            });
            true
        }
        Err(e) => {
            let message = report(auth, &e);
            table.update(|t| {
                t.notify(Notice::error(message));
            });
            false
        }
    }
}

/// Flip account `id` between active and inactive.
pub async fn toggle_user<T: HttpTransport, S: KeyValueStore>(
    auth: &AuthProvider<T, S>,
    table: RwSignal<AdminState>,
    id: i64,
) -> bool {
    let Some(user) = table.with_untracked(|t| t.find(id).cloned()) else {
        leptos::logging::warn!("toggle requested for unknown user {id}");
        return false;
    };
    match update_user(auth.service().api(), id, &toggled_active(&user)).await {
        Ok(updated) => {
            table.update(|t| {
                t.upsert(updated);
                t.notify(Notice::success(toggle_notice(user.active)));
            });
            true
        }
        Err(e) => {
            let message = report(auth, &e);
            table.update(|t| {
                t.notify(Notice::error(message));
            });
            false
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = StoredValue::new(use_auth());
    let state = auth.with_value(AuthProvider::state);
    let is_admin = move || state.get().has_any_role(&[ADMIN_ROLE]);

    view! {
        <Show
            when=is_admin
            fallback=|| {
                view! {
                    <div class="admin-page admin-page--denied">
                        <h1>"Access denied"</h1>
                        <p>"You do not have permission to view this page."</p>
                        <a class="btn" href="/dashboard">"Back to dashboard"</a>
                    </div>
                }
            }
        >
            <UserTable/>
        </Show>
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let auth = StoredValue::new(use_auth());
    let table = RwSignal::new(AdminState { loading: true, ..AdminState::default() });
    let dialog = RwSignal::new(None::<DialogMode>);
    let form = RwSignal::new(UserForm::default());
    let pending_delete = RwSignal::new(None::<AdminUser>);
    #[cfg(not(feature = "csr"))]
    let _ = auth;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let auth = auth.get_value();
        load_users(&auth, table).await;
    });

    #[cfg(feature = "csr")]
    {
        let shown = Memo::new(move |_| table.with(AdminState::shown_notice));
        Effect::new(move |_| {
            if let Some(id) = shown.get() {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TIMEOUT_MS)).await;
                    table.update(|t| {
                        t.dismiss(id);
                    });
                });
            }
        });
    }

    let open_add = move |_| {
        form.set(UserForm::default());
        dialog.set(Some(DialogMode::Add));
    };

    let open_edit = move |user: &AdminUser| {
        form.set(UserForm::from_user(user));
        dialog.set(Some(DialogMode::Edit(user.id)));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = dialog.get_untracked() else { return };
        let current = form.get_untracked();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let auth = auth.get_value();
            if save_user(&auth, table, mode, &current).await {
                dialog.set(None);
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (mode, current);
    };

    let on_confirm_delete = move |_| {
        let Some(user) = pending_delete.get_untracked() else { return };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let auth = auth.get_value();
            remove_user(&auth, table, user.id).await;
            pending_delete.set(None);
        });
        #[cfg(not(feature = "csr"))]
        let _ = user;
    };

    let on_toggle = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let auth = auth.get_value();
            toggle_user(&auth, table, id).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header toolbar">
                <span class="toolbar__title">"User management"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn btn--secondary" href="/dashboard">"Dashboard"</a>
                <button class="btn" on:click=open_add>"Add user"</button>
            </header>

            <Show when=move || table.with(|t| t.error.is_some())>
                <p class="auth-alert auth-alert--error">{move || table.with(|t| t.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !table.with(|t| t.loading)
                fallback=|| view! { <div class="admin-page__loading">"Loading users..."</div> }
            >
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Roles"</th>
                            <th>"Created"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || table.with(|t| t.users.clone())
                            key=|user| (user.id, user.active, user.username.clone(), user.email.clone(), user.roles.clone())
                            children=move |user| {
                                let id = user.id;
                                let edit_target = user.clone();
                                let delete_target = user.clone();
                                let status_class = if user.active { "status status--active" } else { "status status--inactive" };
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.username.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>
                                            <RoleChips roles=user.roles.clone()/>
                                        </td>
                                        <td>{user.created_at.clone()}</td>
                                        <td>
                                            <span class=status_class>{status_label(user.active)}</span>
                                        </td>
                                        <td class="user-table__actions">
                                            <button class="btn btn--small" on:click=move |_| open_edit(&edit_target)>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--small" on:click=move |_| on_toggle(id)>
                                                {if user.active { "Deactivate" } else { "Activate" }}
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || dialog.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| dialog.set(None)></div>
                <form class="dialog" on:submit=on_save>
                    <h2>{move || dialog.get().map(dialog_title).unwrap_or_default()}</h2>
                    <label class="auth-label" for="admin-username">"Username"</label>
                    <input
                        id="admin-username"
                        class="auth-input"
                        type="text"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <label class="auth-label" for="admin-email">"Email"</label>
                    <input
                        id="admin-email"
                        class="auth-input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_admin)
                            on:change=move |ev| form.update(|f| f.is_admin = event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--secondary" on:click=move |_| dialog.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn">"Save"</button>
                    </div>
                </form>
            </Show>

            <Show when=move || pending_delete.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)></div>
                <div class="dialog">
                    <h2>"Delete user"</h2>
                    <p>
                        "Delete "
                        <strong>{move || pending_delete.with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default())}</strong>
                        "? This cannot be undone."
                    </p>
                    <div class="dialog__actions">
                        <button type="button" class="btn btn--secondary" on:click=move |_| pending_delete.set(None)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn--danger" on:click=on_confirm_delete>"Delete"</button>
                    </div>
                </div>
            </Show>

            {move || {
                table
                    .with(|t| t.notice.clone())
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class on:click=move |_| table.update(|t| t.notice = None)>
                                {notice.message}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
