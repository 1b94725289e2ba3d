//! 用户管理页（仅管理员可达）
//!
//! 表格展示全部用户；双击行进入行内编辑，Update User 提交后
//! 以服务端返回的消息判定是否成功并刷新列表。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{USER_UPDATED_MESSAGE, UiTheme, User};
use crate::web::dialog;

#[component]
pub fn UserManagementPage() -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();

    let (users, set_users) = signal(Vec::<User>::new());
    // 行内编辑中的用户副本；None 表示没有行处于编辑态
    let editing = RwSignal::new(Option::<User>::None);

    let fetch_users = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.list_users().await {
                    Ok(data) => set_users.set(data),
                    Err(_) => dialog::alert("Failed to load user data"),
                }
            });
        }
    };

    Effect::new({
        let fetch_users = fetch_users.clone();
        move |_| fetch_users()
    });

    let on_update = {
        let api = api.clone();
        let fetch_users = fetch_users.clone();
        move |_| {
            let Some(user) = editing.get_untracked() else {
                return;
            };
            let Some(id) = user.id.clone() else {
                return;
            };

            let api = api.clone();
            let fetch_users = fetch_users.clone();
            spawn_local(async move {
                match api.update_user(&id, &user).await {
                    Ok(response) if response.message == USER_UPDATED_MESSAGE => {
                        dialog::alert("User updated successfully");
                        editing.set(None);
                        fetch_users();
                    }
                    _ => dialog::alert("Failed to update user"),
                }
            });
        }
    };

    // 删除编辑中的用户；需要确认
    let on_delete = {
        let api = api.clone();
        let fetch_users = fetch_users.clone();
        move |_| {
            let Some(user) = editing.get_untracked() else {
                return;
            };
            let Some(id) = user.id.clone() else {
                return;
            };
            if !dialog::confirm("Are you sure you want to delete this user?") {
                return;
            }

            let api = api.clone();
            let fetch_users = fetch_users.clone();
            spawn_local(async move {
                match api.delete_user(&id).await {
                    Ok(()) => {
                        dialog::alert("User deleted successfully");
                        editing.set(None);
                        fetch_users();
                    }
                    Err(_) => dialog::alert("Failed to delete user"),
                }
            });
        }
    };

    let on_cancel = move |_| editing.set(None);

    let is_editing = move || editing.with(|e| e.is_some());

    view! {
        <div class="max-w-7xl mx-auto p-8 space-y-4">
            <h2 class="text-2xl font-bold">"Manage Users"</h2>
            <p class="text-sm text-base-content/70">
                "Double-click a row to edit it."
            </p>

            <div class="overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Display Name"</th>
                            <th>"Avatar URL"</th>
                            <th>"UI Theme"</th>
                            <th>"Team"</th>
                            <th>"Bio"</th>
                            <th>"Bypass LDAP"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id.clone().unwrap_or_default()
                            children=move |user| {
                                let row_id = user.id.clone();
                                let row_is_editing = {
                                    let row_id = row_id.clone();
                                    move || {
                                        editing.with(|e| {
                                            e.as_ref().is_some_and(|u| u.id == row_id)
                                        })
                                    }
                                };
                                let start_editing = {
                                    let user = user.clone();
                                    move |_| editing.set(Some(user.clone()))
                                };

                                view! {
                                    <tr on:dblclick=start_editing class="hover">
                                        <td>{user.id.clone().unwrap_or_default()}</td>
                                        <Show
                                            when=row_is_editing.clone()
                                            fallback={
                                                let user = user.clone();
                                                move || {
                                                    view! {
                                                        <td>{user.username.clone()}</td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>{user.display_name.clone()}</td>
                                                        <td class="max-w-48 truncate">
                                                            {user.avatar_url.clone()}
                                                        </td>
                                                        <td>{user.ui_theme.as_str()}</td>
                                                        <td>{user.team.clone()}</td>
                                                        <td class="max-w-64 truncate">{user.bio.clone()}</td>
                                                        <td>{if user.sql_user { "Yes" } else { "No" }}</td>
                                                    }
                                                }
                                            }
                                        >
                                            <td>
                                                <input
                                                    type="text"
                                                    class="input input-bordered input-sm"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref()
                                                                .map(|u| u.username.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.username = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    class="input input-bordered input-sm"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref().map(|u| u.email.clone()).unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.email = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    class="input input-bordered input-sm"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref()
                                                                .map(|u| u.display_name.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.display_name = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    class="input input-bordered input-sm"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref()
                                                                .map(|u| u.avatar_url.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.avatar_url = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <select
                                                    class="select select-bordered select-sm"
                                                    on:change=move |ev| {
                                                        let theme =
                                                            UiTheme::from_form_value(&event_target_value(&ev));
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.ui_theme = theme;
                                                            }
                                                        });
                                                    }
                                                >
                                                    <option
                                                        value="light"
                                                        selected=move || {
                                                            editing.with(|e| {
                                                                e.as_ref()
                                                                    .is_some_and(|u| u.ui_theme == UiTheme::Light)
                                                            })
                                                        }
                                                    >
                                                        "light"
                                                    </option>
                                                    <option
                                                        value="dark"
                                                        selected=move || {
                                                            editing.with(|e| {
                                                                e.as_ref()
                                                                    .is_some_and(|u| u.ui_theme == UiTheme::Dark)
                                                            })
                                                        }
                                                    >
                                                        "dark"
                                                    </option>
                                                </select>
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    class="input input-bordered input-sm"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref().map(|u| u.team.clone()).unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.team = value;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <textarea
                                                    class="textarea textarea-bordered textarea-sm"
                                                    rows="2"
                                                    prop:value=move || {
                                                        editing.with(|e| {
                                                            e.as_ref().map(|u| u.bio.clone()).unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.bio = value;
                                                            }
                                                        });
                                                    }
                                                ></textarea>
                                            </td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    class="checkbox"
                                                    prop:checked=move || {
                                                        editing.with(|e| {
                                                            e.as_ref().is_some_and(|u| u.sql_user)
                                                        })
                                                    }
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        editing.update(|e| {
                                                            if let Some(u) = e.as_mut() {
                                                                u.sql_user = checked;
                                                            }
                                                        });
                                                    }
                                                />
                                            </td>
                                        </Show>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=is_editing>
                <div class="flex gap-2">
                    <button class="btn btn-success" on:click=on_update.clone()>
                        "Update User"
                    </button>
                    <button class="btn btn-error" on:click=on_delete.clone()>
                        "Delete User"
                    </button>
                    <button class="btn btn-secondary" on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
