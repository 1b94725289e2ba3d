//! 新用户注册页（仅管理员可达）

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{Role, UiTheme, User};
use crate::web::dialog;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();
    let router = use_router();

    let draft = RwSignal::new(User::default());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let user = draft.get_untracked();
            if !user.registration_ready() {
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.register_user(&user).await {
                    Ok(()) => {
                        dialog::alert("Registered successfully");
                        // 已登录的管理员会被路由服务从登录页带回首页
                        router.navigate(AppRoute::Login);
                    }
                    Err(_) => dialog::alert("Registration failed"),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let can_submit = move || draft.with(|d| d.registration_ready()) && !is_submitting.get();

    view! {
        <div class="max-w-2xl mx-auto p-8">
            <h2 class="text-2xl font-bold mb-4">"Register New User"</h2>

            <form class="card bg-base-100 shadow-xl p-6 space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="register-username">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input
                            id="register-username"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.username.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.username = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <input
                            id="register-password"
                            type="password"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.password.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.password = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-role">
                            <span class="label-text">"Role"</span>
                        </label>
                        <select
                            id="register-role"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                let role = Role::from_form_value(&event_target_value(&ev));
                                draft.update(|d| d.role = role);
                            }
                        >
                            <option value="user" selected=move || draft.with(|d| d.role == Role::User)>
                                "user"
                            </option>
                            <option value="admin" selected=move || draft.with(|d| d.role == Role::Admin)>
                                "admin"
                            </option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-email">
                            <span class="label-text">"Email"</span>
                        </label>
                        <input
                            id="register-email"
                            type="email"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-display-name">
                            <span class="label-text">"Display Name"</span>
                        </label>
                        <input
                            id="register-display-name"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.display_name.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.display_name = event_target_value(&ev))
                            }
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-avatar">
                            <span class="label-text">"Avatar URL"</span>
                        </label>
                        <input
                            id="register-avatar"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.avatar_url.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.avatar_url = event_target_value(&ev))
                            }
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-theme">
                            <span class="label-text">"UI Theme"</span>
                        </label>
                        <select
                            id="register-theme"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                let theme = UiTheme::from_form_value(&event_target_value(&ev));
                                draft.update(|d| d.ui_theme = theme);
                            }
                        >
                            <option
                                value="light"
                                selected=move || draft.with(|d| d.ui_theme == UiTheme::Light)
                            >
                                "light"
                            </option>
                            <option
                                value="dark"
                                selected=move || draft.with(|d| d.ui_theme == UiTheme::Dark)
                            >
                                "dark"
                            </option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="register-team">
                            <span class="label-text">"Team"</span>
                        </label>
                        <input
                            id="register-team"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || draft.with(|d| d.team.clone())
                            on:input=move |ev| draft.update(|d| d.team = event_target_value(&ev))
                            required
                        />
                    </div>
                </div>

                <div class="form-control">
                    <label class="label" for="register-bio">
                        <span class="label-text">"Bio"</span>
                    </label>
                    <textarea
                        id="register-bio"
                        class="textarea textarea-bordered w-full"
                        rows="3"
                        prop:value=move || draft.with(|d| d.bio.clone())
                        on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox"
                            prop:checked=move || draft.with(|d| d.sql_user)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.sql_user = checked);
                            }
                        />
                        <span class="label-text">"Bypass LDAP authentication"</span>
                    </label>
                </div>

                <div class="form-control mt-2">
                    <button class="btn btn-primary" disabled=move || !can_submit()>
                        {move || if is_submitting.get() { "Registering..." } else { "Register" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
