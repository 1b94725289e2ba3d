//! 用户档案页（仅管理员可达）
//!
//! 展示指定用户的基本信息，以及按所有者归属过滤出的位置与条目。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{Item, Location, User};
use crate::web::dialog;

#[component]
pub fn UserProfilePage(username: String) -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();

    let (profile, set_profile) = signal(Option::<User>::None);
    let (owned_locations, set_owned_locations) = signal(Vec::<Location>::new());
    let (owned_items, set_owned_items) = signal(Vec::<Item>::new());

    Effect::new({
        let api = api.clone();
        let username = username.clone();
        move |_| {
            let api = api.clone();
            let username = username.clone();
            spawn_local(async move {
                let user = match api.get_user_by_username(&username).await {
                    Ok(user) => user,
                    Err(_) => {
                        dialog::alert("Failed to load user data");
                        return;
                    }
                };

                // 归属判定用账户的规范用户名，而非路径原文
                if let Ok(locations) = api.list_locations().await {
                    set_owned_locations.set(
                        locations
                            .into_iter()
                            .filter(|l| l.is_owned_by(&user.username))
                            .collect(),
                    );
                }
                if let Ok(items) = api.list_items(None).await {
                    set_owned_items.set(
                        items
                            .into_iter()
                            .filter(|i| i.is_owned_by(&user.username))
                            .collect(),
                    );
                }
                set_profile.set(Some(user));
            });
        }
    });

    view! {
        <div class="max-w-3xl mx-auto p-8">
            <Show
                when=move || profile.with(|p| p.is_some())
                fallback=|| view! { <p>"Loading user profile..."</p> }
            >
                {move || {
                    profile
                        .get()
                        .map(|user| {
                            view! {
                                <div class="card bg-base-100 shadow-xl p-6 space-y-4">
                                    <h2 class="text-2xl font-bold">{user.display_name.clone()}</h2>
                                    <p>"Email: " {user.email.clone()}</p>
                                    <p>"Team: " {user.team.clone()}</p>
                                    <p>"Bio: " {user.bio.clone()}</p>

                                    <h3 class="text-xl font-semibold mt-4">"Owned Locations"</h3>
                                    <Show
                                        when=move || owned_locations.with(|l| !l.is_empty())
                                        fallback=|| view! { <p>"No locations owned."</p> }
                                    >
                                        <ul class="list-disc list-inside">
                                            <For
                                                each=move || owned_locations.get()
                                                key=|loc| loc.id.clone().unwrap_or_default()
                                                children=|loc| {
                                                    view! {
                                                        <li>{loc.name.clone()} " - " {loc.description.clone()}</li>
                                                    }
                                                }
                                            />
                                        </ul>
                                    </Show>

                                    <h3 class="text-xl font-semibold mt-4">"Owned Items"</h3>
                                    <Show
                                        when=move || owned_items.with(|i| !i.is_empty())
                                        fallback=|| view! { <p>"No items owned."</p> }
                                    >
                                        <ul class="list-disc list-inside">
                                            <For
                                                each=move || owned_items.get()
                                                key=|item| item.id.clone().unwrap_or_default()
                                                children=|item| {
                                                    view! {
                                                        <li>{item.name.clone()} " - " {item.description.clone()}</li>
                                                    }
                                                }
                                            />
                                        </ul>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
