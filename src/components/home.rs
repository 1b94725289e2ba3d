//! 首页：存储位置（房间）总览
//!
//! 挂载时拉取位置列表，点击房间卡片进入该房间的条目页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::inactivity::use_inactivity_monitor;
use crate::models::Location;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn HomePage() -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();
    let router = use_router();

    let (rooms, set_rooms) = signal(Vec::<Location>::new());

    // 挂载时拉取房间列表；错误已在 API 层记录
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(data) = api.list_locations().await {
                    set_rooms.set(data);
                }
            });
        }
    });

    view! {
        <div class="max-w-7xl mx-auto p-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <For
                    each=move || rooms.get()
                    key=|room| room.id.clone().unwrap_or_default()
                    children=move |room| {
                        let room_name = room.name.clone();
                        let title = room.name.clone();
                        let image_url = room.image.clone();
                        let image_alt = room.name.clone();
                        let has_image = super::cards::is_valid_image_url(&room.image);
                        let on_click = move |_| {
                            router.navigate(AppRoute::RoomItems(room_name.clone()));
                        };
                        view! {
                            <div
                                class="card bg-base-100 shadow-xl cursor-pointer hover:shadow-2xl"
                                on:click=on_click
                            >
                                <Show when=move || has_image>
                                    <figure class="h-48 overflow-hidden">
                                        <img
                                            src=image_url.clone()
                                            alt=image_alt.clone()
                                            class="object-cover w-full"
                                        />
                                    </figure>
                                </Show>
                                <div class="card-body p-4">
                                    <h3 class="card-title text-base">{title}</h3>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
