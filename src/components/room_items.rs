//! 房间条目页
//!
//! 按房间名过滤拉取条目；Modify 将条目草稿交给库存维护页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cards::ItemGrid;
use crate::api::use_api;
use crate::draft::use_pending_edit;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{Item, ItemQuery};
use crate::web::dialog;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn RoomItemsPage(room: String) -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();
    let router = use_router();
    let pending_edit = use_pending_edit();

    let (items, set_items) = signal(Vec::<Item>::new());

    let fetch_room_items = {
        let api = api.clone();
        let room = room.clone();
        move || {
            let api = api.clone();
            let query = ItemQuery::by_location(room.clone());
            spawn_local(async move {
                if let Ok(data) = api.list_items(Some(&query)).await {
                    set_items.set(data);
                }
            });
        }
    };

    // 挂载（及房间切换引起的重挂载）时拉取
    Effect::new({
        let fetch_room_items = fetch_room_items.clone();
        move |_| fetch_room_items()
    });

    // Modify：存入草稿并导航到库存维护页
    let on_modify = move |item: Item| {
        pending_edit.set(item);
        router.navigate(AppRoute::UpdateInventory);
    };

    // 卡片上的数量调整：直接更新该条目
    let on_quantity = {
        let api = api.clone();
        move |item: Item| {
            let Some(id) = item.id.clone() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.update_item(&id, &item).await {
                    Ok(_) => dialog::alert("Quantity updated successfully"),
                    Err(_) => dialog::alert("Failed to update quantity"),
                }
            });
        }
    };

    let on_back = move |_| router.navigate(AppRoute::Home);

    view! {
        <div class="max-w-7xl mx-auto p-8">
            <h2 class="text-2xl font-bold mb-4">"Items in " {room.clone()}</h2>
            <button class="btn btn-secondary mb-4" on:click=on_back>
                "Back to Locations"
            </button>
            <ItemGrid items=items on_modify=on_modify on_quantity=on_quantity />
        </div>
    }
}
