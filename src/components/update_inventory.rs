//! 库存维护页
//!
//! 顶部为条目草稿表单，下方为条目网格。
//! Search / Add-or-Update / Delete / Clear 四个动作：
//! 提交动作由草稿是否携带 ID 决定；变更成功后重新拉取列表并复位草稿。

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cards::ItemGrid;
use crate::api::use_api;
use crate::draft::use_pending_edit;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{Item, ItemQuery, Location, SubmitAction, submit_action};
use crate::web::dialog;

#[component]
pub fn UpdateInventoryPage() -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();
    let pending_edit = use_pending_edit();

    // 编辑中的草稿条目
    let draft = RwSignal::new(Item::default());
    // 参考数据：位置下拉框选项
    let (locations, set_locations) = signal(Vec::<Location>::new());
    // 服务端返回的条目列表
    let (items, set_items) = signal(Vec::<Item>::new());

    let fetch_items = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(data) = api.list_items(None).await {
                    set_items.set(data);
                }
            });
        }
    };

    // 挂载时：接收来自房间条目页的草稿，拉取参考数据与列表
    Effect::new({
        let api = api.clone();
        let fetch_items = fetch_items.clone();
        move |_| {
            if let Some(item) = pending_edit.take() {
                draft.set(item);
            }

            let api = api.clone();
            spawn_local(async move {
                if let Ok(data) = api.list_locations().await {
                    set_locations.set(data);
                }
            });
            fetch_items();
        }
    });

    // Search：以草稿字段为条件做服务端过滤
    let on_search = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let query = ItemQuery::from_draft(&draft.get_untracked());
            spawn_local(async move {
                if let Ok(data) = api.list_items(Some(&query)).await {
                    set_items.set(data);
                }
            });
        }
    };

    // Add-or-Update：由 ID 是否存在决定动作
    let on_submit = {
        let api = api.clone();
        let fetch_items = fetch_items.clone();
        move |_| {
            let item = draft.get_untracked();
            if !item.ready_to_submit() {
                return;
            }

            let api = api.clone();
            let fetch_items = fetch_items.clone();
            spawn_local(async move {
                let result = match submit_action(item.id.as_deref()) {
                    SubmitAction::Update => {
                        let id = item.id.clone().unwrap_or_default();
                        api.update_item(&id, &item).await.map(|_| "Item updated successfully")
                    }
                    SubmitAction::Create => {
                        api.create_item(&item).await.map(|_| "Item added successfully")
                    }
                };

                if let Ok(message) = result {
                    dialog::alert(message);
                    draft.set(Item::default());
                    fetch_items();
                }
            });
        }
    };

    // Delete：需要确认，且仅对携带 ID 的草稿可用
    let on_delete = {
        let api = api.clone();
        let fetch_items = fetch_items.clone();
        move |_| {
            let item = draft.get_untracked();
            let Some(id) = item.id.clone() else {
                return;
            };
            if !dialog::confirm("Are you sure you want to delete this item?") {
                return;
            }

            let api = api.clone();
            let fetch_items = fetch_items.clone();
            spawn_local(async move {
                if api.delete_item(&id).await.is_ok() {
                    dialog::alert("Item deleted successfully");
                    draft.set(Item::default());
                    fetch_items();
                }
            });
        }
    };

    // Clear：复位草稿并恢复完整列表
    let on_clear = {
        let fetch_items = fetch_items.clone();
        move |_| {
            draft.set(Item::default());
            fetch_items();
        }
    };

    // 网格上的 Modify：载入草稿
    let on_modify = move |item: Item| draft.set(item);

    // 网格上的数量调整
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

    let can_submit = move || draft.with(|d| d.ready_to_submit());
    let can_delete = move || draft.with(|d| d.id.as_deref().is_some_and(|id| !id.is_empty()));
    let submit_label = move || {
        draft.with(|d| match submit_action(d.id.as_deref()) {
            SubmitAction::Update => "Update",
            SubmitAction::Create => "Add",
        })
    };

    view! {
        <div class="max-w-7xl mx-auto p-8 space-y-6">
            <h2 class="text-2xl font-bold">"Update Inventory"</h2>

            <form class="card bg-base-100 shadow-xl p-6 space-y-4" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="item-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="item-name"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="item-location">
                                <span class="label-text">"Location"</span>
                            </label>
                            <select
                                id="item-location"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    draft.update(|d| d.location = event_target_value(&ev))
                                }
                            >
                                <option value="" selected=move || draft.with(|d| d.location.is_empty())>
                                    "Select a location"
                                </option>
                                <For
                                    each=move || locations.get()
                                    key=|loc| loc.id.clone().unwrap_or_default()
                                    children=move |loc| {
                                        let name = loc.name.clone();
                                        let value = name.clone();
                                        let selected = {
                                            let name = name.clone();
                                            move || draft.with(|d| d.location == name)
                                        };
                                        view! {
                                            <option value=value selected=selected>{name.clone()}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="item-bin">
                                <span class="label-text">"Bin"</span>
                            </label>
                            <input
                                id="item-bin"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.bin.clone())
                                on:input=move |ev| draft.update(|d| d.bin = event_target_value(&ev))
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="item-quantity">
                                <span class="label-text">"Quantity"</span>
                            </label>
                            <input
                                id="item-quantity"
                                type="number"
                                min="0"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.quantity.to_string())
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                        draft.update(|d| d.quantity = value);
                                    }
                                }
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="item-image">
                                <span class="label-text">"Image URL"</span>
                            </label>
                            <input
                                id="item-image"
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Enter image URL here"
                                prop:value=move || draft.with(|d| d.image.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.image = value.trim().to_string());
                                }
                                required
                            />
                        </div>
                    </div>
                </div>

                <div class="form-control">
                    <label class="label" for="item-description">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        id="item-description"
                        class="textarea textarea-bordered w-full"
                        rows="4"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.description = event_target_value(&ev))
                        }
                        required
                    ></textarea>
                </div>

                <div class="flex justify-between gap-2">
                    <button type="button" class="btn btn-primary" on:click=on_search>
                        "Search"
                    </button>
                    <button
                        type="button"
                        class="btn btn-success"
                        on:click=on_submit
                        disabled=move || !can_submit()
                    >
                        {submit_label}
                    </button>
                    <button
                        type="button"
                        class="btn btn-error"
                        on:click=on_delete
                        disabled=move || !can_delete()
                    >
                        "Delete"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
            </form>

            <ItemGrid items=items on_modify=on_modify on_quantity=on_quantity />
        </div>
    }
}
