//! 位置维护页
//!
//! 顶部为位置草稿表单，下方为按草稿字段即时过滤的位置列表。
//! Search 触发服务端重新拉取；Add / Update / Delete / Clear 与库存维护页同语义。

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cards::{LocationList, is_valid_image_url};
use crate::api::use_api;
use crate::inactivity::use_inactivity_monitor;
use crate::models::{Location, LocationFilter, SubmitAction, submit_action};
use crate::web::dialog;

#[component]
pub fn UpdateLocationsPage() -> impl IntoView {
    use_inactivity_monitor();

    let api = use_api();

    let draft = RwSignal::new(Location::default());
    let (locations, set_locations) = signal(Vec::<Location>::new());

    let fetch_locations = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(data) = api.list_locations().await {
                    set_locations.set(data);
                }
            });
        }
    };

    Effect::new({
        let fetch_locations = fetch_locations.clone();
        move |_| fetch_locations()
    });

    // 列表过滤条件随草稿字段即时变化
    let filter = Signal::derive(move || {
        draft.with(|d| LocationFilter {
            name: d.name.clone(),
            building: d.building.clone(),
            owner: d.owner.clone(),
        })
    });

    // Search：重新向服务端取全量，再由上面的过滤器收窄
    let on_search = {
        let fetch_locations = fetch_locations.clone();
        move |_| fetch_locations()
    };

    let on_submit = {
        let api = api.clone();
        let fetch_locations = fetch_locations.clone();
        move |_| {
            let location = draft.get_untracked();
            if !location.ready_to_submit() {
                return;
            }

            let api = api.clone();
            let fetch_locations = fetch_locations.clone();
            spawn_local(async move {
                let result = match submit_action(location.id.as_deref()) {
                    SubmitAction::Update => {
                        let id = location.id.clone().unwrap_or_default();
                        api.update_location(&id, &location)
                            .await
                            .map(|_| "Location updated successfully")
                    }
                    SubmitAction::Create => api
                        .create_location(&location)
                        .await
                        .map(|_| "Location added successfully"),
                };

                if let Ok(message) = result {
                    dialog::alert(message);
                    draft.set(Location::default());
                    fetch_locations();
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let fetch_locations = fetch_locations.clone();
        move |_| {
            let location = draft.get_untracked();
            let Some(id) = location.id.clone() else {
                return;
            };
            if !dialog::confirm("Are you sure you want to delete this location?") {
                return;
            }

            let api = api.clone();
            let fetch_locations = fetch_locations.clone();
            spawn_local(async move {
                if api.delete_location(&id).await.is_ok() {
                    dialog::alert("Location deleted successfully");
                    draft.set(Location::default());
                    fetch_locations();
                }
            });
        }
    };

    let on_clear = {
        let fetch_locations = fetch_locations.clone();
        move |_| {
            draft.set(Location::default());
            fetch_locations();
        }
    };

    let on_modify = move |location: Location| draft.set(location);

    let can_submit = move || draft.with(|d| d.ready_to_submit());
    let can_delete = move || draft.with(|d| d.id.as_deref().is_some_and(|id| !id.is_empty()));
    let submit_label = move || {
        draft.with(|d| match submit_action(d.id.as_deref()) {
            SubmitAction::Update => "Update",
            SubmitAction::Create => "Add",
        })
    };
    let show_preview = move || draft.with(|d| is_valid_image_url(&d.image));

    view! {
        <div class="max-w-7xl mx-auto p-8 space-y-6">
            <h2 class="text-2xl font-bold">"Update Locations"</h2>

            <form class="card bg-base-100 shadow-xl p-6 space-y-4" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="location-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="location-name"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="location-building">
                                <span class="label-text">"Building"</span>
                            </label>
                            <input
                                id="location-building"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.building.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.building = event_target_value(&ev))
                                }
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="location-owner">
                                <span class="label-text">"Owner"</span>
                            </label>
                            <input
                                id="location-owner"
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=move || draft.with(|d| d.owner.clone())
                                on:input=move |ev| draft.update(|d| d.owner = event_target_value(&ev))
                                required
                            />
                        </div>
                    </div>

                    <div class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="location-image">
                                <span class="label-text">"Image URL"</span>
                            </label>
                            <input
                                id="location-image"
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

                        <Show when=show_preview>
                            <figure class="h-40 overflow-hidden rounded-lg">
                                <img
                                    src=move || draft.with(|d| d.image.clone())
                                    alt="Location preview"
                                    class="object-cover w-full"
                                />
                            </figure>
                        </Show>
                    </div>
                </div>

                <div class="form-control">
                    <label class="label" for="location-description">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        id="location-description"
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

            <LocationList locations=locations filter=filter on_modify=on_modify />
        </div>
    }
}
