//! 位置卡片与列表

use leptos::prelude::*;

use super::is_valid_image_url;
use crate::models::{Location, LocationFilter};

/// 单个位置卡片
#[component]
pub fn LocationCard(
    location: Location,
    #[prop(into)] on_modify: Callback<Location>,
) -> impl IntoView {
    let has_image = is_valid_image_url(&location.image);
    let image_url = location.image.clone();
    let image_alt = location.name.clone();

    let modify_location = location.clone();
    let on_modify_click = move |_| on_modify.run(modify_location.clone());

    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <Show when=move || has_image>
                <figure class="h-48 overflow-hidden">
                    <img src=image_url.clone() alt=image_alt.clone() class="object-cover w-full" />
                </figure>
            </Show>
            <div class="card-body p-4">
                <h3 class="card-title text-base">{location.name.clone()}</h3>
                <p class="text-sm text-base-content/70">
                    <strong>"Description: "</strong> {location.description.clone()}
                    <br />
                    <strong>"Building: "</strong> {location.building.clone()}
                    <br />
                    <strong>"Owner: "</strong> {location.owner.clone()}
                </p>
                <div class="card-actions justify-end">
                    <button class="btn btn-warning btn-sm" on:click=on_modify_click>
                        "Modify"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// 位置列表（应用客户端过滤条件）
#[component]
pub fn LocationList(
    #[prop(into)] locations: Signal<Vec<Location>>,
    #[prop(into)] filter: Signal<LocationFilter>,
    #[prop(into)] on_modify: Callback<Location>,
) -> impl IntoView {
    let filtered = move || {
        let filter = filter.get();
        locations
            .get()
            .into_iter()
            .filter(|location| filter.matches(location))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <For
                each=filtered
                key=|location| location.id.clone().unwrap_or_default()
                children=move |location| {
                    view! { <LocationCard location=location on_modify=on_modify /> }
                }
            />
        </div>
    }
}
