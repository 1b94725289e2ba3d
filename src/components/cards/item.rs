//! 条目卡片与网格

use leptos::prelude::*;

use super::is_valid_image_url;
use crate::models::Item;

/// 数量下拉框的上限
const QUANTITY_MAX: u32 = 20;

/// 单个条目卡片
///
/// 数量调整与 Modify 均上抛给页面处理；`on_quantity` 收到的是
/// 带有新数量的完整条目记录。
#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] on_modify: Callback<Item>,
    #[prop(into)] on_quantity: Callback<Item>,
) -> impl IntoView {
    let (quantity, set_quantity) = signal(item.quantity);
    // 数量被改动后，标签从 "Quantity" 变为 "Update"
    let (touched, set_touched) = signal(false);

    let has_image = is_valid_image_url(&item.image);
    let image_url = item.image.clone();
    let image_alt = item.name.clone();

    let modify_item = item.clone();
    let on_modify_click = move |_| on_modify.run(modify_item.clone());

    let quantity_item = item.clone();
    let on_update_quantity = move |_| {
        set_touched.set(false);
        on_quantity.run(Item {
            quantity: quantity.get(),
            ..quantity_item.clone()
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <div class="card-body p-4">
                <h3 class="card-title text-base">{item.name.clone()}</h3>
                <Show when=move || has_image>
                    <img src=image_url.clone() alt=image_alt.clone() class="rounded-lg" />
                </Show>
                <p class="text-sm text-base-content/70">
                    "Description: " {item.description.clone()}
                    <br />
                    "Location: " {item.location.clone()}
                </p>
            </div>
            <div class="card-actions items-end justify-between p-4 pt-0">
                <div class="flex flex-col">
                    <label class="label-text mb-1">
                        {move || if touched.get() { "Update" } else { "Quantity:" }}
                    </label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                set_quantity.set(value);
                                set_touched.set(true);
                            }
                        }
                    >
                        {(0..=QUANTITY_MAX)
                            .map(|n| {
                                view! {
                                    <option value=n.to_string() selected=move || quantity.get() == n>
                                        {n.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button class="btn btn-primary btn-sm" on:click=on_update_quantity>
                    "Update Quantity"
                </button>
                <button class="btn btn-warning btn-sm" on:click=on_modify_click>
                    "Modify"
                </button>
            </div>
        </div>
    }
}

/// 条目网格
#[component]
pub fn ItemGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_modify: Callback<Item>,
    #[prop(into)] on_quantity: Callback<Item>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <For
                each=move || items.get()
                key=|item| item.id.clone().unwrap_or_default()
                children=move |item| {
                    view! { <ItemCard item=item on_modify=on_modify on_quantity=on_quantity /> }
                }
            />
        </div>
    }
}
