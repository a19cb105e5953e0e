//! Markets Page - grouped and list views over the bundled market dataset

use leptos::prelude::*;
use lib_core::data::asset_groups;
use lib_core::market::{
    CategoryFilter, MarketAggregator, MarketRow, MarketTab, SortColumn, SortDirection,
};
use lib_utils::format_usd_compact;
use shared::{AssetGroup, Category, Network};

use crate::components::FavoriteStar;
use crate::state::favorites::use_favorites_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grouped,
    List,
}

/// Fails into the error boundary when the bundled dataset is invalid.
#[component]
pub fn MarketsPage() -> impl IntoView {
    asset_groups().map(|groups| view! { <MarketsScreen groups=groups/> })
}

#[component]
fn MarketsScreen(groups: &'static [AssetGroup]) -> impl IntoView {
    let aggregator = RwSignal::new(MarketAggregator::new(groups));
    let view_mode = RwSignal::new(ViewMode::List);

    view! {
        <div class="page markets-page">
            <div class="markets-header">
                <h1 class="card-title">"Markets"</h1>
                <div class="segmented">
                    <button
                        class:active=move || view_mode.get() == ViewMode::List
                        on:click=move |_| view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                    <button
                        class:active=move || view_mode.get() == ViewMode::Grouped
                        on:click=move |_| view_mode.set(ViewMode::Grouped)
                    >
                        "By Asset"
                    </button>
                </div>
            </div>

            <MarketFilters aggregator=aggregator/>

            {move || match view_mode.get() {
                ViewMode::List => view! { <MarketTable aggregator=aggregator/> }.into_any(),
                ViewMode::Grouped => view! { <AssetGroups aggregator=aggregator/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MarketFilters(aggregator: RwSignal<MarketAggregator<'static>>) -> impl IntoView {
    let tab_button = move |tab: MarketTab, label: &'static str| {
        view! {
            <button
                class:active=move || aggregator.with(|a| a.filters().tab == tab)
                on:click=move |_| aggregator.update(|a| a.set_tab(tab))
            >
                {label}
            </button>
        }
    };

    let on_category = move |ev: web_sys::Event| {
        let category = match Category::from_name(&event_target_value(&ev)) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        };
        aggregator.update(|a| a.set_category(category));
    };

    view! {
        <div class="market-filters">
            <div class="segmented">
                {tab_button(MarketTab::All, "All")}
                {tab_button(MarketTab::Favorites, "Favorites")}
            </div>

            <select class="category-select" on:change=on_category>
                <option value="">{CategoryFilter::All.label()}</option>
                {Category::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <option
                                value=c.name()
                                prop:selected=move || {
                                    aggregator.with(|a| a.filters().category == CategoryFilter::Only(c))
                                }
                            >
                                {c.name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <div class="network-chips">
                <button
                    class="chip"
                    class:active=move || {
                        aggregator.with(|a| Network::ALL.iter().all(|n| a.is_network_selected(*n)))
                    }
                    on:click=move |_| aggregator.update(|a| a.select_all_networks())
                >
                    "All Networks"
                </button>
                {Network::ALL
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || aggregator.with(|a| a.is_network_selected(n))
                                on:click=move |_| aggregator.update(|a| a.toggle_network(n))
                            >
                                {n.name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MarketTable(aggregator: RwSignal<MarketAggregator<'static>>) -> impl IntoView {
    let favorites = use_favorites_context();
    let rows = move || favorites.favorites.with(|f| aggregator.with(|a| a.rows(f)));

    let header = move |column: SortColumn| {
        let indicator = move || {
            aggregator.with(|a| {
                if a.sort_column() != column {
                    ""
                } else if a.sort_direction() == SortDirection::Asc {
                    " ▲"
                } else {
                    " ▼"
                }
            })
        };
        view! {
            <th class="sortable" on:click=move |_| aggregator.update(|a| a.sort_by(column))>
                {column.label()}
                {indicator}
            </th>
        }
    };

    view! {
        <table class="market-table">
            <thead>
                <tr>
                    <th></th>
                    {SortColumn::ALL.into_iter().map(header).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan="9" class="empty-state">"No markets match these filters"</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        rows.into_iter()
                            .map(|row| view! { <MarketRowView row=row/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn MarketRowView(row: MarketRow) -> impl IntoView {
    let yt_value = if row.yt_redeemable_value_usd > 0.0 {
        format_usd_compact(row.yt_redeemable_value_usd)
    } else {
        "-".to_string()
    };

    view! {
        <tr>
            <td><FavoriteStar market_key=row.key.clone()/></td>
            <td>{row.asset}</td>
            <td>{row.market.token}</td>
            <td>{row.market.network.name()}</td>
            <td>{row.market.tvl}</td>
            <td>{row.market.volume_24h}</td>
            <td>{row.market.anchor_apy}</td>
            <td class="apy">{row.market.real_apy}</td>
            <td>{yt_value}</td>
        </tr>
    }
}

#[component]
fn AssetGroups(aggregator: RwSignal<MarketAggregator<'static>>) -> impl IntoView {
    let favorites = use_favorites_context();
    let groups = move || favorites.favorites.with(|f| aggregator.with(|a| a.grouped(f)));

    view! {
        <div class="asset-groups">
            {move || {
                let groups = groups();
                if groups.is_empty() {
                    view! { <p class="empty-state">"No markets match these filters"</p> }.into_any()
                } else {
                    groups
                        .into_iter()
                        .map(|group| view! { <AssetCard group=group/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn AssetCard(group: AssetGroup) -> impl IntoView {
    let categories = group
        .categories
        .iter()
        .map(|c| view! { <span class="tag">{c.name()}</span> })
        .collect_view();
    let asset = group.asset.clone();

    view! {
        <div class="card asset-card">
            <div class="asset-card-header">
                <h2>{group.asset.clone()}</h2>
                <span class="tvl">{group.total_tvl.clone()}</span>
            </div>
            <div class="tags">{categories}</div>
            <ul class="asset-markets">
                {group
                    .markets
                    .into_iter()
                    .map(|market| {
                        let key = shared::market_key(&asset, &market);
                        view! {
                            <li>
                                <FavoriteStar market_key=key/>
                                <span class="token">{market.token}</span>
                                <span class="network">{market.network.name()}</span>
                                <span class="tvl">{market.tvl}</span>
                                <span class="apy">{market.real_apy}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
