//! Dashboard Page
//!
//! Portfolio overview: allocation pie and table, period performance, and
//! per-currency changes. The three fetches run concurrently and the page
//! only renders once all of them succeed.

use futures_util::try_join;
use leptos::*;

use crate::api;
use crate::components::{AllocationPie, ErrorBanner, Loading, PerformanceBars};
use crate::format::{
    format_quantity, format_share, format_signed_percent, format_timestamp, format_usd,
    format_usd_price,
};
use crate::model::{
    visible_allocations, CurrencyPerformance, PerformancePoint, PortfolioSnapshot,
    PORTFOLIO_ALLOCATION_FLOOR,
};
use crate::state::{create_fetch_state, FetchState};

type DashboardData = (
    PortfolioSnapshot,
    Vec<PerformancePoint>,
    Vec<CurrencyPerformance>,
);

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    // Join semantics: one failed fetch fails the whole page, no partial render
    let resource = create_fetch_state(|| async {
        try_join!(
            api::fetch_current_portfolio(),
            api::fetch_performance(),
            api::fetch_currency_performance(),
        )
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Portfolio state at a glance"</p>
            </div>

            {move || match resource.state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(message) => view! {
                    <ErrorBanner message=message on_retry=move |_| resource.retry() />
                }.into_view(),
                FetchState::Ready(data) => {
                    let (portfolio, performance, currency): DashboardData = data;
                    view! {
                        <AllocationSection portfolio=portfolio />
                        <PerformanceSection points=performance />
                        <CurrencySection entries=currency />
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Allocation pie plus holdings table
#[component]
fn AllocationSection(portfolio: PortfolioSnapshot) -> impl IntoView {
    let entries = visible_allocations(&portfolio.allocations, PORTFOLIO_ALLOCATION_FLOOR);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Asset Allocation"</h2>

            <div class="grid md:grid-cols-2 gap-8">
                <AllocationPie entries=entries.clone() />

                <div>
                    <h3 class="text-lg font-semibold mb-4">
                        {format!("Total Value: {}", format_usd(portfolio.total_value_usdt))}
                    </h3>

                    <table class="w-full text-left">
                        <thead>
                            <tr class="text-gray-400 border-b border-gray-700">
                                <th class="py-2">"Asset"</th>
                                <th class="py-2">"Quantity"</th>
                                <th class="py-2">"Value (USDT)"</th>
                                <th class="py-2">"Share"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {entries.iter().map(|(symbol, ratio)| {
                                let quantity = portfolio.holdings.get(symbol).copied().unwrap_or(0.0);
                                let value = portfolio.values_usdt.get(symbol).copied().unwrap_or(0.0);
                                view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        <td class="py-2">{symbol.clone()}</td>
                                        <td class="py-2">{format_quantity(quantity)}</td>
                                        <td class="py-2">{format_usd(value)}</td>
                                        <td class="py-2">{format_share(*ratio)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>

                    <p class="text-gray-500 text-sm mt-3">
                        {format!("As of {}", format_timestamp(&portfolio.timestamp))}
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Portfolio-wide change per period
#[component]
fn PerformanceSection(points: Vec<PerformancePoint>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Portfolio Performance"</h2>

            <PerformanceBars points=points.clone() />

            <table class="w-full text-left mt-6">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Period"</th>
                        <th class="py-2">"Total Value"</th>
                        <th class="py-2">"Change"</th>
                    </tr>
                </thead>
                <tbody>
                    {points.into_iter().map(|point| {
                        view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2">{point.period}</td>
                                <td class="py-2">{format_usd(point.total_value_usdt)}</td>
                                <td class=format!("py-2 {}", change_color(point.change_percent))>
                                    {format_signed_percent(point.change_percent)}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// Per-currency price and horizon changes
#[component]
fn CurrencySection(entries: Vec<CurrencyPerformance>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Currency Performance"</h2>

            <table class="w-full text-left">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Symbol"</th>
                        <th class="py-2">"Price"</th>
                        <th class="py-2">"24h"</th>
                        <th class="py-2">"1D"</th>
                        <th class="py-2">"1W"</th>
                        <th class="py-2">"1M"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries.into_iter().map(|entry| {
                        view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2">{entry.symbol}</td>
                                <td class="py-2">{format_usd_price(entry.current_price)}</td>
                                {horizon_cell(Some(entry.change_24h))}
                                {horizon_cell(entry.change_1d)}
                                {horizon_cell(entry.change_1w)}
                                {horizon_cell(entry.change_1m)}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// One change cell; horizons with no data render a dash, not a number.
fn horizon_cell(value: Option<f64>) -> View {
    match value {
        Some(v) => view! {
            <td class=format!("py-2 {}", change_color(v))>{format_signed_percent(v)}</td>
        }
        .into_view(),
        None => view! {
            <td class="py-2 text-gray-500">"-"</td>
        }
        .into_view(),
    }
}

/// Sign coloring for percent changes
fn change_color(value: f64) -> &'static str {
    if value >= 0.0 {
        "text-green-400"
    } else {
        "text-red-400"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_change_counts_as_a_gain() {
        assert_eq!(change_color(0.0), "text-green-400");
        assert_eq!(change_color(-0.01), "text-red-400");
    }
}
