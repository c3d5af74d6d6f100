//! Transactions Page
//!
//! Executed and attempted trades with the allocation state before and after
//! each one.

use leptos::*;

use crate::api;
use crate::components::{AllocationList, ErrorBanner, Loading};
use crate::format::{format_quantity, format_timestamp, format_trade_price};
use crate::model::{Transaction, PORTFOLIO_ALLOCATION_FLOOR};
use crate::state::{create_fetch_state, FetchState};

/// Transaction history page component
#[component]
pub fn Transactions() -> impl IntoView {
    let resource = create_fetch_state(|| api::fetch_transactions(api::DEFAULT_PAGE_LIMIT, None));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Transactions"</h1>
                <p class="text-gray-400 mt-1">"Trade history of the trading agent"</p>
            </div>

            {move || match resource.state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(message) => view! {
                    <ErrorBanner message=message on_retry=move |_| resource.retry() />
                }.into_view(),
                FetchState::Ready(transactions) => transactions_view(transactions),
            }}
        </div>
    }
}

/// Ready-state content: an empty-state card for an empty history, the table
/// otherwise.
fn transactions_view(transactions: Vec<Transaction>) -> View {
    if transactions.is_empty() {
        view! {
            <div class="bg-gray-800 rounded-xl p-6 text-center">
                <p class="text-gray-400">"No transactions yet"</p>
            </div>
        }
        .into_view()
    } else {
        view! { <TransactionTable transactions=transactions /> }.into_view()
    }
}

/// Transaction history table
#[component]
fn TransactionTable(transactions: Vec<Transaction>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
            <table class="w-full text-left">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-2 pr-4">"Time"</th>
                        <th class="py-2 pr-4">"Symbol"</th>
                        <th class="py-2 pr-4">"Side"</th>
                        <th class="py-2 pr-4">"Amount"</th>
                        <th class="py-2 pr-4">"Price"</th>
                        <th class="py-2 pr-4">"Status"</th>
                        <th class="py-2 pr-4">"Before"</th>
                        <th class="py-2">"After"</th>
                    </tr>
                </thead>
                <tbody>
                    {transactions.into_iter().map(|tx| {
                        view! { <TransactionRow transaction=tx /> }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// One transaction row
#[component]
fn TransactionRow(transaction: Transaction) -> impl IntoView {
    let (side_label, side_class) = if transaction.is_buy() {
        ("Buy", "bg-green-600")
    } else {
        ("Sell", "bg-red-600")
    };

    let (status_label, status_class) = if transaction.succeeded() {
        ("Success", "text-green-400")
    } else {
        ("Failed", "text-red-400")
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 align-top">
            <td class="py-3 pr-4 whitespace-nowrap">
                {format_timestamp(&transaction.timestamp)}
            </td>
            <td class="py-3 pr-4">{transaction.symbol}</td>
            <td class="py-3 pr-4">
                <span class=format!(
                    "{} text-white text-sm font-bold px-2 py-1 rounded",
                    side_class
                )>
                    {side_label}
                </span>
            </td>
            <td class="py-3 pr-4">{format_quantity(transaction.amount)}</td>
            <td class="py-3 pr-4">{format_trade_price(transaction.price)}</td>
            <td class=format!("py-3 pr-4 font-bold {}", status_class)>{status_label}</td>
            <td class="py-3 pr-4">
                <AllocationList
                    allocations=transaction.pre_allocation
                    floor=PORTFOLIO_ALLOCATION_FLOOR
                />
            </td>
            <td class="py-3">
                <AllocationList
                    allocations=transaction.post_allocation
                    floor=PORTFOLIO_ALLOCATION_FLOOR
                />
            </td>
        </tr>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::{document, mount_to_body};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_history_renders_empty_state_card_not_a_table() {
        mount_to_body(|| transactions_view(Vec::new()));

        let body = document().body().unwrap();
        let html = body.inner_html();
        assert!(html.contains("No transactions yet"));
        assert!(!html.contains("<table"));
    }
}
