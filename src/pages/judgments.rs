//! Judgments Page
//!
//! History of trading decisions: target allocations, rationale, consulted
//! sources, and which information sources could be fetched.

use leptos::*;

use crate::api;
use crate::components::{ErrorBanner, Loading};
use crate::format::{format_share, format_timestamp};
use crate::model::{visible_allocations, Judgment, JUDGMENT_ALLOCATION_FLOOR};
use crate::state::{create_fetch_state, FetchState};

/// Judgment history page component
#[component]
pub fn Judgments() -> impl IntoView {
    let resource = create_fetch_state(|| api::fetch_judgments(api::DEFAULT_PAGE_LIMIT, None));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Judgments"</h1>
                <p class="text-gray-400 mt-1">"Decision history of the trading agent"</p>
            </div>

            {move || match resource.state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(message) => view! {
                    <ErrorBanner message=message on_retry=move |_| resource.retry() />
                }.into_view(),
                FetchState::Ready(judgments) => {
                    if judgments.is_empty() {
                        view! {
                            <div class="bg-gray-800 rounded-xl p-6 text-center">
                                <p class="text-gray-400">"No judgments yet"</p>
                            </div>
                        }.into_view()
                    } else {
                        judgments.into_iter().map(|judgment| {
                            view! { <JudgmentCard judgment=judgment /> }
                        }).collect_view()
                    }
                }
            }}
        </div>
    }
}

/// One judgment record
#[component]
fn JudgmentCard(judgment: Judgment) -> impl IntoView {
    let target_entries =
        visible_allocations(&judgment.target_allocations, JUDGMENT_ALLOCATION_FLOOR);

    let badge_class = if judgment.is_high_confidence() {
        "bg-green-600"
    } else {
        "bg-yellow-600"
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-6">
            // Header: id, timestamp, confidence badge
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-lg font-semibold">
                        {format!("Judgment {}", judgment.judgment_id)}
                    </h2>
                    <p class="text-gray-400 text-sm mt-1">
                        {format_timestamp(&judgment.timestamp)}
                    </p>
                </div>
                <span class=format!(
                    "{} text-white text-sm font-bold px-2 py-1 rounded",
                    badge_class
                )>
                    {format!("Confidence: {}/10", judgment.confidence_score)}
                </span>
            </div>

            // Target allocations
            <div>
                <h3 class="font-semibold mb-2">"Target Allocations"</h3>
                <table class="w-full text-left">
                    <thead>
                        <tr class="text-gray-400 border-b border-gray-700">
                            <th class="py-2">"Asset"</th>
                            <th class="py-2">"Target Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {target_entries.into_iter().map(|(symbol, ratio)| {
                            view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-2">{symbol}</td>
                                    <td class="py-2">{format_share(ratio)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Reasoning
            <div>
                <h3 class="font-semibold mb-2">"Reasoning"</h3>
                <p class="text-gray-300 whitespace-pre-wrap leading-relaxed">
                    {judgment.reasoning_text}
                </p>
            </div>

            // Consulted URLs (only when any)
            {(!judgment.source_urls.is_empty()).then(|| view! {
                <div>
                    <h3 class="font-semibold mb-2">"Sources"</h3>
                    <ul class="list-disc list-inside space-y-1">
                        {judgment.source_urls.iter().map(|url| {
                            view! {
                                <li>
                                    <a
                                        href=url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-blue-400 hover:underline break-all"
                                    >
                                        {url.clone()}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            })}

            // Per-source fetch status
            <div>
                <h3 class="font-semibold mb-2">"Information Sources"</h3>
                <table class="w-full text-left">
                    <thead>
                        <tr class="text-gray-400 border-b border-gray-700">
                            <th class="py-2">"Source"</th>
                            <th class="py-2">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {judgment.info_fetch_status.iter().map(|(source, fetched)| {
                            let (label, color) = if *fetched {
                                ("Success", "text-green-400")
                            } else {
                                ("Failed", "text-red-400")
                            };
                            view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-2">{source.clone()}</td>
                                    <td class=format!("py-2 {}", color)>{label}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Sources that could not be fetched (only when any)
            {(!judgment.failed_sources.is_empty()).then(|| view! {
                <div>
                    <h3 class="font-semibold mb-2">"Failed Sources"</h3>
                    <ul class="list-disc list-inside space-y-1 text-red-400">
                        {judgment.failed_sources.iter().map(|source| {
                            view! { <li>{source.clone()}</li> }
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
