//! Allocation List Component
//!
//! Compact symbol/percentage listing for allocation snapshots, used by the
//! transaction table's before/after columns.

use indexmap::IndexMap;
use leptos::*;

use crate::format::format_share_compact;
use crate::model::visible_allocations;

/// Compact allocation listing. Entries at or below `floor` are omitted.
#[component]
pub fn AllocationList(
    allocations: IndexMap<String, f64>,
    floor: f64,
) -> impl IntoView {
    let entries = visible_allocations(&allocations, floor);

    view! {
        <div class="text-sm space-y-0.5">
            {entries.into_iter().map(|(symbol, ratio)| {
                view! {
                    <div>{format!("{}: {}", symbol, format_share_compact(ratio))}</div>
                }
            }).collect_view()}
        </div>
    }
}
