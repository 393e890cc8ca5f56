use dioxus::prelude::*;
use shared_types::ParkingSpot;
use shared_ui::components::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
};

use crate::format_helpers::format_price;

#[component]
pub fn SpotTable(rows: Memo<Vec<ParkingSpot>>, selected_id: Signal<Option<i64>>) -> Element {
    let mut selected_id = selected_id;
    let current = selected_id();

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Location" }
                DataTableColumn { "Price/hr" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for spot in rows() {
                    DataTableRow {
                        key: "{spot.id}",
                        selected: current == Some(spot.id),
                        onclick: move |_| selected_id.set(Some(spot.id)),
                        DataTableCell { "{spot.location}" }
                        DataTableCell { {format_price(spot.price_per_hour)} }
                        DataTableCell {
                            tone: if spot.is_available { "positive".to_string() } else { "negative".to_string() },
                            {spot.status_label()}
                        }
                    }
                }
            }
        }
        if rows.read().is_empty() {
            p { class: "data-table-empty", "No parking spots match these filters." }
        }
    }
}
