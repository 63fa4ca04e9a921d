//! Table of the generated pulling program.
//!
//! Stateless: the rows come in as a read-only signal and are laid out in
//! the order received, one `<tr>` per maneuver. An empty program renders
//! nothing at all, not an empty table.

use leptos::*;

use crate::ManeuverRecord;

/// Column headers, in the order of [`ManeuverRecord::cells`].
pub const COLUMN_HEADERS: [&str; 6] = ["Manobra", "Punto", "Descripción", "Fase", "Código", "Subcódigo"];

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Position in the program; records carry no identifier of their own
    pub key: usize,
    pub cells: [String; 6],
}

impl TableRow {
    pub fn stripe_class(&self) -> &'static str {
        if self.key % 2 == 0 {
            "row-even"
        } else {
            "row-odd"
        }
    }
}

/// Project maneuvers into table rows, keeping their order.
pub fn table_rows(records: &[ManeuverRecord]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(key, record)| TableRow {
            key,
            cells: record.cells().map(str::to_string),
        })
        .collect()
}

#[component]
pub fn ProgramTable(
    /// Program to display
    #[prop(into)]
    rows: Signal<Vec<ManeuverRecord>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { }
        >
            <div class="program-table">
                <table>
                    <thead>
                        <tr>
                            {COLUMN_HEADERS.iter().map(|header| view! { <th>{*header}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.with(|r| table_rows(r))
                                .into_iter()
                                .map(|row| {
                                    let class_name = row.stripe_class();
                                    let key = row.key.to_string();
                                    view! {
                                        <tr class=class_name data-row=key>
                                            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
