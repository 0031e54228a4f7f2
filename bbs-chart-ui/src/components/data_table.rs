//! Sortable, paginated table for a `TablePayload`.

use bbs_core::table::{page_of, TablePayload};
use dioxus::prelude::*;
use serde_json::{Map, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// Numbers compare numerically, strings lexically; missing and null values
/// sort last in either direction.
fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Option<Ordering> {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Some(Value::String(x)), Some(Value::String(y))) => Some(x.cmp(y)),
        _ => None,
    }
}

fn is_blank(v: Option<&Value>) -> bool {
    matches!(v, None | Some(Value::Null))
}

/// Stable sort of `records` by the column `id`.
pub fn sort_records(records: &[Map<String, Value>], id: &str, direction: SortDirection) -> Vec<Map<String, Value>> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let (va, vb) = (a.get(id), b.get(id));
        match (is_blank(va), is_blank(vb)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = compare_cells(va, vb).unwrap_or(Ordering::Equal);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
    sorted
}

fn cell_text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub table: TablePayload,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut sort = use_signal(|| None::<(String, SortDirection)>);
    let mut page = use_signal(|| 0usize);

    // New payload (another station): back to the server's order.
    let heading = props.table.heading.clone();
    use_effect(use_reactive((&heading,), move |(heading,)| {
        log::info!("[BBS Debug] table reset for {}", heading);
        sort.set(None);
        page.set(0);
    }));

    let table = &props.table;
    let records = match sort() {
        Some((id, direction)) => sort_records(&table.data, &id, direction),
        None => table.data.clone(),
    };
    let page_count = table.page_count().max(1);
    let current = page().min(page_count - 1);
    let visible = page_of(&records, table.page_size, current).to_vec();
    let columns = table.columns.clone();
    let page_label = format!("{} / {}", current + 1, page_count);

    rsx! {
        div {
            style: "margin-top: 16px;",
            h3 { style: "margin: 0 0 4px 0;", "{table.heading}" }
            p { style: "margin: 0 0 8px 0; font-size: 13px; color: #888;", "{table.explanation}" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        for column in columns.iter().cloned() {
                            {
                                let arrow = match sort() {
                                    Some((id, direction)) if id == column.id => direction.arrow(),
                                    _ => "",
                                };
                                let id = column.id.clone();
                                rsx! {
                                    th {
                                        style: "text-align: left; padding: 6px; border-bottom: 1px solid #555; cursor: pointer;",
                                        onclick: move |_| {
                                            let next = match sort() {
                                                Some((cur, direction)) if cur == id => direction.flip(),
                                                _ => SortDirection::Ascending,
                                            };
                                            sort.set(Some((id.clone(), next)));
                                            page.set(0);
                                        },
                                        "{column.name}{arrow}"
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for record in visible.iter() {
                        tr {
                            for column in columns.iter() {
                                td {
                                    style: "padding: 6px; border-bottom: 1px solid #333;",
                                    {cell_text(record.get(&column.id))}
                                }
                            }
                        }
                    }
                }
            }
            if page_count > 1 {
                div {
                    style: "display: flex; gap: 8px; align-items: center; margin-top: 8px;",
                    button {
                        disabled: current == 0,
                        onclick: move |_| page.set(current.saturating_sub(1)),
                        "‹"
                    }
                    span { "{page_label}" }
                    button {
                        disabled: current + 1 >= page_count,
                        onclick: move |_| page.set(current + 1),
                        "›"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    fn rows() -> Vec<Map<String, Value>> {
        vec![
            record(json!({"Station": "Kendall T", "Number of Trips": 4})),
            record(json!({"Station": "Andrew Station", "Number of Trips": 12})),
            record(json!({"Station": "MIT Vassar", "Number of Trips": null})),
            record(json!({"Station": "Boylston", "Number of Trips": 7.5})),
        ]
    }

    fn names(sorted: &[Map<String, Value>]) -> Vec<&str> {
        sorted.iter().map(|r| r["Station"].as_str().unwrap()).collect()
    }

    #[test]
    fn numbers_sort_numerically() {
        let sorted = sort_records(&rows(), "Number of Trips", SortDirection::Descending);
        assert_eq!(names(&sorted), ["Andrew Station", "Boylston", "Kendall T", "MIT Vassar"]);
    }

    #[test]
    fn nulls_stay_last_ascending() {
        let sorted = sort_records(&rows(), "Number of Trips", SortDirection::Ascending);
        assert_eq!(names(&sorted), ["Kendall T", "Boylston", "Andrew Station", "MIT Vassar"]);
    }

    #[test]
    fn strings_sort_lexically() {
        let sorted = sort_records(&rows(), "Station", SortDirection::Ascending);
        assert_eq!(names(&sorted)[0], "Andrew Station");
    }

    #[test]
    fn paging_slices_the_sorted_rows() {
        let many: Vec<Map<String, Value>> = (0..23)
            .map(|i| record(json!({"Station": format!("S{:02}", i), "Number of Trips": i})))
            .collect();
        let sorted = sort_records(&many, "Number of Trips", SortDirection::Descending);
        let last = page_of(&sorted, 10, 2);
        assert_eq!(names(last), ["S02", "S01", "S00"]);
    }

    #[test]
    fn cell_text_unquotes_strings() {
        assert_eq!(cell_text(Some(&json!("O'Hare"))), "O'Hare");
        assert_eq!(cell_text(Some(&json!(0.25))), "0.25");
        assert_eq!(cell_text(None), "");
    }
}
