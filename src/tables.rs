use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::catalog::Catalog, quantity::cost::Cost};

/// Build the plan ranking table, highlighting the current plan of the meter.
#[must_use]
pub fn build_ranking_table(
    ranking: &[(String, Cost)],
    catalog: &Catalog,
    current_plan_id: Option<&str>,
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["#", "Plan", "Supplier", "Cost", "Current"]);
    for (position, (name, cost)) in ranking.iter().enumerate() {
        let is_current = current_plan_id == Some(name.as_str());
        let supplier =
            catalog.get(name).and_then(|price_plan| price_plan.supplier.as_deref()).unwrap_or("");
        table.add_row(vec![
            Cell::new(position + 1).add_attribute(Attribute::Dim),
            Cell::new(name).fg(if is_current { Color::Cyan } else { Color::Reset }),
            Cell::new(supplier),
            Cell::new(cost).set_alignment(CellAlignment::Right).fg(if position == 0 {
                Color::Green
            } else {
                Color::Reset
            }),
            Cell::new(if is_current { "✓" } else { "" }),
        ]);
    }
    table
}
