use cryptopulse_core::models::coin::{Coin, RangeDays};
use cryptopulse_core::models::selection::Selection;

const TEMPLATE: &str = include_str!("../assets/index.html");

/// Render the dashboard page with `selection` preselected in the dropdowns.
///
/// Cards and chart are not in the HTML: the page fills them from the
/// `/api/events` stream, which always starts with the current view.
pub fn render_page(selection: Selection) -> String {
    let coins = Coin::ALL
        .iter()
        .map(|c| option(c.id(), &c.label(), *c == selection.coin))
        .collect::<Vec<_>>()
        .join("\n");
    let ranges = RangeDays::ALL
        .iter()
        .map(|r| option(&r.days().to_string(), &r.label(), *r == selection.range))
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replace("{{COIN_OPTIONS}}", &coins)
        .replace("{{RANGE_OPTIONS}}", &ranges)
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(r#"      <option value="{value}"{selected}>{label}</option>"#)
}
