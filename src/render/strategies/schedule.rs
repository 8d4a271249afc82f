use chrono::NaiveDate;
use serde_json::Value;

use crate::content::payloads::{CalendarEvent, CalendarPayload, CurriculumPayload};
use crate::content::source::parse_timestamp;
use crate::i18n::labels::format_date;
use crate::payload::normalize::normalize_list;
use crate::render::context::RenderCtx;
use crate::render::failure::RenderError;
use crate::render::node::{Element, Node, el};
use crate::render::strategies::{heading, para};

fn parse_date(raw: &Option<String>) -> Option<NaiveDate> {
    let s = raw.as_deref()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(s).map(|dt| dt.date_naive()))
}

/// Events in start-date order; undated or unparseable events follow in source order.
pub(crate) fn calendar(p: &CalendarPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let mut events: Vec<(Option<NaiveDate>, &CalendarEvent)> =
        p.events.iter().map(|e| (parse_date(&e.date), e)).collect();
    events.sort_by_key(|(d, _)| (d.is_none(), *d));

    let items = events.into_iter().map(|(start, e)| {
        let when = match (start, parse_date(&e.end_date)) {
            (Some(s), Some(end)) if end > s => Some(format!(
                "{} - {}",
                format_date(ctx.locale, s),
                format_date(ctx.locale, end)
            )),
            (Some(s), _) => Some(format_date(ctx.locale, s)),
            (None, _) => e.date.clone().filter(|d| !d.trim().is_empty()),
        };
        el("li")
            .class("calendar-event")
            .attr_opt("data-date", start.map(|d| d.to_string()))
            .child_opt(when.map(|w| el("time").text(w)))
            .child(el("h3").text(ctx.t(&e.title, &e.title_en)))
            .child_opt(para("location", ctx.t(&e.location, &e.location_en)))
            .child_opt(para("event-description", ctx.t(&e.description, &e.description_en)))
    });

    Ok(el("div")
        .class("calendar")
        .child_opt(heading(&p.heading, ctx))
        .child(el("ol").class("calendar-events").children(items))
        .into())
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Cells of one row. Object rows are read by (case-insensitive) column name.
fn row_cells(row: &Value, columns: &[String]) -> Vec<String> {
    let cells = normalize_list(row.clone());
    match cells.as_slice() {
        [Value::Object(map)] if !columns.is_empty() => columns
            .iter()
            .map(|c| {
                map.iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(c))
                    .map(|(_, v)| cell_text(v))
                    .unwrap_or_default()
            })
            .collect(),
        [Value::Object(map)] => map.values().map(cell_text).collect(),
        _ => cells.iter().map(cell_text).collect(),
    }
}

pub(crate) fn curriculum(p: &CurriculumPayload, ctx: &RenderCtx<'_>) -> Result<Node, RenderError> {
    let headers = ctx.t_list(&p.columns, &p.columns_en);
    let head = (!headers.is_empty()).then(|| {
        el("thead").child(
            el("tr").children(headers.iter().map(|h| el("th").text(h.clone()))),
        )
    });
    let rows: Vec<Element> = p
        .rows
        .iter()
        .map(|r| el("tr").children(row_cells(r, &p.columns).into_iter().map(|c| el("td").text(c))))
        .collect();

    Ok(el("div")
        .class("curriculum-table")
        .child_opt(heading(&p.heading, ctx))
        .child(el("table").child_opt(head).child(el("tbody").children(rows)))
        .into())
}

#[cfg(test)]
#[path = "../../../tests/unit/render/schedule.rs"]
mod tests;
