use crate::calendar::{CalendarApp, Selection, load_and_render};
use crate::dates::{iso_format, parse_iso};
use crate::errors::AppError;
use crate::grid::{MONTHS_SHOWN, cells_for_range, month_labels};
use crate::models::{CalendarQuery, CalendarResponse, ContributionData, DayPoint, DisplayEvent};
use crate::square::DayCell;
use crate::state::AppState;
use crate::ui::render_page;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::{Local, NaiveDate};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Html<String>, AppError> {
    let selection = parse_selection(&query)?;
    let calendar = load_and_render(&state.service, today(), selection).await;
    Ok(Html(render_page(&calendar)))
}

pub async fn get_contributions(State(state): State<AppState>) -> Json<ContributionData> {
    let data = state.data.lock().await;
    Json(data.clone())
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<CalendarResponse> {
    let today = today();
    let (start, end) = CalendarApp::window(today);
    let data = state.service.fetch_contribution_data().await;

    let days = cells_for_range(start, end, &data)
        .into_iter()
        .map(|cell| DayPoint {
            date: cell.iso_date(),
            count: cell.count,
            level: cell.level.as_u8(),
            description: cell.level.description().to_string(),
        })
        .collect();
    let months = month_labels(today, MONTHS_SHOWN)
        .into_iter()
        .map(|label| label.name().to_string())
        .collect();

    Json(CalendarResponse {
        start_date: iso_format(start),
        end_date: iso_format(end),
        days,
        months,
    })
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DisplayEvent>, AppError> {
    let date = parse_date(&date)?;
    let data = state.service.fetch_contribution_data().await;
    let count = data.get(&iso_format(date)).copied().unwrap_or(0);
    Ok(Json(DayCell::new(date, count).display_event()))
}

fn parse_selection(query: &CalendarQuery) -> Result<Option<Selection>, AppError> {
    if let Some(date) = query.date.as_deref().filter(|value| !value.is_empty()) {
        return parse_date(date).map(|date| Some(Selection::Date(date)));
    }
    Ok(query.level.map(Selection::Level))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_iso(value).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn selection_prefers_date_over_level() {
        let query = CalendarQuery {
            date: Some("2024-01-02".into()),
            level: Some(3),
        };
        assert_eq!(
            parse_selection(&query).unwrap(),
            Some(Selection::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()))
        );

        let query = CalendarQuery {
            date: Some(String::new()),
            level: Some(3),
        };
        assert_eq!(parse_selection(&query).unwrap(), Some(Selection::Level(3)));
        assert_eq!(parse_selection(&CalendarQuery::default()).unwrap(), None);
    }

    #[test]
    fn invalid_date_is_bad_request() {
        let query = CalendarQuery {
            date: Some("02.01.2024".into()),
            level: None,
        };
        let err = parse_selection(&query).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
