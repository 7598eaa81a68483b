//! Moving the reference date by one grid unit.

use chrono::{Days, Months, NaiveDate};

use super::grid::first_of_month;
use super::{Direction, Granularity};

/// Step `reference` one unit in `direction`.
///
/// Month steps always land on day 1 of the target month, so stepping from
/// 31 January never skips February. Week steps move 7 days, day steps 1.
/// At the edge of chrono's representable range the date stays put.
pub fn advance(reference: NaiveDate, granularity: Granularity, direction: Direction) -> NaiveDate {
    let stepped = match (granularity, direction) {
        (Granularity::Month, Direction::Forward) => {
            first_of_month(reference).checked_add_months(Months::new(1))
        }
        (Granularity::Month, Direction::Backward) => {
            first_of_month(reference).checked_sub_months(Months::new(1))
        }
        (Granularity::Week, Direction::Forward) => reference.checked_add_days(Days::new(7)),
        (Granularity::Week, Direction::Backward) => reference.checked_sub_days(Days::new(7)),
        (Granularity::Day, Direction::Forward) => reference.succ_opt(),
        (Granularity::Day, Direction::Backward) => reference.pred_opt(),
    };

    stepped.unwrap_or(reference)
}
