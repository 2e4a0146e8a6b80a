use super::*;
use crate::model::holiday::HolidayKind;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holiday(date: NaiveDate) -> Holiday {
    Holiday {
        id: "h".into(),
        name: "Founders Day".into(),
        date,
        kind: HolidayKind::Academic,
        description: None,
    }
}

#[test]
fn sundays_and_listed_days_are_holidays() {
    let map = HolidayMap::from_holidays(&[holiday(day(2026, 10, 2))]);
    assert!(map.is_holiday(day(2026, 10, 18))); // Sunday
    assert!(map.is_holiday(day(2026, 10, 2)));
    assert!(!map.is_holiday(day(2026, 10, 17))); // Saturday
    assert!(!map.is_listed(day(2026, 10, 18)));
}

#[test]
fn year_has_twelve_months_with_monday_first_offsets() {
    let cal = YearCalendar::build(2026, &HolidayMap::default(), day(2026, 10, 17));

    assert_eq!(cal.months.len(), 12);
    // 1 Jan 2026 is a Thursday
    assert_eq!(cal.months[0].leading_blanks, 3);
    assert_eq!(cal.months[0].name, "January");
    // 1 Feb 2026 is a Sunday
    assert_eq!(cal.months[1].leading_blanks, 6);
    assert_eq!(cal.months[1].days.len(), 28);
    assert_eq!(cal.months[9].days.len(), 31);
}

#[test]
fn leap_february_has_29_days() {
    let cal = YearCalendar::build(2028, &HolidayMap::default(), day(2028, 1, 1));
    assert_eq!(cal.months[1].days.len(), 29);
}

#[test]
fn holidays_are_not_selectable_and_today_is_flagged() {
    let map = HolidayMap::from_holidays(&[holiday(day(2026, 10, 2))]);
    let cal = YearCalendar::build(2026, &map, day(2026, 10, 17));

    let gandhi = cal.day(day(2026, 10, 2)).unwrap();
    assert!(gandhi.is_holiday);
    assert!(!gandhi.selectable);

    let today = cal.day(day(2026, 10, 17)).unwrap();
    assert!(today.is_today);
    assert!(today.selectable);

    // future working days stay selectable; the marking sheet locks them
    assert!(cal.day(day(2026, 10, 20)).unwrap().selectable);
    assert!(cal.day(day(2027, 1, 1)).is_none());
}

#[test]
fn summary_counts_unmarked_working_days_as_present() {
    let summary = year_summary(2026, &HashMap::new());
    // 2026 has 52 Sundays
    assert_eq!(summary.holiday, 52);
    assert_eq!(summary.present, 365 - 52);
    assert_eq!(summary.absent, 0);
    assert_eq!(summary.attendance_rate(), 100.0);
}

#[test]
fn summary_lets_sunday_override_marks() {
    let marks = HashMap::from([
        (day(2026, 3, 2), Status::Absent),
        (day(2026, 3, 3), Status::Leave),
        (day(2026, 3, 1), Status::Absent), // Sunday
    ]);
    let summary = year_summary(2026, &marks);

    assert_eq!(summary.absent, 1);
    assert_eq!(summary.leave, 1);
    assert_eq!(summary.holiday, 52);
    assert_eq!(summary.present, 365 - 52 - 2);
}

#[test]
fn empty_summary_rate_is_zero() {
    assert_eq!(YearSummary::default().attendance_rate(), 0.0);
}
