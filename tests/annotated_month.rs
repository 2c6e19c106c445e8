use chrono::{FixedOffset, TimeZone};

use leavecal::grid;
use leavecal::{
    CalendarDate, CalendarStore, DayAnnotator, FixedClock, Holiday, LeaveRecord, MonthMatch,
    StoreEvent,
};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn february_2024_scenario() {
    let holidays = vec![
        Holiday::new(date(2024, 2, 14), "Valentine's Day"),
        Holiday::new(date(2024, 3, 8), "Women's Day"),
    ];
    let leaves = vec![LeaveRecord::new(date(2024, 2, 14), 3)];

    let window = grid::build(date(2024, 2, 1)).unwrap();
    assert_eq!(window.leading_days(), 4);
    assert_eq!(window[0], date(2024, 1, 28));
    assert_eq!(window[4], date(2024, 2, 1));

    let annotator = DayAnnotator::new(&holidays, &leaves, date(2024, 2, 5), MonthMatch::default());
    let cells = annotator.annotate_window(&window);

    assert_eq!(cells.iter().filter(|c| c.is_in_reference_month).count(), 29);

    let annotated = cells.iter().filter(|c| c.is_annotated()).collect::<Vec<_>>();
    assert_eq!(annotated.len(), 2);

    assert_eq!(annotated[0].date, date(2024, 2, 14));
    assert_eq!(annotated[0].holiday.as_ref().unwrap().occasion, "Valentine's Day");
    assert_eq!(annotated[0].leave.unwrap().count, 3);

    // trailing day from March still carries its holiday
    assert_eq!(annotated[1].date, date(2024, 3, 8));
    assert!(!annotated[1].is_in_reference_month);
    assert!(annotated[1].holiday.is_some());
}

#[test]
fn january_2024_leading_day_is_outside() {
    let window = grid::build(date(2024, 1, 1)).unwrap();
    let annotator = DayAnnotator::new(&[], &[], date(2024, 1, 1), MonthMatch::default());
    let cells = annotator.annotate_window(&window);

    assert_eq!(window.leading_days(), 1);
    assert_eq!(cells[0].date, date(2023, 12, 31));
    assert!(!cells[0].is_in_reference_month);
    assert!(cells[1].is_in_reference_month);
}

#[test]
fn zoned_annotations_match_by_wall_date() {
    let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let holidays = vec![Holiday::new(
        ist.with_ymd_and_hms(2024, 1, 26, 0, 15, 0).unwrap(),
        "Republic Day",
    )];
    let leaves = vec![LeaveRecord::new(
        ist.with_ymd_and_hms(2024, 1, 26, 23, 45, 0).unwrap(),
        2,
    )];
    let annotator = DayAnnotator::new(&holidays, &leaves, date(2024, 1, 1), MonthMatch::default());

    let morning = annotator.annotate(
        ist.with_ymd_and_hms(2024, 1, 26, 8, 0, 0).unwrap(),
        date(2024, 1, 1),
    );
    let evening = annotator.annotate(
        ist.with_ymd_and_hms(2024, 1, 26, 20, 0, 0).unwrap(),
        date(2024, 1, 1),
    );

    assert_eq!(morning, evening);
    assert_eq!(morning.holiday.unwrap().occasion, "Republic Day");
    assert_eq!(morning.leave.unwrap().count, 2);
}

#[test]
fn store_follows_reference_changes() {
    let mut store = CalendarStore::new(
        date(2024, 2, 1),
        vec![Holiday::new(date(2024, 12, 25), "Christmas")],
        vec![],
        MonthMatch::default(),
        FixedClock(date(2024, 12, 24)),
    )
    .unwrap();
    let rx = store.subscribe();

    assert!(store.cells().iter().all(|c| c.holiday.is_none() && !c.is_today));

    store.set_reference(date(2024, 12, 10)).unwrap();
    let events = rx.try_iter().collect::<Vec<_>>();
    assert_eq!(
        events,
        vec![StoreEvent::ReferenceChanged(date(2024, 12, 10)), StoreEvent::GridRebuilt]
    );

    assert_eq!(store.title(), "December, 2024");
    assert_eq!(store.cells().iter().filter(|c| c.holiday.is_some()).count(), 1);
    assert_eq!(store.cells().iter().filter(|c| c.is_today).count(), 1);
}
