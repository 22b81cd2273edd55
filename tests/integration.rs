use chrono::{TimeZone, Utc};
use jdlocal::{
    adjust, adjust_with, convert, find_date, format, night_of, CalendarDate, Error, JulianDate,
    Longitude, OffsetConvention,
};

#[test]
fn worked_examples_minutes_east() {
    assert_eq!(find_date(2_451_552.999_31, 17.03).unwrap(), "2000-01-09");
    assert_eq!(find_date(2_451_552.540_97, 17.045_35).unwrap(), "2000-01-09");
    assert_eq!(find_date(2_451_553.500_69, 0.0).unwrap(), "2000-01-10");
    // 02:07 local on the 9th; only the night label or the seconds-west
    // convention gives the 8th.
    assert_eq!(find_date(2_451_552.540_97, 17.03).unwrap(), "2000-01-09");
}

#[test]
fn seconds_west_convention_gives_previous_day() {
    let jd = JulianDate::new(2_451_552.540_97);
    let local = adjust_with(jd, 17.03, OffsetConvention::SecondsWest).unwrap();
    assert_eq!(format(&convert(local)), "2000-01-08");
    assert_eq!(night_of(jd, 17.03).unwrap().to_string(), "2000-01-08");
}

#[test]
fn longitude_bounds_are_inclusive() {
    let jd = JulianDate::new(2_451_552.540_97);
    assert!(adjust(jd, 180.0).is_ok());
    assert!(adjust(jd, -180.0).is_ok());
    assert_eq!(adjust(jd, 180.0001), Err(Error::InvalidLongitude(180.0001)));
    assert_eq!(adjust(jd, -180.0001), Err(Error::InvalidLongitude(-180.0001)));
}

#[test]
fn out_of_range_longitudes_always_fail() {
    for lon in [180.5, 200.0, 360.0, 1e9, -180.5, -720.0, f64::INFINITY] {
        assert!(
            matches!(find_date(2_451_545.0, lon), Err(Error::InvalidLongitude(v)) if v == lon),
            "lon {lon}"
        );
    }
}

#[test]
fn local_shift_never_exceeds_half_day() {
    let jd = JulianDate::new(2_460_000.25);
    for step in 0..=720 {
        let lon = -180.0 + step as f64 * 0.5;
        let local = adjust(jd, lon).unwrap();
        assert!((local.value() - jd.value()).abs() <= 0.5, "lon {lon}");
    }
}

#[test]
fn antimeridian_observers_straddle_utc_date() {
    // 18:00 UTC is 05:56 next day at 179° E.
    let evening = JulianDate::from_utc(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());
    assert_eq!(find_date(evening.value(), 0.0).unwrap(), "2024-06-15");
    assert_eq!(find_date(evening.value(), 179.0).unwrap(), "2024-06-16");

    // 06:00 UTC is 18:04 previous day at 179° W.
    let morning = JulianDate::from_utc(Utc.with_ymd_and_hms(2024, 6, 15, 6, 0, 0).unwrap());
    assert_eq!(find_date(morning.value(), 0.0).unwrap(), "2024-06-15");
    assert_eq!(find_date(morning.value(), -179.0).unwrap(), "2024-06-14");
}

#[test]
fn agrees_with_chrono_at_greenwich() {
    let mut t = Utc.with_ymd_and_hms(1990, 3, 1, 6, 30, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    while t < end {
        let jd = JulianDate::from_utc(t);
        let local = adjust(jd, 0.0).unwrap();
        let expected = t.date_naive();
        assert_eq!(
            convert(local).date().to_naive_date(),
            Some(expected),
            "{t}"
        );
        t += chrono::Duration::hours(53);
    }
}

#[test]
fn validated_longitude_can_be_reused() {
    let lon = Longitude::new(-75.0).unwrap();
    assert_eq!(lon.time_offset().value(), -300.0);
    let local = jdlocal::to_local(
        JulianDate::new(2_451_545.0),
        lon,
        OffsetConvention::MinutesEast,
    );
    let dt = convert(local);
    assert_eq!(
        dt.date(),
        CalendarDate {
            year: 2000,
            month: 1,
            day: 1
        }
    );
    let seconds_of_day = (dt.hour * 3_600 + dt.minute * 60) as f64 + dt.second;
    assert!((seconds_of_day - 25_200.0).abs() < 1e-3, "{dt}");
}

#[test]
fn conversion_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(find_date(2_451_552.540_97, 17.045_35).unwrap(), "2000-01-09");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_julian_date_is_a_bare_number() {
    let jd = JulianDate::new(2_451_545.0);
    let json = serde_json::to_string(&jd).unwrap();
    assert_eq!(json, "2451545.0");
    let back: JulianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, jd);

    let date = CalendarDate {
        year: 2000,
        month: 1,
        day: 9,
    };
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":2000,"month":1,"day":9}"#);
}
