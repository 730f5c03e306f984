use ergast_api::{Error, Field, FilterKey, FilterSet, QueryKind, QueryParams, Season};

fn url(kind: QueryKind, params: QueryParams) -> String {
    params.build(kind).unwrap().build_url()
}

#[test]
fn season_query_urls() {
    assert_eq!(
        url(QueryKind::SeasonList, QueryParams::new()),
        "https://ergast.com/api/f1/seasons"
    );
    assert_eq!(
        url(
            QueryKind::SeasonList,
            QueryParams::new().with_filter(FilterKey::Results, 1)
        ),
        "https://ergast.com/api/f1/results/1/seasons"
    );
    assert_eq!(
        url(
            QueryKind::SeasonList,
            QueryParams::new()
                .with_filter(FilterKey::Results, 1)
                .with_filter(FilterKey::Drivers, 1)
        ),
        "https://ergast.com/api/f1/results/1/drivers/1/seasons"
    );
}

#[test]
fn season_query_takes_no_season_or_race() {
    for params in [
        QueryParams::new().with_season("something"),
        QueryParams::new().with_race("something"),
        QueryParams::new()
            .with_season("something")
            .with_race("something"),
    ] {
        let err = params.build(QueryKind::SeasonList).unwrap_err();
        assert!(matches!(err, Error::UnsupportedParameter { .. }));
    }
}

#[test]
fn race_schedule_urls() {
    let season = || QueryParams::new().with_season("current");
    assert_eq!(
        url(QueryKind::RaceSchedule, season()),
        "https://ergast.com/api/f1/current"
    );
    assert_eq!(
        url(QueryKind::RaceSchedule, season().with_race(2)),
        "https://ergast.com/api/f1/current/2"
    );
    assert_eq!(
        url(
            QueryKind::RaceSchedule,
            season().with_race(2).with_filter(FilterKey::Results, 1)
        ),
        "https://ergast.com/api/f1/results/1/current/2"
    );
    assert_eq!(
        url(
            QueryKind::RaceSchedule,
            season()
                .with_race(2)
                .with_filter(FilterKey::Results, 1)
                .with_filter(FilterKey::Drivers, 1)
        ),
        "https://ergast.com/api/f1/results/1/drivers/1/current/2"
    );
}

#[test]
fn race_schedule_requires_season() {
    let err = QueryParams::new()
        .build(QueryKind::RaceSchedule)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredParameter {
            field: Field::Season
        }
    ));
}

#[test]
fn race_results_urls() {
    let race = || QueryParams::new().with_season("current").with_race(2);
    assert_eq!(
        url(QueryKind::RaceResults, race()),
        "https://ergast.com/api/f1/current/2/results"
    );
    assert_eq!(
        url(
            QueryKind::RaceResults,
            race().with_filter(FilterKey::Grid, 1)
        ),
        "https://ergast.com/api/f1/grid/1/current/2/results"
    );
    assert_eq!(
        url(
            QueryKind::RaceResults,
            race()
                .with_filter(FilterKey::Grid, 1)
                .with_filter(FilterKey::Drivers, 1)
        ),
        "https://ergast.com/api/f1/grid/1/drivers/1/current/2/results"
    );
}

#[test]
fn race_results_require_season_and_race() {
    let err = QueryParams::new().build(QueryKind::RaceResults).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredParameter {
            field: Field::Season
        }
    ));

    let err = QueryParams::new()
        .with_season("current")
        .build(QueryKind::RaceResults)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredParameter { field: Field::Race }
    ));
}

#[test]
fn race_results_do_not_support_results_filter() {
    let err = QueryParams::new()
        .with_season("current")
        .with_race(1)
        .with_filter(FilterKey::Results, 1)
        .build(QueryKind::RaceResults)
        .unwrap_err();
    match err {
        Error::UnsupportedFilter { filter } => assert_eq!(filter, "results"),
        other => panic!("expected UnsupportedFilter, got {:?}", other),
    }
}

#[test]
fn qualifying_results_urls() {
    let race = || QueryParams::new().with_season("current").with_race(2);
    assert_eq!(
        url(QueryKind::QualifyingResults, race()),
        "https://ergast.com/api/f1/current/2/qualifying"
    );
    assert_eq!(
        url(
            QueryKind::QualifyingResults,
            race().with_filter(FilterKey::Grid, 1)
        ),
        "https://ergast.com/api/f1/grid/1/current/2/qualifying"
    );
    assert_eq!(
        url(
            QueryKind::QualifyingResults,
            race()
                .with_filter(FilterKey::Grid, 1)
                .with_filter(FilterKey::Drivers, 1)
        ),
        "https://ergast.com/api/f1/grid/1/drivers/1/current/2/qualifying"
    );
}

#[test]
fn lap_times_require_all_fields() {
    let base = || QueryParams::new().with_season(2011).with_race(5);
    assert_eq!(
        url(QueryKind::LapTimes, base().with_lap(1)),
        "https://ergast.com/api/f1/2011/5/laps/1"
    );
    let err = base().build(QueryKind::LapTimes).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredParameter { field: Field::Lap }
    ));
    for lap in [0, 101] {
        let err = base().with_lap(lap).build(QueryKind::LapTimes).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameterValue { field: Field::Lap, .. }
        ));
    }
}

#[test]
fn every_known_filter_accepted_where_legal() {
    for key in ergast_api::ALL_FILTERS {
        assert!(QueryParams::new()
            .with_filter(*key, 1)
            .build(QueryKind::SeasonList)
            .is_ok());
        assert!(QueryParams::new()
            .with_season(2020)
            .with_race(1)
            .with_filter(*key, 1)
            .build(QueryKind::QualifyingResults)
            .is_ok());
    }
}

#[test]
fn unknown_filter_key_rejected() {
    let err = FilterSet::try_from_pairs([("bad_filter", 1)]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFilter { .. }));
}

#[test]
fn season_text_is_coerced() {
    let query = QueryParams::new()
        .with_season("2008")
        .with_race("18")
        .build(QueryKind::RaceResults)
        .unwrap();
    assert_eq!(query.season(), Some(Season::Year(2008)));
    assert_eq!(query.race(), Some(18));
    assert_eq!(query.build_url(), "https://ergast.com/api/f1/2008/18/results");
}
