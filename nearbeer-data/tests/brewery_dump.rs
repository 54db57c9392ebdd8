//! Tests for serving crawl candidates from an on-disk brewery dump.

mod support;

use camino::Utf8PathBuf;
use nearbeer_core::{
    Coordinate, CrawlRequest, RouteBuilder, RouteOutcome, VenueSource, plan_crawl,
};
use nearbeer_data::JsonFileVenueDirectory;
use rstest::{fixture, rstest};

#[fixture]
fn directory() -> JsonFileVenueDirectory {
    let path = Utf8PathBuf::from_path_buf(support::fixtures_dir().join("breweries.json"))
        .expect("utf-8 fixture path");
    JsonFileVenueDirectory::open(&path).expect("fixture loads")
}

#[fixture]
fn west_end() -> Coordinate {
    Coordinate::new(33.7375, -84.4170).expect("valid coordinate")
}

#[rstest]
fn unlocatable_records_are_skipped(directory: JsonFileVenueDirectory) {
    assert_eq!(directory.len(), 3);
}

#[rstest]
fn candidates_are_ranked_from_the_origin(directory: JsonFileVenueDirectory, west_end: Coordinate) {
    let names: Vec<_> = directory
        .candidates_near(west_end, 10)
        .expect("dump query")
        .into_iter()
        .map(|candidate| candidate.name)
        .collect();
    assert_eq!(
        names,
        [
            "Wild Heaven Beer West End",
            "Second Self Beer Company",
            "Atlanta Brewing Company",
        ]
    );
}

#[rstest]
fn a_spread_out_city_yields_a_partial_crawl(
    directory: JsonFileVenueDirectory,
    west_end: Coordinate,
) {
    let request = CrawlRequest::new(west_end, 3).expect("valid request");
    let planned =
        plan_crawl(&request, &directory, &RouteBuilder::default()).expect("dump never fails");

    let first = planned.stops.first().expect("seed stop");
    assert_eq!(first.candidate.name, "Wild Heaven Beer West End");
    assert_eq!(first.order, 0);
    // The next brewery is roughly seven kilometres away.
    assert_eq!(planned.stops.len(), 1);
    assert_eq!(
        planned.outcome,
        RouteOutcome::Partial {
            found: 1,
            requested: 3
        }
    );
}
