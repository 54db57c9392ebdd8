//! Behavioural tests for [`HttpVenueDirectory`] against a loopback stub.

mod support;

use std::cell::RefCell;
use std::time::Duration;

use nearbeer_core::{Candidate, Coordinate, VenueSource, VenueSourceError};
use nearbeer_data::{HttpVenueDirectory, HttpVenueDirectoryConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::StubServer;

type ServerCell = RefCell<Option<StubServer>>;
type ResultCell = RefCell<Option<Result<Vec<Candidate>, VenueSourceError>>>;

const TWO_LOCATABLE: &str = r#"[
    {"id": "sweetwater", "name": "SweetWater Brewing Company",
     "address_1": "195 Ottley Dr NE", "city": "Atlanta", "state_province": "Georgia",
     "postal_code": "30324-3925", "latitude": "33.80854", "longitude": "-84.38126"},
    {"id": "ghost", "name": "Ghost Brewery", "latitude": null, "longitude": null},
    {"id": "orpheus", "name": "Orpheus Brewing",
     "address_1": "1440 Dutch Valley Pl NE", "city": "Atlanta", "state_province": "Georgia",
     "postal_code": "30324-5308", "latitude": 33.79231, "longitude": -84.36934}
]"#;

#[fixture]
fn server() -> ServerCell {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn downtown_atlanta() -> Coordinate {
    Coordinate::new(33.749, -84.388).expect("valid coordinate")
}

// --- Given steps ---

#[given("a brewery directory serving two locatable breweries and one without coordinates")]
fn directory_with_breweries(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond("200 OK", TWO_LOCATABLE));
}

#[given("a brewery directory answering with a service unavailable status")]
fn directory_unavailable(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond(
        "503 Service Unavailable",
        r#"{"message": "maintenance"}"#,
    ));
}

#[given("a brewery directory answering with a malformed payload")]
fn directory_malformed(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond("200 OK", r#"{"breweries": "#));
}

#[given("a brewery directory that never answers")]
fn directory_silent(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::silent());
}

// --- When steps ---

#[when("I ask the directory for ten breweries near downtown Atlanta")]
fn ask_for_ten(#[from(server)] server: &ServerCell, #[from(result)] result: &ResultCell) {
    let guard = server.borrow();
    let stub = guard.as_ref().expect("server must be initialised");
    let config =
        HttpVenueDirectoryConfig::new(stub.base_url()).with_timeout(Duration::from_secs(1));
    let directory = HttpVenueDirectory::with_config(&config).expect("directory builds");
    *result.borrow_mut() = Some(directory.candidates_near(downtown_atlanta(), 10));
}

// --- Then steps ---

#[then("two candidates are returned in directory order")]
fn then_two_in_order(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let candidates = borrowed
        .as_ref()
        .expect("request must have run")
        .as_ref()
        .expect("expected Ok result");
    let ids: Vec<_> = candidates
        .iter()
        .map(|candidate| candidate.external_id.as_str())
        .collect();
    assert_eq!(ids, ["sweetwater", "orpheus"]);
    let first = candidates.first().expect("first candidate");
    assert_eq!(first.name, "SweetWater Brewing Company");
    assert_eq!(first.address, "195 Ottley Dr NE, Atlanta, Georgia 30324-3925");
}

#[then("the directory was asked for ten breweries by distance from downtown Atlanta")]
fn then_request_line(#[from(server)] server: &ServerCell) {
    let guard = server.borrow();
    let stub = guard.as_ref().expect("server must be initialised");
    assert_eq!(
        stub.request_line(),
        "GET /breweries?by_dist=33.749%2C-84.388&per_page=10 HTTP/1.1"
    );
}

#[then("an HTTP error with the service unavailable status is returned")]
fn then_http_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            borrowed.as_ref(),
            Some(Err(VenueSourceError::Http { status: 503, .. }))
        ),
        "expected HTTP 503, got {borrowed:?}"
    );
}

#[then("a parse error is returned")]
fn then_parse_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(borrowed.as_ref(), Some(Err(VenueSourceError::Parse { .. }))),
        "expected Parse error, got {borrowed:?}"
    );
}

#[then("a timeout error is returned")]
fn then_timeout_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            borrowed.as_ref(),
            Some(Err(VenueSourceError::Timeout { timeout_secs: 1, .. }))
        ),
        "expected Timeout error, got {borrowed:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/venue_directory.feature", name = $title)]
        fn $fn_name(server: ServerCell, result: ResultCell) {
            let _ = (server, result);
        }
    };
}

register_scenario!(
    locatable_breweries_in_directory_order,
    "Locatable breweries are returned in directory order"
);
register_scenario!(
    failing_directory_reports_status,
    "A failing directory reports its status"
);
register_scenario!(
    malformed_payload_is_rejected,
    "A malformed directory payload is rejected"
);
register_scenario!(
    silent_directory_times_out,
    "A directory that never answers times out"
);
