//! Behavioural tests for [`HttpGeocoder`] against a loopback stub.

mod support;

use std::cell::RefCell;

use nearbeer_core::{GeocodeError, GeocodedPlace, Geocoder};
use nearbeer_data::HttpGeocoder;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::StubServer;

type ServerCell = RefCell<Option<StubServer>>;
type ResultCell = RefCell<Option<Result<GeocodedPlace, GeocodeError>>>;

#[fixture]
fn server() -> ServerCell {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

#[given("a geocoder that knows Asheville")]
fn geocoder_knows_asheville(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond(
        "200 OK",
        r#"[{"place_id": 297475283, "lat": "35.595363", "lon": "-82.5508407",
             "display_name": "Asheville, Buncombe County, North Carolina, United States"}]"#,
    ));
}

#[given("a geocoder with no matches")]
fn geocoder_without_matches(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond("200 OK", "[]"));
}

#[given("a geocoder returning unusable coordinates")]
fn geocoder_with_bad_coordinates(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(StubServer::respond(
        "200 OK",
        r#"[{"lat": "somewhere", "lon": "-82.55", "display_name": "Nowhere"}]"#,
    ));
}

#[when("I geocode {query}")]
fn geocode(
    #[from(server)] server: &ServerCell,
    #[from(result)] result: &ResultCell,
    query: String,
) {
    let guard = server.borrow();
    let stub = guard.as_ref().expect("server must be initialised");
    let geocoder = HttpGeocoder::new(stub.base_url()).expect("geocoder builds");
    *result.borrow_mut() = Some(geocoder.geocode(query.trim_matches('"')));
}

#[then("the location of Asheville is returned")]
fn then_asheville(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let place = borrowed
        .as_ref()
        .expect("request must have run")
        .as_ref()
        .expect("expected Ok result");
    assert_eq!(place.coordinate.lat(), 35.595_363);
    assert_eq!(place.coordinate.lng(), -82.550_840_7);
    assert_eq!(
        place.display_name,
        "Asheville, Buncombe County, North Carolina, United States"
    );
}

#[then("the geocoder was asked for a single JSON match for {query}")]
fn then_request_line(#[from(server)] server: &ServerCell, query: String) {
    let guard = server.borrow();
    let stub = guard.as_ref().expect("server must be initialised");
    let expected: String =
        url::form_urlencoded::byte_serialize(query.trim_matches('"').as_bytes()).collect();
    assert_eq!(
        stub.request_line(),
        format!("GET /search?q={expected}&format=json&limit=1 HTTP/1.1")
    );
}

#[then("a not found error is returned")]
fn then_not_found(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert_eq!(
        borrowed.as_ref(),
        Some(&Err(GeocodeError::NotFound {
            query: "Atlantis".to_owned()
        }))
    );
}

#[then("an invalid coordinates error is returned")]
fn then_invalid(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            borrowed.as_ref(),
            Some(Err(GeocodeError::InvalidCoordinates { .. }))
        ),
        "expected InvalidCoordinates, got {borrowed:?}"
    );
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/geocoding.feature", name = $title)]
        fn $fn_name(server: ServerCell, result: ResultCell) {
            let _ = (server, result);
        }
    };
}

register_scenario!(known_city_resolves, "A known city resolves to its first match");
register_scenario!(unknown_city_is_not_found, "An unknown city is not found");
register_scenario!(
    unusable_coordinates_are_rejected,
    "A match with unusable coordinates is rejected"
);
