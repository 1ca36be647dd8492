mod common;

use geosnap_core::capture::{
    map_url, parse_resolution_from_url, url_sidecar_path, CaptureRequest, MapCapture,
    StoredCapture, OVERLAY_SELECTORS,
};
use geosnap_core::error::GeosnapError;
use geosnap_core::pipeline::config::HOUT_BAY;

use common::write_test_png;

#[test]
fn test_map_url_shape() {
    let url = map_url("www.google.com", -34.0460495, 18.344531, 127.0);
    assert_eq!(
        url,
        "https://www.google.com/maps/@-34.0460495,18.344531,127m/data=!3m1!1e3"
    );
}

#[test]
fn test_parse_resolution_from_url() {
    let url = "https://www.google.com/maps/@-34.0460495,18.344531,127m/data=!3m1!1e3";
    assert_eq!(parse_resolution_from_url(url).unwrap(), 127.0);

    let fractional = "https://example.org/maps/@1.5,2.5,312.5m/data=!3m1!1e3";
    assert_eq!(parse_resolution_from_url(fractional).unwrap(), 312.5);
}

#[test]
fn test_parse_resolution_roundtrips_map_url() {
    let url = map_url("maps.example.com", 10.0, -20.0, 1600.0);
    assert_eq!(parse_resolution_from_url(&url).unwrap(), 1600.0);
}

#[test]
fn test_parse_resolution_rejects_malformed_urls() {
    for url in [
        "https://www.google.com/maps",
        "https://www.google.com/maps/@-34.04,18.34/data=!3m1!1e3",
        "https://www.google.com/maps/@-34.04,18.34,17z/data=!3m1!1e3",
        "https://www.google.com/maps/@-34.04,18.34,abcm/data=!3m1!1e3",
        "https://www.google.com/maps/@-34.04,18.34,-5m/data=!3m1!1e3",
    ] {
        let err = parse_resolution_from_url(url).unwrap_err();
        assert!(matches!(err, GeosnapError::MapUrl(_)), "url {url}");
    }
}

#[test]
fn test_overlay_selectors_are_distinct() {
    let mut sorted = OVERLAY_SELECTORS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), OVERLAY_SELECTORS.len());
}

#[test]
fn test_stored_capture_uses_requested_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), "hb.png", 4, 4);

    let request = CaptureRequest::new(&path, HOUT_BAY, 200.0);
    let out = StoredCapture::new().capture(&request).unwrap();
    assert_eq!(out.path, path);
    assert_eq!(out.effective_resolution_m, 200.0);
}

#[test]
fn test_stored_capture_reads_rendered_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), "hb.png", 4, 4);
    std::fs::write(
        url_sidecar_path(&path),
        "https://www.google.com/maps/@-34.0460495,18.344531,254m/data=!3m1!1e3\n",
    )
    .unwrap();

    let request = CaptureRequest::new(&path, HOUT_BAY, 200.0);
    let out = StoredCapture::new().capture(&request).unwrap();
    assert_eq!(out.effective_resolution_m, 254.0);
}

#[test]
fn test_stored_capture_resolves_against_root() {
    let dir = tempfile::tempdir().unwrap();
    write_test_png(dir.path(), "outputs/tp_200.png", 4, 4);

    let request = CaptureRequest::new("outputs/tp_200.png", HOUT_BAY, 200.0);
    let out = StoredCapture::with_root(dir.path())
        .capture(&request)
        .unwrap();
    assert_eq!(out.path, dir.path().join("outputs/tp_200.png"));
}

#[test]
fn test_stored_capture_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let request = CaptureRequest::new(dir.path().join("nope.png"), HOUT_BAY, 200.0);
    let err = StoredCapture::new().capture(&request).unwrap_err();
    assert!(matches!(err, GeosnapError::MissingScreenshot(_)));
}

#[test]
fn test_request_center() {
    let request = CaptureRequest::new("a.png", HOUT_BAY, 100.0);
    assert_eq!(request.center(), HOUT_BAY);
}
