//! Request fixtures and filesystem helpers for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tollway_core::{OptimizeRequest, RouteCandidate, RouteGeometry, RouteLeg, RouteStep};

/// Ten miles, in metres.
pub(super) const TEN_MILES_M: f64 = 16_093.4;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// The four pre-priced routes used throughout the optimiser scenarios.
pub(super) fn priced_routes() -> Vec<RouteCandidate> {
    vec![
        RouteCandidate::new("A", 1_800, 30_000).with_toll(9.8),
        RouteCandidate::new("B", 2_100, 32_000).with_toll(5.0),
        RouteCandidate::new("C", 2_400, 35_000).with_toll(0.0),
        RouteCandidate::new("D", 2_700, 40_000).with_toll(12.0),
    ]
}

/// A ten-mile US 183 Toll route at free-flow speed, plus a toll-free one.
pub(super) fn unpriced_routes() -> Vec<RouteCandidate> {
    let toll_leg = RouteLeg::new(vec![RouteStep::new("US 183 Toll", TEN_MILES_M)]);
    let free_leg = RouteLeg::new(vec![RouteStep::new("Burnet Road", 18_000.0)]);
    vec![
        RouteCandidate::new("toll", 600, 16_093)
            .with_geometry(RouteGeometry::new(vec![toll_leg])),
        RouteCandidate::new("free", 1_200, 18_000)
            .with_geometry(RouteGeometry::new(vec![free_leg])),
    ]
}

pub(super) fn write_request(path: &Utf8Path, request: &OptimizeRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
