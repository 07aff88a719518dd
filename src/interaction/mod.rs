//! Click-to-address interaction flow
//!
//! One [`ClickToAddressController`] is one interaction session: armed at
//! construction, consumed by a single click, terminal once the outcome has
//! been delivered to the presentation sink. The host arms a fresh controller
//! for every click it wants to serve.

use crate::coord::reproject::Reprojector;
use crate::coord::MapPoint;
use crate::geocode::nominatim::ReverseGeocodeClient;
use crate::geocode::{AddressLookupResult, Transport};
use tracing::{debug, warn};

/// Host-provided display for the final outcome of a session
pub trait PresentationSink {
    /// Called exactly once per session with the final outcome
    fn present(&self, outcome: &AddressLookupResult);
}

/// Host-provided diagnostic log for failed lookups
pub trait ErrorLog {
    fn log_error(&self, message: &str);
}

/// Error log backed by tracing, the default host wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Interaction session states
///
/// Success and every failure variant all land in `Completed`; only the
/// delivered [`AddressLookupResult`] distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReprojection,
    AwaitingLookup,
    Completed,
}

/// Orchestrates one click through reprojection and lookup to presentation
pub struct ClickToAddressController<T: Transport, S: PresentationSink, L: ErrorLog> {
    reprojector: Reprojector,
    client: ReverseGeocodeClient<T>,
    sink: S,
    log: L,
    state: SessionState,
}

impl<T: Transport, S: PresentationSink, L: ErrorLog> ClickToAddressController<T, S, L> {
    /// Arm a new session
    pub fn new(
        reprojector: Reprojector,
        client: ReverseGeocodeClient<T>,
        sink: S,
        log: L,
    ) -> Self {
        Self {
            reprojector,
            client,
            sink,
            log,
            state: SessionState::Idle,
        }
    }

    /// The current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session still accepts a click
    ///
    /// False from the moment a click is committed; the host must arm a fresh
    /// session for the next click.
    pub fn is_armed(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// Handle one map click in the source reference system
    ///
    /// Reprojection happens synchronously; a reprojection failure completes
    /// the session immediately through the same result channel. Otherwise
    /// the session deactivates before the lookup round trip starts, so a
    /// second click cannot queue behind an outstanding request.
    pub async fn handle_click(&mut self, click: MapPoint) {
        if self.state != SessionState::Idle {
            warn!(?click, state = ?self.state, "Click ignored: session is not armed");
            return;
        }

        self.state = SessionState::AwaitingReprojection;
        let point = match self.reprojector.reproject(click) {
            Ok(point) => point,
            Err(e) => {
                self.complete(AddressLookupResult::TransportError {
                    detail: format!("Reprojection failed: {}", e),
                });
                return;
            }
        };

        debug!(lat = point.lat, lon = point.lon, "Click reprojected, issuing lookup");
        self.state = SessionState::AwaitingLookup;
        let outcome = self.client.lookup(&point).await;
        self.complete(outcome);
    }

    /// Deliver the outcome to the presentation sink
    ///
    /// Idempotent: a completed session drops any further outcome.
    fn complete(&mut self, outcome: AddressLookupResult) {
        if self.state == SessionState::Completed {
            return;
        }
        self.state = SessionState::Completed;

        match &outcome {
            AddressLookupResult::TransportError { detail } => {
                self.log.log_error(&format!("Address lookup failed: {}", detail));
            }
            AddressLookupResult::ParseError { detail } => {
                self.log.log_error(&format!("Address response was malformed: {}", detail));
            }
            AddressLookupResult::Found { .. } | AddressLookupResult::NotFound => {}
        }

        self.sink.present(&outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::epsg::WGS84;
    use crate::coord::reproject::ReferenceSystem;
    use crate::error::{Error, Result};
    use crate::geocode::TransportResponse;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FixedTransport {
        status: u16,
        body: &'static str,
    }

    impl Transport for FixedTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse> {
            Ok(TransportResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        async fn get(&self, _url: &str) -> Result<TransportResponse> {
            Err(Error::Transport("Connection refused".to_string()))
        }
    }

    /// Sink that records every presented outcome
    #[derive(Clone, Default)]
    struct RecordingSink {
        outcomes: Rc<RefCell<Vec<AddressLookupResult>>>,
    }

    impl PresentationSink for RecordingSink {
        fn present(&self, outcome: &AddressLookupResult) {
            self.outcomes.borrow_mut().push(outcome.clone());
        }
    }

    /// Log that counts calls
    #[derive(Clone, Default)]
    struct CountingLog {
        calls: Rc<Cell<usize>>,
    }

    impl ErrorLog for CountingLog {
        fn log_error(&self, _message: &str) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn identity_reprojector() -> Reprojector {
        Reprojector::new(
            ReferenceSystem::from_epsg(WGS84).unwrap(),
            ReferenceSystem::from_epsg(WGS84).unwrap(),
        )
    }

    fn controller<T: Transport>(
        transport: T,
    ) -> (
        ClickToAddressController<T, RecordingSink, CountingLog>,
        RecordingSink,
        CountingLog,
    ) {
        let sink = RecordingSink::default();
        let log = CountingLog::default();
        let controller = ClickToAddressController::new(
            identity_reprojector(),
            ReverseGeocodeClient::new(transport),
            sink.clone(),
            log.clone(),
        );
        (controller, sink, log)
    }

    // x carries longitude, y latitude, matching map-axis order
    const LONDON_CLICK: MapPoint = MapPoint {
        x: -0.1276,
        y: 51.5034,
    };

    #[tokio::test]
    async fn test_click_presents_found_address() {
        let (mut controller, sink, log) = controller(FixedTransport {
            status: 200,
            body: r#"{"display_name": "10 Downing Street, London"}"#,
        });
        assert!(controller.is_armed());

        controller.handle_click(LONDON_CLICK).await;

        assert_eq!(controller.state(), SessionState::Completed);
        assert!(!controller.is_armed());
        assert_eq!(
            *sink.outcomes.borrow(),
            vec![AddressLookupResult::Found {
                display_name: "10 Downing Street, London".to_string()
            }]
        );
        assert_eq!(log.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_click_presents_not_found() {
        let (mut controller, sink, log) = controller(FixedTransport {
            status: 200,
            body: "{}",
        });

        controller.handle_click(LONDON_CLICK).await;

        assert_eq!(*sink.outcomes.borrow(), vec![AddressLookupResult::NotFound]);
        assert_eq!(log.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_logged_once() {
        let (mut controller, sink, log) = controller(FailingTransport);

        controller.handle_click(LONDON_CLICK).await;

        let outcomes = sink.outcomes.borrow();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(
            outcomes[0],
            AddressLookupResult::TransportError { .. }
        ));
        assert_eq!(log.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_parse_failure_is_logged() {
        let (mut controller, sink, log) = controller(FixedTransport {
            status: 200,
            body: "not json",
        });

        controller.handle_click(LONDON_CLICK).await;

        assert!(matches!(
            sink.outcomes.borrow()[0],
            AddressLookupResult::ParseError { .. }
        ));
        assert_eq!(log.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_reprojection_failure_completes_session() {
        let sink = RecordingSink::default();
        let log = CountingLog::default();
        let reprojector = Reprojector::to_wgs84(
            ReferenceSystem::from_epsg(crate::constants::epsg::WEB_MERCATOR).unwrap(),
        )
        .unwrap();
        let mut controller = ClickToAddressController::new(
            reprojector,
            ReverseGeocodeClient::new(FixedTransport {
                status: 200,
                body: "{}",
            }),
            sink.clone(),
            log.clone(),
        );

        controller.handle_click(MapPoint::new(f64::NAN, 0.0)).await;

        assert_eq!(controller.state(), SessionState::Completed);
        let outcomes = sink.outcomes.borrow();
        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            AddressLookupResult::TransportError { detail } => {
                assert!(detail.contains("Reprojection failed"));
            }
            other => panic!("Expected synthesized TransportError, got {:?}", other),
        }
        assert_eq!(log.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_second_click_is_ignored() {
        let (mut controller, sink, _log) = controller(FixedTransport {
            status: 200,
            body: r#"{"display_name": "10 Downing Street, London"}"#,
        });

        controller.handle_click(LONDON_CLICK).await;
        controller.handle_click(MapPoint::new(2.3522, 48.8566)).await;

        // No implicit re-arm: the second click produces nothing.
        assert_eq!(sink.outcomes.borrow().len(), 1);
        assert!(!controller.is_armed());
    }

    #[test]
    fn test_repeated_completion_delivers_once() {
        let (mut controller, sink, log) = controller(FixedTransport {
            status: 200,
            body: "{}",
        });

        controller.complete(AddressLookupResult::TransportError {
            detail: "First".to_string(),
        });
        controller.complete(AddressLookupResult::TransportError {
            detail: "Second".to_string(),
        });
        controller.complete(AddressLookupResult::NotFound);

        assert_eq!(sink.outcomes.borrow().len(), 1);
        assert_eq!(log.calls.get(), 1);
    }
}
