//! Transmit loop replaying a single STP frame

use std::fmt;
use std::time::{Duration, Instant};
use stproot_core::{Error, FrameSink, Result};
use stproot_stp::EthernetLlcFrame;
use tracing::{error, info};

use crate::stop::StopSignal;

/// How many frames to send and how fast
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Stop after this many frames; `None` runs until interrupted
    pub count: Option<u64>,
    /// Pause between consecutive sends
    pub delay: Duration,
    /// Log every frame instead of a periodic rate line
    pub verbose: bool,
    /// Frames between rate lines when not verbose
    pub report_every: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            count: None,
            delay: Duration::from_secs(2),
            verbose: false,
            report_every: 50,
        }
    }
}

/// Why the transmit loop left the RUNNING state
#[derive(Debug)]
pub enum StopReason {
    /// The configured count was reached
    Completed,
    /// The stop signal was triggered
    Interrupted,
    /// The link refused a frame; no retry is attempted
    Failed(Error),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Completed => write!(f, "completed"),
            StopReason::Interrupted => write!(f, "interrupted"),
            StopReason::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Result of a finished session
#[derive(Debug)]
pub struct SessionSummary {
    /// Frames handed to the link successfully
    pub sent: u64,
    /// Bytes handed to the link successfully
    pub bytes_sent: u64,
    /// Wall time from the first send attempt to the stop
    pub elapsed: Duration,
    pub reason: StopReason,
}

impl SessionSummary {
    /// Average send rate in frames per second
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.sent as f64 / secs
        } else {
            0.0
        }
    }

    /// Completed and interrupted sessions both count as success
    pub fn is_success(&self) -> bool {
        !matches!(self.reason, StopReason::Failed(_))
    }
}

/// Owns the frame sink and replays one frame until told to stop.
///
/// The frame is serialized once; every iteration sends identical bytes, so
/// message age never advances between retransmissions.
pub struct TransmitSession<S: FrameSink> {
    sink: S,
    frame: EthernetLlcFrame,
    wire: Vec<u8>,
    config: SessionConfig,
    stop: StopSignal,
}

impl<S: FrameSink> TransmitSession<S> {
    pub fn new(
        sink: S,
        frame: EthernetLlcFrame,
        config: SessionConfig,
        stop: StopSignal,
    ) -> Result<Self> {
        let wire = frame.to_bytes()?;
        Ok(Self {
            sink,
            frame,
            wire,
            config,
            stop,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the send loop to completion, interruption or the first failure.
    ///
    /// The stop signal is checked before every send and cuts the inter-send
    /// delay short, so at most the send already in progress completes after
    /// a stop request.
    pub async fn run(&mut self) -> SessionSummary {
        let started = Instant::now();
        let mut sent = 0u64;
        let mut bytes_sent = 0u64;

        let reason = loop {
            if self.target_reached(sent) {
                break StopReason::Completed;
            }
            if self.stop.is_triggered() {
                break StopReason::Interrupted;
            }

            if let Err(e) = self.sink.send_frame(&self.wire) {
                error!(sent, error = %e, "Transmit failed, aborting");
                break StopReason::Failed(e);
            }
            sent += 1;
            bytes_sent += self.wire.len() as u64;
            self.report(sent, started);

            if self.target_reached(sent) {
                break StopReason::Completed;
            }
            if !self.stop.sleep(self.config.delay).await {
                break StopReason::Interrupted;
            }
        };

        SessionSummary {
            sent,
            bytes_sent,
            elapsed: started.elapsed(),
            reason,
        }
    }

    fn target_reached(&self, sent: u64) -> bool {
        self.config.count.is_some_and(|target| sent >= target)
    }

    fn report(&self, sent: u64, started: Instant) {
        if self.config.verbose {
            info!(
                "[{:06}] BPDU Config -> {} | root priority {} | bridge {}",
                sent,
                self.frame.destination,
                self.frame.bpdu.root_id.priority,
                self.frame.source
            );
        } else if self.config.report_every > 0 && sent % self.config.report_every == 0 {
            let secs = started.elapsed().as_secs_f64();
            let rate = if secs > 0.0 { sent as f64 / secs } else { 0.0 };
            info!(sent, rate = %format!("{:.1} pkt/s", rate), "BPDUs sent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stproot_core::MacAddr;
    use stproot_stp::{assemble_frame, encode_config_bpdu, BpduParameters};

    const MAC: MacAddr = MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

    /// In-memory sink recording every frame it is given
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Vec<u8>>,
        fail_on_call: Option<usize>,
        stop_after: Option<(usize, StopSignal)>,
    }

    impl FrameSink for RecordingSink {
        fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
            if self.fail_on_call == Some(self.frames.len() + 1) {
                return Err(Error::transmit("network is down"));
            }
            self.frames.push(frame.to_vec());
            if let Some((n, signal)) = &self.stop_after {
                if self.frames.len() == *n {
                    signal.trigger();
                }
            }
            Ok(())
        }
    }

    fn test_frame() -> EthernetLlcFrame {
        let params = BpduParameters::builder(MAC).build().unwrap();
        assemble_frame(MAC, encode_config_bpdu(&params))
    }

    fn config(count: Option<u64>) -> SessionConfig {
        SessionConfig {
            count,
            delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_count_bounds_sends() {
        let mut session = TransmitSession::new(
            RecordingSink::default(),
            test_frame(),
            config(Some(5)),
            StopSignal::new(),
        )
        .unwrap();

        let summary = session.run().await;

        assert_eq!(summary.sent, 5);
        assert_eq!(session.sink().frames.len(), 5);
        assert!(matches!(summary.reason, StopReason::Completed));
        assert!(summary.is_success());
        assert_eq!(summary.bytes_sent, 5 * 60);
    }

    #[tokio::test]
    async fn test_every_send_is_identical() {
        let frame = test_frame();
        let mut session = TransmitSession::new(
            RecordingSink::default(),
            frame,
            config(Some(3)),
            StopSignal::new(),
        )
        .unwrap();
        session.run().await;

        let expected = frame.to_bytes().unwrap();
        assert!(session.sink().frames.iter().all(|f| *f == expected));
    }

    #[tokio::test]
    async fn test_zero_count_target_sends_nothing() {
        let mut session = TransmitSession::new(
            RecordingSink::default(),
            test_frame(),
            config(Some(0)),
            StopSignal::new(),
        )
        .unwrap();

        let summary = session.run().await;
        assert_eq!(summary.sent, 0);
        assert!(matches!(summary.reason, StopReason::Completed));
    }

    #[tokio::test]
    async fn test_interrupt_stops_unbounded_session() {
        let stop = StopSignal::new();
        let sink = RecordingSink {
            stop_after: Some((7, stop.clone())),
            ..Default::default()
        };
        let mut session = TransmitSession::new(sink, test_frame(), config(None), stop).unwrap();

        let summary = session.run().await;

        assert_eq!(summary.sent, 7);
        assert_eq!(session.sink().frames.len(), 7);
        assert!(matches!(summary.reason, StopReason::Interrupted));
        assert!(summary.is_success());
    }

    #[tokio::test]
    async fn test_interrupt_during_delay() {
        let stop = StopSignal::new();
        let sink = RecordingSink {
            stop_after: Some((1, stop.clone())),
            ..Default::default()
        };
        let slow = SessionConfig {
            count: None,
            delay: Duration::from_secs(60),
            ..Default::default()
        };
        let mut session = TransmitSession::new(sink, test_frame(), slow, stop).unwrap();

        let started = Instant::now();
        let summary = session.run().await;

        assert_eq!(summary.sent, 1);
        assert!(matches!(summary.reason, StopReason::Interrupted));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_stopped_before_start() {
        let stop = StopSignal::new();
        stop.trigger();
        let mut session =
            TransmitSession::new(RecordingSink::default(), test_frame(), config(None), stop)
                .unwrap();

        let summary = session.run().await;
        assert_eq!(summary.sent, 0);
        assert!(session.sink().frames.is_empty());
        assert!(matches!(summary.reason, StopReason::Interrupted));
    }

    #[tokio::test]
    async fn test_transmit_failure_is_fatal() {
        let sink = RecordingSink {
            fail_on_call: Some(3),
            ..Default::default()
        };
        let mut session =
            TransmitSession::new(sink, test_frame(), config(Some(10)), StopSignal::new())
                .unwrap();

        let summary = session.run().await;

        assert_eq!(summary.sent, 2);
        assert_eq!(session.sink().frames.len(), 2);
        assert!(matches!(summary.reason, StopReason::Failed(Error::Transmit(_))));
        assert!(!summary.is_success());
    }

    #[test]
    fn test_summary_rate() {
        let summary = SessionSummary {
            sent: 10,
            bytes_sent: 600,
            elapsed: Duration::from_secs(5),
            reason: StopReason::Completed,
        };
        assert!((summary.rate() - 2.0).abs() < f64::EPSILON);

        let instant = SessionSummary {
            elapsed: Duration::ZERO,
            ..summary
        };
        assert_eq!(instant.rate(), 0.0);
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::Completed.to_string(), "completed");
        assert_eq!(StopReason::Interrupted.to_string(), "interrupted");
        assert_eq!(
            StopReason::Failed(Error::transmit("boom")).to_string(),
            "failed: Transmit error: boom"
        );
    }
}
