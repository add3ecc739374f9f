//! Sequential broadcast delivery

use super::types::BroadcastReport;
use crate::ports::progress::{AgentCall, GameProgress};
use crate::session::SessionSlot;
use std::time::Duration;
use tracing::{debug, warn};

/// One recipient of a fan-out
pub(super) struct Recipient<'a> {
    pub slot: &'a SessionSlot,
    pub label: String,
}

/// Deliver `message` to every recipient in order, discarding replies.
///
/// A failed delivery is logged and skipped; it never stops the fan-out.
pub(super) async fn fan_out(
    recipients: &[Recipient<'_>],
    message: &str,
    timeout: Option<Duration>,
    progress: &dyn GameProgress,
) -> BroadcastReport {
    let mut report = BroadcastReport::default();

    for recipient in recipients {
        let id = recipient.slot.participant();
        progress.on_agent_start(id, &recipient.label, AgentCall::Delivery);

        match recipient.slot.query(message, timeout).await {
            Ok(_) => {
                debug!(participant = %id, "Broadcast delivered");
                progress.on_agent_complete(id, AgentCall::Delivery, true);
                report.delivered.push(id.clone());
            }
            Err(e) => {
                warn!(participant = %id, "Failed to deliver broadcast: {}", e);
                progress.on_agent_complete(id, AgentCall::Delivery, false);
                report.failed.push(id.clone());
            }
        }
    }

    report
}
