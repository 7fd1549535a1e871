use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::session::MoodController;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub async fn refresh_loop(
    controller: MoodController,
    interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let status = controller.refresh().await;
                if !status.has_health_data {
                    log_warn!("no health data yet; showing {}", status.mood);
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("mood refresh loop shutting down");
                break;
            }
        }
    }
}
