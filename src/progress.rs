use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::sync::oneshot;

const TICK: Duration = Duration::from_secs(3);

/// Await `operation` while printing one dot per tick interval, then a
/// terminating newline. Transparent to the operation's outcome.
pub async fn while_waiting<F: Future>(operation: F) -> F::Output {
    // The caller printed a message with no newline; make it visible now.
    let _ = std::io::stdout().flush();
    let result = with_ticker(TICK, print_dot, operation).await;
    println!();
    result
}

fn print_dot() {
    print!(".");
    let _ = std::io::stdout().flush();
}

/// Run `operation` concurrently with a heartbeat task that calls `on_tick`
/// every `tick`. Once the operation settles, the ticker is signalled to stop
/// and joined before the outcome is returned, so no tick fires after this
/// function returns.
async fn with_ticker<F, T>(
    tick: Duration,
    on_tick: impl Fn() + Send + 'static,
    operation: F,
) -> T
where
    F: Future<Output = T>,
{
    let (done_tx, mut done_rx) = oneshot::channel::<()>();
    let ticker = tokio::spawn(async move {
        loop {
            tokio::select! {
                // Completes on signal, or with an error if the sender is
                // dropped without sending. Either way the ticker stops.
                _ = &mut done_rx => break,
                _ = tokio::time::sleep(tick) => on_tick(),
            }
        }
    });

    let result = operation.await;

    let _ = done_tx.send(());
    let _ = ticker.await;

    result
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::{Error, Result};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + 'static) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let on_tick = {
            let ticks = ticks.clone();
            move || {
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        };
        (ticks, on_tick)
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_operation_value() {
        let (_, on_tick) = counter();
        let value = with_ticker(Duration::from_secs(3), on_tick, async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_propagates_operation_error() {
        let (_, on_tick) = counter();
        let outcome: Result<()> = with_ticker(Duration::from_secs(3), on_tick, async {
            Err(Error::Status {
                status: 404,
                reason: "Not Found".to_string(),
            })
        })
        .await;

        assert!(matches!(outcome, Err(Error::Status { status: 404, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_operation_ticks_at_most_once() {
        let (ticks, on_tick) = counter();
        with_ticker(Duration::from_secs(3), on_tick, async {
            tokio::time::sleep(Duration::from_secs(1)).await;
        })
        .await;

        assert!(ticks.load(Ordering::SeqCst) <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_operation_keeps_ticking() {
        let (ticks, on_tick) = counter();
        with_ticker(Duration::from_secs(3), on_tick, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
        })
        .await;

        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_leak_after_return() {
        let (ticks, on_tick) = counter();
        with_ticker(Duration::from_secs(3), on_tick, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
        })
        .await;

        let settled = ticks.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), settled);
    }
}
