//! The typewriter timer loop.
//!
//! One spawned task owns the [`Typewriter`] and drives it with a single
//! pending sleep at a time: tick, publish the displayed text through a
//! watch channel, sleep for the delay the tick returned, repeat. The
//! render layer only ever reads the receiver, which is atomic per tick.
//!
//! Teardown is explicit: [`TypewriterHandle::stop`] (or dropping the
//! handle) aborts the task, so no tick fires after the owning component
//! is gone.

use folio_types::ui::Typewriter;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Cancellation handle for a running typewriter loop.
#[derive(Debug)]
pub struct TypewriterHandle {
    task: JoinHandle<()>,
}

impl TypewriterHandle {
    /// Cancel the loop. The pending sleep is dropped and no further state
    /// transition runs.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the loop and return its handle plus the receiver for the
/// displayed text.
///
/// The first tick runs immediately, so the first grapheme appears at
/// t=0 rather than after one keystroke delay.
pub fn spawn_typewriter(mut typewriter: Typewriter) -> (TypewriterHandle, watch::Receiver<String>) {
    let (tx, rx) = watch::channel(String::new());

    let task = tokio::spawn(async move {
        loop {
            let delay = typewriter.advance();
            if tx.send(typewriter.displayed().to_owned()).is_err() {
                // Every receiver is gone; the loop has no audience left.
                break;
            }
            tokio::time::sleep(delay).await;
        }
    });

    (TypewriterHandle { task }, rx)
}

#[cfg(test)]
mod tests {
    use super::spawn_typewriter;
    use folio_types::NonEmptyString;
    use folio_types::ui::{Typewriter, TypewriterTiming};
    use std::time::Duration;

    fn typewriter(raw: &[&str]) -> Typewriter {
        let phrases = raw
            .iter()
            .map(|p| NonEmptyString::new(*p).unwrap())
            .collect();
        Typewriter::new(phrases, TypewriterTiming::default()).unwrap()
    }

    // Paused-clock sleeps auto-advance virtual time, draining the loop's
    // own timers deterministically along the way.
    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_on_the_tick_schedule() {
        let (_handle, rx) = spawn_typewriter(typewriter(&["Go"]));

        // t=0: first grapheme.
        settle(1).await;
        assert_eq!(*rx.borrow(), "G");

        // t=150: full phrase, pausing.
        settle(150).await;
        assert_eq!(*rx.borrow(), "Go");

        // The pause holds the full phrase; nothing changes mid-pause.
        settle(1000).await;
        assert_eq!(*rx.borrow(), "Go");

        // t=2150: pause step fired (no text change yet).
        settle(1010).await;
        assert_eq!(*rx.borrow(), "Go");

        // t=2200 and t=2250: deletion ticks.
        settle(60).await;
        assert_eq!(*rx.borrow(), "G");
        settle(50).await;
        assert_eq!(*rx.borrow(), "");

        // t=2400: the (only) phrase wrapped around and types again.
        settle(160).await;
        assert_eq!(*rx.borrow(), "G");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_further_ticks() {
        let (handle, rx) = spawn_typewriter(typewriter(&["Rust"]));

        settle(1).await;
        assert_eq!(*rx.borrow(), "R");

        handle.stop();
        settle(10_000).await;
        assert_eq!(*rx.borrow(), "R");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_loop() {
        let (handle, rx) = spawn_typewriter(typewriter(&["Rust"]));

        settle(1).await;
        drop(handle);
        settle(10_000).await;
        assert_eq!(*rx.borrow(), "R");
    }
}
