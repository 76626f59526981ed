// SPDX-License-Identifier: Apache-2.0

//! Event loop driving a [`SearchController`] from a channel of events.

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::controller::{SearchController, SearchEvent, Transition};
use crate::navigate::Navigator;

/// Runs the controller until the event channel closes.
///
/// Events are applied in arrival order. The only timer is the controller's
/// debounce deadline, which is re-read after every event, so a keystroke
/// always replaces the pending ranking pass. A ranking pass still pending
/// when the channel closes is allowed to finish.
///
/// `on_transition` sees the controller after every change.
pub async fn run_session<N, F>(
    mut controller: SearchController<N>,
    mut events: mpsc::Receiver<SearchEvent>,
    mut on_transition: F,
) -> SearchController<N>
where
    N: Navigator,
    F: FnMut(&SearchController<N>, &Transition),
{
    loop {
        let deadline = controller.debounce_deadline();
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                let transition = controller.handle(event, Instant::now());
                if transition != Transition::Unchanged {
                    on_transition(&controller, &transition);
                }
            }
            _ = sleep_until(deadline), if deadline.is_some() => {
                let transition = controller.poll(Instant::now());
                if transition != Transition::Unchanged {
                    on_transition(&controller, &transition);
                }
            }
        }
    }

    if let Some(deadline) = controller.debounce_deadline() {
        time::sleep_until(deadline).await;
        let transition = controller.poll(Instant::now());
        if transition != Transition::Unchanged {
            on_transition(&controller, &transition);
        }
    }
    tracing::debug!(state = %controller.state(), "search session finished");
    controller
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
