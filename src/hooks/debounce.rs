use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_hooks::{use_callback, use_signal};
use web_time::Instant;

use crate::search::Debouncer;
use crate::utils::sleep;

/// Handle returned by [`use_debounce`]
pub struct UseDebounce<T: 'static> {
    debouncer: Rc<RefCell<Debouncer<T>>>,
    task: Rc<Cell<Option<Task>>>,
    pending: Signal<bool>,
    callback: Callback<T>,
}

impl<T: 'static> Clone for UseDebounce<T> {
    fn clone(&self) -> Self {
        Self {
            debouncer: self.debouncer.clone(),
            task: self.task.clone(),
            pending: self.pending,
            callback: self.callback,
        }
    }
}

impl<T: 'static> UseDebounce<T> {
    /// Schedules `value`, cancelling the timer of any earlier call that has not fired yet.
    pub fn call(&self, value: T) {
        let deadline = self.debouncer.borrow_mut().call(value, Instant::now());

        if let Some(previous) = self.task.take() {
            previous.cancel();
        }

        let mut pending = self.pending;
        pending.set(true);

        let debouncer = self.debouncer.clone();
        let slot = self.task.clone();
        let callback = self.callback;
        let handle = spawn(async move {
            sleep(deadline.saturating_duration_since(Instant::now())).await;
            // A newer call cancels this task, so the deadline is still the current one.
            let fired = debouncer.borrow_mut().poll(deadline);
            slot.set(None);
            pending.set(false);
            if let Some(value) = fired {
                callback.call(value);
            }
        });
        self.task.set(Some(handle));
    }

    /// Whether a value is waiting for its quiet period. Reading subscribes the caller.
    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }
}

/// Runs `callback` with the latest value once `delay` passes without another call.
///
/// The timer is a task owned by the calling component. Unmounting the
/// component cancels it and drops the pending value, so nothing fires after
/// disposal.
pub fn use_debounce<T: 'static>(
    delay: Duration,
    callback: impl FnMut(T) + 'static,
) -> UseDebounce<T> {
    let debouncer = use_hook(|| Rc::new(RefCell::new(Debouncer::new(delay))));
    let task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let pending = use_signal(|| false);
    let callback = use_callback(callback);

    use_drop({
        let debouncer = debouncer.clone();
        let task = task.clone();
        move || {
            if let Some(timer) = task.take() {
                timer.cancel();
            }
            debouncer.borrow_mut().cancel();
        }
    });

    UseDebounce {
        debouncer,
        task,
        pending,
        callback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use tokio::time::Instant as VirtualInstant;

    type FireLog = Rc<RefCell<Vec<(String, Duration)>>>;

    #[derive(Clone)]
    struct Typing {
        log: FireLog,
        start: VirtualInstant,
        /// `(pause before the keystroke, value after it)`
        keystrokes: Vec<(u64, &'static str)>,
    }

    fn typing_app(props: Typing) -> Element {
        let log = props.log.clone();
        let start = props.start;
        let search = use_debounce(Duration::from_millis(300), move |term: String| {
            log.borrow_mut().push((term, start.elapsed()));
        });

        use_hook(|| {
            let search = search.clone();
            let keystrokes = props.keystrokes.clone();
            spawn(async move {
                for (pause, value) in keystrokes {
                    tokio::time::sleep(Duration::from_millis(pause)).await;
                    search.call(value.to_string());
                }
            });
        });

        rsx! {}
    }

    #[component]
    fn Searcher() -> Element {
        let log = use_context::<FireLog>();
        let search = use_debounce(Duration::from_millis(300), move |term: String| {
            log.borrow_mut().push((term, Duration::ZERO));
        });
        use_hook(|| {
            let search = search.clone();
            spawn(async move { search.call("lamp".to_string()) });
        });
        rsx! {}
    }

    fn unmount_app(log: FireLog) -> Element {
        use_context_provider(|| log.clone());
        let mut shown = use_signal(|| true);
        use_hook(|| {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                shown.set(false);
            });
        });

        rsx! {
            if shown() {
                Searcher {}
            }
        }
    }

    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let _ = tokio::time::timeout(duration, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_fire_once_after_quiet_period() {
        let log = FireLog::default();
        let words = ["b", "bo", "boo", "book", "books", "books ", "books o", "books on", "books on ", "books on r"];
        let keystrokes = words
            .iter()
            .enumerate()
            .map(|(i, word)| (if i == 0 { 0 } else { 50 }, *word))
            .collect();
        let mut dom = VirtualDom::new_with_props(
            typing_app,
            Typing {
                log: log.clone(),
                start: VirtualInstant::now(),
                keystrokes,
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_secs(2)).await;

        let fired = log.borrow();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, "books on r");
        // Last keystroke lands at 450 ms.
        assert!(fired[0].1 >= Duration::from_millis(740));
        assert!(fired[0].1 <= Duration::from_millis(760));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_longer_than_delay_fire_each_value() {
        let log = FireLog::default();
        let mut dom = VirtualDom::new_with_props(
            typing_app,
            Typing {
                log: log.clone(),
                start: VirtualInstant::now(),
                keystrokes: vec![(0, "lamp"), (100, "desk"), (500, "chair")],
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_secs(2)).await;

        let terms: Vec<String> = log.borrow().iter().map(|(term, _)| term.clone()).collect();
        assert_eq!(terms, vec!["desk".to_string(), "chair".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_call() {
        let log = FireLog::default();
        let mut dom = VirtualDom::new_with_props(unmount_app, log.clone());
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_secs(2)).await;

        assert!(log.borrow().is_empty());
    }
}
