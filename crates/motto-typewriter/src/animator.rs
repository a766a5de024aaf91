//! Timer thread that drives a [`Typewriter`] into a display target.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use motto_core::{PhraseList, TARGET_ID, Timing};

use crate::page::{Page, TextSink};
use crate::state::Typewriter;

/// Runs typewriter steps on a background thread until stopped.
#[derive(Debug)]
pub struct Animator {
    /// Dropping this wakes the thread and ends the loop.
    stop_tx: Option<Sender<()>>,
    /// Handle of the timer thread.
    handle: Option<JoinHandle<()>>,
}

impl Animator {
    /// Attach to the page's `dynamic-moto` element and start animating.
    ///
    /// Returns `None` without side effects if the page has no such element.
    pub fn attach(page: &Page, phrases: PhraseList, timing: Timing) -> Option<Self> {
        let target = page.element(TARGET_ID)?;
        tracing::debug!(target_id = TARGET_ID, phrases = phrases.len(), "attaching animator");
        Some(Self::spawn(Arc::new(target), Typewriter::new(phrases, timing)))
    }

    /// Start the timer thread writing into `sink`.
    ///
    /// The first step runs after the typing interval.
    pub fn spawn(sink: Arc<dyn TextSink>, mut typewriter: Typewriter) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let first_delay = typewriter.timing().typing;

        let handle = thread::spawn(move || {
            let mut delay = first_delay;
            loop {
                match stop_rx.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                let step = typewriter.step();
                sink.set_text(&step.text);
                delay = step.delay;
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Whether the timer thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer thread and wait for it to exit.
    ///
    /// No write reaches the target after this returns. Safe to call twice.
    pub fn stop(&mut self) {
        // Dropping the sender disconnects the channel and wakes the thread.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("animator thread panicked");
            }
            tracing::debug!("animator stopped");
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use crate::page::TextElement;

    /// Sink that records every write.
    #[derive(Default)]
    struct Recorder {
        writes: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl TextSink for Recorder {
        fn set_text(&self, text: &str) {
            self.writes.lock().unwrap().push(text.to_string());
        }
    }

    fn wait_for_writes(recorder: &Recorder, count: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while recorder.writes().len() < count {
            assert!(Instant::now() < deadline, "timed out waiting for writes");
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn fast() -> Timing {
        Timing::uniform(Duration::from_millis(1))
    }

    #[test]
    fn test_missing_target_never_starts() {
        let page = Page::new().with_element("something-else");
        let animator = Animator::attach(&page, PhraseList::default(), fast());
        assert!(animator.is_none());

        thread::sleep(Duration::from_millis(20));
        assert_eq!(page.element("something-else").unwrap().text(), "");
    }

    #[test]
    fn test_writes_follow_state_machine() {
        let phrases = PhraseList::new(["AB", "C"]).unwrap();
        let recorder = Arc::new(Recorder::default());
        let mut animator = Animator::spawn(recorder.clone(), Typewriter::new(phrases, fast()));

        wait_for_writes(&recorder, 9);
        animator.stop();

        let writes = recorder.writes();
        assert_eq!(
            &writes[..9],
            &["A", "AB", "A", "", "C", "", "A", "AB", "A"]
        );
    }

    #[test]
    fn test_attach_writes_into_page_element() {
        let page = Page::new().with_element(TARGET_ID);
        let element: TextElement = page.element(TARGET_ID).unwrap();
        let phrases = PhraseList::new(["Hi"]).unwrap();
        let mut animator = Animator::attach(&page, phrases, fast()).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while element.text() != "Hi" {
            assert!(Instant::now() < deadline, "element never showed full phrase");
            thread::sleep(Duration::from_millis(1));
        }
        animator.stop();
    }

    #[test]
    fn test_stop_prevents_further_writes() {
        let recorder = Arc::new(Recorder::default());
        let mut animator =
            Animator::spawn(recorder.clone(), Typewriter::new(PhraseList::default(), fast()));
        wait_for_writes(&recorder, 3);

        animator.stop();
        assert!(!animator.is_running());
        let after_stop = recorder.writes().len();

        thread::sleep(Duration::from_millis(20));
        assert_eq!(recorder.writes().len(), after_stop);

        animator.stop();
    }

    #[test]
    fn test_stop_interrupts_long_delay() {
        let recorder = Arc::new(Recorder::default());
        let timing = Timing::uniform(Duration::from_secs(60));
        let mut animator =
            Animator::spawn(recorder.clone(), Typewriter::new(PhraseList::default(), timing));
        assert!(animator.is_running());

        let started = Instant::now();
        animator.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(recorder.writes().is_empty());
    }

    #[test]
    fn test_first_write_waits_typing_interval() {
        let timing = Timing {
            typing: Duration::from_millis(200),
            deleting: Duration::from_millis(1),
            hold: Duration::from_millis(1),
        };
        let phrases = PhraseList::new(["AB"]).unwrap();
        let recorder = Arc::new(Recorder::default());
        let started = Instant::now();
        let mut animator = Animator::spawn(recorder.clone(), Typewriter::new(phrases, timing));

        thread::sleep(Duration::from_millis(150));
        assert!(recorder.writes().is_empty());

        wait_for_writes(&recorder, 1);
        assert!(started.elapsed() >= Duration::from_millis(200));
        animator.stop();
        assert_eq!(recorder.writes()[0], "A");
    }
}
