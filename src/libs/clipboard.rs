/// Clipboard writes with a transient "Copied" acknowledgement
use crate::libs::playground::PlaygroundPhase;
use crate::utils::constants::{ COPY_ACK_DEFAULT_MS, COPY_ACK_MAX_MS, COPY_ACK_MIN_MS };
use crate::utils::delay::Delay;
use crate::{ debug_eprint, debug_print };
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Something text can be written to
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. The handle is opened on first use and kept so the
/// contents outlive the write on platforms where the owner serves them.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard
                ::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }

        let Some(clipboard) = self.handle.as_mut() else {
            return Err(ClipboardError::Unavailable("no clipboard handle".to_string()));
        };

        let result = clipboard.set_text(text.to_owned());
        if let Err(e) = result {
            // A broken handle is reopened on the next attempt
            self.handle = None;
            return Err(ClipboardError::Unavailable(e.to_string()));
        }
        Ok(())
    }
}

/// Shared clipboard backend handed to components through context
#[derive(Clone)]
pub struct ClipboardSource(Rc<RefCell<Box<dyn ClipboardBackend>>>);

impl ClipboardSource {
    pub fn new(backend: impl ClipboardBackend + 'static) -> Self {
        Self(Rc::new(RefCell::new(Box::new(backend))))
    }

    pub fn system() -> Self {
        Self::new(SystemClipboard::default())
    }
}

impl ClipboardBackend for ClipboardSource {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.0.try_borrow_mut() {
            Ok(mut backend) => backend.write_text(text),
            Err(_) => Err(ClipboardError::Unavailable("clipboard busy".to_string())),
        }
    }
}

/// Identifies one acknowledgement so an older timer cannot clear a newer one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Clamp a configured delay into the supported acknowledgement window
pub fn ack_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(COPY_ACK_MIN_MS, COPY_ACK_MAX_MS))
}

/// Which snippet was copied last; a ticket ties it to its expiry timer
#[derive(Clone, Debug, PartialEq)]
pub struct CopyAcknowledgement {
    copied_text: Option<String>,
    ticket: u64,
    delay: Duration,
}

impl Default for CopyAcknowledgement {
    fn default() -> Self {
        Self::new(ack_delay(COPY_ACK_DEFAULT_MS))
    }
}

impl CopyAcknowledgement {
    pub fn new(delay: Duration) -> Self {
        Self {
            copied_text: None,
            ticket: 0,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.copied_text.as_deref() == Some(text)
    }

    pub fn phase(&self) -> PlaygroundPhase {
        if self.copied_text.is_some() { PlaygroundPhase::Copied } else { PlaygroundPhase::Idle }
    }

    /// Write `text` and acknowledge it. Failures never reach the caller: the
    /// acknowledgement is cleared and `None` is returned.
    pub fn copy<B: ClipboardBackend + ?Sized>(&mut self, backend: &mut B, text: &str) -> Option<CopyTicket> {
        self.ticket += 1;

        match backend.write_text(text) {
            Ok(()) => {
                debug_print!("📋 Copied {} bytes to clipboard", text.len());
                self.copied_text = Some(text.to_string());
                Some(CopyTicket(self.ticket))
            }
            Err(e) => {
                debug_eprint!("⚠️ Copy skipped: {}", e);
                self.clear();
                None
            }
        }
    }

    /// Clear the acknowledgement if `ticket` is still the latest copy
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.ticket || self.copied_text.is_none() {
            return false;
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.copied_text = None;
    }
}

/// Component-scoped clipboard helper returned by [`use_clipboard`]
#[derive(Clone, Copy)]
pub struct UseClipboard {
    state: Signal<CopyAcknowledgement>,
    source: Signal<ClipboardSource>,
}

impl UseClipboard {
    /// Copy `text`, show the acknowledgement and schedule its expiry.
    ///
    /// The expiry task belongs to the calling component, so it is dropped on
    /// unmount. A signal that is already gone refuses the late write.
    pub fn copy(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.state;
        let mut source = self.source.peek().clone();

        let ticket = state.write().copy(&mut source, &text);
        let Some(ticket) = ticket else {
            return;
        };

        let delay = state.peek().delay();
        spawn(async move {
            Delay::duration(delay).await;
            if let Ok(mut ack) = state.try_write() {
                ack.expire(ticket);
            }
        });
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.state.read().is_copied(text)
    }

    pub fn phase(&self) -> PlaygroundPhase {
        self.state.read().phase()
    }
}

/// Clipboard helper for one component. Uses the [`ClipboardSource`] from
/// context when an ancestor provides one, the system clipboard otherwise.
pub fn use_clipboard(delay: Duration) -> UseClipboard {
    let provided = try_use_context::<ClipboardSource>();
    let source = use_signal(move || provided.unwrap_or_else(ClipboardSource::system));
    let state = use_signal(move || CopyAcknowledgement::new(delay));
    UseClipboard { state, source }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory clipboard for tests
    #[derive(Clone, Default)]
    pub struct MemoryClipboard {
        pub contents: Rc<RefCell<Option<String>>>,
        pub fail: bool,
    }

    impl MemoryClipboard {
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub fn contents(&self) -> Option<String> {
            self.contents.borrow().clone()
        }
    }

    impl ClipboardBackend for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("permission denied".to_string()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryClipboard;
    use super::*;
    use pretty_assertions::assert_eq;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn copy_acknowledges_immediately_until_its_ticket_expires() {
        let mut backend = MemoryClipboard::default();
        let mut ack = CopyAcknowledgement::new(DELAY);

        let ticket = ack.copy(&mut backend, "items-center").unwrap();
        assert!(ack.is_copied("items-center"));
        assert!(!ack.is_copied("items-end"));
        assert_eq!(ack.phase(), PlaygroundPhase::Copied);
        assert_eq!(backend.contents().as_deref(), Some("items-center"));

        assert!(ack.expire(ticket));
        assert!(!ack.is_copied("items-center"));
        assert_eq!(ack.phase(), PlaygroundPhase::Idle);
    }

    #[test]
    fn failed_write_is_swallowed_and_clears_acknowledgement() {
        let mut ack = CopyAcknowledgement::new(DELAY);
        ack.copy(&mut MemoryClipboard::default(), "p-4");

        let ticket = ack.copy(&mut MemoryClipboard::failing(), "p-8");
        assert_eq!(ticket, None);
        assert!(!ack.is_copied("p-4"));
        assert_eq!(ack.phase(), PlaygroundPhase::Idle);
    }

    #[test]
    fn stale_timer_does_not_clear_newer_copy() {
        let mut backend = MemoryClipboard::default();
        let mut ack = CopyAcknowledgement::new(DELAY);

        let first = ack.copy(&mut backend, "items-start").unwrap();
        let second = ack.copy(&mut backend, "items-end").unwrap();

        assert!(!ack.expire(first));
        assert!(ack.is_copied("items-end"));
        assert!(ack.expire(second));
        assert!(!ack.expire(second));
    }

    #[test]
    fn delay_is_clamped_into_window() {
        assert_eq!(ack_delay(10), Duration::from_millis(COPY_ACK_MIN_MS));
        assert_eq!(ack_delay(1500), Duration::from_millis(1500));
        assert_eq!(ack_delay(60_000), Duration::from_millis(COPY_ACK_MAX_MS));
        assert_eq!(CopyAcknowledgement::default().delay(), Duration::from_millis(COPY_ACK_DEFAULT_MS));
    }

    #[test]
    fn source_forwards_to_backend() {
        let memory = MemoryClipboard::default();
        let mut source = ClipboardSource::new(memory.clone());
        source.write_text("rounded-lg").unwrap();
        assert_eq!(memory.contents().as_deref(), Some("rounded-lg"));
    }

    #[component]
    fn CopyOnMount(delay: Duration) -> Element {
        let clipboard = use_clipboard(delay);
        use_hook(move || clipboard.copy("items-center"));
        rsx! {
          span {
            if clipboard.is_copied("items-center") {
              "Copied items-center"
            }
          }
        }
    }

    #[component]
    fn Harness(memory: MemoryClipboard, delay: Duration, unmount_after: Option<Duration>) -> Element {
        use_context_provider(move || ClipboardSource::new(memory.clone()));
        let mut show = use_signal(|| true);
        use_hook(move || {
            if let Some(after) = unmount_after {
                spawn(async move {
                    Delay::duration(after).await;
                    show.set(false);
                });
            }
        });

        rsx! {
          if show() {
            CopyOnMount { delay }
          } else {
            span { "unmounted" }
          }
        }
    }

    fn mount(memory: &MemoryClipboard, delay: Duration, unmount_after: Option<Duration>) -> VirtualDom {
        let props = HarnessProps { memory: memory.clone(), delay, unmount_after };
        let mut dom = VirtualDom::new_with_props(Harness, props);
        dom.rebuild_in_place();
        dom
    }

    /// Drive pending tasks and re-render until `done` holds for the output or `limit` passes
    async fn run_until(dom: &mut VirtualDom, limit: Duration, done: impl Fn(&str) -> bool) -> bool {
        tokio::time::timeout(limit, async {
            loop {
                dom.wait_for_work().await;
                let _ = dom.render_immediate_to_vec();
                if done(&dioxus_ssr::render(dom)) {
                    return;
                }
            }
        }).await.is_ok()
    }

    impl PartialEq for MemoryClipboard {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.contents, &other.contents) && self.fail == other.fail
        }
    }

    #[test]
    fn mounted_copy_is_visible_immediately() {
        let memory = MemoryClipboard::default();
        let dom = mount(&memory, DELAY, None);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Copied items-center"), "{html}");
        assert_eq!(memory.contents().as_deref(), Some("items-center"));
    }

    #[tokio::test]
    async fn acknowledgement_clears_once_the_delay_passes() {
        let delay = Duration::from_millis(80);
        let memory = MemoryClipboard::default();
        let started = std::time::Instant::now();
        let mut dom = mount(&memory, delay, None);
        assert!(dioxus_ssr::render(&dom).contains("Copied items-center"));

        let cleared = run_until(&mut dom, Duration::from_secs(2), |html| !html.contains("Copied")).await;

        assert!(cleared, "acknowledgement never expired");
        assert!(started.elapsed() >= delay);
        // Expiry only resets the notice, never the clipboard
        assert_eq!(memory.contents().as_deref(), Some("items-center"));
    }

    #[tokio::test]
    async fn unmounting_before_expiry_leaves_nothing_running() {
        let delay = Duration::from_millis(120);
        let memory = MemoryClipboard::default();
        let mut dom = mount(&memory, delay, Some(Duration::from_millis(20)));
        assert!(dioxus_ssr::render(&dom).contains("Copied items-center"));

        let unmounted = run_until(&mut dom, Duration::from_secs(2), |html| html.contains("unmounted")).await;
        assert!(unmounted, "copier was never unmounted");

        // Keep driving the dom well past the copier's deadline; any surviving
        // expiry task would be polled here against a dropped signal
        let changed = run_until(&mut dom, delay * 3, |html| !html.contains("unmounted")).await;
        assert!(!changed);
        assert!(dioxus_ssr::render(&dom).contains("unmounted"));
        assert_eq!(memory.contents().as_deref(), Some("items-center"));
    }
}
