//! User-facing collaborator for the install flow.
//!
//! The installer never talks to a terminal or window directly. Everything the
//! user sees or answers goes through [`UserInteraction`], which the host
//! implements and tests replace with a recording fake.

use async_trait::async_trait;

/// Capabilities the host UI provides to the installer.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use docker_desktop_installer::UserInteraction;
///
/// /// Accepts every prompt and prints everything else.
/// struct AlwaysYes;
///
/// #[async_trait]
/// impl UserInteraction for AlwaysYes {
///     fn begin_progress(&self, title: &str) {
///         println!("{title}");
///     }
///     fn end_progress(&self) {}
///     async fn confirm(&self, message: &str, options: &[&str]) -> Option<String> {
///         println!("{message}");
///         options.first().map(|o| o.to_string())
///     }
///     fn notify(&self, message: &str) {
///         println!("{message}");
///     }
///     fn append_log(&self, line: &str) {
///         println!("{line}");
///     }
///     fn open_external(&self, url: &str) {
///         println!("See {url}");
///     }
/// }
/// ```
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Show a progress indicator with the given title.
    fn begin_progress(&self, title: &str);

    /// Hide the indicator shown by the last `begin_progress`.
    fn end_progress(&self);

    /// Ask the user to pick one of `options`.
    ///
    /// Returns the selected option, or `None` if the prompt was dismissed.
    async fn confirm(&self, message: &str, options: &[&str]) -> Option<String>;

    /// Show an informational message. Fire-and-forget: the installer does not
    /// wait for or depend on it being displayed.
    fn notify(&self, message: &str);

    /// Append a line to the host's output log.
    fn append_log(&self, line: &str);

    /// Open a URL with the host's default handler.
    fn open_external(&self, url: &str);
}

/// Keeps a progress indicator visible for as long as it is alive.
pub(crate) struct ProgressScope<'a> {
    ui: &'a dyn UserInteraction,
}

impl<'a> ProgressScope<'a> {
    pub(crate) fn begin(ui: &'a dyn UserInteraction, title: &str) -> Self {
        ui.begin_progress(title);
        Self { ui }
    }
}

impl Drop for ProgressScope<'_> {
    fn drop(&mut self) {
        self.ui.end_progress();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UserInteraction for Recorder {
        fn begin_progress(&self, title: &str) {
            self.events.lock().unwrap().push(format!("begin:{title}"));
        }
        fn end_progress(&self) {
            self.events.lock().unwrap().push("end".to_string());
        }
        async fn confirm(&self, _message: &str, _options: &[&str]) -> Option<String> {
            None
        }
        fn notify(&self, _message: &str) {}
        fn append_log(&self, _line: &str) {}
        fn open_external(&self, _url: &str) {}
    }

    #[test]
    fn test_progress_scope_ends_on_drop() {
        let ui = Recorder::default();
        {
            let _scope = ProgressScope::begin(&ui, "Downloading");
            ui.events.lock().unwrap().push("work".to_string());
        }
        let events = ui.events.lock().unwrap();
        assert_eq!(*events, vec!["begin:Downloading", "work", "end"]);
    }

    #[test]
    fn test_progress_scope_ends_on_early_return() {
        fn failing(ui: &dyn UserInteraction) -> Result<(), ()> {
            let _scope = ProgressScope::begin(ui, "Downloading");
            Err(())
        }

        let ui = Recorder::default();
        assert!(failing(&ui).is_err());
        assert_eq!(ui.events.lock().unwrap().last().map(String::as_str), Some("end"));
    }
}
