//! Terminal progress for batch runs, and a logger that does not tear the bars
//!
//! Documents are laid out one at a time, so there is at most one word bar on
//! screen. A file counter sits above it when more than one document is queued.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{Log, Metadata, Record, SetLoggerError};
use std::path::Path;
use std::sync::LazyLock;

static WORDS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:30.cyan/blue}] {pos}/{len} words, {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static FILES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Documents: [{bar:30.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Word placement progress for the document being laid out
pub struct ProgressManager {
    multi_progress: MultiProgress,
    files_bar: Option<ProgressBar>,
    words_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Progress drawn to stderr
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Progress drawn to `target`; a hidden target still tracks state
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            files_bar: None,
            words_bar: None,
        }
    }

    /// Handle for suspending the display while other output is written
    pub const fn multi_progress(&self) -> &MultiProgress {
        &self.multi_progress
    }

    /// Prepare for `file_count` documents
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let bar = ProgressBar::new(file_count as u64).with_style(FILES_STYLE.clone());
            self.files_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Show a fresh word bar for a document with `words` glyphs to place
    pub fn start_file(&mut self, path: &Path, words: usize) {
        self.clear_words_bar();

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let bar = ProgressBar::new(words as u64)
            .with_style(WORDS_STYLE.clone())
            .with_prefix(name)
            .with_message("0 placed, 0 skipped");
        self.words_bar = Some(self.multi_progress.add(bar));
    }

    /// Report placement counts for the current document
    pub fn record_step(&self, placed: usize, skipped: usize) {
        if let Some(ref bar) = self.words_bar {
            bar.set_position((placed + skipped) as u64);
            bar.set_message(format!("{placed} placed, {skipped} skipped"));
        }
    }

    /// Close the current document, whether or not it produced an image
    pub fn complete_file(&mut self) {
        self.clear_words_bar();
        if let Some(ref bar) = self.files_bar {
            bar.inc(1);
        }
    }

    /// Remove every bar from the terminal
    pub fn finish(&mut self) {
        self.clear_words_bar();
        if let Some(bar) = self.files_bar.take() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Bar of the document being laid out
    pub const fn words_bar(&self) -> Option<&ProgressBar> {
        self.words_bar.as_ref()
    }

    /// Document counter, present for multi-document batches
    pub const fn files_bar(&self) -> Option<&ProgressBar> {
        self.files_bar.as_ref()
    }

    fn clear_words_bar(&mut self) {
        if let Some(bar) = self.words_bar.take() {
            bar.finish_and_clear();
            self.multi_progress.remove(&bar);
        }
    }
}

/// Logger that hides the progress bars while a record is written
///
/// Records go to `inner` between a suspend and a redraw of the bars, so log
/// lines and bars never share a terminal row.
pub struct SuspendingLogger<L> {
    inner: L,
    multi_progress: MultiProgress,
}

impl<L: Log> SuspendingLogger<L> {
    /// Wrap `inner`, suspending `multi_progress` around every record
    pub const fn new(inner: L, multi_progress: MultiProgress) -> Self {
        Self {
            inner,
            multi_progress,
        }
    }

    /// Wrapped logger
    pub const fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Log> Log for SuspendingLogger<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.inner.enabled(record.metadata()) {
            self.multi_progress.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install `logger` globally, hiding `multi_progress` while each record is written
///
/// Without a progress display the records are written straight through.
///
/// # Errors
///
/// Returns an error if a global logger is already installed
pub fn install_logger(
    logger: env_logger::Logger,
    multi_progress: Option<MultiProgress>,
) -> Result<(), SetLoggerError> {
    let max_level = logger.filter();
    let multi_progress = multi_progress
        .unwrap_or_else(|| MultiProgress::with_draw_target(ProgressDrawTarget::hidden()));
    log::set_boxed_logger(Box::new(SuspendingLogger::new(logger, multi_progress)))?;
    log::set_max_level(max_level);
    Ok(())
}
