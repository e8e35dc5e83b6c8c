use std::{borrow::Cow, sync::Arc};

use crate::config::Config;

const SPINNER_TEMPLATE: &str = "{prefix}{spinner:.green} {human_pos} directories {wide_msg}";

pub struct ProgressBar {
    inner: indicatif::ProgressBar,
}

#[derive(Debug)]
pub struct ProgressBarManager {
    root: indicatif::MultiProgress,
}

impl ProgressBar {
    fn new_spinner() -> Self {
        let style = indicatif::ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner());
        let inner = indicatif::ProgressBar::new_spinner().with_style(style);
        Self { inner }
    }

    pub fn set_message(&self, msg: impl Into<Cow<'static, str>>) {
        self.inner.set_message(msg);
    }

    pub fn inc(&self, n: u64) {
        self.inner.inc(n);
    }

    pub fn finish(&self) {
        self.inner.finish_and_clear();
    }
}

impl ProgressBarManager {
    pub fn new(config: &Config) -> Self {
        let root = if config.progress() {
            indicatif::MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::stderr())
        } else {
            indicatif::MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden())
        };
        Self { root }
    }

    pub fn add_root(&self) -> Arc<ProgressBar> {
        let bar = Arc::new(ProgressBar::new_spinner());
        self.root.add(bar.inner.clone());
        bar
    }

    /// Print a line to stdout without tearing any visible bar.
    pub fn println(&self, line: impl AsRef<str>) {
        self.root.suspend(|| println!("{}", line.as_ref()));
    }
}
