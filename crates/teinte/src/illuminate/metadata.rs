use std::{process::Termination, time::Instant};

use rustc_hash::FxHashMap;

use crate::color::Color;

/// Metadata returned by [`illuminate()`](crate::illuminate) for a single
/// decorated page.
///
/// Pages in which no labeled element was found do not appear in the output.
#[derive(Debug)]
pub struct PageOutput {
    pub file_path: String,
    /// Every label painted on this page, with its color.
    pub labels: FxHashMap<String, Color>,
}

/// Metadata returned by [`illuminate()`](crate::illuminate) after a
/// successful pass.
#[derive(Debug)]
pub struct IlluminateOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
}

impl IlluminateOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, file_path: String, labels: FxHashMap<String, Color>) {
        self.pages.push(PageOutput { file_path, labels });
    }

    /// Collects the labels of every decorated page into a single map.
    ///
    /// Useful to emit a legend of all the colors a site uses.
    pub fn labels(&self) -> FxHashMap<&str, Color> {
        self.pages
            .iter()
            .flat_map(|page| page.labels.iter())
            .map(|(label, color)| (label.as_str(), *color))
            .collect()
    }
}

impl Default for IlluminateOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for IlluminateOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
