use std::{fs, time::Instant};

use colored::{ColoredString, Colorize};
use glob::glob;
use log::{info, trace, warn};
use rayon::prelude::*;

use crate::decorate::decorate_html;
use crate::errors::DecorateError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title};

pub mod metadata;
pub mod options;

use metadata::{IlluminateOutput, PageOutput};
use options::IlluminateOptions;

pub fn execute_pass(
    options: &IlluminateOptions,
) -> Result<IlluminateOutput, Box<dyn std::error::Error>> {
    let pass_start = Instant::now();
    let mut pass_metadata = IlluminateOutput::new(pass_start);

    info!(target: "illuminate", "Output directory: {}", options.output_dir.display());

    print_title("decorating pages");

    let page_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let pattern = options.output_dir.join("**/*.html");
    trace!(target: "illuminate", "Looking for pages matching {}", pattern.display());

    let paths: Vec<_> = glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(target: "illuminate", "Skipping unreadable path: {}", e);
                None
            }
        })
        .collect();

    let page_count = paths.len();

    // Pages are disjoint files, decorate them in parallel
    let decorated_pages = paths
        .par_iter()
        .map(|path| {
            let page_start = Instant::now();

            let html = fs::read_to_string(path).map_err(|source| DecorateError::ReadFailed {
                path: path.clone(),
                source,
            })?;

            let decorated = decorate_html(&html, &options.pattern_attribute)?;

            // Nothing matched, leave the file as-is
            if decorated.labels.is_empty() {
                return Ok(None);
            }

            fs::write(path, &decorated.html).map_err(|source| DecorateError::WriteFailed {
                path: path.clone(),
                source,
            })?;

            info!(
                target: "pages",
                "{} {} {}",
                path.to_string_lossy().dimmed(),
                format!("{} labels", decorated.label_count()),
                format_elapsed_time(page_start.elapsed(), &page_format_options)
            );

            Ok(Some((
                path.to_string_lossy().to_string(),
                decorated.labels,
            )))
        })
        .collect::<Result<Vec<_>, DecorateError>>()?;

    for (file_path, labels) in decorated_pages.into_iter().flatten() {
        pass_metadata.add_page(file_path, labels);
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(
        target: "illuminate",
        "{}",
        format!(
            "decorated {} of {} pages in {}",
            pass_metadata.pages.len(),
            page_count,
            format_elapsed_time(pass_start.elapsed(), &FormatElapsedTimeOptions::section())
        )
        .bold()
    );

    Ok(pass_metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::path::Path;

    fn write_page(dir: &Path, name: &str, html: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, html).unwrap();
        path
    }

    #[test]
    fn decorates_pages_in_place() {
        let dir = tempfile::tempdir().unwrap();

        let tagged = write_page(
            dir.path(),
            "index.html",
            "<ul><li data-pattern=\"posts\">Posts</li></ul>",
        );
        let nested = write_page(
            dir.path(),
            "blog/2026/entry.html",
            "<span data-pattern=\"rust\">Rust</span>",
        );
        let plain = write_page(dir.path(), "about.html", "<p>No labels here.</p>");
        let not_html = write_page(dir.path(), "feed.xml", "<feed data-pattern=\"posts\"/>");

        let output = execute_pass(&IlluminateOptions {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .expect("pass should succeed");

        assert_eq!(output.pages.len(), 2);

        let index = fs::read_to_string(&tagged).unwrap();
        assert!(index.contains("background-color: #d37b5e"));

        let entry = fs::read_to_string(&nested).unwrap();
        assert!(entry.contains("background-color: #e49735"));

        assert_eq!(fs::read_to_string(&plain).unwrap(), "<p>No labels here.</p>");
        assert_eq!(
            fs::read_to_string(&not_html).unwrap(),
            "<feed data-pattern=\"posts\"/>"
        );

        let labels = output.labels();
        assert_eq!(labels.get("posts"), Some(&Color::from_label("posts")));
        assert_eq!(labels.get("rust"), Some(&Color::from_label("rust")));
    }

    #[test]
    fn respects_a_custom_attribute() {
        let dir = tempfile::tempdir().unwrap();

        let page = write_page(
            dir.path(),
            "index.html",
            "<li data-tag=\"a\">a</li><li data-pattern=\"b\">b</li>",
        );

        execute_pass(&IlluminateOptions {
            output_dir: dir.path().to_path_buf(),
            pattern_attribute: "data-tag".into(),
        })
        .expect("pass should succeed");

        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains("data-tag=\"a\" style=\"background-color: #610000\""));
        assert!(!html.contains("data-pattern=\"b\" style"));
    }

    #[test]
    fn empty_output_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let output = execute_pass(&IlluminateOptions {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .expect("pass should succeed");

        assert!(output.pages.is_empty());
        assert!(output.labels().is_empty());
    }
}
