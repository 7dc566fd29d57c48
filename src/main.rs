//! formatgrab - list the formats of a video page and download one of them
//!
//! Talks to a format backend exposing `/get_formats`, `/get_direct_url`
//! and `/health`, and hands the resolved link to the system browser.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use formatgrab::utils::format::{format_file_size, format_number};
use formatgrab::view::clipboard;
use formatgrab::{ClientSettings, Completion, Controller, HttpBackend, Session, SystemLauncher};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Backend base URL (overrides FORMATGRAB_BACKEND_URL and the settings file)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available formats of a video
    Formats {
        /// Video page URL
        url: Option<String>,

        /// Read the URL from the clipboard
        #[arg(long, conflicts_with = "url")]
        paste: bool,

        /// Also write the rendered page to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Resolve one format and open it in the browser
    Download {
        /// Video page URL
        url: Option<String>,

        /// Read the URL from the clipboard
        #[arg(long, conflicts_with = "url")]
        paste: bool,

        /// Format id as printed by `formats`
        #[arg(long, short)]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = ClientSettings::resolve(args.backend.as_deref())?;
    let backend = HttpBackend::new(&settings)?;
    let controller = Controller::new(Arc::new(backend), Arc::new(SystemLauncher), settings);

    controller.init().await;

    match args.command {
        Command::Formats { url, paste, html } => {
            let session = list_formats(&controller, url, paste).await?;
            if let Some(session) = &session {
                print_formats(session);
            }
            if let Some(path) = html {
                std::fs::write(&path, controller.render().await)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Page written to {}", path.display());
            }
            if session.is_none() {
                std::process::exit(1);
            }
        }
        Command::Download { url, paste, format } => {
            let Some(session) = list_formats(&controller, url, paste).await? else {
                std::process::exit(1);
            };

            let mut controls = session.controls();
            let Some(control) = controls.iter_mut().find(|c| c.format_id == format) else {
                bail!(
                    "Format '{}' is not listed for this video; run `formatgrab formats` first",
                    format
                );
            };

            match controller.fetch_direct_url(&session, control).await {
                Ok(Completion::Applied(download)) => {
                    println!("Download started: {} ({})", download.filename, download.video_url)
                }
                Ok(Completion::Superseded) => {}
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Feed the URL through the input field and submit it, like a user would
async fn list_formats(
    controller: &Controller,
    url: Option<String>,
    paste: bool,
) -> Result<Option<Arc<Session>>> {
    let url = match (url, paste) {
        (Some(url), _) => url,
        (None, true) => clipboard::get_clipboard_content()?,
        (None, false) => bail!("Provide a video URL or use --paste"),
    };

    if paste {
        controller.pasted(&url).await;
    } else {
        controller.input_changed(&url).await;
    }

    println!("Fetching formats...");
    match controller.submit().await {
        Ok(completion) => Ok(completion.applied()),
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(None)
        }
    }
}

fn print_formats(session: &Session) {
    let metadata = session.metadata();
    println!("Title: {}", metadata.title);
    if let Some(uploader) = &metadata.uploader {
        println!("Uploader: {}", uploader);
    }
    if let Some(duration) = &metadata.duration {
        println!("Duration: {}", duration);
    }
    if let Some(views) = metadata.view_count {
        println!("Views: {}", format_number(views));
    }

    if metadata.formats.is_empty() {
        println!("No formats available for this video.");
        return;
    }

    println!("{:<12} {:<24} {:<6} {}", "ID", "QUALITY", "EXT", "SIZE");
    for format in &metadata.formats {
        println!(
            "{:<12} {:<24} {:<6} {}",
            format.format_id,
            format.quality_label(),
            format.ext,
            format_file_size(format.filesize.unwrap_or(0))
        );
    }
}
