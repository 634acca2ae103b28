//! Command-line interface and input loading

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::bridge::InboundMessage;
use crate::dom::Document;
use crate::error::QaiaError;
use crate::qa::QaPair;

#[derive(Debug, Parser)]
#[command(name = "qaia", version)]
#[command(about = "Hover page text with a modifier held to see pre-computed answers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a page in the terminal viewer
    View {
        /// HTML file to view, or `-` for stdin
        page: PathBuf,

        /// QA pairs: a JSON array or a QAIA_RENDER message
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Config file to use instead of ~/.config/qaia/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat the page as a nested frame (extract only, no tooltip)
        #[arg(long)]
        nested: bool,
    },

    /// Print the QAIA_EXTRACT response for a page as JSON
    Extract {
        /// HTML file, or `-` for stdin
        page: PathBuf,

        /// Treat the page as a nested frame (raw visible text)
        #[arg(long)]
        nested: bool,
    },

    /// Print the answer the matcher picks for a piece of hovered text
    Match {
        /// QA pairs: a JSON array or a QAIA_RENDER message
        #[arg(short, long)]
        answers: PathBuf,

        /// Hovered text
        #[arg(short, long)]
        text: String,

        /// Config file to use instead of ~/.config/qaia/config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn read_input(path: &Path) -> Result<String, QaiaError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

/// Load an HTML page; the URL is the file path, or `stdin:` for `-`
pub fn load_page(path: &Path, nested: bool) -> Result<Document, QaiaError> {
    let html = read_input(path)?;
    let url = if path.as_os_str() == "-" {
        "stdin:".to_string()
    } else {
        format!("file://{}", path.display())
    };

    let mut doc = Document::parse_html(&html, &url);
    doc.set_top_level(!nested);
    Ok(doc)
}

pub fn load_answers(path: &Path) -> Result<Vec<QaPair>, QaiaError> {
    parse_answers(&read_input(path)?)
}

/// QA pairs from a bare JSON array or a full `QAIA_RENDER` message
pub fn parse_answers(json: &str) -> Result<Vec<QaPair>, QaiaError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| QaiaError::InvalidAnswers(e.to_string()))?;

    if value.is_array() {
        let message = serde_json::json!({ "type": "QAIA_RENDER", "answers": value });
        return render_answers(message);
    }

    render_answers(value)
}

fn render_answers(value: Value) -> Result<Vec<QaPair>, QaiaError> {
    match serde_json::from_value::<InboundMessage>(value) {
        Ok(InboundMessage::Render { answers }) => Ok(answers),
        Ok(_) => Err(QaiaError::InvalidAnswers(
            "expected a QAIA_RENDER message".to_string(),
        )),
        Err(e) => Err(QaiaError::InvalidAnswers(e.to_string())),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
