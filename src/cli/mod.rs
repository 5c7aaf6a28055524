// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the merx command-line interface.
//!
//! Three subcommands: `search` to query a catalog file, `inspect` to
//! summarize what the engine indexed, and `suggest` to explore the trade
//! vocabulary the engine expands behind the scenes.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "merx",
    about = "In-memory product catalog search for installation supplies",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display ranked results
    Search {
        /// Path to the catalog JSON file (an array of products)
        file: String,

        /// Search query: a code prefix ("1234") or keywords ("teava ppr 20")
        query: String,

        /// Maximum number of keyword results
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Maximum number of code-prefix results
        #[arg(long, default_value = "5")]
        code_limit: usize,

        /// Restrict keyword results to this category (exact name)
        #[arg(short, long)]
        category: Option<String>,

        /// Emit results as JSON instead of the table view
        #[arg(long)]
        json: bool,
    },

    /// Summarize an indexed catalog: counts, vocabulary size, categories
    Inspect {
        /// Path to the catalog JSON file
        file: String,
    },

    /// Show the expansions of a term, or the common-term glossary
    Suggest {
        /// Term to expand (omit to print the glossary)
        term: Option<String>,
    },
}
