// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kata command-line interface.
//!
//! With no subcommand the binary runs the two-sum demo on `[2, 7, 11, 15]`
//! with target 9. `two-sum` and `search` run either algorithm on numbers
//! given on the command line.

pub mod display;

use clap::{Args, Parser, Subcommand};

/// Input used when no subcommand is given.
pub const DEMO_SEQUENCE: [i32; 4] = [2, 7, 11, 15];
pub const DEMO_TARGET: i32 = 9;

#[derive(Parser)]
#[command(
    name = "kata",
    about = "Binary search and two-sum on the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the first pair of positions whose values sum to TARGET
    #[command(name = "two-sum", allow_negative_numbers = true)]
    TwoSum(Input),

    /// Binary search a sorted sequence for TARGET, -1 if absent
    #[command(allow_negative_numbers = true)]
    Search {
        #[command(flatten)]
        input: Input,

        /// Reject the sequence if it is not sorted instead of searching anyway
        #[arg(long)]
        check_sorted: bool,
    },
}

#[derive(Args)]
pub struct Input {
    /// Value to look for
    #[arg(short, long)]
    pub target: i32,

    /// The sequence, as separate integers
    pub values: Vec<i32>,
}
