//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Polynomial calculator: arithmetic over Z_p, factor rings F[x]/(f), irreducibility checks
///
/// Polynomials are given either as coefficient lists, constant term first
/// ("2 0 1" or "2,0,1"), or as expressions ("x^2 + 2").
#[derive(Parser, Debug)]
#[command(name = "polycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Prime P of the coefficient field Z_P (default: from config)
    #[arg(short, long, global = true, env = "POLYCALC_PRIME")]
    pub prime: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Polynomial arithmetic over Z_P
    Poly {
        #[command(subcommand)]
        command: PolyCommands,
    },

    /// Arithmetic in the factor ring Z_P[x]/(f)
    Ring {
        /// Irreducible modulus f(x)
        #[arg(short, long, allow_hyphen_values = true)]
        modulus: String,

        #[command(subcommand)]
        command: RingCommands,
    },

    /// Interactive factor ring session
    Interactive,

    /// Documentation navigation tree
    Docs {
        #[command(subcommand)]
        command: DocsCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum PolyCommands {
    /// A + B
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A - B
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A * B
    Mul {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Quotient and remainder of A / B
    Divmod {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A^N
    Pow {
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Non-negative exponent
        n: u32,
    },
    /// Value of A at x
    Eval {
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Point to evaluate at
        #[arg(allow_hyphen_values = true)]
        x: i64,
    },
    /// Monic greatest common divisor of A and B
    Gcd {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Check whether A is irreducible over Z_P
    Irreducible {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RingCommands {
    /// A + B
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A - B
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A * B
    Mul {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// A / B
    Div {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Inverse of A
    Inv {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
    /// A^N
    Pow {
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Non-negative exponent
        n: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocsCommands {
    /// Show the navigation tree
    Tree {
        /// Navigation script (default: config or built-in tree)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
    /// Check a navigation script for well-formedness
    Check {
        /// Navigation script
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Write the navigation tree as a viewer script
    Export {
        /// Output file (default: stdout)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config template
    Template,
    /// Show config file locations
    Path,
}
