//! # Commands
//!
//! One handler per subcommand. Each reads its input, runs the matching
//! stockroom-core operation and returns a [`Report`].
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stockroom product --input form.json                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  open_input() ── file or stdin                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  execute() ── serde_json::from_reader::<ProductInput>                  │
//! │       │        validate_product()                                       │
//! │       ▼                                                                 │
//! │  Report { valid: false, body: {"price": "Giá sản phẩm ..."} }           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write_report() ── stdout, exit code 1                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Subcommand;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use stockroom_core::search::filter_products;
use stockroom_core::types::{ProductDraft, ProductDto, ProductInput, RegistrationInput};
use stockroom_core::validation::{
    validate_login_form, validate_password, validate_product, validate_product_payload,
    validate_registration, validate_username, Verdict,
};
use stockroom_core::{format_price, ProductPayload};

use crate::config::OutputStyle;
use crate::error::CliResult;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a username/password pair with the login form rules
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Check a username/password pair with the strength rules
    Credentials {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Check a registration form
    Register {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Validate a product form (JSON object)
    Product {
        /// JSON file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Check and normalise a product payload before submission (JSON object)
    Payload {
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Filter a product list (JSON array) by name
    Search {
        #[arg(long, default_value = "")]
        term: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Credentials { .. } => "credentials",
            Command::Register { .. } => "register",
            Command::Product { .. } => "product",
            Command::Payload { .. } => "payload",
            Command::Search { .. } => "search",
        }
    }

    /// Path of the JSON input, for commands that read one.
    pub fn input_path(&self) -> Option<&Path> {
        match self {
            Command::Product { input } | Command::Payload { input } | Command::Search { input, .. } => {
                input.as_deref()
            }
            _ => None,
        }
    }
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// False when the input failed validation.
    pub valid: bool,
    pub body: Value,
}

impl Report {
    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        if self.valid {
            0
        } else {
            1
        }
    }
}

/// Opens the input file, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> CliResult<Box<dyn Read>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading input file");
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Runs a command against its input.
///
/// Commands that take flags only never touch `input`.
pub fn execute<R: Read>(command: &Command, input: R) -> CliResult<Report> {
    let start = Instant::now();

    let report = match command {
        Command::Login { username, password } => {
            let result = validate_login_form(username, password);
            Report {
                valid: result.is_valid(),
                body: serde_json::to_value(&result)?,
            }
        }

        Command::Credentials { username, password } => {
            let username_error = validate_username(username).err();
            let password_error = validate_password(password).err();
            Report {
                valid: username_error.is_none() && password_error.is_none(),
                body: json!({
                    "usernameError": username_error,
                    "passwordError": password_error,
                }),
            }
        }

        Command::Register {
            username,
            password,
            confirm,
        } => {
            let form = RegistrationInput {
                username: username.clone(),
                password: password.clone(),
                confirm_password: confirm.clone(),
            };
            let verdict = Verdict::from(validate_registration(&form));
            Report {
                valid: verdict.valid,
                body: serde_json::to_value(&verdict)?,
            }
        }

        Command::Product { .. } => {
            let product: ProductInput = serde_json::from_reader(input)?;
            let errors = validate_product(&product);
            Report {
                valid: errors.is_empty(),
                body: serde_json::to_value(&errors)?,
            }
        }

        Command::Payload { .. } => {
            let draft: ProductDraft = serde_json::from_reader(input)?;
            let verdict = Verdict::from(validate_product_payload(&draft));
            let payload = verdict.valid.then(|| ProductPayload::from_draft(&draft));
            Report {
                valid: verdict.valid,
                body: json!({ "verdict": verdict, "payload": payload }),
            }
        }

        Command::Search { term, .. } => {
            let products: Vec<ProductDto> = serde_json::from_reader(input)?;
            let matches: Vec<Value> = filter_products(&products, term)
                .into_iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "name": p.name,
                        "price": format_price(p.price),
                        "stockQuantity": p.stock_quantity,
                    })
                })
                .collect();
            info!(total = products.len(), matched = matches.len(), term = %term, "search complete");
            Report {
                valid: true,
                body: Value::Array(matches),
            }
        }
    };

    info!(
        command = command.name(),
        valid = report.valid,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "command complete"
    );

    Ok(report)
}

/// Writes the report body as JSON followed by a newline.
pub fn write_report<W: Write>(report: &Report, mut out: W, style: OutputStyle) -> CliResult<()> {
    match style {
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut out, &report.body)?,
        OutputStyle::Compact => serde_json::to_writer(&mut out, &report.body)?,
    }
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
