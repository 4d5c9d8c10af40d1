//! Interactive command line front end for the recommendation pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use std::io::{self, BufRead, Write};

use infrajudge_backend::{
    generate_recommendation, generate_recommendation_string, logging, ErrorResponse,
};

#[derive(Parser, Debug)]
#[command(
    name = "infrajudge-cli",
    version,
    about = "Interactive AWS architecture recommendation"
)]
struct Cli {
    /// Application type, e.g. Startup, SaaS, Enterprise, ML.
    #[arg(long, value_name = "TYPE")]
    app_type: Option<String>,
    /// Budget level: Low, Medium or High.
    #[arg(long, value_name = "LEVEL")]
    budget: Option<String>,
    /// Expected number of users.
    #[arg(long, value_name = "COUNT")]
    expected_users: Option<String>,
    /// Traffic level: Low, Medium or High.
    #[arg(long, value_name = "LEVEL")]
    traffic: Option<String>,
    /// Security requirements: Low, Medium or High.
    #[arg(long, value_name = "LEVEL")]
    security_level: Option<String>,
    /// Workload type, e.g. API-based, Web App, ML, Data Processing.
    #[arg(long, value_name = "TYPE")]
    workload_type: Option<String>,
    /// Free-text project description.
    #[arg(long, value_name = "TEXT")]
    project_description: Option<String>,
    /// Never prompt; omitted fields take their defaults.
    #[arg(long)]
    no_prompt: bool,
    /// Print the structured result as JSON instead of markdown.
    #[arg(long)]
    json: bool,
}

struct Prompter<R> {
    input: R,
    enabled: bool,
}

impl<R: BufRead> Prompter<R> {
    /// Use the flag value if given, otherwise ask. Returns `None` for blank answers.
    fn field(&mut self, given: Option<String>, question: &str) -> Result<Option<String>> {
        if given.is_some() || !self.enabled {
            return Ok(given);
        }

        print!("{question}");
        io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        self.input.read_line(&mut line).context("read answer")?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(80));
    println!("{title}");
    println!("{}", "=".repeat(80));
}

fn main() -> Result<()> {
    logging::init_cli_logging();
    let cli = Cli::parse();

    if !cli.no_prompt {
        banner("InfraJudge - Interactive Architecture Recommendation");
        println!();
    }

    let stdin = io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
        enabled: !cli.no_prompt,
    };

    let questions = [
        ("appType", cli.app_type, "What type of application? (e.g., Startup, SaaS, Enterprise, ML): "),
        ("budget", cli.budget, "Budget level? (Low/Medium/High): "),
        ("expectedUsers", cli.expected_users, "Expected number of users? (e.g., 1000): "),
        ("traffic", cli.traffic, "Traffic level? (Low/Medium/High): "),
        ("securityLevel", cli.security_level, "Security requirements? (Low/Medium/High): "),
        ("workloadType", cli.workload_type, "Workload type? (e.g., API-based, Web App, ML, Data Processing): "),
        ("projectDescription", cli.project_description, "Project description? (optional, press Enter to skip): "),
    ];

    let mut raw = Map::new();
    for (key, given, question) in questions {
        if let Some(answer) = prompter.field(given, question)? {
            raw.insert(key.to_string(), Value::String(answer));
        }
    }
    let raw = Value::Object(raw);

    if !cli.no_prompt {
        println!();
        banner("Generating recommendation...");
        println!();
    }

    if cli.json {
        let rendered = match generate_recommendation(&raw) {
            Ok(output) => serde_json::to_string_pretty(&output),
            Err(err) => serde_json::to_string_pretty(&ErrorResponse::from(&err)),
        }
        .context("serialize result")?;
        println!("{rendered}");
    } else {
        println!("{}", generate_recommendation_string(&raw));
    }

    Ok(())
}
