use clap::Parser;
use news_pulse::config::cli::prompt_line;
use news_pulse::utils::{logger, validation::validate_non_empty_string};
use news_pulse::{
    render_report, AnthropicAssistant, CliConfig, Credentials, GoogleSearchClient, PulseError,
    Workflow, WorkflowOptions, YahooStatsClient,
};
use std::io::{self, BufRead, Write};

fn fail(e: &PulseError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

/// Flag value if given, otherwise ask on stdin.
fn input_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> news_pulse::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => prompt_line(reader, writer, message),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let settings = cli.settings().unwrap_or_else(|e| fail(&e));
    let credentials = Credentials::load(&cli.env_file).unwrap_or_else(|e| fail(&e));
    tracing::debug!("Credentials: {:?}", credentials);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let company = input_or_prompt(
        cli.company.clone(),
        &mut reader,
        &mut stdout,
        "Enter the company name or ticker symbol (for stats): ",
    )?;
    let company = company.trim().to_string();
    if let Err(e) = validate_non_empty_string("company", &company) {
        fail(&e);
    }
    let query = input_or_prompt(
        cli.query.clone(),
        &mut reader,
        &mut stdout,
        "Enter a Google search query: ",
    )?;

    let source = GoogleSearchClient::new(&credentials, &settings.search);
    let assistant = AnthropicAssistant::new(&credentials, &settings.llm);
    let stats = YahooStatsClient::new(&settings.stats).unwrap_or_else(|e| fail(&e));

    let workflow = Workflow::new(
        source,
        assistant,
        stats,
        WorkflowOptions {
            results: settings.search.results,
            parse_mode: settings.rating.parse_mode,
        },
    );

    match workflow.run(&company, query.trim()).await {
        Ok(report) => {
            print!("{}", render_report(&report));
            tracing::info!("✅ Done");
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
