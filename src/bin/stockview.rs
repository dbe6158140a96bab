use stockview::config::Config;
use stockview::models::tab::ActiveTab;
use stockview::{HttpStockApi, SearchOutcome, StockViewController};

use anyhow::Context;
use clap::{App, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

type Controller = StockViewController<HttpStockApi>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let app = App::new("stockview")
        .version("1.0.0")
        .about("Look up a ticker and render its outlook, summary and search history")
        .arg(
            Arg::with_name("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Backend serving /api/stock and /history")
                .takes_value(true)
                .default_value(stockview::config::DEFAULT_BASE_URL),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-request timeout")
                .takes_value(true)
                .default_value("30"),
        )
        .arg(
            Arg::with_name("no-proxy")
                .long("no-proxy")
                .help("Ignore proxy settings from the environment")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("clear-discards")
                .long("clear-discards")
                .help("Drop the loaded stock record when the page is cleared")
                .takes_value(false),
        );

    let app = app
        .subcommand(
            SubCommand::with_name("search")
                .about("Search a ticker and print the resulting tab")
                .arg(
                    Arg::with_name("ticker")
                        .short('t')
                        .long("ticker")
                        .value_name("TICKER")
                        .help("Stock ticker symbol")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("tab")
                        .long("tab")
                        .value_name("TAB")
                        .help("Tab to show after the search (outlook, summary, history)")
                        .takes_value(true),
                ),
        )
        .subcommand(SubCommand::with_name("history").about("Print recent searches"))
        .subcommand(
            SubCommand::with_name("shell")
                .about("Read commands from stdin: search <T>, tab <NAME>, clear, show, quit"),
        );

    let matches = app.get_matches();
    let config = build_config(&matches)?;
    let api = HttpStockApi::new(&config)?;
    info!("Using backend {}", api.base_url());
    let mut controller = StockViewController::new(api, config);

    if let Some(matches) = matches.subcommand_matches("search") {
        let ticker = matches.value_of("ticker").unwrap_or_default();
        let outcome = controller.submit_search(ticker).await;
        info!("Search for {:?} finished: {:?}", ticker, outcome);

        if let (SearchOutcome::Found, Some(tab)) = (outcome, matches.value_of("tab")) {
            controller.select_tab_named(tab).await?;
        }
        print_page(&controller);
    } else if matches.subcommand_matches("history").is_some() {
        controller.select_tab(ActiveTab::History).await;
        print_page(&controller);
    } else if matches.subcommand_matches("shell").is_some() {
        run_shell(&mut controller).await?;
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}

fn build_config(matches: &ArgMatches) -> anyhow::Result<Config> {
    let base_url = matches
        .value_of("base-url")
        .unwrap_or(stockview::config::DEFAULT_BASE_URL);
    let timeout = matches
        .value_of("timeout")
        .unwrap_or("30")
        .parse::<u64>()
        .context("--timeout must be a whole number of seconds")?;

    Ok(Config::new()
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(timeout))
        .with_system_proxy(!matches.is_present("no-proxy"))
        .with_clear_discards_record(matches.is_present("clear-discards")))
}

fn print_page(controller: &Controller) {
    println!("{}", controller.page().render_text(controller.active_tab()));
}

// 逐行读取命令，驱动同一个控制器
async fn run_shell(controller: &mut Controller) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "search" => {
                controller.submit_search(arg).await;
                print_page(controller);
            }
            "tab" => match controller.select_tab_named(arg).await {
                Ok(_) => print_page(controller),
                Err(e) => warn!("{}", e),
            },
            "clear" => {
                controller.clear();
                print_page(controller);
            }
            "show" => print_page(controller),
            "quit" | "exit" => break,
            other => warn!("Unknown command: {}", other),
        }
    }

    Ok(())
}
