use config::Config;
use dictionary::{Dictionary, LookupSource};
use lookup_widget::{LookupWidget, Storage};
use utilities::{init_tracing, input};

mod config;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;
    let config = Config::new();

    let storage = Storage::initialize(&config.database_url).await?;
    let dict = match config.endpoint {
        Some(endpoint) => Dictionary::with_endpoint(endpoint),
        None => Dictionary::new(),
    };
    tracing::info!(endpoint = dict.endpoint(), "dictionary ready");

    let widget = LookupWidget::initialize(dict, storage).await?;
    let last = widget.input_value();
    if !last.is_empty() {
        println!("Last word: {last}. Type `define` to look it up again.");
    }

    while let Some(line) = input(">> ")? {
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "find" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    define_word(&widget, &word).await?;
                }
                "html" => {
                    println!("{}", widget.document().to_html());
                }
                "forget" => {
                    if widget.forget_last_word().await? {
                        println!("Forgot the last word.");
                    } else {
                        println!("No word is saved.");
                    }
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

/// Commits `word` to the input when one is given, then submits whatever the
/// input holds.
async fn define_word<S: LookupSource>(widget: &LookupWidget<S>, word: &str) -> anyhow::Result<()> {
    if !word.is_empty() {
        widget.change_input(word).await?;
    } else if widget.input_value().trim().is_empty() {
        println!("Which word? Try `define <word>`.");
        return Ok(());
    }
    widget.submit().await;
    print!("{}", widget.results().to_text());
    Ok(())
}
