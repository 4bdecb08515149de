// UI layer: a terminal take on the original single-page form. One text
// input, one output line, re-run on every interaction.

use crate::api::ApiClient;
use crate::sentiment::render_verdict;
use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const HEADING: &str = "Análisis de sentimientos de Tweets";

/// Print the page heading and the short description of the backend.
pub fn print_header(api: &ApiClient) {
    println!("{}", HEADING);
    println!();
    println!(
        "Obtén los análisis de sentimientos de tweets. Esta interfaz usa el servicio de \
         TensorFlow Serving como backend, realizando peticiones POST a {}.",
        api.endpoint()
    );
    println!();
}

/// Main interactive menu. Loops until the user picks "Salir".
pub fn main_menu(api: &ApiClient) -> Result<()> {
    print_header(api);
    let items = ["Analizar tweet", "Salir"];
    loop {
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                let text: String = Input::new()
                    .with_prompt("Tweet a analizar")
                    .allow_empty(true)
                    .interact_text()?;
                // A failed request leaves the output empty; no label is guessed.
                match analyze(api, &text) {
                    Ok(verdict) => println!("{}", verdict),
                    Err(e) => println!("Error al analizar el tweet: {:#}", e),
                }
            }
            _ => break,
        }
    }
    Ok(())
}

/// Classify `text` behind a spinner and return the line to display.
pub fn analyze(api: &ApiClient, text: &str) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Analizando...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = api.classify(text);
    spinner.finish_and_clear();

    let prediction = result.context("Inference request failed")?;
    Ok(render_verdict(&prediction))
}
