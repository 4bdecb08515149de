// Entrypoint for the CLI application.
// - With arguments: classify them once as a single tweet and exit.
// - Without: run the interactive form until the user exits.

use tweet_sentiment::{api::ApiClient, ui};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Endpoint comes from `TF_SERVING_URL` / `SENTIMENT_MODEL`, defaulting
    // to the local TF Serving instance.
    let api = ApiClient::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        ui::main_menu(&api)?;
    } else {
        let verdict = ui::analyze(&api, &args.join(" "))?;
        println!("{}", verdict);
    }
    Ok(())
}
