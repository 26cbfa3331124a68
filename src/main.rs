// Entrypoint for the CLI application.
// - Keeps `main` small: create the server client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling for the prototype.

use voiceover_cli::{api::VoiceOverClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Create a client configured by environment variable `VOICEOVER_SERVER_URL`
    // or default to http://localhost:3000. See `api::VoiceOverClient::from_env`.
    let client = VoiceOverClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(client)?;
    Ok(())
}
