// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::{VoiceOverClient, VoiceOverResponse};
use crate::scenario::{run_copilot_demo, run_walkthrough};
use anyhow::Result;
use dialoguer::{Input, Select};

/// Main interactive menu. Receives a `VoiceOverClient` instance and runs a
/// simple select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(client: VoiceOverClient) -> Result<()> {
    loop {
        let items = vec![
            "Run accessibility walkthrough",
            "Run Copilot conversation demo",
            "Start VoiceOver",
            "Stop VoiceOver",
            "Read current item",
            "Navigate next",
            "Navigate previous",
            "Activate current item",
            "Type text",
            "Press key",
            "Open application",
            "Ask Copilot",
            "Exit",
        ];
        // `Select` shows a keyboard-navigable list in the terminal.
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => run_walkthrough(&client),
            1 => run_copilot_demo(&client),
            2 => report_outcome(client.start_voiceover(), "VoiceOver started"),
            3 => report_outcome(client.stop_voiceover(), "VoiceOver stopped"),
            4 => handle_current_item(&client),
            5 => report_outcome(client.navigate_next(), "Moved to next element"),
            6 => report_outcome(client.navigate_previous(), "Moved to previous element"),
            7 => report_outcome(client.click_current(), "Current item activated"),
            8 => handle_type_text(&client)?,
            9 => handle_press_key(&client)?,
            10 => handle_open_app(&client)?,
            11 => handle_ask_copilot(&client)?,
            12 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Print a one-line outcome for calls that carry nothing back but success.
fn report_outcome(resp: VoiceOverResponse, success_line: &str) {
    if resp.success {
        println!("{}", success_line);
    } else {
        println!(
            "Request failed: {}",
            resp.error.unwrap_or_else(|| "no error reported".into())
        );
    }
}

fn handle_current_item(client: &VoiceOverClient) {
    let resp = client.current_item();
    if resp.success {
        println!(
            "Current item: {}",
            resp.current_item.unwrap_or_else(|| "No current item".into())
        );
    } else {
        println!(
            "Could not read the current item: {}",
            resp.error.unwrap_or_default()
        );
    }
}

/// Collect a line of text and have the reader type it.
fn handle_type_text(client: &VoiceOverClient) -> Result<()> {
    let text: String = Input::new().with_prompt("Text to type").interact_text()?;
    report_outcome(client.type_text(&text), "Text typed");
    Ok(())
}

fn handle_press_key(client: &VoiceOverClient) -> Result<()> {
    let key: String = Input::new().with_prompt("Key to press").interact_text()?;
    report_outcome(client.press_key(&key), "Key pressed");
    Ok(())
}

fn handle_open_app(client: &VoiceOverClient) -> Result<()> {
    let app_name: String = Input::new().with_prompt("Application name").interact_text()?;
    report_outcome(client.open_app(&app_name), "Application opened");
    Ok(())
}

/// Prompt for a message, send it through the combined Copilot operation and
/// print any response lines that came back.
fn handle_ask_copilot(client: &VoiceOverClient) -> Result<()> {
    let message: String = Input::new().with_prompt("Message for Copilot").interact_text()?;
    let resp = client.open_copilot_and_send_message(&message);
    if resp.success {
        match resp.responses {
            Some(responses) if !responses.is_empty() => {
                println!("Responses:");
                for (i, response) in responses.iter().enumerate() {
                    println!("  {}. {}", i + 1, response);
                }
            }
            _ => println!("Message sent; no responses came back"),
        }
    } else {
        println!(
            "Failed to send message: {}",
            resp.error.unwrap_or_default()
        );
    }
    Ok(())
}
