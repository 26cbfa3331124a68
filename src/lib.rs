// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to drive a locally running VoiceOver
// control server over its REST API.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the VoiceOver server (one
//   method per REST endpoint) and normalizes every reply into a uniform
//   response record.
// - `scenario`: Scripted accessibility walkthrough and the Copilot
//   conversation demo, printing progress for a human observer.
// - `ui`: Terminal menu that runs the scenarios or fires individual calls.
//
// Keeping this separation makes it possible to exercise the API logic and
// the walkthrough against a stubbed server without a terminal attached.
pub mod api;
pub mod scenario;
pub mod ui;
