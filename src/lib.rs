// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together to run one itinerary session.
//
// Module responsibilities:
// - `api`: Blocking HTTP client for the local Ollama generation service
//   (liveness probe and generate call).
// - `itinerary`: Preference set, prompt template and the saved-file format.
// - `ui`: The interactive session: prompts, printing and saving.
// - `config`, `logger`, `error`: command-line options, tracing setup and
//   typed errors for the service calls.
pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod logger;
pub mod ui;
