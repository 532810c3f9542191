use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn ollama_mock(model: &str) -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/version");
        then.status(200).json_body(serde_json::json!({"version": "0.5.7"}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .json_body_partial(format!(r#"{{"model": "{}", "stream": false}}"#, model));
        then.status(200).json_body(serde_json::json!({"response": "DAY 1: Ubud"}));
    });
    server
}

#[test]
fn binary_exits_with_1_when_server_is_down() {
    Command::cargo_bin("bali-itinerary")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["--host", "http://127.0.0.1:1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Cannot connect to Ollama server at http://127.0.0.1:1",
        ))
        .stdout(predicate::str::contains("BALI TWO-DAY ITINERARY GENERATOR").not());
}

#[test]
fn help_mentions_host_option() {
    Command::cargo_bin("bali-itinerary")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--host"));
}

#[test]
fn piped_answers_are_read_line_by_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trip.txt");
    let server = ollama_mock("mistral");

    let input = format!("adventure\ntemples\nUbud\nbudget\nnone\nmistral\ny\n{}\n", path.display());
    Command::cargo_bin("bali-itinerary")
        .unwrap()
        .args(["--host", &server.base_url()])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("using the mistral model..."))
        .stdout(predicate::str::contains("DAY 1: Ubud"))
        .stdout(predicate::str::contains(format!("Itinerary saved to {}", path.display())));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        saved,
        "===== YOUR PERSONALIZED BALI ITINERARY =====\n\n\
         Travel Style: adventure\n\
         Main Interests: temples\n\
         Accommodation: Ubud\n\
         Budget Level: budget\n\
         Special Requests: none\n\n\
         DAY 1: Ubud"
    );
}

#[test]
fn declined_save_leaves_working_directory_empty() {
    let dir = TempDir::new().unwrap();
    let server = ollama_mock("llama3.2:1b");

    Command::cargo_bin("bali-itinerary")
        .unwrap()
        .current_dir(dir.path())
        .args(["--host", &server.base_url()])
        .write_stdin("\n\n\n\n\n\nyes\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Itinerary saved to").not())
        .stdout(predicate::str::contains("Thank you for using the Bali Itinerary Generator!"));

    assert!(!dir.path().join("bali_itinerary.txt").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn accepted_save_defaults_to_bali_itinerary_txt() {
    let dir = TempDir::new().unwrap();
    let server = ollama_mock("llama3.2:1b");

    Command::cargo_bin("bali-itinerary")
        .unwrap()
        .current_dir(dir.path())
        .args(["--host", &server.base_url()])
        .write_stdin("\n\n\n\n\n\ny\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Itinerary saved to bali_itinerary.txt"));

    let saved = std::fs::read_to_string(dir.path().join("bali_itinerary.txt")).unwrap();
    assert!(saved.ends_with("Special Requests: \n\nDAY 1: Ubud"));
}
