use std::process::{Command, Output};

use wiremock::MockServer;

/// Run the CLI binary against a mock server with isolated environment.
pub fn run_cli_with_server(args: &[&str], server_uri: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apricot"));
    cmd.args(args);
    cmd.env_remove("APRICOT_API_KEY");
    cmd.env_remove("APRICOT_CLIENT_SECRET");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.env("APRICOT_TOKEN_URL", format!("{}/auth/token", server_uri));
    cmd.env("APRICOT_API_BASE", format!("{}/v2.2", server_uri));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli(args: &[&str], server: &MockServer) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_server(&args, &uri)
    })
    .await
    .expect("CLI task panicked")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], server: &MockServer) -> String {
    let output = run_cli(args, server).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
