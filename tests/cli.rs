//! CLI integration tests
//! Run with: cargo test --test cli

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};
use std::thread;

/// Base URL of a port nothing listens on
fn unreachable_base_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn youareell(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_youareell"))
        .args(args)
        .output()
        .expect("run youareell")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_no_command_fails() {
    let output = youareell(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Error: [UnknownCommand] no command specified"));
}

#[test]
fn test_unknown_command_names_verb() {
    let base = unreachable_base_url();
    let output = youareell(&["--base-url", base.as_str(), "shout", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Error: [UnknownCommand] unknown command: shout"));
}

#[test]
fn test_argument_count_checked_before_network() {
    // Any request would fail with a NetworkError instead
    let base = unreachable_base_url();
    let output = youareell(&["--base-url", base.as_str(), "send", "ada"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout_of(&output).contains("Error: [ArgumentCount] send: expected 2 or 4 args; got 1"),
        "{}",
        stdout_of(&output)
    );
}

#[test]
fn test_malformed_send_keyword() {
    let base = unreachable_base_url();
    let output = youareell(&["--base-url", base.as_str(), "send", "ada", "hi", "at", "grace"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Error: [MalformedArguments] malformed arguments: expected 'to'; got at"));
}

#[test]
fn test_help_succeeds() {
    let output = youareell(&["help"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("You may run any of these commands:"));
}

#[test]
fn test_network_failure_exits_nonzero() {
    let base = unreachable_base_url();
    let output = youareell(&["--base-url", base.as_str(), "messages"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Error: [NetworkError]"), "{}", stdout_of(&output));
}

#[test]
fn test_print_config_applies_overrides() {
    let output = youareell(&["--print-config", "--base-url", "http://localhost:9999", "--poll-interval-ms", "250"]);
    assert!(output.status.success());
    let printed = stdout_of(&output);
    assert!(printed.contains("base-url: http://localhost:9999"), "{}", printed);
    assert!(printed.contains("poll-interval-ms: 250"), "{}", printed);
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let output = youareell(&["--base-url", "zipcode.rocks", "ids"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Error: [ConfigError]"));
}

#[test]
fn test_interactive_continues_after_errors() {
    let base = unreachable_base_url();
    let mut child = Command::new(env!("CARGO_BIN_EXE_youareell"))
        .args(["--interactive", "--base-url", base.as_str()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn youareell");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"\nshout\nsend ada\nhelp\nexit\nhelp\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    let printed = stdout_of(&output);
    assert!(printed.contains("Error: [UnknownCommand] unknown command: shout"), "{}", printed);
    assert!(printed.contains("Error: [ArgumentCount]"), "{}", printed);
    assert_eq!(printed.matches("You may run any of these commands:").count(), 1, "{}", printed);
}

/// Read the request head plus a `Content-Length` body
fn read_request(stream: &mut impl Read) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).expect("read request");
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&request);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let body_len = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if request.len() >= head_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&request).to_string()
}

/// Answer one request with `status_line` and `body`; yields the base URL and
/// a handle returning the raw request
fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).expect("write response");
        request
    });
    (format!("http://127.0.0.1:{}", port), server)
}

#[test]
fn test_messages_against_server() {
    let body = r#"[{"Timestamp":"2024-05-01T12:00:00Z","Sequence":"s2","FromID":"ada","ToID":"","Message":"hello world"}]"#;
    let (base, server) = serve_once("200 OK", body);
    let output = youareell(&["--base-url", base.as_str(), "messages", "ada"]);
    let request = server.join().expect("server thread");

    assert!(output.status.success(), "{}", stdout_of(&output));
    assert!(request.starts_with("GET /ids/ada/messages HTTP/1.1"), "{}", request);
    assert_eq!(
        stdout_of(&output),
        "Message: 2024-05-01T12:00:00Z s2 ada -> *: hello world\n"
    );
}

#[test]
fn test_verbose_echoes_request_and_response() {
    let (base, server) = serve_once("200 OK", "[]");
    let output = youareell(&["--verbose", "--base-url", base.as_str(), "messages"]);
    server.join().expect("server thread");

    assert!(output.status.success(), "{}", stdout_of(&output));
    let printed = stdout_of(&output);
    assert!(printed.contains(&format!("[GET {}/messages]", base)), "{}", printed);
    assert!(printed.contains("[Status: 200]"), "{}", printed);
    assert!(printed.contains("[Output: []]"), "{}", printed);
    assert!(!printed.contains('\x1b'), "piped output carries ANSI codes: {:?}", printed);
}

#[test]
fn test_verbose_echoes_request_body() {
    let echo = r#"{"Timestamp":"t","Sequence":"s1","FromID":"ada","Message":"hi"}"#;
    let (base, server) = serve_once("200 OK", echo);
    let output = youareell(&["--verbose", "--base-url", base.as_str(), "send", "ada", "hi"]);
    server.join().expect("server thread");

    assert!(output.status.success(), "{}", stdout_of(&output));
    let printed = stdout_of(&output);
    assert!(printed.contains(&format!("[POST {}/ids/ada/messages]", base)), "{}", printed);
    assert!(printed.contains(r#"[Body: {"Timestamp":""#), "{}", printed);
    assert!(printed.contains("Message: t s1 ada -> *: hi"), "{}", printed);
}

#[test]
fn test_error_body_shown_only_when_verbose() {
    let (base, server) = serve_once("404 Not Found", r#"{"error":"no such feed"}"#);
    let output = youareell(&["--base-url", base.as_str(), "messages", "ghost"]);
    server.join().expect("server thread");

    assert_eq!(output.status.code(), Some(1));
    let printed = stdout_of(&output);
    assert!(printed.contains("Error: [HttpStatus] http status: 404"), "{}", printed);
    assert!(!printed.contains("no such feed"), "{}", printed);

    let (base, server) = serve_once("404 Not Found", r#"{"error":"no such feed"}"#);
    let output = youareell(&["--verbose", "--base-url", base.as_str(), "messages", "ghost"]);
    server.join().expect("server thread");

    assert_eq!(output.status.code(), Some(1));
    let printed = stdout_of(&output);
    assert!(printed.contains("[Status: 404]"), "{}", printed);
    assert!(printed.contains(r#"[Output: {"error":"no such feed"}]"#), "{}", printed);
    assert!(printed.contains("Error: [HttpStatus] http status: 404"), "{}", printed);
}
