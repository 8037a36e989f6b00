// tests/common/mod.rs
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::num::NonZeroU32;
use std::thread::{self, JoinHandle};

use trivia_export::{
    error::FetchError,
    fetch::QuestionSource,
    question::{Question, RawQuestion},
};

/// Serve exactly one HTTP response on a loopback port.
/// The handle yields the request line the client sent.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 { break; }
            buf.extend_from_slice(&chunk[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&buf).lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{addr}/api.php"), handle)
}

/// In-memory source: hands back a fixed batch, or fails with `NoResults`.
pub struct FixedSource(pub Vec<RawQuestion>);

impl QuestionSource for FixedSource {
    fn fetch(&self, _count: NonZeroU32) -> Result<Vec<RawQuestion>, FetchError> {
        if self.0.is_empty() {
            return Err(FetchError::NoResults);
        }
        Ok(self.0.clone())
    }
}

pub fn raw(question: &str, difficulty: &str, wrong: &[&str]) -> RawQuestion {
    RawQuestion {
        question: question.to_string(),
        category: "General Knowledge".to_string(),
        difficulty: difficulty.to_string(),
        correct_answer: "4".to_string(),
        incorrect_answers: wrong.iter().map(|w| w.to_string()).collect(),
        kind: Some("multiple".to_string()),
    }
}

pub fn question(category: &str, difficulty: &str, text: &str) -> Question {
    Question {
        question: text.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        correct_answer: "a".to_string(),
        incorrect_answers: "b, c".to_string(),
    }
}

pub const ONE_QUESTION: &str = r#"{"response_code":0,"results":[
    {"type":"multiple","difficulty":"easy","category":"Science: Mathematics",
     "question":"What is 2 &amp; 2?","correct_answer":"4","incorrect_answers":["3","5","22"]}
]}"#;
