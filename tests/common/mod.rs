#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

/// 정해진 응답을 순서대로 한 번씩 돌려주는 HTTP 스텁 서버
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    /// 서버가 받은 요청 라인 목록 (`GET /volumes?q=... HTTP/1.1`)
    pub fn request_lines(self) -> Vec<String> {
        self.handle.join().expect("stub server panicked")
    }
}

pub struct Reply {
    status: String,
    body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status("200 OK", body)
    }

    pub fn status(status: &str, body: &str) -> Self {
        Self {
            status: status.to_owned(),
            body: body.to_owned(),
        }
    }
}

pub fn serve(replies: Vec<Reply>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}/volumes?q=", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        replies.into_iter()
            .map(|reply| {
                let (mut stream, _) = listener.accept().expect("accept");
                let request_line = read_request_line(&mut stream);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status,
                    reply.body.len(),
                    reply.body
                );
                stream.write_all(response.as_bytes()).expect("write response");
                stream.flush().expect("flush response");
                request_line
            })
            .collect()
    });

    StubServer { base_url, handle }
}

pub fn serve_once(reply: Reply) -> StubServer {
    serve(vec![reply])
}

/// 요청을 받은 뒤 `hold` 동안 아무 응답도 보내지 않는 서버
pub fn serve_silently(hold: Duration) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}/volumes?q=", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request_line = read_request_line(&mut stream);
        thread::sleep(hold);
        vec![request_line]
    });

    StubServer { base_url, handle }
}

/// 아무도 듣고 있지 않은 로컬 주소
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/volumes?q=", addr)
}

fn read_request_line(stream: &mut TcpStream) -> String {
    stream.set_read_timeout(Some(Duration::from_secs(5))).expect("set read timeout");

    let mut received = Vec::new();
    let mut buf = [0u8; 1024];
    while !received.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => received.extend_from_slice(&buf[..n]),
        }
    }

    String::from_utf8_lossy(&received)
        .lines()
        .next()
        .unwrap_or_default()
        .to_owned()
}
