//! Word sources: the random-word web service and fixed lists

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::io::configuration::{
    FETCH_TIMEOUT, OFFLINE_WORDS, USER_AGENT, WORD_API_HOST, WORD_API_PATH, WORD_API_PORT,
};
use crate::io::error::{Result, transport_error};

/// Supplier of candidate words for the puzzle builder
pub trait WordSource {
    /// Fetch up to `count` candidate words
    ///
    /// An empty batch is allowed; the builder counts it as a failed attempt.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error if this attempt failed
    fn fetch_words(&mut self, count: usize) -> Result<Vec<String>>;
}

/// Client for the random-word web service over plain HTTP/1.0
#[derive(Clone, Debug)]
pub struct HttpWordSource {
    /// Service host name
    pub host: String,
    /// Service port
    pub port: u16,
    /// Request path
    pub path: String,
    /// Connect, write and read timeout
    pub timeout: Duration,
}

impl Default for HttpWordSource {
    fn default() -> Self {
        Self {
            host: WORD_API_HOST.to_string(),
            port: WORD_API_PORT,
            path: WORD_API_PATH.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }
}

impl HttpWordSource {
    /// Request text for a batch of `count` words
    pub fn request(&self, count: usize) -> String {
        format!(
            "GET {}?number={count} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {USER_AGENT}\r\nAccept: application/json\r\n\r\n",
            self.path, self.host
        )
    }

    fn connect(&self) -> Result<TcpStream> {
        let addresses = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| transport_error("resolve", &e))?;

        let mut last_error = transport_error("connect", &"host resolved to no addresses");
        for address in addresses {
            match TcpStream::connect_timeout(&address, self.timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => last_error = transport_error("connect", &e),
            }
        }
        Err(last_error)
    }
}

impl WordSource for HttpWordSource {
    fn fetch_words(&mut self, count: usize) -> Result<Vec<String>> {
        let mut stream = self.connect()?;
        stream
            .set_read_timeout(Some(self.timeout))
            .and_then(|()| stream.set_write_timeout(Some(self.timeout)))
            .map_err(|e| transport_error("configure", &e))?;

        stream
            .write_all(self.request(count).as_bytes())
            .map_err(|e| transport_error("send", &e))?;

        let mut buffer = Vec::new();
        stream
            .read_to_end(&mut buffer)
            .map_err(|e| transport_error("receive", &e))?;

        parse_response(&String::from_utf8_lossy(&buffer))
    }
}

/// Extract the word list from a raw HTTP response
///
/// Expects a `200` status line and a body holding a JSON array of strings.
///
/// # Errors
///
/// Returns a `Transport` error for a malformed response, a non-200 status or a body
/// that is not a string array
pub fn parse_response(response: &str) -> Result<Vec<String>> {
    let (head, body) = response
        .split_once("\r\n\r\n")
        .ok_or_else(|| transport_error("response", &"missing header terminator"))?;

    let status_line = head.lines().next().unwrap_or_default();
    let status = status_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| transport_error("response", &format!("bad status line '{status_line}'")))?;
    if status != "200" {
        return Err(transport_error(
            "response",
            &format!("server answered '{status_line}'"),
        ));
    }

    serde_json::from_str::<Vec<String>>(body.trim()).map_err(|e| transport_error("decode", &e))
}

/// Serves words from a fixed list, in order
#[derive(Clone, Debug, Default)]
pub struct StaticWordSource {
    words: VecDeque<String>,
}

impl StaticWordSource {
    /// Source over the given words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Source over the built-in offline list
    pub fn offline() -> Self {
        Self::new(OFFLINE_WORDS.iter().copied())
    }

    /// Words not yet served
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for StaticWordSource {
    fn fetch_words(&mut self, count: usize) -> Result<Vec<String>> {
        let take = count.min(self.words.len());
        Ok(self.words.drain(..take).collect())
    }
}
