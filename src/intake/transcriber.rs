use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use derivative::Derivative;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum IntakeEvent {
    /// Cumulative transcript so far.
    Transcript(String),
    /// Follow-up after the processing delay: the user's statement and the
    /// assistant's reply, appended to the log together.
    Reply { statement: String, reply: String },
}

/// Pacing of the dictation simulation: chunk characters revealed per
/// tick, and how long "processing" holds after the user stops.
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    pub chunk: usize,
    pub tick: Duration,
    pub reply_delay: Duration,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            chunk: 5,
            tick: Duration::from_millis(50),
            reply_delay: Duration::from_millis(1500),
        }
    }
}

/// Simulated speech-to-text for the intake screen. While recording, a
/// dictation task reveals a prepared statement a few characters per tick;
/// stopping cancels the task and, after a processing delay, appends the
/// statement and the assistant's reply to the message log. State is only
/// mutated on the caller's thread, inside poll().
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Transcriber {
    config: TranscriberConfig,
    transcript: String,
    messages: Vec<ChatMessage>,
    recording: bool,
    processing: bool,
    #[derivative(Debug = "ignore")]
    runtime: Handle,
    #[derivative(Debug = "ignore")]
    dictation: Option<JoinHandle<()>>,
    #[derivative(Debug = "ignore")]
    event_tx: Sender<IntakeEvent>,
    #[derivative(Debug = "ignore")]
    event_rx: Receiver<IntakeEvent>,
}

impl Transcriber {
    pub fn new(config: TranscriberConfig, runtime: Handle, greeting: ChatMessage) -> Self {
        let (event_tx, event_rx) = channel();
        Self {
            config,
            transcript: String::new(),
            messages: vec![greeting],
            recording: false,
            processing: false,
            runtime,
            dictation: None,
            event_tx,
            event_rx,
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_busy(&self) -> bool {
        self.recording || self.processing
    }

    /// Begins a recording session, dictating the given statement into the
    /// live transcript. Ignored while already recording or processing.
    pub fn start(&mut self, statement: String) {
        if self.is_busy() {
            return;
        }
        info!("recording started");
        self.transcript.clear();
        self.recording = true;
        self.dictation = Some(self.runtime.spawn(run_dictation(
            statement,
            self.config.clone(),
            self.event_tx.clone(),
        )));
    }

    /// Stops recording: the dictation task is cancelled and the reply is
    /// scheduled after the processing delay. Ignored when not recording.
    pub fn stop(&mut self, reply: String) {
        if !self.recording {
            return;
        }
        info!("recording stopped");
        if let Some(task) = self.dictation.take() {
            task.abort();
        }
        self.recording = false;
        self.processing = true;
        self.runtime.spawn(run_reply(
            self.transcript.clone(),
            reply,
            self.config.clone(),
            self.event_tx.clone(),
        ));
    }

    /// Drains pending events into the transcript/message state. Returns
    /// true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                IntakeEvent::Transcript(text) => {
                    // a late chunk from an aborted dictation is dropped
                    if self.recording {
                        self.transcript = text;
                        changed = true;
                    }
                }
                IntakeEvent::Reply { statement, reply } => {
                    self.messages.push(ChatMessage::user(statement));
                    self.messages.push(ChatMessage::assistant(reply));
                    self.transcript.clear();
                    self.processing = false;
                    changed = true;
                }
            }
        }
        changed
    }
}

/// Reveals the statement chunk characters per tick, as cumulative
/// prefixes. Chunking is by character, not byte, so non-ASCII statements
/// split cleanly.
async fn run_dictation(statement: String, config: TranscriberConfig, events: Sender<IntakeEvent>) {
    let chars: Vec<char> = statement.chars().collect();
    let mut interval = tokio::time::interval(config.tick);
    // the first tick of a tokio interval fires immediately
    interval.tick().await;

    let mut end = 0;
    while end < chars.len() {
        interval.tick().await;
        end = (end + config.chunk).min(chars.len());
        let text: String = chars[..end].iter().collect();
        if events.send(IntakeEvent::Transcript(text)).is_err() {
            return;
        }
    }
}

async fn run_reply(
    statement: String,
    reply: String,
    config: TranscriberConfig,
    events: Sender<IntakeEvent>,
) {
    tokio::time::sleep(config.reply_delay).await;
    let _ = events.send(IntakeEvent::Reply { statement, reply });
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    const STATEMENT: &str = "I have a land dispute with my neighbor.";

    fn fast_config() -> TranscriberConfig {
        TranscriberConfig {
            chunk: 5,
            tick: Duration::from_millis(1),
            reply_delay: Duration::from_millis(10),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn dictation_grows_to_the_full_statement() {
        let (tx, rx) = channel();
        run_dictation(STATEMENT.to_string(), TranscriberConfig::default(), tx).await;

        let mut last_len = 0;
        let mut last_text = String::new();
        for event in rx.try_iter() {
            let IntakeEvent::Transcript(text) = event else {
                panic!("unexpected event");
            };
            assert!(text.chars().count() > last_len);
            assert!(text.starts_with(&last_text));
            last_len = text.chars().count();
            last_text = text;
        }
        assert_eq!(last_text, STATEMENT);
    }

    #[tokio::test(start_paused = true)]
    async fn dictation_chunks_by_character_for_non_ascii() {
        let (tx, rx) = channel();
        run_dictation("मेरी ज़मीन का विवाद है".to_string(), TranscriberConfig::default(), tx).await;

        let last = rx.try_iter().last();
        match last {
            Some(IntakeEvent::Transcript(text)) => assert_eq!(text, "मेरी ज़मीन का विवाद है"),
            other => panic!("expected a transcript event, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_the_processing_delay() {
        let (tx, rx) = channel();
        let started = tokio::time::Instant::now();
        run_reply(
            "statement".to_string(),
            "reply".to_string(),
            TranscriberConfig::default(),
            tx,
        )
        .await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
        match rx.try_iter().next() {
            Some(IntakeEvent::Reply { statement, reply }) => {
                assert_eq!(statement, "statement");
                assert_eq!(reply, "reply");
            }
            other => panic!("expected a reply event, got {other:?}"),
        }
    }

    #[test]
    fn session_appends_statement_and_reply() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut transcriber = Transcriber::new(
            fast_config(),
            rt.handle().clone(),
            ChatMessage::assistant("Hello! Please describe your legal issue."),
        );
        assert_eq!(transcriber.messages().len(), 1);

        transcriber.start(STATEMENT.to_string());
        assert!(transcriber.is_recording());

        let deadline = Instant::now() + Duration::from_secs(5);
        while transcriber.transcript() != STATEMENT {
            assert!(Instant::now() < deadline, "dictation did not finish in time");
            transcriber.poll();
            std::thread::sleep(Duration::from_millis(1));
        }

        transcriber.stop("This appears to be a civil matter.".to_string());
        assert!(!transcriber.is_recording());
        assert!(transcriber.is_processing());

        let deadline = Instant::now() + Duration::from_secs(5);
        while transcriber.is_processing() {
            assert!(Instant::now() < deadline, "reply did not arrive in time");
            transcriber.poll();
            std::thread::sleep(Duration::from_millis(1));
        }

        let messages = transcriber.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, STATEMENT);
        assert_eq!(messages[2].role, Role::Assistant);
        assert!(transcriber.transcript().is_empty());
    }

    #[test]
    fn start_is_ignored_while_busy() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut transcriber = Transcriber::new(
            fast_config(),
            rt.handle().clone(),
            ChatMessage::assistant("Hello!"),
        );
        transcriber.start("first".to_string());
        transcriber.start("second".to_string());
        assert!(transcriber.is_recording());

        // stopping while not recording is also a no-op
        transcriber.stop("reply".to_string());
        transcriber.stop("reply again".to_string());
        assert!(transcriber.is_processing());
    }
}
