//! Scripted classifier for tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ClassificationError, ClassificationOutcome, Classifier, Sentiment};

/// What the next call should answer
pub(crate) enum Reply {
    Label(&'static str),
    Missing,
    Fail,
}

/// Answers calls from a queue of replies; an empty queue answers `Fail`
pub(crate) struct ScriptedClassifier {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers with the same known sentiment
    pub(crate) fn always(sentiment: Sentiment, times: usize) -> Self {
        Self::new((0..times).map(|_| Reply::Label(sentiment.as_str())))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    async fn classify(&self, _feedback: &str) -> Result<ClassificationOutcome, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Fail);

        match reply {
            Reply::Label(label) => Ok(ClassificationOutcome::from_label(Some(label))),
            Reply::Missing => Ok(ClassificationOutcome::from_label(None)),
            Reply::Fail => Err(ClassificationError::Unavailable),
        }
    }
}
