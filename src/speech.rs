use tracing::debug;

/// Seam to the platform speech service. Playback is fire-and-forget:
/// `speak` replaces any in-progress utterance, `stop` silences playback and
/// is a no-op when nothing is playing.
pub trait SpeechSynth {
    fn speak(&mut self, text: &str);
    fn stop(&mut self);
    fn is_speaking(&self) -> bool;
}

/// Backend that tracks the current utterance without producing audio, for
/// tests and headless sessions.
#[derive(Debug, Default)]
pub struct SilentSpeech {
    current: Option<String>,
}

impl SilentSpeech {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl SpeechSynth for SilentSpeech {
    fn speak(&mut self, text: &str) {
        debug!(chars = text.len(), "speech playback started");
        self.current = Some(text.to_owned());
    }

    fn stop(&mut self) {
        if self.current.take().is_some() {
            debug!("speech playback stopped");
        }
    }

    fn is_speaking(&self) -> bool {
        self.current.is_some()
    }
}
