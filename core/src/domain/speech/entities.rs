use bytes::Bytes;

/// MPEG audio exactly as the speech provider returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub bytes: Bytes,
}
