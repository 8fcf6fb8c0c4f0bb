// Raw PCM handling for synthesized speech
//
// The speech backend returns base64 signed 16-bit little-endian mono PCM.
// We decode it into samples and wrap it in a WAV container for playback.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Sample rate of synthesized speech unless the mime type says otherwise.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
pub const SPEECH_CHANNELS: u16 = 1;

#[derive(Debug, Error)]
pub enum PcmError {
    #[error("invalid base64 audio: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("PCM data has odd length {0}, expected whole 16-bit samples")]
    OddLength(usize),
    #[error("no audio samples")]
    Empty,
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),
}

/// Decoded 16-bit PCM audio.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmAudio {
    /// Interleaved samples.
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Read `rate=` from a mime type like `audio/L16;codec=pcm;rate=24000`.
pub fn sample_rate_from_mime(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.trim().parse().ok())
}

impl PcmAudio {
    /// Decode base64 s16le bytes.
    pub fn from_base64(data: &str, sample_rate: u32, channels: u16) -> Result<Self, PcmError> {
        let bytes = STANDARD.decode(data.trim())?;
        Self::from_le_bytes(&bytes, sample_rate, channels)
    }

    pub fn from_le_bytes(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<Self, PcmError> {
        if bytes.is_empty() {
            return Err(PcmError::Empty);
        }
        if bytes.len() % 2 != 0 {
            return Err(PcmError::OddLength(bytes.len()));
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(PcmAudio {
            samples,
            sample_rate,
            channels,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frame_count() as u64 * 1000 / self.sample_rate as u64
    }

    fn spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    /// Encode as an in-memory WAV file.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>, PcmError> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, self.spec())?;
            for &sample in &self.samples {
                writer.write_sample(sample)?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }

    pub fn write_wav(&self, path: &Path) -> Result<(), PcmError> {
        let mut writer = hound::WavWriter::create(path, self.spec())?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(samples: &[i16]) -> String {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_decode_little_endian_samples() {
        let audio = PcmAudio::from_base64(&encode(&[0, 1, -1, i16::MAX, i16::MIN]), 24_000, 1).unwrap();
        assert_eq!(audio.samples, vec![0, 1, -1, i16::MAX, i16::MIN]);
        assert_eq!(audio.frame_count(), 5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(PcmAudio::from_base64("!!!", 24_000, 1), Err(PcmError::Base64(_))));
        assert!(matches!(
            PcmAudio::from_le_bytes(&[1, 2, 3], 24_000, 1),
            Err(PcmError::OddLength(3))
        ));
        assert!(matches!(PcmAudio::from_base64("", 24_000, 1), Err(PcmError::Empty)));
    }

    #[test]
    fn test_duration() {
        let audio = PcmAudio {
            samples: vec![0; 48_000],
            sample_rate: 24_000,
            channels: 1,
        };
        assert_eq!(audio.duration_ms(), 2_000);
    }

    #[test]
    fn test_wav_bytes_readable_by_hound() {
        let audio = PcmAudio::from_base64(&encode(&[10, -10, 300]), SPEECH_SAMPLE_RATE, SPEECH_CHANNELS).unwrap();
        let wav = audio.to_wav_bytes().unwrap();
        assert_eq!(&wav[0..4], b"RIFF");

        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate, 24_000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![10, -10, 300]);
    }

    #[test]
    fn test_write_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speech.wav");
        let audio = PcmAudio {
            samples: vec![1, 2, 3, 4],
            sample_rate: 24_000,
            channels: 1,
        };
        audio.write_wav(&path).unwrap();
        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn test_sample_rate_from_mime() {
        assert_eq!(sample_rate_from_mime("audio/L16;codec=pcm;rate=24000"), Some(24_000));
        assert_eq!(sample_rate_from_mime("audio/pcm"), None);
    }
}
