use std::{io::Cursor, time::Duration};

use crate::error::TtsError;

/// Encode a zero-amplitude mono 16-bit PCM WAV clip
///
/// Always holds at least one sample so players accept it.
pub fn silent_wav(duration: Duration, sample_rate: u32) -> crate::error::Result<Vec<u8>> {
    let frames = u32::try_from(duration.as_micros() * u128::from(sample_rate) / 1_000_000)
        .map_err(|_| TtsError::FallbackAudio(format!("clip of {duration:?} at {sample_rate} Hz is too long")))?
        .max(1);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Vec::new();
    let mut writer = hound::WavWriter::new(Cursor::new(&mut buffer), spec)
        .map_err(|e| TtsError::FallbackAudio(format!("failed to create WAV writer: {e}")))?;

    for _ in 0..frames {
        writer
            .write_sample(0_i16)
            .map_err(|e| TtsError::FallbackAudio(format!("failed to write WAV sample: {e}")))?;
    }

    writer
        .finalize()
        .map_err(|e| TtsError::FallbackAudio(format!("failed to finalize WAV: {e}")))?;

    Ok(buffer)
}
