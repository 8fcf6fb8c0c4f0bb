// Audio output
// Decodes the speech model's raw PCM and writes it out as WAV.

pub mod pcm;
