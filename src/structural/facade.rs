// Pattern: Facade
// One front desk in front of several subsystems.

use crate::transcript::Transcript;

#[derive(Default)]
pub struct AudioDecoder;

impl AudioDecoder {
    pub fn decode_audio(&self, out: &mut Transcript) {
        out.line("Decoding Audio...");
    }
}

#[derive(Default)]
pub struct VideoDecoder;

impl VideoDecoder {
    pub fn decode_video(&self, out: &mut Transcript) {
        out.line("Decoding Video...");
    }
}

/// Simulated; nothing leaves the process.
#[derive(Default)]
pub struct NetworkStreamer;

impl NetworkStreamer {
    pub fn start_streaming(&self, out: &mut Transcript) {
        out.line("Streaming media with the network...");
    }
}

#[derive(Default)]
pub struct MediaPlayerFacade {
    audio: AudioDecoder,
    video: VideoDecoder,
    network: NetworkStreamer,
}

impl MediaPlayerFacade {
    pub fn new(audio: AudioDecoder, video: VideoDecoder, network: NetworkStreamer) -> Self {
        Self {
            audio,
            video,
            network,
        }
    }

    pub fn play_media(&self, out: &mut Transcript) {
        self.network.start_streaming(out);
        self.audio.decode_audio(out);
        self.video.decode_video(out);
        out.line("Media playback started.");
    }
}

pub fn demo(out: &mut Transcript) {
    let player = MediaPlayerFacade::new(AudioDecoder, VideoDecoder, NetworkStreamer);
    player.play_media(out);
}
