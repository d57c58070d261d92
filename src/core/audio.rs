//=========================================================================
// Audio Sink
//
// Fire-and-forget audio collaborator consumed by screens.
//
// The runtime never decodes or mixes audio; it only asks the sink to
// start, stop, and shape playback of handles resolved through the
// asset library. No call returns a value the runtime observes.
//
//=========================================================================

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::assets::SoundHandle;

//=== AudioSink ===========================================================

/// Playback contract implemented by the embedder.
///
/// All methods are fire-and-forget: failures are the sink's business and
/// must never surface into the runtime. Implementations should ignore
/// [`SoundHandle::SILENT`].
pub trait AudioSink: Send {
    /// Starts playing a clip.
    fn play(&mut self, sound: SoundHandle);

    /// Stops whatever is currently playing.
    fn stop(&mut self);

    /// Sets the playback volume, in [0, 1].
    fn set_volume(&mut self, volume: f32);

    /// Whether the next [`Self::play`] should loop continuously.
    fn set_looping(&mut self, looping: bool);
}

//=== NullAudio ===========================================================

/// Sink that discards everything. Default when the embedder registers
/// no audio backend, and handy in tests.
#[derive(Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, sound: SoundHandle) {
        trace!(target: "audio", "NullAudio: play({:?})", sound);
    }

    fn stop(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn set_looping(&mut self, _looping: bool) {}
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_audio_accepts_all_calls() {
        let mut audio = NullAudio;
        audio.set_looping(true);
        audio.set_volume(0.5);
        audio.play(SoundHandle(3));
        audio.play(SoundHandle::SILENT);
        audio.stop();
    }

    #[test]
    fn sink_is_object_safe() {
        let mut boxed: Box<dyn AudioSink> = Box::<NullAudio>::default();
        boxed.play(SoundHandle(1));
    }
}
