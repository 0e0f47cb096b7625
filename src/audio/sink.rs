//! Utilities for creating `rodio` sinks from shared media bytes.
//!
//! The helper here encapsulates decoding a `MediaRef` and preparing a
//! paused `Sink` at the requested start position.

use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::playlist::MediaRef;

/// Create a paused `Sink` for `media` that starts playback at `start_at`.
///
/// Also returns the decoder's total duration when the format reports one.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    media: &MediaRef,
    start_at: Duration,
) -> Result<(Sink, Option<Duration>), DecoderError> {
    let source = Decoder::new(media.reader())?;
    let total = source.total_duration();

    let sink = Sink::connect_new(handle.mixer());
    // `skip_duration` is our fallback seeking primitive; Duration::ZERO is fine.
    sink.append(source.skip_duration(start_at));
    sink.pause();
    Ok((sink, total))
}
