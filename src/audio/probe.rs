use std::time::Duration;

use lofty::file::AudioFile;
use lofty::probe::Probe;

use crate::playlist::MediaRef;

/// Read the duration from the container headers when the decoder can't tell.
pub(super) fn probe_duration(media: &MediaRef) -> Option<Duration> {
    let tagged = Probe::new(media.reader())
        .guess_file_type()
        .ok()?
        .read()
        .ok()?;
    let duration = tagged.properties().duration();
    (!duration.is_zero()).then_some(duration)
}
