use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use crate::playlist::MediaRef;

use super::probe::probe_duration;
use super::sink::create_sink_at;
use super::types::{AudioCmd, PlaybackEvent, PlaybackHandle, PlaybackInfo};

/// Sink for the loaded source plus the offset it was built at.
///
/// Sinks rebuilt with `skip_duration` report `get_pos` from zero, so the
/// offset is added back when publishing the position.
struct Loaded {
    media: MediaRef,
    sink: Option<Sink>,
    offset: Duration,
}

impl Loaded {
    fn position(&self) -> Duration {
        self.offset + self.sink.as_ref().map_or(Duration::ZERO, Sink::get_pos)
    }

    fn ended(&self) -> bool {
        self.sink.as_ref().is_none_or(Sink::empty)
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    events: Sender<PlaybackEvent>,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                error!("no audio output device: {e}");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        let mut loaded: Option<Loaded> = None;
        let mut paused = true;
        let mut volume = playback_info.lock().map(|i| i.volume).unwrap_or(1.0);

        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load(media) => {
                        if let Some(old) = loaded.take().and_then(|l| l.sink) {
                            old.stop();
                        }
                        paused = true;

                        let (sink, duration) = match create_sink_at(&stream, &media, Duration::ZERO)
                        {
                            Ok((sink, total)) => {
                                sink.set_volume(volume);
                                (Some(sink), total.or_else(|| probe_duration(&media)))
                            }
                            Err(e) => {
                                warn!("failed to decode {}: {e}", media.path().display());
                                (None, None)
                            }
                        };

                        info!(
                            "loaded {} ({:?})",
                            media.path().display(),
                            duration.unwrap_or_default()
                        );
                        publish(&playback_info, |info| {
                            info.paused = true;
                            info.position = Duration::ZERO;
                            info.duration = duration;
                        });
                        let _ = events.send(PlaybackEvent::MetadataLoaded);
                        loaded = Some(Loaded {
                            media,
                            sink,
                            offset: Duration::ZERO,
                        });
                    }

                    AudioCmd::Play => {
                        let Some(cur) = loaded.as_mut() else {
                            continue;
                        };
                        // A finished source starts over, like a media element.
                        if cur.sink.is_some() && cur.ended() {
                            rebuild(&stream, cur, Duration::ZERO, volume);
                        }
                        if let Some(s) = cur.sink.as_ref() {
                            s.play();
                            paused = false;
                        }
                        let now_paused = paused;
                        publish(&playback_info, |info| info.paused = now_paused);
                    }

                    AudioCmd::Pause => {
                        if let Some(s) = loaded.as_ref().and_then(|l| l.sink.as_ref()) {
                            s.pause();
                        }
                        paused = true;
                        publish(&playback_info, |info| info.paused = true);
                    }

                    AudioCmd::Seek(position) => {
                        let Some(cur) = loaded.as_mut() else {
                            continue;
                        };
                        if cur.sink.is_none() {
                            continue;
                        }

                        let seeked = !cur.ended()
                            && cur
                                .sink
                                .as_ref()
                                .is_some_and(|s| match s.try_seek(position) {
                                    Ok(()) => true,
                                    Err(e) => {
                                        debug!("try_seek failed, rebuilding sink: {e}");
                                        false
                                    }
                                });

                        if seeked {
                            cur.offset = Duration::ZERO;
                        } else {
                            rebuild(&stream, cur, position, volume);
                            if !paused {
                                if let Some(s) = cur.sink.as_ref() {
                                    s.play();
                                }
                            }
                        }

                        publish(&playback_info, |info| info.position = position);
                        let _ = events.send(PlaybackEvent::TimeUpdate);
                    }

                    AudioCmd::SetVolume(v) => {
                        volume = v;
                        if let Some(s) = loaded.as_ref().and_then(|l| l.sink.as_ref()) {
                            s.set_volume(v);
                        }
                    }

                    AudioCmd::Quit => {
                        if let Some(s) = loaded.as_ref().and_then(|l| l.sink.as_ref()) {
                            s.stop();
                        }
                        publish(&playback_info, |info| info.paused = true);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic position report while playing.
                    let Some(cur) = loaded.as_ref() else {
                        continue;
                    };
                    if paused || cur.sink.is_none() {
                        continue;
                    }

                    if cur.ended() {
                        paused = true;
                        publish(&playback_info, |info| {
                            info.paused = true;
                            if let Some(total) = info.duration {
                                info.position = total;
                            }
                        });
                        debug!("playback ended: {}", cur.media.path().display());
                        let _ = events.send(PlaybackEvent::Ended);
                    } else {
                        let position = cur.position();
                        publish(&playback_info, |info| info.position = position);
                        let _ = events.send(PlaybackEvent::TimeUpdate);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

fn publish(handle: &PlaybackHandle, f: impl FnOnce(&mut PlaybackInfo)) {
    if let Ok(mut info) = handle.lock() {
        f(&mut info);
    }
}

/// Replace the loaded sink with a fresh, paused one starting at `position`.
fn rebuild(stream: &OutputStream, cur: &mut Loaded, position: Duration, volume: f32) {
    if let Some(old) = cur.sink.take() {
        old.stop();
    }
    match create_sink_at(stream, &cur.media, position) {
        Ok((sink, _)) => {
            sink.set_volume(volume);
            cur.sink = Some(sink);
            cur.offset = position;
        }
        Err(e) => warn!("failed to decode {}: {e}", cur.media.path().display()),
    }
}
