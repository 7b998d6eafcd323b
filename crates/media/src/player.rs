use std::path::Path;

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app as gst_app;

use crate::error::{MediaError, MediaResult};
use crate::gst_init::*;

/// A decoded frame pulled from the playback sink, scaled to the stage size.
pub struct VideoFrame {
    pub pts_seconds: f64,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Preview pipeline for one video file:
/// filesrc -> decodebin -> videoconvert -> videoscale -> appsink (RGBA),
/// plus audioconvert -> audioresample -> autoaudiosink when the file has
/// an audio stream. Built prerolled and paused at the first frame; the
/// caller drives play/pause/seek and pulls frames non-blockingly.
pub struct PlayerPipeline {
    pipeline: gst::Pipeline,
    appsink: gst_app::AppSink,
    target_w: u32,
    target_h: u32,
    duration_secs: Option<f64>,
}

impl PlayerPipeline {
    pub fn open(path: &Path, target_w: u32, target_h: u32, with_audio: bool) -> MediaResult<Self> {
        init_once();

        let pipeline = gst::Pipeline::new();

        let filesrc = gst::ElementFactory::make("filesrc")
            .property("location", path.to_str().ok_or(MediaError::InvalidPath)?)
            .build()
            .map_err(|e| MediaError::ElementCreate {
                element: "filesrc".to_string(),
                reason: e.to_string(),
            })?;

        let decodebin = make_element("decodebin")?;
        let videoconvert = make_element("videoconvert")?;
        let videoscale = make_element("videoscale")?;

        let video_caps = build_video_caps(target_w, target_h);
        let appsink = gst_app::AppSink::builder()
            .caps(&video_caps)
            .max_buffers(4)
            .drop(true)
            .sync(true)
            .build();

        pipeline
            .add_many([
                &filesrc,
                &decodebin,
                &videoconvert,
                &videoscale,
                appsink.upcast_ref::<gst::Element>(),
            ])
            .map_err(|e| MediaError::Link(e.to_string()))?;

        gst::Element::link_many([&filesrc, &decodebin])
            .map_err(|e| MediaError::Link(e.to_string()))?;
        gst::Element::link_many([
            &videoconvert,
            &videoscale,
            appsink.upcast_ref::<gst::Element>(),
        ])
        .map_err(|e| MediaError::Link(e.to_string()))?;

        if with_audio {
            let audioconvert = make_element("audioconvert")?;
            let audioresample = make_element("audioresample")?;
            let audiosink = make_element("autoaudiosink")?;

            pipeline
                .add_many([&audioconvert, &audioresample, &audiosink])
                .map_err(|e| MediaError::Link(e.to_string()))?;
            gst::Element::link_many([&audioconvert, &audioresample, &audiosink])
                .map_err(|e| MediaError::Link(e.to_string()))?;

            connect_decodebin_video_and_audio(&decodebin, &videoconvert, &audioconvert);
        } else {
            connect_decodebin_video_only(&decodebin, &videoconvert);
        }

        // Preroll: Paused plus AsyncDone is the readiness gate; the file
        // is playable once the first frame reaches the sink.
        if let Err(e) = pipeline.set_state(gst::State::Paused) {
            let _ = pipeline.set_state(gst::State::Null);
            return Err(MediaError::StateChange(e.to_string()));
        }

        let bus = match pipeline.bus() {
            Some(b) => b,
            None => {
                let _ = pipeline.set_state(gst::State::Null);
                return Err(MediaError::Preroll("no bus".to_string()));
            }
        };
        let timeout = gst::ClockTime::from_seconds(10);
        if let Err(e) = wait_for_async_done(&bus, timeout) {
            let _ = pipeline.set_state(gst::State::Null);
            return Err(e);
        }

        let duration_secs: Option<f64> = pipeline
            .query_duration::<gst::ClockTime>()
            .map(|d| d.nseconds() as f64 / 1_000_000_000.0);

        Ok(Self {
            pipeline,
            appsink,
            target_w,
            target_h,
            duration_secs,
        })
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration_secs
    }

    /// The prerolled frame at the current position, for use as the stage
    /// texture while paused.
    pub fn poster_frame(&self) -> MediaResult<image::RgbaImage> {
        let sample = self
            .appsink
            .pull_preroll()
            .map_err(|e| MediaError::Preroll(e.to_string()))?;
        let buffer = sample.buffer().ok_or(MediaError::NoFrame)?;
        let map = buffer
            .map_readable()
            .map_err(|e| MediaError::Preroll(e.to_string()))?;

        let rgba = self.copy_frame_bytes(map.as_slice());
        image::RgbaImage::from_raw(self.target_w, self.target_h, rgba).ok_or(MediaError::NoFrame)
    }

    pub fn play(&self) -> MediaResult<()> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| MediaError::StateChange(e.to_string()))?;
        Ok(())
    }

    pub fn pause(&self) -> MediaResult<()> {
        self.pipeline
            .set_state(gst::State::Paused)
            .map_err(|e| MediaError::StateChange(e.to_string()))?;
        Ok(())
    }

    /// Flushing seek back to zero. Waits for the seek to preroll, then
    /// returns the refreshed frame at the start of the file.
    pub fn seek_to_start(&self) -> MediaResult<image::RgbaImage> {
        self.pipeline
            .seek_simple(
                gst::SeekFlags::FLUSH | gst::SeekFlags::KEY_UNIT,
                gst::ClockTime::ZERO,
            )
            .map_err(|e| MediaError::Seek(e.to_string()))?;

        let bus = self
            .pipeline
            .bus()
            .ok_or_else(|| MediaError::Seek("no bus".to_string()))?;
        wait_for_async_done(&bus, gst::ClockTime::from_seconds(5))
            .map_err(|e| MediaError::Seek(e.to_string()))?;

        self.poster_frame()
    }

    pub fn position_seconds(&self) -> Option<f64> {
        self.pipeline
            .query_position::<gst::ClockTime>()
            .map(|p| p.nseconds() as f64 / 1_000_000_000.0)
    }

    /// Non-blocking pull from the video sink; `None` when no new frame is
    /// due yet. The sink is clock-synced, so frames arrive paced to the
    /// source while playing.
    pub fn try_next_frame(&self) -> Option<VideoFrame> {
        let sample = self.appsink.try_pull_sample(gst::ClockTime::ZERO)?;
        let buffer = sample.buffer()?;

        let pts_seconds = buffer
            .pts()
            .map(|p| p.nseconds() as f64 / 1_000_000_000.0)
            .unwrap_or(0.0);

        let map = buffer.map_readable().ok()?;
        let rgba = self.copy_frame_bytes(map.as_slice());

        Some(VideoFrame {
            pts_seconds,
            width: self.target_w,
            height: self.target_h,
            rgba,
        })
    }

    pub fn is_eos(&self) -> bool {
        self.appsink.is_eos()
    }

    /// Drains pending bus errors so playback failures surface in the log
    /// instead of silently stalling the pipeline.
    pub fn drain_bus_errors(&self) {
        let Some(bus) = self.pipeline.bus() else {
            return;
        };
        while let Some(msg) = bus.pop() {
            if let gst::MessageView::Error(err) = msg.view() {
                tracing::error!(error = %err.error(), "playback pipeline error");
            }
        }
    }

    fn copy_frame_bytes(&self, data: &[u8]) -> Vec<u8> {
        let expected_size = (self.target_w as usize) * (self.target_h as usize) * 4;
        let mut rgba = Vec::with_capacity(expected_size);
        if data.len() >= expected_size {
            rgba.extend_from_slice(&data[..expected_size]);
        } else {
            rgba.extend_from_slice(data);
            rgba.resize(expected_size, 0);
        }
        rgba
    }
}

impl Drop for PlayerPipeline {
    fn drop(&mut self) {
        let _ = self.pipeline.set_state(gst::State::Null);
        let _ = self.pipeline.state(gst::ClockTime::from_seconds(2));
    }
}
