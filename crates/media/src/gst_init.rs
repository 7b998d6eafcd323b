use gstreamer as gst;
use gstreamer::prelude::*;

use crate::error::{MediaError, MediaResult};

pub fn init_once() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        gst::init().expect("Failed to initialize GStreamer");
    });
}

pub(crate) fn wait_for_async_done(bus: &gst::Bus, timeout: gst::ClockTime) -> MediaResult<()> {
    loop {
        let Some(msg) = bus.timed_pop(timeout) else {
            return Ok(());
        };
        match msg.view() {
            gst::MessageView::AsyncDone(_) => return Ok(()),
            gst::MessageView::Error(err) => {
                return Err(MediaError::Preroll(format!("{}", err.error())));
            }
            _ => {}
        }
    }
}

pub(crate) fn build_video_caps(target_w: u32, target_h: u32) -> gst::Caps {
    use gstreamer_video as gst_video;
    gst_video::VideoCapsBuilder::new()
        .format(gst_video::VideoFormat::Rgba)
        .width(target_w as i32)
        .height(target_h as i32)
        .build()
}

pub(crate) fn make_element(factory_name: &str) -> MediaResult<gst::Element> {
    gst::ElementFactory::make(factory_name)
        .build()
        .map_err(|e| MediaError::ElementCreate {
            element: factory_name.to_string(),
            reason: e.to_string(),
        })
}

pub(crate) fn connect_decodebin_video_only(decodebin: &gst::Element, videoconvert: &gst::Element) {
    let videoconvert_weak = videoconvert.downgrade();
    decodebin.connect_pad_added(move |_dbin, src_pad| {
        let caps = match src_pad.current_caps() {
            Some(c) => c,
            None => src_pad.query_caps(None),
        };
        let Some(structure) = caps.structure(0) else {
            return;
        };
        if structure.name().as_str().starts_with("video/") {
            if let Some(vc) = videoconvert_weak.upgrade() {
                let sink_pad = vc.static_pad("sink").expect("videoconvert has sink");
                if !sink_pad.is_linked() {
                    let _ = src_pad.link(&sink_pad);
                }
            }
        }
    });
}

pub(crate) fn connect_decodebin_video_and_audio(
    decodebin: &gst::Element,
    videoconvert: &gst::Element,
    audioconvert: &gst::Element,
) {
    let videoconvert_weak = videoconvert.downgrade();
    let audioconvert_weak = audioconvert.downgrade();
    decodebin.connect_pad_added(move |_dbin, src_pad| {
        let caps = match src_pad.current_caps() {
            Some(c) => c,
            None => src_pad.query_caps(None),
        };
        let Some(structure) = caps.structure(0) else {
            return;
        };
        let name = structure.name().as_str();

        if name.starts_with("video/") {
            if let Some(vc) = videoconvert_weak.upgrade() {
                let sink_pad = vc.static_pad("sink").expect("videoconvert has sink");
                if !sink_pad.is_linked() {
                    let _ = src_pad.link(&sink_pad);
                }
            }
        } else if name.starts_with("audio/") {
            if let Some(aconv) = audioconvert_weak.upgrade() {
                let sink_pad = aconv.static_pad("sink").expect("audioconvert has sink");
                if !sink_pad.is_linked() {
                    let _ = src_pad.link(&sink_pad);
                }
            }
        }
    });
}
